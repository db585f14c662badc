use lopdf::content::Content;
use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

/// The operands of every `Tj` on the page, in content-stream order.
pub fn shown_strings(doc: &LopdfDocument, page_id: ObjectId) -> Vec<String> {
    operations(doc, page_id)
        .into_iter()
        .filter(|(op, _)| op == "Tj")
        .filter_map(|(_, operands)| operands.first().and_then(|o| o.as_str().ok()).map(|s| String::from_utf8_lossy(s).into_owned()))
        .collect()
}

/// Operator names and operands of the page's content stream.
pub fn operations(doc: &LopdfDocument, page_id: ObjectId) -> Vec<(String, Vec<Object>)> {
    let Ok(bytes) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    match Content::decode(&bytes) {
        Ok(content) => content.operations.into_iter().map(|op| (op.operator, op.operands)).collect(),
        Err(_) => Vec::new(),
    }
}

pub fn page_ids(doc: &LopdfDocument) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok().and_then(|o| o.as_dict().ok()),
        other => other.as_dict().ok(),
    }
}

fn page_resources(doc: &LopdfDocument, page_id: ObjectId) -> Option<&Dictionary> {
    let page = doc.get_dictionary(page_id).ok()?;
    resolve_dict(doc, page.get(b"Resources").ok()?)
}

/// Base font names referenced from the page resources.
pub fn font_names(doc: &LopdfDocument, page_id: ObjectId) -> Vec<String> {
    let Some(fonts) = page_resources(doc, page_id)
        .and_then(|r| r.get(b"Font").ok())
        .and_then(|f| resolve_dict(doc, f))
    else {
        return Vec::new();
    };
    let mut names: Vec<String> = fonts
        .iter()
        .filter_map(|(_, font)| resolve_dict(doc, font))
        .filter_map(|font| font.get(b"BaseFont").ok().and_then(|b| b.as_name().ok()))
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    names.sort();
    names
}

/// Object ids of the image XObjects the page can draw.
pub fn image_xobjects(doc: &LopdfDocument, page_id: ObjectId) -> Vec<ObjectId> {
    let Some(xobjects) = page_resources(doc, page_id)
        .and_then(|r| r.get(b"XObject").ok())
        .and_then(|x| resolve_dict(doc, x))
    else {
        return Vec::new();
    };
    xobjects.iter().filter_map(|(_, obj)| obj.as_reference().ok()).collect()
}
