use qrlabel::{Customer, LabelRequest, SizeMm};

pub fn store_customer() -> Customer {
    Customer {
        id: "SMG1024".to_string(),
        name: "TOKO MAJU JAYA SENTOSA ABADI".to_string(),
        city: "SEMARANG".to_string(),
        sales: String::new(),
        factory: "PABRIK 2".to_string(),
        branch: "BT SMG".to_string(),
        phone: "0812-3456-7890".to_string(),
    }
}

/// The 55×43 mm store label used across the integration tests.
pub fn store_request() -> LabelRequest {
    LabelRequest::from_customer(&store_customer(), SizeMm::new(55.0, 43.0)).expect("payload serializes")
}

pub fn request_with(name: &str, city: &str, sales: &str, branch: &str) -> LabelRequest {
    let mut request = store_request();
    request.name_text = name.to_string();
    request.city_text = city.to_string();
    request.sales_text = sales.to_string();
    request.branch_text = branch.to_string();
    request
}
