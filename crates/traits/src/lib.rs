pub mod font;
pub mod measure;

pub use font::{
    FontDescriptor, FontError, FontProvider, FontQuery, FontWeight, InMemoryFontProvider,
    SharedFontData,
};
pub use measure::FontMeasurer;
