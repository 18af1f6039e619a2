mod collection;
mod io;
mod transform;

pub use collection::CityCollection;
pub use transform::{TransformReport, transform, transform_with_report};
