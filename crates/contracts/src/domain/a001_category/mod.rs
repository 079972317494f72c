pub mod aggregate;
pub mod index;
pub mod raw;

pub use aggregate::{parse_category_id, Category, CategoryId};
pub use index::{
    resolve_product_type, CategoryClassification, CategoryGraphError, CategoryIndex,
};
pub use raw::RawCategory;
