pub mod attribute_axis;
pub mod branch_key;
pub mod main_category;
pub mod product_type;

pub use attribute_axis::AttributeAxis;
pub use branch_key::BranchKey;
pub use main_category::MainCategory;
pub use product_type::ProductType;
