mod catalog;

pub use catalog::{
    present_brand_list, present_category_list, present_product_detail, present_product_list,
};
