pub mod header;
pub mod category_bar;
pub mod product_grid;
pub mod product_image;
pub mod product_modal;
