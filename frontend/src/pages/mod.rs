pub mod home_page;
pub mod ai_home_page;
pub mod product_list_page;
pub mod product_page;
pub mod liked_products_page;
pub mod mod_panel_page;
