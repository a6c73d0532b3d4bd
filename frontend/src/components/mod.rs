pub mod navbar;
pub mod error_boundary;
pub mod loading_indicator;
pub mod notification_toast;
pub mod product_tile;
pub mod filter_bar;
pub mod named_suggestions;
