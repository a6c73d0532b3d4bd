pub mod criteria_param;
pub mod listing_signal;
pub mod notifications;
pub mod product_form;
