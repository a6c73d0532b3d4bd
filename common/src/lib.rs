//! Catalog model, search criteria URL codec and paginated listing logic shared by the client crates.

extern crate serde;


pub mod product_criteria;
pub mod criteria_url;
pub mod product;
pub mod product_listing;
