//! Catalog API calls and module exports.

pub mod products;
pub use products::ImageFile;

mod named_lookup;
pub use named_lookup::NamedKind;
