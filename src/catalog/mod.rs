//! Static hamper catalog.
//!
//! The catalog is compiled into the binary and never changes at runtime:
//! there is no lookup, filtering or mutation, only the ordered list.

mod data;
mod product;

pub use data::PRODUCTS;
pub use product::Product;

/// The full catalog in display order.
pub fn products() -> &'static [Product] {
    PRODUCTS
}
