//! Filtering, sorting and role-gated display derivation for product and order lists.
//!
//! Everything here is a pure function of its inputs and never touches the store.

pub mod criteria;
pub mod display;
pub mod filter;
pub mod schema;

pub use criteria::{OrderCriteria, ProductCriteria, Sort, SortDirection, SortKey};
pub use display::{present_order, present_product, Highlight, OrderDisplay, PriceDisplay, ProductDisplay};
pub use filter::{filter_orders, filter_products};
pub use schema::{Capability, OrderColumn, ProductColumn, RowAction, ViewSchema};

#[cfg(test)]
pub(crate) mod test_support;
