//! Read-side views over the catalog: filtering, search, pagination, and the
//! caller-held view state that ties them together. Everything here is pure;
//! the catalog is never mutated.

pub mod filter;
pub mod page;
pub mod view;

pub use filter::{filter, StockFilter};
pub use page::{paginate, Page};
pub use view::CatalogView;
