//! Query modules for the dashboard SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods
//! returning `Result<T>` with typed models. Responses are cached per
//! parameter set by the connection.

pub mod customers;
pub mod purchase_frequency;
pub mod purchases;

pub use customers::{CustomerQuery, SearchCustomersParams};
pub use purchase_frequency::PurchaseFrequencyQuery;
pub use purchases::CustomerPurchaseQuery;
