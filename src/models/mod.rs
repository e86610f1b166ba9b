pub mod customer;
pub mod price_bucket;
pub mod purchase;

pub use customer::*;
pub use price_bucket::*;
pub use purchase::*;
