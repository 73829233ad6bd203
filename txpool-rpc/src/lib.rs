pub mod api;
pub mod cfg;
pub mod message;
pub mod pool;
pub mod store;
pub mod transaction;
