pub mod file_store;
pub mod lock;
pub mod state;
pub mod store;
pub mod zoneinfo;
