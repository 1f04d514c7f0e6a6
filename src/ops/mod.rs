pub mod complete;
pub mod entry_ops;
