pub mod entry;
pub mod settings;

pub use entry::*;
pub use settings::*;
