//! CSV output for learned callsign models.

pub mod error;
pub mod table;
pub mod writer;

pub use error::{OutputError, Result};
pub use table::{ModelTable, format_ratio};
pub use writer::{ModelPaths, write_model, write_table};
