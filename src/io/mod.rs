//! I/O module
//!
//! Handles CSV script parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, summary serialization)
//! - `script_reader` - Streaming script reader with iterator interface

pub mod csv_format;
pub mod script_reader;

pub use csv_format::{convert_script_record, write_accounts_csv, Command, ScriptRecord};
pub use script_reader::{ScriptLine, ScriptReader};
