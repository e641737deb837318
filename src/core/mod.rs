/*!
# Core Module

Core functionality for csv-nest: error types, typed cell values
and BOM-aware file access.
*/

pub mod errors;
pub mod fs_utils;
pub mod value;

pub use errors::{ConvertError, ErrorKind, Result};
pub use fs_utils::read_text_file;
pub use value::TypedValue;
