/*!
# Builder

Turns parsed CSV rows into the final keyed JSON document.
*/

pub mod document;
pub mod record_builder;

pub use document::{ConversionReport, ResultDocument};
pub use record_builder::{Conversion, RecordBuilder};
