/*!
# csv-nest

CSV to nested JSON converter. Header names are dotted paths that describe
where each cell lands in the output record, and every cell is typed on the
way in.

## Core Features

- **Quoted CSV** - `"Tokyo, Japan"` and `""` escapes, BOM-aware input
- **Type inference** - null, bool, integer, float, string per cell
- **Nested records** - `address.city` builds objects, `skills.0` builds arrays
- **Keyed output** - each record is stored under its `name` column

## Example

```text
name,age,address.city,skills.0,skills.1
Taro,20,Tokyo,rust,go
```

becomes

```json
{
  "Name": "Address",
  "Version": "1.0",
  "Taro": {
    "age": 20,
    "address": { "city": "Tokyo" },
    "skills": ["rust", "go"]
  }
}
```

## Architecture

```text
csv-nest
├── Parser    - line-oriented CSV reader
├── Core      - errors, typed values, BOM-aware file access
├── Document  - dotted path parsing and assignment
├── Builder   - record assembly and the keyed result document
├── Config    - TOML/YAML converter settings
└── CLI       - argument parsing, logging, output
```

## Library

```rust,no_run
use csv_nest::{convert_file, ConverterConfig};
use std::path::Path;

let report = convert_file(
    Path::new("export.csv"),
    Path::new("export.json"),
    &ConverterConfig::default(),
)?;
println!("{} records", report.records);
# Ok::<(), csv_nest::ConvertError>(())
```
*/

pub mod builder;
pub mod cli_common;
pub mod config;
pub mod core;
pub mod document;
pub mod parser;

// Re-export main types for convenience
pub use builder::{Conversion, ConversionReport, RecordBuilder, ResultDocument};
pub use config::{ConverterConfig, DocumentMetadata};
pub use crate::core::{ConvertError, Result, TypedValue};
pub use document::{ConflictPolicy, PathAssigner, PathError};
pub use parser::{CsvReader, Row};

use cli_common::OutputWriter;
use std::path::Path;
use tracing::info;

/// Convert CSV text held in memory
pub fn convert_str(input: &str, config: &ConverterConfig) -> Result<Conversion> {
    let rows = CsvReader::new().parse_str(input);
    RecordBuilder::new(config.clone()).build(&rows)
}

/// Convert a CSV file without writing anything
pub fn convert_path(input: &Path, config: &ConverterConfig) -> Result<Conversion> {
    let rows = CsvReader::new().read_file(input)?;
    RecordBuilder::new(config.clone()).build(&rows)
}

/// Convert `input` and write the JSON document to `output`.
///
/// The output file is only created once every row converted successfully.
pub fn convert_file(input: &Path, output: &Path, config: &ConverterConfig) -> Result<ConversionReport> {
    let Conversion { document, report } = convert_path(input, config)?;

    let mut writer = OutputWriter::file(output)?;
    writer.write_document(&document)?;
    info!(output = %output.display(), records = report.records, "JSON written");

    Ok(report)
}
