/*!
# CSV Parser

Splits CSV text into rows of raw string cells. No typing happens here;
see [`crate::core::TypedValue`] for cell coercion.

## Usage

```rust
use csv_nest::parser::CsvReader;

let rows = CsvReader::new().parse_str("name,city\n\"Doe, John\",Tokyo\n");
assert_eq!(rows[1][0], "Doe, John");
```
*/

pub mod csv_reader;

pub use csv_reader::{CsvReader, Row};
