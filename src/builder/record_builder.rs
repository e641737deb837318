/*!
# Record Builder

Drives a conversion: the first row names the columns, every following row
becomes one nested record keyed by its key column (`name` by default).
*/

use super::document::{ConversionReport, ResultDocument};
use crate::config::{ConverterConfig, NAME_FIELD, VERSION_FIELD};
use crate::core::{ConvertError, Result, TypedValue};
use crate::document::PathAssigner;
use crate::parser::Row;
use serde_json::{Map, Value};
use tracing::{debug, info, trace, warn};

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: ResultDocument,
    pub report: ConversionReport,
}

/// Builds the result document from parsed rows
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    config: ConverterConfig,
    assigner: PathAssigner,
}

impl RecordBuilder {
    pub fn new(config: ConverterConfig) -> Self {
        let assigner = config.path_assigner();
        Self { config, assigner }
    }

    /// Converts all rows. Fails on the first bad row; nothing partial is
    /// returned.
    pub fn build(&self, rows: &[Row]) -> Result<Conversion> {
        let (header_row, data_rows) = match rows {
            [header, data @ ..] if !data.is_empty() => (header, data),
            _ => return Err(ConvertError::EmptyInput { rows: rows.len() }),
        };

        let headers: Vec<&str> = header_row.iter().map(|h| self.clean(h)).collect();
        for (column, header) in headers.iter().enumerate() {
            self.assigner
                .check(header)
                .map_err(|source| ConvertError::InvalidHeader {
                    column: column + 1,
                    source,
                })?;
        }

        let empty_headers = headers.iter().filter(|h| h.is_empty()).count();
        if empty_headers > 0 {
            warn!(count = empty_headers, "empty header names, columns ignored");
        }
        debug!(columns = headers.len(), rows = data_rows.len(), "building records");

        let mut document = ResultDocument::new(&self.config.metadata);
        let mut report = ConversionReport {
            rows_read: data_rows.len(),
            empty_headers,
            ..ConversionReport::default()
        };

        for (index, row) in data_rows.iter().enumerate() {
            // header is row 1
            let row_number = index + 2;
            let mut record = self.build_record(&headers, row, row_number)?;
            let key = self.take_key(&mut record, row_number)?;

            if document.insert(key.clone(), Value::Object(record)).is_some() {
                warn!(row = row_number, key = %key, "duplicate key, earlier record replaced");
                report.duplicates += 1;
            }
        }

        report.records = document.record_count();
        info!(
            records = report.records,
            duplicates = report.duplicates,
            "conversion finished"
        );

        Ok(Conversion { document, report })
    }

    /// One record from one row. Missing trailing cells count as empty,
    /// cells past the last header are ignored.
    fn build_record(
        &self,
        headers: &[&str],
        row: &Row,
        row_number: usize,
    ) -> Result<Map<String, Value>> {
        let mut record = Map::new();

        for (column, header) in headers.iter().enumerate() {
            let raw = row.get(column).map(|cell| self.clean(cell)).unwrap_or("");
            let value = TypedValue::coerce(raw);
            trace!(row = row_number, header, kind = value.type_name(), "cell");

            self.assigner
                .assign(&mut record, header, value.into())
                .map_err(|source| ConvertError::PathConflict {
                    row: row_number,
                    source,
                })?;
        }

        Ok(record)
    }

    /// Removes the key column from `record` and returns its text.
    fn take_key(&self, record: &mut Map<String, Value>, row_number: usize) -> Result<String> {
        let key_field = &self.config.key_field;
        let missing = || ConvertError::MissingKey {
            row: row_number,
            key: key_field.clone(),
        };

        let key = match record.get(key_field.as_str()) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => return Err(missing()),
        };

        if key == NAME_FIELD || key == VERSION_FIELD {
            return Err(ConvertError::ReservedKey {
                row: row_number,
                key,
            });
        }

        record.shift_remove(key_field.as_str());
        Ok(key)
    }

    fn clean<'a>(&self, raw: &'a str) -> &'a str {
        if self.config.trim_whitespace {
            raw.trim()
        } else {
            raw
        }
    }
}
