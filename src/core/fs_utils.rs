//! BOM-aware file reading
use super::errors::{ConvertError, Result};
use encoding_rs::UTF_8;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read a text file, stripping a UTF-8 BOM if present.
///
/// A UTF-16 BOM switches decoding to UTF-16; malformed bytes become U+FFFD.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    let (content, encoding, had_errors) = UTF_8.decode(&bytes);

    if encoding != UTF_8 {
        debug!(path = %path.display(), encoding = encoding.name(), "decoded by BOM");
    }
    if had_errors {
        warn!(path = %path.display(), "invalid byte sequences replaced with U+FFFD");
    }

    Ok(content.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_plain_utf8_is_unchanged() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("name,age\n太郎,20\n".as_bytes()).unwrap();

        let content = read_text_file(file.path()).unwrap();
        assert_eq!(content, "name,age\n太郎,20\n");
    }

    #[test]
    fn test_utf16le_bom_is_decoded() {
        let mut file = NamedTempFile::new().unwrap();
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "name".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        file.write_all(&bytes).unwrap();

        assert_eq!(read_text_file(file.path()).unwrap(), "name");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_text_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
