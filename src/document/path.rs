//! Dotted header paths (`address.city`, `skills.0`)

use std::fmt;

/// One dot-delimited component of a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> PathSegment<'a> {
    /// Digits-only segments that fit in `usize` are array indices.
    /// `+1`, `-1` and the empty segment are object keys. Digits too long
    /// for `usize` stay a `Key` here but still report [`is_numeric`].
    ///
    /// [`is_numeric`]: PathSegment::is_numeric
    pub fn parse(raw: &'a str) -> Self {
        if is_digits(raw) {
            if let Ok(index) = raw.parse::<usize>() {
                return PathSegment::Index(index);
            }
        }
        PathSegment::Key(raw)
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }

    /// True for any digits-only segment, including ones that overflow `usize`
    pub fn is_numeric(&self) -> bool {
        match self {
            PathSegment::Index(_) => true,
            PathSegment::Key(key) => is_digits(key),
        }
    }
}

fn is_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A header split into segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    segments: Vec<PathSegment<'a>>,
}

impl<'a> KeyPath<'a> {
    /// Splits on `.`. An empty header has no segments.
    pub fn parse(raw: &'a str) -> Self {
        let segments = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split('.').map(PathSegment::parse).collect()
        };
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment<'a>] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&PathSegment<'a>> {
        self.segments.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_kinds() {
        assert_eq!(PathSegment::parse("city"), PathSegment::Key("city"));
        assert_eq!(PathSegment::parse("0"), PathSegment::Index(0));
        assert_eq!(PathSegment::parse("012"), PathSegment::Index(12));
        assert_eq!(PathSegment::parse("-1"), PathSegment::Key("-1"));
        assert_eq!(PathSegment::parse("+1"), PathSegment::Key("+1"));
        assert_eq!(PathSegment::parse("1a"), PathSegment::Key("1a"));
        assert_eq!(PathSegment::parse(""), PathSegment::Key(""));
        assert_eq!(
            PathSegment::parse("99999999999999999999999"),
            PathSegment::Key("99999999999999999999999")
        );
    }

    #[test]
    fn test_key_path_split() {
        let path = KeyPath::parse("orders.1.items.0");
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("orders"),
                PathSegment::Index(1),
                PathSegment::Key("items"),
                PathSegment::Index(0),
            ]
        );
        assert_eq!(path.first(), Some(&PathSegment::Key("orders")));
    }

    #[test]
    fn test_empty_header_has_no_segments() {
        let path = KeyPath::parse("");
        assert!(path.is_empty());
        assert_eq!(path.first(), None);
    }

    #[test]
    fn test_numeric_segments() {
        assert!(PathSegment::parse("7").is_numeric());
        assert!(PathSegment::parse("99999999999999999999999").is_numeric());
        assert!(!PathSegment::parse("-1").is_numeric());
        assert!(!PathSegment::parse("").is_numeric());
        assert_eq!(KeyPath::parse("0.x").first(), Some(&PathSegment::Index(0)));
    }
}
