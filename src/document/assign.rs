/*!
# Path assignment

Places a value inside a nested record by following a dotted header path.
Containers are created on demand: a segment followed by an index gets an
array, any other segment gets an object. Arrays grow to fit the index and
new slots are `null`.

The record root is an object, so a path may not start with an index.
Indices above [`PathAssigner::max_index`] are rejected before anything is
allocated.

When a position already holds the wrong shape, [`PathAssigner::resolve_child`]
decides what happens according to the [`ConflictPolicy`].
*/

use super::path::{KeyPath, PathSegment};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Largest array index a header may use unless configured otherwise
pub const DEFAULT_MAX_INDEX: usize = 10_000;

/// What to do when a path needs a different shape than the one present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Replace the existing value with the required container
    #[default]
    Overwrite,
    /// Fail with [`PathError::Conflict`]
    Reject,
}

/// Shape a position must have for the walk to continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
    /// Final position: anything but a container
    Leaf,
}

impl Shape {
    fn of_next(segment: &PathSegment<'_>) -> Self {
        if segment.is_index() {
            Shape::Array
        } else {
            Shape::Object
        }
    }

    fn fits(self, value: &Value) -> bool {
        match self {
            Shape::Object => value.is_object(),
            Shape::Array => value.is_array(),
            Shape::Leaf => !value.is_object() && !value.is_array(),
        }
    }

    fn empty(self) -> Value {
        match self {
            Shape::Object => Value::Object(Map::new()),
            Shape::Array => Value::Array(Vec::new()),
            Shape::Leaf => Value::Null,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Object => write!(f, "an object"),
            Shape::Array => write!(f, "an array"),
            Shape::Leaf => write!(f, "a value"),
        }
    }
}

/// A header path that cannot be placed in a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Shape mismatch rejected under [`ConflictPolicy::Reject`]
    #[error("`{path}` needs {expected} but found {found}")]
    Conflict {
        path: String,
        expected: Shape,
        found: &'static str,
    },

    #[error("`{path}` starts with index {segment}, but a record is an object")]
    RootIndex { path: String, segment: String },

    #[error("`{path}` uses index {segment}, the limit is {max}")]
    IndexTooLarge {
        path: String,
        segment: String,
        max: usize,
    },
}

/// Writes values into a record object by dotted path
#[derive(Debug, Clone, Copy)]
pub struct PathAssigner {
    policy: ConflictPolicy,
    max_index: usize,
}

impl Default for PathAssigner {
    fn default() -> Self {
        Self::new(ConflictPolicy::default())
    }
}

impl PathAssigner {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self {
            policy,
            max_index: DEFAULT_MAX_INDEX,
        }
    }

    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Checks that `key` can address a position in a record, without
    /// touching any record.
    pub fn check(&self, key: &str) -> Result<(), PathError> {
        self.check_path(&KeyPath::parse(key), key)
    }

    fn check_path(&self, path: &KeyPath<'_>, key: &str) -> Result<(), PathError> {
        if let Some(first) = path.first().filter(|segment| segment.is_numeric()) {
            return Err(PathError::RootIndex {
                path: key.to_string(),
                segment: first.to_string(),
            });
        }

        for segment in path.segments() {
            let fits = match *segment {
                PathSegment::Index(index) => index <= self.max_index,
                PathSegment::Key(_) => !segment.is_numeric(),
            };
            if !fits {
                return Err(self.too_large(key, segment));
            }
        }
        Ok(())
    }

    fn too_large(&self, key: &str, segment: &PathSegment<'_>) -> PathError {
        PathError::IndexTooLarge {
            path: key.to_string(),
            segment: segment.to_string(),
            max: self.max_index,
        }
    }

    /// Assigns `value` at `key` inside `record`.
    ///
    /// The path is checked first, so a rejected path leaves `record`
    /// untouched. An empty key is a no-op.
    pub fn assign(
        &self,
        record: &mut Map<String, Value>,
        key: &str,
        value: Value,
    ) -> Result<(), PathError> {
        let path = KeyPath::parse(key);
        self.check_path(&path, key)?;

        let Some(PathSegment::Key(root_key)) = path.first() else {
            return Ok(());
        };

        let mut slot = record
            .entry(root_key.to_string())
            .or_insert(Value::Null);

        for next in &path.segments()[1..] {
            let container = self.resolve_child(slot, Shape::of_next(next), key)?;
            slot = match *next {
                PathSegment::Key(k) => &mut container[k],
                PathSegment::Index(index) => {
                    if let Value::Array(items) = &mut *container {
                        if items.len() <= index {
                            let len = index
                                .checked_add(1)
                                .ok_or_else(|| self.too_large(key, next))?;
                            items.resize(len, Value::Null);
                        }
                    }
                    &mut container[index]
                }
            };
        }

        let leaf = self.resolve_child(slot, Shape::Leaf, key)?;
        trace!(path = key, "assigned");
        *leaf = value;
        Ok(())
    }

    /// Makes `slot` hold `shape` and returns it.
    ///
    /// `null` counts as empty and is replaced without a conflict. Any other
    /// mismatch is overwritten or rejected depending on the policy. The
    /// returned value always fits `shape`.
    pub fn resolve_child<'a>(
        &self,
        slot: &'a mut Value,
        shape: Shape,
        path: &str,
    ) -> Result<&'a mut Value, PathError> {
        if shape.fits(slot) {
            return Ok(slot);
        }

        if !slot.is_null() {
            let found = json_type_name(slot);
            match self.policy {
                ConflictPolicy::Reject => {
                    return Err(PathError::Conflict {
                        path: path.to_string(),
                        expected: shape,
                        found,
                    });
                }
                ConflictPolicy::Overwrite => {
                    trace!(path, %shape, found, "overwriting mismatched value");
                }
            }
        }

        *slot = shape.empty();
        Ok(slot)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
