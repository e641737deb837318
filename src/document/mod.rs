/*!
# Nested documents

Builds nested JSON records from dotted header paths:

- `address.city` → `{"address": {"city": ...}}`
- `skills.0`     → `{"skills": [...]}`
*/

pub mod assign;
pub mod path;

pub use assign::{ConflictPolicy, PathAssigner, PathError, Shape, DEFAULT_MAX_INDEX};
pub use path::{KeyPath, PathSegment};
