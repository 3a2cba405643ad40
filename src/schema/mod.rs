//! Type inference module
//!
//! Maps a JSON value to one of a closed set of field types:
//!
//! - **Bool**: `true` / `false`
//! - **Int64**: integers that fit in an `i64`
//! - **Float64**: every other number
//! - **Pointer**: arrays, as `*<prefix><FieldName>`
//! - **String**: everything else

mod inference;
mod types;

pub use inference::{field_name, TypeInferrer, DEFAULT_TYPE_PREFIX};
pub use types::FieldType;
