//! Input decoder module
//!
//! Decodes normalized fixture text into a JSON tree and walks the fixed
//! record path (`[ { "image": { ... } }, ... ]`) to the field maps.

mod decoders;

pub use decoders::{FieldMap, JsonDecoder, DEFAULT_RECORD_KEY};
