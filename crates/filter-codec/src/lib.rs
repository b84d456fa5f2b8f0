//! Field-aware codec for filter expressions.
//!
//! Decoding parses the text with `filter-syntax`, then checks every field path
//! against a [`FieldResolver`]. Resolved fields are returned beside the tree in
//! a [`FieldResolutions`] table rather than stored on it.

pub mod codec;
pub mod operators;
pub mod options;
pub mod resolver;
pub mod schema;

pub use codec::{DecodedFilter, FilterCodec, decode};
pub use operators::OperatorSet;
pub use options::CodecOptions;
pub use resolver::{FieldResolutions, FieldResolver};
pub use schema::{FieldSpec, SchemaField, SchemaFields};
