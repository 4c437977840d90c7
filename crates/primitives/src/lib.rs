//! Core addressing types for chunk views: ordinals, spans, text units and
//! fixed-width numeric fields.

/// Option loading errors.
pub mod error;
/// Fixed-width numeric field codec.
pub mod numeric;
/// Per-execution delimiters and binary conventions.
pub mod options;
/// Ordinal addressing and resolution.
pub mod ordinal;
/// Half-open unit windows.
pub mod span;
/// Structural text units and the unit chunker.
pub mod units;

pub use error::ConfigError;
pub use numeric::{FieldBytes, FieldLayout, FieldType, FieldValue};
pub use options::ChunkOptions;
pub use ordinal::{IndexChooser, InvalidOrdinal, Ordinal, UnitRange, resolve, resolve_index};
pub use span::{Span, UnitIdx};
pub use units::{DelimitedChunker, Delimiters, TextUnit, UnitChunker, UnitMap};
