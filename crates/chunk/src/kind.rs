use std::fmt;

use xom_data::Domain;
use xom_primitives::{FieldType, TextUnit};

/// What a chunk view addresses inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
	/// A structural text unit, delimited per the context.
	Text(TextUnit),
	/// A list element.
	Element,
	/// A single byte.
	Byte,
	/// A fixed-width numeric field over bytes. `signed` overrides the
	/// context's signedness when set.
	Field { ty: FieldType, signed: Option<bool> },
}

impl ChunkKind {
	pub const fn field(ty: FieldType) -> Self {
		Self::Field { ty, signed: None }
	}

	/// The element domain this kind reads and writes.
	pub const fn domain(self) -> Domain {
		match self {
			Self::Text(_) => Domain::Text,
			Self::Element => Domain::List,
			Self::Byte | Self::Field { .. } => Domain::Binary,
		}
	}

	/// Whether a chunk of this kind can serve sub-range operations for its
	/// domain. Numeric fields decode to scalars and cannot.
	pub const fn has_native_domain(self) -> bool {
		!matches!(self, Self::Field { .. })
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Text(unit) => unit.name(),
			Self::Element => "element",
			Self::Byte => "byte",
			Self::Field { ty, .. } => ty.name(),
		}
	}
}

impl fmt::Display for ChunkKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field { signed: Some(true), .. } => write!(f, "signed {}", self.name()),
			Self::Field { signed: Some(false), .. } => write!(f, "unsigned {}", self.name()),
			_ => f.write_str(self.name()),
		}
	}
}
