//! Error taxonomy for container and chunk operations.

use thiserror::Error;

use crate::value::ValueType;

/// Errors raised by container and chunk operations.
///
/// Growth past the end of a container is never an error, and deleting or
/// sorting an empty range is a no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChunkError {
	/// The target has neither a native range write nor full replacement.
	#[error("cannot {operation} {target}")]
	MutationNotPermitted {
		/// Operation that was refused.
		operation: &'static str,
		/// Description of the refusing container.
		target: String,
	},

	/// A value could not be converted into the required domain.
	#[error("expected {expected}, got {got}")]
	TypeMismatch {
		/// Required shape.
		expected: &'static str,
		/// Shape actually supplied.
		got: ValueType,
	},

	/// An ordinal did not evaluate to an integer or a symbolic position.
	#[error("malformed range: {0}")]
	MalformedRange(String),

	/// The target does not expose the capability at all.
	#[error("{target} does not support {operation}")]
	Unsupported {
		/// Capability that was requested.
		operation: String,
		/// Description of the container.
		target: String,
	},
}

impl ChunkError {
	pub fn not_permitted(operation: &'static str, target: impl Into<String>) -> Self {
		Self::MutationNotPermitted {
			operation,
			target: target.into(),
		}
	}

	pub fn unsupported(operation: impl Into<String>, target: impl Into<String>) -> Self {
		Self::Unsupported {
			operation: operation.into(),
			target: target.into(),
		}
	}

	pub fn mismatch(expected: &'static str, got: ValueType) -> Self {
		Self::TypeMismatch { expected, got }
	}
}

/// Result type for container and chunk operations.
pub type Result<T> = std::result::Result<T, ChunkError>;
