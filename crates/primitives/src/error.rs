//! Error types for chunk option loading.

use thiserror::Error;

/// Errors that can occur when loading [`ChunkOptions`](crate::ChunkOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A delimiter collides with another delimiter or with a line break.
	#[error("invalid delimiter for {field}: {value:?}")]
	InvalidDelimiter {
		/// Option name.
		field: &'static str,
		/// Offending value.
		value: char,
	},

	/// The line ending is not a recognized line break.
	#[error("invalid line ending: {0:?} (expected \\n, \\r, \\r\\n, U+2028 or U+2029)")]
	InvalidLineEnding(String),
}

/// Result type for option loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
