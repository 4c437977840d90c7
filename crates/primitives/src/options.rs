//! Per-execution chunk options.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::units::Delimiters;

const LINE_ENDINGS: [&str; 5] = ["\n", "\r", "\r\n", "\u{2028}", "\u{2029}"];

/// Delimiters, line ending and binary conventions used when addressing chunks.
///
/// Every field may be omitted from TOML; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOptions {
	/// Separates items.
	#[serde(default = "default_item_delimiter")]
	pub item_delimiter: char,
	/// Separates columns.
	#[serde(default = "default_column_delimiter")]
	pub column_delimiter: char,
	/// Separates rows.
	#[serde(default = "default_row_delimiter")]
	pub row_delimiter: char,
	/// Inserted when lines are synthesized.
	#[serde(default = "default_line_ending")]
	pub line_ending: String,
	/// Numeric fields are little-endian.
	#[serde(default)]
	pub little_endian: bool,
	/// Integer fields decode as unsigned.
	#[serde(default)]
	pub unsigned: bool,
}

fn default_item_delimiter() -> char {
	','
}

fn default_column_delimiter() -> char {
	'\u{FFF0}'
}

fn default_row_delimiter() -> char {
	'\u{FFF1}'
}

fn default_line_ending() -> String {
	"\n".to_string()
}

impl Default for ChunkOptions {
	fn default() -> Self {
		Self {
			item_delimiter: default_item_delimiter(),
			column_delimiter: default_column_delimiter(),
			row_delimiter: default_row_delimiter(),
			line_ending: default_line_ending(),
			little_endian: false,
			unsigned: false,
		}
	}
}

impl ChunkOptions {
	/// Parses and validates options from TOML.
	pub fn from_toml_str(src: &str) -> Result<Self> {
		let options: Self = toml::from_str(src)?;
		options.validate()?;
		Ok(options)
	}

	/// Checks that delimiters are distinct and none is a line break, and that
	/// the line ending is one the chunker recognizes.
	pub fn validate(&self) -> Result<()> {
		if !LINE_ENDINGS.contains(&self.line_ending.as_str()) {
			return Err(ConfigError::InvalidLineEnding(self.line_ending.clone()));
		}
		let fields = [
			("item_delimiter", self.item_delimiter),
			("column_delimiter", self.column_delimiter),
			("row_delimiter", self.row_delimiter),
		];
		for (i, &(field, value)) in fields.iter().enumerate() {
			let clashes = fields[..i].iter().any(|&(_, other)| other == value);
			if clashes || matches!(value, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
				return Err(ConfigError::InvalidDelimiter { field, value });
			}
		}
		Ok(())
	}

	/// The delimiter set consumed by a [`UnitChunker`](crate::UnitChunker).
	pub fn delimiters(&self) -> Delimiters {
		Delimiters {
			item: self.item_delimiter,
			column: self.column_delimiter,
			row: self.row_delimiter,
			line_ending: self.line_ending.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_empty_toml_is_default() {
		assert_eq!(ChunkOptions::from_toml_str("").unwrap(), ChunkOptions::default());
	}

	#[test]
	fn test_partial_toml() {
		let options = ChunkOptions::from_toml_str(
			r#"
item_delimiter = ";"
line_ending = "\r\n"
little_endian = true
"#,
		)
		.unwrap();
		assert_eq!(options.item_delimiter, ';');
		assert_eq!(options.line_ending, "\r\n");
		assert!(options.little_endian);
		assert!(!options.unsigned);
		assert_eq!(options.row_delimiter, '\u{FFF1}');
	}

	#[test]
	fn test_delimiters_follow_options() {
		let options = ChunkOptions {
			column_delimiter: '\t',
			..ChunkOptions::default()
		};
		assert_eq!(options.delimiters().column, '\t');
		assert_eq!(options.delimiters().item, ',');
	}

	#[test]
	fn test_rejects_clashing_delimiters() {
		let err = ChunkOptions::from_toml_str("column_delimiter = \",\"").unwrap_err();
		assert!(matches!(
			err,
			ConfigError::InvalidDelimiter {
				field: "column_delimiter",
				value: ','
			}
		));
	}

	#[test]
	fn test_rejects_break_delimiter() {
		let err = ChunkOptions::from_toml_str("item_delimiter = \"\\n\"").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidDelimiter { field: "item_delimiter", .. }));
	}

	#[test]
	fn test_rejects_unknown_line_ending() {
		let err = ChunkOptions::from_toml_str("line_ending = \"--\"").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidLineEnding(_)));
	}

	#[test]
	fn test_rejects_malformed_toml() {
		let err = ChunkOptions::from_toml_str("item_delimiter = ").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}
}
