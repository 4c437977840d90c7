//! Runtime values.
//!
//! [`Value`] is the dynamically typed payload that flows through containers.
//! It also converts between the three element domains: text, list and
//! binary.

use std::fmt::{self, Write as _};

use xom_primitives::Ordinal;

use crate::error::{ChunkError, Result};

/// A dynamically typed runtime value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	#[default]
	Empty,
	Boolean(bool),
	Integer(i64),
	Number(f64),
	String(String),
	List(Vec<Value>),
	Binary(Vec<u8>),
}

impl Value {
	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn list(vals: impl IntoIterator<Item = Value>) -> Self {
		Self::List(vals.into_iter().collect())
	}

	pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
		Self::Binary(bytes.into())
	}

	pub fn get_type(&self) -> ValueType {
		match self {
			Self::Empty => ValueType::Empty,
			Self::Boolean(_) => ValueType::Boolean,
			Self::Integer(_) => ValueType::Integer,
			Self::Number(_) => ValueType::Number,
			Self::String(_) => ValueType::String,
			Self::List(_) => ValueType::List,
			Self::Binary(_) => ValueType::Binary,
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			Self::String(val) => Ok(val),
			other => Err(ChunkError::mismatch("string", other.get_type())),
		}
	}

	pub fn as_list(&self) -> Result<&[Value]> {
		match self {
			Self::List(vals) => Ok(vals),
			other => Err(ChunkError::mismatch("list", other.get_type())),
		}
	}

	pub fn as_binary(&self) -> Result<&[u8]> {
		match self {
			Self::Binary(bytes) => Ok(bytes),
			other => Err(ChunkError::mismatch("binary", other.get_type())),
		}
	}

	/// Renders the value as text. Lists join their elements with
	/// `item_delimiter`; binaries render as uppercase hex.
	pub fn to_text(&self, item_delimiter: char) -> String {
		let mut out = String::new();
		self.write_text(&mut out, item_delimiter);
		out
	}

	fn write_text(&self, out: &mut String, item_delimiter: char) {
		match self {
			Self::Empty => {}
			Self::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
			Self::Integer(i) => {
				let _ = write!(out, "{i}");
			}
			Self::Number(n) => {
				let _ = write!(out, "{n}");
			}
			Self::String(s) => out.push_str(s),
			Self::List(vals) => {
				for (i, val) in vals.iter().enumerate() {
					if i > 0 {
						out.push(item_delimiter);
					}
					val.write_text(out, item_delimiter);
				}
			}
			Self::Binary(bytes) => {
				for b in bytes {
					let _ = write!(out, "{b:02X}");
				}
			}
		}
	}

	/// Views the value as a list: lists as-is, empty as no elements, any
	/// other value as a single element.
	pub fn to_list(&self) -> Vec<Value> {
		match self {
			Self::List(vals) => vals.clone(),
			Self::Empty => Vec::new(),
			other => vec![other.clone()],
		}
	}

	/// Views the value as bytes: binaries as-is, empty as no bytes and
	/// strings parsed as hex.
	pub fn to_binary(&self) -> Result<Vec<u8>> {
		match self {
			Self::Binary(bytes) => Ok(bytes.clone()),
			Self::Empty => Ok(Vec::new()),
			Self::String(s) => parse_hex(s).ok_or_else(|| ChunkError::mismatch("binary", ValueType::String)),
			other => Err(ChunkError::mismatch("binary", other.get_type())),
		}
	}

	/// Converts an evaluated range bound into an ordinal.
	pub fn to_ordinal(&self) -> Result<Ordinal> {
		match self {
			Self::Integer(i) => Ok(Ordinal::Index(*i)),
			Self::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Ok(Ordinal::Index(*n as i64)),
			Self::String(s) => s.parse().map_err(|_| ChunkError::MalformedRange(s.clone())),
			other => Err(ChunkError::MalformedRange(other.to_string())),
		}
	}
}

fn parse_hex(s: &str) -> Option<Vec<u8>> {
	let digits: Vec<u8> = s
		.chars()
		.filter(|c| !c.is_whitespace())
		.map(|c| c.to_digit(16).map(|d| d as u8))
		.collect::<Option<_>>()?;
	if digits.len() % 2 != 0 {
		return None;
	}
	Some(digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_text(','))
	}
}

impl From<bool> for Value {
	fn from(val: bool) -> Self {
		Self::Boolean(val)
	}
}

impl From<i64> for Value {
	fn from(val: i64) -> Self {
		Self::Integer(val)
	}
}

impl From<f64> for Value {
	fn from(val: f64) -> Self {
		Self::Number(val)
	}
}

impl From<&str> for Value {
	fn from(val: &str) -> Self {
		Self::String(val.to_string())
	}
}

impl From<String> for Value {
	fn from(val: String) -> Self {
		Self::String(val)
	}
}

/// Coarse value type used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Empty,
	Boolean,
	Integer,
	Number,
	String,
	List,
	Binary,
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Empty => "empty",
			Self::Boolean => "boolean",
			Self::Integer => "integer",
			Self::Number => "number",
			Self::String => "string",
			Self::List => "list",
			Self::Binary => "binary",
		};
		f.write_str(name)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_text_rendering() {
		let v = Value::list([Value::from(1), Value::from("b"), Value::Empty, Value::from(2.5)]);
		assert_eq!(v.to_text(','), "1,b,,2.5");
		assert_eq!(v.to_text(';'), "1;b;;2.5");
		assert_eq!(Value::binary([0x0A, 0xFF]).to_string(), "0AFF");
		assert_eq!(Value::from(3.0).to_string(), "3");
		assert_eq!(Value::Empty.to_string(), "");
	}

	#[test]
	fn test_list_view() {
		assert_eq!(Value::Empty.to_list(), Vec::<Value>::new());
		assert_eq!(Value::from(7).to_list(), vec![Value::from(7)]);
		assert_eq!(Value::list([Value::from(1)]).to_list(), vec![Value::from(1)]);
	}

	#[rstest]
	#[case(Value::from("0aff"), Ok(vec![0x0A, 0xFF]))]
	#[case(Value::from("DE AD"), Ok(vec![0xDE, 0xAD]))]
	#[case(Value::from(""), Ok(vec![]))]
	#[case(Value::Empty, Ok(vec![]))]
	#[case(Value::binary([1, 2]), Ok(vec![1, 2]))]
	#[case(Value::from("abc"), Err(ChunkError::mismatch("binary", ValueType::String)))]
	#[case(Value::from("zz"), Err(ChunkError::mismatch("binary", ValueType::String)))]
	#[case(Value::from(5), Err(ChunkError::mismatch("binary", ValueType::Integer)))]
	fn test_binary_view(#[case] value: Value, #[case] expected: Result<Vec<u8>>) {
		assert_eq!(value.to_binary(), expected);
	}

	#[rstest]
	#[case(Value::from(3), Ok(Ordinal::Index(3)))]
	#[case(Value::from(-1.0), Ok(Ordinal::Index(-1)))]
	#[case(Value::from("2"), Ok(Ordinal::Index(2)))]
	#[case(Value::from("middle"), Ok(Ordinal::Middle))]
	#[case(Value::from("any"), Ok(Ordinal::Any))]
	#[case(Value::from(1.5), Err(ChunkError::MalformedRange("1.5".into())))]
	#[case(Value::from("abc"), Err(ChunkError::MalformedRange("abc".into())))]
	#[case(Value::Empty, Err(ChunkError::MalformedRange("".into())))]
	fn test_to_ordinal(#[case] value: Value, #[case] expected: Result<Ordinal>) {
		assert_eq!(value.to_ordinal(), expected);
	}
}
