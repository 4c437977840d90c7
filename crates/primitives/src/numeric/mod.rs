//! Fixed-width numeric fields over binary data.
//!
//! A [`FieldType`] names a width and an integer-or-float interpretation;
//! [`FieldLayout`] adds the signedness and byte order that are only known
//! once a context is available.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub mod half;

/// Encoded field bytes. Fields never exceed eight bytes.
pub type FieldBytes = SmallVec<[u8; 8]>;

/// A fixed-width numeric field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
	TinyInt,
	ShortInt,
	MediumInt,
	LongInt,
	HalfFloat,
	SingleFloat,
	DoubleFloat,
}

impl FieldType {
	pub const ALL: [FieldType; 7] = [
		Self::TinyInt,
		Self::ShortInt,
		Self::MediumInt,
		Self::LongInt,
		Self::HalfFloat,
		Self::SingleFloat,
		Self::DoubleFloat,
	];

	/// Width in bytes.
	pub const fn width(self) -> usize {
		match self {
			Self::TinyInt => 1,
			Self::ShortInt | Self::HalfFloat => 2,
			Self::MediumInt | Self::SingleFloat => 4,
			Self::LongInt | Self::DoubleFloat => 8,
		}
	}

	pub const fn is_float(self) -> bool {
		matches!(self, Self::HalfFloat | Self::SingleFloat | Self::DoubleFloat)
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::TinyInt => "tinyInt",
			Self::ShortInt => "shortInt",
			Self::MediumInt => "mediumInt",
			Self::LongInt => "longInt",
			Self::HalfFloat => "halfFloat",
			Self::SingleFloat => "singleFloat",
			Self::DoubleFloat => "doubleFloat",
		}
	}

	/// Resolves this field kind into a concrete byte layout.
	pub fn layout(self, signed: bool, little_endian: bool) -> FieldLayout {
		FieldLayout {
			width: self.width(),
			float: self.is_float(),
			signed,
			little_endian,
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A decoded field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
	Integer(i64),
	Float(f64),
}

/// Concrete encoding of one field: width, interpretation and byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLayout {
	pub width: usize,
	pub float: bool,
	pub signed: bool,
	pub little_endian: bool,
}

impl FieldLayout {
	/// Encodes an integer. Integer fields keep the low `width` bytes of the
	/// two's complement value; float fields store the nearest float.
	pub fn encode_integer(&self, v: i64) -> FieldBytes {
		if self.float {
			return self.encode_float(v as f64);
		}
		self.put_bits(v as u64)
	}

	/// Encodes a float. Integer fields receive the value truncated toward
	/// zero, saturating at the `i64` range.
	pub fn encode_float(&self, v: f64) -> FieldBytes {
		if !self.float {
			return self.encode_integer(v as i64);
		}
		let bits = match self.width {
			2 => u64::from(half::to_bits(v)),
			4 => u64::from((v as f32).to_bits()),
			_ => v.to_bits(),
		};
		self.put_bits(bits)
	}

	/// Decodes exactly `width` bytes.
	///
	/// Unsigned 64-bit integers that do not fit in `i64` come back as floats.
	pub fn decode(&self, bytes: &[u8]) -> FieldValue {
		debug_assert_eq!(bytes.len(), self.width);
		let bits = self.get_bits(bytes);
		if self.float {
			return FieldValue::Float(match self.width {
				2 => half::from_bits(bits as u16),
				4 => f64::from(f32::from_bits(bits as u32)),
				_ => f64::from_bits(bits),
			});
		}
		let unused = 64 - 8 * self.width as u32;
		if self.signed {
			FieldValue::Integer(((bits << unused) as i64) >> unused)
		} else if let Ok(v) = i64::try_from(bits) {
			FieldValue::Integer(v)
		} else {
			FieldValue::Float(bits as f64)
		}
	}

	fn put_bits(&self, bits: u64) -> FieldBytes {
		let be = bits.to_be_bytes();
		let mut out: FieldBytes = be[8 - self.width..].iter().copied().collect();
		if self.little_endian {
			out.reverse();
		}
		out
	}

	fn get_bits(&self, bytes: &[u8]) -> u64 {
		let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
		if self.little_endian {
			bytes.iter().rev().fold(0, fold)
		} else {
			bytes.iter().fold(0, fold)
		}
	}
}
