//! IEEE 754 binary16 conversion.

/// Rounds `v` to the nearest half-precision value, ties to even.
pub fn to_bits(v: f64) -> u16 {
	let bits = v.to_bits();
	let sign = ((bits >> 48) & 0x8000) as u16;
	let exp = ((bits >> 52) & 0x7FF) as i32;
	let man = bits & 0x000F_FFFF_FFFF_FFFF;

	if exp == 0x7FF {
		let nan = if man != 0 { 0x0200 } else { 0 };
		return sign | 0x7C00 | nan;
	}

	let e = exp - 1023 + 15;
	if e >= 0x1F {
		return sign | 0x7C00;
	}
	if e <= 0 {
		if e < -10 {
			return sign;
		}
		// Subnormal result; a carry out of the mantissa lands on the smallest normal.
		let m = man | (1 << 52);
		return sign | round_shift(m, (43 - e) as u32) as u16;
	}

	let combined = ((e as u64) << 10) + round_shift(man, 42);
	if combined >= 0x7C00 {
		return sign | 0x7C00;
	}
	sign | combined as u16
}

/// Expands half-precision bits to a double. Exact for every input.
pub fn from_bits(h: u16) -> f64 {
	let sign = if h & 0x8000 != 0 { -1.0 } else { 1.0 };
	let exp = i32::from((h >> 10) & 0x1F);
	let man = f64::from(h & 0x03FF);
	let magnitude = match exp {
		0 => man * 2f64.powi(-24),
		0x1F if man == 0.0 => f64::INFINITY,
		0x1F => f64::NAN,
		_ => (1.0 + man / 1024.0) * 2f64.powi(exp - 15),
	};
	sign * magnitude
}

fn round_shift(v: u64, shift: u32) -> u64 {
	if shift >= 64 {
		return 0;
	}
	let quotient = v >> shift;
	let rem = v & ((1 << shift) - 1);
	let halfway = 1 << (shift - 1);
	if rem > halfway || (rem == halfway && quotient & 1 == 1) {
		quotient + 1
	} else {
		quotient
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(0.0, 0x0000)]
	#[case(-0.0, 0x8000)]
	#[case(1.0, 0x3C00)]
	#[case(-2.0, 0xC000)]
	#[case(0.5, 0x3800)]
	#[case(65504.0, 0x7BFF)]
	#[case(65520.0, 0x7C00)]
	#[case(1.0 / 3.0, 0x3555)]
	#[case(2f64.powi(-24), 0x0001)]
	#[case(1e-10, 0x0000)]
	#[case(f64::INFINITY, 0x7C00)]
	#[case(f64::NEG_INFINITY, 0xFC00)]
	fn test_to_bits(#[case] value: f64, #[case] expected: u16) {
		assert_eq!(to_bits(value), expected);
	}

	#[test]
	fn test_nan_stays_nan() {
		assert!(from_bits(to_bits(f64::NAN)).is_nan());
	}

	#[test]
	fn test_from_bits() {
		assert_eq!(from_bits(0x3C00), 1.0);
		assert_eq!(from_bits(0xC000), -2.0);
		assert_eq!(from_bits(0x7BFF), 65504.0);
		assert_eq!(from_bits(0x0001), 2f64.powi(-24));
		assert_eq!(from_bits(0x7C00), f64::INFINITY);
	}

	#[test]
	fn test_every_finite_half_survives() {
		for h in 0..=u16::MAX {
			if (h >> 10) & 0x1F == 0x1F {
				continue;
			}
			assert_eq!(to_bits(from_bits(h)), h, "bits {h:#06x}");
		}
	}
}
