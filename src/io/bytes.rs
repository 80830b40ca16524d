use crate::error::{WavError, WavResult};

fn width_error(expected: usize, actual: usize) -> WavError {
	WavError::invalid_argument(format!("the buffer length must be {} bytes, got {}", expected, actual))
}

#[inline]
fn sign_extend_24(value: u32) -> i32 {
	((value << 8) as i32) >> 8
}

/// Fixed-width decoding over a byte window.
///
/// Every method requires the window to be exactly as wide as the decoded type.
/// A shorter or longer window is a caller error and never a silent truncation.
pub trait ByteView {
	fn window<const N: usize>(&self) -> WavResult<[u8; N]>;

	#[inline]
	fn as_u8(&self) -> WavResult<u8> {
		let [b] = self.window::<1>()?;
		Ok(b)
	}

	#[inline]
	fn as_u16_le(&self) -> WavResult<u16> {
		Ok(u16::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_u16_be(&self) -> WavResult<u16> {
		Ok(u16::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_i16_le(&self) -> WavResult<i16> {
		Ok(i16::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_i16_be(&self) -> WavResult<i16> {
		Ok(i16::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_u24_le(&self) -> WavResult<u32> {
		let [b0, b1, b2] = self.window::<3>()?;
		Ok(u32::from_le_bytes([b0, b1, b2, 0]))
	}

	#[inline]
	fn as_u24_be(&self) -> WavResult<u32> {
		let [b0, b1, b2] = self.window::<3>()?;
		Ok(u32::from_be_bytes([0, b0, b1, b2]))
	}

	#[inline]
	fn as_i24_le(&self) -> WavResult<i32> {
		Ok(sign_extend_24(self.as_u24_le()?))
	}

	#[inline]
	fn as_i24_be(&self) -> WavResult<i32> {
		Ok(sign_extend_24(self.as_u24_be()?))
	}

	#[inline]
	fn as_u32_le(&self) -> WavResult<u32> {
		Ok(u32::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_u32_be(&self) -> WavResult<u32> {
		Ok(u32::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_i32_le(&self) -> WavResult<i32> {
		Ok(i32::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_i32_be(&self) -> WavResult<i32> {
		Ok(i32::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_u64_le(&self) -> WavResult<u64> {
		Ok(u64::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_u64_be(&self) -> WavResult<u64> {
		Ok(u64::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_i64_le(&self) -> WavResult<i64> {
		Ok(i64::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_i64_be(&self) -> WavResult<i64> {
		Ok(i64::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_f32_le(&self) -> WavResult<f32> {
		Ok(f32::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_f32_be(&self) -> WavResult<f32> {
		Ok(f32::from_be_bytes(self.window()?))
	}

	#[inline]
	fn as_f64_le(&self) -> WavResult<f64> {
		Ok(f64::from_le_bytes(self.window()?))
	}

	#[inline]
	fn as_f64_be(&self) -> WavResult<f64> {
		Ok(f64::from_be_bytes(self.window()?))
	}
}

impl ByteView for [u8] {
	#[inline]
	fn window<const N: usize>(&self) -> WavResult<[u8; N]> {
		<[u8; N]>::try_from(self).map_err(|_| width_error(N, self.len()))
	}
}

/// Fixed-width encoding into a byte window, the exact inverse of [`ByteView`].
pub trait ByteStore {
	fn store<const N: usize>(&mut self, bytes: [u8; N]) -> WavResult<()>;

	#[inline]
	fn store_u8(&mut self, value: u8) -> WavResult<()> {
		self.store([value])
	}

	#[inline]
	fn store_u16_le(&mut self, value: u16) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_u16_be(&mut self, value: u16) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	#[inline]
	fn store_i16_le(&mut self, value: i16) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_i16_be(&mut self, value: i16) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	fn store_i24_le(&mut self, value: i32) -> WavResult<()> {
		check_i24(value)?;
		let [b0, b1, b2, _] = value.to_le_bytes();
		self.store([b0, b1, b2])
	}

	fn store_i24_be(&mut self, value: i32) -> WavResult<()> {
		check_i24(value)?;
		let [_, b1, b2, b3] = value.to_be_bytes();
		self.store([b1, b2, b3])
	}

	#[inline]
	fn store_u32_le(&mut self, value: u32) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_u32_be(&mut self, value: u32) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	#[inline]
	fn store_i32_le(&mut self, value: i32) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_i32_be(&mut self, value: i32) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	#[inline]
	fn store_u64_le(&mut self, value: u64) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_u64_be(&mut self, value: u64) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	#[inline]
	fn store_i64_le(&mut self, value: i64) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_i64_be(&mut self, value: i64) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	#[inline]
	fn store_f32_le(&mut self, value: f32) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_f32_be(&mut self, value: f32) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}

	#[inline]
	fn store_f64_le(&mut self, value: f64) -> WavResult<()> {
		self.store(value.to_le_bytes())
	}

	#[inline]
	fn store_f64_be(&mut self, value: f64) -> WavResult<()> {
		self.store(value.to_be_bytes())
	}
}

impl ByteStore for [u8] {
	#[inline]
	fn store<const N: usize>(&mut self, bytes: [u8; N]) -> WavResult<()> {
		if self.len() != N {
			return Err(width_error(N, self.len()));
		}
		self.copy_from_slice(&bytes);
		Ok(())
	}
}

fn check_i24(value: i32) -> WavResult<()> {
	const MIN: i32 = -(1 << 23);
	const MAX: i32 = (1 << 23) - 1;
	if !(MIN..=MAX).contains(&value) {
		return Err(WavError::invalid_argument(format!("{} does not fit in 24 bits", value)));
	}
	Ok(())
}

/// Borrows `len` bytes at `offset`, failing with a bad-format error when the
/// region does not lie inside `buf`.
pub fn region(buf: &[u8], offset: usize, len: usize) -> WavResult<&[u8]> {
	offset
		.checked_add(len)
		.and_then(|end| buf.get(offset..end))
		.ok_or_else(|| {
			WavError::bad_format(format!(
				"{} bytes at offset {} run past the end of a {}-byte buffer",
				len,
				offset,
				buf.len()
			))
		})
}
