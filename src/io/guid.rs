use super::bytes::{ByteStore, ByteView};
use crate::error::WavResult;
use std::fmt;

/// A 16-byte identifier in the mixed-endian wire layout used by RIFF:
///
/// ```text
/// 0x00: data1 (u32 LE)
/// 0x04: data2 (u16 LE)
/// 0x06: data3 (u16 LE)
/// 0x08: data4 ([u8; 8], stored as-is)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
	pub data1: u32,
	pub data2: u16,
	pub data3: u16,
	pub data4: [u8; 8],
}

impl Guid {
	pub const SIZE: usize = 16;

	pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
		Self { data1, data2, data3, data4 }
	}

	pub fn from_bytes(buf: &[u8]) -> WavResult<Self> {
		let bytes: [u8; Self::SIZE] = buf.window()?;
		Ok(Self {
			data1: bytes[0..4].as_u32_le()?,
			data2: bytes[4..6].as_u16_le()?,
			data3: bytes[6..8].as_u16_le()?,
			data4: bytes[8..16].window()?,
		})
	}

	pub fn to_bytes(&self) -> [u8; Self::SIZE] {
		let mut bytes = [0u8; Self::SIZE];
		bytes[0..4].copy_from_slice(&self.data1.to_le_bytes());
		bytes[4..6].copy_from_slice(&self.data2.to_le_bytes());
		bytes[6..8].copy_from_slice(&self.data3.to_le_bytes());
		bytes[8..16].copy_from_slice(&self.data4);
		bytes
	}

	pub fn store(&self, buf: &mut [u8]) -> WavResult<()> {
		buf.store(self.to_bytes())
	}
}

impl fmt::Display for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let d = &self.data4;
		write!(
			f,
			"{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
			self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
		)
	}
}

impl fmt::Debug for Guid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Guid({})", self)
	}
}
