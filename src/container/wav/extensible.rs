use super::format::FormatTag;
use super::sample::SampleDataType;
use crate::error::{WavError, WavResult};
use crate::io::{ByteStore, ByteView, Guid};
use tracing::debug;

pub const SUBTYPE_PCM: Guid =
	Guid::new(0x00000001, 0x0000, 0x0010, [0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71]);

pub const SUBTYPE_IEEE_FLOAT: Guid =
	Guid::new(0x00000003, 0x0000, 0x0010, [0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71]);

/// The extension block that follows `cbSize` in a `WAVE_FORMAT_EXTENSIBLE`
/// `fmt` chunk.
///
/// ```text
/// 0x00: samples      (u16 LE) valid bits per sample for PCM
/// 0x02: channel_mask (u32 LE)
/// 0x06: sub_format   (GUID, 16 bytes)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedInfo {
	/// `wValidBitsPerSample`, `wSamplesPerBlock` or reserved, depending on the sub-format.
	pub samples: u16,
	pub channel_mask: u32,
	pub sub_format: Guid,
}

impl ExtendedInfo {
	pub const SIZE: usize = 22;

	pub fn new(samples: u16, channel_mask: u32, sub_format: Guid) -> Self {
		Self { samples, channel_mask, sub_format }
	}

	/// Parses the extension block of a `fmt` chunk. Only the extensible tag
	/// carries one, so any other tag is a caller error.
	pub fn deserialize(tag: FormatTag, data: &[u8]) -> WavResult<Self> {
		if tag != FormatTag::Extensible {
			return Err(WavError::invalid_argument(format!(
				"format tag {} has no extended info",
				tag
			)));
		}

		if data.len() != Self::SIZE {
			return Err(WavError::bad_format(format!(
				"extensible format info must be {} bytes, got {}",
				Self::SIZE,
				data.len()
			)));
		}

		let info = Self {
			samples: data[0..2].as_u16_le()?,
			channel_mask: data[2..6].as_u32_le()?,
			sub_format: Guid::from_bytes(&data[6..22])?,
		};

		debug!(
			samples = info.samples,
			channel_mask = info.channel_mask,
			sub_format = %info.sub_format,
			"parsed extensible format info"
		);

		Ok(info)
	}

	/// Writes the block into `buf`, which must be exactly [`Self::SIZE`] bytes.
	pub fn store(&self, buf: &mut [u8]) -> WavResult<()> {
		if buf.len() != Self::SIZE {
			return Err(WavError::invalid_argument(format!(
				"extensible format info needs {} bytes, got {}",
				Self::SIZE,
				buf.len()
			)));
		}
		buf[0..2].store_u16_le(self.samples)?;
		buf[2..6].store_u32_le(self.channel_mask)?;
		self.sub_format.store(&mut buf[6..22])
	}
}

/// Maps bits per sample and sub-format to the concrete sample layout.
pub fn resolve_sample_type(bits_per_sample: u16, info: &ExtendedInfo) -> WavResult<SampleDataType> {
	let resolved = if info.sub_format == SUBTYPE_PCM {
		match bits_per_sample {
			8 => Some(SampleDataType::Unsigned8),
			16 => Some(SampleDataType::LittleEndianSigned16),
			24 => Some(SampleDataType::LittleEndianSigned24),
			32 => Some(SampleDataType::LittleEndianSigned32),
			64 => Some(SampleDataType::LittleEndianSigned64),
			_ => None,
		}
	} else if info.sub_format == SUBTYPE_IEEE_FLOAT {
		match bits_per_sample {
			32 => Some(SampleDataType::LittleEndianFloat32),
			64 => Some(SampleDataType::LittleEndianFloat64),
			_ => None,
		}
	} else {
		return Err(WavError::unsupported(format!("unsupported sub format: {}", info.sub_format)));
	};

	resolved.ok_or_else(|| {
		WavError::unsupported(format!(
			"bitsPerSample={} is not supported for sub format {}",
			bits_per_sample, info.sub_format
		))
	})
}
