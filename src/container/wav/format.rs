use super::chunk::{ChunkId, RawChunk, RiffChunk};
use super::extensible::{ExtendedInfo, resolve_sample_type};
use super::layout::ChannelLayout;
use super::sample::SampleDataType;
use crate::error::{WavError, WavResult};
use crate::io::{ByteStore, ByteView};
use std::borrow::Cow;
use std::fmt;

const BASIC_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
	Pcm,
	Extensible,
}

impl FormatTag {
	pub const PCM: u16 = 0x0001;
	pub const EXTENSIBLE: u16 = 0xFFFE;

	pub fn from_u16(value: u16) -> Option<Self> {
		match value {
			Self::PCM => Some(Self::Pcm),
			Self::EXTENSIBLE => Some(Self::Extensible),
			_ => None,
		}
	}

	pub fn to_u16(self) -> u16 {
		match self {
			Self::Pcm => Self::PCM,
			Self::Extensible => Self::EXTENSIBLE,
		}
	}
}

impl fmt::Display for FormatTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pcm => write!(f, "WAVE_FORMAT_PCM"),
			Self::Extensible => write!(f, "WAVE_FORMAT_EXTENSIBLE"),
		}
	}
}

/// The `fmt ` chunk.
///
/// ```text
/// 0x00: format_tag        (u16 LE)
/// 0x02: channels          (u16 LE)
/// 0x04: sample_rate       (u32 LE)
/// 0x08: avg_bytes_per_sec (u32 LE)
/// 0x0C: block_size        (u16 LE) channels * bytes per sample
/// 0x0E: bits_per_sample   (u16 LE)
/// 0x10: ext_size          (u16 LE) extensible only, absent in a bare 16-byte payload
/// 0x12: extended info     (ext_size bytes)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatChunk {
	pub format_tag: FormatTag,
	pub channels: u16,
	pub sample_rate: u32,
	pub avg_bytes_per_sec: u32,
	pub block_size: u16,
	pub bits_per_sample: u16,
	pub extended: Option<ExtendedInfo>,
}

impl FormatChunk {
	pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
		let block_size = channels.saturating_mul(bits_per_sample.div_ceil(8));
		Self {
			format_tag: FormatTag::Pcm,
			channels,
			sample_rate,
			avg_bytes_per_sec: sample_rate.saturating_mul(block_size as u32),
			block_size,
			bits_per_sample,
			extended: None,
		}
	}

	pub fn extensible(
		channels: u16,
		sample_rate: u32,
		bits_per_sample: u16,
		extended: ExtendedInfo,
	) -> Self {
		Self {
			format_tag: FormatTag::Extensible,
			extended: Some(extended),
			..Self::pcm(channels, sample_rate, bits_per_sample)
		}
	}

	pub fn sample_data_type(&self) -> WavResult<SampleDataType> {
		match &self.extended {
			Some(info) => resolve_sample_type(self.bits_per_sample, info),
			None => match self.bits_per_sample {
				8 => Ok(SampleDataType::Unsigned8),
				16 => Ok(SampleDataType::LittleEndianSigned16),
				bits => Err(WavError::unsupported(format!(
					"bitsPerSample={} is not supported without extended info",
					bits
				))),
			},
		}
	}

	pub fn channel_layout(&self) -> WavResult<ChannelLayout> {
		match &self.extended {
			Some(info) => Ok(ChannelLayout::from_mask(info.channel_mask)),
			None => match self.channels {
				1 => Ok(ChannelLayout::MONO),
				2 => Ok(ChannelLayout::STEREO),
				channels => Err(WavError::unsupported(format!(
					"{} channels need an extensible format to describe their layout",
					channels
				))),
			},
		}
	}

	pub fn valid_bits_per_sample(&self) -> u16 {
		match &self.extended {
			Some(info) => info.samples,
			None => self.bits_per_sample,
		}
	}

	fn encode_payload(&self) -> WavResult<Vec<u8>> {
		let mut payload = vec![0u8; self.payload_len()];
		payload[0..2].store_u16_le(self.format_tag.to_u16())?;
		payload[2..4].store_u16_le(self.channels)?;
		payload[4..8].store_u32_le(self.sample_rate)?;
		payload[8..12].store_u32_le(self.avg_bytes_per_sec)?;
		payload[12..14].store_u16_le(self.block_size)?;
		payload[14..16].store_u16_le(self.bits_per_sample)?;

		if let Some(info) = &self.extended {
			payload[16..18].store_u16_le(ExtendedInfo::SIZE as u16)?;
			info.store(&mut payload[18..])?;
		}

		Ok(payload)
	}
}

impl RiffChunk for FormatChunk {
	fn chunk_id(&self) -> ChunkId {
		ChunkId::FMT
	}

	fn payload(&self) -> WavResult<Cow<'_, [u8]>> {
		Ok(Cow::Owned(self.encode_payload()?))
	}

	fn payload_len(&self) -> usize {
		match self.extended {
			Some(_) => BASIC_SIZE + 2 + ExtendedInfo::SIZE,
			None => BASIC_SIZE,
		}
	}

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self> {
		if raw.id != ChunkId::FMT {
			return Err(WavError::invalid_argument(format!(
				"a \"{}\" chunk was passed where a \"fmt \" chunk is required",
				raw.id
			)));
		}

		let buf = raw.payload;
		if buf.len() < BASIC_SIZE {
			return Err(WavError::bad_format(format!(
				"\"fmt \" chunk is too short: chunkSize={}",
				buf.len()
			)));
		}

		let raw_tag = buf[0..2].as_u16_le()?;
		let channels = buf[2..4].as_u16_le()?;
		let sample_rate = buf[4..8].as_u32_le()?;
		let avg_bytes_per_sec = buf[8..12].as_u32_le()?;
		let block_size = buf[12..14].as_u16_le()?;
		let bits_per_sample = buf[14..16].as_u16_le()?;

		let format_tag = FormatTag::from_u16(raw_tag).ok_or_else(|| {
			WavError::unsupported(format!("unsupported WAVE format: formatTag=0x{:04x}", raw_tag))
		})?;

		let rest = &buf[BASIC_SIZE..];
		let extended = match format_tag {
			FormatTag::Pcm => {
				if !rest.is_empty() {
					return Err(WavError::bad_format(format!(
						"wrong size of \"fmt \" chunk: formatTag={}, chunkSize={}",
						format_tag,
						buf.len()
					)));
				}
				None
			}
			FormatTag::Extensible if rest.is_empty() => None,
			FormatTag::Extensible => {
				if rest.len() < 2 {
					return Err(WavError::bad_format(format!(
						"the extensible \"fmt \" chunk has a truncated extension size: chunkSize={}",
						buf.len()
					)));
				}
				let ext_size = rest[0..2].as_u16_le()? as usize;
				if rest.len() - 2 != ext_size {
					return Err(WavError::bad_format(format!(
						"the length of the \"fmt \" chunk is incorrect: chunkSize={}, extSize={}",
						buf.len(),
						ext_size
					)));
				}
				Some(ExtendedInfo::deserialize(format_tag, &rest[2..])?)
			}
		};

		Ok(Self {
			format_tag,
			channels,
			sample_rate,
			avg_bytes_per_sec,
			block_size,
			bits_per_sample,
			extended,
		})
	}
}
