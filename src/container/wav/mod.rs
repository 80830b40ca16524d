pub mod chunk;
pub mod extensible;
pub mod format;
pub mod layout;
pub mod read;
pub mod sample;
pub mod write;

pub use chunk::{
	Chunk, ChunkId, DataChunk, FactChunk, Id3TagChunk, ListChunk, RiffChunk, UnknownChunk,
};
pub use extensible::{ExtendedInfo, SUBTYPE_IEEE_FLOAT, SUBTYPE_PCM, resolve_sample_type};
pub use format::{FormatChunk, FormatTag};
pub use layout::ChannelLayout;
pub use sample::SampleDataType;

use crate::error::{WavError, WavResult};
use crate::io::ByteView;
use tracing::warn;

/// Values within this relative distance of a whole frame are treated as that frame.
const FRAME_SNAP_TOLERANCE: f64 = 1e-9;

/// Decoded stream parameters, resolved once when the container is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub channels: u16,
	pub sample_rate: u32,
	pub bits_per_sample: u16,
	pub valid_bits_per_sample: u16,
	pub block_size: u16,
	pub sample_type: SampleDataType,
	pub channel_layout: ChannelLayout,
}

impl WavFormat {
	pub fn bytes_per_sample(&self) -> usize {
		self.sample_type.bytes_per_sample()
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.block_size as usize
	}
}

/// An in-memory RIFF/WAVE file.
///
/// Built only by [`WavContainer::deserialize`]; every view over it is a pure
/// computation and serializing always yields a fresh buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct WavContainer {
	format: FormatChunk,
	data: DataChunk,
	fact: Option<FactChunk>,
	id3: Option<Id3TagChunk>,
	list: Option<ListChunk>,
	others: Vec<UnknownChunk>,
	summary: WavFormat,
	total_frames: u64,
}

impl WavContainer {
	pub(crate) fn assemble(
		format: FormatChunk,
		data: DataChunk,
		fact: Option<FactChunk>,
		id3: Option<Id3TagChunk>,
		list: Option<ListChunk>,
		others: Vec<UnknownChunk>,
	) -> WavResult<Self> {
		if format.sample_rate == 0 {
			return Err(WavError::bad_format("sample rate is zero"));
		}
		if format.channels == 0 {
			return Err(WavError::bad_format("channel count is zero"));
		}

		let sample_type = format.sample_data_type()?;
		let channel_layout = format.channel_layout()?;

		let expected_block = format.channels as usize * sample_type.bytes_per_sample();
		if format.block_size as usize != expected_block {
			warn!(
				block_size = format.block_size,
				expected = expected_block,
				"block size disagrees with channels and sample width"
			);
		}

		let total_frames = match &fact {
			Some(fact) => {
				let from_data = data.len() / (format.block_size.max(1) as usize);
				if from_data as u64 != fact.sample_length as u64 {
					warn!(
						fact = fact.sample_length,
						data = from_data,
						"fact sample length overrides the length of the data chunk"
					);
				}
				fact.sample_length as u64
			}
			None => data.frame_count(format.block_size)?,
		};

		let summary = WavFormat {
			channels: format.channels,
			sample_rate: format.sample_rate,
			bits_per_sample: format.bits_per_sample,
			valid_bits_per_sample: format.valid_bits_per_sample(),
			block_size: format.block_size,
			sample_type,
			channel_layout,
		};

		Ok(Self { format, data, fact, id3, list, others, summary, total_frames })
	}

	pub fn format(&self) -> WavFormat {
		self.summary
	}

	pub fn format_chunk(&self) -> &FormatChunk {
		&self.format
	}

	pub fn data_chunk(&self) -> &DataChunk {
		&self.data
	}

	pub fn fact(&self) -> Option<&FactChunk> {
		self.fact.as_ref()
	}

	pub fn id3(&self) -> Option<&Id3TagChunk> {
		self.id3.as_ref()
	}

	pub fn list(&self) -> Option<&ListChunk> {
		self.list.as_ref()
	}

	pub fn others(&self) -> &[UnknownChunk] {
		&self.others
	}

	pub fn channels(&self) -> u16 {
		self.summary.channels
	}

	pub fn sample_rate(&self) -> u32 {
		self.summary.sample_rate
	}

	pub fn valid_bits_per_sample(&self) -> u16 {
		self.summary.valid_bits_per_sample
	}

	pub fn sample_data_type(&self) -> SampleDataType {
		self.summary.sample_type
	}

	pub fn channel_layout(&self) -> ChannelLayout {
		self.summary.channel_layout
	}

	pub fn sample_data(&self) -> &[u8] {
		self.data.bytes()
	}

	/// Frame count from the `fact` chunk when present, otherwise from the data length.
	pub fn total_frames(&self) -> u64 {
		self.total_frames
	}

	pub fn duration(&self) -> f64 {
		self.time_from_frame(self.total_frames)
	}

	/// `floor(seconds * sample_rate)`, except that a product within a relative
	/// tolerance of 1e-9 of a whole frame snaps to that frame, so
	/// `frame_from_time(time_from_frame(f)) == f`. Negative and NaN inputs give frame 0.
	pub fn frame_from_time(&self, seconds: f64) -> u64 {
		let exact = seconds * self.summary.sample_rate as f64;
		let nearest = exact.round();
		let frame = if (exact - nearest).abs() <= FRAME_SNAP_TOLERANCE * nearest.abs().max(1.0) {
			nearest
		} else {
			exact.floor()
		};
		frame as u64
	}

	/// Start of `frame` in seconds.
	pub fn time_from_frame(&self, frame: u64) -> f64 {
		frame as f64 / self.summary.sample_rate as f64
	}

	pub fn sample_data_region(&self, frame: u64, count: u64) -> WavResult<&[u8]> {
		self.data.region(self.summary.block_size, frame, count)
	}

	fn sample_window(&self, channel: u16, frame: u64, width: usize) -> WavResult<&[u8]> {
		if channel >= self.summary.channels {
			return Err(WavError::invalid_argument(format!(
				"channel {} is out of range for {} channels",
				channel, self.summary.channels
			)));
		}
		if frame >= self.total_frames {
			return Err(WavError::invalid_argument(format!(
				"frame {} is out of range for {} frames",
				frame, self.total_frames
			)));
		}

		let offset = (self.summary.block_size as u64)
			.checked_mul(frame)
			.and_then(|base| base.checked_add(width as u64 * channel as u64))
			.and_then(|offset| usize::try_from(offset).ok());

		offset
			.and_then(|offset| self.data.bytes().get(offset..offset.checked_add(width)?))
			.ok_or_else(|| {
				WavError::invalid_argument(format!(
					"sample (channel {}, frame {}) lies outside the sample data",
					channel, frame
				))
			})
	}

	pub fn sample_u8(&self, channel: u16, frame: u64) -> WavResult<u8> {
		self.sample_window(channel, frame, 1)?.as_u8()
	}

	pub fn sample_i16(&self, channel: u16, frame: u64) -> WavResult<i16> {
		self.sample_window(channel, frame, 2)?.as_i16_le()
	}

	pub fn sample_i24(&self, channel: u16, frame: u64) -> WavResult<i32> {
		self.sample_window(channel, frame, 3)?.as_i24_le()
	}

	pub fn sample_i32(&self, channel: u16, frame: u64) -> WavResult<i32> {
		self.sample_window(channel, frame, 4)?.as_i32_le()
	}

	pub fn sample_i64(&self, channel: u16, frame: u64) -> WavResult<i64> {
		self.sample_window(channel, frame, 8)?.as_i64_le()
	}

	pub fn sample_f32(&self, channel: u16, frame: u64) -> WavResult<f32> {
		self.sample_window(channel, frame, 4)?.as_f32_le()
	}

	pub fn sample_f64(&self, channel: u16, frame: u64) -> WavResult<f64> {
		self.sample_window(channel, frame, 8)?.as_f64_le()
	}

	/// Reads a sample at the resolved sample type, with unsigned 8-bit data
	/// re-centred around zero.
	pub fn sample_value(&self, channel: u16, frame: u64) -> WavResult<f64> {
		let value = match self.summary.sample_type {
			SampleDataType::Unsigned8 => self.sample_u8(channel, frame)? as f64 - 128.0,
			SampleDataType::LittleEndianSigned16 => self.sample_i16(channel, frame)? as f64,
			SampleDataType::LittleEndianSigned24 => self.sample_i24(channel, frame)? as f64,
			SampleDataType::LittleEndianSigned32 => self.sample_i32(channel, frame)? as f64,
			SampleDataType::LittleEndianSigned64 => self.sample_i64(channel, frame)? as f64,
			SampleDataType::LittleEndianFloat32 => self.sample_f32(channel, frame)? as f64,
			SampleDataType::LittleEndianFloat64 => self.sample_f64(channel, frame)?,
		};
		Ok(value)
	}
}
