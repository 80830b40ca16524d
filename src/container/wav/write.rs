use super::WavContainer;
use super::chunk::{ChunkId, RiffChunk};
use super::read::RIFF_HEADER_SIZE;
use crate::error::{WavError, WavResult};
use crate::io::ByteStore;
use std::borrow::Cow;
use std::time::Duration;
use tracing::{debug, trace, warn};

impl WavContainer {
	/// Re-encodes the whole container.
	pub fn serialize(&self) -> WavResult<Vec<u8>> {
		self.serialize_with_data(self.data.serialize()?)
	}

	/// Re-encodes the container with a data chunk holding only `count` frames
	/// starting at `from`. Every other chunk is emitted unchanged.
	pub fn serialize_frames(&self, from: u64, count: u64) -> WavResult<Vec<u8>> {
		debug!(from, count, "serializing frame range");
		if let Some(fact) = &self.fact {
			warn!(
				fact = fact.sample_length,
				count,
				"\"fact\" chunk is copied unchanged and still describes the whole stream"
			);
		}
		self.serialize_with_data(self.data.serialize_region(self.summary.block_size, from, count)?)
	}

	/// Like [`serialize_frames`](Self::serialize_frames), with the range given in time.
	pub fn serialize_time(&self, from: Duration, length: Duration) -> WavResult<Vec<u8>> {
		let end = from.checked_add(length).ok_or_else(|| {
			WavError::invalid_argument(format!("time range {:?} + {:?} overflows", from, length))
		})?;

		let frame_from = self.frame_from_time(from.as_secs_f64());
		let frame_to = self.frame_from_time(end.as_secs_f64());
		self.serialize_frames(frame_from, frame_to.saturating_sub(frame_from))
	}

	/// Emits `fmt`, then `fact`, `id3`, `LIST` and unrecognized chunks in read
	/// order, then the given data chunk, inside a fresh RIFF/WAVE header.
	fn serialize_with_data<'a>(&'a self, data: Vec<Cow<'a, [u8]>>) -> WavResult<Vec<u8>> {
		let mut segments = self.format.serialize()?;
		if let Some(fact) = &self.fact {
			segments.extend(fact.serialize()?);
		}
		if let Some(id3) = &self.id3 {
			segments.extend(id3.serialize()?);
		}
		if let Some(list) = &self.list {
			segments.extend(list.serialize()?);
		}
		for other in &self.others {
			segments.extend(other.serialize()?);
		}
		segments.extend(data);

		let body: usize = segments.iter().map(|segment| segment.len()).sum();
		let riff_size = body
			.checked_add(4)
			.and_then(|size| u32::try_from(size).ok())
			.ok_or_else(|| {
				WavError::invalid_argument(format!("{} bytes of chunks do not fit in a RIFF file", body))
			})?;

		let mut header = [0u8; RIFF_HEADER_SIZE];
		header[0..4].store(ChunkId::RIFF.0)?;
		header[4..8].store_u32_le(riff_size)?;
		header[8..12].store(ChunkId::WAVE.0)?;

		let mut out = Vec::with_capacity(RIFF_HEADER_SIZE + body);
		out.extend_from_slice(&header);
		for segment in &segments {
			trace!(bytes = segment.len(), "segment");
			out.extend_from_slice(segment);
		}

		debug!(bytes = out.len(), "serialized wave container");
		Ok(out)
	}
}
