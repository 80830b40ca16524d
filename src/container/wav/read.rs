use super::WavContainer;
use super::chunk::{Chunk, ChunkId, UnknownChunk};
use crate::error::{WavError, WavResult};
use crate::io::ByteView;
use tracing::{debug, warn};

pub(crate) const RIFF_HEADER_SIZE: usize = 12;

fn duplicate(id: ChunkId) -> WavError {
	WavError::bad_format(format!("the wave stream contains more than one \"{}\" chunk", id))
}

impl WavContainer {
	/// Parses a complete RIFF/WAVE buffer. Any violation aborts the parse.
	pub fn deserialize(buf: &[u8]) -> WavResult<Self> {
		if buf.len() < RIFF_HEADER_SIZE {
			return Err(WavError::bad_format(format!(
				"input is too short for a RIFF header: {} bytes",
				buf.len()
			)));
		}

		if ChunkId::from_slice(&buf[0..4])? != ChunkId::RIFF {
			return Err(WavError::bad_format("input is not in RIFF format"));
		}

		let riff_size = buf[4..8].as_u32_le()?;
		let declared_end = (riff_size as u64).checked_add(8);
		if declared_end != Some(buf.len() as u64) {
			return Err(WavError::bad_format(format!(
				"RIFF size {} does not match the {} bytes that follow the header",
				riff_size,
				buf.len() - 8
			)));
		}

		if ChunkId::from_slice(&buf[8..12])? != ChunkId::WAVE {
			return Err(WavError::bad_format("input is not in WAVE format"));
		}

		let mut format = None;
		let mut data = None;
		let mut fact = None;
		let mut id3 = None;
		let mut list = None;
		let mut others = Vec::new();

		let mut rest = &buf[RIFF_HEADER_SIZE..];
		while !rest.is_empty() {
			let (chunk, consumed) = Chunk::deserialize(rest)?;
			debug!(id = %chunk.id(), bytes = consumed, "read chunk");
			rest = &rest[consumed..];

			match chunk {
				Chunk::Format(c) => {
					if format.replace(c).is_some() {
						return Err(duplicate(ChunkId::FMT));
					}
				}
				Chunk::Data(c) => {
					if data.replace(c).is_some() {
						return Err(duplicate(ChunkId::DATA));
					}
				}
				Chunk::Fact(c) => {
					if fact.replace(c).is_some() {
						return Err(duplicate(ChunkId::FACT));
					}
				}
				Chunk::Id3(c) => {
					if id3.is_some() {
						warn!("extra \"id3 \" chunk kept with the unrecognized chunks");
						others.push(UnknownChunk::new(ChunkId::ID3, c.bytes().to_vec()));
					} else {
						id3 = Some(c);
					}
				}
				Chunk::List(c) => {
					if list.is_some() {
						warn!("extra \"LIST\" chunk kept with the unrecognized chunks");
						others.push(UnknownChunk::new(ChunkId::LIST, c.bytes().to_vec()));
					} else {
						list = Some(c);
					}
				}
				Chunk::Unknown(c) => others.push(c),
			}
		}

		let format = format
			.ok_or_else(|| WavError::bad_format("the wave stream does not contain a \"fmt \" chunk"))?;
		let data =
			data.ok_or_else(|| WavError::bad_format("the wave stream does not contain a \"data\" chunk"))?;

		Self::assemble(format, data, fact, id3, list, others)
	}
}
