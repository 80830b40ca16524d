use super::format::FormatChunk;
use crate::error::{WavError, WavResult};
use crate::io::{ByteStore, ByteView, region};
use std::borrow::Cow;
use std::fmt;

pub const CHUNK_HEADER_SIZE: usize = 8;

static PAD: [u8; 1] = [0];

/// Four ASCII bytes naming a chunk, compared as the little-endian word they
/// form on disk.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(pub [u8; 4]);

impl ChunkId {
	pub const RIFF: Self = Self(*b"RIFF");
	pub const WAVE: Self = Self(*b"WAVE");
	pub const FMT: Self = Self(*b"fmt ");
	pub const DATA: Self = Self(*b"data");
	pub const FACT: Self = Self(*b"fact");
	pub const ID3: Self = Self(*b"id3 ");
	pub const LIST: Self = Self(*b"LIST");

	pub const fn from_u32(value: u32) -> Self {
		Self(value.to_le_bytes())
	}

	pub const fn as_u32(self) -> u32 {
		u32::from_le_bytes(self.0)
	}

	pub fn from_slice(buf: &[u8]) -> WavResult<Self> {
		Ok(Self(buf.window()?))
	}
}

impl fmt::Display for ChunkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &b in &self.0 {
			if b.is_ascii_graphic() || b == b' ' {
				write!(f, "{}", b as char)?;
			} else {
				write!(f, "\\x{:02x}", b)?;
			}
		}
		Ok(())
	}
}

impl fmt::Debug for ChunkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ChunkId(\"{}\")", self)
	}
}

#[inline]
pub fn padded_len(payload_len: usize) -> usize {
	payload_len + (payload_len & 1)
}

/// A chunk header and its payload, borrowed from the enclosing buffer.
#[derive(Debug, Clone, Copy)]
pub struct RawChunk<'a> {
	pub id: ChunkId,
	pub payload: &'a [u8],
	pub total_bytes: usize,
}

pub fn read_chunk(buf: &[u8]) -> WavResult<RawChunk<'_>> {
	if buf.len() < CHUNK_HEADER_SIZE {
		return Err(WavError::bad_format(format!(
			"too short chunk found ({} bytes left), the stream is probably corrupted",
			buf.len()
		)));
	}

	let id = ChunkId::from_slice(&buf[0..4])?;
	let size = buf[4..8].as_u32_le()?;
	let len = usize::try_from(size)
		.map_err(|_| WavError::bad_format(format!("\"{}\" chunk size {} overflows", id, size)))?;

	let payload = region(buf, CHUNK_HEADER_SIZE, len).map_err(|_| {
		WavError::bad_format(format!("the size of the \"{}\" chunk is too large: chunkSize={}", id, size))
	})?;

	let total_bytes = CHUNK_HEADER_SIZE + padded_len(len);
	if total_bytes > buf.len() {
		return Err(WavError::bad_format(format!("the \"{}\" chunk is missing its pad byte", id)));
	}

	Ok(RawChunk { id, payload, total_bytes })
}

pub fn chunk_header(id: ChunkId, payload_len: usize) -> WavResult<[u8; CHUNK_HEADER_SIZE]> {
	let size = u32::try_from(payload_len).map_err(|_| {
		WavError::invalid_argument(format!("\"{}\" payload of {} bytes does not fit in RIFF", id, payload_len))
	})?;

	let mut header = [0u8; CHUNK_HEADER_SIZE];
	header[0..4].store(id.0)?;
	header[4..8].store_u32_le(size)?;
	Ok(header)
}

fn expect_id(found: ChunkId, expected: ChunkId) -> WavResult<()> {
	if found != expected {
		return Err(WavError::invalid_argument(format!(
			"a \"{}\" chunk was passed where a \"{}\" chunk is required",
			found, expected
		)));
	}
	Ok(())
}

/// Shared contract of every chunk kind: parse from a buffer that starts at the
/// chunk header, report the encoded size, and re-emit header, payload and pad.
pub trait RiffChunk: Sized {
	fn chunk_id(&self) -> ChunkId;

	fn payload(&self) -> WavResult<Cow<'_, [u8]>>;

	fn payload_len(&self) -> usize;

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self>;

	fn deserialize(buf: &[u8]) -> WavResult<(Self, usize)> {
		let raw = read_chunk(buf)?;
		let total = raw.total_bytes;
		Ok((Self::from_raw(raw)?, total))
	}

	fn total_bytes(&self) -> usize {
		CHUNK_HEADER_SIZE + padded_len(self.payload_len())
	}

	fn serialize(&self) -> WavResult<Vec<Cow<'_, [u8]>>> {
		encode_segments(self.chunk_id(), self.payload()?)
	}
}

pub fn encode_segments(id: ChunkId, payload: Cow<'_, [u8]>) -> WavResult<Vec<Cow<'_, [u8]>>> {
	let header = chunk_header(id, payload.len())?;
	let odd = payload.len() & 1 != 0;

	let mut segments = Vec::with_capacity(3);
	segments.push(Cow::Owned(header.to_vec()));
	segments.push(payload);
	if odd {
		segments.push(Cow::Borrowed(&PAD[..]));
	}
	Ok(segments)
}

/// Raw sample bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataChunk {
	data: Vec<u8>,
}

impl DataChunk {
	pub fn new(data: Vec<u8>) -> Self {
		Self { data }
	}

	pub fn bytes(&self) -> &[u8] {
		&self.data
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Number of whole frames; the data must be an exact multiple of `block_size`.
	pub fn frame_count(&self, block_size: u16) -> WavResult<u64> {
		if block_size == 0 {
			return Err(WavError::bad_format("block size is zero"));
		}

		let block = block_size as usize;
		if self.data.len() % block != 0 {
			return Err(WavError::bad_format(format!(
				"total size of sample data ({}) is not a multiple of block size ({})",
				self.data.len(),
				block
			)));
		}

		Ok((self.data.len() / block) as u64)
	}

	pub fn region(&self, block_size: u16, frame: u64, count: u64) -> WavResult<&[u8]> {
		let block = block_size as u64;
		let range = frame
			.checked_mul(block)
			.zip(count.checked_mul(block))
			.and_then(|(start, len)| Some((start, start.checked_add(len)?)))
			.filter(|&(_, end)| end <= self.data.len() as u64);

		match range {
			Some((start, end)) => Ok(&self.data[start as usize..end as usize]),
			None => Err(WavError::invalid_argument(format!(
				"{} frames from frame {} are out of range for {} bytes of sample data",
				count,
				frame,
				self.data.len()
			))),
		}
	}

	/// Encodes a data chunk holding only the given frame span.
	pub fn serialize_region(
		&self,
		block_size: u16,
		frame: u64,
		count: u64,
	) -> WavResult<Vec<Cow<'_, [u8]>>> {
		let region = self.region(block_size, frame, count)?;
		encode_segments(ChunkId::DATA, Cow::Borrowed(region))
	}
}

impl RiffChunk for DataChunk {
	fn chunk_id(&self) -> ChunkId {
		ChunkId::DATA
	}

	fn payload(&self) -> WavResult<Cow<'_, [u8]>> {
		Ok(Cow::Borrowed(&self.data))
	}

	fn payload_len(&self) -> usize {
		self.data.len()
	}

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self> {
		expect_id(raw.id, ChunkId::DATA)?;
		Ok(Self::new(raw.payload.to_vec()))
	}
}

/// Authoritative frame count for the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactChunk {
	pub sample_length: u32,
}

impl FactChunk {
	pub const PAYLOAD_SIZE: usize = 4;

	pub fn new(sample_length: u32) -> Self {
		Self { sample_length }
	}
}

impl RiffChunk for FactChunk {
	fn chunk_id(&self) -> ChunkId {
		ChunkId::FACT
	}

	fn payload(&self) -> WavResult<Cow<'_, [u8]>> {
		let mut payload = vec![0u8; Self::PAYLOAD_SIZE];
		payload.store_u32_le(self.sample_length)?;
		Ok(Cow::Owned(payload))
	}

	fn payload_len(&self) -> usize {
		Self::PAYLOAD_SIZE
	}

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self> {
		expect_id(raw.id, ChunkId::FACT)?;
		if raw.payload.len() != Self::PAYLOAD_SIZE {
			return Err(WavError::bad_format(format!(
				"the length of the \"fact\" chunk is incorrect: chunkSize={}",
				raw.payload.len()
			)));
		}
		Ok(Self::new(raw.payload.as_u32_le()?))
	}
}

/// Embedded ID3 tag, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id3TagChunk {
	data: Vec<u8>,
}

impl Id3TagChunk {
	pub fn new(data: Vec<u8>) -> Self {
		Self { data }
	}

	pub fn bytes(&self) -> &[u8] {
		&self.data
	}
}

impl RiffChunk for Id3TagChunk {
	fn chunk_id(&self) -> ChunkId {
		ChunkId::ID3
	}

	fn payload(&self) -> WavResult<Cow<'_, [u8]>> {
		Ok(Cow::Borrowed(&self.data))
	}

	fn payload_len(&self) -> usize {
		self.data.len()
	}

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self> {
		expect_id(raw.id, ChunkId::ID3)?;
		Ok(Self::new(raw.payload.to_vec()))
	}
}

/// `LIST` metadata, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChunk {
	data: Vec<u8>,
}

impl ListChunk {
	pub fn new(data: Vec<u8>) -> Self {
		Self { data }
	}

	pub fn bytes(&self) -> &[u8] {
		&self.data
	}
}

impl RiffChunk for ListChunk {
	fn chunk_id(&self) -> ChunkId {
		ChunkId::LIST
	}

	fn payload(&self) -> WavResult<Cow<'_, [u8]>> {
		Ok(Cow::Borrowed(&self.data))
	}

	fn payload_len(&self) -> usize {
		self.data.len()
	}

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self> {
		expect_id(raw.id, ChunkId::LIST)?;
		Ok(Self::new(raw.payload.to_vec()))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChunk {
	id: ChunkId,
	data: Vec<u8>,
}

impl UnknownChunk {
	pub fn new(id: ChunkId, data: Vec<u8>) -> Self {
		Self { id, data }
	}

	pub fn bytes(&self) -> &[u8] {
		&self.data
	}
}

impl RiffChunk for UnknownChunk {
	fn chunk_id(&self) -> ChunkId {
		self.id
	}

	fn payload(&self) -> WavResult<Cow<'_, [u8]>> {
		Ok(Cow::Borrowed(&self.data))
	}

	fn payload_len(&self) -> usize {
		self.data.len()
	}

	fn from_raw(raw: RawChunk<'_>) -> WavResult<Self> {
		Ok(Self::new(raw.id, raw.payload.to_vec()))
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
	Format(FormatChunk),
	Data(DataChunk),
	Fact(FactChunk),
	Id3(Id3TagChunk),
	List(ListChunk),
	Unknown(UnknownChunk),
}

impl Chunk {
	/// Reads one chunk of any kind, returning it with the bytes it consumed.
	pub fn deserialize(buf: &[u8]) -> WavResult<(Self, usize)> {
		let raw = read_chunk(buf)?;
		let total = raw.total_bytes;

		let chunk = match raw.id {
			ChunkId::FMT => Chunk::Format(FormatChunk::from_raw(raw)?),
			ChunkId::DATA => Chunk::Data(DataChunk::from_raw(raw)?),
			ChunkId::FACT => Chunk::Fact(FactChunk::from_raw(raw)?),
			ChunkId::ID3 => Chunk::Id3(Id3TagChunk::from_raw(raw)?),
			ChunkId::LIST => Chunk::List(ListChunk::from_raw(raw)?),
			_ => Chunk::Unknown(UnknownChunk::from_raw(raw)?),
		};

		Ok((chunk, total))
	}

	pub fn id(&self) -> ChunkId {
		match self {
			Chunk::Format(c) => c.chunk_id(),
			Chunk::Data(c) => c.chunk_id(),
			Chunk::Fact(c) => c.chunk_id(),
			Chunk::Id3(c) => c.chunk_id(),
			Chunk::List(c) => c.chunk_id(),
			Chunk::Unknown(c) => c.chunk_id(),
		}
	}

	pub fn total_bytes(&self) -> usize {
		match self {
			Chunk::Format(c) => c.total_bytes(),
			Chunk::Data(c) => c.total_bytes(),
			Chunk::Fact(c) => c.total_bytes(),
			Chunk::Id3(c) => c.total_bytes(),
			Chunk::List(c) => c.total_bytes(),
			Chunk::Unknown(c) => c.total_bytes(),
		}
	}

	pub fn serialize(&self) -> WavResult<Vec<Cow<'_, [u8]>>> {
		match self {
			Chunk::Format(c) => c.serialize(),
			Chunk::Data(c) => c.serialize(),
			Chunk::Fact(c) => c.serialize(),
			Chunk::Id3(c) => c.serialize(),
			Chunk::List(c) => c.serialize(),
			Chunk::Unknown(c) => c.serialize(),
		}
	}
}
