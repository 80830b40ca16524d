pub mod wav;

pub use wav::{
	ChannelLayout, Chunk, ChunkId, FormatChunk, FormatTag, SampleDataType, WavContainer, WavFormat,
};
