use crate::container::wav::RiffChunk;
use crate::container::WavContainer;

use super::format::bytes_to_hex;
use super::types::{AudioStreamInfo, ChunkInfo, FileInfo, MediaInfo, ShowOptions};

pub fn analyze_wav(
	container: &WavContainer,
	path: &str,
	serialized: &[u8],
	opts: &ShowOptions,
) -> MediaInfo {
	let file = FileInfo {
		path: path.to_string(),
		duration: container.duration(),
		size: serialized.len(),
	};

	MediaInfo {
		file,
		stream: build_audio_stream(container),
		chunks: collect_chunks(container),
		hex: bytes_to_hex(serialized, opts.hex_limit),
	}
}

fn build_audio_stream(container: &WavContainer) -> AudioStreamInfo {
	let format = container.format();

	AudioStreamInfo {
		codec: format.sample_type.codec_name().to_string(),
		format_tag: container.format_chunk().format_tag.to_string(),
		total_frames: container.total_frames(),
		channels: format.channels,
		sample_rate: format.sample_rate,
		bits_per_sample: format.bits_per_sample,
		valid_bits_per_sample: format.valid_bits_per_sample,
		block_size: format.block_size,
		channel_layout: format.channel_layout.to_string(),
	}
}

/// Chunks in the order they are emitted on serialization.
fn collect_chunks(container: &WavContainer) -> Vec<ChunkInfo> {
	let mut chunks = Vec::new();
	let mut push = |id: String, size: usize| chunks.push(ChunkInfo { id, size });

	let format = container.format_chunk();
	push(format.chunk_id().to_string(), format.total_bytes());
	if let Some(fact) = container.fact() {
		push(fact.chunk_id().to_string(), fact.total_bytes());
	}
	if let Some(id3) = container.id3() {
		push(id3.chunk_id().to_string(), id3.total_bytes());
	}
	if let Some(list) = container.list() {
		push(list.chunk_id().to_string(), list.total_bytes());
	}
	for other in container.others() {
		push(other.chunk_id().to_string(), other.total_bytes());
	}
	let data = container.data_chunk();
	push(data.chunk_id().to_string(), data.total_bytes());

	chunks
}
