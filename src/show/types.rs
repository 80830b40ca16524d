#[derive(Debug, Clone)]
pub struct ShowOptions {
	pub hex_limit: usize,
}

impl Default for ShowOptions {
	fn default() -> Self {
		Self { hex_limit: 256 }
	}
}

#[derive(Debug, Clone)]
pub struct FileInfo {
	pub path: String,
	pub duration: f64,
	pub size: usize,
}

#[derive(Debug, Clone)]
pub struct AudioStreamInfo {
	pub codec: String,
	pub format_tag: String,
	pub total_frames: u64,
	pub channels: u16,
	pub sample_rate: u32,
	pub bits_per_sample: u16,
	pub valid_bits_per_sample: u16,
	pub block_size: u16,
	pub channel_layout: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkInfo {
	pub id: String,
	pub size: usize,
}

#[derive(Debug, Clone)]
pub struct MediaInfo {
	pub file: FileInfo,
	pub stream: AudioStreamInfo,
	pub chunks: Vec<ChunkInfo>,
	pub hex: String,
}
