mod analyze;
mod format;
mod human;
mod types;

pub use format::{bytes_to_hex, format_duration};
pub use types::{AudioStreamInfo, ChunkInfo, FileInfo, MediaInfo, ShowOptions};

use crate::container::WavContainer;

pub struct Show {
	input_path: String,
	opts: ShowOptions,
}

impl Show {
	pub fn new(input_path: String, opts: ShowOptions) -> Self {
		Self { input_path, opts }
	}

	/// Builds the report for a parsed container and its re-serialized bytes.
	pub fn run(&self, container: &WavContainer, serialized: &[u8]) -> String {
		let info = self.analyze(container, serialized);
		self.render(&info)
	}

	pub fn analyze(&self, container: &WavContainer, serialized: &[u8]) -> MediaInfo {
		analyze::analyze_wav(container, &self.input_path, serialized, &self.opts)
	}

	pub fn render(&self, info: &MediaInfo) -> String {
		human::render(info)
	}
}
