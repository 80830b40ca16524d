use crate::container::WavContainer;
use crate::error::{WavError, WavResult};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "riffwave")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input file or glob pattern")]
	pub input: String,

	#[arg(short, long, value_name = "FILE", help = "Write the re-serialized wave to a file or directory")]
	pub output: Option<String>,

	#[arg(
		long,
		value_name = "BYTES",
		default_value_t = 256,
		help = "Number of re-serialized bytes to hex dump"
	)]
	pub hex_limit: usize,

	#[arg(long, value_name = "FRAME", help = "Keep frames starting at this frame")]
	pub from_frame: Option<u64>,

	#[arg(long, value_name = "COUNT", requires = "from_frame", help = "Number of frames to keep")]
	pub frames: Option<u64>,

	#[arg(
		long,
		value_name = "SECONDS",
		conflicts_with = "from_frame",
		help = "Keep audio starting at this time"
	)]
	pub from_time: Option<f64>,

	#[arg(long, value_name = "SECONDS", requires = "from_time", help = "Length of audio to keep")]
	pub duration: Option<f64>,

	#[arg(short, long, help = "Log every chunk read and written")]
	pub verbose: bool,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	pub fn range(&self) -> Range {
		if let Some(from) = self.from_frame {
			return Range::Frames { from, count: self.frames };
		}
		if let Some(from) = self.from_time {
			return Range::Time { from, duration: self.duration };
		}
		Range::Full
	}
}

/// Portion of the input to re-serialize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range {
	Full,
	Frames { from: u64, count: Option<u64> },
	Time { from: f64, duration: Option<f64> },
}

impl Range {
	/// A missing count or duration extends the range to the end of the stream.
	pub fn serialize(&self, container: &WavContainer) -> WavResult<Vec<u8>> {
		match *self {
			Range::Full => container.serialize(),
			Range::Frames { from, count } => {
				let count = count.unwrap_or_else(|| container.total_frames().saturating_sub(from));
				container.serialize_frames(from, count)
			}
			Range::Time { from, duration } => {
				let start = seconds(from)?;
				let length = match duration {
					Some(d) => seconds(d)?,
					None => seconds((container.duration() - from).max(0.0))?,
				};
				container.serialize_time(start, length)
			}
		}
	}
}

fn seconds(value: f64) -> WavResult<Duration> {
	Duration::try_from_secs_f64(value)
		.map_err(|e| WavError::invalid_argument(format!("invalid time {}: {}", value, e)))
}
