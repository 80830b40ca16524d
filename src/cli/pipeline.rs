use super::args::Range;
use crate::container::WavContainer;
use crate::error::{WavError, WavResult};
use crate::show::{Show, ShowOptions};
use std::path::Path;
use tracing::{info, warn};

pub fn load(path: &str) -> WavResult<WavContainer> {
	let bytes = std::fs::read(path)?;
	info!(path, bytes = bytes.len(), "loaded wave file");
	WavContainer::deserialize(&bytes)
}

pub struct Pipeline {
	input_path: String,
	output_path: Option<String>,
	range: Range,
	opts: ShowOptions,
}

impl Pipeline {
	pub fn new(
		input_path: String,
		output_path: Option<String>,
		range: Range,
		opts: ShowOptions,
	) -> Self {
		Self { input_path, output_path, range, opts }
	}

	/// Parses the input, prints its metadata and a dump of the re-serialized
	/// bytes, and writes those bytes to the output path when one is given.
	pub fn run(&self) -> WavResult<String> {
		let container = load(&self.input_path)?;
		let serialized = self.range.serialize(&container)?;

		let show = Show::new(self.input_path.clone(), self.opts.clone());
		let report = show.run(&container, &serialized);

		if let Some(output) = &self.output_path {
			std::fs::write(output, &serialized)?;
			info!(output = %output, bytes = serialized.len(), "wrote wave file");
		}

		Ok(report)
	}
}

pub struct BatchPipeline {
	input_pattern: String,
	output_dir: Option<String>,
	range: Range,
	opts: ShowOptions,
}

impl BatchPipeline {
	pub fn new(
		input_pattern: String,
		output_dir: Option<String>,
		range: Range,
		opts: ShowOptions,
	) -> Self {
		Self { input_pattern, output_dir, range, opts }
	}

	pub fn run(&self) -> WavResult<Vec<String>> {
		let files = self.expand_glob()?;

		if files.is_empty() {
			return Err(WavError::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("no files matching pattern: {}", self.input_pattern),
			)));
		}

		if let Some(dir) = &self.output_dir {
			std::fs::create_dir_all(dir)?;
		}

		let mut reports = Vec::with_capacity(files.len());
		for input_path in files {
			let output_path = self.output_dir.as_ref().map(|dir| {
				let file_name =
					Path::new(&input_path).file_name().and_then(|n| n.to_str()).unwrap_or("output.wav");
				format!("{}/{}", dir, file_name)
			});

			info!(input = %input_path, "processing");
			let pipeline = Pipeline::new(input_path, output_path, self.range, self.opts.clone());
			reports.push(pipeline.run()?);
		}

		Ok(reports)
	}

	fn expand_glob(&self) -> WavResult<Vec<String>> {
		let mut files = Vec::new();

		if !is_batch_pattern(&self.input_pattern) {
			files.push(self.input_pattern.clone());
			return Ok(files);
		}

		let entries = glob::glob(&self.input_pattern).map_err(|e| {
			WavError::invalid_argument(format!("invalid glob pattern: {}", e))
		})?;

		for entry in entries {
			match entry {
				Ok(path) => {
					if path.is_file() {
						files.push(path.to_string_lossy().to_string());
					}
				}
				Err(e) => {
					warn!("failed to read entry: {}", e);
				}
			}
		}

		files.sort();
		Ok(files)
	}
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*') || input.contains('?') || input.contains('[')
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}
