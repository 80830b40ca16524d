mod common;

use common::{ramp_wav, stereo_ramp_wav};
use riffwave::WavErrorKind;
use riffwave::cli::{BatchPipeline, Pipeline, Range, is_batch_pattern, load};
use riffwave::show::{ShowOptions, bytes_to_hex, format_duration};
use std::fs;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> String {
	let path = dir.path().join(name);
	fs::write(&path, bytes).unwrap();
	path.to_string_lossy().to_string()
}

#[test]
fn test_pipeline_rewrites_file_byte_exact() {
	let dir = TempDir::new().unwrap();
	let wav = stereo_ramp_wav(64, 8000);
	let input = write_input(&dir, "in.wav", &wav);
	let output = dir.path().join("out.wav").to_string_lossy().to_string();

	let pipeline = Pipeline::new(input.clone(), Some(output.clone()), Range::Full, ShowOptions::default());
	let report = pipeline.run().unwrap();

	assert_eq!(fs::read(&output).unwrap(), wav);
	assert!(report.contains(&input));
	assert!(report.contains("pcm_s16le"));
	assert!(report.contains("stereo"));
	assert!(report.contains("fmt "));
	assert!(report.contains("data"));
	assert!(report.contains("00000000: 5249 4646"));
}

#[test]
fn test_pipeline_frame_range_extends_to_end() {
	let dir = TempDir::new().unwrap();
	let input = write_input(&dir, "ramp.wav", &ramp_wav(100, 100));
	let output = dir.path().join("tail.wav").to_string_lossy().to_string();

	let range = Range::Frames { from: 90, count: None };
	Pipeline::new(input, Some(output.clone()), range, ShowOptions::default()).run().unwrap();

	let tail = load(&output).unwrap();
	assert_eq!(tail.total_frames(), 10);
	assert_eq!(tail.sample_i16(0, 0).unwrap(), 90);
}

#[test]
fn test_pipeline_time_range() {
	let dir = TempDir::new().unwrap();
	let input = write_input(&dir, "ramp.wav", &ramp_wav(100, 100));
	let output = dir.path().join("cut.wav").to_string_lossy().to_string();

	let range = Range::Time { from: 0.25, duration: Some(0.5) };
	Pipeline::new(input.clone(), Some(output.clone()), range, ShowOptions::default()).run().unwrap();

	let cut = load(&output).unwrap();
	assert_eq!(cut.total_frames(), 50);
	assert_eq!(cut.sample_i16(0, 0).unwrap(), 25);

	let range = Range::Time { from: -1.0, duration: None };
	let err = Pipeline::new(input, None, range, ShowOptions::default()).run().unwrap_err();
	assert!(err.is_invalid_argument());
}

#[test]
fn test_pipeline_reports_parse_errors() {
	let dir = TempDir::new().unwrap();
	let mut wav = ramp_wav(4, 8000);
	wav.truncate(wav.len() - 1);
	let input = write_input(&dir, "broken.wav", &wav);

	let err = Pipeline::new(input, None, Range::Full, ShowOptions::default()).run().unwrap_err();
	assert!(err.is_bad_format());

	let missing = dir.path().join("missing.wav").to_string_lossy().to_string();
	assert_eq!(load(&missing).unwrap_err().kind(), WavErrorKind::Io);
}

#[test]
fn test_batch_pipeline_expands_glob() {
	let dir = TempDir::new().unwrap();
	write_input(&dir, "b.wav", &ramp_wav(8, 8000));
	write_input(&dir, "a.wav", &ramp_wav(4, 8000));
	write_input(&dir, "notes.txt", b"not audio");
	let out_dir = dir.path().join("out").to_string_lossy().to_string();

	let pattern = format!("{}/*.wav", dir.path().display());
	assert!(is_batch_pattern(&pattern));

	let batch = BatchPipeline::new(pattern, Some(out_dir.clone()), Range::Full, ShowOptions::default());
	let reports = batch.run().unwrap();

	assert_eq!(reports.len(), 2);
	assert!(reports[0].contains("a.wav"));
	assert!(reports[1].contains("b.wav"));
	assert_eq!(load(&format!("{}/a.wav", out_dir)).unwrap().total_frames(), 4);
	assert_eq!(load(&format!("{}/b.wav", out_dir)).unwrap().total_frames(), 8);
}

#[test]
fn test_batch_pipeline_without_matches_fails() {
	let dir = TempDir::new().unwrap();
	let pattern = format!("{}/*.wav", dir.path().display());

	let err = BatchPipeline::new(pattern, None, Range::Full, ShowOptions::default()).run().unwrap_err();
	assert_eq!(err.kind(), WavErrorKind::Io);
}

#[test]
fn test_hex_dump_layout() {
	let dump = bytes_to_hex(b"RIFF\x00\x01", 256);
	assert_eq!(dump, format!("00000000: 5249 4646 0001{}RIFF..\n", " ".repeat(27)));

	let data: Vec<u8> = (0u8..40).collect();
	let dump = bytes_to_hex(&data, 20);
	let lines: Vec<&str> = dump.lines().collect();
	assert_eq!(lines.len(), 3);
	assert!(lines[1].starts_with("00000010: 1011 1213"));
	assert_eq!(lines[2], "... 20 more bytes");
}

#[test]
fn test_duration_formatting() {
	assert_eq!(format_duration(0.0), "00:00:00.000");
	assert_eq!(format_duration(3723.5), "01:02:03.500");
}
