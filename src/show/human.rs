use super::format::format_duration;
use super::types::MediaInfo;
use prettytable::{Table, format, row};

pub fn render(info: &MediaInfo) -> String {
	let mut out = String::new();

	out.push_str(&format!("Input: {}\n", info.file.path));
	out.push_str(&format!(
		"  Duration: {}, size: {} bytes\n\n",
		format_duration(info.file.duration),
		info.file.size
	));

	out.push_str(&stream_table(info).to_string());
	out.push('\n');
	out.push_str(&chunk_table(info).to_string());
	out.push('\n');
	out.push_str(&info.hex);

	out
}

fn stream_table(info: &MediaInfo) -> Table {
	let stream = &info.stream;
	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
	table.set_titles(row!["field", "value"]);

	table.add_row(row!["sample type", stream.codec]);
	table.add_row(row!["format tag", stream.format_tag]);
	table.add_row(row!["frames", stream.total_frames]);
	table.add_row(row!["channels", stream.channels]);
	table.add_row(row!["sample rate", format!("{} Hz", stream.sample_rate)]);
	table.add_row(row!["bits per sample", stream.bits_per_sample]);
	table.add_row(row!["valid bits per sample", stream.valid_bits_per_sample]);
	table.add_row(row!["block size", stream.block_size]);
	table.add_row(row!["channel layout", stream.channel_layout]);

	table
}

fn chunk_table(info: &MediaInfo) -> Table {
	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
	table.set_titles(row!["chunk", "bytes"]);

	for chunk in &info.chunks {
		table.add_row(row![chunk.id, chunk.size]);
	}

	table
}
