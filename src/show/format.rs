const BYTES_PER_LINE: usize = 16;

/// Renders at most `limit` bytes in `xxd` layout: offset, grouped hex pairs
/// and printable ASCII.
pub fn bytes_to_hex(data: &[u8], limit: usize) -> String {
	let shown = &data[..data.len().min(limit)];
	let mut out = String::new();

	for (line, chunk) in shown.chunks(BYTES_PER_LINE).enumerate() {
		out.push_str(&format!("{:08x}:", line * BYTES_PER_LINE));

		for i in 0..BYTES_PER_LINE {
			if i % 2 == 0 {
				out.push(' ');
			}
			match chunk.get(i) {
				Some(b) => out.push_str(&format!("{:02x}", b)),
				None => out.push_str("  "),
			}
		}

		out.push_str("  ");
		out.extend(chunk.iter().map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' }));
		out.push('\n');
	}

	if data.len() > shown.len() {
		out.push_str(&format!("... {} more bytes\n", data.len() - shown.len()));
	}

	out
}

pub fn format_duration(seconds: f64) -> String {
	let total_ms = (seconds * 1000.0).round() as u64;
	let hours = total_ms / 3_600_000;
	let minutes = (total_ms / 60_000) % 60;
	let secs = (total_ms / 1000) % 60;
	let ms = total_ms % 1000;
	format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
}
