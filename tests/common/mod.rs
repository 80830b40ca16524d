#![allow(dead_code)]

pub const PCM_GUID: [u8; 16] =
	[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71];

pub const FLOAT_GUID: [u8; 16] =
	[0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71];

/// Encodes one chunk: id, little-endian size, payload and the pad byte for odd sizes.
pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(8 + payload.len() + 1);
	out.extend_from_slice(id);
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	if payload.len() % 2 == 1 {
		out.push(0);
	}
	out
}

/// Wraps encoded chunks in a RIFF/WAVE header with a correct outer size.
pub fn riff(chunks: &[Vec<u8>]) -> Vec<u8> {
	let body: usize = chunks.iter().map(|c| c.len()).sum();
	let mut out = Vec::with_capacity(12 + body);
	out.extend_from_slice(b"RIFF");
	out.extend_from_slice(&((4 + body) as u32).to_le_bytes());
	out.extend_from_slice(b"WAVE");
	for c in chunks {
		out.extend_from_slice(c);
	}
	out
}

pub fn pcm_fmt(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
	let block_size = channels * bits_per_sample / 8;
	let mut fmt = Vec::with_capacity(16);
	fmt.extend_from_slice(&1u16.to_le_bytes());
	fmt.extend_from_slice(&channels.to_le_bytes());
	fmt.extend_from_slice(&sample_rate.to_le_bytes());
	fmt.extend_from_slice(&(sample_rate * block_size as u32).to_le_bytes());
	fmt.extend_from_slice(&block_size.to_le_bytes());
	fmt.extend_from_slice(&bits_per_sample.to_le_bytes());
	fmt
}

pub fn extensible_fmt(
	channels: u16,
	sample_rate: u32,
	bits_per_sample: u16,
	valid_bits: u16,
	channel_mask: u32,
	sub_format: &[u8; 16],
) -> Vec<u8> {
	let mut fmt = pcm_fmt(channels, sample_rate, bits_per_sample);
	fmt[0..2].copy_from_slice(&0xFFFEu16.to_le_bytes());
	fmt.extend_from_slice(&22u16.to_le_bytes());
	fmt.extend_from_slice(&valid_bits.to_le_bytes());
	fmt.extend_from_slice(&channel_mask.to_le_bytes());
	fmt.extend_from_slice(sub_format);
	fmt
}

pub fn pcm_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, data: &[u8]) -> Vec<u8> {
	riff(&[chunk(b"fmt ", &pcm_fmt(channels, sample_rate, bits_per_sample)), chunk(b"data", data)])
}

/// Mono 16-bit PCM where frame `i` holds the sample value `i`.
pub fn ramp_wav(frames: usize, sample_rate: u32) -> Vec<u8> {
	let data: Vec<u8> = (0..frames).flat_map(|i| (i as i16).to_le_bytes()).collect();
	pcm_wav(1, sample_rate, 16, &data)
}

/// Stereo 16-bit PCM: left is the frame index, right is its negation.
pub fn stereo_ramp_wav(frames: usize, sample_rate: u32) -> Vec<u8> {
	let data: Vec<u8> = (0..frames)
		.flat_map(|i| {
			let l = (i as i16).to_le_bytes();
			let r = (-(i as i16)).to_le_bytes();
			[l[0], l[1], r[0], r[1]]
		})
		.collect();
	pcm_wav(2, sample_rate, 16, &data)
}
