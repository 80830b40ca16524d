use std::fmt;

/// How a single sample is laid out inside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleDataType {
	Unsigned8,
	LittleEndianSigned16,
	LittleEndianSigned24,
	LittleEndianSigned32,
	LittleEndianSigned64,
	LittleEndianFloat32,
	LittleEndianFloat64,
}

impl SampleDataType {
	pub fn bytes_per_sample(&self) -> usize {
		match self {
			Self::Unsigned8 => 1,
			Self::LittleEndianSigned16 => 2,
			Self::LittleEndianSigned24 => 3,
			Self::LittleEndianSigned32 | Self::LittleEndianFloat32 => 4,
			Self::LittleEndianSigned64 | Self::LittleEndianFloat64 => 8,
		}
	}

	pub fn bits_per_sample(&self) -> u16 {
		(self.bytes_per_sample() * 8) as u16
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Self::LittleEndianFloat32 | Self::LittleEndianFloat64)
	}

	pub fn codec_name(&self) -> &'static str {
		match self {
			Self::Unsigned8 => "pcm_u8",
			Self::LittleEndianSigned16 => "pcm_s16le",
			Self::LittleEndianSigned24 => "pcm_s24le",
			Self::LittleEndianSigned32 => "pcm_s32le",
			Self::LittleEndianSigned64 => "pcm_s64le",
			Self::LittleEndianFloat32 => "pcm_f32le",
			Self::LittleEndianFloat64 => "pcm_f64le",
		}
	}
}

impl fmt::Display for SampleDataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.codec_name())
	}
}
