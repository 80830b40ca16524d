use std::fmt;

const SPEAKER_NAMES: [(u32, &str); 18] = [
	(ChannelLayout::FRONT_LEFT, "FL"),
	(ChannelLayout::FRONT_RIGHT, "FR"),
	(ChannelLayout::FRONT_CENTER, "FC"),
	(ChannelLayout::LOW_FREQUENCY, "LFE"),
	(ChannelLayout::BACK_LEFT, "BL"),
	(ChannelLayout::BACK_RIGHT, "BR"),
	(ChannelLayout::FRONT_LEFT_OF_CENTER, "FLC"),
	(ChannelLayout::FRONT_RIGHT_OF_CENTER, "FRC"),
	(ChannelLayout::BACK_CENTER, "BC"),
	(ChannelLayout::SIDE_LEFT, "SL"),
	(ChannelLayout::SIDE_RIGHT, "SR"),
	(ChannelLayout::TOP_CENTER, "TC"),
	(ChannelLayout::TOP_FRONT_LEFT, "TFL"),
	(ChannelLayout::TOP_FRONT_CENTER, "TFC"),
	(ChannelLayout::TOP_FRONT_RIGHT, "TFR"),
	(ChannelLayout::TOP_BACK_LEFT, "TBL"),
	(ChannelLayout::TOP_BACK_CENTER, "TBC"),
	(ChannelLayout::TOP_BACK_RIGHT, "TBR"),
];

/// Speaker positions present in the stream, as a `dwChannelMask` bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelLayout(u32);

impl ChannelLayout {
	pub const FRONT_LEFT: u32 = 0x1;
	pub const FRONT_RIGHT: u32 = 0x2;
	pub const FRONT_CENTER: u32 = 0x4;
	pub const LOW_FREQUENCY: u32 = 0x8;
	pub const BACK_LEFT: u32 = 0x10;
	pub const BACK_RIGHT: u32 = 0x20;
	pub const FRONT_LEFT_OF_CENTER: u32 = 0x40;
	pub const FRONT_RIGHT_OF_CENTER: u32 = 0x80;
	pub const BACK_CENTER: u32 = 0x100;
	pub const SIDE_LEFT: u32 = 0x200;
	pub const SIDE_RIGHT: u32 = 0x400;
	pub const TOP_CENTER: u32 = 0x800;
	pub const TOP_FRONT_LEFT: u32 = 0x1000;
	pub const TOP_FRONT_CENTER: u32 = 0x2000;
	pub const TOP_FRONT_RIGHT: u32 = 0x4000;
	pub const TOP_BACK_LEFT: u32 = 0x8000;
	pub const TOP_BACK_CENTER: u32 = 0x10000;
	pub const TOP_BACK_RIGHT: u32 = 0x20000;

	pub const MONO: Self = Self(Self::FRONT_CENTER);
	pub const STEREO: Self = Self(Self::FRONT_LEFT | Self::FRONT_RIGHT);

	pub const fn from_mask(mask: u32) -> Self {
		Self(mask)
	}

	pub const fn mask(&self) -> u32 {
		self.0
	}

	pub fn contains(&self, speaker: u32) -> bool {
		speaker != 0 && self.0 & speaker == speaker
	}

	pub fn speaker_count(&self) -> u32 {
		self.0.count_ones()
	}

	pub fn speaker_names(&self) -> Vec<&'static str> {
		SPEAKER_NAMES.iter().filter(|(bit, _)| self.0 & bit != 0).map(|(_, name)| *name).collect()
	}
}

impl fmt::Display for ChannelLayout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::MONO => write!(f, "mono"),
			Self::STEREO => write!(f, "stereo"),
			_ if self.0 == 0 => write!(f, "unassigned (0x0)"),
			_ => write!(f, "{} (0x{:x})", self.speaker_names().join("+"), self.0),
		}
	}
}
