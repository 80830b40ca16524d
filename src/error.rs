use thiserror::Error;

pub type WavResult<T> = Result<T, WavError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavErrorKind {
	/// The bytes violate the RIFF/WAVE structure.
	BadFormat,
	/// The bytes are well-formed but describe samples this codec cannot decode.
	Unsupported,
	/// The caller broke a contract: wrong window width, index out of range.
	InvalidArgument,
	Io,
}

#[derive(Debug, Error)]
pub enum WavError {
	#[error("bad wave format: {0}")]
	BadFormat(String),

	#[error("unsupported wave format: {0}")]
	Unsupported(String),

	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl WavError {
	pub fn bad_format(msg: impl Into<String>) -> Self {
		Self::BadFormat(msg.into())
	}

	pub fn unsupported(msg: impl Into<String>) -> Self {
		Self::Unsupported(msg.into())
	}

	pub fn invalid_argument(msg: impl Into<String>) -> Self {
		Self::InvalidArgument(msg.into())
	}

	pub fn kind(&self) -> WavErrorKind {
		match self {
			Self::BadFormat(_) => WavErrorKind::BadFormat,
			Self::Unsupported(_) => WavErrorKind::Unsupported,
			Self::InvalidArgument(_) => WavErrorKind::InvalidArgument,
			Self::Io(_) => WavErrorKind::Io,
		}
	}

	pub fn is_bad_format(&self) -> bool {
		self.kind() == WavErrorKind::BadFormat
	}

	pub fn is_unsupported(&self) -> bool {
		self.kind() == WavErrorKind::Unsupported
	}

	pub fn is_invalid_argument(&self) -> bool {
		self.kind() == WavErrorKind::InvalidArgument
	}
}
