//! Byte-exact RIFF/WAVE container codec.
//!
//! [`WavContainer::deserialize`] turns a fully buffered `.wav` file into its
//! chunks, and [`WavContainer::serialize`] (or one of its ranged variants)
//! turns them back into a standalone RIFF/WAVE buffer.
//!
//! ```
//! use riffwave::WavContainer;
//!
//! let mut wav = Vec::new();
//! wav.extend_from_slice(b"RIFF");
//! wav.extend_from_slice(&38u32.to_le_bytes());
//! wav.extend_from_slice(b"WAVE");
//! wav.extend_from_slice(b"fmt ");
//! wav.extend_from_slice(&16u32.to_le_bytes());
//! wav.extend_from_slice(&[1, 0, 1, 0]);
//! wav.extend_from_slice(&8000u32.to_le_bytes());
//! wav.extend_from_slice(&16000u32.to_le_bytes());
//! wav.extend_from_slice(&[2, 0, 16, 0]);
//! wav.extend_from_slice(b"data");
//! wav.extend_from_slice(&2u32.to_le_bytes());
//! wav.extend_from_slice(&(-2i16).to_le_bytes());
//!
//! let container = WavContainer::deserialize(&wav).unwrap();
//! assert_eq!(container.total_frames(), 1);
//! assert_eq!(container.sample_i16(0, 0).unwrap(), -2);
//! assert_eq!(container.serialize().unwrap(), wav);
//! ```

pub mod cli;
pub mod container;
pub mod error;
pub mod io;
pub mod show;

pub use container::{ChannelLayout, SampleDataType, WavContainer, WavFormat};
pub use error::{WavError, WavErrorKind, WavResult};
