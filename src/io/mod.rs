pub mod bytes;
pub mod guid;

pub use bytes::{ByteStore, ByteView, region};
pub use guid::Guid;
