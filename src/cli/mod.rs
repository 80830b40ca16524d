pub mod args;
pub mod pipeline;

pub use args::{Args, Range};
pub use pipeline::{BatchPipeline, Pipeline, is_batch_pattern, is_directory, load};
