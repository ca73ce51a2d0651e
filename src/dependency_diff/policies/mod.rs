pub mod input_size_policy;

pub use input_size_policy::{InputSizePolicy, InputThresholds};
