mod path;
mod sampler;

pub use path::{dedup_adjacent, Path};
pub use sampler::{ArcLengthSampler, PathSample};
