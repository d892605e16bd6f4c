pub mod pipeline;
pub mod types;

pub use pipeline::BridgePipeline;
pub use types::ClassPrediction;
