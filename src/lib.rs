pub mod bridge;
pub mod config;
pub mod image;
pub mod models;
pub mod utils;

// 重新导出主要类型
pub use bridge::{BridgePipeline, ClassPrediction};
pub use config::Config;
pub use models::{ClassLabels, Classifier};
pub use utils::error::BridgeError;

pub type Result<T> = std::result::Result<T, BridgeError>;
