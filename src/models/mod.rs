pub mod classifier;
pub mod labels;

pub use classifier::Classifier;
pub use labels::ClassLabels;
