use crate::utils::error::BridgeError;
use crate::{Config, Result};
use ndarray::{Array4, Axis};
use ort::{
    inputs,
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct Classifier {
    session: Arc<Mutex<Session>>,
    input_name: String,  // 动态发现的输入名称
    output_name: String, // 动态发现的输出名称
}

impl Classifier {
    pub fn new(config: &Config) -> Result<Self> {
        let model_path = config.model_path();

        if !model_path.exists() {
            return Err(BridgeError::ResourceNotFound(format!(
                "Model file not found: {}",
                model_path.display()
            )));
        }

        tracing::info!("Loading classification model from: {}", model_path.display());

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(config.onnx_config.intra_threads)?
            .commit_from_file(&model_path)
            .map_err(|e| BridgeError::ModelLoad(format!("{e}")))?;

        // 动态发现输入名称
        let input_name = match session.inputs.first() {
            Some(input) => input.name.clone(),
            None => {
                return Err(BridgeError::ModelLoad(
                    "Classification model has no inputs".to_string(),
                ))
            }
        };

        // 动态发现输出名称
        let output_name = if session.outputs.is_empty() {
            return Err(BridgeError::ModelLoad(
                "Classification model has no outputs".to_string(),
            ));
        } else {
            let output_name = session.outputs[0].name.clone();
            tracing::info!(
                "Classification model io: '{}' -> '{}'",
                input_name,
                output_name
            );

            // 记录所有可用输出用于调试
            for (i, output) in session.outputs.iter().enumerate() {
                tracing::debug!("Classification output[{}]: '{}'", i, output.name);
            }

            output_name
        };

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            output_name,
        })
    }

    /// 单次前向推理，返回每个类别的原始得分
    pub fn predict(&self, input: Array4<f32>) -> Result<Vec<f32>> {
        let input_tensor = Tensor::from_array(input)?;

        let predictions = {
            let mut session = self.session.lock();
            let outputs = session.run(inputs![self.input_name.as_str() => input_tensor])?;

            // 使用动态发现的输出名称
            match outputs.get(self.output_name.as_str()) {
                Some(output) => output.try_extract_array::<f32>()?.into_owned(),
                None => {
                    // 提供详细的错误诊断信息
                    let available_outputs: Vec<String> =
                        outputs.keys().map(|s| s.to_string()).collect();
                    return Err(BridgeError::Inference(format!(
                        "Classification output '{}' not found. Available outputs: {:?}",
                        self.output_name, available_outputs
                    )));
                }
            }
        };

        let pred_shape = predictions.shape().to_vec();
        if pred_shape.len() != 2 {
            return Err(BridgeError::Inference(format!(
                "Expected 2D classification tensor, got shape {:?}",
                pred_shape
            )));
        }

        if pred_shape[0] != 1 {
            return Err(BridgeError::Inference(
                "Expected batch size 1 for classification".to_string(),
            ));
        }

        Ok(predictions.index_axis(Axis(0), 0).iter().copied().collect())
    }
}

/// 线性扫描argmax，得分并列时返回第一个出现的最大值索引
pub fn argmax(scores: &[f32]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }

    let mut max_idx = 0;
    let mut max_score = scores[0];

    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > max_score {
            max_score = score;
            max_idx = i;
        }
    }

    Some(max_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_is_resource_not_found() {
        let config = Config::new("no/such/assets".to_string());
        let result = Classifier::new(&config);
        assert!(matches!(result, Err(BridgeError::ResourceNotFound(_))));
    }

    #[test]
    fn test_argmax_picks_highest_score() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[0.9]), Some(0));
    }

    #[test]
    fn test_argmax_tie_breaks_on_first_occurrence() {
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), Some(0));
        assert_eq!(argmax(&[0.1, 0.4, 0.4]), Some(1));
    }

    #[test]
    fn test_argmax_handles_negative_scores() {
        assert_eq!(argmax(&[-3.0, -1.5, -2.0]), Some(1));
    }

    #[test]
    fn test_argmax_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }
}
