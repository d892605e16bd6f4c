use crate::bridge::ClassPrediction;
use crate::image::{ImageLoader, ImagePreprocessor};
use crate::models::{classifier::argmax, ClassLabels, Classifier};
use crate::utils::error::BridgeError;
use crate::Result;
use std::time::Instant;

/// 分类流水线：图像路径 -> 预处理 -> 前向推理 -> 标签
///
/// 分类器与标签表由调用方显式传入，不依赖任何进程级全局状态，
/// 便于测试时注入fixture。
pub struct BridgePipeline;

impl BridgePipeline {
    pub fn classify_file(
        classifier: &Classifier,
        labels: &ClassLabels,
        image_path: &str,
    ) -> Result<ClassPrediction> {
        let start = Instant::now();

        // 加载并预处理图像
        let image = ImageLoader::from_path(image_path)?;
        let input = ImagePreprocessor::to_input_tensor(&image)?;

        // 前向推理
        let scores = classifier.predict(input)?;
        let prediction = select_prediction(labels, &scores)?;

        tracing::debug!(
            "Classified '{}' as '{}' (score {:.4}) in {}ms",
            image_path,
            prediction.label,
            prediction.score,
            start.elapsed().as_millis()
        );

        Ok(prediction)
    }
}

/// 将得分向量归约为单个预测。
/// 标签表宽度与模型输出宽度不一致时返回显式错误，而不是越界索引。
fn select_prediction(labels: &ClassLabels, scores: &[f32]) -> Result<ClassPrediction> {
    let class_idx = argmax(scores).ok_or_else(|| {
        BridgeError::Inference("Model produced an empty score vector".to_string())
    })?;

    match labels.get(class_idx) {
        Some(label) => Ok(ClassPrediction {
            class_idx,
            score: scores[class_idx],
            label: label.to_string(),
        }),
        None => Err(BridgeError::Inference(format!(
            "Predicted class index {} out of range for label list of {} entries",
            class_idx,
            labels.len()
        ))),
    }
}
