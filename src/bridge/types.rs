use serde::{Deserialize, Serialize};

/// 单次分类的预测结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassPrediction {
    /// 类别索引（0起始）
    pub class_idx: usize,
    /// 该类别的原始得分
    pub score: f32,
    /// 类别标签
    pub label: String,
}
