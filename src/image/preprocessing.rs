use crate::config::{INPUT_HEIGHT, INPUT_WIDTH};
use crate::utils::error::BridgeError;
use crate::Result;
use image::{imageops::FilterType, DynamicImage};
use ndarray::{Array3, Array4, Axis};

pub struct ImagePreprocessor;

impl ImagePreprocessor {
    /// 将解码后的图像转换为模型输入张量 [1, 224, 224, 3]。
    ///
    /// 流程与训练侧保持一致：
    /// 1. 强制转为RGB三通道（丢弃alpha、展开灰度/调色板）
    /// 2. 拉伸缩放到224x224（不裁剪）
    /// 3. 转为channel-last的f32数组，像素值保持0-255（训练时未归一化）
    /// 4. 添加batch维度
    pub fn to_input_tensor(image: &DynamicImage) -> Result<Array4<f32>> {
        // 转换为RGB
        let rgb_image = image.to_rgb8();

        // 拉伸到目标尺寸
        let resized = image::imageops::resize(
            &rgb_image,
            INPUT_WIDTH as u32,
            INPUT_HEIGHT as u32,
            FilterType::Triangle,
        );

        // HWC排列的f32数组
        let raw_data = resized.into_raw();
        let pixels: Vec<f32> = raw_data.iter().map(|&v| v as f32).collect();

        let array = Array3::from_shape_vec((INPUT_HEIGHT, INPUT_WIDTH, 3), pixels)
            .map_err(|e| BridgeError::Inference(format!("Tensor layout error: {e}")))?;

        // 添加batch维度
        Ok(array.insert_axis(Axis(0)))
    }
}
