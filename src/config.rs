use std::path::PathBuf;

/// 分类模型的输入尺寸 (H, W)
pub const INPUT_HEIGHT: usize = 224;
pub const INPUT_WIDTH: usize = 224;

#[derive(Debug, Clone)]
pub struct Config {
    /// 资源目录（模型与标签文件所在位置）
    pub assets_dir: PathBuf,

    /// ONNX Runtime配置
    pub onnx_config: OnnxConfig,
}

#[derive(Debug, Clone)]
pub struct OnnxConfig {
    /// CPU线程数
    pub intra_threads: usize,

    /// 优化级别
    pub optimization_level: i32,
}

impl Config {
    pub fn new(assets_dir: String) -> Self {
        let cpu_cores = num_cpus::get();

        let onnx_config = OnnxConfig {
            intra_threads: (cpu_cores * 3 / 4).max(1), // 使用75%的CPU核心
            optimization_level: 3, // 最高优化级别
        };

        Self {
            assets_dir: PathBuf::from(assets_dir),
            onnx_config,
        }
    }

    /// 获取分类模型路径
    pub fn model_path(&self) -> PathBuf {
        self.assets_dir.join("Trained.onnx")
    }

    /// 获取类别标签文件路径
    pub fn labels_path(&self) -> PathBuf {
        self.assets_dir.join("class_labels.txt")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("Assets/StreamingAssets".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths() {
        let config = Config::new("models".to_string());
        assert_eq!(config.model_path(), PathBuf::from("models/Trained.onnx"));
        assert_eq!(
            config.labels_path(),
            PathBuf::from("models/class_labels.txt")
        );
    }

    #[test]
    fn test_default_assets_dir() {
        let config = Config::default();
        assert_eq!(config.assets_dir, PathBuf::from("Assets/StreamingAssets"));
        assert!(config.onnx_config.intra_threads >= 1);
    }
}
