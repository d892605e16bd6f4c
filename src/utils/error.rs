use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ORT error: {0}")]
    Ort(#[from] ort::Error),
}

impl BridgeError {
    /// 转换为宿主进程读取的诊断文本。
    /// 字符串内容是对外契约的一部分，调用方依赖文本嗅探判断失败。
    pub fn diagnostic(&self) -> String {
        match self {
            BridgeError::ResourceNotFound(_) => "Model file or label file not found.".to_string(),
            other => format!("An error occurred: {other}"),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            BridgeError::ResourceNotFound(_) => "RESOURCE_NOT_FOUND",
            BridgeError::ModelLoad(_) => "MODEL_LOAD_ERROR",
            BridgeError::ImageDecode(_) => "IMAGE_DECODE_ERROR",
            BridgeError::Inference(_) => "INFERENCE_ERROR",
            BridgeError::Io(_) => "IO_ERROR",
            BridgeError::Ort(_) => "ORT_ERROR",
        }
    }
}
