use crate::utils::error::BridgeError;
use crate::Result;
use image::DynamicImage;
use std::path::Path;

pub struct ImageLoader;

impl ImageLoader {
    /// 从文件路径加载图像
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        let image = image::open(path.as_ref()).map_err(BridgeError::ImageDecode)?;

        Ok(image)
    }

    /// 从内存字节加载图像
    pub fn from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
        let image = image::load_from_memory(bytes).map_err(BridgeError::ImageDecode)?;

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonexistent_path_is_decode_failure() {
        let result = ImageLoader::from_path("no/such/image.png");
        assert!(matches!(result, Err(BridgeError::ImageDecode(_))));
    }

    #[test]
    fn test_non_image_bytes_fail_to_decode() {
        let result = ImageLoader::from_bytes(b"definitely not a raster image");
        assert!(matches!(result, Err(BridgeError::ImageDecode(_))));
    }
}
