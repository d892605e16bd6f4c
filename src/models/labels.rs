use crate::utils::error::BridgeError;
use crate::Result;
use std::path::Path;

/// 有序类别标签表，第i行对应模型输出层第i个单元
#[derive(Debug, Clone)]
pub struct ClassLabels {
    labels: Vec<String>,
}

impl ClassLabels {
    /// 从标签文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BridgeError::ResourceNotFound(format!(
                "Label file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_content(&content))
    }

    /// 每行一个标签，去除首尾空白。
    /// 空行保留为空标签，以维持与模型输出单元的位置对齐。
    pub fn from_content(content: &str) -> Self {
        let labels = content
            .lines()
            .map(|line| line.trim().to_string())
            .collect();

        Self { labels }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_trims_whitespace() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  cat  ").unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file, "\tbird").unwrap();

        let labels = ClassLabels::load(file.path()).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get(0), Some("cat"));
        assert_eq!(labels.get(1), Some("dog"));
        assert_eq!(labels.get(2), Some("bird"));
    }

    #[test]
    fn test_blank_lines_keep_their_position() {
        let labels = ClassLabels::from_content("cat\n\ndog\n");
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get(1), Some(""));
        assert_eq!(labels.get(2), Some("dog"));
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let labels = ClassLabels::from_content("cat\ndog");
        assert_eq!(labels.get(2), None);
    }

    #[test]
    fn test_missing_file_is_resource_not_found() {
        let result = ClassLabels::load("no/such/class_labels.txt");
        assert!(matches!(result, Err(BridgeError::ResourceNotFound(_))));
    }
}
