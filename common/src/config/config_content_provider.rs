use std::io::ErrorKind;
use std::path::PathBuf;

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("puzzle2048-{}-{}.yaml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        let provider = FileContentConfigProvider::new(&path);
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("write");
        let provider = FileContentConfigProvider::new(&path);
        provider.set_config_content("board_size: 4\n").unwrap();
        assert_eq!(
            provider.get_config_content(),
            Ok(Some("board_size: 4\n".to_string()))
        );
        let _ = std::fs::remove_file(&path);
    }
}
