use docflow_engine::EditorOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that relative document paths are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_path: Option<PathBuf>,
    pub editor: EditorOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the documents path
        config.documents_path = config
            .documents_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docflow");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves a document path given on the command line.
    pub fn resolve_document(&self, path: &Path) -> PathBuf {
        match &self.documents_path {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/docflow/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config {
            documents_path: Some(PathBuf::from("/tmp/test-docs")),
            ..Default::default()
        };
        original.editor.default_size = 14;
        original.editor.control.prefix = "[".to_string();

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.documents_path, deserialized.documents_path);
        assert_eq!(original.editor, deserialized.editor);
    }

    #[test]
    fn test_partial_editor_section_keeps_defaults() {
        let config: Config = toml::from_str(
            r##"
[editor]
defaultFont = "Arial"

[editor.control]
placeholderColor = "#cccccc"
"##,
        )
        .unwrap();

        assert_eq!(config.documents_path, None);
        assert_eq!(config.editor.default_font, "Arial");
        assert_eq!(config.editor.default_size, 16);
        assert_eq!(config.editor.control.placeholder_color, "#cccccc");
        assert_eq!(config.editor.control.prefix, "{");
        assert_eq!(config.editor.checkbox.gap, 5.0);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DOCFLOW_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$DOCFLOW_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("DOCFLOW_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "editor = [").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let mut test_config = Config {
            documents_path: Some(PathBuf::from("/tmp/test-docs")),
            ..Default::default()
        };
        test_config.editor.table.default_tr_min_height = 30.0;

        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.documents_path, test_config.documents_path);
        assert_eq!(loaded_config.editor.table.default_tr_min_height, 30.0);
    }

    #[test]
    fn test_resolve_document() {
        let config = Config {
            documents_path: Some(PathBuf::from("/docs")),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_document(Path::new("a.json")),
            PathBuf::from("/docs/a.json")
        );
        assert_eq!(
            config.resolve_document(Path::new("/abs/a.json")),
            PathBuf::from("/abs/a.json")
        );
        assert_eq!(
            Config::default().resolve_document(Path::new("a.json")),
            PathBuf::from("a.json")
        );
    }
}
