//! Parameter files: lines of `key: value` pairs.
//!
//! ```text
//! # validation run
//! systemOutputStore: /data/system/output
//! validRoles: data/2014.types.txt
//! dump: true
//! docIDMap: /data/docs.tsv
//! ```
//!
//! Blank lines and `#` comments are skipped; a repeated key overrides the
//! earlier value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: BTreeMap<String, String>,
}

impl Parameters {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    /// Parse parameter text; `origin` is only used in error messages.
    pub fn parse(origin: &Path, content: &str) -> ConfigResult<Self> {
        let mut values = BTreeMap::new();
        for (line_idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (key, value) = trimmed.split_once(':').ok_or_else(|| ConfigError::Syntax {
                path: origin.to_path_buf(),
                line: line_idx + 1,
                message: format!("expected `key: value`, found {:?}", trimmed),
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::Syntax {
                    path: origin.to_path_buf(),
                    line: line_idx + 1,
                    message: "empty parameter name".to_string(),
                });
            }
            values.insert(key.to_string(), value.trim().to_string());
        }
        Ok(Self { values })
    }

    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_optional_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_string(&self, key: &str) -> ConfigResult<&str> {
        self.get_optional_string(key)
            .ok_or_else(|| ConfigError::Missing {
                key: key.to_string(),
            })
    }

    pub fn get_optional_bool(&self, key: &str) -> ConfigResult<Option<bool>> {
        match self.get_optional_string(key) {
            None => Ok(None),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(ConfigError::Invalid {
                    key: key.to_string(),
                    value: value.to_string(),
                    expected: "true or false",
                }),
            },
        }
    }

    pub fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        self.get_optional_bool(key)?
            .ok_or_else(|| ConfigError::Missing {
                key: key.to_string(),
            })
    }

    pub fn get_optional_usize(&self, key: &str) -> ConfigResult<Option<usize>> {
        self.get_optional_string(key)
            .map(|value| {
                value.parse().map_err(|_| ConfigError::Invalid {
                    key: key.to_string(),
                    value: value.to_string(),
                    expected: "a non-negative integer",
                })
            })
            .transpose()
    }

    fn get_path(&self, key: &str) -> ConfigResult<PathBuf> {
        self.get_string(key).map(PathBuf::from)
    }

    pub fn get_existing_file(&self, key: &str) -> ConfigResult<PathBuf> {
        let path = self.get_path(key)?;
        if !path.is_file() {
            return Err(ConfigError::BadPath {
                key: key.to_string(),
                path,
                expected: "an existing file",
            });
        }
        Ok(path)
    }

    pub fn get_optional_existing_file(&self, key: &str) -> ConfigResult<Option<PathBuf>> {
        if self.is_present(key) {
            self.get_existing_file(key).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn get_existing_directory(&self, key: &str) -> ConfigResult<PathBuf> {
        let path = self.get_path(key)?;
        if !path.is_dir() {
            return Err(ConfigError::BadPath {
                key: key.to_string(),
                path,
                expected: "an existing directory",
            });
        }
        Ok(path)
    }

    pub fn get_existing_file_or_directory(&self, key: &str) -> ConfigResult<PathBuf> {
        let path = self.get_path(key)?;
        if !path.exists() {
            return Err(ConfigError::BadPath {
                key: key.to_string(),
                path,
                expected: "an existing file or directory",
            });
        }
        Ok(path)
    }

    /// Directory named by `key`, created if it does not exist yet.
    pub fn get_creatable_directory(&self, key: &str) -> ConfigResult<PathBuf> {
        let path = self.get_path(key)?;
        fs::create_dir_all(&path).map_err(|e| ConfigError::CreateDir {
            key: key.to_string(),
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    /// All parameters, one `key: value` per line, for logging.
    pub fn dump(&self) -> String {
        self.values
            .iter()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect()
    }
}
