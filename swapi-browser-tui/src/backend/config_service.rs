//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use swapi_browser_client::DEFAULT_BASE_URL;
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 默认通知显示时长（秒）
const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 5;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SWAPI 基础地址
    pub api_base_url: String,
    pub theme: Theme,
    /// 语言代码（en-US / zh-CN）
    pub language: String,
    /// 通知显示时长（秒）
    pub notification_ttl_secs: u64,
    /// 日志级别（被 `RUST_LOG` 覆盖）
    pub log_level: String,
}

impl AppConfig {
    /// 解析语言代码，无法识别时回退到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            notification_ttl_secs: DEFAULT_NOTIFICATION_TTL_SECS,
            log_level: "info".to_string(),
        }
    }
}

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 配置文件是否存在
    fn exists(&self) -> bool;

    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swapi-browser-tui")
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径（~/.config/swapi-browser-tui/config.json）
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
