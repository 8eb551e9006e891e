use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::open_library::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// ターミナルモードの既定カタログファイル
pub const DEFAULT_TERMINAL_CATALOG: &str = "library.json";

/// APIサーバーモードの既定カタログファイル
pub const DEFAULT_API_CATALOG: &str = "api_library.json";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// 設定値の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// アプリケーション設定
///
/// 環境変数から読み込み、未設定の項目には既定値を使う。
/// コマンドライン引数による上書きは呼び出し側で行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// CATALOG_PATH: 未設定の場合はモードごとの既定ファイル
    pub catalog_path: Option<PathBuf>,
    /// HOST
    pub host: String,
    /// PORT
    pub port: u16,
    /// LOOKUP_BASE_URL
    pub lookup_base_url: String,
    /// LOOKUP_TIMEOUT_SECS
    pub lookup_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lookup_base_url: DEFAULT_BASE_URL.to_string(),
            lookup_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// プロセスの環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 任意の変数ソースから設定を読み込む
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => defaults.port,
        };

        let lookup_timeout = match var("LOOKUP_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOOKUP_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => defaults.lookup_timeout,
        };

        Ok(Self {
            catalog_path: var("CATALOG_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            host: var("HOST").unwrap_or(defaults.host),
            port,
            lookup_base_url: var("LOOKUP_BASE_URL").unwrap_or(defaults.lookup_base_url),
            lookup_timeout,
        })
    }

    /// 指定された既定ファイル名を考慮したカタログファイルのパス
    pub fn catalog_path_or(&self, default: &str) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(default))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
