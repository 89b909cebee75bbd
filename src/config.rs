use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::format::{FormatPolicy, MAX_DECIMALS};
use crate::units::UnitTable;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 처음 선택되는 카테고리. 없으면 환산표의 첫 카테고리.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
    /// 입력란의 초기값
    pub default_value: f64,
    /// 결과 표시 정책
    pub format: FormatPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: None,
            default_value: 1.0,
            format: FormatPolicy::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 값은 읽었지만 사용할 수 없음
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 작업 디렉터리의 config.toml 을 읽는다. 파일이 없으면 기본 설정을 쓴다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정 파일을 읽는다. 파일이 없으면 기본 설정을 쓴다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let cfg = Config::from_toml_str(&content)?;
    info!(path = %path.display(), "config loaded");
    Ok(cfg)
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.format.decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "format.decimals must be at most {MAX_DECIMALS}, got {}",
                self.format.decimals
            )));
        }
        if !self.default_value.is_finite() {
            return Err(ConfigError::Invalid("default_value must be finite".into()));
        }
        if let Some(name) = &self.default_category {
            UnitTable::standard()
                .category(name)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }

    /// 초기 카테고리 이름을 환산표 표기대로 돌려준다.
    pub fn initial_category(&self, table: &UnitTable) -> Option<&'static str> {
        self.default_category
            .as_deref()
            .and_then(|name| table.category(name).ok())
            .or_else(|| table.default_category())
            .map(|c| c.name)
    }
}
