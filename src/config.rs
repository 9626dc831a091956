use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::heat_pump::report::OutputFormat;
use crate::heat_pump::OperatingPoint;
use crate::units::TemperatureUnit;

/// 기본 설정 파일 이름(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 대화형 메뉴와 GUI에서 사용할 기본 운전점(설정 단위 기준).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDefaults {
    pub outdoor: f64,
    pub flow: f64,
    pub return_temp: f64,
}

impl Default for PointDefaults {
    fn default() -> Self {
        Self {
            outdoor: 7.0,
            flow: 35.0,
            return_temp: 28.0,
        }
    }
}

impl PointDefaults {
    /// 입력 단위를 반영해 섭씨 운전점으로 변환한다.
    pub fn to_point(&self, unit: TemperatureUnit) -> OperatingPoint {
        OperatingPoint::from_unit(self.outdoor, self.flow, self.return_temp, unit)
    }
}

/// 외기 온도 스윕 기본값(설정 단위 기준).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepDefaults {
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

impl Default for SweepDefaults {
    fn default() -> Self {
        Self {
            from: -15.0,
            to: 15.0,
            step: 5.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en)
    pub language: String,
    /// 입력 온도 단위
    pub input_unit: TemperatureUnit,
    /// 결과 출력 형식
    pub output_format: OutputFormat,
    pub default_point: PointDefaults,
    pub sweep: SweepDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            input_unit: TemperatureUnit::Celsius,
            output_format: OutputFormat::Table,
            default_point: PointDefaults::default(),
            sweep: SweepDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
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
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 저장하고 돌려준다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("language = \"ko\"\noutput_format = \"Json\"\n").unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.output_format, OutputFormat::Json);
        assert_eq!(cfg.input_unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.default_point, PointDefaults::default());
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.input_unit = TemperatureUnit::Fahrenheit;
        cfg.sweep.step = 2.5;
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn default_point_converts_unit() {
        let defaults = PointDefaults {
            outdoor: 50.0,
            flow: 95.0,
            return_temp: 86.0,
        };
        let p = defaults.to_point(TemperatureUnit::Fahrenheit);
        assert!((p.outdoor_c - 10.0).abs() < 1e-9);
        assert!((p.flow_c - 35.0).abs() < 1e-9);
        assert!((p.return_c - 30.0).abs() < 1e-9);
    }
}
