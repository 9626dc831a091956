use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::heat_pump::{
    self, report, sweep::SweepInput, CopError, OperatingPoint, SweepError, DEMO_POINTS,
};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::units::{delta_to_kelvin, to_celsius};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// COP 계산 오류
    Cop(CopError),
    /// 스윕 입력 오류
    Sweep(SweepError),
    /// 결과 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Cop(e) => write!(f, "COP 계산 오류: {e}"),
            AppError::Sweep(e) => write!(f, "스윕 오류: {e}"),
            AppError::Json(e) => write!(f, "결과 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CopError> for AppError {
    fn from(value: CopError) -> Self {
        AppError::Cop(value)
    }
}

impl From<SweepError> for AppError {
    fn from(value: SweepError) -> Self {
        AppError::Sweep(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// 설정 단위로 입력된 세 온도의 COP 보고서를 출력 문자열로 만든다.
pub fn calculate(
    config: &Config,
    outdoor: f64,
    flow: f64,
    return_temp: f64,
) -> Result<String, AppError> {
    let point = OperatingPoint::from_unit(outdoor, flow, return_temp, config.input_unit);
    let cop_report = heat_pump::compute_cop(point)?;
    Ok(report::render(&cop_report, config.output_format)?)
}

/// 예시 운전점 네 개의 결과를 만든다. 예시 값은 항상 °C 기준이다.
pub fn demo(config: &Config) -> Result<String, AppError> {
    let reports = DEMO_POINTS
        .iter()
        .map(|p| heat_pump::compute_cop(*p))
        .collect::<Result<Vec<_>, _>>()?;
    match config.output_format {
        report::OutputFormat::Json => Ok(serde_json::to_string_pretty(&reports)?),
        report::OutputFormat::Table => Ok(reports
            .iter()
            .map(report::render_table)
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

/// 설정 단위로 입력된 구간에 대해 외기 온도 스윕 결과를 만든다.
pub fn sweep(
    config: &Config,
    from: f64,
    to: f64,
    step: f64,
    flow: f64,
    return_temp: f64,
) -> Result<String, AppError> {
    let unit = config.input_unit;
    let input = SweepInput {
        from_c: to_celsius(from, unit),
        to_c: to_celsius(to, unit),
        step_c: delta_to_kelvin(step, unit),
        flow_c: to_celsius(flow, unit),
        return_c: to_celsius(return_temp, unit),
    };
    let rows = heat_pump::sweep_outdoor(&input)?;
    Ok(report::render_sweep(&rows, config.output_format)?)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config)?,
            MenuChoice::Demo => ui_cli::handle_demo(tr, config)?,
            MenuChoice::Sweep => ui_cli::handle_sweep(tr, config)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save_to(config_path)?;
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
