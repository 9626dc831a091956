use std::io::{self, Write};

use crate::app::{self, AppError};
use crate::config::{Config, PointDefaults};
use crate::heat_pump::report::OutputFormat;
use crate::i18n::{keys, Translator};
use crate::units::TemperatureUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Demo,
    Sweep,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_DEMO));
    println!("{}", tr.t(keys::MAIN_MENU_SWEEP));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        if let Some(choice) = parse_menu_choice(&sel) {
            return Ok(choice);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Calculate),
        "2" => Some(MenuChoice::Demo),
        "3" => Some(MenuChoice::Sweep),
        "4" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// COP 계산 메뉴를 처리한다. 계산에 성공한 입력은 다음 기본값으로 기억한다.
pub fn handle_calculate(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let unit = cfg.input_unit;
    let d = cfg.default_point;
    let outdoor = read_f64_or(tr, &prompt(tr, keys::PROMPT_OUTDOOR, unit, d.outdoor), d.outdoor)?;
    let flow = read_f64_or(tr, &prompt(tr, keys::PROMPT_FLOW, unit, d.flow), d.flow)?;
    let return_temp =
        read_f64_or(tr, &prompt(tr, keys::PROMPT_RETURN, unit, d.return_temp), d.return_temp)?;
    match app::calculate(cfg, outdoor, flow, return_temp) {
        Ok(out) => {
            println!("{out}");
            cfg.default_point = PointDefaults {
                outdoor,
                flow,
                return_temp,
            };
        }
        Err(AppError::Cop(e)) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// 예시 운전점 결과를 출력한다.
pub fn handle_demo(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DEMO_HEADING));
    println!("{}", app::demo(cfg)?);
    Ok(())
}

/// 외기 온도 스윕 메뉴를 처리한다.
pub fn handle_sweep(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SWEEP_HEADING));
    let unit = cfg.input_unit;
    let s = cfg.sweep;
    let d = cfg.default_point;
    let from = read_f64_or(tr, &prompt(tr, keys::PROMPT_SWEEP_FROM, unit, s.from), s.from)?;
    let to = read_f64_or(tr, &prompt(tr, keys::PROMPT_SWEEP_TO, unit, s.to), s.to)?;
    let step = read_f64_or(tr, &prompt(tr, keys::PROMPT_SWEEP_STEP, unit, s.step), s.step)?;
    let flow = read_f64_or(tr, &prompt(tr, keys::PROMPT_FLOW, unit, d.flow), d.flow)?;
    let return_temp =
        read_f64_or(tr, &prompt(tr, keys::PROMPT_RETURN, unit, d.return_temp), d.return_temp)?;
    match app::sweep(cfg, from, to, step, flow, return_temp) {
        Ok(out) => {
            println!("{out}");
            cfg.sweep.from = from;
            cfg.sweep.to = to;
            cfg.sweep.step = step;
        }
        Err(AppError::Sweep(e)) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경이 있었으면 `true`를 돌려준다.
/// 언어 변경은 다음 실행부터 적용된다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} language={}, unit={}, format={:?}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.input_unit.symbol(),
        cfg.output_format
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    let changed = match sel.trim() {
        "" => return Ok(false),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = match read_line(tr.t(keys::PROMPT_MENU_SELECT))?.trim() {
                "1" => Some("auto"),
                "2" => Some("ko"),
                "3" => Some("en"),
                _ => None,
            };
            if let Some(l) = lang {
                cfg.language = l.to_string();
            }
            lang.is_some()
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
            let unit = match read_line(tr.t(keys::PROMPT_MENU_SELECT))?.trim() {
                "1" => Some(TemperatureUnit::Celsius),
                "2" => Some(TemperatureUnit::Kelvin),
                "3" => Some(TemperatureUnit::Fahrenheit),
                "4" => Some(TemperatureUnit::Rankine),
                _ => None,
            };
            if let Some(u) = unit {
                cfg.input_unit = u;
            }
            unit.is_some()
        }
        "3" => {
            println!("{}", tr.t(keys::SETTINGS_FORMAT_OPTIONS));
            let format = match read_line(tr.t(keys::PROMPT_MENU_SELECT))?.trim() {
                "1" => Some(OutputFormat::Table),
                "2" => Some(OutputFormat::Json),
                _ => None,
            };
            if let Some(f) = format {
                cfg.output_format = f;
            }
            format.is_some()
        }
        _ => false,
    };
    if !changed {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(changed)
}

fn prompt(tr: &Translator, key: &str, unit: TemperatureUnit, default: f64) -> String {
    let label = tr.t(key);
    let unit = unit.symbol();
    let keep = tr.t(keys::PROMPT_KEEP_DEFAULT);
    format!("{label} [{unit}] ({keep}{default}): ")
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자를 읽는다. 빈 입력이면 기본값을 사용한다.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_number_or(&s, default) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn parse_number_or(input: &str, default: f64) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Some(default);
    }
    // 쉼표 소수점 입력 허용
    s.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu_choice(" 1\n"), Some(MenuChoice::Calculate));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
    }

    #[test]
    fn empty_input_keeps_default() {
        assert_eq!(parse_number_or("\n", 7.0), Some(7.0));
        assert_eq!(parse_number_or("-3,5\n", 7.0), Some(-3.5));
        assert_eq!(parse_number_or("abc", 7.0), None);
    }

    #[test]
    fn prompt_shows_unit_and_default() {
        let tr = Translator::new("en");
        let p = prompt(&tr, keys::PROMPT_FLOW, TemperatureUnit::Celsius, 35.0);
        assert_eq!(p, "Flow temperature [°C] (enter=35): ");
    }
}
