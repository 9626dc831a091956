use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use heat_pump_cop_toolbox::heat_pump::OutputFormat;
use heat_pump_cop_toolbox::{app, config, i18n, telemetry, units::TemperatureUnit};

/// 공기-물 히트펌프 COP 추정 CLI.
#[derive(Debug, Parser)]
#[command(name = "heat_pump_cop_cli", version, about)]
struct Cli {
    /// 언어(auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// 입력 온도 단위(c/k/f/r). 지정하지 않으면 설정값을 사용한다.
    #[arg(long, global = true, value_parser = parse_unit)]
    unit: Option<TemperatureUnit>,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    json: bool,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 운전점의 COP 계산
    #[command(allow_negative_numbers = true)]
    Calc {
        outdoor: f64,
        flow: f64,
        #[arg(value_name = "RETURN")]
        return_temp: f64,
    },
    /// 대표 운전점 네 개 계산
    Demo,
    /// 외기 온도 구간 스윕
    #[command(allow_negative_numbers = true)]
    Sweep {
        #[arg(long)]
        flow: f64,
        #[arg(long = "return", value_name = "RETURN")]
        return_temp: f64,
        #[arg(long)]
        from: Option<f64>,
        #[arg(long)]
        to: Option<f64>,
        #[arg(long)]
        step: Option<f64>,
    },
    /// 대화형 메뉴(기본값)
    Menu,
}

fn parse_unit(code: &str) -> Result<TemperatureUnit, String> {
    TemperatureUnit::from_code(code).ok_or_else(|| format!("unknown temperature unit: {code}"))
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing();
    let prefix_tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
    if let Err(err) = try_run(cli) {
        eprintln!("{}: {err}", prefix_tr.t(i18n::keys::ERROR_PREFIX));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, Path::new("locales"));

    // 하위 명령은 설정 파일을 다시 쓰지 않는다. 대화형 메뉴는 종료 시 현재 설정을 저장한다.
    if let Some(unit) = cli.unit {
        cfg.input_unit = unit;
    }
    if cli.json {
        cfg.output_format = OutputFormat::Json;
    }

    match cli.command.unwrap_or(Command::Menu) {
        Command::Calc {
            outdoor,
            flow,
            return_temp,
        } => println!("{}", app::calculate(&cfg, outdoor, flow, return_temp)?),
        Command::Demo => println!("{}", app::demo(&cfg)?),
        Command::Sweep {
            flow,
            return_temp,
            from,
            to,
            step,
        } => {
            let from = from.unwrap_or(cfg.sweep.from);
            let to = to.unwrap_or(cfg.sweep.to);
            let step = step.unwrap_or(cfg.sweep.step);
            println!("{}", app::sweep(&cfg, from, to, step, flow, return_temp)?);
        }
        Command::Menu => app::run(&mut cfg, &cli.config, &tr)?,
    }
    Ok(())
}
