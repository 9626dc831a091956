#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 COP 계산기.

use eframe::{egui, App, Frame};
use heat_pump_cop_toolbox::{
    config::{self, Config, PointDefaults},
    heat_pump::{self, DEMO_POINTS},
    i18n::{self, keys, Language, Translator},
    telemetry,
    units::{from_kelvin, to_kelvin, TemperatureUnit},
};
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    telemetry::init_tracing();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_default();
    let lang = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 460.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Heat Pump COP Toolbox",
        options,
        Box::new(move |cc| {
            let mut tr = Translator::new_with_pack(&lang, Path::new("locales"));
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font error: {e}");
                // 한글 글꼴이 없으면 영어 화면으로 대체
                if tr.language() == Language::Ko {
                    tr = Translator::new_with_pack("en", Path::new("locales"));
                }
            }
            Box::new(GuiApp::new(app_cfg, tr))
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 글꼴 뒤에 두어 라틴 문자는 기본 글꼴로 그린다
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 글꼴을 찾아 등록한다. 없으면 Err를 돌려준다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        "assets/fonts/malgun.ttf".to_string(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".to_string(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".to_string(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand).to_string_lossy().into_owned());
        }
    }
    for path in candidates {
        if Path::new(&path).exists() {
            let bytes = fs::read(&path).map_err(|e| format!("Failed to read font ({path}): {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found".into())
}

struct GuiApp {
    config: Config,
    tr: Translator,
    outdoor: f64,
    flow: f64,
    return_temp: f64,
}

impl GuiApp {
    fn new(config: Config, tr: Translator) -> Self {
        let d = config.default_point;
        Self {
            outdoor: d.outdoor,
            flow: d.flow,
            return_temp: d.return_temp,
            config,
            tr,
        }
    }

    fn unit(&self) -> TemperatureUnit {
        self.config.input_unit
    }

    /// 예시 운전점(°C)을 입력 단위로 바꿔 채운다.
    fn fill_from_celsius(&mut self, point: &heat_pump::OperatingPoint) {
        let unit = self.unit();
        let conv = |c: f64| from_kelvin(to_kelvin(c, TemperatureUnit::Celsius), unit);
        self.outdoor = conv(point.outdoor_c);
        self.flow = conv(point.flow_c);
        self.return_temp = conv(point.return_c);
    }

    fn inputs_ui(&mut self, ui: &mut egui::Ui) {
        let suffix = format!(" {}", self.unit().symbol());
        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(keys::PROMPT_OUTDOOR));
                ui.add(egui::DragValue::new(&mut self.outdoor).speed(0.5).suffix(&suffix));
                ui.end_row();
                ui.label(self.tr.t(keys::PROMPT_FLOW));
                ui.add(egui::DragValue::new(&mut self.flow).speed(0.5).suffix(&suffix));
                ui.end_row();
                ui.label(self.tr.t(keys::PROMPT_RETURN));
                ui.add(egui::DragValue::new(&mut self.return_temp).speed(0.5).suffix(&suffix));
                ui.end_row();
            });
        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::GUI_DEMO_POINTS));
            for (idx, point) in DEMO_POINTS.iter().enumerate() {
                if ui.button(format!("{}", idx + 1)).clicked() {
                    self.fill_from_celsius(point);
                }
            }
        });
    }

    fn result_ui(&self, ui: &mut egui::Ui) {
        let point = heat_pump::OperatingPoint::from_unit(
            self.outdoor,
            self.flow,
            self.return_temp,
            self.unit(),
        );
        match heat_pump::compute_cop(point) {
            Ok(report) => {
                egui::Grid::new("result_grid")
                    .num_columns(2)
                    .striped(true)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for (label, value) in report.fields() {
                            ui.strong(label);
                            ui.label(format!("{value:?}"));
                            ui.end_row();
                        }
                    });
            }
            Err(e) => {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 60, 60),
                    format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
                );
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.heading(self.tr.t(keys::GUI_TITLE));
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new(self.tr.t(keys::GUI_INPUTS)).strong());
            self.inputs_ui(ui);
            ui.separator();
            ui.label(egui::RichText::new(self.tr.t(keys::GUI_RESULT)).strong());
            self.result_ui(ui);
        });
    }

    /// 마지막 입력값을 다음 실행의 기본값으로 저장한다.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.default_point = PointDefaults {
            outdoor: self.outdoor,
            flow: self.flow,
            return_temp: self.return_temp,
        };
        if let Err(e) = self.config.save() {
            tracing::warn!("failed to save config: {e}");
        }
    }
}
