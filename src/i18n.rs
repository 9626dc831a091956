use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_DEMO: &str = "main_menu.demo";
    pub const MAIN_MENU_SWEEP: &str = "main_menu.sweep";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const PROMPT_OUTDOOR: &str = "prompt.outdoor";
    pub const PROMPT_FLOW: &str = "prompt.flow";
    pub const PROMPT_RETURN: &str = "prompt.return";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const DEMO_HEADING: &str = "demo.heading";

    pub const SWEEP_HEADING: &str = "sweep.heading";
    pub const PROMPT_SWEEP_FROM: &str = "prompt.sweep_from";
    pub const PROMPT_SWEEP_TO: &str = "prompt.sweep_to";
    pub const PROMPT_SWEEP_STEP: &str = "prompt.sweep_step";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_FORMAT_OPTIONS: &str = "settings.format_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_INPUTS: &str = "gui.inputs";
    pub const GUI_RESULT: &str = "gui.result";
    pub const GUI_DEMO_POINTS: &str = "gui.demo_points";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: &Path) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: load_overrides(pack_dir, lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩(`<dir>/<code>.toml`)을 로드한다. 중첩 테이블은 점으로 이어 키를 만든다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{}.toml", Language::from_code(lang).as_code()));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Heat Pump COP Toolbox ===",
        MAIN_MENU_CALCULATE => "1) COP 계산",
        MAIN_MENU_DEMO => "2) 예시 운전점",
        MAIN_MENU_SWEEP => "3) 외기 온도 스윕",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CALC_HEADING => "\n-- COP 계산 --",
        PROMPT_OUTDOOR => "외기 온도",
        PROMPT_FLOW => "공급 수온",
        PROMPT_RETURN => "환수 수온",
        PROMPT_KEEP_DEFAULT => "엔터=",
        DEMO_HEADING => "\n-- 예시 운전점 --",
        SWEEP_HEADING => "\n-- 외기 온도 스윕 --",
        PROMPT_SWEEP_FROM => "시작 외기 온도",
        PROMPT_SWEEP_TO => "끝 외기 온도",
        PROMPT_SWEEP_STEP => "간격",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 입력 온도 단위  3) 출력 형식",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1=자동 2=한국어 3=English",
        SETTINGS_UNIT_OPTIONS => "온도 단위: 1=°C 2=K 3=°F 4=R",
        SETTINGS_FORMAT_OPTIONS => "출력 형식: 1=표 2=JSON",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        GUI_TITLE => "히트펌프 COP 계산기",
        GUI_INPUTS => "입력",
        GUI_RESULT => "결과",
        GUI_DEMO_POINTS => "예시:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Heat Pump COP Toolbox ===",
        MAIN_MENU_CALCULATE => "1) Calculate COP",
        MAIN_MENU_DEMO => "2) Demo operating points",
        MAIN_MENU_SWEEP => "3) Outdoor temperature sweep",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- COP Calculation --",
        PROMPT_OUTDOOR => "Outdoor temperature",
        PROMPT_FLOW => "Flow temperature",
        PROMPT_RETURN => "Return temperature",
        PROMPT_KEEP_DEFAULT => "enter=",
        DEMO_HEADING => "\n-- Demo operating points --",
        SWEEP_HEADING => "\n-- Outdoor temperature sweep --",
        PROMPT_SWEEP_FROM => "From outdoor temperature",
        PROMPT_SWEEP_TO => "To outdoor temperature",
        PROMPT_SWEEP_STEP => "Step",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Input temperature unit  3) Output format",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1=auto 2=한국어 3=English",
        SETTINGS_UNIT_OPTIONS => "Temperature unit: 1=°C 2=K 3=°F 4=R",
        SETTINGS_FORMAT_OPTIONS => "Output format: 1=table 2=JSON",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        GUI_TITLE => "Heat Pump COP Calculator",
        GUI_INPUTS => "Inputs",
        GUI_RESULT => "Result",
        GUI_DEMO_POINTS => "Demo:",
        _ => return None,
    })
}
