use serde::{Deserialize, Serialize};

/// 0 °C에 해당하는 절대온도 [K].
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    #[default]
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 화면 표시용 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "R",
        }
    }

    /// `c`, `k`, `f`, `r`(대소문자 무시, `°` 허용) 형태의 코드를 해석한다.
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().trim_start_matches('°').to_lowercase();
        match c.as_str() {
            "c" | "celsius" => Some(TemperatureUnit::Celsius),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "r" | "rankine" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + ZERO_CELSIUS_K,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - ZERO_CELSIUS_K,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_kelvin(to_kelvin(value, from), to)
}

/// 입력 단위의 온도를 섭씨로 변환한다. 섭씨 입력은 그대로 돌려준다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    convert_temperature(value, unit, TemperatureUnit::Celsius)
}

/// 온도차를 켈빈(=섭씨) 스케일로 변환한다. 기준점 없이 배율만 고려한다.
pub fn delta_to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin | TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit | TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}
