use serde::Serialize;
use tracing::{debug, warn};

use super::offsets::{cond_offset, eta_carnot, evap_offset, round_to};
use crate::units::{to_celsius, to_kelvin, TemperatureUnit};

/// 한 운전점을 이루는 세 온도(°C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// 외기 온도(°C)
    pub outdoor_c: f64,
    /// 공급(유량) 수온(°C)
    pub flow_c: f64,
    /// 환수 수온(°C). 물리적으로는 공급 수온보다 낮아야 하지만 검사하지 않는다.
    pub return_c: f64,
}

impl OperatingPoint {
    pub const fn new(outdoor_c: f64, flow_c: f64, return_c: f64) -> Self {
        Self {
            outdoor_c,
            flow_c,
            return_c,
        }
    }

    /// 다른 단위로 입력된 세 온도를 섭씨 운전점으로 만든다.
    pub fn from_unit(outdoor: f64, flow: f64, return_temp: f64, unit: TemperatureUnit) -> Self {
        Self::new(
            to_celsius(outdoor, unit),
            to_celsius(flow, unit),
            to_celsius(return_temp, unit),
        )
    }

    fn check_finite(&self) -> Result<(), CopError> {
        let fields = [
            ("outdoor", self.outdoor_c),
            ("flow", self.flow_c),
            ("return", self.return_c),
        ];
        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((name, _)) => Err(CopError::NonFiniteInput(name)),
            None => Ok(()),
        }
    }
}

/// 한 운전점에 대한 COP 계산 결과. 직렬화 키는 외부 소비자와의 호환을 위해 고정한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CopReport {
    #[serde(rename = "Outdoor °C")]
    pub outdoor_c: f64,
    #[serde(rename = "Flow °C")]
    pub flow_c: f64,
    #[serde(rename = "Return °C")]
    pub return_c: f64,
    /// 콘덴서 온도차 [K]
    #[serde(rename = "ΔT_cond K")]
    pub delta_t_cond_k: f64,
    /// 증발기 온도차 [K]
    #[serde(rename = "ΔT_evap K")]
    pub delta_t_evap_k: f64,
    /// 카르노 효율 계수 (0~1, 소수 셋째 자리)
    #[serde(rename = "ηCarnot")]
    pub eta_carnot: f64,
    /// 이상(카르노) COP, 소수 둘째 자리
    #[serde(rename = "Carnot COP")]
    pub carnot_cop: f64,
    /// 예상(실제) COP = η × 카르노 COP, 소수 둘째 자리
    #[serde(rename = "Expected COP")]
    pub expected_cop: f64,
}

/// COP 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CopError {
    /// 응축/증발 포화 온도가 같아 카르노 COP의 분모가 0이 됨
    DegenerateOperatingPoint { condensing_k: f64, evaporating_k: f64 },
    /// NaN 또는 무한대 입력
    NonFiniteInput(&'static str),
}

impl std::fmt::Display for CopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopError::DegenerateOperatingPoint {
                condensing_k,
                evaporating_k,
            } => write!(
                f,
                "응축 포화온도({condensing_k:.2} K)와 증발 포화온도({evaporating_k:.2} K)가 같아 COP를 계산할 수 없습니다"
            ),
            CopError::NonFiniteInput(name) => write!(f, "유효하지 않은 입력값: {name}"),
        }
    }
}

impl std::error::Error for CopError {}

/// 세 온도(°C)로 aroTHERM plus 7 kW 기준의 카르노/예상 COP를 계산한다.
pub fn arotherm_cop(outdoor_c: f64, flow_c: f64, return_c: f64) -> Result<CopReport, CopError> {
    compute_cop(OperatingPoint::new(outdoor_c, flow_c, return_c))
}

/// 운전점으로부터 COP 보고서를 만든다.
///
/// 1. 콘덴서 포화온도 = (공급+환수)/2 + ΔT_cond, 증발기 포화온도 = 외기 - ΔT_evap (모두 K)
/// 2. 카르노 COP = T_cond / (T_cond - T_evap)
/// 3. 예상 COP = η × 카르노 COP
pub fn compute_cop(point: OperatingPoint) -> Result<CopReport, CopError> {
    point.check_finite()?;
    if point.return_c >= point.flow_c {
        warn!(
            flow_c = point.flow_c,
            return_c = point.return_c,
            "return temperature is not below flow temperature"
        );
    }

    let delta_t_cond_k = cond_offset(point.flow_c);
    let delta_t_evap_k = evap_offset(point.outdoor_c);

    let mean_water_c = (point.flow_c + point.return_c) / 2.0;
    let t_cond_sat_k = to_kelvin(mean_water_c + delta_t_cond_k, TemperatureUnit::Celsius);
    let t_evap_sat_k = to_kelvin(point.outdoor_c - delta_t_evap_k, TemperatureUnit::Celsius);

    let lift_k = t_cond_sat_k - t_evap_sat_k;
    if lift_k == 0.0 {
        warn!(t_cond_sat_k, t_evap_sat_k, "saturation temperatures coincide");
        return Err(CopError::DegenerateOperatingPoint {
            condensing_k: t_cond_sat_k,
            evaporating_k: t_evap_sat_k,
        });
    }

    let cop_carnot = t_cond_sat_k / lift_k;
    let eta = eta_carnot(point.outdoor_c, point.flow_c);
    let cop_real = eta * cop_carnot;
    debug!(
        outdoor_c = point.outdoor_c,
        flow_c = point.flow_c,
        return_c = point.return_c,
        t_cond_sat_k,
        t_evap_sat_k,
        cop_carnot,
        cop_real,
        "cop computed"
    );

    Ok(CopReport {
        outdoor_c: point.outdoor_c,
        flow_c: point.flow_c,
        return_c: point.return_c,
        delta_t_cond_k,
        delta_t_evap_k,
        eta_carnot: eta,
        carnot_cop: round_to(cop_carnot, 2),
        expected_cop: round_to(cop_real, 2),
    })
}
