//! 공기-물 히트펌프(aroTHERM plus 7 kW) COP 추정 모듈.
//! 경험적 보정표 → 절대 포화온도 → 카르노 COP → 효율 계수 적용 순으로 계산한다.

pub mod cop;
pub mod offsets;
pub mod report;
pub mod sweep;

pub use cop::{arotherm_cop, compute_cop, CopError, CopReport, OperatingPoint};
pub use offsets::{cond_offset, eta_carnot, evap_offset};
pub use report::{OutputFormat, FIELD_LABELS};
pub use sweep::{sweep_outdoor, SweepError, SweepInput, SweepRow};

/// 대표 운전점 예시(난방 온화, 빙점, 한랭 고온수, 급탕 55 °C).
pub const DEMO_POINTS: [OperatingPoint; 4] = [
    OperatingPoint::new(10.0, 30.0, 25.0),
    OperatingPoint::new(0.0, 35.0, 30.0),
    OperatingPoint::new(-3.0, 45.0, 40.0),
    OperatingPoint::new(10.0, 55.0, 48.0),
];
