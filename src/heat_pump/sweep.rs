//! 외기 온도 구간을 훑어 여러 운전점을 한 번에 계산한다.
//! 각 운전점은 서로 독립이므로 한 점의 실패가 전체 계산을 멈추지 않는다.

use tracing::debug;

use super::cop::{compute_cop, CopError, CopReport, OperatingPoint};

/// 외기 온도 스윕 입력(°C). 공급/환수 온도는 고정한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepInput {
    pub from_c: f64,
    pub to_c: f64,
    pub step_c: f64,
    pub flow_c: f64,
    pub return_c: f64,
}

/// 스윕의 한 행. 계산 실패도 행으로 남긴다.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub outdoor_c: f64,
    pub outcome: Result<CopReport, CopError>,
}

/// 스윕 입력 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// 간격이 0 이하이거나 유한하지 않음
    InvalidStep(f64),
    /// 시작값이 끝값보다 큼
    EmptyRange { from_c: f64, to_c: f64 },
    /// 계산할 점이 상한을 넘음
    TooManyPoints { limit: usize },
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepError::InvalidStep(step) => write!(f, "스윕 간격이 올바르지 않음: {step}"),
            SweepError::EmptyRange { from_c, to_c } => {
                write!(f, "스윕 구간이 비어 있음: {from_c} > {to_c}")
            }
            SweepError::TooManyPoints { limit } => {
                write!(f, "스윕 점이 너무 많음: 최대 {limit}개")
            }
        }
    }
}

impl std::error::Error for SweepError {}

// 누적 오차로 끝점이 빠지지 않도록 허용하는 여유
const STEP_EPS: f64 = 1e-9;

/// 한 번의 스윕에서 계산하는 최대 점 개수.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// 시작값부터 끝값까지(끝값 포함) 간격마다 외기 온도를 만든다.
pub fn outdoor_points(from_c: f64, to_c: f64, step_c: f64) -> Result<Vec<f64>, SweepError> {
    if !step_c.is_finite() || step_c <= 0.0 {
        return Err(SweepError::InvalidStep(step_c));
    }
    if !from_c.is_finite() || !to_c.is_finite() || from_c > to_c {
        return Err(SweepError::EmptyRange { from_c, to_c });
    }
    // 구간이 매우 크면 차이가 무한대로 넘칠 수 있다
    let intervals = ((to_c - from_c) / step_c + STEP_EPS).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
        return Err(SweepError::TooManyPoints {
            limit: MAX_SWEEP_POINTS,
        });
    }
    let count = intervals as usize + 1;
    // 반복 덧셈 대신 곱셈으로 계산해 오차 누적을 피한다
    Ok((0..count).map(|i| from_c + i as f64 * step_c).collect())
}

/// 외기 온도 구간에 대해 COP를 일괄 계산한다.
pub fn sweep_outdoor(input: &SweepInput) -> Result<Vec<SweepRow>, SweepError> {
    let points = outdoor_points(input.from_c, input.to_c, input.step_c)?;
    debug!(count = points.len(), "outdoor sweep");
    Ok(points
        .into_iter()
        .map(|outdoor_c| SweepRow {
            outdoor_c,
            outcome: compute_cop(OperatingPoint::new(outdoor_c, input.flow_c, input.return_c)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_both_ends() {
        let pts = outdoor_points(-15.0, 15.0, 5.0).unwrap();
        assert_eq!(pts, vec![-15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0]);
    }

    #[test]
    fn fractional_step_keeps_end_point() {
        let pts = outdoor_points(0.0, 1.0, 0.1).unwrap();
        assert_eq!(pts.len(), 11);
        assert!((pts[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_range() {
        assert_eq!(outdoor_points(2.0, 2.0, 1.0).unwrap(), vec![2.0]);
    }

    #[test]
    fn overflowing_span_is_rejected() {
        assert_eq!(
            outdoor_points(-1e308, 1e308, 1.0),
            Err(SweepError::TooManyPoints {
                limit: MAX_SWEEP_POINTS
            })
        );
    }

    #[test]
    fn point_count_is_capped() {
        assert!(matches!(
            outdoor_points(0.0, 1e12, 1e-3),
            Err(SweepError::TooManyPoints { .. })
        ));
        let max = outdoor_points(0.0, (MAX_SWEEP_POINTS - 1) as f64, 1.0).unwrap();
        assert_eq!(max.len(), MAX_SWEEP_POINTS);
        assert!(outdoor_points(0.0, MAX_SWEEP_POINTS as f64, 1.0).is_err());
    }

    #[test]
    fn rejects_bad_step_and_range() {
        assert_eq!(outdoor_points(0.0, 1.0, 0.0), Err(SweepError::InvalidStep(0.0)));
        assert!(matches!(
            outdoor_points(0.0, 1.0, f64::NAN),
            Err(SweepError::InvalidStep(_))
        ));
        assert_eq!(
            outdoor_points(5.0, 1.0, 1.0),
            Err(SweepError::EmptyRange { from_c: 5.0, to_c: 1.0 })
        );
    }
}
