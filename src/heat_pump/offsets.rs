//! 제조사 데이터에서 추린 경험적 보정표(콘덴서/증발기 온도차, 카르노 효율 계수).
//!
//! 각 표는 위에서부터 순서대로 평가하며 처음 만족하는 규칙의 값을 사용한다.
//! 중첩 조건문 대신 규칙 목록으로 두어 경계값을 표 단위로 검증할 수 있게 한다.

use tracing::debug;

/// 규칙 하나가 적용되는 구간 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// 입력 ≤ 한계값
    AtMost(f64),
    /// 입력 ≥ 한계값
    AtLeast(f64),
    /// 앞의 규칙에 모두 해당하지 않을 때
    Otherwise,
}

/// 구간 조건과 그 구간에서 돌려줄 값의 쌍.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRule {
    pub bound: Bound,
    pub value: f64,
}

impl BandRule {
    pub const fn new(bound: Bound, value: f64) -> Self {
        Self { bound, value }
    }

    /// 입력값이 이 규칙의 구간에 속하는지 확인한다.
    pub fn matches(&self, x: f64) -> bool {
        match self.bound {
            Bound::AtMost(limit) => x <= limit,
            Bound::AtLeast(limit) => x >= limit,
            Bound::Otherwise => true,
        }
    }
}

/// 유량(공급) 온도 → 콘덴서 온도차 [K]. 상한 포함, 오름차순.
pub const COND_OFFSET_RULES: [BandRule; 3] = [
    BandRule::new(Bound::AtMost(37.0), 3.0), // W30/W35
    BandRule::new(Bound::AtMost(52.0), 4.0), // W40/W45
    BandRule::new(Bound::Otherwise, 5.0),    // 55 °C 급탕
];

/// 외기 온도 → 증발기 온도차 [K]. 하한 포함, 내림차순.
pub const EVAP_OFFSET_RULES: [BandRule; 4] = [
    BandRule::new(Bound::AtLeast(5.0), 5.0),
    BandRule::new(Bound::AtLeast(0.0), 6.0),
    BandRule::new(Bound::AtLeast(-5.0), 7.0),
    BandRule::new(Bound::Otherwise, 8.0),
];

/// 외기 온도 → 카르노 효율 기본값.
pub const ETA_BASE_RULES: [BandRule; 4] = [
    BandRule::new(Bound::AtLeast(5.0), 0.48),
    BandRule::new(Bound::AtLeast(0.0), 0.47),
    BandRule::new(Bound::AtLeast(-5.0), 0.45),
    BandRule::new(Bound::Otherwise, 0.44),
];

/// 유량 온도 → 카르노 효율 감점. 한 번만 적용한다(누적 아님).
pub const ETA_FLOW_PENALTY_RULES: [BandRule; 3] = [
    BandRule::new(Bound::AtLeast(50.0), 0.03),
    BandRule::new(Bound::AtLeast(40.0), 0.02),
    BandRule::new(Bound::Otherwise, 0.0),
];

/// 규칙 목록에서 처음 일치하는 규칙을 찾는다.
/// 모든 표가 `Otherwise`로 끝나므로 NaN 입력도 마지막 규칙으로 떨어진다.
pub fn first_match(rules: &[BandRule], x: f64) -> Option<&BandRule> {
    rules
        .iter()
        .find(|rule| rule.matches(x))
        .or_else(|| rules.last())
}

fn lookup(table: &'static str, rules: &[BandRule], x: f64) -> f64 {
    let value = first_match(rules, x).map_or(0.0, |rule| rule.value);
    debug!(table, input = x, value, "band lookup");
    value
}

/// 소수점 `digits` 자리에서 반올림한다(0.5는 0에서 먼 쪽).
/// 음수 동률(-0.125 → -0.13)은 half-even 방식과 결과가 다르다.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// 평균 수온과 냉매 응축(포화) 온도 사이의 온도차 [K].
pub fn cond_offset(flow_temp_c: f64) -> f64 {
    lookup("cond_offset", &COND_OFFSET_RULES, flow_temp_c)
}

/// 외기와 냉매 증발(포화) 온도 사이의 온도차 [K].
pub fn evap_offset(outdoor_temp_c: f64) -> f64 {
    lookup("evap_offset", &EVAP_OFFSET_RULES, outdoor_temp_c)
}

/// 장비 전체의 카르노 효율 계수(0~1). 소수 셋째 자리로 반올림한다.
pub fn eta_carnot(outdoor_temp_c: f64, flow_temp_c: f64) -> f64 {
    let base = lookup("eta_base", &ETA_BASE_RULES, outdoor_temp_c);
    // 고온 공급수일수록 소폭 감점
    let penalty = lookup("eta_flow_penalty", &ETA_FLOW_PENALTY_RULES, flow_temp_c);
    round_to(base - penalty, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_ends_with_catch_all() {
        for rules in [
            &COND_OFFSET_RULES[..],
            &EVAP_OFFSET_RULES[..],
            &ETA_BASE_RULES[..],
            &ETA_FLOW_PENALTY_RULES[..],
        ] {
            assert_eq!(rules.last().map(|r| r.bound), Some(Bound::Otherwise));
        }
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // 60은 두 번째 규칙(≥40)도 만족하지만 첫 규칙이 우선
        let rule = first_match(&ETA_FLOW_PENALTY_RULES, 60.0).unwrap();
        assert_eq!(rule.value, 0.03);
        let rule = first_match(&COND_OFFSET_RULES, 10.0).unwrap();
        assert_eq!(rule.value, 3.0);
    }

    #[test]
    fn empty_table_has_no_match() {
        assert!(first_match(&[], 1.0).is_none());
    }

    #[test]
    fn nan_falls_through_to_catch_all() {
        assert_eq!(cond_offset(f64::NAN), 5.0);
        assert_eq!(evap_offset(f64::NAN), 8.0);
    }

    #[test]
    fn round_to_removes_subtraction_noise() {
        // 0.48 - 0.02 = 0.45999999999999996
        assert_eq!(round_to(0.48 - 0.02, 3), 0.46);
        assert_eq!(round_to(0.45 - 0.03, 3), 0.42);
        assert_eq!(round_to(3.495_554_216_867_469_6, 2), 3.5);
        assert_eq!(round_to(11.907_843_137_254_9, 2), 11.91);
    }

    #[test]
    fn round_to_half_goes_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }
}
