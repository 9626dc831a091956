//! COP 계산 회귀 테스트. 기준값은 보정표와 카르노 식으로 한 번 계산해 고정했다.
use heat_pump_cop_toolbox::heat_pump::{
    arotherm_cop, compute_cop, cond_offset, eta_carnot, evap_offset, sweep_outdoor, CopError,
    CopReport, OperatingPoint, SweepInput, DEMO_POINTS,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn check(report: &CopReport, cond: f64, evap: f64, eta: f64, carnot: f64, expected: f64) {
    assert_eq!(report.delta_t_cond_k, cond, "ΔT_cond");
    assert_eq!(report.delta_t_evap_k, evap, "ΔT_evap");
    assert_close("ηCarnot", report.eta_carnot, eta, 1e-12);
    assert_close("Carnot COP", report.carnot_cop, carnot, 1e-9);
    assert_close("Expected COP", report.expected_cop, expected, 1e-9);
}

#[test]
fn mild_space_heating() {
    let r = arotherm_cop(10.0, 30.0, 25.0).expect("cop");
    assert_eq!((r.outdoor_c, r.flow_c, r.return_c), (10.0, 30.0, 25.0));
    // (27.5+3+273.15) / ((27.5+3+273.15) - (10-5+273.15)) = 11.9078...
    check(&r, 3.0, 5.0, 0.48, 11.91, 5.72);
}

#[test]
fn freezing_point_day() {
    let r = arotherm_cop(0.0, 35.0, 30.0).expect("cop");
    // 공급 35 °C는 37 이하 구간이므로 ΔT_cond = 3
    check(&r, 3.0, 6.0, 0.47, 7.44, 3.5);
}

#[test]
fn colder_higher_flow() {
    let r = arotherm_cop(-3.0, 45.0, 40.0).expect("cop");
    // 기본 0.45에서 40 °C 이상 감점 0.02
    check(&r, 4.0, 7.0, 0.43, 5.66, 2.43);
}

#[test]
fn dhw_lift_to_55() {
    let r = arotherm_cop(10.0, 55.0, 48.0).expect("cop");
    check(&r, 5.0, 5.0, 0.45, 6.4, 2.88);
}

#[test]
fn deep_cold_high_flow() {
    let r = arotherm_cop(-10.0, 55.0, 50.0).expect("cop");
    check(&r, 5.0, 8.0, 0.41, 4.38, 1.8);
}

#[test]
fn unrounded_carnot_matches_formula() {
    let t_cond = (35.0 + 28.0) / 2.0 + 3.0 + 273.15;
    let t_evap = 7.0 - 5.0 + 273.15;
    let carnot = t_cond / (t_cond - t_evap);
    let r = arotherm_cop(7.0, 35.0, 28.0).expect("cop");
    approx::assert_abs_diff_eq!(r.carnot_cop, carnot, epsilon = 0.005);
    approx::assert_abs_diff_eq!(r.expected_cop, 0.48 * carnot, epsilon = 0.005);
    check(&r, 3.0, 5.0, 0.48, 9.47, 4.54);
}

#[test]
fn demo_points_all_succeed() {
    for p in DEMO_POINTS {
        let r = compute_cop(p).expect("demo point");
        assert!(r.carnot_cop > 1.0);
        assert!(r.expected_cop < r.carnot_cop);
    }
}

#[test]
fn cond_offset_bands() {
    assert_eq!(cond_offset(-20.0), 3.0);
    assert_eq!(cond_offset(37.0), 3.0);
    assert_eq!(cond_offset(37.01), 4.0);
    assert_eq!(cond_offset(52.0), 4.0);
    assert_eq!(cond_offset(52.01), 5.0);
    assert_eq!(cond_offset(80.0), 5.0);
}

#[test]
fn evap_offset_bands() {
    assert_eq!(evap_offset(20.0), 5.0);
    assert_eq!(evap_offset(5.0), 5.0);
    assert_eq!(evap_offset(4.99), 6.0);
    assert_eq!(evap_offset(0.0), 6.0);
    assert_eq!(evap_offset(-0.01), 7.0);
    assert_eq!(evap_offset(-5.0), 7.0);
    assert_eq!(evap_offset(-5.01), 8.0);
    assert_eq!(evap_offset(-25.0), 8.0);
}

#[test]
fn eta_carnot_table() {
    assert_eq!(eta_carnot(5.0, 39.9), 0.48);
    assert_eq!(eta_carnot(5.0, 40.0), 0.46);
    assert_eq!(eta_carnot(0.0, 50.0), 0.44);
    assert_eq!(eta_carnot(-5.0, 35.0), 0.45);
    assert_eq!(eta_carnot(-5.01, 35.0), 0.44);
    assert_eq!(eta_carnot(-20.0, 60.0), 0.41);
}

#[test]
fn eta_carnot_is_monotone() {
    let outdoors: Vec<f64> = (-40..=40).map(|i| i as f64 * 0.5).collect();
    let flows: Vec<f64> = (40..=140).map(|i| i as f64 * 0.5).collect();
    for &flow in &flows {
        for pair in outdoors.windows(2) {
            // 외기가 낮아질수록 증가하지 않음
            assert!(eta_carnot(pair[0], flow) <= eta_carnot(pair[1], flow));
        }
    }
    for &outdoor in &outdoors {
        for pair in flows.windows(2) {
            // 공급 수온이 높아질수록 증가하지 않음
            assert!(eta_carnot(outdoor, pair[1]) <= eta_carnot(outdoor, pair[0]));
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = arotherm_cop(-3.0, 45.0, 40.0).expect("cop");
    let b = arotherm_cop(-3.0, 45.0, 40.0).expect("cop");
    assert_eq!(a.carnot_cop.to_bits(), b.carnot_cop.to_bits());
    assert_eq!(a.expected_cop.to_bits(), b.expected_cop.to_bits());
    assert_eq!(a, b);
}

#[test]
fn coinciding_saturation_temperatures_are_reported() {
    // 평균 수온 2 + ΔT_cond 3 = 5 = 외기 10 - ΔT_evap 5
    match arotherm_cop(10.0, 5.0, -1.0) {
        Err(CopError::DegenerateOperatingPoint {
            condensing_k,
            evaporating_k,
        }) => {
            assert_close("condensing", condensing_k, 278.15, 1e-9);
            assert_eq!(condensing_k, evaporating_k);
        }
        other => panic!("expected degenerate error, got {other:?}"),
    }
    // 평균 수온 -9 + 3 = -6 = 외기 0 - 6
    assert!(matches!(
        arotherm_cop(0.0, -10.0, -8.0),
        Err(CopError::DegenerateOperatingPoint { .. })
    ));
}

#[test]
fn non_finite_input_is_rejected() {
    assert_eq!(
        arotherm_cop(f64::NAN, 35.0, 30.0),
        Err(CopError::NonFiniteInput("outdoor"))
    );
    assert_eq!(
        arotherm_cop(7.0, 35.0, f64::INFINITY),
        Err(CopError::NonFiniteInput("return"))
    );
}

#[test]
fn out_of_envelope_inputs_still_compute() {
    // 환수 > 공급은 경고만 남기고 계산한다
    let r = compute_cop(OperatingPoint::new(7.0, 30.0, 40.0)).expect("cop");
    assert!(r.carnot_cop.is_finite());
}

#[test]
fn sweep_keeps_degenerate_row() {
    let rows = sweep_outdoor(&SweepInput {
        from_c: 8.0,
        to_c: 12.0,
        step_c: 1.0,
        flow_c: 5.0,
        return_c: -1.0,
    })
    .expect("sweep");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2].outdoor_c, 10.0);
    assert!(matches!(
        rows[2].outcome,
        Err(CopError::DegenerateOperatingPoint { .. })
    ));
    assert!(rows
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 2)
        .all(|(_, row)| row.outcome.is_ok()));
}

#[test]
fn sweep_matches_single_point_calls() {
    let rows = sweep_outdoor(&SweepInput {
        from_c: -10.0,
        to_c: 10.0,
        step_c: 5.0,
        flow_c: 45.0,
        return_c: 40.0,
    })
    .expect("sweep");
    for row in &rows {
        let single = arotherm_cop(row.outdoor_c, 45.0, 40.0);
        assert_eq!(row.outcome, single);
    }
}
