//! COP 보고서를 표/JSON 문자열로 만든다.

use serde::{Deserialize, Serialize};

use super::cop::CopReport;
use super::sweep::SweepRow;

/// 보고서 필드 이름. 기존 소비자와 호환되도록 단위 표기까지 그대로 유지한다.
pub const FIELD_LABELS: [&str; 8] = [
    "Outdoor °C",
    "Flow °C",
    "Return °C",
    "ΔT_cond K",
    "ΔT_evap K",
    "ηCarnot",
    "Carnot COP",
    "Expected COP",
];

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl CopReport {
    /// (필드 이름, 값) 쌍을 출력 순서대로 돌려준다.
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        let values = [
            self.outdoor_c,
            self.flow_c,
            self.return_c,
            self.delta_t_cond_k,
            self.delta_t_evap_k,
            self.eta_carnot,
            self.carnot_cop,
            self.expected_cop,
        ];
        let mut out = [("", 0.0); 8];
        for (slot, (label, value)) in out.iter_mut().zip(FIELD_LABELS.iter().zip(values)) {
            *slot = (*label, value);
        }
        out
    }
}

fn label_width() -> usize {
    FIELD_LABELS
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
}

/// 한 보고서를 "이름  값" 형태의 여러 줄 표로 만든다.
/// 값은 `Debug` 형식으로 적어 정수값도 `3.0`처럼 소수점을 유지한다.
pub fn render_table(report: &CopReport) -> String {
    let width = label_width();
    report
        .fields()
        .iter()
        .map(|(label, value)| format!("{label:<width$}  {value:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 한 보고서를 JSON 객체로 만든다. 키는 `FIELD_LABELS`와 같다.
pub fn to_json(report: &CopReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// 보고서 하나를 지정한 형식으로 출력 문자열로 만든다.
pub fn render(report: &CopReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => to_json(report),
    }
}

const SWEEP_COLUMNS: [&str; 5] = ["Outdoor °C", "ΔT_evap K", "ηCarnot", "Carnot COP", "Expected COP"];

/// 스윕 결과를 열 정렬된 표로 만든다. 실패한 행은 오류 메시지를 적는다.
pub fn render_sweep_table(rows: &[SweepRow]) -> String {
    let mut lines = vec![SWEEP_COLUMNS
        .iter()
        .map(|c| format!("{c:>12}"))
        .collect::<Vec<_>>()
        .join(" ")];
    for row in rows {
        let line = match &row.outcome {
            Ok(r) => format!(
                "{:>12?} {:>12?} {:>12?} {:>12?} {:>12?}",
                r.outdoor_c, r.delta_t_evap_k, r.eta_carnot, r.carnot_cop, r.expected_cop
            ),
            Err(e) => format!("{:>12?} {e}", row.outdoor_c),
        };
        lines.push(line);
    }
    lines.join("\n")
}

#[derive(Serialize)]
#[serde(untagged)]
enum SweepJsonRow<'a> {
    Ok(&'a CopReport),
    Err {
        #[serde(rename = "Outdoor °C")]
        outdoor_c: f64,
        error: String,
    },
}

/// 스윕 결과를 JSON 배열로 만든다.
pub fn sweep_to_json(rows: &[SweepRow]) -> Result<String, serde_json::Error> {
    let json_rows: Vec<SweepJsonRow<'_>> = rows
        .iter()
        .map(|row| match &row.outcome {
            Ok(r) => SweepJsonRow::Ok(r),
            Err(e) => SweepJsonRow::Err {
                outdoor_c: row.outdoor_c,
                error: e.to_string(),
            },
        })
        .collect();
    serde_json::to_string_pretty(&json_rows)
}

/// 스윕 결과를 지정한 형식으로 만든다.
pub fn render_sweep(rows: &[SweepRow], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_sweep_table(rows)),
        OutputFormat::Json => sweep_to_json(rows),
    }
}
