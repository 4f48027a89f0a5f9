//! Run Report
//!
//! 실행 결과 리포트 생성

use crate::error::Result;
use crate::runner::RunResult;
use crate::timing::TimingMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 리포트 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// 텍스트 (터미널 출력용)
    Text,
    /// JSON
    Json,
}

/// 실행 리포트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// 요청한 인덱스
    pub index: i64,

    /// 계산된 값
    pub value: u64,

    /// 평균 실행 시간 (초)
    pub elapsed_secs: f64,

    /// 시간 메트릭
    pub metrics: TimingMetrics,

    /// 생성 시간
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    /// 실행 결과로부터 리포트 생성
    pub fn from_result(result: &RunResult) -> Self {
        Self {
            index: result.index,
            value: result.value,
            elapsed_secs: result.metrics.avg_secs(),
            metrics: result.metrics.clone(),
            generated_at: Utc::now(),
        }
    }

    /// 지정된 형식으로 렌더링
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// 텍스트 렌더링
    ///
    /// 두 줄 고정: 결과 줄, 시간 줄 (소수점 6자리). 반복 측정이면
    /// 통계 줄이 하나 더 붙는다.
    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Fibonacci({}) = {}\n", self.index, self.value));
        out.push_str(&format!("Time taken = {:.6} seconds\n", self.elapsed_secs));

        if self.metrics.runs > 1 {
            out.push_str(&format!(
                "Runs = {} (min {:.6}s / avg {:.6}s / max {:.6}s)\n",
                self.metrics.runs,
                self.metrics.min_secs(),
                self.metrics.avg_secs(),
                self.metrics.max_secs(),
            ));
        }

        out
    }
}
