//! Timing Metrics
//!
//! 실행 시간 지표 수집 및 관리 (monotonic wall clock)

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 실행 시간 메트릭
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingMetrics {
    /// 측정한 실행 횟수
    pub runs: u32,

    /// 총 소요 시간 (ns)
    pub total_ns: u128,

    /// 평균 실행 시간 (ns)
    pub avg_ns: f64,

    /// 최소 실행 시간 (ns)
    pub min_ns: u128,

    /// 최대 실행 시간 (ns)
    pub max_ns: u128,
}

impl TimingMetrics {
    /// 총 소요 시간 (초)
    pub fn total_secs(&self) -> f64 {
        self.total_ns as f64 / 1_000_000_000.0
    }

    /// 평균 실행 시간 (초)
    pub fn avg_secs(&self) -> f64 {
        self.avg_ns / 1_000_000_000.0
    }

    /// 최소 실행 시간 (초)
    pub fn min_secs(&self) -> f64 {
        self.min_ns as f64 / 1_000_000_000.0
    }

    /// 최대 실행 시간 (초)
    pub fn max_secs(&self) -> f64 {
        self.max_ns as f64 / 1_000_000_000.0
    }
}

/// 실행 시간 수집기
pub struct TimingCollector {
    /// 실행별 시간 기록 (ns)
    run_durations: Vec<u128>,

    /// 시작 시간
    start_time: Option<Instant>,
}

impl TimingCollector {
    /// 새 수집기 생성
    pub fn new() -> Self {
        Self {
            run_durations: Vec::new(),
            start_time: None,
        }
    }

    /// 수집 시작
    pub fn start(&mut self) {
        self.run_durations.clear();
        self.start_time = Some(Instant::now());
    }

    /// 실행 1회 기록
    pub fn record_run(&mut self, duration_ns: u128) {
        self.run_durations.push(duration_ns);
    }

    /// 수집 완료
    pub fn finish(&mut self) -> TimingMetrics {
        let mut metrics = TimingMetrics {
            runs: self.run_durations.len() as u32,
            ..Default::default()
        };

        if !self.run_durations.is_empty() {
            metrics.total_ns = self.run_durations.iter().sum();
            metrics.avg_ns = metrics.total_ns as f64 / self.run_durations.len() as f64;
            metrics.min_ns = *self.run_durations.iter().min().unwrap_or(&0);
            metrics.max_ns = *self.run_durations.iter().max().unwrap_or(&0);
        }

        self.start_time = None;
        metrics
    }

    /// 수집 중인지 확인
    pub fn is_collecting(&self) -> bool {
        self.start_time.is_some()
    }
}

impl Default for TimingCollector {
    fn default() -> Self {
        Self::new()
    }
}
