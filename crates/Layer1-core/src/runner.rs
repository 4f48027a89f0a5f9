//! Benchmark Runner
//!
//! Fibonacci 계산 실행 및 시간 측정

use crate::error::{Error, Result};
use crate::fib;
use crate::timing::{TimingCollector, TimingMetrics};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 실행 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// 반복 횟수 (평균 계산용)
    pub iterations: u32,

    /// 워밍업 실행 횟수
    pub warmup_runs: u32,

    /// 상세 로깅
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            warmup_runs: 0,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// 설정 검증
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::Config(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 실행 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// 요청한 인덱스
    pub index: i64,

    /// 계산된 Fibonacci 값
    pub value: u64,

    /// 시간 메트릭
    pub metrics: TimingMetrics,
}

/// 실행기
pub struct Runner {
    /// 설정
    config: RunConfig,

    /// 시간 수집기
    collector: TimingCollector,
}

impl Runner {
    /// 새 실행기 생성
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            collector: TimingCollector::new(),
        }
    }

    /// 기본 설정으로 생성
    pub fn with_default_config() -> Self {
        Self::new(RunConfig::default())
    }

    /// 단일 인덱스 실행
    ///
    /// 워밍업 실행은 측정에서 제외된다. 모든 측정 실행은 같은 값을
    /// 계산해야 한다.
    pub fn run(&mut self, n: i64) -> Result<RunResult> {
        self.config.validate()?;

        // 워밍업 (측정 제외)
        for _ in 0..self.config.warmup_runs {
            let _ = fib::fibonacci(n)?;
        }

        self.collector.start();
        let mut value: u64 = 0;

        for i in 0..self.config.iterations {
            let run_start = Instant::now();
            let current = fib::fibonacci(n)?;
            let run_ns = run_start.elapsed().as_nanos();
            self.collector.record_run(run_ns);

            if i == 0 {
                value = current;
            } else if current != value {
                return Err(Error::Internal(format!(
                    "non-deterministic result for index {}: {} != {}",
                    n, current, value
                )));
            }

            if self.config.verbose {
                tracing::debug!(run = i + 1, elapsed_ns = %run_ns, "run complete");
            }
        }

        let metrics = self.collector.finish();
        tracing::debug!(index = n, value, runs = metrics.runs, "measurement complete");

        Ok(RunResult { index: n, value, metrics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_single_iteration() {
        let mut runner = Runner::with_default_config();
        let result = runner.run(10).unwrap();

        assert_eq!(result.index, 10);
        assert_eq!(result.value, 89);
        assert_eq!(result.metrics.runs, 1);
    }

    #[test]
    fn test_run_multiple_iterations() {
        let mut runner = Runner::new(RunConfig {
            iterations: 5,
            warmup_runs: 2,
            verbose: false,
        });
        let result = runner.run(20).unwrap();

        assert_eq!(result.value, 10946);
        // 워밍업은 측정에 포함되지 않음
        assert_eq!(result.metrics.runs, 5);
        assert!(result.metrics.min_ns <= result.metrics.max_ns);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut runner = Runner::new(RunConfig {
            iterations: 0,
            warmup_runs: 0,
            verbose: false,
        });
        assert!(matches!(runner.run(10), Err(Error::Config(_))));
    }

    #[test]
    fn test_negative_index_propagates() {
        let mut runner = Runner::with_default_config();
        assert!(matches!(runner.run(-5), Err(Error::NegativeIndex(-5))));
    }

    #[test]
    fn test_overflow_propagates_from_warmup() {
        let mut runner = Runner::new(RunConfig {
            iterations: 1,
            warmup_runs: 1,
            verbose: false,
        });
        assert!(matches!(runner.run(93), Err(Error::Overflow { .. })));
    }
}
