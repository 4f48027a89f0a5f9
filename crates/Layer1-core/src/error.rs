//! Error types for FibBench
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// FibBench 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 입력 관련
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: index {0} is negative")]
    NegativeIndex(i64),

    // ========================================================================
    // 계산 관련
    // ========================================================================
    #[error("Overflow: Fibonacci({n}) exceeds the 64-bit range (max index {max})")]
    Overflow { n: i64, max: i64 },

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::NegativeIndex(_)
                | Error::Overflow { .. }
                | Error::Config(_)
        )
    }

    /// Overflow 에러 생성 헬퍼
    pub fn overflow(n: i64) -> Self {
        Error::Overflow {
            n,
            max: crate::fib::MAX_INDEX,
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing() {
        assert!(Error::NegativeIndex(-1).is_user_facing());
        assert!(Error::overflow(93).is_user_facing());
        assert!(!Error::Internal("boom".to_string()).is_user_facing());
    }

    #[test]
    fn test_overflow_message() {
        let err = Error::overflow(93);
        assert_eq!(
            err.to_string(),
            "Overflow: Fibonacci(93) exceeds the 64-bit range (max index 92)"
        );
    }
}
