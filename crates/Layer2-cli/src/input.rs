//! 표준 입력 처리
//!
//! 한 줄에서 공백으로 구분된 첫 번째 정수 토큰만 읽는다

use fibbench_core::{Error, Result};
use std::io::{self, BufRead, Write};

/// "Enter n: " 프롬프트를 띄우고 인덱스 하나를 읽는다
pub fn prompt_for_index() -> Result<i64> {
    print!("Enter n: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    parse_index(&line)
}

/// 첫 번째 공백 구분 토큰을 i64로 파싱
pub fn parse_index(line: &str) -> Result<i64> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::InvalidInput("no integer on standard input".to_string()))?;

    token
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(format!("not a parseable integer: '{}'", token)))
}
