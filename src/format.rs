//! 변환 결과를 화면에 표시할 문자열로 만든다.
//!
//! 고정 소수 자릿수(기본 4자리)로 반올림하고, 정수부에 천 단위 구분 기호를 넣은 뒤
//! 소수부 끝의 0과 남는 소수점을 지운다. 지수 표기는 쓰지 않는다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DECIMALS: usize = 4;
/// 이보다 큰 자릿수는 f64 정밀도를 넘어 의미 없는 숫자만 늘어난다.
pub const MAX_DECIMALS: usize = 12;

/// 숫자 표시 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatPolicy {
    /// 최대 소수 자릿수
    pub decimals: usize,
    /// 정수부에 `,` 구분 기호를 넣을지 여부
    pub group_thousands: bool,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            group_thousands: true,
        }
    }
}

impl FormatPolicy {
    pub fn with_decimals(decimals: usize) -> Self {
        Self {
            decimals: decimals.min(MAX_DECIMALS),
            ..Self::default()
        }
    }

    /// 값을 표시용 문자열로 바꾼다. 빈 문자열은 절대 돌려주지 않는다.
    pub fn format(&self, value: f64) -> String {
        if value == 0.0 {
            return "0".to_string();
        }
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        // f64 의 `{:.N}` 표기는 지수 형식을 쓰지 않는다.
        let fixed = format!("{:.*}", self.decimals.min(MAX_DECIMALS), value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        if value.is_sign_negative() {
            out.push('-');
        }
        if self.group_thousands {
            out.push_str(&group_thousands(int_part));
        } else {
            out.push_str(int_part);
        }
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }

        // 반올림 결과가 0 이 되면 "-0" 같은 부호만 남은 표기가 나온다.
        match out.as_str() {
            "" | "-" | "-0" => "0".to_string(),
            _ => out,
        }
    }
}

/// 기본 정책(소수 4자리, 천 단위 구분)으로 값을 표시한다.
pub fn format_result(value: f64) -> String {
    FormatPolicy::default().format(value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands_inserts_commas_from_the_right() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn tiny_values_round_to_zero_without_sign() {
        assert_eq!(format_result(0.00001), "0");
        assert_eq!(format_result(-0.00001), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn decimals_are_capped() {
        assert_eq!(FormatPolicy::with_decimals(40).decimals, MAX_DECIMALS);
    }

    #[test]
    fn grouping_can_be_disabled() {
        let policy = FormatPolicy {
            group_thousands: false,
            ..FormatPolicy::default()
        };
        assert_eq!(policy.format(1234567.5), "1234567.5");
    }
}
