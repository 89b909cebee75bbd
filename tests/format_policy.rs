//! 결과 표시 정책 테스트.
use master_unit_converter::{convert, format_result, FormatPolicy};

#[test]
fn zero_is_plain_zero() {
    assert_eq!(format_result(0.0), "0");
}

#[test]
fn trailing_zeros_and_point_are_stripped() {
    assert_eq!(format_result(100.0), "100");
    assert_eq!(format_result(10.5), "10.5");
    assert_eq!(format_result(-10.5), "-10.5");
}

#[test]
fn rounds_to_four_decimals() {
    assert_eq!(format_result(10.123456), "10.1235");
    assert_eq!(format_result(0.00005), "0.0001");
    assert_eq!(format_result(0.99999), "1");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(format_result(1234.56789), "1,234.5679");
    assert_eq!(format_result(-1234567.0), "-1,234,567");
    assert_eq!(format_result(999.99999), "1,000");
}

#[test]
fn never_uses_exponent_notation() {
    let big = format_result(1.0e20);
    assert_eq!(big, "100,000,000,000,000,000,000");
    let tiny = format_result(1.0e-20);
    assert_eq!(tiny, "0");
    for s in [big, tiny, format_result(6.02e23)] {
        assert!(!s.contains('e') && !s.contains('E'), "{s}");
    }
}

#[test]
fn non_finite_values_have_fixed_spellings() {
    assert_eq!(format_result(f64::NAN), "nan");
    assert_eq!(format_result(f64::INFINITY), "inf");
    assert_eq!(format_result(f64::NEG_INFINITY), "-inf");
}

#[test]
fn wider_precision_policy() {
    let policy = FormatPolicy::with_decimals(8);
    assert_eq!(policy.format(1.0 / 3.0), "0.33333333");
    assert_eq!(policy.format(100.0), "100");
}

#[test]
fn formats_a_real_conversion() {
    let cfm = convert("Flow", 1.0, "m³/s", "CFM").unwrap();
    assert_eq!(format_result(cfm), "2,119.093");
}
