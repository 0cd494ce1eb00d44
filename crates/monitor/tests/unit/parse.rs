//! `parse_ull` tests.

use rstest::rstest;
use rvmon_sdb::MonitorError;
use rvmon_sdb::parse::parse_ull;

#[rstest]
#[case("42", 42)]
#[case("0", 0)]
#[case("0x1A", 26)]
#[case("0X1a", 26)]
#[case("010", 8)]
#[case("00", 0)]
#[case("+5", 5)]
#[case("  7", 7)]
#[case("-1", u64::MAX)]
#[case("18446744073709551615", u64::MAX)]
#[case("0xffffffffffffffff", u64::MAX)]
#[case("01777777777777777777777", u64::MAX)]
fn accepts(#[case] input: &str, #[case] expected: u64) {
    assert_eq!(parse_ull(input).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("42x")]
#[case("abc")]
#[case("0x")]
#[case("0xg")]
#[case("08")]
#[case("-")]
#[case("+")]
#[case("1 2")]
#[case("18446744073709551616x")]
fn rejects_malformed(#[case] input: &str) {
    assert!(
        matches!(parse_ull(input), Err(MonitorError::NotANumber)),
        "{input:?}"
    );
}

#[rstest]
#[case("18446744073709551616")]
#[case("0x10000000000000000")]
#[case("-18446744073709551616")]
#[case("99999999999999999999999")]
fn rejects_overflow(#[case] input: &str) {
    assert!(matches!(parse_ull(input), Err(MonitorError::TooLarge)), "{input:?}");
}

#[test]
fn diagnostics_match_the_shell_messages() {
    assert_eq!(MonitorError::NotANumber.to_string(), "N must be number");
    assert_eq!(MonitorError::TooLarge.to_string(), "N is too large");
}
