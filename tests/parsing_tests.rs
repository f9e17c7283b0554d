use billing_taxes::{sanitize, DecimalInputModel};

fn parse(raw: &str) -> f64 {
    f64::from(DecimalInputModel::from(raw))
}

#[test]
fn sanitize_strips_everything_but_decimal_chars() {
    assert_eq!(sanitize("$ 1.234,56 ARS"), "1.234,56");
    assert_eq!(sanitize("abc"), "");
    assert_eq!(sanitize("12e3"), "123");
    assert_eq!(sanitize(" -7 "), "-7");
}

#[test]
fn comma_decimal_with_dot_grouping() {
    assert_eq!(parse("1.234,56"), 1234.56);
    assert_eq!(parse("12.345.678,9"), 12345678.9);
}

#[test]
fn dot_decimal_with_comma_grouping() {
    assert_eq!(parse("1,234.56"), 1234.56);
    assert_eq!(parse("12,345,678.9"), 12345678.9);
}

#[test]
fn lone_comma_is_the_decimal_separator() {
    assert_eq!(parse("12,5"), 12.5);
    assert_eq!(parse(",5"), 0.5);
}

#[test]
fn repeated_dots_are_grouping() {
    assert_eq!(parse("12.345.678"), 12345.678);
    assert_eq!(parse("1.234.567"), 1234.567);
}

#[test]
fn single_dot_is_the_decimal_separator() {
    // Three trailing digits are still a fraction, not grouping: with one
    // separator there is nothing to disambiguate against.
    assert_eq!(parse("1.234"), 1.234);
    assert_eq!(parse("12.5"), 12.5);
}

#[test]
fn repeated_commas_without_a_dot_do_not_parse() {
    // Only the first comma becomes a decimal point; the leftovers make the
    // parse fail and the value degrades to 0.
    assert_eq!(parse("1,234,56"), 0.0);
}

#[test]
fn sign_handling() {
    assert_eq!(parse("-12,5"), -12.5);
    assert_eq!(parse("--5"), -5.0);
    assert_eq!(parse("5-6"), 56.0);
    assert_eq!(parse("-"), 0.0);
}

#[test]
fn garbage_and_empty_degrade_to_zero() {
    assert_eq!(parse(""), 0.0);
    assert_eq!(parse("abc"), 0.0);
    assert_eq!(parse("."), 0.0);
    assert_eq!(parse(","), 0.0);
}

#[test]
fn embedded_noise_is_ignored() {
    assert_eq!(parse("$ 1.234,56"), 1234.56);
    assert_eq!(parse("ARS 21"), 21.0);
    assert_eq!(parse("12e3"), 123.0);
}
