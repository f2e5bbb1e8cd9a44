use super::*;

#[test]
fn validate_years_input_accepts_whole_years_in_range() {
    assert_eq!(validate_years_input("30"), Ok(30));
    assert_eq!(validate_years_input("  1 "), Ok(1));
    assert_eq!(validate_years_input("80"), Ok(80));
}

#[test]
fn validate_years_input_rejects_non_numbers() {
    assert_eq!(validate_years_input("thirty"), Err("Enter a whole number of years."));
    assert_eq!(validate_years_input(""), Err("Enter a whole number of years."));
    assert_eq!(validate_years_input("3.5"), Err("Enter a whole number of years."));
}

#[test]
fn validate_years_input_rejects_out_of_range_horizons() {
    assert_eq!(validate_years_input("0"), Err("Years must be between 1 and 80."));
    assert_eq!(validate_years_input("81"), Err("Years must be between 1 and 80."));
}

#[test]
fn format_success_rate_renders_percentage() {
    assert_eq!(format_success_rate(0.87), "87% of paths stayed funded");
    assert_eq!(format_success_rate(1.0), "100% of paths stayed funded");
}
