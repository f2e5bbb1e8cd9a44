use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(1_250_000.0), "$1,250,000");
    assert_eq!(format_currency(950.0), "$950");
    assert_eq!(format_currency(0.0), "$0");
}

#[test]
fn format_currency_rounds_fractions() {
    assert_eq!(format_currency(1_234.56), "$1,235");
    assert_eq!(format_currency(999.4), "$999");
}

#[test]
fn format_currency_handles_negative_amounts() {
    assert_eq!(format_currency(-12_500.0), "-$12,500");
}

// =============================================================
// quick_link_enabled
// =============================================================

#[test]
fn quick_link_disabled_without_cache() {
    assert!(!quick_link_enabled(None, "simulation"));
}

#[test]
fn quick_link_follows_cached_flag() {
    let cache = HashMap::from([("simulation".to_owned(), true), ("reports".to_owned(), false)]);
    assert!(quick_link_enabled(Some(&cache), "simulation"));
    assert!(!quick_link_enabled(Some(&cache), "reports"));
    assert!(!quick_link_enabled(Some(&cache), "missing"));
}
