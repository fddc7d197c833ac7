use boxoffice_charts::ChartError;
use boxoffice_charts::core::{ContinuousDomain, LinearScale, OrdinalDomain};

#[test]
fn extent_spans_smallest_to_largest() {
    let domain = ContinuousDomain::extent([3.0, -1.0, 7.0]).expect("extent");
    assert_eq!(domain.bounds(), (-1.0, 7.0));
    assert_eq!(domain.span(), 8.0);
    assert!(domain.contains(0.0));
    assert!(!domain.contains(7.5));
}

#[test]
fn extent_of_equal_values_is_degenerate() {
    let domain = ContinuousDomain::extent([5.0, 5.0]).expect("extent");
    assert!(domain.is_degenerate());
}

#[test]
fn extent_over_nothing_is_empty_input() {
    let result = ContinuousDomain::extent(Vec::new());
    assert!(matches!(result, Err(ChartError::EmptyInput(_))));
}

#[test]
fn extent_reports_non_finite_value_index() {
    let result = ContinuousDomain::extent([1.0, 2.0, f64::NAN]);
    assert!(matches!(
        result,
        Err(ChartError::InvalidMeasure { index: 2, .. })
    ));
}

#[test]
fn zero_to_max_starts_at_zero() {
    let domain = ContinuousDomain::zero_to_max([150.0, 30.0]).expect("domain");
    assert_eq!(domain.bounds(), (0.0, 150.0));
}

#[test]
fn inverted_bounds_are_rejected() {
    assert_eq!(
        ContinuousDomain::new(3.0, 1.0),
        Err(ChartError::InvalidDomain { min: 3.0, max: 1.0 })
    );
    assert!(ContinuousDomain::new(2.0, 2.0).is_ok());
}

#[test]
fn ordinal_domain_keeps_first_appearance_of_each_key() {
    let domain = OrdinalDomain::from_keys(["Drama", "Action", "Drama", "Comedy"]).expect("domain");

    let keys: Vec<&str> = domain.keys().copied().collect();
    assert_eq!(keys, vec!["Drama", "Action", "Comedy"]);
    assert_eq!(domain.len(), 3);
    assert_eq!(domain.index_of(&"Comedy"), Some(2));
    assert_eq!(domain.index_of(&"Western"), None);
}

#[test]
fn ordinal_domain_rejects_empty_input() {
    let result = OrdinalDomain::<String>::from_keys(Vec::new());
    assert!(matches!(result, Err(ChartError::EmptyInput(_))));
}

#[test]
fn deserialized_domain_keeps_min_le_max() {
    let inverted = serde_json::from_str::<ContinuousDomain>(r#"{"min": 9, "max": 1}"#);
    assert!(inverted.is_err());

    let parsed: ContinuousDomain =
        serde_json::from_str(r#"{"min": 1, "max": 9}"#).expect("valid domain json");
    assert_eq!(parsed.bounds(), (1.0, 9.0));
}

#[test]
fn deserialized_degenerate_domain_still_rejected_by_scale() {
    let domain: ContinuousDomain =
        serde_json::from_str(r#"{"min": 5, "max": 5}"#).expect("degenerate domain json");

    let result = LinearScale::from_domain(domain, (0.0, 100.0));
    assert_eq!(result, Err(ChartError::DegenerateDomain { value: 5.0 }));
}
