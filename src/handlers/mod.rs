pub mod customers;
pub mod health;
pub mod insights;
pub mod recommendations;

pub use customers::{customer_profile, list_customers};
pub use health::health_check;
pub use insights::shopping_insights;
pub use recommendations::recommendations_config;

/// Splits a comma-separated multi-select query parameter into labels.
/// `None` or a blank value means the filter is not applied.
pub(crate) fn split_multi_select(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::split_multi_select;

    #[test]
    fn splits_and_trims_values() {
        assert_eq!(
            split_multi_select(Some("Chennai, Delhi")),
            Some(vec!["Chennai".to_string(), "Delhi".to_string()])
        );
    }

    #[test]
    fn blank_means_no_filter() {
        assert_eq!(split_multi_select(None), None);
        assert_eq!(split_multi_select(Some("  ")), None);
    }
}
