use crate::models::{Customer, InsightsResponse, OrderValueSummary};
use tracing::warn;
use std::collections::BTreeMap;

/// Aggregates the filtered customer view into the dashboard's insight
/// numbers: segment distribution, browsing-category interest counts, and an
/// average-order-value summary. Pure computation over the snapshot.
///
/// Rows whose browsing history fails to parse are skipped from the category
/// counts (with a warning) rather than failing the whole aggregation.
pub fn summarize(customers: &[&Customer], focus: Option<&Customer>) -> InsightsResponse {
    let mut segment_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut category_interests: BTreeMap<String, usize> = BTreeMap::new();

    for customer in customers {
        *segment_distribution
            .entry(customer.customer_segment.clone())
            .or_insert(0) += 1;

        match customer.browsing_labels() {
            Ok(labels) => {
                for label in labels {
                    *category_interests.entry(label).or_insert(0) += 1;
                }
            }
            Err(e) => warn!(
                "Skipping browsing history of {} in interest counts: {e}",
                customer.customer_id
            ),
        }
    }

    InsightsResponse {
        segment_distribution,
        category_interests,
        order_value: order_value_summary(customers),
        customer_avg_order_value: focus.map(|c| c.avg_order_value),
    }
}

fn order_value_summary(customers: &[&Customer]) -> OrderValueSummary {
    if customers.is_empty() {
        return OrderValueSummary {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
        };
    }
    let values: Vec<f64> = customers.iter().map(|c| c.avg_order_value).collect();
    let sum: f64 = values.iter().sum();
    OrderValueSummary {
        min: values.iter().cloned().fold(f64::INFINITY, f64::min),
        max: values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        mean: sum / values.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::Catalog;

    #[test]
    fn aggregates_segments_and_interests() {
        let catalog = Catalog::embedded_sample();
        let view: Vec<&Customer> = catalog.customers.iter().collect();
        let insights = summarize(&view, None);

        assert_eq!(insights.segment_distribution.get("Occasional Shopper"), Some(&2));
        assert_eq!(insights.segment_distribution.get("New Visitor"), Some(&1));
        // Books appears in two browsing histories of the sample.
        assert_eq!(insights.category_interests.get("Books"), Some(&2));
        assert_eq!(insights.category_interests.get("Electronics"), Some(&1));
        assert!(insights.order_value.min <= insights.order_value.mean);
        assert!(insights.order_value.mean <= insights.order_value.max);
    }

    #[test]
    fn empty_view_yields_zeroed_summary() {
        let insights = summarize(&[], None);
        assert!(insights.segment_distribution.is_empty());
        assert_eq!(insights.order_value.mean, 0.0);
    }

    #[test]
    fn focus_customer_spending_is_reported() {
        let catalog = Catalog::embedded_sample();
        let view: Vec<&Customer> = catalog.customers.iter().collect();
        let focus = catalog.find_customer("C1000").unwrap();
        let insights = summarize(&view, Some(focus));
        assert_eq!(insights.customer_avg_order_value, Some(4806.99));
    }
}
