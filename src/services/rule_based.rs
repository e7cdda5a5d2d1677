use crate::error::Result;
use crate::models::{Customer, Product};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fixed result count of the rule-based recommender.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Rule-based filter/rank recommender.
///
/// A product is a candidate when its category (case-insensitive) is in the
/// customer's combined browsing + purchase interests, OR when its subcategory
/// is in the raw purchase history AND its price falls inside
/// `[min_price, max_price]`. The price window binds only the subcategory
/// branch; category matches pass regardless of price. That asymmetry is the
/// documented contract of the source system and is kept as-is (see
/// DESIGN.md).
///
/// Candidates are ranked by recommendation probability, backfilled with a
/// uniform random sample from the price window when fewer than three remain,
/// and truncated to three. The sampler is injected so tests can seed it.
pub fn recommend<R: Rng + ?Sized>(
    customer: &Customer,
    products: &[Product],
    min_price: f64,
    max_price: f64,
    rng: &mut R,
) -> Result<Vec<Product>> {
    let purchase_labels = customer.purchase_labels()?;
    let interest_set: Vec<String> = customer
        .interest_labels()?
        .iter()
        .map(|label| label.to_lowercase())
        .collect();

    let mut candidates: Vec<&Product> = products
        .iter()
        .filter(|p| {
            interest_set.contains(&p.category.to_lowercase())
                || (purchase_labels.contains(&p.subcategory)
                    && p.price_within(min_price, max_price))
        })
        .collect();

    // Stable sort keeps catalog order among equal probabilities.
    candidates.sort_by(|a, b| {
        b.recommendation_probability
            .partial_cmp(&a.recommendation_probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if candidates.len() < RECOMMENDATION_COUNT {
        let needed = RECOMMENDATION_COUNT - candidates.len();
        let in_window: Vec<&Product> = products
            .iter()
            .filter(|p| p.price_within(min_price, max_price))
            .collect();
        // Sample without replacement from the window; may repeat a ranked
        // candidate (the source behavior does not deduplicate).
        let backfill = in_window.choose_multiple(rng, needed);
        debug!(
            "Backfilling {} of {} requested rows from {} in-window products",
            needed,
            RECOMMENDATION_COUNT,
            in_window.len()
        );
        candidates.extend(backfill.copied());
    }

    Ok(candidates
        .into_iter()
        .take(RECOMMENDATION_COUNT)
        .cloned()
        .collect())
}
