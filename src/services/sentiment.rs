use serde::Serialize;
use std::fmt;

/// Bucketed reading of a customer-review sentiment score.
///
/// Lower bucket edges are closed: 0.7 is already Highly Positive and 0.4 is
/// already Generally Positive. Any finite score is accepted; nothing is
/// normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SentimentInsight {
    MixedOrNegative,
    GenerallyPositive,
    HighlyPositive,
}

impl SentimentInsight {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            SentimentInsight::HighlyPositive
        } else if score >= 0.4 {
            SentimentInsight::GenerallyPositive
        } else {
            SentimentInsight::MixedOrNegative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentInsight::HighlyPositive => "Highly Positive Reviews",
            SentimentInsight::GenerallyPositive => "Generally Positive Reviews",
            SentimentInsight::MixedOrNegative => "Mixed or Negative Reviews",
        }
    }
}

impl fmt::Display for SentimentInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores_land_in_the_upper_bucket() {
        assert_eq!(
            SentimentInsight::from_score(0.7),
            SentimentInsight::HighlyPositive
        );
        assert_eq!(
            SentimentInsight::from_score(0.4),
            SentimentInsight::GenerallyPositive
        );
    }

    #[test]
    fn labels_match_the_dashboard_wording() {
        assert_eq!(
            SentimentInsight::from_score(0.70).label(),
            "Highly Positive Reviews"
        );
        assert_eq!(
            SentimentInsight::from_score(0.5).label(),
            "Generally Positive Reviews"
        );
        assert_eq!(
            SentimentInsight::from_score(0.39).label(),
            "Mixed or Negative Reviews"
        );
    }

    #[test]
    fn classifier_is_total_and_monotone() {
        let mut previous = SentimentInsight::from_score(0.0);
        for step in 0..=100 {
            let score = step as f64 / 100.0;
            let bucket = SentimentInsight::from_score(score);
            assert!(bucket >= previous, "bucket regressed at score {score}");
            previous = bucket;
        }
        // Out-of-range inputs still classify.
        assert_eq!(
            SentimentInsight::from_score(-3.0),
            SentimentInsight::MixedOrNegative
        );
        assert_eq!(
            SentimentInsight::from_score(42.0),
            SentimentInsight::HighlyPositive
        );
    }
}
