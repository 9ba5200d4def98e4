use crate::domain::model::SentimentClass;

pub const HIGHLY_POSITIVE_THRESHOLD: f64 = 0.8;
pub const POSITIVE_THRESHOLD: f64 = 0.4;
pub const NEGATIVE_THRESHOLD: f64 = -0.4;

/// Buckets a compound polarity score.
///
/// | score               | class           |
/// |---------------------|-----------------|
/// | > 0.8               | Highly positive |
/// | (0.4, 0.8]          | Positive        |
/// | [-0.4, 0.4]         | Neutral         |
/// | < -0.4              | Negative        |
///
/// The four ranges cover every real number, so `HighlyNegative` is never
/// returned. NaN is not a score; it is reported as `Neutral`.
pub fn classify(score: f64) -> SentimentClass {
    if score > HIGHLY_POSITIVE_THRESHOLD {
        SentimentClass::HighlyPositive
    } else if score > POSITIVE_THRESHOLD {
        SentimentClass::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentClass::Negative
    } else {
        SentimentClass::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0.8), SentimentClass::Positive);
        assert_eq!(classify(0.800_000_1), SentimentClass::HighlyPositive);
        assert_eq!(classify(0.4), SentimentClass::Neutral);
        assert_eq!(classify(0.400_000_1), SentimentClass::Positive);
        assert_eq!(classify(-0.4), SentimentClass::Neutral);
        assert_eq!(classify(-0.400_000_1), SentimentClass::Negative);
    }

    #[test]
    fn test_representative_scores() {
        assert_eq!(classify(1.0), SentimentClass::HighlyPositive);
        assert_eq!(classify(0.6696), SentimentClass::Positive);
        assert_eq!(classify(0.0), SentimentClass::Neutral);
        assert_eq!(classify(-0.0), SentimentClass::Neutral);
        assert_eq!(classify(-1.0), SentimentClass::Negative);
    }

    #[test]
    fn test_total_over_extremes() {
        assert_eq!(classify(f64::INFINITY), SentimentClass::HighlyPositive);
        assert_eq!(classify(f64::NEG_INFINITY), SentimentClass::Negative);
        assert_eq!(classify(f64::MAX), SentimentClass::HighlyPositive);
        assert_eq!(classify(f64::MIN), SentimentClass::Negative);
        assert_eq!(classify(f64::NAN), SentimentClass::Neutral);
    }

    #[test]
    fn test_highly_negative_is_unreachable() {
        // Sweep [-2, 2] in 1e-4 steps plus the threshold neighbours.
        let mut scores: Vec<f64> = (-20_000..=20_000).map(|i| i as f64 / 10_000.0).collect();
        for t in [HIGHLY_POSITIVE_THRESHOLD, POSITIVE_THRESHOLD, NEGATIVE_THRESHOLD] {
            scores.push(f64::from_bits(t.to_bits() + 1));
            scores.push(f64::from_bits(t.to_bits() - 1));
        }

        for score in scores {
            let class = classify(score);
            assert_ne!(class, SentimentClass::HighlyNegative, "score {}", score);

            let expected = if score > 0.8 {
                SentimentClass::HighlyPositive
            } else if score > 0.4 {
                SentimentClass::Positive
            } else if (-0.4..=0.4).contains(&score) {
                SentimentClass::Neutral
            } else {
                SentimentClass::Negative
            };
            assert_eq!(class, expected, "score {}", score);
        }
    }

    #[test]
    fn test_ordinal_order_follows_score() {
        let ordered = [1.0, 0.6, 0.0, -0.6];
        let classes: Vec<SentimentClass> = ordered.iter().map(|s| classify(*s)).collect();
        let mut sorted = classes.clone();
        sorted.sort();
        assert_eq!(classes, sorted);
    }
}
