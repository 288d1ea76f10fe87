//! Made-hand classification once the board is out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, HandProfile};

/// Categorical hand-quality tier, ordered from worst to best.
///
/// The declared order is also the order of the scalar strengths
/// `postflop_evaluate` attaches, so comparisons on buckets and on strengths
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandBucket {
    /// No pair and no draw.
    Weak,
    /// A pair below eights.
    MediumWeak,
    /// Unpaired with a four-card flush or straight draw.
    Draw,
    /// A pair of eights through tens.
    Medium,
    /// A pair of jacks or better, or two pair topped below ten.
    MediumStrong,
    /// Trips, or two pair topped by a ten or better.
    Strong,
    /// Straight, flush or full house.
    VeryStrong,
    /// Quads, or a straight and a flush together.
    Nuts,
}

impl HandBucket {
    /// Strong, very strong or nuts.
    pub fn is_strong_or_better(&self) -> bool {
        *self >= HandBucket::Strong
    }

    /// Medium or medium-strong.
    pub fn is_medium(&self) -> bool {
        matches!(self, HandBucket::Medium | HandBucket::MediumStrong)
    }

    /// Get the bucket name.
    pub fn name(&self) -> &'static str {
        match self {
            HandBucket::Weak => "weak",
            HandBucket::MediumWeak => "medium-weak",
            HandBucket::Draw => "draw",
            HandBucket::Medium => "medium",
            HandBucket::MediumStrong => "medium-strong",
            HandBucket::Strong => "strong",
            HandBucket::VeryStrong => "very-strong",
            HandBucket::Nuts => "nuts",
        }
    }
}

impl fmt::Display for HandBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of the estimator: a bucket and a scalar in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthEvaluation {
    /// Made-hand bucket.
    pub bucket: HandBucket,
    /// Scalar strength, 0 to 1.
    pub strength: f64,
}

impl StrengthEvaluation {
    fn new(bucket: HandBucket, strength: f64) -> Self {
        Self { bucket, strength }
    }
}

/// Classify hole cards plus board into a bucket and strength.
///
/// First match wins: straight and flush together, quads, straight or flush,
/// full house, trips, two pair, one pair, then unpaired hands split on
/// whether a four-card flush or straight draw exists.
pub fn postflop_evaluate(cards: &[Card]) -> StrengthEvaluation {
    use HandBucket::*;

    let profile = HandProfile::new(cards);
    let counts = profile.multiplicities();
    let top = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);
    let flush = profile.has_flush();
    let straight = profile.has_straight();

    if flush && straight {
        StrengthEvaluation::new(Nuts, 0.95)
    } else if top == 4 {
        StrengthEvaluation::new(Nuts, 0.92)
    } else if flush || straight {
        StrengthEvaluation::new(VeryStrong, 0.85)
    } else if top == 3 && second >= 2 {
        StrengthEvaluation::new(VeryStrong, 0.82)
    } else if top == 3 {
        StrengthEvaluation::new(Strong, 0.70)
    } else if top == 2 && second == 2 {
        let high_pair = profile.values_with_count(2)[0];
        if high_pair >= 10 {
            StrengthEvaluation::new(Strong, 0.65)
        } else {
            StrengthEvaluation::new(MediumStrong, 0.55)
        }
    } else if top == 2 {
        let pair = profile.values_with_count(2)[0];
        if pair >= 11 {
            StrengthEvaluation::new(MediumStrong, 0.50)
        } else if pair >= 8 {
            StrengthEvaluation::new(Medium, 0.40)
        } else {
            StrengthEvaluation::new(MediumWeak, 0.32)
        }
    } else if profile.has_flush_draw() || profile.has_straight_window() {
        StrengthEvaluation::new(Draw, 0.35)
    } else {
        StrengthEvaluation::new(Weak, 0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn eval(s: &str) -> StrengthEvaluation {
        postflop_evaluate(&Card::parse_many(s).unwrap())
    }

    #[test]
    fn test_classification_precedence() {
        assert_eq!(eval("9h8h 7h6h5h").bucket, HandBucket::Nuts);
        assert_eq!(eval("9h8h 7h6h5h").strength, 0.95);
        assert_eq!(eval("9h9s 9d9c2h").strength, 0.92);
        assert_eq!(eval("Ah2h 9h6h5h").bucket, HandBucket::VeryStrong);
        assert_eq!(eval("9s8d 7h6c5s").strength, 0.85);
        assert_eq!(eval("9h9s 9dKcKh").strength, 0.82);
        assert_eq!(eval("9h9s 9dKc2h").bucket, HandBucket::Strong);
        assert_eq!(eval("9h9s 9dKc2h").strength, 0.70);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(eval("KhKs 9d9c2h").strength, 0.65);
        assert_eq!(eval("7h7s 5d5c2h").bucket, HandBucket::MediumStrong);
        assert_eq!(eval("7h7s 5d5c2h").strength, 0.55);
        assert_eq!(eval("JhJs 9d4c2h").strength, 0.50);
        assert_eq!(eval("8h8s Kd4c2h").bucket, HandBucket::Medium);
        assert_eq!(eval("4h4s Kd9c2h").bucket, HandBucket::MediumWeak);
    }

    #[test]
    fn test_unpaired() {
        assert_eq!(eval("AhKh 9h4h2c").bucket, HandBucket::Draw);
        assert_eq!(eval("9s8d 7h6c2s").bucket, HandBucket::Draw);
        assert_eq!(eval("AsKd 9h4c2s").bucket, HandBucket::Weak);
        assert_eq!(eval("AsKd 9h4c2s").strength, 0.15);
    }

    #[test]
    fn test_bucket_order_matches_strength() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: Vec<StrengthEvaluation> = Vec::new();

        for i in 0..4000 {
            let mut deck = Deck::shuffled(&mut rng);
            let cards = deck.deal_n(5 + i % 3);
            let first = postflop_evaluate(&cards);
            assert_eq!(first, postflop_evaluate(&cards), "deterministic");
            assert!((0.0..=1.0).contains(&first.strength));
            seen.push(first);
        }

        for a in &seen {
            for b in seen.iter().take(200) {
                if a.bucket > b.bucket {
                    assert!(a.strength > b.strength, "{:?} vs {:?}", a, b);
                }
            }
        }
    }
}
