//! Pot-odds and expected-value arithmetic.

/// Share of the final pot a call costs: `cost / (pot + cost)`, 0 when free.
pub fn pot_odds(continue_cost: u32, pot: u32) -> f64 {
    if continue_cost == 0 {
        return 0.0;
    }
    continue_cost as f64 / (pot as f64 + continue_cost as f64)
}

/// Expected chips from calling with the given equity.
pub fn expected_value(equity: f64, continue_cost: u32, pot: u32) -> f64 {
    let win = (pot + continue_cost) as f64;
    equity * win - (1.0 - equity) * continue_cost as f64
}

/// A call is profitable when equity beats the pot odds.
pub fn should_call(equity: f64, pot_odds: f64) -> bool {
    equity > pot_odds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_odds() {
        assert_eq!(pot_odds(0, 100), 0.0);
        assert_eq!(pot_odds(50, 50), 0.5);
        assert!((pot_odds(25, 75) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_expected_value() {
        // Break-even at cost / (pot + 2 * cost).
        assert!(expected_value(0.25, 50, 100).abs() < 1e-9);
        assert!(expected_value(0.8, 50, 100) > 0.0);
        assert!(expected_value(0.1, 50, 100) < 0.0);
    }

    #[test]
    fn test_should_call() {
        assert!(should_call(0.36, 0.33));
        assert!(!should_call(0.18, 0.5));
        assert!(!should_call(0.5, 0.5));
    }
}
