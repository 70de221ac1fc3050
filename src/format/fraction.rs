/// Fractions a cook can measure, in lookup order
const COOKING_FRACTIONS: &[(f64, &str)] = &[
    (1.0 / 8.0, "1/8"),
    (1.0 / 4.0, "1/4"),
    (1.0 / 3.0, "1/3"),
    (3.0 / 8.0, "3/8"),
    (1.0 / 2.0, "1/2"),
    (5.0 / 8.0, "5/8"),
    (2.0 / 3.0, "2/3"),
    (3.0 / 4.0, "3/4"),
    (7.0 / 8.0, "7/8"),
];

const DEFAULT_EPSILON: f64 = 0.05;

/// Renders decimal amounts as cooking fractions ("1 1/2", "3/4")
#[derive(Debug, Clone, Copy)]
pub struct FractionFormatter {
    epsilon: f64,
}

impl FractionFormatter {
    pub const fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return amount.to_string();
        }
        if amount < 0.0 {
            return format!("-{}", self.format(-amount));
        }

        let whole = amount.trunc();
        let remainder = amount - whole;

        match self.closest_fraction(remainder) {
            Some(label) if whole == 0.0 => label.to_string(),
            Some(label) => format!("{} {}", whole as u64, label),
            None if amount < 1.0 => format!("{:.2}", amount),
            None if remainder == 0.0 => format!("{}", whole as u64),
            None => format!("{:.1}", amount),
        }
    }

    /// Closest table entry strictly within epsilon; the earlier entry wins a tie
    fn closest_fraction(&self, remainder: f64) -> Option<&'static str> {
        let mut best: Option<(f64, &'static str)> = None;
        for &(value, label) in COOKING_FRACTIONS {
            let diff = (remainder - value).abs();
            if diff >= self.epsilon {
                continue;
            }
            if best.map_or(true, |(best_diff, _)| diff < best_diff) {
                best = Some((diff, label));
            }
        }
        best.map(|(_, label)| label)
    }
}

impl Default for FractionFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format with the standard fraction table
pub fn format_amount(amount: f64) -> String {
    const FORMATTER: FractionFormatter = FractionFormatter::new();
    FORMATTER.format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, "1/2")]
    #[case(0.25, "1/4")]
    #[case(0.33, "1/3")]
    #[case(0.70, "2/3")]
    #[case(0.71, "3/4")]
    #[case(0.1, "1/8")]
    #[case(1.5, "1 1/2")]
    #[case(2.75, "2 3/4")]
    #[case(3.875, "3 7/8")]
    #[case(2.0, "2")]
    #[case(12.0, "12")]
    fn test_common_fractions(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[rstest]
    #[case(0.02, "0.02")]
    #[case(0.0, "0.00")]
    #[case(4.03, "4.0")]
    #[case(1.96, "2.0")]
    fn test_no_fraction_fallback(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_closest_entry_wins() {
        let formatter = FractionFormatter::new();
        // Within epsilon of both 1/3 and 3/8, closer to 3/8
        assert_eq!(formatter.format(0.36), "3/8");
        // Within epsilon of both 5/8 and 2/3, closer to 5/8
        assert_eq!(formatter.format(1.64), "1 5/8");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(format_amount(-1.5), "-1 1/2");
        assert_eq!(format_amount(f64::INFINITY), "inf");
    }
}
