/// Number of tokens the user wants to mint
///
/// Always at least 1. There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u64);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);

    /// Clamp to the minimum of 1
    pub fn new(value: u64) -> Self {
        Quantity(value.max(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The decrement control is disabled at the floor
    pub fn can_decrease(self) -> bool {
        self.0 > 1
    }

    pub fn decrease(self) -> Self {
        Quantity::new(self.0.saturating_sub(1))
    }

    pub fn increase(self) -> Self {
        Quantity(self.0.saturating_add(1))
    }

    /// Apply text typed into the quantity field.
    ///
    /// Input without a leading integer leaves the quantity unchanged;
    /// anything parsed is clamped to at least 1.
    pub fn set_from_text(self, raw: &str) -> Self {
        match parse_leading_int(raw) {
            Some(value) if value < 1 => Quantity::MIN,
            Some(value) => Quantity(u64::try_from(value).unwrap_or(u64::MAX)),
            None => self,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::MIN
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer prefix of `raw`: leading whitespace, an optional sign, then digits.
/// Trailing text is ignored ("12abc" is 12). Saturates instead of overflowing.
fn parse_leading_int(raw: &str) -> Option<i128> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &digits[..digits.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i128, |acc, d| {
        acc.saturating_mul(10).saturating_add(i128::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase() {
        for q in [1u64, 2, 7, 1_000] {
            assert_eq!(Quantity::new(q).increase().get(), q + 1);
        }
    }

    #[test]
    fn test_decrease_floors_at_one() {
        for q in [2u64, 3, 50] {
            assert_eq!(Quantity::new(q).decrease().get(), q - 1);
        }
        assert_eq!(Quantity::MIN.decrease(), Quantity::MIN);
        assert_eq!(Quantity::MIN.decrease().decrease(), Quantity::MIN);
    }

    #[test]
    fn test_can_decrease() {
        assert!(!Quantity::MIN.can_decrease());
        assert!(Quantity::new(2).can_decrease());
    }

    #[test]
    fn test_default_and_new_clamp() {
        assert_eq!(Quantity::default().get(), 1);
        assert_eq!(Quantity::new(0).get(), 1);
    }

    #[test]
    fn test_non_numeric_text_ignored() {
        let q = Quantity::new(4);
        for raw in ["", "abc", " ", "-", "+", "e5", ".5", "x12"] {
            assert_eq!(q.set_from_text(raw), q, "input {:?}", raw);
        }
    }

    #[test]
    fn test_numeric_text_clamped_to_min() {
        let q = Quantity::new(4);
        assert_eq!(q.set_from_text("9").get(), 9);
        assert_eq!(q.set_from_text("1").get(), 1);
        assert_eq!(q.set_from_text("0").get(), 1);
        assert_eq!(q.set_from_text("-3").get(), 1);
        assert_eq!(q.set_from_text("250000").get(), 250_000);
    }

    #[test]
    fn test_leading_integer_semantics() {
        let q = Quantity::new(4);
        assert_eq!(q.set_from_text("  12").get(), 12);
        assert_eq!(q.set_from_text("12abc").get(), 12);
        assert_eq!(q.set_from_text("3.7").get(), 3);
        assert_eq!(q.set_from_text("+5").get(), 5);
    }

    #[test]
    fn test_huge_input_saturates() {
        let q = Quantity::MIN.set_from_text("99999999999999999999999999999999999999999999");
        assert_eq!(q.get(), u64::MAX);
        assert_eq!(q.increase().get(), u64::MAX);
    }
}
