use super::listing::{ListingError, MintableListing};
use super::quantity::Quantity;

/// Unit price and currency of a listing that is allowed to render
#[derive(Debug, Clone, PartialEq)]
pub struct PricedListing {
    pub unit_price: f64,
    pub currency_symbol: Option<String>,
}

impl PricedListing {
    /// Fails when the listing has no unit price; the widget renders nothing then
    pub fn prepare(listing: &MintableListing) -> Result<Self, ListingError> {
        let unit_price = listing.price_per_token.ok_or(ListingError::MissingPrice)?;
        Ok(Self {
            unit_price,
            currency_symbol: listing.currency_symbol.clone(),
        })
    }

    /// Plain floating point product, no rounding
    pub fn total(&self, quantity: Quantity) -> f64 {
        self.unit_price * quantity.get() as f64
    }

    /// e.g. "7.5 ETH"
    pub fn total_label(&self, quantity: Quantity) -> String {
        self.with_symbol(self.total(quantity))
    }

    /// Badge shown on the artwork, e.g. "2.5 ETH/each"
    pub fn unit_label(&self) -> String {
        format!("{}/each", self.with_symbol(self.unit_price))
    }

    fn with_symbol(&self, amount: f64) -> String {
        let amount = format_amount(amount);
        match self.currency_symbol.as_deref() {
            Some(symbol) if !symbol.is_empty() => format!("{} {}", amount, symbol),
            _ => amount,
        }
    }
}

/// Render a number the way a browser prints it: positional notation in
/// [1e-6, 1e21), exponent notation ("1e-7", "1e+21") outside it.
fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return amount.to_string();
    }

    let exp = format!("{:e}", amount);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::{ContractRef, TokenStandard};
    use alloy_primitives::{Address, U256};

    fn listing(price: Option<f64>, symbol: Option<&str>) -> MintableListing {
        listing_with(TokenStandard::Unique, price, symbol)
    }

    fn listing_with(standard: TokenStandard, price: Option<f64>, symbol: Option<&str>) -> MintableListing {
        MintableListing {
            contract: ContractRef { address: Address::repeat_byte(0x22), chain_id: 1 },
            display_name: "Drop".to_string(),
            description: String::new(),
            contract_image: String::new(),
            price_per_token: price,
            currency_symbol: symbol.map(str::to_string),
            standard,
            token_id: U256::from(7u64),
        }
    }

    #[test]
    fn test_total_label() {
        let priced = PricedListing::prepare(&listing(Some(2.5), Some("ETH"))).unwrap();
        assert_eq!(priced.total(Quantity::new(3)), 7.5);
        assert_eq!(priced.total_label(Quantity::new(3)), "7.5 ETH");
    }

    #[test]
    fn test_whole_totals_have_no_fraction() {
        let priced = PricedListing::prepare(&listing(Some(2.0), Some("USDC"))).unwrap();
        assert_eq!(priced.total_label(Quantity::new(2)), "4 USDC");
    }

    #[test]
    fn test_missing_symbol() {
        let priced = PricedListing::prepare(&listing(Some(1.5), None)).unwrap();
        assert_eq!(priced.total_label(Quantity::new(2)), "3");
        assert_eq!(priced.unit_label(), "1.5/each");
    }

    #[test]
    fn test_unit_label() {
        let priced = PricedListing::prepare(&listing(Some(0.01), Some("ETH"))).unwrap();
        assert_eq!(priced.unit_label(), "0.01 ETH/each");
    }

    #[test]
    fn test_free_mint_is_priced() {
        let priced = PricedListing::prepare(&listing(Some(0.0), Some("ETH"))).unwrap();
        assert_eq!(priced.total_label(Quantity::new(5)), "0 ETH");
    }

    #[test]
    fn test_missing_price_fails_for_every_listing_shape() {
        for standard in [TokenStandard::Edition, TokenStandard::Unique, TokenStandard::Fungible] {
            for symbol in [Some("ETH"), None] {
                assert_eq!(
                    PricedListing::prepare(&listing_with(standard, None, symbol)),
                    Err(ListingError::MissingPrice),
                    "{:?} / {:?}",
                    standard,
                    symbol
                );
            }
        }
    }

    #[test]
    fn test_tiny_and_huge_amounts_use_exponent_notation() {
        let tiny = PricedListing::prepare(&listing(Some(1e-7), Some("ETH"))).unwrap();
        assert_eq!(tiny.total_label(Quantity::new(1)), "1e-7 ETH");
        assert_eq!(tiny.unit_label(), "1e-7 ETH/each");

        let huge = PricedListing::prepare(&listing(Some(1e21), None)).unwrap();
        assert_eq!(huge.total_label(Quantity::new(1)), "1e+21");
        assert_eq!(huge.total_label(Quantity::new(3)), "3e+21");
    }

    #[test]
    fn test_format_amount_boundaries() {
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(1.5e-7), "1.5e-7");
        assert_eq!(format_amount(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
    }
}
