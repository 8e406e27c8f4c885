use alloy_primitives::{Address, U256};
use serde::{Serialize, Serializer};

use super::listing::{MintableListing, TokenStandard};
use super::quantity::Quantity;
use super::settings::Theme;

/// The connected wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
}

impl Account {
    /// "0xAbCd…1234"
    pub fn short_address(&self) -> String {
        let full = self.address.to_checksum(None);
        format!("{}…{}", &full[..6], &full[full.len() - 4..])
    }
}

/// Claim parameters handed to the SDK, one shape per token standard.
///
/// Every quantity crosses the bridge as a decimal string; a JSON number
/// would lose precision above 2^53 before the SDK turns it into a BigInt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ClaimRequest {
    #[serde(rename = "ERC1155")]
    Edition {
        #[serde(rename = "tokenId")]
        token_id: U256,
        #[serde(serialize_with = "decimal_string")]
        quantity: u64,
        from: Address,
    },
    #[serde(rename = "ERC721")]
    Unique {
        #[serde(serialize_with = "decimal_string")]
        quantity: u64,
        from: Address,
    },
    /// Quantity is a decimal amount for the fungible path
    #[serde(rename = "ERC20")]
    Fungible {
        quantity: String,
        from: Address,
    },
}

fn decimal_string<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl ClaimRequest {
    pub fn build(listing: &MintableListing, quantity: Quantity, account: &Account) -> Self {
        let from = account.address;
        match listing.standard {
            TokenStandard::Edition => ClaimRequest::Edition {
                token_id: listing.token_id,
                quantity: quantity.get(),
                from,
            },
            TokenStandard::Unique => ClaimRequest::Unique {
                quantity: quantity.get(),
                from,
            },
            TokenStandard::Fungible => ClaimRequest::Fungible {
                quantity: quantity.get().to_string(),
                from,
            },
        }
    }
}

/// What the call-to-action area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintAction {
    /// No wallet: prompt to connect, nothing to claim yet
    Connect,
    Claim(ClaimRequest),
}

impl MintAction {
    pub fn for_account(listing: &MintableListing, quantity: Quantity, account: Option<&Account>) -> Self {
        match account {
            Some(account) => MintAction::Claim(ClaimRequest::build(listing, quantity, account)),
            None => MintAction::Connect,
        }
    }
}

/// Full payload of one claim transaction as the SDK bridge receives it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCall {
    pub contract_address: Address,
    pub chain_id: u64,
    pub client_id: String,
    pub claim_params: ClaimRequest,
    pub theme: Theme,
    pub sponsor_gas: bool,
}

/// "Mint 1 NFT", "Mint 3 NFTs"
pub fn mint_button_label(quantity: Quantity) -> String {
    let n = quantity.get();
    format!("Mint {} NFT{}", n, if n > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::ContractRef;
    use serde_json::json;

    fn listing(standard: TokenStandard, token_id: u64) -> MintableListing {
        MintableListing {
            contract: ContractRef { address: Address::repeat_byte(0x44), chain_id: 84532 },
            display_name: "Drop".to_string(),
            description: String::new(),
            contract_image: String::new(),
            price_per_token: Some(0.5),
            currency_symbol: Some("ETH".to_string()),
            standard,
            token_id: U256::from(token_id),
        }
    }

    fn account() -> Account {
        Account { address: Address::repeat_byte(0xaa) }
    }

    #[test]
    fn test_edition_request() {
        let action = MintAction::for_account(&listing(TokenStandard::Edition, 7), Quantity::new(4), Some(&account()));
        assert_eq!(
            action,
            MintAction::Claim(ClaimRequest::Edition {
                token_id: U256::from(7u64),
                quantity: 4,
                from: account().address,
            })
        );
    }

    #[test]
    fn test_unique_request() {
        let request = ClaimRequest::build(&listing(TokenStandard::Unique, 0), Quantity::new(3), &account());
        assert_eq!(request, ClaimRequest::Unique { quantity: 3, from: account().address });
    }

    #[test]
    fn test_fungible_request_uses_decimal_string() {
        let request = ClaimRequest::build(&listing(TokenStandard::Fungible, 0), Quantity::new(2), &account());
        assert_eq!(
            request,
            ClaimRequest::Fungible { quantity: "2".to_string(), from: account().address }
        );
    }

    #[test]
    fn test_no_account_means_connect() {
        for standard in [TokenStandard::Edition, TokenStandard::Unique, TokenStandard::Fungible] {
            assert_eq!(
                MintAction::for_account(&listing(standard, 1), Quantity::new(5), None),
                MintAction::Connect
            );
        }
    }

    #[test]
    fn test_request_json_shape() {
        let from = account().address;

        let edition = ClaimRequest::build(&listing(TokenStandard::Edition, 7), Quantity::new(4), &account());
        assert_eq!(
            serde_json::to_value(&edition).unwrap(),
            json!({ "type": "ERC1155", "tokenId": "0x7", "quantity": "4", "from": from })
        );

        let fungible = ClaimRequest::build(&listing(TokenStandard::Fungible, 0), Quantity::new(2), &account());
        assert_eq!(
            serde_json::to_value(&fungible).unwrap(),
            json!({ "type": "ERC20", "quantity": "2", "from": from })
        );
    }

    #[test]
    fn test_claim_call_json() {
        let call = ClaimCall {
            contract_address: Address::repeat_byte(0x44),
            chain_id: 84532,
            client_id: "cid".to_string(),
            claim_params: ClaimRequest::Unique { quantity: 1, from: account().address },
            theme: Theme::Dark,
            sponsor_gas: true,
        };
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["chainId"], 84532);
        assert_eq!(value["clientId"], "cid");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["sponsorGas"], true);
        assert_eq!(value["claimParams"]["type"], "ERC721");
    }

    #[test]
    fn test_large_quantities_survive_serialization() {
        let from = account().address;
        let huge = Quantity::new(u64::MAX);

        let unique = ClaimRequest::build(&listing(TokenStandard::Unique, 0), huge, &account());
        assert_eq!(
            serde_json::to_value(&unique).unwrap(),
            json!({ "type": "ERC721", "quantity": "18446744073709551615", "from": from })
        );

        let edition = ClaimRequest::build(&listing(TokenStandard::Edition, 1), Quantity::new((1 << 53) + 1), &account());
        assert_eq!(serde_json::to_value(&edition).unwrap()["quantity"], "9007199254740993");
    }

    #[test]
    fn test_short_address() {
        let account = Account { address: Address::ZERO };
        assert_eq!(account.short_address(), "0x0000…0000");
    }

    #[test]
    fn test_button_label() {
        assert_eq!(mint_button_label(Quantity::new(1)), "Mint 1 NFT");
        assert_eq!(mint_button_label(Quantity::new(3)), "Mint 3 NFTs");
    }
}
