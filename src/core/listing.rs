use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::LISTING_ELEMENT_ID;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingError {
    MissingPrice,
    InvalidContractAddress(String),
    InvalidTokenId(String),
    InvalidConfig(String),
    NotFound,
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::MissingPrice => write!(f, "Invalid price per token"),
            ListingError::InvalidContractAddress(msg) => write!(f, "Invalid contract address: {}", msg),
            ListingError::InvalidTokenId(msg) => write!(f, "Invalid token id: {}", msg),
            ListingError::InvalidConfig(msg) => write!(f, "Invalid listing config: {}", msg),
            ListingError::NotFound => write!(f, "Listing config element #{} not found", LISTING_ELEMENT_ID),
        }
    }
}

/// A deployed contract on a specific chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRef {
    pub address: Address,
    pub chain_id: u64,
}

/// Which claim path a listing goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStandard {
    /// ERC-1155: many token ids per contract, each with its own supply
    Edition,
    /// ERC-721: every token is unique
    Unique,
    /// Anything else; quantity is sent as a decimal amount
    Fungible,
}

impl TokenStandard {
    /// ERC-1155 wins over ERC-721 when both flags are set
    pub fn from_flags(is_erc1155: bool, is_erc721: bool) -> Self {
        if is_erc1155 {
            TokenStandard::Edition
        } else if is_erc721 {
            TokenStandard::Unique
        } else {
            TokenStandard::Fungible
        }
    }
}

/// Everything the widget needs to render one listing
#[derive(Debug, Clone, PartialEq)]
pub struct MintableListing {
    pub contract: ContractRef,
    pub display_name: String,
    pub description: String,
    pub contract_image: String,
    pub price_per_token: Option<f64>,
    pub currency_symbol: Option<String>,
    pub standard: TokenStandard,
    pub token_id: U256,
}

/// Listing as embedded by the host page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingConfig {
    pub contract_address: String,
    #[serde(default)]
    pub chain_id: Option<u64>,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contract_image: String,
    #[serde(default)]
    pub price_per_token: Option<f64>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default, rename = "isERC1155")]
    pub is_erc1155: bool,
    #[serde(default, rename = "isERC721")]
    pub is_erc721: bool,
    #[serde(default)]
    pub token_id: Option<String>,
}

impl ListingConfig {
    pub fn from_json(value: &str) -> Result<Self, ListingError> {
        serde_json::from_str(value).map_err(|e| ListingError::InvalidConfig(e.to_string()))
    }

    /// Convert into a typed listing; `default_chain_id` applies when the
    /// config names no chain
    pub fn into_listing(self, default_chain_id: u64) -> Result<MintableListing, ListingError> {
        let address = self
            .contract_address
            .trim()
            .parse::<Address>()
            .map_err(|e| ListingError::InvalidContractAddress(format!("{}: {}", self.contract_address, e)))?;

        let token_id = match self.token_id.as_deref().map(str::trim) {
            None | Some("") => U256::ZERO,
            Some(raw) => raw
                .parse::<U256>()
                .map_err(|e| ListingError::InvalidTokenId(format!("{}: {}", raw, e)))?,
        };

        Ok(MintableListing {
            contract: ContractRef {
                address,
                chain_id: self.chain_id.unwrap_or(default_chain_id),
            },
            display_name: self.display_name,
            description: self.description,
            contract_image: self.contract_image,
            price_per_token: self.price_per_token,
            currency_symbol: self.currency_symbol,
            standard: TokenStandard::from_flags(self.is_erc1155, self.is_erc721),
            token_id,
        })
    }
}

/// Read the listing JSON the host page embedded in the document
pub fn load_listing_config() -> Result<ListingConfig, ListingError> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(LISTING_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .ok_or(ListingError::NotFound)?;

    ListingConfig::from_json(&text)
}
