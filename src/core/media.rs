use alloy_primitives::U256;

use super::constants::{IPFS_SCHEME, PLACEHOLDER_IMAGE_URI};
use super::listing::{ContractRef, MintableListing, TokenStandard};

/// Where the artwork of a listing comes from
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    /// Resolved per token id through the SDK; a skeleton shows until then
    TokenScoped { contract: ContractRef, token_id: U256 },
    /// A plain content URI
    Uri(String),
}

impl MediaSource {
    pub fn for_listing(listing: &MintableListing) -> Self {
        match listing.standard {
            TokenStandard::Edition => MediaSource::TokenScoped {
                contract: listing.contract,
                token_id: listing.token_id,
            },
            TokenStandard::Unique | TokenStandard::Fungible => {
                let image = listing.contract_image.trim();
                if image.is_empty() {
                    MediaSource::Uri(PLACEHOLDER_IMAGE_URI.to_string())
                } else {
                    MediaSource::Uri(image.to_string())
                }
            }
        }
    }
}

/// Rewrite `ipfs://` URIs onto an HTTP gateway; other URIs pass through.
/// `gateway` must end with a slash.
pub fn resolve_media_uri(uri: &str, gateway: &str) -> String {
    match uri.strip_prefix(IPFS_SCHEME) {
        Some(rest) => {
            let path = rest.strip_prefix("ipfs/").unwrap_or(rest);
            format!("{}{}", gateway, path)
        }
        None => uri.to_string(),
    }
}
