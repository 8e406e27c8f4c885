/// Shared constants used across the widget
///
/// Texts shown to the user and browser storage keys live here so the
/// components and the pure logic agree on them.

// ============================================================================
// Media
// ============================================================================

/// Shown when the listing carries no cover image
pub const PLACEHOLDER_IMAGE_URI: &str = "/placeholder.svg?height=400&width=400";

/// Default HTTP gateway used to resolve `ipfs://` URIs
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

pub const IPFS_SCHEME: &str = "ipfs://";

// ============================================================================
// Notifications
// ============================================================================

pub const MINT_SENT_MESSAGE: &str = "Minting NFT";

pub const MINT_CONFIRMED_MESSAGE: &str = "Minted successfully";

/// How long a toast stays on screen (milliseconds)
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Older toasts are dropped beyond this many
pub const MAX_VISIBLE_TOASTS: usize = 5;

// ============================================================================
// Browser integration
// ============================================================================

/// localStorage key for persisted widget settings
pub const SETTINGS_STORAGE_KEY: &str = "nft-mint.settings";

/// Id of the `<script type="application/json">` element carrying the listing
pub const LISTING_ELEMENT_ID: &str = "nft-listing";

/// Global object the JS wallet SDK bridge installs on `window`
pub const BRIDGE_GLOBAL: &str = "NftMintBridge";

/// SDK client id baked in at build time
pub const CLIENT_ID: &str = match option_env!("NFT_MINT_CLIENT_ID") {
    Some(id) => id,
    None => "",
};
