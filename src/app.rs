use leptos::*;
use std::rc::Rc;

use crate::components::{NftMint, ToastHost, ToastStore};
use crate::core::bridge::JsBridgeSdk;
use crate::core::chain_config::{initialize_chain, ChainConfig, ChainType};
use crate::core::listing::{load_listing_config, ListingError, MintableListing};
use crate::core::settings::load_settings;
use crate::wallet::WalletContext;

/// Read the embedded listing and lock in the chain it mints on
pub fn load_listing() -> Result<MintableListing, ListingError> {
    let config = load_listing_config()?;

    let chain = match config.chain_id {
        Some(id) => ChainType::from_chain_id(id).unwrap_or_else(|| {
            log::warn!("Unknown chain id {}, explorer links disabled", id);
            ChainType::DEFAULT
        }),
        None => ChainType::DEFAULT,
    };
    initialize_chain(chain);

    config.into_listing(ChainConfig::for_chain(chain).chain_id)
}

// main app component
#[component]
pub fn App(
    listing: Result<MintableListing, ListingError>,
) -> impl IntoView {
    let settings = load_settings();
    let theme = settings.theme;

    if !JsBridgeSdk::is_installed() {
        log::warn!("Wallet SDK bridge not found on window, wallet actions will fail");
    }

    let wallet = WalletContext::new(Rc::new(JsBridgeSdk), settings);
    let toasts = ToastStore::new();

    // check for an existing wallet session when the app starts
    spawn_local(wallet.restore());

    let content = match listing {
        Ok(listing) => view! {
            <NftMint listing=listing wallet=wallet toasts=toasts/>
        }.into_view(),
        Err(e) => {
            log::error!("Failed to load listing: {}", e);
            view! {
                <div class="listing-error">"This drop is not available."</div>
            }.into_view()
        }
    };

    view! {
        <main class=format!("container theme-{}", theme.as_str())>
            {content}
            <ToastHost store=toasts/>
        </main>
    }
}
