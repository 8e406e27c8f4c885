use leptos::*;

use crate::components::connect_button::ConnectButton;
use crate::components::media_view::MediaView;
use crate::components::quantity_selector::QuantitySelector;
use crate::components::toast::ToastStore;
use crate::core::chain_config::{ChainConfig, ChainType};
use crate::core::claim::{mint_button_label, ClaimCall, ClaimRequest, MintAction};
use crate::core::constants::CLIENT_ID;
use crate::core::lifecycle::{MintPhase, NotificationSink};
use crate::core::listing::MintableListing;
use crate::core::media::MediaSource;
use crate::core::price::PricedListing;
use crate::core::quantity::Quantity;
use crate::core::sdk::run_claim;
use crate::wallet::WalletContext;

/// Mint card: artwork, quantity selector, total and the claim action.
///
/// Renders nothing when the listing has no unit price.
#[component]
pub fn NftMint(
    listing: MintableListing,
    wallet: WalletContext,
    toasts: ToastStore,
) -> impl IntoView {
    let priced = match PricedListing::prepare(&listing) {
        Ok(priced) => priced,
        Err(e) => {
            log::error!("{}", e);
            return None;
        }
    };

    let quantity = create_rw_signal(Quantity::default());
    let phase = create_rw_signal(MintPhase::Idle);

    let media = MediaSource::for_listing(&listing);
    let contract = listing.contract;
    let unit_label = priced.unit_label();
    let total_label = move || priced.total_label(quantity.get());
    let listing = store_value(listing);

    let on_mint = Callback::new(move |request: ClaimRequest| {
        let Some(next) = phase.get_untracked().start() else {
            log::warn!("Mint already in progress");
            return;
        };
        phase.set(next);

        let settings = wallet.settings();
        let call = ClaimCall {
            contract_address: contract.address,
            chain_id: contract.chain_id,
            client_id: CLIENT_ID.to_string(),
            claim_params: request,
            theme: settings.theme,
            sponsor_gas: settings.sponsor_gas,
        };

        let sdk = wallet.sdk();
        spawn_local(async move {
            run_claim(sdk.as_ref(), &call, |event| {
                phase.update(|p| *p = p.apply(&event));
                toasts.notify(event.notification());
            })
            .await;
        });
    });

    let action = move || {
        let account = wallet.account.get();
        let current = quantity.get();
        match listing.with_value(|l| MintAction::for_account(l, current, account.as_ref())) {
            MintAction::Connect => view! {
                <ConnectButton wallet=wallet toasts=toasts full_width=true/>
            }.into_view(),
            MintAction::Claim(request) => view! {
                <button
                    class="claim-btn"
                    disabled=move || phase.get().is_busy()
                    on:click=move |_| on_mint.call(request.clone())
                >
                    {mint_button_label(current)}
                </button>
            }.into_view(),
        }
    };

    let status = move || {
        let phase = phase.get();
        phase.status_text().map(|text| {
            let tx_link = match phase {
                MintPhase::Sent(hash) => ChainType::from_chain_id(contract.chain_id).map(|chain| {
                    let config = ChainConfig::for_chain(chain);
                    view! {
                        <a href=config.tx_url(&hash.to_string()) target="_blank" rel="noopener">
                            "View transaction"
                        </a>
                    }
                }),
                _ => None,
            };
            view! {
                <div class="mint-status">
                    <span>{text}</span>
                    {tx_link}
                </div>
            }
        })
    };

    Some(view! {
        <div class="nft-mint">
            <div class="nft-mint-header">
                <ConnectButton wallet=wallet toasts=toasts/>
            </div>

            <div class="nft-card">
                <div class="nft-media-frame">
                    <MediaView source=media wallet=wallet alt=""/>
                    <div class="price-badge">{unit_label}</div>
                </div>
                <h2 class="nft-title">{listing.with_value(|l| l.display_name.clone())}</h2>
                <p class="nft-description">{listing.with_value(|l| l.description.clone())}</p>

                <div class="nft-mint-controls">
                    <QuantitySelector quantity=quantity/>
                    <div class="nft-total">"Total: " {total_label}</div>
                </div>

                <div class="nft-card-footer">
                    {action}
                    {status}
                </div>
            </div>
        </div>
    })
}
