use leptos::*;

use crate::core::media::{resolve_media_uri, MediaSource};
use crate::wallet::WalletContext;

#[component]
pub fn MediaView(
    source: MediaSource,
    wallet: WalletContext,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let gateway = wallet.settings().gateway_prefix();

    match source {
        MediaSource::Uri(uri) => view! {
            <img class="nft-media" src=resolve_media_uri(&uri, &gateway) alt=alt/>
        }.into_view(),
        MediaSource::TokenScoped { contract, token_id } => {
            let (media_uri, set_media_uri) = create_signal(None::<String>);

            spawn_local(async move {
                match wallet.sdk().token_media(&contract, token_id).await {
                    Ok(uri) => set_media_uri.set(Some(resolve_media_uri(&uri, &gateway))),
                    Err(e) => log::error!("Failed to load media for token {}: {}", token_id, e),
                }
            });

            (move || match media_uri.get() {
                Some(src) => view! { <img class="nft-media" src=src alt=alt.clone()/> }.into_view(),
                None => view! { <div class="nft-media skeleton"></div> }.into_view(),
            }).into_view()
        }
    }
}
