use leptos::*;

use crate::components::toast::ToastStore;
use crate::core::lifecycle::{Notification, NotificationSink};
use crate::wallet::WalletContext;

/// Connect prompt, or the connected account with a disconnect action
#[component]
pub fn ConnectButton(
    wallet: WalletContext,
    toasts: ToastStore,
    #[prop(optional)] full_width: bool,
) -> impl IntoView {
    let (is_connecting, set_is_connecting) = create_signal(false);
    let class = if full_width { "connect-btn connect-btn-full" } else { "connect-btn" };

    let handle_connect = move |_| {
        set_is_connecting.set(true);
        spawn_local(async move {
            if let Err(e) = wallet.connect().await {
                log::error!("Failed to connect wallet: {}", e);
                toasts.notify(Notification::error(e.message()));
            }
            set_is_connecting.set(false);
        });
    };

    let handle_disconnect = move |_| {
        spawn_local(async move {
            if let Err(e) = wallet.disconnect().await {
                log::error!("Failed to disconnect wallet: {}", e);
                toasts.notify(Notification::error(e.message()));
            }
        });
    };

    move || match wallet.account.get() {
        Some(account) => view! {
            <button class=class title=account.address.to_string() on:click=handle_disconnect>
                {account.short_address()}
            </button>
        }.into_view(),
        None => view! {
            <button class=class disabled=move || is_connecting.get() on:click=handle_connect>
                {move || if is_connecting.get() { "Connecting..." } else { "Connect Wallet" }}
            </button>
        }.into_view(),
    }
}
