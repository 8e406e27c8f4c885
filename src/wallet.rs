use leptos::*;
use std::rc::Rc;

use crate::core::chain_config::{try_get_chain_config, ChainConfig, ChainType};
use crate::core::claim::Account;
use crate::core::sdk::{MintSdk, SdkError};
use crate::core::settings::WidgetSettings;

/// Wallet state shared by the widget's components.
///
/// All fields are arena handles, so the context itself is `Copy` and can be
/// captured by event handlers freely.
#[derive(Clone, Copy)]
pub struct WalletContext {
    sdk: StoredValue<Rc<dyn MintSdk>>,
    settings: StoredValue<WidgetSettings>,
    pub account: RwSignal<Option<Account>>,
}

impl WalletContext {
    pub fn new(sdk: Rc<dyn MintSdk>, settings: WidgetSettings) -> Self {
        Self {
            sdk: store_value(sdk),
            settings: store_value(settings),
            account: create_rw_signal(None),
        }
    }

    pub fn sdk(&self) -> Rc<dyn MintSdk> {
        self.sdk.get_value()
    }

    pub fn settings(&self) -> WidgetSettings {
        self.settings.get_value()
    }

    /// Pick up an account the SDK remembered from a previous visit
    pub async fn restore(self) {
        match self.sdk().active_account().await {
            Ok(Some(account)) => {
                log::info!("Restored wallet session: {}", account.address);
                self.account.set(Some(account));
            }
            Ok(None) => log::debug!("No wallet session to restore"),
            Err(e) => log::warn!("Failed to restore wallet session: {}", e),
        }
    }

    pub async fn connect(self) -> Result<Account, SdkError> {
        let sponsor_gas = self.settings.with_value(|s| s.sponsor_gas);
        let chain_id = try_get_chain_config()
            .unwrap_or_else(|| ChainConfig::for_chain(ChainType::DEFAULT))
            .chain_id;
        let account = self.sdk().connect(sponsor_gas, chain_id).await?;
        log::info!("Wallet connected: {}", account.address);
        self.account.set(Some(account));
        Ok(account)
    }

    pub async fn disconnect(self) -> Result<(), SdkError> {
        self.sdk().disconnect().await?;
        log::info!("Wallet disconnected");
        self.account.set(None);
        Ok(())
    }
}
