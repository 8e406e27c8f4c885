use alloy_primitives::{TxHash, U256};
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::claim::{Account, ClaimCall};
use super::lifecycle::TxEvent;
use super::listing::ContractRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    BridgeUnavailable,
    NotConnected,
    JavaScriptError(String),
    TransactionFailed(String),
    InvalidResponse(String),
}

impl SdkError {
    /// Underlying message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            SdkError::BridgeUnavailable => "Wallet SDK is not loaded".to_string(),
            SdkError::NotConnected => "No wallet connected".to_string(),
            SdkError::JavaScriptError(msg)
            | SdkError::TransactionFailed(msg)
            | SdkError::InvalidResponse(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::BridgeUnavailable => write!(f, "Wallet SDK is not loaded"),
            SdkError::NotConnected => write!(f, "No wallet connected"),
            SdkError::JavaScriptError(msg) => write!(f, "JavaScript error: {}", msg),
            SdkError::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            SdkError::InvalidResponse(msg) => write!(f, "Invalid SDK response: {}", msg),
        }
    }
}

pub type SdkFuture<T> = Pin<Box<dyn Future<Output = Result<T, SdkError>>>>;

/// Wallet and contract capabilities provided by the external SDK.
///
/// Signing, submission, confirmation polling and gas sponsorship all happen
/// on the other side of this trait.
pub trait MintSdk {
    /// Account restored from a previous session, if any
    fn active_account(&self) -> SdkFuture<Option<Account>>;

    /// `chain_id` is where a sponsored smart account gets deployed
    fn connect(&self, sponsor_gas: bool, chain_id: u64) -> SdkFuture<Account>;

    fn disconnect(&self) -> SdkFuture<()>;

    /// Resolves once the transaction has been submitted
    fn send_claim(&self, call: &ClaimCall) -> SdkFuture<TxHash>;

    fn wait_for_confirmation(&self, tx_hash: TxHash) -> SdkFuture<()>;

    /// Media URI of one token of a multi-edition contract
    fn token_media(&self, contract: &ContractRef, token_id: U256) -> SdkFuture<String>;
}

/// Drive one claim through the SDK, reporting each lifecycle step
pub async fn run_claim(sdk: &dyn MintSdk, call: &ClaimCall, mut on_event: impl FnMut(TxEvent)) {
    let tx_hash = match sdk.send_claim(call).await {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Claim submission failed: {}", e);
            on_event(TxEvent::Failed(e.message()));
            return;
        }
    };
    log::info!("Claim transaction sent: {}", tx_hash);
    on_event(TxEvent::Sent(tx_hash));

    match sdk.wait_for_confirmation(tx_hash).await {
        Ok(()) => {
            log::info!("Claim transaction confirmed: {}", tx_hash);
            on_event(TxEvent::Confirmed(tx_hash));
        }
        Err(e) => {
            log::error!("Claim transaction {} failed: {}", tx_hash, e);
            on_event(TxEvent::Failed(e.message()));
        }
    }
}
