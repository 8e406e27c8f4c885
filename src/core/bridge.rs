use alloy_primitives::{Address, TxHash, U256};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use super::claim::{Account, ClaimCall};
use super::constants::BRIDGE_GLOBAL;
use super::listing::ContractRef;
use super::sdk::{MintSdk, SdkError, SdkFuture};

/// `MintSdk` backed by the JS wallet SDK.
///
/// The host page loads the SDK and installs `window.NftMintBridge` with
/// promise-returning methods: `activeAccount()`, `connect(sponsorGas, chainId)`,
/// `disconnect()`, `sendClaim(json)`, `waitForReceipt(txHash)` and
/// `tokenMedia(json)`. Structured arguments cross as JSON strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsBridgeSdk;

impl JsBridgeSdk {
    /// Check if the bridge object has been installed on `window`
    pub fn is_installed() -> bool {
        window()
            .and_then(|win| Reflect::get(&win, &JsValue::from_str(BRIDGE_GLOBAL)).ok())
            .map(|bridge| bridge.is_object())
            .unwrap_or(false)
    }

    fn bridge() -> Result<JsValue, SdkError> {
        let window = window().ok_or(SdkError::JavaScriptError("No window object".to_string()))?;
        let bridge = Reflect::get(&window, &JsValue::from_str(BRIDGE_GLOBAL))
            .map_err(|e| SdkError::JavaScriptError(format!("Failed to get {}: {:?}", BRIDGE_GLOBAL, e)))?;

        if bridge.is_undefined() || bridge.is_null() {
            return Err(SdkError::BridgeUnavailable);
        }
        Ok(bridge)
    }

    /// Call `bridge[method](...args)` and await the promise it returns
    async fn invoke(method: &str, args: &[JsValue]) -> Result<JsValue, SdkError> {
        let bridge = Self::bridge()?;
        let func = Reflect::get(&bridge, &JsValue::from_str(method))
            .map_err(|e| SdkError::JavaScriptError(format!("Failed to get {} function: {:?}", method, e)))?;

        if !func.is_function() {
            return Err(SdkError::JavaScriptError(format!("{} is not a function", method)));
        }

        let func = Function::from(func);
        let result = match args {
            [] => func.call0(&bridge),
            [a] => func.call1(&bridge, a),
            [a, b] => func.call2(&bridge, a, b),
            _ => return Err(SdkError::JavaScriptError(format!("Too many arguments for {}", method))),
        }
        .map_err(|e| SdkError::JavaScriptError(js_error_message(&e)))?;

        if !result.has_type::<Promise>() {
            return Ok(result);
        }

        JsFuture::from(Promise::from(result))
            .await
            .map_err(|e| SdkError::TransactionFailed(js_error_message(&e)))
    }

    fn parse_account(value: &JsValue) -> Result<Account, SdkError> {
        let raw = value
            .as_string()
            .ok_or(SdkError::InvalidResponse("Account address is not a string".to_string()))?;
        let address = raw
            .parse::<Address>()
            .map_err(|e| SdkError::InvalidResponse(format!("Invalid account address {}: {}", raw, e)))?;
        Ok(Account { address })
    }
}

/// `error.message` when the thrown value is an Error, else its string form
fn js_error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

impl MintSdk for JsBridgeSdk {
    fn active_account(&self) -> SdkFuture<Option<Account>> {
        Box::pin(async move {
            let value = Self::invoke("activeAccount", &[]).await?;
            if value.is_null() || value.is_undefined() {
                return Ok(None);
            }
            Self::parse_account(&value).map(Some)
        })
    }

    fn connect(&self, sponsor_gas: bool, chain_id: u64) -> SdkFuture<Account> {
        Box::pin(async move {
            let args = [JsValue::from_bool(sponsor_gas), JsValue::from_f64(chain_id as f64)];
            let value = Self::invoke("connect", &args).await?;
            Self::parse_account(&value)
        })
    }

    fn disconnect(&self) -> SdkFuture<()> {
        Box::pin(async move {
            Self::invoke("disconnect", &[]).await?;
            Ok(())
        })
    }

    fn send_claim(&self, call: &ClaimCall) -> SdkFuture<TxHash> {
        let payload = serde_json::to_string(call);
        Box::pin(async move {
            let payload = payload
                .map_err(|e| SdkError::InvalidResponse(format!("Failed to serialize claim: {}", e)))?;
            let value = Self::invoke("sendClaim", &[JsValue::from_str(&payload)]).await?;
            let raw = value
                .as_string()
                .ok_or(SdkError::InvalidResponse("Transaction hash is not a string".to_string()))?;
            raw.parse::<TxHash>()
                .map_err(|e| SdkError::InvalidResponse(format!("Invalid transaction hash {}: {}", raw, e)))
        })
    }

    fn wait_for_confirmation(&self, tx_hash: TxHash) -> SdkFuture<()> {
        Box::pin(async move {
            Self::invoke("waitForReceipt", &[JsValue::from_str(&tx_hash.to_string())]).await?;
            Ok(())
        })
    }

    fn token_media(&self, contract: &ContractRef, token_id: U256) -> SdkFuture<String> {
        let payload = serde_json::to_string(&serde_json::json!({
            "contract": contract,
            "tokenId": token_id,
        }));
        Box::pin(async move {
            let payload = payload
                .map_err(|e| SdkError::InvalidResponse(format!("Failed to serialize media request: {}", e)))?;
            let value = Self::invoke("tokenMedia", &[JsValue::from_str(&payload)]).await?;
            value
                .as_string()
                .ok_or(SdkError::InvalidResponse("Media URI is not a string".to_string()))
        })
    }
}
