//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod goal;
mod item;
mod settings;
mod stats;
mod weight;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a backend command and decode its result. Rejections carry the
/// backend error string.
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(|e| {
        let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
        web_sys::console::error_1(&format!("[{}] {}", cmd, message).into());
        message
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

async fn call_with<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> Result<T, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    call(cmd, js_args).await
}

// Re-export all public items
pub use goal::*;
pub use item::*;
pub use settings::*;
pub use stats::*;
pub use weight::*;
