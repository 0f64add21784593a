//! Statistics Commands

use wasm_bindgen::JsValue;

use super::call;
use crate::models::Dashboard;

pub async fn get_dashboard() -> Result<Dashboard, String> {
    call("get_dashboard", JsValue::NULL).await
}
