//! List Commands
//!
//! Frontend bindings for shopping-list backend commands.
//! Every command resolves to the updated screen snapshot.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::ListView;
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddItemArgs<'a> {
    name: &'a str,
    #[serde(rename = "priceText")]
    price_text: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct QueryArgs<'a> {
    query: &'a str,
}

// ========================
// Helpers
// ========================

async fn call(cmd: &str, js_args: JsValue) -> Result<ListView, String> {
    let result = invoke(cmd, js_args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{} failed", cmd)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

async fn call_with<A: Serialize>(cmd: &str, args: &A) -> Result<ListView, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    call(cmd, js_args).await
}

// ========================
// Commands
// ========================

pub async fn load_list() -> Result<ListView, String> {
    call("load_list", JsValue::NULL).await
}

pub async fn add_item(name: &str, price_text: &str) -> Result<ListView, String> {
    call_with("add_item", &AddItemArgs { name, price_text }).await
}

pub async fn set_draft_name(text: &str) -> Result<ListView, String> {
    call_with("set_draft_name", &TextArgs { text }).await
}

pub async fn set_draft_price(text: &str) -> Result<ListView, String> {
    call_with("set_draft_price", &TextArgs { text }).await
}

pub async fn toggle_purchased(id: &str) -> Result<ListView, String> {
    call_with("toggle_purchased", &IdArgs { id }).await
}

pub async fn remove_item(id: &str) -> Result<ListView, String> {
    call_with("remove_item", &IdArgs { id }).await
}

pub async fn clear_all() -> Result<ListView, String> {
    call("clear_all", JsValue::NULL).await
}

pub async fn set_search_query(query: &str) -> Result<ListView, String> {
    call_with("set_search_query", &QueryArgs { query }).await
}

pub async fn toggle_theme() -> Result<ListView, String> {
    call("toggle_theme", JsValue::NULL).await
}
