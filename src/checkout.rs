// 💳 Checkout - Lemon Squeezy session stub
// Builds what the provider would receive; returns a demo URL instead of charging

use serde::{Deserialize, Serialize};

use crate::elements::ElementCategory;
use crate::error::{Result, SoulError};

const DEMO_CHECKOUT_BASE: &str = "https://example.lemonsqueezy.com/checkout";
const DEMO_MESSAGE: &str = "This is a demo URL. Configure Lemon Squeezy to enable real payments.";

/// Provider credentials (store + variant + API key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub store_id: String,
    pub variant_id: String,
    pub api_key: String,
}

impl CheckoutConfig {
    /// Only complete credentials count as configured
    pub fn from_parts(store_id: Option<String>, variant_id: Option<String>, api_key: Option<String>) -> Option<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Some(CheckoutConfig {
            store_id: non_empty(store_id)?,
            variant_id: non_empty(variant_id)?,
            api_key: non_empty(api_key)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub name: String,
    pub birth_date: String,
    pub element: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub checkout_url: String,
    pub message: String,
    pub product_name: String,
    pub product_description: String,
    pub element: ElementCategory,
}

/// Percent-encode like JavaScript's encodeURIComponent: `!'()*` stay literal
pub fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Create a checkout session for the full report
pub fn create_checkout(config: Option<&CheckoutConfig>, request: &CheckoutRequest) -> Result<CheckoutSession> {
    if config.is_none() {
        return Err(SoulError::CheckoutNotConfigured);
    }

    let element: ElementCategory = request.element.parse()?;

    let checkout_url = format!(
        "{}?name={}&element={}",
        DEMO_CHECKOUT_BASE,
        encode_uri_component(&request.name),
        element
    );

    Ok(CheckoutSession {
        checkout_url,
        message: DEMO_MESSAGE.to_string(),
        product_name: format!("Saja Soul Report - {}", element.display_name()),
        product_description: format!("Complete 2026 forecast for {}", request.name),
        element,
    })
}
