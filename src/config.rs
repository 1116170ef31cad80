// ⚙️ Server Configuration - environment + optional .env file

use std::env;

use crate::checkout::CheckoutConfig;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (SOULFILE_ADDR)
    pub addr: String,

    /// Present only when all three LEMONSQUEEZY_* variables are set
    pub checkout: Option<CheckoutConfig>,
}

impl ServerConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the real env)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("SOULFILE_ADDR")
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let checkout = CheckoutConfig::from_parts(
            lookup("LEMONSQUEEZY_STORE_ID"),
            lookup("LEMONSQUEEZY_VARIANT_ID"),
            lookup("LEMONSQUEEZY_API_KEY"),
        );

        ServerConfig { addr, checkout }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_string(),
            checkout: None,
        }
    }
}
