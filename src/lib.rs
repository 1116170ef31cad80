// Soulfile - Core Library
// Element classification, 2026 fortunes and the collaborators around them

pub mod error;
pub mod elements;
pub mod fortunes;
pub mod talisman;
pub mod soul_card;
pub mod report;
pub mod checkout;
pub mod analytics;
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{Result, SoulError};
pub use elements::{
    BirthDate, ElementCategory, ElementProfile,
    classify_element, element_for_year, element_profile,
};
pub use fortunes::{
    FortuneRecord, RedactedPreview, REDACTION_GLYPH, TEASER_TRAILER,
    fortune_by_name, get_fortune, get_redacted_preview, redact_danger,
};
pub use talisman::Talisman;
pub use soul_card::{CardAccent, SoulCard};
pub use report::{ReportAccess, ReportBody, SoulReport};
pub use checkout::{CheckoutConfig, CheckoutRequest, CheckoutSession, create_checkout};
pub use analytics::{AnalyticsEvent, AnalyticsSink, MemorySink, SoulCardAction, TracingSink};
pub use config::ServerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
