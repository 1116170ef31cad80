// ⚠️ Error Types - shared by every soulfile module

/// Errors surfaced by the element/fortune core and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SoulError {
    /// Birth date text (or form parts) from which no year can be read
    #[error("Invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// Element name outside the five known categories
    #[error("Unknown element category: {0:?}")]
    UnknownCategory(String),

    /// Checkout requested without payment-provider credentials
    #[error("Lemon Squeezy not configured. Please add credentials to .env.local")]
    CheckoutNotConfigured,
}

impl SoulError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        SoulError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SoulError>;
