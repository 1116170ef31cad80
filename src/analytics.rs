// 📊 Analytics - fire-and-forget product events
// Sinks never report failure back to the caller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Mutex;
use uuid::Uuid;

// ============================================================================
// EVENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoulCardAction {
    Download,
    Share,
}

impl SoulCardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoulCardAction::Download => "download",
            SoulCardAction::Share => "share",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: Uuid,
    pub name: String,
    pub params: Map<String, Value>,
    pub recorded_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn custom(name: &str, params: Map<String, Value>) -> Self {
        AnalyticsEvent {
            id: Uuid::new_v4(),
            name: name.to_string(),
            params,
            recorded_at: Utc::now(),
        }
    }

    /// Visitor pressed "unlock" (willingness-to-pay signal)
    pub fn unlock_click(element: &str, birth_date: &str) -> Self {
        let mut params = Map::new();
        params.insert("element".into(), element.into());
        params.insert("birth_date".into(), birth_date.into());
        params.insert("conversion_intent".into(), "high".into());
        Self::custom("click_unlock_payment", params)
    }

    pub fn soul_card_action(action: SoulCardAction, element: &str) -> Self {
        let mut params = Map::new();
        params.insert("action".into(), action.as_str().into());
        params.insert("element".into(), element.into());
        Self::custom("soul_card_action", params)
    }

    pub fn page_view(path: &str) -> Self {
        let mut params = Map::new();
        params.insert("page_path".into(), path.into());
        Self::custom("page_view", params)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}

// ============================================================================
// SINKS
// ============================================================================

pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

/// Emits each event as a structured log line
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: AnalyticsEvent) {
        let params = Value::Object(event.params);
        tracing::info!(
            event_id = %event.id,
            event = %event.name,
            params = %params,
            "analytics event"
        );
    }
}

/// Keeps events in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: AnalyticsEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
