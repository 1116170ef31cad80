// 🧧 Talisman - protective seal glyph and colors per element

use serde::Serialize;

use crate::elements::ElementCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Talisman {
    pub category: ElementCategory,

    /// Hangul syllable painted on the talisman (화, 수, ...)
    pub glyph: &'static str,

    /// Hanja seal stamped on the soul card (火, 水, ...)
    pub seal: &'static str,

    pub color: &'static str,
    pub secondary_color: &'static str,
}

impl Talisman {
    pub fn for_element(category: ElementCategory) -> Self {
        let (glyph, seal, color, secondary_color) = match category {
            ElementCategory::Fire => ("화", "火", "#DC2626", "#EF4444"),
            ElementCategory::Water => ("수", "水", "#2563EB", "#3B82F6"),
            ElementCategory::Wood => ("목", "木", "#16A34A", "#22C55E"),
            ElementCategory::Metal => ("금", "金", "#A1A1AA", "#D4D4D8"),
            ElementCategory::Earth => ("토", "土", "#D97706", "#F59E0B"),
        };

        Talisman {
            category,
            glyph,
            seal,
            color,
            secondary_color,
        }
    }
}
