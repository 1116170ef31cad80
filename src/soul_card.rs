// 🪪 Soul Card - metadata for the shareable card
// Rendering/export to PNG is done by the front-end; this builds what it shows

use serde::Serialize;

use crate::elements::{BirthDate, ElementCategory};
use crate::error::Result;
use crate::talisman::Talisman;

pub const SHARE_TITLE: &str = "My SOULFILE 2026";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAccent {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub seal: &'static str,
}

impl CardAccent {
    pub fn for_element(category: ElementCategory) -> Self {
        let (primary, secondary) = match category {
            ElementCategory::Fire => ("#D4AF37", "#B8860B"),
            ElementCategory::Water => ("#C0C0C0", "#A9A9A9"),
            ElementCategory::Wood => ("#D4AF37", "#228B22"),
            ElementCategory::Metal => ("#E8E8E8", "#C0C0C0"),
            ElementCategory::Earth => ("#DAA520", "#B8860B"),
        };

        CardAccent {
            primary,
            secondary,
            seal: Talisman::for_element(category).seal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoulCard {
    pub holder: String,
    pub birth_date: BirthDate,
    pub element: ElementCategory,
    pub card_number: String,
    pub accent: CardAccent,
    pub file_name: String,
    pub share_title: &'static str,
    pub share_text: String,
}

impl SoulCard {
    /// Card for a holder; the number is hashed from the date text as submitted
    pub fn new(holder: &str, birth_date_text: &str) -> Result<Self> {
        let birth_date = BirthDate::parse(birth_date_text)?;
        let element = birth_date.element();

        Ok(SoulCard {
            holder: holder.to_string(),
            birth_date,
            element,
            card_number: card_number(holder, birth_date_text),
            accent: CardAccent::for_element(element),
            file_name: export_file_name(holder),
            share_title: SHARE_TITLE,
            share_text: format!("My soul element: {}", element.display_name()),
        })
    }
}

/// Four 4-digit groups derived from the UTF-16 code-unit sum of name + date
pub fn card_number(name: &str, birth_date: &str) -> String {
    let hash: u64 = name
        .encode_utf16()
        .chain(birth_date.encode_utf16())
        .map(u64::from)
        .sum();

    [1u64, 7, 13, 17]
        .iter()
        .map(|factor| format!("{:04}", (hash * factor) % 10_000))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SOULFILE_<name>_2026.png with each whitespace character turned into `_`
pub fn export_file_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("SOULFILE_{}_2026.png", safe)
}
