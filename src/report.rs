// 📜 Soul Report - everything the report page renders for one visitor
// Locked reports carry only the redacted danger preview

use serde::{Deserialize, Serialize};

use crate::elements::{element_profile, BirthDate, ElementProfile};
use crate::error::Result;
use crate::fortunes::{get_fortune, get_redacted_preview, FortuneRecord, RedactedPreview};
use crate::soul_card::SoulCard;
use crate::talisman::Talisman;

/// Shown when the visitor leaves the name blank
pub const DEFAULT_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportAccess {
    Locked,
    Unlocked,
}

impl ReportAccess {
    pub fn from_flag(unlocked: bool) -> Self {
        if unlocked {
            ReportAccess::Unlocked
        } else {
            ReportAccess::Locked
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "lowercase")]
pub enum ReportBody {
    Locked { preview: RedactedPreview },
    Unlocked { fortune: &'static FortuneRecord },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoulReport {
    pub name: String,
    pub birth_date: BirthDate,
    pub profile: &'static ElementProfile,
    pub talisman: Talisman,
    pub card: SoulCard,
    pub body: ReportBody,
}

impl SoulReport {
    pub fn build(name: &str, birth_date_text: &str, access: ReportAccess) -> Result<Self> {
        let name = match name.trim() {
            "" => DEFAULT_NAME,
            trimmed => trimmed,
        };
        let birth_date = BirthDate::parse(birth_date_text)?;
        let category = birth_date.element();
        let fortune = get_fortune(category);

        let body = match access {
            ReportAccess::Locked => ReportBody::Locked {
                preview: get_redacted_preview(fortune),
            },
            ReportAccess::Unlocked => ReportBody::Unlocked { fortune },
        };

        Ok(SoulReport {
            name: name.to_string(),
            birth_date,
            profile: element_profile(category),
            talisman: Talisman::for_element(category),
            card: SoulCard::new(name, birth_date_text)?,
            body,
        })
    }

    pub fn access(&self) -> ReportAccess {
        match self.body {
            ReportBody::Locked { .. } => ReportAccess::Locked,
            ReportBody::Unlocked { .. } => ReportAccess::Unlocked,
        }
    }

    /// Unlock in place, swapping the preview for the full record
    pub fn unlock(&mut self) {
        self.body = ReportBody::Unlocked {
            fortune: get_fortune(self.profile.category),
        };
    }
}
