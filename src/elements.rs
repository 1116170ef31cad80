// 🔥 Element Classifier - birth year → one of five elements
// Last digit of the birth year picks the element (simplified Wu Xing cycle)

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SoulError};

// ============================================================================
// ELEMENT CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Fire,
    Water,
    Wood,
    Metal,
    Earth,
}

impl ElementCategory {
    /// All five categories, in the order the report lists them
    pub const ALL: [ElementCategory; 5] = [
        ElementCategory::Fire,
        ElementCategory::Water,
        ElementCategory::Wood,
        ElementCategory::Metal,
        ElementCategory::Earth,
    ];

    /// Lowercase key used in URLs, JSON and analytics params
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Fire => "fire",
            ElementCategory::Water => "water",
            ElementCategory::Wood => "wood",
            ElementCategory::Metal => "metal",
            ElementCategory::Earth => "earth",
        }
    }

    /// Uppercase label for headings ("FIRE")
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementCategory::Fire => "FIRE",
            ElementCategory::Water => "WATER",
            ElementCategory::Wood => "WOOD",
            ElementCategory::Metal => "METAL",
            ElementCategory::Earth => "EARTH",
        }
    }

    /// Full profile for this category
    pub fn profile(&self) -> &'static ElementProfile {
        element_profile(*self)
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementCategory {
    type Err = SoulError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Ok(ElementCategory::Fire),
            "water" => Ok(ElementCategory::Water),
            "wood" => Ok(ElementCategory::Wood),
            "metal" => Ok(ElementCategory::Metal),
            "earth" => Ok(ElementCategory::Earth),
            _ => Err(SoulError::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================================================
// ELEMENT PROFILE
// ============================================================================

/// Static descriptive record for one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProfile {
    pub category: ElementCategory,

    /// Presentation token (a CSS class in the web front-end)
    pub display_color: &'static str,

    pub emoji: &'static str,
    pub description: &'static str,
    pub traits: [&'static str; 3],
}

static METAL: ElementProfile = ElementProfile {
    category: ElementCategory::Metal,
    display_color: "text-zinc-300",
    emoji: "⚔️",
    description: "Strong-willed and determined",
    traits: ["Resilient", "Ambitious", "Disciplined"],
};

static WATER: ElementProfile = ElementProfile {
    category: ElementCategory::Water,
    display_color: "text-blue-400",
    emoji: "🌊",
    description: "Flowing and adaptive",
    traits: ["Intuitive", "Flexible", "Wise"],
};

static WOOD: ElementProfile = ElementProfile {
    category: ElementCategory::Wood,
    display_color: "text-green-400",
    emoji: "🌲",
    description: "Growing and expansive",
    traits: ["Creative", "Compassionate", "Generous"],
};

static FIRE: ElementProfile = ElementProfile {
    category: ElementCategory::Fire,
    display_color: "text-red-500",
    emoji: "🔥",
    description: "Passionate and dynamic",
    traits: ["Energetic", "Leader", "Charismatic"],
};

static EARTH: ElementProfile = ElementProfile {
    category: ElementCategory::Earth,
    display_color: "text-amber-600",
    emoji: "⛰️",
    description: "Stable and grounded",
    traits: ["Practical", "Reliable", "Patient"],
};

/// Profile lookup - total over the enum
pub fn element_profile(category: ElementCategory) -> &'static ElementProfile {
    match category {
        ElementCategory::Metal => &METAL,
        ElementCategory::Water => &WATER,
        ElementCategory::Wood => &WOOD,
        ElementCategory::Fire => &FIRE,
        ElementCategory::Earth => &EARTH,
    }
}

// ============================================================================
// BIRTH DATE
// ============================================================================

/// A birth date taken as a plain calendar label (no timezone handling)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a date label: YYYY-MM-DD, YYYY/MM/DD, MM/DD/YYYY or an RFC 3339 timestamp
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SoulError::invalid_input(text, "birth date is empty"));
        }

        let date = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            // Offset is kept as written, only the date part is used
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .ok_or_else(|| SoulError::invalid_input(text, "no recognizable calendar date"))?;

        // chrono's %Y takes any digit count, so the year must appear as a 4-digit run
        let year_text = format!("{:04}", date.year());
        if !trimmed
            .split(|c: char| !c.is_ascii_digit())
            .any(|run| run == year_text)
        {
            return Err(SoulError::invalid_input(text, "year must be four digits"));
        }

        Self::from_date(date, text)
    }

    /// Build from the three form fields (year, month, day as typed)
    pub fn from_parts(year: &str, month: &str, day: &str) -> Result<Self> {
        let label = format!("{}-{}-{}", year, month, day);

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(SoulError::invalid_input(&label, "year must be four digits"));
        }
        let month_num = parse_field(month, 1, 12)
            .ok_or_else(|| SoulError::invalid_input(&label, "month must be 01-12"))?;
        let day_num = parse_field(day, 1, 31)
            .ok_or_else(|| SoulError::invalid_input(&label, "day must be 01-31"))?;
        let year_num: i32 = year
            .parse()
            .map_err(|_| SoulError::invalid_input(&label, "year must be four digits"))?;

        let date = NaiveDate::from_ymd_opt(year_num, month_num, day_num)
            .ok_or_else(|| SoulError::invalid_input(&label, "not a calendar date"))?;

        Self::from_date(date, &label)
    }

    fn from_date(date: NaiveDate, input: &str) -> Result<Self> {
        if !(0..=9999).contains(&date.year()) {
            return Err(SoulError::invalid_input(input, "year must be four digits"));
        }
        Ok(BirthDate(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Canonical YYYY-MM-DD label (what the form submits)
    pub fn as_label(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn element(&self) -> ElementCategory {
        element_for_year(self.year())
    }
}

fn parse_field(value: &str, min: u32, max: u32) -> Option<u32> {
    if value.is_empty() || value.len() > 2 || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|n| (min..=max).contains(n))
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for BirthDate {
    type Err = SoulError;

    fn from_str(s: &str) -> Result<Self> {
        BirthDate::parse(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Digit table: {0,1 metal; 2,3 water; 4,5 wood; 6,7 fire; 8,9 earth}
pub fn element_for_year(year: i32) -> ElementCategory {
    match year.rem_euclid(10) {
        0 | 1 => ElementCategory::Metal,
        2 | 3 => ElementCategory::Water,
        4 | 5 => ElementCategory::Wood,
        6 | 7 => ElementCategory::Fire,
        _ => ElementCategory::Earth, // 8, 9
    }
}

/// Classify a birth date label into its full element profile
pub fn classify_element(birth_date_text: &str) -> Result<&'static ElementProfile> {
    let birth_date = BirthDate::parse(birth_date_text)?;
    Ok(element_profile(birth_date.element()))
}

// ============================================================================
// TESTS
// ============================================================================
