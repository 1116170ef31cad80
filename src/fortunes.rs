// 🔮 Fortune Content - 2026 predictions by element
// Fixed tables plus the redacted "locked" preview of the danger section

use serde::Serialize;

use crate::elements::ElementCategory;
use crate::error::Result;

/// Glyph sequence that replaces a redacted word
pub const REDACTION_GLYPH: &str = "████";

/// Appended to every teaser, names the sections still locked
pub const TEASER_TRAILER: &str =
    "\n\n[ENCRYPTED: Wealth Analysis, Love Compatibility, Lucky Dates, and Protective Talisman Information]";

/// Words containing any of these survive redaction wherever they appear
const KEEP_MARKERS: [&str; 3] = ["WARNING", "CRITICAL", "2026"];

// ============================================================================
// FORTUNE RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRecord {
    pub wealth: &'static str,
    pub love: &'static str,
    pub danger: &'static str,
    pub health: &'static str,
    pub career: &'static str,
    pub lucky_dates: &'static [&'static str],
    pub unlucky_dates: &'static [&'static str],
    pub lucky_colors: &'static [&'static str],
    pub talisman: &'static str,
}

static FIRE: FortuneRecord = FortuneRecord {
    wealth: "2026 brings powerful financial momentum for Fire souls. Jupiter's transit through your wealth sector (March-August) creates exceptional opportunities in technology, energy, and leadership roles. A significant investment opportunity emerges around May 15th - trust your instincts. Avoid speculative ventures in October when Mars squares your financial houses.",
    love: "Your passionate nature attracts intense connections in 2026. Single Fire souls may meet a transformative partner during the Lunar New Year period (late January). Existing relationships deepen through shared adventures. Warning: April's Venus retrograde tests patience - avoid ultimatums. Summer brings harmonious energy for commitments.",
    danger: "CRITICAL WARNING: The period between September 12-28, 2026 shows extremely challenging planetary alignments for Fire elements. Avoid major travel, surgery, and confrontations during this window. Your natural impulsiveness is heightened - practice conscious restraint. Legal matters should be postponed until October 5th.",
    health: "Fire's vitality is strong in 2026, but watch for burnout symptoms from March-May. Heart and circulation require attention - incorporate cardio and stress management. Avoid excessive alcohol during summer social season. Autumn brings renewed energy.",
    career: "Leadership opportunities multiply in 2026. A promotion or significant role change is likely by Q2. Your boldness is rewarded, but diplomatic communication is essential in July when workplace tensions peak. Consider mentorship roles - teaching others amplifies your success.",
    lucky_dates: &["January 28", "March 15", "May 22", "August 8", "November 11"],
    unlucky_dates: &["April 7", "September 12-28", "December 3"],
    lucky_colors: &["Crimson Red", "Gold", "Orange"],
    talisman: "Carry a piece of carnelian or red jasper. Place near your workspace for amplified success energy.",
};

static WATER: FortuneRecord = FortuneRecord {
    wealth: "2026 favors Water elements in creative and healing industries. Neptune's harmonious aspect brings unexpected income through artistic pursuits, counseling, or wellness services. Real estate investments made before June show excellent returns. Be cautious with joint finances in August - ensure clear contracts.",
    love: "Emotional depth attracts soul-level connections in 2026. A significant relationship begins through spiritual or artistic communities around February-March. Existing partnerships benefit from vulnerability and honest communication. The August Full Moon brings clarity about long-term compatibility.",
    danger: "CRITICAL WARNING: Water souls face heightened emotional sensitivity during the March 25 - April 10 period. Avoid major decisions during this fog of confusion. Travel near large bodies of water requires extra caution in July. Trust issues surface in relationships - address them directly rather than retreating.",
    health: "Lymphatic and immune systems need support in 2026. Water retention and kidney function require attention - stay hydrated with clean, filtered water. Emotional health directly impacts physical wellbeing. Therapy or counseling in spring prevents autumn depression.",
    career: "Creative and healing professions flourish. A career pivot toward more meaningful work is supported throughout 2026. Collaboration over competition brings success. Avoid workplace politics in June - stay above the drama. Remote work opportunities expand.",
    lucky_dates: &["February 14", "April 22", "June 21", "September 9", "December 21"],
    unlucky_dates: &["March 25 - April 10", "July 17", "November 8"],
    lucky_colors: &["Deep Blue", "Silver", "Turquoise"],
    talisman: "Moonstone or aquamarine worn as jewelry enhances intuition and protection throughout 2026.",
};

static WOOD: FortuneRecord = FortuneRecord {
    wealth: "Growth-oriented investments thrive for Wood souls in 2026. Green technology, sustainable businesses, and education sectors offer exceptional returns. A business partnership formed in spring proves highly profitable. Avoid risky ventures in Q4 - consolidate gains instead.",
    love: "Wood's gentle nature attracts nurturing relationships in 2026. Family connections deepen, and for singles, love often arrives through community service or environmental causes. Patience is rewarded - avoid rushing commitment before September. Existing couples benefit from shared growth projects.",
    danger: "CRITICAL WARNING: The period from June 15-30 brings challenges related to family conflicts and property disputes. Legal matters involving inheritance or real estate require careful handling. Avoid signing contracts during this window. Liver and gallbladder health need monitoring.",
    health: "Liver health is your focus for 2026 - reduce processed foods and alcohol, especially in spring. Eye strain from screens requires attention. Forest bathing and time in nature are essential medicine. Spring allergies may be more intense than usual.",
    career: "Teaching, mentoring, and educational roles expand significantly. A book, course, or knowledge-sharing venture succeeds in 2026. Avoid impatience with slow progress in Q1 - the seeds you plant bloom by autumn. International opportunities emerge through academic connections.",
    lucky_dates: &["March 20", "May 5", "July 7", "September 23", "November 27"],
    unlucky_dates: &["June 15-30", "August 12", "October 31"],
    lucky_colors: &["Forest Green", "Brown", "Teal"],
    talisman: "Jade or green aventurine promotes prosperity and health. Keep a small plant in your workspace.",
};

static METAL: FortuneRecord = FortuneRecord {
    wealth: "Precision and discipline reward Metal souls financially in 2026. Technology investments, particularly in AI and automation, show strong returns. A structured savings plan established in January compounds significantly. Avoid emotional spending during Venus retrograde (April). Inheritance or asset restructuring favors you in autumn.",
    love: "Metal's discerning nature attracts quality over quantity in relationships. A significant connection develops through professional networks or structured activities (fitness, courses). Vulnerability is your growth edge - allow emotional expression. Autumn brings deepening intimacy for couples.",
    danger: "CRITICAL WARNING: Respiratory and skin health require vigilance from October 15 - November 15. Avoid exposure to pollution and allergens. Business partnerships formed in haste during July may prove problematic - conduct thorough due diligence. Guard against isolation and rigidity.",
    health: "Lungs, skin, and large intestine need support in 2026. Breathwork practices transform your wellbeing. Reduce dairy if experiencing congestion. Autumn dryness affects you strongly - hydrate internally and externally. Grief from past losses may surface for healing.",
    career: "Technical expertise and attention to detail open doors in 2026. A leadership position in systems, finance, or engineering is likely by mid-year. Perfectionism is an asset but avoid analysis paralysis. Networking in unconventional settings yields surprising opportunities.",
    lucky_dates: &["February 8", "April 4", "July 21", "October 8", "December 12"],
    unlucky_dates: &["July 10-17", "October 15 - November 15", "December 30"],
    lucky_colors: &["White", "Silver", "Gold", "Gray"],
    talisman: "Clear quartz or white jade amplifies clarity and attracts prosperity. Wear metal jewelry intentionally.",
};

static EARTH: FortuneRecord = FortuneRecord {
    wealth: "Stability-focused investments reward Earth souls in 2026. Real estate, agriculture, and infrastructure projects show excellent long-term returns. A significant property opportunity arises in May - act decisively. Avoid lending money to friends in March. Build emergency reserves for unexpected Q4 expenses.",
    love: "Earth's nurturing presence attracts committed, long-term partners in 2026. For singles, love arrives through family introductions or comfortable, familiar settings. Existing relationships deepen through shared domestic projects. Avoid stubbornness in June - flexibility strengthens bonds.",
    danger: "CRITICAL WARNING: Digestive and metabolic health require attention from August 1-20. Avoid major dietary changes during this period. Property or boundary disputes may arise with neighbors - address them diplomatically. Overthinking creates obstacles - trust your grounded instincts.",
    health: "Stomach, spleen, and digestive system are 2026 focus areas. Regular meal times and mindful eating transform health. Muscle and joint issues respond well to consistent, moderate exercise. Worry and overthinking directly impact digestion - practice grounding techniques.",
    career: "Building and management roles expand in 2026. Your reliability earns recognition and advancement in existing organizations. A side business related to property, food, or wellness gains traction. Delegate to avoid overwhelm by Q3. Long-term planning beats quick wins.",
    lucky_dates: &["January 15", "April 18", "June 6", "August 28", "October 10"],
    unlucky_dates: &["March 3", "August 1-20", "November 23"],
    lucky_colors: &["Yellow", "Brown", "Terracotta", "Ochre"],
    talisman: "Tiger's eye or yellow jasper promotes stability and attracts abundance. Keep crystals in your home's center.",
};

// ============================================================================
// LOOKUP
// ============================================================================

/// Fortune lookup - total over the enum
pub fn get_fortune(category: ElementCategory) -> &'static FortuneRecord {
    match category {
        ElementCategory::Fire => &FIRE,
        ElementCategory::Water => &WATER,
        ElementCategory::Wood => &WOOD,
        ElementCategory::Metal => &METAL,
        ElementCategory::Earth => &EARTH,
    }
}

/// Lookup by untyped element name. Unknown names are an error, never earth.
pub fn fortune_by_name(name: &str) -> Result<&'static FortuneRecord> {
    let category: ElementCategory = name.parse()?;
    Ok(get_fortune(category))
}

// ============================================================================
// REDACTED PREVIEW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedPreview {
    pub redacted_danger: String,
    pub teaser: String,
}

/// Redact the danger text word by word.
///
/// Every fourth word (starting with the first) and any word carrying a keep
/// marker is shown as-is. Other words longer than four characters become
/// [`REDACTION_GLYPH`]; shorter ones pass through untouched.
pub fn redact_danger(danger: &str) -> String {
    danger
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let keep = i % 4 == 0 || KEEP_MARKERS.iter().any(|marker| word.contains(marker));
            if !keep && word.chars().count() > 4 {
                REDACTION_GLYPH
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Locked-view preview built from the danger section only
pub fn get_redacted_preview(fortune: &FortuneRecord) -> RedactedPreview {
    let redacted_danger = redact_danger(fortune.danger);
    let teaser = format!("{}{}", redacted_danger, TEASER_TRAILER);

    RedactedPreview {
        redacted_danger,
        teaser,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::element_profile;
    use crate::error::SoulError;

    #[test]
    fn test_every_field_populated() {
        for category in ElementCategory::ALL {
            let f = get_fortune(category);
            for text in [f.wealth, f.love, f.danger, f.health, f.career, f.talisman] {
                assert!(!text.is_empty(), "{} has an empty section", category);
            }
            assert!(!f.lucky_dates.is_empty());
            assert!(!f.unlucky_dates.is_empty());
            assert!(!f.lucky_colors.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for category in ElementCategory::ALL {
            assert_eq!(get_fortune(category), get_fortune(category));
            assert!(std::ptr::eq(get_fortune(category), get_fortune(category)));
        }
    }

    #[test]
    fn test_profile_round_trip() {
        // Each record is written for its own element
        for category in ElementCategory::ALL {
            let fortune = get_fortune(element_profile(category).category);
            let name = match category {
                ElementCategory::Fire => "Fire",
                ElementCategory::Water => "Water",
                ElementCategory::Wood => "Wood",
                ElementCategory::Metal => "Metal",
                ElementCategory::Earth => "Earth",
            };
            assert!(fortune.wealth.contains(name) || fortune.love.contains(name), "{}", name);
        }
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        assert_eq!(fortune_by_name("Metal").unwrap(), get_fortune(ElementCategory::Metal));
        assert_eq!(
            fortune_by_name("aether"),
            Err(SoulError::UnknownCategory("aether".to_string()))
        );
        assert!(fortune_by_name("").is_err());
    }

    #[test]
    fn test_redaction_rules() {
        let out = redact_danger("CRITICAL WARNING: The period between September 12-28, 2026 shows");
        assert_eq!(out, "CRITICAL WARNING: The ████ between ████ ████ 2026 shows");
    }

    #[test]
    fn test_fire_preview_exact() {
        let preview = get_redacted_preview(get_fortune(ElementCategory::Fire));
        assert!(preview.redacted_danger.starts_with(
            "CRITICAL WARNING: The ████ between ████ ████ 2026 shows ████ ████ ████ alignments"
        ));
        assert!(preview.teaser.starts_with(&preview.redacted_danger));
        assert!(preview.teaser.ends_with(TEASER_TRAILER));
    }

    #[test]
    fn test_short_words_leak_through() {
        assert_eq!(redact_danger("alpha beta the and omega"), "alpha beta the and omega");
        assert_eq!(redact_danger("keep hidden short gone"), "keep ████ ████ gone");
    }

    #[test]
    fn test_token_count_preserved() {
        for category in ElementCategory::ALL {
            let danger = get_fortune(category).danger;
            let redacted = redact_danger(danger);
            assert_eq!(
                redacted.split_whitespace().count(),
                danger.split_whitespace().count()
            );
        }
    }

    #[test]
    fn test_keep_markers_anywhere() {
        let text = "one PRECRITICAL three four2026x five WARNINGS seven";
        let input: Vec<&str> = text.split_whitespace().collect();
        let output = redact_danger(text);
        let output: Vec<&str> = output.split_whitespace().collect();

        for (before, after) in input.iter().zip(&output) {
            if KEEP_MARKERS.iter().any(|m| before.contains(m)) {
                assert_eq!(before, after);
            }
        }
        assert_eq!(output[1], "PRECRITICAL");
        assert_eq!(output[3], "four2026x");
        assert_eq!(output[5], "WARNINGS");
    }

    #[test]
    fn test_keep_markers_are_case_sensitive() {
        assert_eq!(redact_danger("zero critical"), "zero ████");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(redact_danger("  first\t\tsecond   x  "), "first ████ x");
    }

    #[test]
    fn test_empty_danger() {
        let mut fortune = get_fortune(ElementCategory::Earth).clone();
        fortune.danger = "";
        let preview = get_redacted_preview(&fortune);
        assert_eq!(preview.redacted_danger, "");
        assert_eq!(preview.teaser, TEASER_TRAILER);
    }

    #[test]
    fn test_preview_is_deterministic() {
        let fortune = get_fortune(ElementCategory::Water);
        assert_eq!(get_redacted_preview(fortune), get_redacted_preview(fortune));
    }
}
