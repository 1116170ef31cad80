use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::env;

use soulfile::{
    classify_element, fortune_by_name, get_redacted_preview, FortuneRecord, ReportAccess,
    ReportBody, SoulCard, SoulReport,
};

const USAGE: &str = "\
Usage: soulfile <command> [--json]

Commands:
  classify <birth-date>                 Element profile for a birth date
  fortune <element>                     Full 2026 fortune for an element
  preview <element>                     Redacted danger teaser
  report <name> <birth-date> [--unlocked]
  card <name> <birth-date>              Soul card metadata";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let unlocked = args.iter().any(|a| a == "--unlocked");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    match positional.as_slice() {
        ["classify", date] => run_classify(date, json),
        ["fortune", element] => run_fortune(element, json),
        ["preview", element] => run_preview(element, json),
        ["report", name, date] => run_report(name, date, unlocked, json),
        ["card", name, date] => run_card(name, date, json),
        [] | ["help"] => {
            println!("{}", USAGE);
            Ok(())
        }
        _ => {
            eprintln!("{}", USAGE);
            bail!("unrecognized arguments: {}", args.join(" "));
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn run_classify(date: &str, json: bool) -> Result<()> {
    let profile = classify_element(date)?;
    if json {
        return print_json(profile);
    }

    println!("{} {}", profile.emoji, profile.category.display_name());
    println!("   {}", profile.description);
    println!("   Traits: {}", profile.traits.join(", "));
    Ok(())
}

fn run_fortune(element: &str, json: bool) -> Result<()> {
    let fortune = fortune_by_name(element)?;
    if json {
        return print_json(fortune);
    }

    print_fortune(fortune);
    Ok(())
}

fn print_fortune(fortune: &FortuneRecord) {
    println!("💰 Wealth\n   {}\n", fortune.wealth);
    println!("💘 Love\n   {}\n", fortune.love);
    println!("⚠️  Danger\n   {}\n", fortune.danger);
    println!("🩺 Health\n   {}\n", fortune.health);
    println!("💼 Career\n   {}\n", fortune.career);
    println!("✓ Lucky dates:   {}", fortune.lucky_dates.join(", "));
    println!("✗ Unlucky dates: {}", fortune.unlucky_dates.join(", "));
    println!("🎨 Lucky colors: {}", fortune.lucky_colors.join(", "));
    println!("🧿 Talisman: {}", fortune.talisman);
}

fn run_preview(element: &str, json: bool) -> Result<()> {
    let preview = get_redacted_preview(fortune_by_name(element)?);
    if json {
        return print_json(&preview);
    }

    println!("{}", preview.teaser);
    Ok(())
}

fn run_report(name: &str, date: &str, unlocked: bool, json: bool) -> Result<()> {
    let report = SoulReport::build(name, date, ReportAccess::from_flag(unlocked))?;
    if json {
        return print_json(&report);
    }

    println!("📜 SOUL FILE RETRIEVED: {}", report.name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{} Primary element: {} ({})",
        report.profile.emoji,
        report.profile.category.display_name(),
        report.talisman.glyph
    );
    println!("   {}", report.profile.description);
    println!("   Traits: {}\n", report.profile.traits.join(", "));

    match &report.body {
        ReportBody::Locked { preview } => {
            println!("🔒 {}", preview.teaser);
            println!("\n   Run again with --unlocked to see the full report");
        }
        ReportBody::Unlocked { fortune } => print_fortune(fortune),
    }
    Ok(())
}

fn run_card(name: &str, date: &str, json: bool) -> Result<()> {
    let card = SoulCard::new(name, date)?;
    if json {
        return print_json(&card);
    }

    println!("🪪 {} · {} · {}", card.holder, card.birth_date, card.element.display_name());
    println!("   No. {}", card.card_number);
    println!("   Seal {}  Export as {}", card.accent.seal, card.file_name);
    Ok(())
}
