//! Terminal output helpers — dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for suggestion listings
//! - `indicatif` for the spinner while the model is working

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;
use starboard_core::{DiscoveryResult, ProfileDraft};

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        eprintln!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

/// Emit an arbitrary serializable value as structured output.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        emit_json("data", label, Some(&json_val));
    } else {
        let formatted =
            serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{label}: <?>"));
        println!("{formatted}");
    }
}

/// Unstyled text in text mode; a `data` envelope in JSON mode.
pub fn raw(label: &str, text: &str) {
    if is_json() {
        emit_json("data", label, Some(&JsonValue::String(text.to_string())));
    } else {
        println!("{text}");
    }
}

// ── Discovery rendering ────────────────────────────────────────────

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

pub fn discovery(result: &DiscoveryResult) {
    if is_json() {
        data("discovery", result);
        return;
    }

    let noun = if result.total_found() == 1 {
        "suggestion"
    } else {
        "suggestions"
    };
    header(&format!("{} {} ({})", result.total_found(), noun, result.source()));
    dim(result.query_interpretation());
    if result.is_fallback() {
        warning("model output unavailable; showing keyword fallback results");
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("#"),
            header_cell("Name"),
            header_cell("Category"),
            header_cell("Country"),
            header_cell("Confidence"),
            header_cell("Fanbase"),
        ]);

    for (i, s) in result.suggestions().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&s.name).fg(Color::Green),
            Cell::new(&s.category),
            Cell::new(&s.country),
            Cell::new(format!("{:.2}", s.confidence_score)).set_alignment(CellAlignment::Right),
            Cell::new(group_thousands(s.estimated_fanbase)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

pub fn draft(profile: &ProfileDraft) {
    if is_json() {
        data("profile_draft", profile);
        return;
    }

    header(&format!("Profile draft: {}", profile.name));
    kv("category", &profile.category);
    kv("country", &profile.country);
    kv("fanbase", &group_thousands(profile.fanbase_count));
    kv("bio", &profile.bio);
    for (key, url) in [
        ("instagram", &profile.instagram_url),
        ("youtube", &profile.youtube_url),
        ("spotify", &profile.spotify_url),
        ("image", &profile.profile_image_url),
    ] {
        if let Some(url) = url {
            kv(key, url);
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner for the model call; hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
