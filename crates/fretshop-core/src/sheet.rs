//! # Repair Sheet Module
//!
//! The structured "repair sheet" attached to every work order, and the codec
//! that folds it into the single free-text `notes` column the ledger service
//! gives us.
//!
//! ## Why a Text Codec?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The ledger service stores ONE opaque text field per work order.       │
//! │  The repair-sheet UI edits ~30 named fields.                            │
//! │                                                                         │
//! │  RepairSheet ──► encode() ──► "[INSTRUMENT]\nBrand: Fender\n..."        │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                            work_order.notes (remote)                    │
//! │                                      │                                  │
//! │  RepairSheet ◄── decode() ◄──────────┘                                  │
//! │                                                                         │
//! │  Contract: decode(encode(sheet)) == sheet for every field the encoder   │
//! │  wrote, and decode() NEVER fails - hand-edited or legacy notes simply   │
//! │  produce a partially-populated sheet.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Five fixed sections, each emitted only when its trigger fields hold
//! content, joined by one blank line:
//!
//! ```text
//! [INSTRUMENT]        Key: value lines, fixed order, empty values kept
//! [PROBLEMS]          free text body
//! [SETUP]             Key: value lines, fixed order
//! [TUNING]            #1: B=<before> A=<after>  ..  #8: ...
//! [ELECTRONICS]       Name: B=<before> A=<after>, eight named components
//! ```
//!
//! Encode and decode share one source of truth: the ordered field tables
//! below. Adding a sheet field means adding one struct field and one table
//! entry; both directions pick it up.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Sheet Types
// =============================================================================

/// A before/after measurement pair (tuning strings, electronics readings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BeforeAfter {
    pub before: String,
    pub after: String,
}

impl BeforeAfter {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        BeforeAfter {
            before: before.into(),
            after: after.into(),
        }
    }

    /// True when neither side holds a value.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }
}

/// The full repair sheet. Every field is an owned string; the empty string
/// means "not filled in" (the remote store has no notion of per-field
/// absence inside the notes column).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RepairSheet {
    // Instrument
    pub brand: String,
    pub type_model: String,
    pub body_color: String,
    pub serial_number: String,
    pub est_mfg_date: String,
    pub neck: String,
    pub weight: String,
    pub bridge: String,
    pub tuners: String,
    pub date_received: String,
    pub date_picked_up: String,

    // Problems
    pub problems_and_issues: String,

    // Setup
    pub neck_relief_before: String,
    pub neck_relief_after: String,
    pub fretboard_radius: String,
    pub fret_type: String,
    pub fret_condition: String,
    pub level_and_crown_suggested: String,
    pub level_and_crown_performed: String,

    // Tuning: keyed by string identifier ("#1".."#8"), ordered
    pub tuning: BTreeMap<String, BeforeAfter>,

    // Electronics
    pub volume_pot: BeforeAfter,
    pub treble_bp_cap: BeforeAfter,
    pub tone_pot: BeforeAfter,
    pub tone_cap: BeforeAfter,
    pub bridge_ground: BeforeAfter,
    pub bridge_pickup: BeforeAfter,
    pub middle_pickup: BeforeAfter,
    pub neck_pickup: BeforeAfter,
}

/// The eight string identifiers the sheet form edits, low to high.
pub const STRING_KEYS: [&str; 8] = ["#1", "#2", "#3", "#4", "#5", "#6", "#7", "#8"];

// =============================================================================
// Field Tables (single source of truth for encode AND decode)
// =============================================================================

/// One plain `Key: value` field.
struct Field {
    name: &'static str,
    get: fn(&RepairSheet) -> &str,
    set: fn(&mut RepairSheet, String),
}

/// One `Name: B=<before> A=<after>` field.
struct PairField {
    name: &'static str,
    get: fn(&RepairSheet) -> &BeforeAfter,
    set: fn(&mut RepairSheet, BeforeAfter),
}

const INSTRUMENT_FIELDS: &[Field] = &[
    Field { name: "Brand", get: |s| &s.brand, set: |s, v| s.brand = v },
    Field { name: "Type/Model", get: |s| &s.type_model, set: |s, v| s.type_model = v },
    Field { name: "Body Color", get: |s| &s.body_color, set: |s, v| s.body_color = v },
    Field { name: "Serial #", get: |s| &s.serial_number, set: |s, v| s.serial_number = v },
    Field { name: "Est Mfg Date", get: |s| &s.est_mfg_date, set: |s, v| s.est_mfg_date = v },
    Field { name: "Neck", get: |s| &s.neck, set: |s, v| s.neck = v },
    Field { name: "Weight", get: |s| &s.weight, set: |s, v| s.weight = v },
    Field { name: "Bridge", get: |s| &s.bridge, set: |s, v| s.bridge = v },
    Field { name: "Tuners", get: |s| &s.tuners, set: |s, v| s.tuners = v },
    Field { name: "Date Received", get: |s| &s.date_received, set: |s, v| s.date_received = v },
    Field { name: "Date Picked Up", get: |s| &s.date_picked_up, set: |s, v| s.date_picked_up = v },
];

const SETUP_FIELDS: &[Field] = &[
    Field { name: "Neck Relief Before", get: |s| &s.neck_relief_before, set: |s, v| s.neck_relief_before = v },
    Field { name: "Neck Relief After", get: |s| &s.neck_relief_after, set: |s, v| s.neck_relief_after = v },
    Field { name: "Fretboard Radius", get: |s| &s.fretboard_radius, set: |s, v| s.fretboard_radius = v },
    Field { name: "Fret Type", get: |s| &s.fret_type, set: |s, v| s.fret_type = v },
    Field { name: "Fret Condition", get: |s| &s.fret_condition, set: |s, v| s.fret_condition = v },
    Field { name: "Level & Crown Suggested", get: |s| &s.level_and_crown_suggested, set: |s, v| s.level_and_crown_suggested = v },
    Field { name: "Level & Crown Performed", get: |s| &s.level_and_crown_performed, set: |s, v| s.level_and_crown_performed = v },
];

const ELECTRONICS_FIELDS: &[PairField] = &[
    PairField { name: "Volume Pot", get: |s| &s.volume_pot, set: |s, v| s.volume_pot = v },
    PairField { name: "Treble BP Cap", get: |s| &s.treble_bp_cap, set: |s, v| s.treble_bp_cap = v },
    PairField { name: "Tone Pot", get: |s| &s.tone_pot, set: |s, v| s.tone_pot = v },
    PairField { name: "Tone Cap", get: |s| &s.tone_cap, set: |s, v| s.tone_cap = v },
    PairField { name: "Bridge Ground", get: |s| &s.bridge_ground, set: |s, v| s.bridge_ground = v },
    PairField { name: "Bridge Pickup", get: |s| &s.bridge_pickup, set: |s, v| s.bridge_pickup = v },
    PairField { name: "Middle Pickup", get: |s| &s.middle_pickup, set: |s, v| s.middle_pickup = v },
    PairField { name: "Neck Pickup", get: |s| &s.neck_pickup, set: |s, v| s.neck_pickup = v },
];

// =============================================================================
// Encode
// =============================================================================

impl RepairSheet {
    /// Serializes the sheet into the flat notes text sent to the ledger
    /// service.
    ///
    /// Sections appear in fixed order and only when their trigger fields
    /// hold content. Inside an emitted section every field renders, empty
    /// values included, so the decoder can always tell "field left blank"
    /// from "section never filled in".
    pub fn encode(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.brand.is_empty()
            || !self.type_model.is_empty()
            || !self.body_color.is_empty()
            || !self.serial_number.is_empty()
        {
            sections.push(key_value_section("INSTRUMENT", INSTRUMENT_FIELDS, self));
        }

        if !self.problems_and_issues.is_empty() {
            sections.push(format!("[PROBLEMS]\n{}", self.problems_and_issues));
        }

        if !self.neck_relief_before.is_empty()
            || !self.neck_relief_after.is_empty()
            || !self.fretboard_radius.is_empty()
        {
            sections.push(key_value_section("SETUP", SETUP_FIELDS, self));
        }

        if !self.tuning.is_empty() {
            let mut lines = vec!["[TUNING]".to_string()];
            for (key, pair) in &self.tuning {
                lines.push(format!("{}: B={} A={}", key, pair.before, pair.after));
            }
            sections.push(lines.join("\n"));
        }

        if !self.volume_pot.before.is_empty() || !self.volume_pot.after.is_empty() {
            let mut lines = vec!["[ELECTRONICS]".to_string()];
            for field in ELECTRONICS_FIELDS {
                let pair = (field.get)(self);
                lines.push(format!("{}: B={} A={}", field.name, pair.before, pair.after));
            }
            sections.push(lines.join("\n"));
        }

        sections.join("\n\n")
    }

    /// Reconstructs a sheet from notes text.
    ///
    /// Decoding is **total**: text this codec never wrote (hand-edited
    /// notes, legacy free text, garbage) degrades to empty or partially
    /// populated fields. Nothing here can prevent a work order from
    /// rendering.
    pub fn decode(notes: &str) -> RepairSheet {
        let mut sheet = RepairSheet::default();

        if let Some(body) = section_body(notes, "INSTRUMENT") {
            for field in INSTRUMENT_FIELDS {
                (field.set)(&mut sheet, extract_field(body, field.name));
            }
        }

        if let Some(body) = section_body(notes, "PROBLEMS") {
            sheet.problems_and_issues = body.trim().to_string();
        }

        if let Some(body) = section_body(notes, "SETUP") {
            for field in SETUP_FIELDS {
                (field.set)(&mut sheet, extract_field(body, field.name));
            }
        }

        if let Some(body) = section_body(notes, "TUNING") {
            for line in body.trim().lines() {
                if let Some(caps) = TUNING_LINE.captures(line) {
                    sheet.tuning.insert(
                        caps[1].trim().to_string(),
                        BeforeAfter::new(caps[2].trim(), caps[3].trim()),
                    );
                }
            }
        }

        if let Some(body) = section_body(notes, "ELECTRONICS") {
            for field in ELECTRONICS_FIELDS {
                (field.set)(&mut sheet, parse_before_after(&extract_field(body, field.name)));
            }
        }

        sheet
    }
}

/// Renders one bracketed section of `Key: value` lines.
fn key_value_section(name: &str, fields: &[Field], sheet: &RepairSheet) -> String {
    let mut lines = vec![format!("[{name}]")];
    for field in fields {
        lines.push(format!("{}: {}", field.name, (field.get)(sheet)));
    }
    lines.join("\n")
}

// =============================================================================
// Decode Primitives
// =============================================================================

/// `[NAME]` header followed by everything up to the next `[` or end of text.
static SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Z]+)\]([^\[]*)").expect("section pattern"));

/// `#N: B=<before> A=<after>` tuning line.
static TUNING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?):\s*B=(.*?)\s*A=(.*)$").expect("tuning pattern"));

/// `B=<before> A=<after>` value of an electronics field.
static BEFORE_AFTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"B=(.*?)\s*A=(.*)$").expect("before/after pattern"));

/// Returns the body of the named section, or `None` when the header is
/// absent. The body runs to the next `[` so unknown trailing sections never
/// bleed into known ones.
fn section_body<'a>(notes: &'a str, name: &str) -> Option<&'a str> {
    SECTION
        .captures_iter(notes)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2))
        .map(|body| body.as_str())
}

/// Extracts a `Name: value` line from a section body, matching the field
/// name case-insensitively. A missing field, or a present field with no
/// value, both come back as the empty string.
fn extract_field(body: &str, name: &str) -> String {
    for line in body.lines() {
        let line = line.trim_start();
        let Some(prefix) = line.get(..name.len()) else {
            continue;
        };
        if prefix.eq_ignore_ascii_case(name) && line[name.len()..].starts_with(':') {
            return line[name.len() + 1..].trim().to_string();
        }
    }
    String::new()
}

/// Splits a `B=<before> A=<after>` value. Anything that doesn't match the
/// pattern yields two empty sides rather than an error.
fn parse_before_after(value: &str) -> BeforeAfter {
    match BEFORE_AFTER.captures(value) {
        Some(caps) => BeforeAfter::new(caps[1].trim(), caps[2].trim()),
        None => BeforeAfter::default(),
    }
}
