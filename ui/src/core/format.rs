//! Formatting helpers shared by table headers, scope badges, and rows.

use time::{
    format_description::well_known::{Rfc2822, Rfc3339},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime, UtcOffset,
};

/// Turn a column or enum name into a display label: underscores become
/// spaces, interior capitals start a new word, every word is title-cased.
///
/// `created_at` -> `Created At`, `bodyFat` -> `Body Fat`,
/// `WEIGHTLIFTING` -> `Weightlifting`.
pub fn format_name(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    let mut previous_lower = false;
    for ch in raw.chars() {
        if ch == '_' {
            spaced.push(' ');
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower {
            spaced.push(' ');
        }
        previous_lower = ch.is_lowercase();
        spaced.push(ch);
    }

    spaced
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// Render a server timestamp in the viewer's local time. Unparseable input
/// is passed through unchanged rather than erased.
pub fn localize_timestamp(raw: &str) -> String {
    localize_timestamp_with_offset(raw, local_offset())
}

pub fn localize_timestamp_with_offset(raw: &str, offset: UtcOffset) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts
            .to_offset(offset)
            .format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    }
}

pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// The backend emits RFC 3339 from the API layer and RFC 2822 (with the
/// obsolete `GMT` zone name) from default model serialization; bare ISO
/// datetimes show up in fixtures. Accept all three.
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc2822) {
        return Some(ts);
    }
    if let Some(stripped) = raw.strip_suffix(" GMT") {
        let rewritten = format!("{stripped} +0000");
        if let Ok(ts) = OffsetDateTime::parse(&rewritten, &Rfc2822) {
            return Some(ts);
        }
    }
    PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
    .map(PrimitiveDateTime::assume_utc)
}
