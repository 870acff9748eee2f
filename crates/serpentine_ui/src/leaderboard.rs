//! Leaderboard markup.

use std::fmt::Write;

use serpentine_shared::PlayerStatEntry;

use crate::markup::{escape, escape_into, sanitize_color};

const HEADER: &str = "<div class='player-stats-header'><span class='image'></span>\
<span class='name'>Name</span>\
<span class='stat'>Score</span>\
<span class='stat'>High</span>\
<span class='stat'>Kills</span>\
<span class='stat'>Deaths</span></div>";

/// Renders the header plus one row per entry, in the given order.
#[must_use]
pub fn render_player_stats(entries: &[PlayerStatEntry]) -> String {
    let mut out = String::with_capacity(HEADER.len() + entries.len() * 256);
    out.push_str(HEADER);
    for entry in entries {
        push_row(&mut out, entry);
    }
    out
}

fn push_row(out: &mut String, entry: &PlayerStatEntry) {
    out.push_str("<div class='player-stats-content'><span class='image'>");
    if let Some(avatar) = entry.avatar.as_deref().filter(|a| !a.is_empty()) {
        out.push_str("<img src='");
        escape_into(out, avatar);
        out.push_str("' class='player-stats-image'>");
    }
    out.push_str("</span>");

    match sanitize_color(&entry.color) {
        Some(color) => {
            let _ = write!(out, "<span class='name' style='color: {color}'>");
        }
        None => out.push_str("<span class='name'>"),
    }
    out.push_str(&escape(&entry.name));
    out.push_str("</span>");

    for stat in [entry.score, entry.high_score, entry.kills, entry.deaths] {
        let _ = write!(out, "<span class='stat'>{stat}</span>");
    }
    out.push_str("</div>");
}
