//! # Kill Feed
//!
//! One transient message at a time. A new message replaces the text right
//! away and restarts the countdown, so the newest message always gets the
//! full display window; an older message's timer never clears newer text.

use std::time::Duration;

use serpentine_shared::VictimSummary;

use crate::markup::{colored, push_colored};
use crate::surface::{DisplaySurface, Region};
use crate::timer::{ExpiryTimer, TimerToken};

/// The message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMessage {
    /// Markup shown in the kill feed.
    pub text: String,
    /// Expiry that will clear it.
    pub expiry: TimerToken,
}

/// Debounced single-slot message region.
#[derive(Debug)]
pub struct KillFeed {
    duration: Duration,
    timer: ExpiryTimer,
    pending: Option<PendingMessage>,
}

impl KillFeed {
    /// Creates an empty kill feed showing each message for `duration`.
    #[must_use]
    pub fn new(duration: Duration, timer: ExpiryTimer) -> Self {
        Self {
            duration,
            timer,
            pending: None,
        }
    }

    /// Message on screen, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingMessage> {
        self.pending.as_ref()
    }

    /// Shows `text` now and (re)starts the countdown.
    pub fn show_timed_message<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: impl Into<String>,
    ) {
        let text = text.into();
        surface.set_region_markup(Region::KillFeed, &text);
        let expiry = self.timer.arm(self.duration);
        self.pending = Some(PendingMessage { text, expiry });
    }

    /// Empties the kill feed and drops any pending expiry.
    pub fn clear_message<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) {
        self.timer.cancel();
        self.pending = None;
        surface.set_region_markup(Region::KillFeed, "");
    }

    /// Applies a fired expiry. Returns true if it cleared the feed.
    pub fn expire<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, token: TimerToken) -> bool {
        if !self.timer.fire(token) {
            return false;
        }
        self.pending = None;
        surface.set_region_markup(Region::KillFeed, "");
        true
    }

    /// "`killer` killed `victim` and grew by `length`".
    pub fn show_kill<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        killer: (&str, Option<&str>),
        victim: (&str, Option<&str>),
        victim_length: u32,
    ) {
        self.show_timed_message(surface, format_kill(killer, victim, victim_length));
    }

    /// "`a` `b` have killed each other".
    pub fn show_killed_each_other<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        victims: &[VictimSummary],
    ) {
        self.show_timed_message(surface, format_killed_each_other(victims));
    }

    /// "`player` ran into a wall".
    pub fn show_ran_into_wall<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        player_name: &str,
        player_color: Option<&str>,
    ) {
        self.show_timed_message(surface, format_ran_into_wall(player_name, player_color));
    }

    /// "`player` committed suicide".
    pub fn show_suicide<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        victim_name: &str,
        victim_color: Option<&str>,
    ) {
        self.show_timed_message(surface, format_suicide(victim_name, victim_color));
    }
}

/// Formats a kill. Each side is `(name, color)`.
#[must_use]
pub fn format_kill(
    (killer_name, killer_color): (&str, Option<&str>),
    (victim_name, victim_color): (&str, Option<&str>),
    victim_length: u32,
) -> String {
    let mut out = String::with_capacity(128);
    push_colored(&mut out, killer_name, killer_color);
    out.push_str(" killed ");
    push_colored(&mut out, victim_name, victim_color);
    out.push_str(" and grew by ");
    push_colored(&mut out, &victim_length.to_string(), killer_color);
    out
}

/// Formats a collision in which everyone involved died.
#[must_use]
pub fn format_killed_each_other(victims: &[VictimSummary]) -> String {
    let mut out = String::with_capacity(64 * victims.len() + 32);
    for (i, victim) in victims.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_colored(&mut out, &victim.name, victim.color.as_deref());
    }
    out.push_str(" have killed each other");
    out
}

/// Formats a wall collision.
#[must_use]
pub fn format_ran_into_wall(player_name: &str, player_color: Option<&str>) -> String {
    format!("{} ran into a wall", colored(player_name, player_color))
}

/// Formats a self-collision.
#[must_use]
pub fn format_suicide(victim_name: &str, victim_color: Option<&str>) -> String {
    format!("{} committed suicide", colored(victim_name, victim_color))
}
