//! Notification panel: newest first, bounded.

use std::collections::VecDeque;

use chrono::{Local, NaiveTime};

use crate::markup::push_colored;
use crate::surface::{DisplaySurface, Region};

/// Rolling log of rendered notifications.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl NotificationLog {
    /// Creates an empty log keeping at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of entries kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logs a notification stamped with the local time.
    pub fn show<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, text: &str, color: Option<&str>) {
        self.show_at(surface, text, color, Local::now().time());
    }

    /// Logs a notification stamped with `time`.
    pub fn show_at<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        color: Option<&str>,
        time: NaiveTime,
    ) {
        self.entries.push_front(format_entry(text, color, time));
        self.entries.truncate(self.capacity);
        surface.set_region_markup(Region::Notifications, &self.render());
    }

    /// Current panel markup.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries.iter().map(String::as_str).collect()
    }
}

/// Formats one entry.
#[must_use]
pub fn format_entry(text: &str, color: Option<&str>, time: NaiveTime) -> String {
    let mut out = String::with_capacity(text.len() + 96);
    out.push_str("<div><span class='time-label'>");
    out.push_str(&time.format("%H:%M:%S").to_string());
    out.push_str(" - </span>");
    push_colored(&mut out, text, color);
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_entry_format() {
        assert_eq!(
            format_entry("cobra joined", Some("blue"), at(9, 5, 7)),
            "<div><span class='time-label'>09:05:07 - </span>\
             <span style='color: blue'>cobra joined</span></div>"
        );
    }

    #[test]
    fn test_newest_first() {
        let mut log = NotificationLog::new(10);
        let mut surface = MemorySurface::new();

        log.show_at(&mut surface, "first", None, at(1, 0, 0));
        log.show_at(&mut surface, "second", None, at(2, 0, 0));

        let markup = surface.region_markup(Region::Notifications);
        assert!(markup.find("second").unwrap() < markup.find("first").unwrap());
        assert_eq!(markup, log.render());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = NotificationLog::new(2);
        let mut surface = MemorySurface::new();

        for text in ["a1", "b2", "c3"] {
            log.show_at(&mut surface, text, None, at(0, 0, 0));
        }

        assert_eq!(log.len(), 2);
        let markup = surface.region_markup(Region::Notifications);
        assert!(markup.contains("c3"));
        assert!(markup.contains("b2"));
        assert!(!markup.contains("a1"));
    }

    #[test]
    fn test_live_clock_entry() {
        let mut log = NotificationLog::new(4);
        let mut surface = MemorySurface::new();
        log.show(&mut surface, "hello", None);
        assert!(!log.is_empty());
        assert!(surface.region_markup(Region::Notifications).contains("<span>hello</span>"));
    }
}
