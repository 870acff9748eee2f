//! In-memory surface for headless hosts, tests and benches.

use std::collections::HashMap;

use super::{DisplaySurface, Region, UploadRequest, UploadSlot};

/// Element state flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementFlags(u32);

impl ElementFlags {
    /// Element is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Element rejects typing.
    pub const READ_ONLY: u32 = 1 << 1;
    /// Element holds input focus.
    pub const FOCUSED: u32 = 1 << 2;
    /// Element contents are selected.
    pub const SELECTED: u32 = 1 << 3;

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

/// Named element of the fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Element {
    Region(Region),
    NameField,
    NameWarning,
    PlayButton,
    Content,
}

#[derive(Debug, Clone, Default)]
struct ElementState {
    text: String,
    color: Option<String>,
    flags: ElementFlags,
}

static BLANK: ElementState = ElementState {
    text: String::new(),
    color: None,
    flags: ElementFlags(0),
};

/// A [`DisplaySurface`] that just remembers what it was told.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    elements: HashMap<Element, ElementState>,
    files: HashMap<UploadSlot, UploadRequest>,
    full_screen: bool,
}

impl MemorySurface {
    /// Creates the default layout: read-only name field, hidden warning,
    /// "Play" button, content hidden until ready.
    #[must_use]
    pub fn new() -> Self {
        let mut elements = HashMap::with_capacity(8);
        for region in [Region::KillFeed, Region::Notifications, Region::Leaderboard] {
            elements.insert(Element::Region(region), Self::visible(""));
        }

        let mut name_field = Self::visible("");
        name_field.flags.assign(ElementFlags::READ_ONLY, true);
        elements.insert(Element::NameField, name_field);
        elements.insert(Element::NameWarning, ElementState::default());
        elements.insert(Element::PlayButton, Self::visible(crate::PLAY_LABEL));
        elements.insert(Element::Content, ElementState::default());

        Self {
            elements,
            files: HashMap::new(),
            full_screen: false,
        }
    }

    fn visible(text: &str) -> ElementState {
        let mut state = ElementState {
            text: text.to_owned(),
            ..ElementState::default()
        };
        state.flags.assign(ElementFlags::VISIBLE, true);
        state
    }

    fn element(&self, element: Element) -> &ElementState {
        self.elements.get(&element).unwrap_or(&BLANK)
    }

    fn element_mut(&mut self, element: Element) -> &mut ElementState {
        self.elements.entry(element).or_default()
    }

    /// Simulates the player picking (or clearing) a file.
    pub fn select_file(&mut self, slot: UploadSlot, file: Option<UploadRequest>) {
        match file {
            Some(file) => {
                self.files.insert(slot, file);
            }
            None => {
                self.files.remove(&slot);
            }
        }
    }

    /// Returns true if the name field holds focus.
    #[must_use]
    pub fn name_field_focused(&self) -> bool {
        self.element(Element::NameField).flags.has(ElementFlags::FOCUSED)
    }

    /// Returns true if the name field contents are selected.
    #[must_use]
    pub fn name_field_selected(&self) -> bool {
        self.element(Element::NameField).flags.has(ElementFlags::SELECTED)
    }

    /// Color last applied to the name field.
    #[must_use]
    pub fn name_field_color(&self) -> Option<&str> {
        self.element(Element::NameField).color.as_deref()
    }

    /// Returns true once [`DisplaySurface::show_all_content`] was called.
    #[must_use]
    pub fn content_visible(&self) -> bool {
        self.element(Element::Content).flags.has(ElementFlags::VISIBLE)
    }

    /// Returns true while in full-screen mode.
    #[must_use]
    pub const fn is_full_screen(&self) -> bool {
        self.full_screen
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for MemorySurface {
    fn region_markup(&self, region: Region) -> String {
        self.element(Element::Region(region)).text.clone()
    }

    fn set_region_markup(&mut self, region: Region, markup: &str) {
        markup.clone_into(&mut self.element_mut(Element::Region(region)).text);
    }

    fn name_field_value(&self) -> String {
        self.element(Element::NameField).text.clone()
    }

    fn set_name_field_value(&mut self, value: &str) {
        value.clone_into(&mut self.element_mut(Element::NameField).text);
    }

    fn set_name_field_color(&mut self, color: &str) {
        self.element_mut(Element::NameField).color = Some(color.to_owned());
    }

    fn is_name_field_read_only(&self) -> bool {
        self.element(Element::NameField).flags.has(ElementFlags::READ_ONLY)
    }

    fn set_name_field_read_only(&mut self, read_only: bool) {
        self.element_mut(Element::NameField)
            .flags
            .assign(ElementFlags::READ_ONLY, read_only);
    }

    fn focus_name_field(&mut self) {
        let flags = &mut self.element_mut(Element::NameField).flags;
        flags.assign(ElementFlags::FOCUSED, true);
        flags.assign(ElementFlags::SELECTED, true);
    }

    fn blur_active_element(&mut self) {
        for state in self.elements.values_mut() {
            state.flags.assign(ElementFlags::FOCUSED, false);
            state.flags.assign(ElementFlags::SELECTED, false);
        }
    }

    fn is_name_warning_visible(&self) -> bool {
        self.element(Element::NameWarning).flags.has(ElementFlags::VISIBLE)
    }

    fn set_name_warning_visible(&mut self, visible: bool) {
        self.element_mut(Element::NameWarning)
            .flags
            .assign(ElementFlags::VISIBLE, visible);
    }

    fn play_button_label(&self) -> String {
        self.element(Element::PlayButton).text.clone()
    }

    fn set_play_button_label(&mut self, label: &str) {
        label.clone_into(&mut self.element_mut(Element::PlayButton).text);
    }

    fn selected_file(&self, slot: UploadSlot) -> Option<UploadRequest> {
        self.files.get(&slot).cloned()
    }

    fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
    }

    fn show_all_content(&mut self) {
        self.element_mut(Element::Content)
            .flags
            .assign(ElementFlags::VISIBLE, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let surface = MemorySurface::new();
        assert!(surface.is_name_field_read_only());
        assert!(!surface.name_field_focused());
        assert!(!surface.is_name_warning_visible());
        assert_eq!(surface.play_button_label(), crate::PLAY_LABEL);
        assert!(!surface.content_visible());
        assert_eq!(surface.region_markup(Region::KillFeed), "");
    }

    #[test]
    fn test_focus_and_blur() {
        let mut surface = MemorySurface::new();
        surface.focus_name_field();
        assert!(surface.name_field_focused());
        assert!(surface.name_field_selected());

        surface.blur_active_element();
        assert!(!surface.name_field_focused());
        assert!(!surface.name_field_selected());
    }

    #[test]
    fn test_file_selection() {
        let mut surface = MemorySurface::new();
        assert!(surface.selected_file(UploadSlot::Player).is_none());

        surface.select_file(UploadSlot::Player, Some(UploadRequest::new(vec![1, 2, 3], "image/png")));
        assert_eq!(
            surface.selected_file(UploadSlot::Player).map(|f| f.mime_type),
            Some("image/png".to_owned())
        );
        assert!(surface.selected_file(UploadSlot::Background).is_none());

        surface.select_file(UploadSlot::Player, None);
        assert!(surface.selected_file(UploadSlot::Player).is_none());
    }
}
