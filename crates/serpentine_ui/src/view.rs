//! # Game View
//!
//! Facade owning every piece of view state. Hosts feed it input and game
//! events, then call [`GameView::pump`] once per frame to apply timer and
//! decode completions.

use serpentine_shared::{ClientConfig, PlayerStatEntry, VictimSummary};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::{UiError, UiResult};
use crate::event::{self, UiEvent};
use crate::hooks::GameHooks;
use crate::input::{Control, KeyEvent};
use crate::leaderboard::render_player_stats;
use crate::markup::sanitize_color;
use crate::media::{self, MediaIngestor};
use crate::messages::KillFeed;
use crate::name_edit::Mode;
use crate::notifications::NotificationLog;
use crate::router::{InputRouter, KeyDisposition};
use crate::surface::{DisplaySurface, Region, UploadSlot};
use crate::timer::ExpiryTimer;

/// The input & transient-display coordinator.
pub struct GameView<S, H> {
    surface: S,
    hooks: H,
    router: InputRouter,
    kill_feed: KillFeed,
    notifications: NotificationLog,
    media: MediaIngestor,
    events: UnboundedReceiver<UiEvent>,
}

impl<S: DisplaySurface, H: GameHooks> GameView<S, H> {
    /// Creates a view on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// [`UiError::NoRuntime`] outside a runtime, [`UiError::Config`] for an
    /// invalid configuration.
    pub fn new(config: &ClientConfig, surface: S, hooks: H) -> UiResult<Self> {
        let runtime = Handle::try_current().map_err(|_| UiError::NoRuntime)?;
        Self::with_runtime(config, surface, hooks, runtime)
    }

    /// Creates a view spawning its timers and decodes onto `runtime`.
    ///
    /// # Errors
    ///
    /// [`UiError::Config`] for an invalid configuration.
    pub fn with_runtime(config: &ClientConfig, surface: S, hooks: H, runtime: Handle) -> UiResult<Self> {
        config.validate()?;
        let (sender, events) = event::channel();

        Ok(Self {
            surface,
            hooks,
            router: InputRouter::new(config.max_name_length),
            kill_feed: KillFeed::new(
                config.kill_message_duration(),
                ExpiryTimer::new(runtime.clone(), sender.clone()),
            ),
            notifications: NotificationLog::new(config.max_notifications),
            media: MediaIngestor::new(runtime, sender),
            events,
        })
    }

    /// Reveals the interface.
    pub fn ready(&mut self) {
        tracing::info!("View ready");
        self.surface.show_all_content();
    }

    /// Current input mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.router.mode()
    }

    /// The display surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the display surface, for host-side changes such
    /// as typing into the name field or picking files.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The injected hooks.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The kill feed scheduler.
    #[must_use]
    pub fn kill_feed(&self) -> &KillFeed {
        &self.kill_feed
    }

    // =========================================================================
    // Transient display
    // =========================================================================

    /// Shows arbitrary kill-feed markup for the configured window.
    pub fn show_timed_message(&mut self, text: impl Into<String>) {
        self.kill_feed.show_timed_message(&mut self.surface, text);
    }

    /// Empties the kill feed now.
    pub fn clear_message(&mut self) {
        self.kill_feed.clear_message(&mut self.surface);
    }

    /// "killer killed victim and grew by N".
    pub fn show_kill_message(
        &mut self,
        killer_name: &str,
        victim_name: &str,
        killer_color: Option<&str>,
        victim_color: Option<&str>,
        victim_length: u32,
    ) {
        self.kill_feed.show_kill(
            &mut self.surface,
            (killer_name, killer_color),
            (victim_name, victim_color),
            victim_length,
        );
    }

    /// "A B have killed each other".
    pub fn show_killed_each_other_message(&mut self, victims: &[VictimSummary]) {
        self.kill_feed.show_killed_each_other(&mut self.surface, victims);
    }

    /// "player ran into a wall".
    pub fn show_ran_into_wall_message(&mut self, player_name: &str, player_color: Option<&str>) {
        self.kill_feed
            .show_ran_into_wall(&mut self.surface, player_name, player_color);
    }

    /// "player committed suicide".
    pub fn show_suicide_message(&mut self, victim_name: &str, victim_color: Option<&str>) {
        self.kill_feed
            .show_suicide(&mut self.surface, victim_name, victim_color);
    }

    /// Prepends a timestamped notification.
    pub fn show_notification(&mut self, text: &str, player_color: Option<&str>) {
        self.notifications.show(&mut self.surface, text, player_color);
    }

    /// Redraws the leaderboard.
    pub fn show_player_stats(&mut self, entries: &[PlayerStatEntry]) {
        self.surface
            .set_region_markup(Region::Leaderboard, &render_player_stats(entries));
    }

    /// Shows the name the server knows us by. Leaves the mode alone.
    pub fn update_player_name(&mut self, name: &str, color: Option<&str>) {
        self.surface.set_name_field_value(name);
        if let Some(color) = color.and_then(sanitize_color) {
            self.surface.set_name_field_color(color);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// A physical key was pressed.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyDisposition {
        self.router.handle_key(event, &mut self.surface, &mut self.hooks)
    }

    /// An on-screen control was pressed.
    pub fn activate(&mut self, control: Control) {
        self.router.activate(control, &mut self.surface, &mut self.hooks);
    }

    /// The name field lost focus.
    pub fn on_name_blur(&mut self) {
        self.router.on_name_blur(&mut self.surface, &mut self.hooks);
    }

    /// The selection of an upload input changed.
    ///
    /// Returns true if a decode was started.
    pub fn on_file_selected(&mut self, slot: UploadSlot) -> bool {
        let file = self.surface.selected_file(slot);
        self.media.ingest(slot, file)
    }

    // =========================================================================
    // Completions
    // =========================================================================

    /// Applies one completion.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::MessageExpired(token) => {
                self.kill_feed.expire(&mut self.surface, token);
            }
            UiEvent::ImageDecoded {
                slot,
                image,
                mime_type,
            } => media::deliver(&mut self.hooks, slot, image, &mime_type),
        }
    }

    /// Applies every completion queued so far. Never waits.
    ///
    /// Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completion without applying it.
    pub async fn next_event(&mut self) -> Option<UiEvent> {
        self.events.recv().await
    }
}
