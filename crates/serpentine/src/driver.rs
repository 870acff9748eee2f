//! # View Driver
//!
//! Once per frame:
//!
//! ```text
//! 1. Drain the game event bus, applying each event to the view
//! 2. Pump timer expiries and decoded uploads
//! ```
//!
//! Game events go first so a kill message shown this frame can never be
//! cleared by an expiry that was already queued for its predecessor.

use serpentine_shared::{ClientConfig, GameEvent};
use serpentine_ui::{DisplaySurface, GameHooks, GameView, UiResult};

use crate::events::{self, EventReceiver, EventSender};

/// What one frame applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 1.
    pub frame: u64,
    /// Game events taken off the bus.
    pub game_events: usize,
    /// Timer and decode completions applied.
    pub ui_events: usize,
}

impl FrameStats {
    /// Returns true if the frame applied nothing.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.game_events == 0 && self.ui_events == 0
    }
}

/// Feeds a [`GameView`] from the game event bus.
pub struct ViewDriver<S, H> {
    view: GameView<S, H>,
    events: EventReceiver,
    frame: u64,
}

impl<S: DisplaySurface, H: GameHooks> ViewDriver<S, H> {
    /// Wraps an existing view.
    #[must_use]
    pub fn new(view: GameView<S, H>, events: EventReceiver) -> Self {
        Self {
            view,
            events,
            frame: 0,
        }
    }

    /// Builds a view on the current tokio runtime plus a bus sized by
    /// `config.event_capacity`. The sender goes to the network layer.
    ///
    /// # Errors
    ///
    /// Whatever [`GameView::new`] reports.
    pub fn connect(config: &ClientConfig, surface: S, hooks: H) -> UiResult<(Self, EventSender)> {
        let view = GameView::new(config, surface, hooks)?;
        let (sender, receiver) = events::channel(config.event_capacity);
        Ok((Self::new(view, receiver), sender))
    }

    /// The driven view.
    #[must_use]
    pub fn view(&self) -> &GameView<S, H> {
        &self.view
    }

    /// Mutable access for input forwarding.
    pub fn view_mut(&mut self) -> &mut GameView<S, H> {
        &mut self.view
    }

    /// Frames run so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frame
    }

    /// Runs one frame. Never waits.
    pub fn frame(&mut self) -> FrameStats {
        self.frame += 1;

        let mut game_events = 0;
        for event in self.events.drain() {
            apply(&mut self.view, event);
            game_events += 1;
        }
        let ui_events = self.view.pump();

        let stats = FrameStats {
            frame: self.frame,
            game_events,
            ui_events,
        };
        if !stats.is_idle() {
            tracing::trace!(?stats, "View frame");
        }
        stats
    }
}

/// Maps one game event onto the view.
fn apply<S: DisplaySurface, H: GameHooks>(view: &mut GameView<S, H>, event: GameEvent) {
    match event {
        GameEvent::Killed {
            killer_name,
            killer_color,
            victim_name,
            victim_color,
            victim_length,
        } => view.show_kill_message(
            &killer_name,
            &victim_name,
            killer_color.as_deref(),
            victim_color.as_deref(),
            victim_length,
        ),
        GameEvent::KilledEachOther { victims } => view.show_killed_each_other_message(&victims),
        GameEvent::RanIntoWall {
            player_name,
            player_color,
        } => view.show_ran_into_wall_message(&player_name, player_color.as_deref()),
        GameEvent::Suicide {
            victim_name,
            victim_color,
        } => view.show_suicide_message(&victim_name, victim_color.as_deref()),
        GameEvent::Notification { text, color } => view.show_notification(&text, color.as_deref()),
        GameEvent::PlayerStats { entries } => view.show_player_stats(&entries),
        GameEvent::PlayerNameChanged { name, color } => {
            view.update_player_name(&name, color.as_deref());
        }
        GameEvent::Ready => view.ready(),
    }
}
