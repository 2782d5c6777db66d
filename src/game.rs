//! Frame driver
//!
//! Owns the game state and the latest input, and runs one render + tick per
//! host frame. The host decides when frames happen; `Game` only reports
//! whether another one should be scheduled.

use crate::platform::InputState;
use crate::renderer::{Surface, render_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, autopilot_input, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Loop not running; nothing was drawn or simulated
    Idle,
    /// Schedule the next frame
    Continue,
    /// Run ended with this event (`Won` or `Lost`); do not schedule again
    Halted(GameEvent),
}

/// Game instance holding all state
pub struct Game {
    settings: Settings,
    state: GameState,
    pub input: InputState,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(&settings);
        Self {
            settings,
            state,
            input: InputState::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and tests that set up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    /// Begin play. Only the first call has an effect; returns whether this
    /// call started the loop.
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::Ready {
            log::debug!("Start ignored, phase is {:?}", self.state.phase);
            return false;
        }
        self.state.phase = GamePhase::Playing;
        log::info!(
            "Game started: {} bricks, {} lives",
            self.state.bricks.len(),
            self.state.lives
        );
        true
    }

    /// Render the current state, then advance it by one tick
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Idle;
        }

        render_scene(&self.state, &self.settings, surface);

        let input = if self.input.idle_mode {
            autopilot_input(&self.state)
        } else {
            self.input.snapshot()
        };
        let events = tick(&mut self.state, &input, &self.settings);

        // Clear one-shot inputs after processing
        self.input.clear_one_shot();

        match events.into_iter().find(GameEvent::is_terminal) {
            Some(event) => FrameOutcome::Halted(event),
            None => FrameOutcome::Continue,
        }
    }

    /// Reinitialize everything to startup values; the loop must be started again
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.settings);
        self.input.reset();
        log::info!("Game reset");
    }

    /// Reset after a finished run, starting straight away when `auto_start`
    /// is set. Returns whether the loop is running again.
    pub fn restart_for_next_run(&mut self, auto_start: bool) -> bool {
        self.restart();
        auto_start && self.start()
    }
}
