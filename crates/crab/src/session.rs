//! A play session: the game state, its random source, and whether it is
//! still running.
//!
//! ```text
//!   ┌─────────┐  quit pressed  ┌────────────┐
//!   │ Running │ ─────────────► │ Terminated │
//!   └─────────┘                └────────────┘
//! ```
//!
//! There is no pause and no way back. Once terminated, further ticks are
//! ignored so a host that overshoots by a frame cannot mutate the final state.
//!
//! [`run_due_ticks`] is the per-frame driver the window calls: it turns real
//! time into fixed ticks and feeds them the bound keyboard state.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::CrabError;
use crate::input::{BoundInput, Input, InputSource, KeyBindings, KeyCode};
use crate::state::{GameState, SpriteSize, TickOutcome};
use crate::time::FixedTimestep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Terminated,
}

pub struct Session<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    status: SessionStatus,
    ticks: u64,
}

impl Session<StdRng> {
    /// A session whose fish spawns are fully determined by `seed`.
    pub fn seeded(
        config: &GameConfig,
        sprite: SpriteSize,
        frame_count: usize,
        seed: u64,
    ) -> Result<Self, CrabError> {
        Self::with_rng(config, sprite, frame_count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(
        config: &GameConfig,
        sprite: SpriteSize,
        frame_count: usize,
        mut rng: R,
    ) -> Result<Self, CrabError> {
        let state = GameState::new(config, sprite, frame_count, &mut rng)?;
        Ok(Self {
            state,
            rng,
            status: SessionStatus::Running,
            ticks: 0,
        })
    }

    /// Run one tick if the session is still running.
    pub fn tick<I: InputSource + ?Sized>(&mut self, input: &I) -> SessionStatus {
        if self.status == SessionStatus::Terminated {
            return self.status;
        }

        self.ticks += 1;
        if self.state.update(input, &mut self.rng) == TickOutcome::Quit {
            log::info!(
                "Quit requested after {} ticks, final score {}",
                self.ticks,
                self.state.score()
            );
            self.status = SessionStatus::Terminated;
        }
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for staging scenarios.
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Ticks processed while running, including the one that quit.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Run every tick that `delta` makes due, feeding each the bound keys.
///
/// Key edges belong to the first tick that sees them: `clear_just` runs only
/// after a tick has actually executed. On a frame with no due tick the edges
/// are kept, so a quick Escape tap between ticks is not lost.
pub fn run_due_ticks<R: Rng>(
    timestep: &mut FixedTimestep,
    session: &mut Session<R>,
    keys: &mut Input<KeyCode>,
    bindings: &KeyBindings,
    delta: Duration,
) -> SessionStatus {
    let due = timestep.advance(delta);
    for _ in 0..due {
        let status = session.tick(&BoundInput {
            keys: &*keys,
            bindings,
        });
        keys.clear_just();
        if status == SessionStatus::Terminated {
            break;
        }
    }
    session.status()
}
