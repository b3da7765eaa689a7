//! Game builder.
//!
//! [`Game`] is the entry point for the binary. Configure it, then call
//! [`run`](Game::run) to load assets and start the event loop.
//!
//! # Example
//!
//! ```ignore
//! use crab::prelude::*;
//!
//! fn main() -> Result<(), CrabError> {
//!     Game::new(GameConfig::from_env()?)
//!         .seed(42)
//!         .run()
//! }
//! ```

use crate::asset::SpriteAssets;
use crate::config::GameConfig;
use crate::error::CrabError;
use crate::input::KeyBindings;
use crate::session::Session;
use crate::window::CrabApp;

pub const DEFAULT_TITLE: &str = "Crab Catch";

pub struct Game {
    config: GameConfig,
    title: String,
    seed: Option<u64>,
    bindings: KeyBindings,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            title: DEFAULT_TITLE.to_string(),
            seed: None,
            bindings: KeyBindings::default(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Fix the fish spawn sequence. Without a seed every run differs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Load assets, open the window, and play until quit or close.
    pub fn run(self) -> Result<(), CrabError> {
        let assets = SpriteAssets::load(&self.config.assets_dir)?;
        let sprite = assets.sprite_size()?;

        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("Starting session with seed {seed}");
        let session = Session::seeded(&self.config, sprite, assets.frame_count(), seed)?;

        let event_loop = winit::event_loop::EventLoop::new()
            .map_err(|e| CrabError::Window(format!("cannot create event loop: {e}")))?;

        let mut app = CrabApp::new(self.config, self.title, assets, session, self.bindings);
        event_loop
            .run_app(&mut app)
            .map_err(|e| CrabError::Window(format!("event loop error: {e}")))?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
