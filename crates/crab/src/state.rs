//! The simulation: crab movement, animation, fish collection, score.
//!
//! [`GameState`] holds everything that changes while playing. [`GameState::update`]
//! advances it by exactly one fixed tick:
//!
//! 1. Quit requested (edge-triggered)? Stop here and report [`TickOutcome::Quit`].
//! 2. Advance the walk animation.
//! 3. Move the crab for every held direction, clamping each axis to the sand.
//! 4. If the crab's box overlaps the fish's box, count it and respawn the fish.
//!
//! Randomness comes from the caller so tests can replay a game exactly.

use rand::Rng;

use crate::animation::FrameCycle;
use crate::config::GameConfig;
use crate::error::CrabError;
use crate::input::{Action, InputSource};
use crate::math::{IVec2, PixelRect};

/// Pixel size shared by every crab frame and the fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: i32,
    pub height: i32,
}

impl SpriteSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// The area a sprite's top-left corner may occupy, derived from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    /// Inclusive range for the crab's top-left corner.
    pub crab_min: IVec2,
    pub crab_max: IVec2,
    /// Half-open range for a spawned fish's top-left corner.
    pub spawn: PixelRect,
}

impl Playfield {
    /// Fails if a sprite cannot fit on the sand at all.
    pub fn new(config: &GameConfig, sprite: SpriteSize) -> Result<Self, String> {
        let max_x = config.screen_width - sprite.width;
        let max_y = config.walkable_max_y - sprite.height;
        if sprite.width <= 0 || sprite.height <= 0 {
            return Err(format!("sprite size must be positive, got {}x{}", sprite.width, sprite.height));
        }
        // The fish range is half-open, so it needs at least one free pixel per axis.
        if max_x <= 0 || max_y <= config.walkable_min_y {
            return Err(format!(
                "{}x{} sprite does not fit on a {}-wide canvas with sand band [{}, {})",
                sprite.width,
                sprite.height,
                config.screen_width,
                config.walkable_min_y,
                config.walkable_max_y
            ));
        }
        Ok(Self {
            crab_min: IVec2::new(0, config.walkable_min_y),
            crab_max: IVec2::new(max_x, max_y),
            spawn: PixelRect {
                min: IVec2::new(0, config.walkable_min_y),
                max: IVec2::new(max_x, max_y),
            },
        })
    }

    /// Clamp a crab position onto the sand.
    pub fn clamp_crab(&self, pos: IVec2) -> IVec2 {
        pos.clamp(self.crab_min, self.crab_max)
    }

    /// A uniformly random fish position on the sand.
    ///
    /// The crab's position is deliberately not excluded: a fish may spawn
    /// under the crab and be collected on the very next tick.
    pub fn random_fish<R: Rng>(&self, rng: &mut R) -> IVec2 {
        IVec2::new(
            rng.random_range(self.spawn.min.x..self.spawn.max.x),
            rng.random_range(self.spawn.min.y..self.spawn.max.y),
        )
    }
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The player asked to quit. Stop ticking and end the session.
    Quit,
}

/// All mutable game data. Sprites are not stored here, only their size.
#[derive(Debug, Clone)]
pub struct GameState {
    crab: IVec2,
    fish: IVec2,
    score: u32,
    animation: FrameCycle,
    sprite: SpriteSize,
    playfield: Playfield,
    step: i32,
}

impl GameState {
    /// Fresh state: crab at the configured start, a fish somewhere on the sand.
    pub fn new<R: Rng>(
        config: &GameConfig,
        sprite: SpriteSize,
        frame_count: usize,
        rng: &mut R,
    ) -> Result<Self, CrabError> {
        let playfield = Playfield::new(config, sprite)
            .map_err(|reason| CrabError::asset(&config.assets_dir, reason))?;
        let animation = FrameCycle::new(frame_count, config.ticks_per_second)?;
        let crab = playfield.clamp_crab(config.crab_start);
        if crab != config.crab_start {
            log::warn!(
                "Crab start {:?} is off the sand, using {:?}",
                config.crab_start,
                crab
            );
        }
        let fish = playfield.random_fish(rng);

        Ok(Self {
            crab,
            fish,
            score: 0,
            animation,
            sprite,
            playfield,
            step: config.crab_step,
        })
    }

    /// Advance the game by one tick.
    pub fn update<I, R>(&mut self, input: &I, rng: &mut R) -> TickOutcome
    where
        I: InputSource + ?Sized,
        R: Rng,
    {
        if input.just_pressed(Action::Quit) {
            return TickOutcome::Quit;
        }

        self.animation.advance();
        self.move_crab(input);

        if self.crab_rect().overlaps(&self.fish_rect()) {
            self.score += 1;
            self.fish = self.playfield.random_fish(rng);
            log::debug!("Fish collected, score {}, next fish at {:?}", self.score, self.fish);
        }

        TickOutcome::Continue
    }

    fn move_crab<I: InputSource + ?Sized>(&mut self, input: &I) {
        let min = self.playfield.crab_min;
        let max = self.playfield.crab_max;
        if input.held(Action::MoveLeft) {
            self.crab.x = self.crab.x.saturating_sub(self.step).max(min.x);
        }
        if input.held(Action::MoveRight) {
            self.crab.x = self.crab.x.saturating_add(self.step).min(max.x);
        }
        if input.held(Action::MoveUp) {
            self.crab.y = self.crab.y.saturating_sub(self.step).max(min.y);
        }
        if input.held(Action::MoveDown) {
            self.crab.y = self.crab.y.saturating_add(self.step).min(max.y);
        }
    }

    /// Top-left of the crab.
    pub fn crab(&self) -> IVec2 {
        self.crab
    }

    /// Top-left of the current fish.
    pub fn fish(&self) -> IVec2 {
        self.fish
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Index of the crab frame to draw.
    pub fn crab_frame(&self) -> usize {
        self.animation.frame()
    }

    pub fn tick_in_second(&self) -> u32 {
        self.animation.tick_in_second()
    }

    pub fn sprite_size(&self) -> SpriteSize {
        self.sprite
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn crab_rect(&self) -> PixelRect {
        PixelRect::from_pos_size(self.crab, self.sprite.as_ivec2())
    }

    pub fn fish_rect(&self) -> PixelRect {
        PixelRect::from_pos_size(self.fish, self.sprite.as_ivec2())
    }

    /// Place the crab, clamped onto the sand.
    pub fn set_crab(&mut self, pos: IVec2) {
        self.crab = self.playfield.clamp_crab(pos);
    }

    /// Place the fish anywhere; used to stage scenarios.
    pub(crate) fn set_fish(&mut self, pos: IVec2) {
        self.fish = pos;
    }
}
