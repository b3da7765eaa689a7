//! # Animation — Time-Driven Sprite Frame Cycling
//!
//! The crab walks in place: its frames cycle once per second no matter
//! whether it is moving. With `N` frames and `T` ticks per second each frame
//! is shown for `T / N` ticks (integer division):
//!
//! ```text
//!  tick in second:  0 ......... 14 | 15 ........ 29 | 30 ... 44 | 45 ... 59
//!  frame (N = 4):          0       |        1       |     2     |     3
//! ```
//!
//! When `T` is not a multiple of `N` the remainder ticks would produce an
//! index of `N`; those are folded onto the last frame, so it is held a little
//! longer than the others.

use crate::error::CrabError;

/// Counts ticks within the current second and maps them to a frame index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCycle {
    frame_count: usize,
    ticks_per_second: u32,
    ticks_per_frame: u32,
    tick_in_second: u32,
    frame: usize,
}

impl FrameCycle {
    /// Create a cycle over `frame_count` frames.
    ///
    /// Fails if there are no frames, or more frames than ticks in a second
    /// (some frames could never be shown).
    pub fn new(frame_count: usize, ticks_per_second: u32) -> Result<Self, CrabError> {
        if frame_count == 0 {
            return Err(CrabError::Animation("at least one frame is required".into()));
        }
        if ticks_per_second == 0 {
            return Err(CrabError::Animation("ticks_per_second must be positive".into()));
        }
        let ticks_per_frame = ticks_per_second / frame_count as u32;
        if frame_count > u32::MAX as usize || ticks_per_frame == 0 {
            return Err(CrabError::Animation(format!(
                "{frame_count} frames cannot fit in {ticks_per_second} ticks per second"
            )));
        }
        Ok(Self {
            frame_count,
            ticks_per_second,
            ticks_per_frame,
            tick_in_second: 0,
            frame: 0,
        })
    }

    /// Advance one tick and return the frame to show.
    pub fn advance(&mut self) -> usize {
        self.tick_in_second = (self.tick_in_second + 1) % self.ticks_per_second;
        let index = (self.tick_in_second / self.ticks_per_frame) as usize;
        self.frame = index.min(self.frame_count - 1);
        self.frame
    }

    /// Current frame index, in `0..frame_count`.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Tick within the current second, in `0..ticks_per_second`.
    pub fn tick_in_second(&self) -> u32 {
        self.tick_in_second
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn ticks_per_frame(&self) -> u32 {
        self.ticks_per_frame
    }
}
