//! # Crab — Walk the Beach, Collect Fish
//!
//! A small arcade game. The player steers a crab across a band of sand with
//! the arrow keys; touching the fish scores a point and the fish reappears
//! somewhere else. Escape quits.
//!
//! The simulation ([`state`], [`session`]) is plain data driven by fixed
//! ticks and knows nothing about windows or GPUs. The `render2d` feature adds
//! the winit/wgpu host that feeds it keyboard input and draws it.
//!
//! Start with `use crab::prelude::*` and build a [`Game`](game::Game).

pub mod animation;
pub mod asset;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod prelude;
pub mod session;
pub mod state;
pub mod time;

#[cfg(feature = "render2d")]
pub mod game;
#[cfg(feature = "render2d")]
pub mod render;
#[cfg(feature = "render2d")]
pub(crate) mod window;
