//! Window management via winit.
//!
//! Implements [`winit::application::ApplicationHandler`] to drive the event
//! loop. This handles window creation, keyboard forwarding, resize, and the
//! main loop: fixed simulation ticks followed by one render per redraw.
//!
//! Startup failures inside the event loop (window, GPU, glyph atlas) cannot
//! be returned from a callback, so they are parked in [`CrabApp::error`] and
//! the loop exits. [`Game::run`](crate::game::Game::run) picks them up.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::asset::SpriteAssets;
use crate::config::GameConfig;
use crate::error::CrabError;
use crate::input::{Input, KeyBindings, KeyCode};
use crate::render::Renderer;
use crate::session::{Session, SessionStatus, run_due_ticks};
use crate::time::{FixedTimestep, Time};

/// The application state that winit drives.
pub(crate) struct CrabApp {
    pub config: GameConfig,
    pub title: String,
    pub assets: SpriteAssets,
    pub session: Session,
    pub bindings: KeyBindings,
    pub keys: Input<KeyCode>,
    pub time: Time,
    pub timestep: FixedTimestep,
    pub window: Option<Arc<Window>>,
    pub renderer: Option<Renderer>,
    pub error: Option<CrabError>,
}

impl CrabApp {
    pub fn new(
        config: GameConfig,
        title: String,
        assets: SpriteAssets,
        session: Session,
        bindings: KeyBindings,
    ) -> Self {
        let timestep = FixedTimestep::new(config.ticks_per_second, config.max_ticks_per_frame);
        Self {
            config,
            title,
            assets,
            session,
            bindings,
            keys: Input::new(),
            time: Time::new(),
            timestep,
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), CrabError> {
        let size = self.config.screen_size();
        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(size.x as f64, size.y as f64));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| CrabError::Window(e.to_string()))?,
        );

        let renderer = Renderer::new(window.clone(), &self.assets, &self.config)?;
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.time.update();

        let status = run_due_ticks(
            &mut self.timestep,
            &mut self.session,
            &mut self.keys,
            &self.bindings,
            self.time.delta(),
        );
        if status == SessionStatus::Terminated {
            log::info!(
                "Session over after {} ticks ({} frames), score {}",
                self.session.ticks(),
                self.time.frame_count(),
                self.session.state().score()
            );
            event_loop.exit();
            return;
        }

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        match renderer.render(self.session.state()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory!");
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for CrabApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.error.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        // Don't count window and GPU setup as simulation time.
        self.time.update();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.keys.press(key_code),
                        ElementState::Released => self.keys.release(key_code),
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
