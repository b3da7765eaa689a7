//! # Draw — The Per-Frame Orchestrator
//!
//! [`Renderer`] owns every GPU resource and is the only entry point the
//! window uses. It is built once after the window exists and then called
//! once per redraw.
//!
//! ```text
//! Renderer::new(window, assets, config)
//!   ├─ GpuContext::new         surface, device, queue
//!   ├─ SpriteRenderer::new     pipeline, camera buffer, samplers
//!   ├─ upload beach, fish, crab frames
//!   └─ GlyphAtlas::build + upload
//!
//! Renderer::render(state)
//!   ├─ DrawList::from_state    background, crab, fish, score
//!   ├─ build_geometry          quads + same-texture batches
//!   ├─ write camera uniform    canvas projection
//!   ├─ render pass             clear, letterbox viewport, draw batches
//!   └─ submit + present
//! ```
//!
//! ## Surface Errors
//!
//! [`Renderer::render`] returns `wgpu::SurfaceError` untouched. The window
//! decides what to do: reconfigure on `Lost`/`Outdated`, exit on
//! `OutOfMemory`, skip the frame otherwise.

use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::window::Window;

use super::Color;
use super::batch::build_geometry;
use super::font::{GlyphAtlas, GlyphTable};
use super::gpu::GpuContext;
use super::pipeline::SpriteRenderer;
use super::scene::{DrawList, SceneTextures, SizedTexture};
use super::texture::{Filtering, TextureStore};
use super::vertex::CameraUniform;
use super::viewport::{canvas_projection, fit_canvas};
use crate::asset::{ImageData, SpriteAssets};
use crate::config::GameConfig;
use crate::error::CrabError;
use crate::state::GameState;

/// Color of the bars around a letterboxed canvas.
const CLEAR_COLOR: Color = Color::rgb(0.05, 0.05, 0.08);

pub struct Renderer {
    gpu: GpuContext,
    sprites: SpriteRenderer,
    textures: TextureStore,
    scene: SceneTextures,
    glyphs: GlyphTable,
    config: GameConfig,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        assets: &SpriteAssets,
        config: &GameConfig,
    ) -> Result<Self, CrabError> {
        let gpu = GpuContext::new(window)?;
        let sprites = SpriteRenderer::new(&gpu);
        let mut textures = TextureStore::new();

        let mut upload = |image: &ImageData| SizedTexture {
            handle: textures.upload_image(&gpu, &sprites, image),
            width: image.width,
            height: image.height,
        };
        let background = upload(&assets.background);
        let fish = upload(&assets.fish);
        let crab_frames = assets.crab_frames.iter().map(&mut upload).collect();

        let atlas = GlyphAtlas::build(&assets.font, config.score_font_size, &assets.font_path)?;
        let glyph_atlas = textures.upload(
            &gpu,
            &sprites,
            "glyph atlas",
            atlas.width,
            atlas.height,
            &atlas.rgba,
            Filtering::Linear,
        );
        log::info!("Renderer ready with {} textures", textures.len());

        Ok(Self {
            gpu,
            sprites,
            textures,
            scene: SceneTextures {
                background,
                fish,
                crab_frames,
                glyph_atlas,
            },
            glyphs: atlas.table,
            config: config.clone(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Reconfigure the surface at its current size, after `Lost`/`Outdated`.
    pub fn reconfigure(&mut self) {
        let (width, height) = self.gpu.surface_size();
        self.gpu.resize(width, height);
    }

    /// Draw one frame of `state`.
    pub fn render(&mut self, state: &GameState) -> Result<(), wgpu::SurfaceError> {
        let list = DrawList::from_state(state, &self.scene, &self.config);
        let geometry = build_geometry(&list, &self.glyphs);

        let canvas = self.config.screen_size().as_vec2();
        let camera = CameraUniform {
            view_proj: canvas_projection(canvas).to_cols_array_2d(),
        };
        self.gpu
            .queue
            .write_buffer(&self.sprites.camera_buffer, 0, bytemuck::cast_slice(&[camera]));

        let frame = self.gpu.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        let buffers = (!geometry.vertices.is_empty()).then(|| {
            let vertex_buffer = self
                .gpu
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite vertex buffer"),
                    contents: bytemuck::cast_slice(&geometry.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let index_buffer = self
                .gpu
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite index buffer"),
                    contents: bytemuck::cast_slice(&geometry.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
            (vertex_buffer, index_buffer)
        });

        {
            let [r, g, b, a] = CLEAR_COLOR.to_array().map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprite render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some((vertex_buffer, index_buffer)) = &buffers {
                let viewport = fit_canvas(self.gpu.surface_size(), canvas);
                pass.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height, 0.0, 1.0);
                pass.set_pipeline(&self.sprites.pipeline);
                pass.set_bind_group(0, &self.sprites.camera_bind_group, &[]);
                pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);

                for batch in &geometry.batches {
                    let entry = self.textures.get(batch.texture);
                    pass.set_bind_group(1, &entry.bind_group, &[]);
                    pass.draw_indexed(
                        batch.index_start..(batch.index_start + batch.index_count),
                        0,
                        0..1,
                    );
                }
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
