//! # Texture — Decoded Images on the GPU
//!
//! The renderer never hands out `wgpu::Texture`s. [`TextureStore::upload`]
//! returns a [`TextureHandle`], a `Copy` index into the store, and the draw
//! list refers to textures only through handles. The store owns the GPU
//! resources for the lifetime of the window.
//!
//! ```text
//! TextureStore.entries
//!   [0] beach.png
//!   [1] fish.png
//!   [2] crab/0.png
//!   ...
//!   [n] glyph atlas
//! ```

use wgpu::util::DeviceExt;

use super::gpu::GpuContext;
use super::pipeline::SpriteRenderer;
use crate::asset::ImageData;

/// Handle to an uploaded texture in the [`TextureStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) usize);

pub(crate) struct TextureEntry {
    pub bind_group: wgpu::BindGroup,
}

/// Which sampler a texture is bound with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Filtering {
    /// Crisp pixel art.
    Nearest,
    /// Smooth glyph edges.
    Linear,
}

pub(crate) struct TextureStore {
    pub entries: Vec<TextureEntry>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, handle: TextureHandle) -> &TextureEntry {
        &self.entries[handle.0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Upload a decoded image.
    pub fn upload_image(
        &mut self,
        gpu: &GpuContext,
        renderer: &SpriteRenderer,
        image: &ImageData,
    ) -> TextureHandle {
        self.upload(
            gpu,
            renderer,
            &image.label,
            image.width,
            image.height,
            &image.rgba,
            Filtering::Nearest,
        )
    }

    /// Upload raw RGBA8 pixels and return a handle.
    pub fn upload(
        &mut self,
        gpu: &GpuContext,
        renderer: &SpriteRenderer,
        label: &str,
        width: u32,
        height: u32,
        data: &[u8],
        filtering: Filtering,
    ) -> TextureHandle {
        let texture = gpu.device.create_texture_with_data(
            &gpu.queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            data,
        );

        let sampler = match filtering {
            Filtering::Nearest => &renderer.sampler,
            Filtering::Linear => &renderer.text_sampler,
        };

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &renderer.texture_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let handle = TextureHandle(self.entries.len());
        self.entries.push(TextureEntry { bind_group });
        log::debug!("Uploaded texture '{label}' ({width}x{height}) as {handle:?}");
        handle
    }
}
