//! Upload the pixel buffer and stretch it over the window.

use std::borrow::Cow;

use glamour::Size2;

use super::{gpu::Frame, Letterbox};

/// Texture holding the pixel buffer with the pipeline drawing it to the surface.
pub(crate) struct BlitState {
    /// Texture the pixel buffer is copied into every frame.
    texture: wgpu::Texture,
    /// Size of the texture in pixels.
    size: Size2<u32>,
    bind_group: wgpu::BindGroup,
    render_pipeline: wgpu::RenderPipeline,
}

impl BlitState {
    /// Create the texture and the pipeline.
    ///
    /// The texture has the same color space as the surface so the bytes of the buffer end up unchanged on the screen.
    pub(crate) fn new(
        buffer_size: Size2<u32>,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let texture_format = super::buffer_texture_format(surface_format);

        // Create the texture the CPU pixels are written to
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Pixel Buffer Texture"),
            size: wgpu::Extent3d {
                width: buffer_size.width,
                height: buffer_size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: texture_format,
            usage: wgpu::TextureUsages::COPY_DST | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Pixel Buffer Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Nearest neighbor keeps the cells crisp when scaling
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Pixel Buffer Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Pixel Buffer Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Blit Render Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        // Load the shaders
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!(
                "../../shaders/blit.wgsl"
            ))),
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blit Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                buffers: &[],
                module: &shader,
                entry_point: "vs_main",
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            texture,
            size: buffer_size,
            bind_group,
            render_pipeline,
        }
    }

    /// Copy the pixels into the texture.
    ///
    /// Every pixel is four bytes in `RGBA` order.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, pixels: &[u32]) {
        profiling::scope!("Upload pixel buffer");

        debug_assert_eq!(
            pixels.len(),
            (self.size.width * self.size.height) as usize,
            "Pixel buffer size doesn't match the texture"
        );

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(pixels),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.size.width * 4),
                rows_per_image: Some(self.size.height),
            },
            wgpu::Extent3d {
                width: self.size.width,
                height: self.size.height,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Draw the texture on the surface of the frame inside the letterbox.
    pub(crate) fn render(
        &self,
        frame: &mut Frame,
        letterbox: Letterbox,
        viewport_color: wgpu::Color,
    ) {
        // Start the render pass, clearing everything outside of the letterbox
        let mut render_pass = frame
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blit Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(viewport_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

        render_pass.set_pipeline(&self.render_pipeline);

        // Only draw in the calculated letterbox
        render_pass.set_viewport(
            letterbox.x,
            letterbox.y,
            letterbox.width,
            letterbox.height,
            0.0,
            1.0,
        );

        // Bind the source texture
        render_pass.set_bind_group(0, &self.bind_group, &[]);

        // Draw the full screen triangle defined in the vertex shader
        render_pass.draw(0..3, 0..1);
    }
}
