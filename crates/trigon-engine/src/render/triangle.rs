use crate::render::{RenderCtx, RenderTarget};
use crate::stage::Variant;

const SHADER_SOURCE: &str = include_str!("shaders/triangle.wgsl");

/// Procedural triangle renderer.
///
/// Owns one render pipeline per [`Variant`], compiled lazily from a shared
/// shader module against the current surface format. The vertex stage
/// synthesizes all geometry from the vertex index, so there are no vertex
/// buffers, bind groups, or uniforms to manage.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    plain: Option<wgpu::RenderPipeline>,
    rainbow: Option<wgpu::RenderPipeline>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the triangle with the pipeline selected by `variant`.
    ///
    /// Expects the surface to be cleared already; the pass loads it and
    /// overwrites covered pixels (REPLACE blend, opaque output).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        variant: Variant,
    ) {
        self.ensure_pipelines(ctx);

        let pipeline = match variant {
            Variant::Plain => self.plain.as_ref(),
            Variant::Rainbow => self.rainbow.as_ref(),
        };
        let Some(pipeline) = pipeline else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        // Three procedural vertices, one instance. This draw range is where
        // @builtin(vertex_index) comes from.
        rpass.draw(0..3, 0..1);
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.plain.is_some()
            && self.rainbow.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trigon triangle shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("trigon triangle pipeline layout"),
                // No bind groups: the stages take no uniforms or textures.
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        self.plain = Some(build_pipeline(ctx, &shader, &layout, Variant::Plain));
        self.rainbow = Some(build_pipeline(ctx, &shader, &layout, Variant::Rainbow));
        self.pipeline_format = Some(ctx.surface_format);
    }
}

fn build_pipeline(
    ctx: &RenderCtx<'_>,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    variant: Variant,
) -> wgpu::RenderPipeline {
    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(match variant {
            Variant::Plain => "trigon triangle pipeline (plain)",
            Variant::Rainbow => "trigon triangle pipeline (rainbow)",
        }),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(variant.vertex_entry_point()),
            compilation_options: Default::default(),
            // Geometry is synthesized in the vertex stage; no buffers.
            buffers: &[],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(variant.fragment_entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            // The synthesized winding is CCW; cull the back face.
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_defines_every_advertised_entry_point() {
        for variant in [Variant::Plain, Variant::Rainbow] {
            for entry in [variant.vertex_entry_point(), variant.fragment_entry_point()] {
                assert!(
                    SHADER_SOURCE.contains(&format!("fn {entry}(")),
                    "missing entry point {entry}",
                );
            }
        }
    }

    #[test]
    fn shader_carries_the_interstage_payload() {
        // The stage-linkage contract: one vec2 payload at location 0.
        assert!(SHADER_SOURCE.contains("@location(0) local_coordinate: vec2<f32>"));
    }
}
