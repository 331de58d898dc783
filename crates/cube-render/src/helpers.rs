use viewport_core::Vertex;
use wgpu::util::DeviceExt;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// 4x is the one multisample count WebGPU guarantees for these formats
pub(crate) const MSAA_SAMPLES: u32 = 4;

fn create_attachment(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: MSAA_SAMPLES,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// Multisampled depth target matching the colour target.
pub(crate) fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    create_attachment(device, "depth_tex", DEPTH_FORMAT, width, height)
}

/// Multisampled colour target, resolved into the swapchain image each frame.
pub(crate) fn create_msaa_texture(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    create_attachment(device, "msaa_color", format, width, height)
}

/// Static vertex data uploaded once, drawn as a whole.
pub(crate) struct GeometryBuffer {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) count: u32,
}

impl GeometryBuffer {
    pub(crate) fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            count: vertices.len() as u32,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.buffer.slice(..));
        rpass.draw(0..self.count, 0..1);
    }
}

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

/// What differs between the face and line pipelines.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PipelineSpec {
    pub label: &'static str,
    pub frag_entry: &'static str,
    pub topology: wgpu::PrimitiveTopology,
    pub depth_write_enabled: bool,
}

// Translucent faces test depth but do not write it, so the edges and grid
// behind them stay visible.
pub(crate) const FACE_PIPELINE: PipelineSpec = PipelineSpec {
    label: "face_pipeline",
    frag_entry: "fs_lit",
    topology: wgpu::PrimitiveTopology::TriangleList,
    depth_write_enabled: false,
};

pub(crate) const LINE_PIPELINE: PipelineSpec = PipelineSpec {
    label: "line_pipeline",
    frag_entry: "fs_flat",
    topology: wgpu::PrimitiveTopology::LineList,
    depth_write_enabled: true,
};

#[inline]
pub(crate) fn multisample_state() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    spec: &PipelineSpec,
) -> wgpu::RenderPipeline {
    let PipelineSpec {
        label,
        frag_entry,
        topology,
        depth_write_enabled,
    } = *spec;
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: multisample_state(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(frag_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipelines_and_attachments_agree_on_sample_count() {
        assert_eq!(multisample_state().count, MSAA_SAMPLES);
        assert_eq!(MSAA_SAMPLES, 4);
        assert_eq!(multisample_state().mask, !0);
        assert!(!multisample_state().alpha_to_coverage_enabled);
    }

    #[test]
    fn faces_keep_depth_read_only_and_lines_write_it() {
        assert!(!FACE_PIPELINE.depth_write_enabled);
        assert!(LINE_PIPELINE.depth_write_enabled);
        assert_eq!(FACE_PIPELINE.topology, wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(LINE_PIPELINE.topology, wgpu::PrimitiveTopology::LineList);
    }

    #[test]
    fn fragment_entries_exist_in_the_scene_shader() {
        for spec in [FACE_PIPELINE, LINE_PIPELINE] {
            let decl = format!("fn {}(", spec.frag_entry);
            assert!(viewport_core::SCENE_WGSL.contains(&decl), "{}", spec.label);
        }
        assert!(viewport_core::SCENE_WGSL.contains("fn vs_main("));
    }
}
