use glam::{Mat4, Vec3};
use viewport_core::{
    cube_edges, cube_faces, helper_lines, MeshTransform, PerspectiveCamera, RenderSurface,
    AMBIENT_LIGHT, CLEAR_COLOR, DIRECTIONAL_INTENSITY, LIGHT_POSITION,
};

mod helpers;
use helpers::GeometryBuffer;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    light_dir: [f32; 4],
    ambient: [f32; 4],
}

impl SceneUniforms {
    fn new(view_proj: Mat4, model: Mat4) -> Self {
        let l = Vec3::from(LIGHT_POSITION).normalize();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            light_dir: [l.x, l.y, l.z, DIRECTIONAL_INTENSITY],
            ambient: [AMBIENT_LIGHT, AMBIENT_LIGHT, AMBIENT_LIGHT, 1.0],
        }
    }
}

/// Pixel size of the backing surface for a logical size at `pixel_ratio`.
#[inline]
pub fn physical_size(width: u32, height: u32, pixel_ratio: f64) -> (u32, u32) {
    let scale = |v: u32| ((v as f64 * pixel_ratio).round() as u32).max(1);
    (scale(width), scale(height))
}

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    // 4x colour target resolved into the swapchain image
    _msaa_tex: wgpu::Texture,
    msaa_view: wgpu::TextureView,

    face_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    // Identity model (grid/axes) and cube model, one uniform buffer each
    scene_uniforms: wgpu::Buffer,
    mesh_uniforms: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    mesh_bind_group: wgpu::BindGroup,

    cube_faces: GeometryBuffer,
    cube_edges: GeometryBuffer,
    helpers: GeometryBuffer,

    // Logical (device independent) size as last set
    width: u32,
    height: u32,
    pixel_ratio: f64,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
        pixel_ratio: f64,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let (px_w, px_h) = physical_size(width.max(1), height.max(1), pixel_ratio);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: px_w,
            height: px_h,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, px_w, px_h);
        let (_msaa_tex, msaa_view) = helpers::create_msaa_texture(&device, format, px_w, px_h);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(viewport_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let face_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            &helpers::FACE_PIPELINE,
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            &helpers::LINE_PIPELINE,
        );

        let make_uniforms = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<SceneUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let scene_uniforms = make_uniforms("scene_uniforms");
        let mesh_uniforms = make_uniforms("mesh_uniforms");
        let make_bind_group = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let scene_bind_group = make_bind_group("scene_bg", &scene_uniforms);
        let mesh_bind_group = make_bind_group("mesh_bg", &mesh_uniforms);

        let cube_faces = GeometryBuffer::new(&device, "cube_faces", &cube_faces(1.0));
        let cube_edges = GeometryBuffer::new(&device, "cube_edges", &cube_edges(1.0));
        let helpers = GeometryBuffer::new(&device, "helpers", &helper_lines());

        log::info!(
            "[render] surface {}x{} ({}x{} px) format={:?}",
            width,
            height,
            px_w,
            px_h,
            format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex,
            depth_view,
            _msaa_tex,
            msaa_view,
            face_pipeline,
            line_pipeline,
            scene_uniforms,
            mesh_uniforms,
            scene_bind_group,
            mesh_bind_group,
            cube_faces,
            cube_edges,
            helpers,
            width,
            height,
            pixel_ratio,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn physical_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        if pixel_ratio > 0.0 && pixel_ratio != self.pixel_ratio {
            self.pixel_ratio = pixel_ratio;
            self.resize_if_needed(self.width, self.height);
        }
    }

    /// Reconfigure with the current size after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        let (px_w, px_h) = physical_size(width, height, self.pixel_ratio);
        if px_w != self.config.width || px_h != self.config.height {
            self.config.width = px_w;
            self.config.height = px_h;
            self.surface.configure(&self.device, &self.config);
            (self._depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, px_w, px_h);
            (self._msaa_tex, self.msaa_view) =
                helpers::create_msaa_texture(&self.device, self.config.format, px_w, px_h);
        }
    }

    pub fn render(
        &mut self,
        camera: &PerspectiveCamera,
        mesh: &MeshTransform,
    ) -> Result<(), wgpu::SurfaceError> {
        let view_proj = camera.view_projection();
        self.queue.write_buffer(
            &self.scene_uniforms,
            0,
            bytemuck::bytes_of(&SceneUniforms::new(view_proj, Mat4::IDENTITY)),
        );
        self.queue.write_buffer(
            &self.mesh_uniforms,
            0,
            bytemuck::bytes_of(&SceneUniforms::new(view_proj, mesh.model_matrix())),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Opaque lines first, translucent faces last
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            self.helpers.draw(&mut rpass);
            rpass.set_bind_group(0, &self.mesh_bind_group, &[]);
            self.cube_edges.draw(&mut rpass);

            rpass.set_pipeline(&self.face_pipeline);
            self.cube_faces.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl RenderSurface for Renderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.resize_if_needed(width, height);
    }
}
