use anyhow::{bail, Result};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::device::GpuFrame;
use crate::scene::{Vertex, CUBE_INDICES, CUBE_VERTICES};

use super::DepthTarget;

pub const VERTEX_ENTRY: &str = "vertex_main";
pub const FRAGMENT_ENTRY: &str = "fragment_main";

/// Binding slot of the per-draw model matrix.
const MODEL_BINDING: u32 = 1;

/// Compiled cube pipeline plus the GPU buffers it draws from.
///
/// Construction is the only fallible step: once a `CubePipeline` exists, every
/// frame can be encoded without further checks.
pub struct CubePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    model_ubo: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl CubePipeline {
    /// Uploads the cube mesh and builds the pipeline for `color_format`.
    ///
    /// Shader compilation errors are returned instead of being left for the
    /// first draw to trip over.
    pub async fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Result<Self> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tumble cube shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
        });

        let info = shader.get_compilation_info().await;
        let errors: Vec<String> = info
            .messages
            .iter()
            .filter(|m| is_error(m))
            .map(|m| m.message.clone())
            .collect();
        for m in info.messages.iter().filter(|m| !is_error(m)) {
            log::debug!("cube shader: {}", m.message);
        }
        if !errors.is_empty() {
            bail!("cube shader failed to compile: {}", errors.join("; "));
        }

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("tumble cube bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: MODEL_BINDING,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<ModelUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tumble cube pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tumble cube pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Depth testing resolves visibility; the mesh winds inward.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthTarget::FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        let model_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tumble model ubo"),
            contents: bytemuck::bytes_of(&ModelUniform::from(Mat4::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tumble cube bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: MODEL_BINDING,
                resource: model_ubo.as_entire_binding(),
            }],
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tumble cube vbo"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tumble cube ibo"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!("cube pipeline ready ({color_format:?} + {:?})", DepthTarget::FORMAT);

        Ok(Self {
            pipeline,
            bind_group,
            model_ubo,
            vertex_buffer,
            index_buffer,
            index_count: CUBE_INDICES.len() as u32,
        })
    }

    /// Stages the model matrix for the next submission.
    pub fn write_model(&self, queue: &wgpu::Queue, model: Mat4) {
        queue.write_buffer(&self.model_ubo, 0, bytemuck::bytes_of(&ModelUniform::from(model)));
    }

    /// Records the clear + cube draw into `frame`.
    pub fn encode(&self, frame: &mut GpuFrame, depth: &DepthTarget, clear: wgpu::Color) {
        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tumble cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth.view(),
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

fn is_error(message: &wgpu::CompilationMessage) -> bool {
    matches!(message.message_type, wgpu::CompilationMessageType::Error)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ModelUniform {
    matrix: [[f32; 4]; 4],
}

impl From<Mat4> for ModelUniform {
    fn from(m: Mat4) -> Self {
        Self {
            matrix: m.to_cols_array_2d(),
        }
    }
}
