//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB values, drawn to a non-sRGB surface)
pub mod colors {
    /// `0xRRGGBB` plus alpha to a color array
    pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            alpha,
        ]
    }

    /// Same color, different alpha
    pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], alpha]
    }

    pub const SKY: [f32; 4] = rgba(0x87ceeb, 1.0);
    pub const CLOUD: [f32; 4] = rgba(0xffffff, 0.3);
    pub const GROUND: [f32; 4] = rgba(0xffffff, 1.0);
    pub const SNOW_MOUND: [f32; 4] = rgba(0xf0f8ff, 1.0);
    pub const SLEIGH_BODY: [f32; 4] = rgba(0x8b4513, 1.0);
    pub const SLEIGH_RUNNER: [f32; 4] = rgba(0xffd700, 1.0);
    pub const SLEIGH_TRIM: [f32; 4] = rgba(0xc41e3a, 1.0);
    pub const LAUNCH_FILL: [f32; 4] = rgba(0xc41e3a, 0.3);
    pub const LAUNCH_OUTLINE: [f32; 4] = rgba(0xc41e3a, 1.0);
    pub const GIFT_BOX: [f32; 4] = rgba(0xff0000, 1.0);
    pub const GIFT_RIBBON: [f32; 4] = rgba(0xffd700, 1.0);
    pub const AIM_LINE: [f32; 4] = rgba(0xffffff, 0.7);
    pub const GAME_OVER_SHADE: [f32; 4] = rgba(0x000000, 0.7);
}
