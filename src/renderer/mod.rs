//! WebGPU rendering module
//!
//! `scene` describes the frame, `shapes` turns it into triangles and
//! `pipeline` draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, build_scene, scene_vertices};
pub use vertex::Vertex;
