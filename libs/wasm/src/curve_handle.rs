//! # Curve Handle
//!
//! WASM-friendly wrapper for sampled spiral arms that can be transferred to
//! JavaScript as flat buffers.

use spiral_geometry::{SampledCurve, SymmetricLayout};
use wasm_bindgen::prelude::*;

/// A handle to one or more sampled arms plus their structural rays.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const layout = expand_layout(configJson);
///
/// // One polyline per arm, points_per_arm vertices each
/// const vertices = layout.vertices();  // Float32Array
/// for (let arm = 0; arm < layout.arm_count; arm++) {
///   const start = arm * layout.points_per_arm * 3;
///   const line = vertices.subarray(start, start + layout.points_per_arm * 3);
///   // new THREE.Line(new THREE.BufferGeometry().setAttribute('position', ...))
/// }
///
/// // Ray segments as [x0, y0, z0, x1, y1, z1, ...]
/// const rays = layout.rays();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct CurveHandle {
    /// Positions as [x, y, z, ...], arm after arm
    vertices: Vec<f32>,
    /// Ray segments as [x0, y0, z0, x1, y1, z1, ...]
    rays: Vec<f32>,
    /// Number of arms
    arm_count: u32,
    /// Samples per arm
    points_per_arm: u32,
}

#[wasm_bindgen]
impl CurveHandle {
    /// Returns the number of arms.
    #[wasm_bindgen(getter)]
    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }

    /// Returns the number of samples in each arm.
    #[wasm_bindgen(getter)]
    pub fn points_per_arm(&self) -> u32 {
        self.points_per_arm
    }

    /// Returns the number of vertices across all arms.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.arm_count * self.points_per_arm
    }

    /// Returns the number of ray segments.
    #[wasm_bindgen(getter)]
    pub fn ray_count(&self) -> u32 {
        (self.rays.len() / 6) as u32
    }

    /// Returns the arm positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the ray segments as a Float32Array.
    ///
    /// Format: [x0, y0, z0, x1, y1, z1, ...]
    /// Length: ray_count * 6
    pub fn rays(&self) -> Vec<f32> {
        self.rays.clone()
    }

    /// Returns true if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl CurveHandle {
    /// Creates a handle holding a single arm without rays.
    pub fn from_curve(curve: &SampledCurve) -> Self {
        Self {
            vertices: flatten(curve),
            rays: Vec::new(),
            arm_count: 1,
            points_per_arm: curve.len() as u32,
        }
    }

    /// Creates a handle holding every arm and ray of a layout.
    pub fn from_layout(layout: &SymmetricLayout) -> Self {
        let points_per_arm = layout.arms().first().map_or(0, |arm| arm.curve.len());
        let vertices = layout
            .arms()
            .iter()
            .flat_map(|arm| flatten(&arm.curve))
            .collect();
        let rays = layout
            .rays()
            .iter()
            .flat_map(|ray| {
                [
                    ray.start.x as f32,
                    ray.start.y as f32,
                    0.0,
                    ray.end.x as f32,
                    ray.end.y as f32,
                    0.0,
                ]
            })
            .collect();

        Self {
            vertices,
            rays,
            arm_count: layout.arm_count() as u32,
            points_per_arm: points_per_arm as u32,
        }
    }
}

fn flatten(curve: &SampledCurve) -> Vec<f32> {
    curve
        .positions_3d()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}
