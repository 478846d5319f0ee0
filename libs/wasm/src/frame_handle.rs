//! # Frame Handle
//!
//! Tangent/normal frames along a sampled arm, for drawing direction markers
//! or offsetting the outline in the browser.

use spiral_geometry::{tangent_normal, SampledCurve, SpiralParams, SpiralResult};
use wasm_bindgen::prelude::*;

/// Planar frames at every `stride`-th sample of an arm.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const frames = frames(configJson, 8);
/// const at = frames.positions();  // [x, y, ...]
/// const t = frames.tangents();    // unit vectors [tx, ty, ...]
/// const n = frames.normals();     // t rotated by +90°
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHandle {
    positions: Vec<f32>,
    tangents: Vec<f32>,
    normals: Vec<f32>,
}

#[wasm_bindgen]
impl FrameHandle {
    /// Returns the number of frames.
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u32 {
        (self.positions.len() / 2) as u32
    }

    /// Returns the frame origins as [x, y, ...].
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the unit tangents as [tx, ty, ...].
    pub fn tangents(&self) -> Vec<f32> {
        self.tangents.clone()
    }

    /// Returns the unit normals as [nx, ny, ...].
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }
}

impl FrameHandle {
    /// Evaluates frames at samples `0, stride, 2·stride, ...` of `curve`.
    ///
    /// `stride` must be at least 1.
    pub fn from_curve(
        params: &SpiralParams,
        curve: &SampledCurve,
        stride: usize,
    ) -> SpiralResult<Self> {
        let count = curve.len().div_ceil(stride);
        let mut handle = Self {
            positions: Vec::with_capacity(count * 2),
            tangents: Vec::with_capacity(count * 2),
            normals: Vec::with_capacity(count * 2),
        };
        for point in curve.points().iter().step_by(stride) {
            let (tangent, normal) = tangent_normal(params, point.theta)?;
            handle.positions.extend([point.position.x as f32, point.position.y as f32]);
            handle.tangents.extend([tangent.x as f32, tangent.y as f32]);
            handle.normals.extend([normal.x as f32, normal.y as f32]);
        }
        Ok(handle)
    }
}
