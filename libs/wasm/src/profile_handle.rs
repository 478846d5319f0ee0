//! # Profile Handle
//!
//! Flattened finger outline for drawing the cut pattern in the browser.

use spiral_geometry::{FingerProfile, Quad, Segment};
use wasm_bindgen::prelude::*;

/// Summary values and unfolded quads of a finger profile.
///
/// Quads are stored as [x0, y0, x1, y1, x2, y2, x3, y3, ...] in the
/// `[p0, p1, q1, q0]` corner order, tip first. The elastic quad uses the
/// same layout and is empty when the profile has none.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHandle {
    unit_count: u32,
    taper_angle_deg: f64,
    virtual_tip_length: f64,
    tip_size: f64,
    base_size: f64,
    length: f64,
    unfolded: Vec<f32>,
    unfolded_mirror: Vec<f32>,
    elastic: Vec<f32>,
    elastic_mirror: Vec<f32>,
    elastic_rays: Vec<f32>,
}

#[wasm_bindgen]
impl ProfileHandle {
    /// Returns the number of units.
    #[wasm_bindgen(getter)]
    pub fn unit_count(&self) -> u32 {
        self.unit_count
    }

    /// Returns the full taper angle in degrees.
    #[wasm_bindgen(getter)]
    pub fn taper_angle_deg(&self) -> f64 {
        self.taper_angle_deg
    }

    /// Returns the distance from the tip chord to the virtual apex.
    #[wasm_bindgen(getter)]
    pub fn virtual_tip_length(&self) -> f64 {
        self.virtual_tip_length
    }

    /// Returns the flattened tip height.
    #[wasm_bindgen(getter)]
    pub fn tip_size(&self) -> f64 {
        self.tip_size
    }

    /// Returns the flattened root height.
    #[wasm_bindgen(getter)]
    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    /// Returns the flattened length.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the upper half of the strip as a Float32Array.
    pub fn unfolded(&self) -> Vec<f32> {
        self.unfolded.clone()
    }

    /// Returns the lower (mirrored) half of the strip as a Float32Array.
    pub fn unfolded_mirror(&self) -> Vec<f32> {
        self.unfolded_mirror.clone()
    }

    /// Returns true when the elastic quad was cut.
    #[wasm_bindgen(getter)]
    pub fn has_elastic(&self) -> bool {
        !self.elastic.is_empty()
    }

    /// Returns the elastic quad as [x0, y0, ..., x3, y3], or an empty array.
    pub fn elastic(&self) -> Vec<f32> {
        self.elastic.clone()
    }

    /// Returns the mirrored elastic quad, or an empty array.
    pub fn elastic_mirror(&self) -> Vec<f32> {
        self.elastic_mirror.clone()
    }

    /// Returns the upper then lower elastic ray as [x0, y0, x1, y1, ...].
    pub fn elastic_rays(&self) -> Vec<f32> {
        self.elastic_rays.clone()
    }
}

impl From<&FingerProfile> for ProfileHandle {
    fn from(profile: &FingerProfile) -> Self {
        Self {
            unit_count: profile.units.len() as u32,
            taper_angle_deg: profile.taper_angle.to_degrees(),
            virtual_tip_length: profile.virtual_tip_length,
            tip_size: profile.tip_size,
            base_size: profile.base_size,
            length: profile.length,
            unfolded: flatten(&profile.unfolded),
            unfolded_mirror: flatten(&profile.unfolded_mirror),
            elastic: flatten(profile.elastic.as_slice()),
            elastic_mirror: flatten(profile.elastic_mirror.as_slice()),
            elastic_rays: flatten_segments(&profile.elastic_rays),
        }
    }
}

fn flatten(quads: &[Quad]) -> Vec<f32> {
    quads
        .iter()
        .flat_map(|quad| quad.iter().flat_map(|c| [c.x as f32, c.y as f32]))
        .collect()
}

fn flatten_segments(segments: &[Segment]) -> Vec<f32> {
    segments
        .iter()
        .flat_map(|(start, end)| [start.x as f32, start.y as f32, end.x as f32, end.y as f32])
        .collect()
}
