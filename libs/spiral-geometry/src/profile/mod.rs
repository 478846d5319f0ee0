//! # Finger Profile
//!
//! Segmented finger geometry derived from an outward-growing spiral.
//!
//! A finger is cut from the band between the outer spiral `r(θ)` and the
//! central spiral `r_c(θ) = c·r(θ)`, where
//!
//! ```text
//! c = (1 − p) + p·e^(2πb)        p = central fraction in [0, 1]
//! ```
//!
//! places the central spiral a fraction `p` of the way to the next turn. The
//! band is split into units of angular width Δθ. Every unit is a quad
//! `[p0, p1, q1, q0]` (outer edge `p0 → p1`, central chord `q0 → q1`) and has a
//! mirror image reflected across its central chord.
//!
//! Because consecutive units are similar with ratio `γ = e^(bΔθ)`, the whole
//! finger can also be laid flat: the first unit is rotated so its central chord
//! is horizontal, then unit `k` is scaled by `γ^k` and placed end to end along
//! the x-axis.
//!
//! ## Elastic layer
//!
//! The flattened outer edges meet at the virtual tip `(−l_vtip, 0)`. Two rays
//! leave it at `±(elastic% / 100)·(taper / 2)`. The upper ray crosses the tip
//! edge `p0 → q0` of the first unit and the root edge `p1 → q1` of the last;
//! with the central chord ends this bounds the elastic quad
//! `[q0, tip crossing, root crossing, q1]`, mirrored below the axis.

use std::f64::consts::TAU;

use config::constants::{
    DEFAULT_CENTRAL_FRACTION, DEFAULT_ELASTIC_PERCENT, DEFAULT_UNIT_ANGLE_DEG, GEOMETRY_EPSILON,
    MAX_ELASTIC_PERCENT, MAX_PROFILE_UNITS, MIN_ELASTIC_RAY_LENGTH, MIN_UNIT_ANGLE_DEG,
};
use glam::{DMat2, DVec2};

use crate::error::{SpiralError, SpiralResult};
use crate::model::{radius_at, sample, CurvePoint, SampledCurve};
use crate::params::SpiralParams;
use crate::solver::revolution_growth;

/// Four corners `[p0, p1, q1, q0]` of a unit.
pub type Quad = [DVec2; 4];

/// Start and end point of a construction ray.
pub type Segment = (DVec2, DVec2);

// =============================================================================
// OPTIONS
// =============================================================================

/// Segmentation settings for [`build_profile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileOptions {
    unit_angle_deg: u32,
    central_fraction: f64,
    elastic_percent: f64,
    elastic_enabled: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            unit_angle_deg: DEFAULT_UNIT_ANGLE_DEG,
            central_fraction: DEFAULT_CENTRAL_FRACTION,
            elastic_percent: DEFAULT_ELASTIC_PERCENT,
            elastic_enabled: true,
        }
    }
}

impl ProfileOptions {
    /// Validates and creates the options.
    ///
    /// # Errors
    /// `InvalidParameter` when the unit angle is below 1° or the central
    /// fraction is outside `[0, 1]`.
    pub fn new(unit_angle_deg: u32, central_fraction: f64) -> SpiralResult<Self> {
        if unit_angle_deg < MIN_UNIT_ANGLE_DEG {
            return Err(SpiralError::InvalidParameter {
                field: "unit_angle_deg",
                value: f64::from(unit_angle_deg),
                reason: "must be at least 1 degree",
            });
        }
        if !(0.0..=1.0).contains(&central_fraction) {
            return Err(SpiralError::InvalidParameter {
                field: "central_fraction",
                value: central_fraction,
                reason: "must lie in [0, 1]",
            });
        }
        Ok(Self {
            unit_angle_deg,
            central_fraction,
            ..Self::default()
        })
    }

    /// Returns a copy with a different elastic-layer opening.
    ///
    /// # Errors
    /// `InvalidParameter` when `percent` is outside `[0, 100]`.
    pub fn with_elastic_percent(self, percent: f64) -> SpiralResult<Self> {
        if !(0.0..=MAX_ELASTIC_PERCENT).contains(&percent) {
            return Err(SpiralError::InvalidParameter {
                field: "elastic_percent",
                value: percent,
                reason: "must lie in [0, 100]",
            });
        }
        Ok(Self {
            elastic_percent: percent,
            ..self
        })
    }

    /// Returns a copy with the elastic layer switched on or off.
    pub fn with_elastic_enabled(self, enabled: bool) -> Self {
        Self {
            elastic_enabled: enabled,
            ..self
        }
    }

    /// Angular width of one unit, in whole degrees.
    pub fn unit_angle_deg(&self) -> u32 {
        self.unit_angle_deg
    }

    /// Angular width of one unit, in radians.
    pub fn unit_angle(&self) -> f64 {
        f64::from(self.unit_angle_deg).to_radians()
    }

    /// Position of the central spiral between consecutive turns.
    pub fn central_fraction(&self) -> f64 {
        self.central_fraction
    }

    /// Elastic-layer opening, in percent of the half taper angle.
    pub fn elastic_percent(&self) -> f64 {
        self.elastic_percent
    }

    /// Whether [`build_profile`] cuts the elastic quad.
    pub fn elastic_enabled(&self) -> bool {
        self.elastic_enabled
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// One Δθ segment of the finger in its spiral position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarUnit {
    /// Index from the tip, starting at 0.
    pub index: usize,
    /// Angle of the tip-side edge.
    pub theta_start: f64,
    /// Angle of the root-side edge.
    pub theta_end: f64,
    /// `[p0, p1, q1, q0]`: outer edge then central chord.
    pub primary: Quad,
    /// `[q0, q1, p1', p0']`: central chord then the outer edge reflected
    /// across it.
    pub mirror: Quad,
}

/// Segmented finger derived from one spiral.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerProfile {
    /// Ratio `c` between central and outer spiral radii.
    pub central_factor: f64,
    /// Full taper angle of the flattened finger, in radians.
    pub taper_angle: f64,
    /// Distance from the first unit's central chord back to the apex where
    /// the flattened finger's edges would meet.
    pub virtual_tip_length: f64,
    /// Units in their spiral position, tip first.
    pub units: Vec<PolarUnit>,
    /// Units laid flat along +x, tip first.
    pub unfolded: Vec<Quad>,
    /// `unfolded` reflected across the x-axis.
    pub unfolded_mirror: Vec<Quad>,
    /// Height of the flattened finger at the tip (both halves).
    pub tip_size: f64,
    /// Height of the flattened finger at the root (both halves).
    pub base_size: f64,
    /// Length of the flattened finger.
    pub length: f64,
    /// Upper and lower elastic construction rays from the virtual tip.
    pub elastic_rays: [Segment; 2],
    /// `[q0, tip crossing, root crossing, q1]`; `None` when disabled or when
    /// the upper ray misses an end edge.
    pub elastic: Option<Quad>,
    /// `elastic` reflected across the x-axis.
    pub elastic_mirror: Option<Quad>,
}

/// Derives the segmented finger for `params`.
///
/// ```rust
/// use spiral_geometry::profile::{build_profile, ProfileOptions};
/// use spiral_geometry::SpiralParams;
///
/// let profile = build_profile(&SpiralParams::default(), &ProfileOptions::default())?;
/// assert_eq!(profile.units.len(), 24);
/// assert!((profile.taper_angle.to_degrees() - 10.0).abs() < 0.01);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
///
/// # Errors
/// - `InvalidParameter` unless `b > 0` and `theta_end > theta_start`, or when
///   the range holds more than [`MAX_PROFILE_UNITS`] units.
/// - `NumericOverflow` when a radius leaves the `f64` range.
pub fn build_profile(params: &SpiralParams, options: &ProfileOptions) -> SpiralResult<FingerProfile> {
    let b = params.b();
    if b <= 0.0 {
        return Err(SpiralError::InvalidParameter {
            field: "b",
            value: b,
            reason: "finger profiles require an outward-growing spiral (b > 0)",
        });
    }
    if params.theta_end() <= params.theta_start() {
        return Err(SpiralError::InvalidParameter {
            field: "theta_end",
            value: params.theta_end(),
            reason: "finger profiles require theta_end > theta_start",
        });
    }

    // Units end one revolution before theta_end
    let span = params.theta_end() - TAU - params.theta_start();
    if span / options.unit_angle() > f64::from(MAX_PROFILE_UNITS) {
        return Err(SpiralError::InvalidParameter {
            field: "theta_end",
            value: params.theta_end(),
            reason: "range holds more profile units than the supported maximum",
        });
    }

    let growth = revolution_growth(b)?;
    let central_factor = central_factor(growth, options.central_fraction());
    let slant = (b * b + 1.0).sqrt();
    let taper_angle = 2.0 * (b * (growth - 1.0) / (slant * (growth + 1.0))).atan();
    let virtual_tip_length = central_factor * params.a() * slant / b;

    let units = polar_units(params, options.unit_angle(), central_factor)?;
    let unfolded = unfold(params, options.unit_angle(), central_factor, units.len())?;
    let unfolded_mirror = unfolded.iter().map(mirror_across_x).collect();

    let tip_size = unfolded.first().map_or(0.0, |quad| 2.0 * max_y(quad));
    let base_size = unfolded.last().map_or(0.0, |quad| 2.0 * max_y(quad));
    let length = unfolded.last().map_or(0.0, max_x);

    let elastic_rays = elastic_rays(&unfolded, virtual_tip_length, taper_angle, options);
    let elastic = if options.elastic_enabled() {
        elastic_quad(&unfolded, elastic_rays[0])
    } else {
        None
    };
    let elastic_mirror = elastic.as_ref().map(mirror_across_x);

    log::debug!(
        "finger profile: {} units, taper {:.3}°, length {length}",
        units.len(),
        taper_angle.to_degrees()
    );

    Ok(FingerProfile {
        central_factor,
        taper_angle,
        virtual_tip_length,
        units,
        unfolded,
        unfolded_mirror,
        tip_size,
        base_size,
        length,
        elastic_rays,
        elastic,
        elastic_mirror,
    })
}

/// Samples the central spiral `c·r(θ)` with the resolution of `params`.
pub fn sample_central(params: &SpiralParams, options: &ProfileOptions) -> SpiralResult<SampledCurve> {
    let growth = revolution_growth(params.b())?;
    let factor = central_factor(growth, options.central_fraction());
    let outer = sample(params)?;
    let points = outer
        .points()
        .iter()
        .map(|point| CurvePoint {
            radius: point.radius * factor,
            position: point.position * factor,
            ..*point
        })
        .collect();
    Ok(SampledCurve::from_points(points))
}

fn central_factor(growth: f64, fraction: f64) -> f64 {
    (1.0 - fraction) + fraction * growth
}

fn polar_point(theta: f64, radius: f64) -> DVec2 {
    DVec2::from_angle(theta) * radius
}

fn polar_units(params: &SpiralParams, step: f64, factor: f64) -> SpiralResult<Vec<PolarUnit>> {
    let start = params.theta_start();
    // A unit needs the next turn outside it to carry its central spiral
    let limit = params.theta_end() - TAU + 1e-12;

    let mut units = Vec::new();
    let mut index = 0usize;
    loop {
        let t0 = start + step * index as f64;
        let t1 = start + step * (index + 1) as f64;
        if t1 > limit {
            break;
        }
        let r0 = radius_at(params, t0)?;
        let r1 = radius_at(params, t1)?;
        let p0 = polar_point(t0, r0);
        let p1 = polar_point(t1, r1);
        let q0 = polar_point(t0, factor * r0);
        let q1 = polar_point(t1, factor * r1);

        units.push(PolarUnit {
            index,
            theta_start: t0,
            theta_end: t1,
            primary: [p0, p1, q1, q0],
            mirror: [
                q0,
                q1,
                reflect_across_line(p1, q0, q1),
                reflect_across_line(p0, q0, q1),
            ],
        });
        index += 1;
    }
    Ok(units)
}

fn unfold(params: &SpiralParams, step: f64, factor: f64, count: usize) -> SpiralResult<Vec<Quad>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let start = params.theta_start();
    let r0 = radius_at(params, start)?;
    let r1 = radius_at(params, start + step)?;
    let p0 = polar_point(start, r0);
    let p1 = polar_point(start + step, r1);
    let q0 = polar_point(start, factor * r0);
    let q1 = polar_point(start + step, factor * r1);

    let chord = q1 - q0;
    let level = DMat2::from_angle(-chord.y.atan2(chord.x));
    let base: Quad = [level * p0, level * p1, level * q1, level * q0];

    let ratio = (params.b() * step).exp();
    let mut scale = 1.0;
    let mut cursor = 0.0;
    let mut quads = Vec::with_capacity(count);
    for _ in 0..count {
        let scaled = base.map(|corner| corner * scale);
        // Central chord starts at the cursor on the x-axis
        let offset = DVec2::new(cursor - scaled[3].x, -scaled[3].y);
        quads.push(scaled.map(|corner| corner + offset));
        cursor = offset.x + scaled[2].x;
        scale *= ratio;
    }
    Ok(quads)
}

fn elastic_rays(
    unfolded: &[Quad],
    virtual_tip_length: f64,
    taper_angle: f64,
    options: &ProfileOptions,
) -> [Segment; 2] {
    let half_angle = options.elastic_percent() / 100.0 * (taper_angle * 0.5);
    let slope = half_angle.tan();
    let reach = unfolded.iter().map(max_x).fold(0.0, f64::max);
    let ray_length =
        (reach + virtual_tip_length + MIN_ELASTIC_RAY_LENGTH).max(MIN_ELASTIC_RAY_LENGTH);

    let start = DVec2::new(-virtual_tip_length, 0.0);
    let end_x = start.x + ray_length;
    [
        (start, DVec2::new(end_x, slope * ray_length)),
        (start, DVec2::new(end_x, -slope * ray_length)),
    ]
}

fn elastic_quad(unfolded: &[Quad], (ray_start, ray_end): Segment) -> Option<Quad> {
    let first = unfolded.first()?;
    let last = unfolded.last()?;
    let tip_crossing = segment_intersection(ray_start, ray_end, first[0], first[3])?;
    let root_crossing = segment_intersection(ray_start, ray_end, last[1], last[2])?;
    Some([first[3], tip_crossing, root_crossing, last[2]])
}

/// Crossing point of segments `a0 → a1` and `b0 → b1`, endpoints included.
fn segment_intersection(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> Option<DVec2> {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = r.perp_dot(s);
    if denom.abs() < GEOMETRY_EPSILON {
        return None;
    }
    let offset = b0 - a0;
    let t = offset.perp_dot(s) / denom;
    let u = offset.perp_dot(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a0 + r * t)
    } else {
        None
    }
}

fn reflect_across_line(point: DVec2, a: DVec2, b: DVec2) -> DVec2 {
    let direction = b - a;
    let denom = direction.length_squared();
    if denom < GEOMETRY_EPSILON {
        return point;
    }
    let t = (point - a).dot(direction) / denom;
    let projection = a + direction * t;
    2.0 * projection - point
}

fn mirror_across_x(quad: &Quad) -> Quad {
    quad.map(|corner| DVec2::new(corner.x, -corner.y))
}

fn max_y(quad: &Quad) -> f64 {
    quad.iter().map(|corner| corner.y).fold(f64::NEG_INFINITY, f64::max)
}

fn max_x(quad: &Quad) -> f64 {
    quad.iter().map(|corner| corner.x).fold(f64::NEG_INFINITY, f64::max)
}
