//! # Spiral Geometry
//!
//! Logarithmic spiral kernel for soft-robotic finger profiles.
//!
//! The finger's outer edge follows `r(θ) = a·e^(bθ)`. Designers give the
//! physical root width, tip width and arm length; the solver recovers the
//! spiral parameters, the model samples the curve, the expander lays out
//! several arms around a common center and the profile module cuts the
//! segmented finger.
//!
//! ## Architecture
//!
//! ```text
//! DesignTarget → solver (SpiralParams) → model (SampledCurve) → symmetry (SymmetricLayout)
//!                        ↕                        ↓
//!                      codec                   profile (FingerProfile)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use spiral_geometry::{expand, sample, solve};
//!
//! let params = solve(10.0, 2.0, 15.0)?;
//! let curve = sample(&params)?;
//! let layout = expand(&curve, 3, params.ray_length())?;
//! assert_eq!(layout.arms().len(), 3);
//! # Ok::<(), spiral_geometry::SpiralError>(())
//! ```
//!
//! ## Design Principles
//!
//! - **Pure**: every operation is a function of its inputs, safe to call from
//!   any thread
//! - **Validated**: [`SpiralParams`] cannot be constructed out of range
//! - **Browser-Safe**: no native dependencies, compiles to WASM

pub mod codec;
pub mod error;
pub mod model;
pub mod params;
pub mod profile;
pub mod solver;
pub mod symmetry;

// Re-export public API
pub use config::constants::SolverConfig;
pub use error::{SpiralError, SpiralResult};
pub use model::{
    end_radius, helical_lift, radius_at, sample, tangent_normal, turns, CurvePoint, SampledCurve,
};
pub use params::{DesignTarget, SpiralParams, SpiralParamsBuilder};
pub use profile::{
    build_profile, sample_central, FingerProfile, PolarUnit, ProfileOptions, Quad, Segment,
};
pub use solver::{arm_length, section_width, solve, InverseSolver};
pub use symmetry::{expand, expand_params, ArmCopy, Ray, SymmetricLayout};
