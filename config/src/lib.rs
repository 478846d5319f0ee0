//! # Config Crate
//!
//! Centralized configuration constants for the logarithmic spiral profile
//! solver. Solver bounds, tolerances, sampling limits and the default design
//! parameters are defined here so every crate in the workspace agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SolverConfig, B_MIN, B_MAX, MAX_BISECTION_ITERATIONS};
//!
//! let solver = SolverConfig::default();
//! assert_eq!(solver.b_min(), B_MIN);
//! assert_eq!(solver.b_max(), B_MAX);
//! assert_eq!(solver.max_iterations(), MAX_BISECTION_ITERATIONS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Design-Tool Compatible**: Defaults match the finger design tool
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
