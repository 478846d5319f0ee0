//! WASM-facing entry points for the spiral designer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameter sets cross the boundary as the JSON config
//! record. Native tests interact with the `*_internal` helpers to avoid
//! depending on a JS host.
//!
//! ```
//! let text = spiral_wasm::solve_design_internal(10.0, 2.0, 15.0).unwrap();
//! let handle = spiral_wasm::expand_layout_internal(&text).unwrap();
//! assert_eq!(handle.arm_count(), 1);
//! ```

use config::constants::DEFAULT_NUM_POINTS;
use spiral_geometry::{
    build_profile, codec, expand_params, sample, solve, ProfileOptions, SpiralError,
};
use std::num::NonZeroU32;
use wasm_bindgen::prelude::*;

mod curve_handle;
mod diagnostics;
mod frame_handle;
mod profile_handle;

pub use curve_handle::CurveHandle;
pub use diagnostics::Diagnostic;
pub use frame_handle::FrameHandle;
pub use profile_handle::ProfileHandle;

/// Installs a panic hook that forwards Rust panics to the browser console,
/// and a console logger when built with `debug_logs`.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "spiral-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logger();
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second call finds the logger already installed
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

/// Returns the default number of samples per arm.
///
/// # Examples
/// ```
/// assert!(spiral_wasm::default_num_points() >= 2);
/// ```
#[wasm_bindgen]
pub fn default_num_points() -> u32 {
    DEFAULT_NUM_POINTS
}

// =============================================================================
// SOLVER
// =============================================================================

/// Solves root width, tip width and arm length into a spiral and returns it
/// as a JSON config record.
///
/// # Errors
/// Throws a [`Diagnostic`] when the target is invalid or unreachable.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const record = JSON.parse(solve_design(10, 2, 15));
/// // console.log(record.b);
/// ```
#[wasm_bindgen]
pub fn solve_design(width_root: f64, width_tip: f64, length: f64) -> Result<String, JsValue> {
    solve_design_internal(width_root, width_tip, length).map_err(to_js_error)
}

/// Host-only twin of [`solve_design`].
pub fn solve_design_internal(
    width_root: f64,
    width_tip: f64,
    length: f64,
) -> Result<String, SpiralError> {
    let params = solve(width_root, width_tip, length)?;
    codec::to_json_string(&params)
}

// =============================================================================
// RENDERING
// =============================================================================

/// Samples the single arm described by a JSON config record.
///
/// # Errors
/// Throws a [`Diagnostic`] when the record is malformed or sampling
/// overflows.
#[wasm_bindgen]
pub fn sample_curve(config_json: &str) -> Result<CurveHandle, JsValue> {
    sample_curve_internal(config_json).map_err(to_js_error)
}

/// Host-only twin of [`sample_curve`].
pub fn sample_curve_internal(config_json: &str) -> Result<CurveHandle, SpiralError> {
    let params = codec::from_json_str(config_json)?;
    let curve = sample(&params)?;
    Ok(CurveHandle::from_curve(&curve))
}

/// Samples the record and lays out `num_spirals` arms with their rays.
///
/// # Errors
/// Throws a [`Diagnostic`] when the record is malformed or sampling
/// overflows.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const layout = expand_layout(JSON.stringify({ ...record, num_spirals: 3 }));
/// // console.log(layout.arm_count, layout.ray_count);
/// ```
#[wasm_bindgen]
pub fn expand_layout(config_json: &str) -> Result<CurveHandle, JsValue> {
    expand_layout_internal(config_json).map_err(to_js_error)
}

/// Host-only twin of [`expand_layout`].
pub fn expand_layout_internal(config_json: &str) -> Result<CurveHandle, SpiralError> {
    let params = codec::from_json_str(config_json)?;
    let layout = expand_params(&params)?;
    Ok(CurveHandle::from_layout(&layout))
}

/// Evaluates the tangent/normal frame at every `stride`-th sample of the
/// record's arm.
///
/// # Errors
/// Throws a [`Diagnostic`] when the record is malformed, `stride` is zero,
/// or a sample sits where the radius vanishes.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const f = frames(configJson, 10);
/// // console.log(f.frame_count, f.tangents());
/// ```
#[wasm_bindgen]
pub fn frames(config_json: &str, stride: u32) -> Result<FrameHandle, JsValue> {
    frames_internal(config_json, stride).map_err(to_js_error)
}

/// Host-only twin of [`frames`].
pub fn frames_internal(config_json: &str, stride: u32) -> Result<FrameHandle, SpiralError> {
    let stride = NonZeroU32::new(stride).ok_or(SpiralError::InvalidParameter {
        field: "stride",
        value: 0.0,
        reason: "must be at least 1",
    })?;
    let params = codec::from_json_str(config_json)?;
    let curve = sample(&params)?;
    FrameHandle::from_curve(&params, &curve, stride.get() as usize)
}

// =============================================================================
// PROFILE
// =============================================================================

/// Cuts the finger profile of the record into units of `unit_angle_deg`
/// degrees with the central spiral at `central_fraction`.
///
/// The elastic quad opens at `elastic_percent` of the half taper angle and
/// is left out when `elastic_enabled` is false.
///
/// # Errors
/// Throws a [`Diagnostic`] when the record or the options are invalid.
#[wasm_bindgen]
pub fn finger_profile(
    config_json: &str,
    unit_angle_deg: u32,
    central_fraction: f64,
    elastic_percent: f64,
    elastic_enabled: bool,
) -> Result<ProfileHandle, JsValue> {
    finger_profile_internal(
        config_json,
        unit_angle_deg,
        central_fraction,
        elastic_percent,
        elastic_enabled,
    )
    .map_err(to_js_error)
}

/// Host-only twin of [`finger_profile`].
pub fn finger_profile_internal(
    config_json: &str,
    unit_angle_deg: u32,
    central_fraction: f64,
    elastic_percent: f64,
    elastic_enabled: bool,
) -> Result<ProfileHandle, SpiralError> {
    let params = codec::from_json_str(config_json)?;
    let options = ProfileOptions::new(unit_angle_deg, central_fraction)?
        .with_elastic_percent(elastic_percent)?
        .with_elastic_enabled(elastic_enabled);
    let profile = build_profile(&params, &options)?;
    Ok(ProfileHandle::from(&profile))
}

fn to_js_error(err: SpiralError) -> JsValue {
    log::debug!("rejected at the wasm boundary: {err}");
    JsValue::from(Diagnostic::from(err))
}
