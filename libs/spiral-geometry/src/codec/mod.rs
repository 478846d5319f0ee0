//! # Config Codec
//!
//! Converts [`SpiralParams`] to and from the flat key/value record used to
//! persist parameter sets.
//!
//! ## Format
//!
//! ```json
//! {
//!   "a": 4.95,
//!   "b": 0.1764,
//!   "theta_start": 0.0,
//!   "theta_end": 18.84955592153876,
//!   "num_points": 500,
//!   "pitch": 1.0,
//!   "height_scale": 1.0,
//!   "num_spirals": 1,
//!   "ray_length": 10.0
//! }
//! ```
//!
//! Every key is written on encode. On decode unknown keys are ignored, while a
//! missing key, a non-numeric value or a value outside its constraint is a
//! `MalformedConfig` error. Values are never clamped.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{SpiralError, SpiralResult};
use crate::params::SpiralParams;

/// Flat persisted record.
pub type ConfigRecord = Map<String, Value>;

/// Keys of the persisted record, in file order.
pub const CONFIG_KEYS: [&str; 9] = [
    "a",
    "b",
    "theta_start",
    "theta_end",
    "num_points",
    "pitch",
    "height_scale",
    "num_spirals",
    "ray_length",
];

/// Field layout of the persisted record, declared in file order.
#[derive(Debug, Serialize)]
struct PersistedParams {
    a: f64,
    b: f64,
    theta_start: f64,
    theta_end: f64,
    num_points: u32,
    pitch: f64,
    height_scale: f64,
    num_spirals: u32,
    ray_length: f64,
}

impl From<&SpiralParams> for PersistedParams {
    fn from(params: &SpiralParams) -> Self {
        Self {
            a: params.a(),
            b: params.b(),
            theta_start: params.theta_start(),
            theta_end: params.theta_end(),
            num_points: params.num_points(),
            pitch: params.pitch(),
            height_scale: params.height_scale(),
            num_spirals: params.num_spirals(),
            ray_length: params.ray_length(),
        }
    }
}

// =============================================================================
// ENCODE
// =============================================================================

/// Encodes every field of `params` into a flat record.
///
/// ```rust
/// use spiral_geometry::{codec, SpiralParams};
///
/// let record = codec::encode(&SpiralParams::default());
/// assert_eq!(record.len(), codec::CONFIG_KEYS.len());
/// assert_eq!(record["num_points"], 500);
/// ```
pub fn encode(params: &SpiralParams) -> ConfigRecord {
    let mut record = ConfigRecord::new();
    record.insert("a".to_owned(), Value::from(params.a()));
    record.insert("b".to_owned(), Value::from(params.b()));
    record.insert("theta_start".to_owned(), Value::from(params.theta_start()));
    record.insert("theta_end".to_owned(), Value::from(params.theta_end()));
    record.insert("num_points".to_owned(), Value::from(params.num_points()));
    record.insert("pitch".to_owned(), Value::from(params.pitch()));
    record.insert("height_scale".to_owned(), Value::from(params.height_scale()));
    record.insert("num_spirals".to_owned(), Value::from(params.num_spirals()));
    record.insert("ray_length".to_owned(), Value::from(params.ray_length()));
    record
}

/// Encodes `params` as pretty-printed JSON text with keys in file order.
pub fn to_json_string(params: &SpiralParams) -> SpiralResult<String> {
    serde_json::to_string_pretty(&PersistedParams::from(params))
        .map_err(|err| SpiralError::malformed("", err.to_string()))
}

// =============================================================================
// DECODE
// =============================================================================

/// Decodes a flat record into a validated [`SpiralParams`].
///
/// # Errors
/// `MalformedConfig` naming the first offending key.
pub fn decode(record: &ConfigRecord) -> SpiralResult<SpiralParams> {
    let a = read_real(record, "a")?;
    let b = read_real(record, "b")?;
    let theta_start = read_real(record, "theta_start")?;
    let theta_end = read_real(record, "theta_end")?;
    let num_points = read_count(record, "num_points")?;
    let pitch = read_real(record, "pitch")?;
    let height_scale = read_real(record, "height_scale")?;
    let num_spirals = read_count(record, "num_spirals")?;
    let ray_length = read_real(record, "ray_length")?;

    SpiralParams::new(
        a,
        b,
        theta_start,
        theta_end,
        num_points,
        num_spirals,
        pitch,
        height_scale,
        ray_length,
    )
    .map_err(|err| match err {
        SpiralError::InvalidParameter { field, reason, .. } => SpiralError::malformed(field, reason),
        SpiralError::InvalidSpiralCount { count, min, max } => {
            SpiralError::malformed("num_spirals", format!("{count} is outside [{min}, {max}]"))
        }
        other => other,
    })
}

/// Parses JSON text and decodes the top-level object.
///
/// ```rust
/// use spiral_geometry::{codec, SpiralParams};
///
/// let params = SpiralParams::default();
/// let text = codec::to_json_string(&params)?;
/// assert_eq!(codec::from_json_str(&text)?, params);
/// # Ok::<(), spiral_geometry::SpiralError>(())
/// ```
pub fn from_json_str(text: &str) -> SpiralResult<SpiralParams> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| SpiralError::malformed("", err.to_string()))?;
    match value {
        Value::Object(record) => decode(&record),
        _ => Err(SpiralError::malformed("", "expected a JSON object")),
    }
}

fn read_value<'a>(record: &'a ConfigRecord, key: &str) -> SpiralResult<&'a Value> {
    record
        .get(key)
        .ok_or_else(|| SpiralError::malformed(key, "missing required key"))
}

fn read_real(record: &ConfigRecord, key: &str) -> SpiralResult<f64> {
    read_value(record, key)?
        .as_f64()
        .ok_or_else(|| SpiralError::malformed(key, "expected a numeric literal"))
}

fn read_count(record: &ConfigRecord, key: &str) -> SpiralResult<u32> {
    let value = read_value(record, key)?;
    let count = match value.as_u64() {
        Some(count) => count,
        None => {
            // Integral floats such as `12.0` are accepted, anything else is not
            let real = value
                .as_f64()
                .ok_or_else(|| SpiralError::malformed(key, "expected a numeric literal"))?;
            if real.fract() != 0.0 || real < 0.0 {
                return Err(SpiralError::malformed(
                    key,
                    format!("expected a non-negative integer, found {real}"),
                ));
            }
            if real > f64::from(u32::MAX) {
                return Err(SpiralError::malformed(key, format!("{real} is out of range")));
            }
            real as u64
        }
    };
    u32::try_from(count).map_err(|_| SpiralError::malformed(key, format!("{count} is out of range")))
}
