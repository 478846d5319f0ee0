//! WASM-compatible diagnostic types.
//!
//! This module provides JavaScript-compatible wrappers for kernel errors.

use spiral_geometry::SpiralError;
use wasm_bindgen::prelude::*;

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { solve_design(2, 10, 15); }
/// // catch (diag) { console.log(diag.code(), diag.message(), diag.hint()); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    code: String,
    message: String,
    hint: Option<String>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the stable error code, e.g. `unreachable_length`.
    pub fn code(&self) -> String {
        self.code.clone()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the hint, if any.
    pub fn hint(&self) -> Option<String> {
        self.hint.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// This is useful for passing data between the worker and main thread,
    /// as wasm-bindgen wrappers cannot be transferred.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("code"), &JsValue::from_str(&self.code))?;
        Reflect::set(&obj, &JsValue::from_str("message"), &JsValue::from_str(&self.message))?;
        if let Some(hint) = &self.hint {
            Reflect::set(&obj, &JsValue::from_str("hint"), &JsValue::from_str(hint))?;
        }

        Ok(JsValue::from(obj))
    }
}

impl From<&SpiralError> for Diagnostic {
    fn from(err: &SpiralError) -> Self {
        let hint = match err {
            SpiralError::UnreachableLength { min, max, .. } => {
                Some(format!("choose an arm length between {min:.4} and {max:.4}"))
            }
            SpiralError::InvalidSpiralCount { min, max, .. } => {
                Some(format!("use between {min} and {max} arms"))
            }
            SpiralError::MalformedConfig { key, .. } if !key.is_empty() => {
                Some(format!("check the value stored under \"{key}\""))
            }
            SpiralError::NumericOverflow { .. } => {
                Some("reduce the widths or the angular range".to_owned())
            }
            SpiralError::DegenerateVector { .. } => {
                Some("request the frame away from the spiral center".to_owned())
            }
            _ => None,
        };
        Self {
            code: err.code().to_owned(),
            message: err.to_string(),
            hint,
        }
    }
}

impl From<SpiralError> for Diagnostic {
    fn from(err: SpiralError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}
