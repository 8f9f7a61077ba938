//! Health profile model
//!
//! `HealthProfile` is the shape the application works with. Decrypted
//! imports can come from older exports or the sample data set, so
//! [`HealthProfile::from_imported`] accepts several layouts and fills any
//! missing number with zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name used when an imported profile has none
pub const IMPORTED_NAME: &str = "Imported";

/// A user's health profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    pub name: String,
    pub age: u32,
    /// Systolic blood pressure (mmHg)
    pub systolic: u32,
    /// Diastolic blood pressure (mmHg)
    pub diastolic: u32,
    /// Blood sugar (mg/dL)
    pub blood_sugar: f64,
    /// Oxygen saturation (%)
    pub oxygen: f64,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            name: IMPORTED_NAME.to_string(),
            age: 0,
            systolic: 0,
            diastolic: 0,
            blood_sugar: 0.0,
            oxygen: 0.0,
            conditions: Vec::new(),
        }
    }
}

impl HealthProfile {
    /// Map a decrypted import onto the canonical shape
    ///
    /// Flat fields win when they hold a non-zero number. Otherwise the
    /// nested `vitals` object is consulted (`blood_pressure` as
    /// `"systolic/diastolic"`, `blood_sugar`, `oxygen_saturation`), and
    /// anything still missing becomes zero.
    pub fn from_imported(value: &Value) -> Self {
        let vitals = value.get("vitals");
        let pressure = vitals
            .and_then(|v| v.get("blood_pressure"))
            .and_then(Value::as_str)
            .unwrap_or("");
        let mut sides = pressure.split('/');
        let nested_systolic = sides.next().and_then(parse_int_prefix);
        let nested_diastolic = sides.next().and_then(parse_int_prefix);

        Self {
            name: imported_name(value.get("name")),
            age: truthy_number(value.get("age")).map(to_u32).unwrap_or(0),
            systolic: truthy_number(value.get("systolic"))
                .map(to_u32)
                .or(nested_systolic.filter(|n| *n != 0))
                .unwrap_or(0),
            diastolic: truthy_number(value.get("diastolic"))
                .map(to_u32)
                .or(nested_diastolic.filter(|n| *n != 0))
                .unwrap_or(0),
            blood_sugar: truthy_number(value.get("bloodSugar"))
                .or_else(|| truthy_number(vitals.and_then(|v| v.get("blood_sugar"))))
                .unwrap_or(0.0),
            oxygen: truthy_number(value.get("oxygen"))
                .or_else(|| truthy_number(vitals.and_then(|v| v.get("oxygen_saturation"))))
                .unwrap_or(0.0),
            conditions: value
                .get("conditions")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Blood pressure as `"systolic/diastolic"`
    pub fn blood_pressure(&self) -> String {
        format!("{}/{}", self.systolic, self.diastolic)
    }
}

fn imported_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => IMPORTED_NAME.to_string(),
    }
}

/// A non-zero finite number, or a string that parses as one
fn truthy_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n != 0.0).then_some(n)
}

fn to_u32(n: f64) -> u32 {
    // Saturating; negatives clamp to zero
    n as u32
}

/// Leading base-10 integer of a string, ignoring surrounding whitespace
fn parse_int_prefix(s: &str) -> Option<u32> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
