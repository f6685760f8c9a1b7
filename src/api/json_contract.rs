use serde_json::Value;

use crate::core::{Item, MarginPatch};
use crate::error::{GanttError, GanttResult};
use crate::render::Renderer;

use super::GanttChart;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_items(value: &Value) -> GanttResult<Vec<Item>> {
    serde_json::from_value(value.clone())
        .map_err(|e| GanttError::InvalidInput(format!("failed to parse items json: {e}")))
}

fn parse_item(value: &Value) -> GanttResult<Item> {
    serde_json::from_value(value.clone())
        .map_err(|e| GanttError::InvalidInput(format!("failed to parse item json: {e}")))
}

/// Lane names may be given as strings or numbers; `null` is an empty label.
fn parse_lane_label(value: &Value) -> GanttResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(GanttError::InvalidInput(format!(
            "lane label must be a string, got {}",
            json_type_name(other)
        ))),
    }
}

/// Margin fields accept numbers or numeric strings.
fn parse_margin_field(name: &str, value: &Value) -> GanttResult<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        GanttError::InvalidInput(format!(
            "`{name}` margin must be numeric, got {}",
            json_type_name(value)
        ))
    })
}

impl<R: Renderer> GanttChart<R> {
    /// Replaces the items from a JSON array of item objects.
    pub fn set_items_json(&mut self, value: &Value) -> GanttResult<&mut Self> {
        if !value.is_array() {
            return Err(GanttError::InvalidInput(format!(
                "items must be an array, got {}",
                json_type_name(value)
            )));
        }
        let items = parse_items(value)?;
        self.set_items(items)
    }

    /// Appends items from a JSON array or a single item object.
    pub fn add_items_json(&mut self, value: &Value) -> GanttResult<&mut Self> {
        let items = match value {
            Value::Array(_) => parse_items(value)?,
            Value::Object(_) => vec![parse_item(value)?],
            other => {
                return Err(GanttError::InvalidInput(format!(
                    "items to add must be an array or an object, got {}",
                    json_type_name(other)
                )));
            }
        };
        self.add_items(items)
    }

    pub fn set_lanes_json(&mut self, value: &Value) -> GanttResult<&mut Self> {
        let Value::Array(entries) = value else {
            return Err(GanttError::InvalidInput(format!(
                "lanes must be an array, got {}",
                json_type_name(value)
            )));
        };
        let lanes = entries
            .iter()
            .map(parse_lane_label)
            .collect::<GanttResult<Vec<_>>>()?;
        self.set_lanes(lanes)
    }

    /// Updates margins from a JSON object with any of `top`, `right`,
    /// `bottom`, `left`. Unknown keys are ignored.
    pub fn set_margins_json(&mut self, value: &Value) -> GanttResult<&mut Self> {
        let Value::Object(fields) = value else {
            return Err(GanttError::InvalidInput(format!(
                "margins must be an object, got {}",
                json_type_name(value)
            )));
        };
        let field = |name: &str| -> GanttResult<Option<f64>> {
            fields
                .get(name)
                .map(|value| parse_margin_field(name, value))
                .transpose()
        };
        let patch = MarginPatch {
            top: field("top")?,
            right: field("right")?,
            bottom: field("bottom")?,
            left: field("left")?,
        };
        self.set_margins(patch)
    }
}
