use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};

/// Stable item identity used to match items to their drawn shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Hover text for an item: a literal, or a callback evaluated at display time.
#[derive(Clone)]
pub enum Tooltip {
    Text(String),
    Dynamic(Rc<dyn Fn() -> String>),
}

impl Tooltip {
    #[must_use]
    pub fn dynamic(source: impl Fn() -> String + 'static) -> Self {
        Self::Dynamic(Rc::new(source))
    }

    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Dynamic(source) => source(),
        }
    }
}

impl fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl PartialEq for Tooltip {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Dynamic(left), Self::Dynamic(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl From<&str> for Tooltip {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Tooltip {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// Dynamic tooltips serialize as their current text.
impl Serialize for Tooltip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.resolve())
    }
}

impl<'de> Deserialize<'de> for Tooltip {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Text)
    }
}

/// One time-bounded unit of work drawn as a bar in a lane.
///
/// Times are milliseconds since the Unix epoch. `end < start` is accepted and
/// drawn as a negative-width bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub lane: usize,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_deserializing)]
    pub(crate) sublane: usize,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, lane: usize, start: f64, end: f64) -> Self {
        Self {
            id: id.into(),
            lane,
            start,
            end,
            label: String::new(),
            class: None,
            fill_title: None,
            tooltip: None,
            sublane: 0,
        }
    }

    #[must_use]
    pub fn from_datetimes(
        id: impl Into<ItemId>,
        lane: usize,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self::new(
            id,
            lane,
            datetime_to_unix_millis(start),
            datetime_to_unix_millis(end),
        )
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_fill_title(mut self, fill_title: impl Into<String>) -> Self {
        self.fill_title = Some(fill_title.into());
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<Tooltip>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[must_use]
    pub fn with_tooltip_fn(mut self, source: impl Fn() -> String + 'static) -> Self {
        self.tooltip = Some(Tooltip::dynamic(source));
        self
    }

    /// Stack slot inside the lane, assigned by the sublane packer.
    #[must_use]
    pub fn sublane(&self) -> usize {
        self.sublane
    }

    #[must_use]
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        unix_millis_to_datetime(self.start)
    }

    #[must_use]
    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        unix_millis_to_datetime(self.end)
    }

    #[must_use]
    pub fn tooltip_text(&self) -> Option<String> {
        self.tooltip.as_ref().map(Tooltip::resolve)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{Item, ItemId, Tooltip};

    #[test]
    fn dynamic_tooltip_is_evaluated_on_each_resolve() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let item = Item::new(1, 0, 0.0, 1.0).with_tooltip_fn(move || {
            counter.set(counter.get() + 1);
            format!("call {}", counter.get())
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(item.tooltip_text().as_deref(), Some("call 1"));
        assert_eq!(item.tooltip_text().as_deref(), Some("call 2"));
    }

    #[test]
    fn deserializes_camel_case_and_ignores_sublane() {
        let item: Item = serde_json::from_str(
            r##"{"id":"a","lane":2,"start":5,"end":9,"fillTitle":"#000","sublane":7,"tooltip":"hi"}"##,
        )
        .expect("valid item json");

        assert_eq!(item.id, ItemId::from("a"));
        assert_eq!(item.lane, 2);
        assert_eq!(item.fill_title.as_deref(), Some("#000"));
        assert_eq!(item.sublane(), 0);
        assert_eq!(item.tooltip, Some(Tooltip::from("hi")));
    }

    #[test]
    fn negative_lane_is_not_representable() {
        let result = serde_json::from_str::<Item>(r#"{"id":1,"lane":-1,"start":0,"end":1}"#);
        assert!(result.is_err());
    }
}
