//! Slot names and the per-turn slot set

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Slots the `BookMovie` intent collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotName {
    MovieName,
    TheaterName,
    MovieDate,
    MovieTime,
    TicketCount,
    Mobile,
}

impl SlotName {
    pub const ALL: [SlotName; 6] = [
        SlotName::MovieName,
        SlotName::TheaterName,
        SlotName::MovieDate,
        SlotName::MovieTime,
        SlotName::TicketCount,
        SlotName::Mobile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotName::MovieName => "MovieName",
            SlotName::TheaterName => "TheaterName",
            SlotName::MovieDate => "MovieDate",
            SlotName::MovieTime => "MovieTime",
            SlotName::TicketCount => "TicketCount",
            SlotName::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot values for the current turn.
///
/// Keys the platform sends that we don't know about are kept so they can be
/// echoed back untouched. A key mapped to `None` is an unfilled slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Slots(BTreeMap<String, Option<String>>);

impl Slots {
    /// Value of a slot, or `None` when the slot is missing or unfilled
    pub fn get(&self, name: SlotName) -> Option<&str> {
        self.0.get(name.as_str()).and_then(Option::as_deref)
    }

    pub fn set(&mut self, name: SlotName, value: impl Into<String>) {
        self.0.insert(name.as_str().to_string(), Some(value.into()));
    }

    /// Reset a slot to unfilled. The key stays so the platform re-elicits it.
    pub fn clear(&mut self, name: SlotName) {
        self.0.insert(name.as_str().to_string(), None);
    }

    /// Builder-style `set`
    #[must_use]
    pub fn with(mut self, name: SlotName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Slot set with every known slot present but unfilled
    pub fn unfilled() -> Self {
        let mut slots = Self::default();
        for name in SlotName::ALL {
            slots.clear(name);
        }
        slots
    }
}

impl<'de> Deserialize<'de> for Slots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut slots = BTreeMap::new();
        for (key, value) in raw {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                other => {
                    return Err(de::Error::custom(format!(
                        "slot {key} has non-scalar value {other}"
                    )))
                }
            };
            slots.insert(key, value);
        }
        Ok(Self(slots))
    }
}
