//! QR label text.

use std::fmt;

use serde_json::Value;

use crate::angles::store::{AngleSet, SLOT_COUNT};

const LABEL_SUFFIX: &str = "MotorBrew";

/// A label slot in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSlot(u8);

impl LabelSlot {
    pub fn new(slot: u8) -> Option<Self> {
        (1..=SLOT_COUNT).contains(&slot).then_some(Self(slot))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every slot in order.
    pub fn all() -> impl Iterator<Item = LabelSlot> {
        (1..=SLOT_COUNT).map(LabelSlot)
    }
}

impl fmt::Display for LabelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format `{slot}_{angle}_MotorBrew`. Missing or null angles render as `0`.
pub fn render_label(angles: &AngleSet, slot: LabelSlot) -> String {
    let angle = match angles.angle(slot.get()) {
        None | Some(Value::Null) => "0".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    format!("{slot}_{angle}_{LABEL_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn angles(v: Value) -> AngleSet {
        AngleSet::new(v.as_object().cloned().unwrap())
    }

    fn slot(n: u8) -> LabelSlot {
        LabelSlot::new(n).unwrap()
    }

    #[test]
    fn test_slot_bounds() {
        assert!(LabelSlot::new(0).is_none());
        assert!(LabelSlot::new(6).is_none());
        assert_eq!(LabelSlot::all().map(LabelSlot::get).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_render_set_and_unset() {
        let set = angles(json!({"angle1": 30}));
        assert_eq!(render_label(&set, slot(1)), "1_30_MotorBrew");
        assert_eq!(render_label(&set, slot(2)), "2_0_MotorBrew");
    }

    #[test]
    fn test_render_value_forms() {
        let set = angles(json!({"angle1": 12.5, "angle2": "45", "angle3": null, "angle4": -7}));
        assert_eq!(render_label(&set, slot(1)), "1_12.5_MotorBrew");
        assert_eq!(render_label(&set, slot(2)), "2_45_MotorBrew");
        assert_eq!(render_label(&set, slot(3)), "3_0_MotorBrew");
        assert_eq!(render_label(&set, slot(4)), "4_-7_MotorBrew");
        assert_eq!(render_label(&AngleSet::default(), slot(5)), "5_0_MotorBrew");
    }
}
