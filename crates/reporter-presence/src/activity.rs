//! The activity snapshot pushed to the external presence client.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maximum number of buttons the external client will display.
pub const MAX_BUTTONS: usize = 2;

/// An interactive link shown on the presence card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityButton {
    pub label: String,
    pub url: String,
}

/// A rich-presence snapshot.
///
/// Every field is optional; the external client shows whatever subset is
/// set. At most one activity is displayed per connection -- pushing a new
/// one replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Elapsed-time anchor, epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<i64>,
    /// Countdown anchor, epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ActivityButton>,
}

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary line shown on the presence card.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Secondary line shown on the presence card.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn start_timestamp(mut self, epoch_secs: i64) -> Self {
        self.start_timestamp = Some(epoch_secs);
        self
    }

    pub fn end_timestamp(mut self, epoch_secs: i64) -> Self {
        self.end_timestamp = Some(epoch_secs);
        self
    }

    /// Large icon asset id, with an optional hover tooltip.
    pub fn large_image(mut self, key: impl Into<String>, text: Option<String>) -> Self {
        self.large_image_key = Some(key.into());
        self.large_image_text = text;
        self
    }

    /// Small icon asset id, with an optional hover tooltip.
    pub fn small_image(mut self, key: impl Into<String>, text: Option<String>) -> Self {
        self.small_image_key = Some(key.into());
        self.small_image_text = text;
        self
    }

    pub fn button(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.buttons.push(ActivityButton {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    /// Whether every field is unset and no buttons are attached.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Truncate the button list to what the client will accept.
    ///
    /// The client caps buttons at [`MAX_BUTTONS`]; anything beyond that is
    /// dropped rather than forwarded as-is.
    pub fn clamp_buttons(mut self) -> Self {
        if self.buttons.len() > MAX_BUTTONS {
            warn!(
                dropped = self.buttons.len() - MAX_BUTTONS,
                "too many activity buttons, truncating"
            );
            self.buttons.truncate(MAX_BUTTONS);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let activity = Activity::new()
            .details("Playing")
            .state("Level 1")
            .start_timestamp(1_700_000_000)
            .large_image("logo", Some("Reporter".into()))
            .button("Join", "https://example.com/join");

        assert_eq!(activity.details.as_deref(), Some("Playing"));
        assert_eq!(activity.state.as_deref(), Some("Level 1"));
        assert_eq!(activity.start_timestamp, Some(1_700_000_000));
        assert_eq!(activity.end_timestamp, None);
        assert_eq!(activity.large_image_key.as_deref(), Some("logo"));
        assert_eq!(activity.large_image_text.as_deref(), Some("Reporter"));
        assert_eq!(activity.buttons.len(), 1);
        assert_eq!(activity.buttons[0].label, "Join");
    }

    #[test]
    fn default_is_empty() {
        assert!(Activity::new().is_empty());
        assert!(!Activity::new().state("x").is_empty());
        assert!(!Activity::new().button("a", "b").is_empty());
    }

    #[test]
    fn clamp_keeps_first_two_buttons() {
        let activity = Activity::new()
            .button("one", "https://example.com/1")
            .button("two", "https://example.com/2")
            .button("three", "https://example.com/3")
            .clamp_buttons();

        assert_eq!(activity.buttons.len(), MAX_BUTTONS);
        assert_eq!(activity.buttons[0].label, "one");
        assert_eq!(activity.buttons[1].label, "two");
    }

    #[test]
    fn clamp_leaves_short_lists_alone() {
        let activity = Activity::new().button("one", "https://example.com/1");
        let clamped = activity.clone().clamp_buttons();
        assert_eq!(clamped, activity);
    }

    #[test]
    fn unset_fields_are_skipped_in_json() {
        let activity = Activity::new().details("Playing").state("Level 1");
        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!(json["details"], "Playing");
        assert_eq!(json["state"], "Level 1");
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("start_timestamp"));
        assert!(!obj.contains_key("large_image_key"));
        assert!(!obj.contains_key("buttons"));
    }

    #[test]
    fn json_round_trip_with_buttons() {
        let activity = Activity::new()
            .state("In menu")
            .button("Join", "https://example.com/join");
        let json = serde_json::to_string(&activity).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, activity);
    }
}
