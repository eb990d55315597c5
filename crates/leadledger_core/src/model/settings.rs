//! User-editable configuration blob.
//!
//! # Responsibility
//! - Define the settings shape persisted under the settings storage key.
//! - Reproduce the first-run defaults the dashboard has always shipped.
//!
//! # Invariants
//! - Settings are saved wholesale; there is no partial merge.

use serde::{Deserialize, Serialize};

/// Notification toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub desktop: bool,
    pub followup_reminders: bool,
}

/// Outbound message templates with `{name}` / `{course}` / `{date}`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    pub followup: String,
    pub demo: String,
    pub reminder: String,
}

/// Automatic follow-up cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFollowup {
    pub enabled: bool,
    pub days_after: u32,
}

/// Flat configuration object, overwritten wholesale on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub templates: MessageTemplates,
    pub auto_followup: AutoFollowup,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: NotificationSettings {
                email: true,
                desktop: true,
                followup_reminders: true,
            },
            templates: MessageTemplates {
                followup: "Hi {name}, Thank you for your interest in our {course} course. \
                           When would be a good time to discuss further details?"
                    .to_string(),
                demo: "Hi {name}, Your demo session for {course} has been scheduled for \
                       {date}. Looking forward to meeting you!"
                    .to_string(),
                reminder: "Hi {name}, Just following up on your interest in our {course} \
                           course. Would you like to schedule a demo?"
                    .to_string(),
            },
            auto_followup: AutoFollowup {
                enabled: true,
                days_after: 3,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn default_blob_matches_first_run_shape() {
        let settings = Settings::default();
        assert!(settings.notifications.email);
        assert!(settings.notifications.followup_reminders);
        assert!(settings.templates.followup.contains("{name}"));
        assert!(settings.templates.demo.contains("{date}"));
        assert_eq!(settings.auto_followup.days_after, 3);
    }

    #[test]
    fn settings_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"followupReminders\""));
        assert!(json.contains("\"autoFollowup\""));
        assert!(json.contains("\"daysAfter\""));
    }
}
