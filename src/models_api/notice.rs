use serde::{Deserialize, Serialize};

/// How long a success confirmation stays on screen before the UI dismisses it.
pub const SUCCESS_DISMISS_MS: u64 = 2600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
}

/// A one-shot feedback message for the admin UI. Errors and warnings stay
/// until acknowledged; successes carry an auto-dismiss deadline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiNotice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_dismiss_ms: Option<u64>,
}

impl ApiNotice {
    pub fn success(title: &str, text: String) -> ApiNotice {
        ApiNotice {
            level: NoticeLevel::Success,
            title: title.to_string(),
            text,
            auto_dismiss_ms: Some(SUCCESS_DISMISS_MS),
        }
    }

    pub fn error(title: &str, text: String) -> ApiNotice {
        ApiNotice { level: NoticeLevel::Error, title: title.to_string(), text, auto_dismiss_ms: None }
    }

    pub fn warning(title: &str, text: String) -> ApiNotice {
        ApiNotice { level: NoticeLevel::Warning, title: title.to_string(), text, auto_dismiss_ms: None }
    }
}
