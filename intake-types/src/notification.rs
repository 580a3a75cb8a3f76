/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A user-visible notice with a title and a description.
///
/// Delivery is fire-and-forget: nothing acknowledges or stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Shown after a survey has been stored.
    pub fn submitted() -> Self {
        Self::success("Survey Submitted!", "Thank you for your valuable feedback.")
    }

    /// Shown when storing a survey failed.
    pub fn submit_failed() -> Self {
        Self::error("Error", "Failed to submit survey. Please try again.")
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}
