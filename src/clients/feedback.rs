//! Haptic feedback collaborator.
//!
//! Fire-and-forget; the core never observes a result. The production
//! implementation lives in the host shell — this crate ships a silent one
//! and a recording one for tests.

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    Light,
    Medium,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

pub trait FeedbackClient: Send + Sync {
    fn generate_feedback(&self, style: FeedbackStyle);
    fn generate_notification_feedback(&self, kind: NotificationKind);
}

/// Does nothing; the default for previews and headless environments.
pub struct NoopFeedback;

impl FeedbackClient for NoopFeedback {
    fn generate_feedback(&self, _style: FeedbackStyle) {}
    fn generate_notification_feedback(&self, _kind: NotificationKind) {}
}

/// Records every generated feedback for assertions.
#[derive(Default)]
pub struct RecordingFeedback {
    impacts: Mutex<Vec<FeedbackStyle>>,
    notifications: Mutex<Vec<NotificationKind>>,
}

impl RecordingFeedback {
    pub fn impacts(&self) -> Vec<FeedbackStyle> {
        self.impacts.lock().clone()
    }

    pub fn notifications(&self) -> Vec<NotificationKind> {
        self.notifications.lock().clone()
    }
}

impl FeedbackClient for RecordingFeedback {
    fn generate_feedback(&self, style: FeedbackStyle) {
        self.impacts.lock().push(style);
    }

    fn generate_notification_feedback(&self, kind: NotificationKind) {
        self.notifications.lock().push(kind);
    }
}
