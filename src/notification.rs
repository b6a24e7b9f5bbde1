//! Conversion notifications.
//!
//! Input that is skipped during a conversion (unsupported entities, layer
//! names that carry no usable structural data, layers mixing entity kinds,
//! malformed numbers) is logged and also collected here, so callers can
//! inspect [`DrawingModel::notifications`](crate::DrawingModel) afterwards.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Entity type without a decoder.
    UnsupportedEntity,
    /// Layer name rejected by the classifier.
    InvalidLayer,
    /// Layer discarded because it mixes entity kinds.
    MixedLayer,
    /// Entity skipped because a value could not be parsed or its corners
    /// collapsed.
    Malformed,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedEntity => write!(f, "UnsupportedEntity"),
            Self::InvalidLayer => write!(f, "InvalidLayer"),
            Self::MixedLayer => write!(f, "MixedLayer"),
            Self::Malformed => write!(f, "Malformed"),
        }
    }
}

/// A single notification produced during a conversion.
#[derive(Debug, Clone)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during a conversion.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}
