//! # Notifications
//!
//! Toasts raised by controllers and widgets. The UI (here: the CLI) drains
//! the queue and renders them.

use std::collections::VecDeque;
use std::fmt;

/// Toast styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
        }
    }

    /// A title-only toast.
    pub fn plain(title: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.title, description),
            None => f.write_str(&self.title),
        }
    }
}

/// FIFO of pending toasts.
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        match toast.variant {
            ToastVariant::Destructive => tracing::debug!(title = %toast.title, "Error toast"),
            ToastVariant::Default => tracing::debug!(title = %toast.title, "Toast"),
        }
        self.queue.push_back(toast);
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::success(title, description));
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::error(title, description));
    }

    /// Take every pending toast, oldest first.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.queue.drain(..).collect()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_is_fifo_and_empties_queue() {
        let mut notifications = Notifications::new();
        notifications.success("Deal Added", "New deal has been successfully added.");
        notifications.error("Export Failed", "HTTP 500: Internal Server Error");

        let toasts = notifications.drain();

        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, "Deal Added");
        assert!(!toasts[0].is_error());
        assert!(toasts[1].is_error());
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_display() {
        let toast = Toast::error("Failed to load deals", "Network error or server unavailable");
        assert_eq!(
            toast.to_string(),
            "Failed to load deals: Network error or server unavailable"
        );
        assert_eq!(Toast::plain("Saved", ToastVariant::Default).to_string(), "Saved");
    }
}
