use std::{collections::VecDeque, time::Duration};

use crate::config::{TOAST_DURATION, TOAST_LIMIT};

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration: Duration,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description,
            variant: ToastVariant::Success,
            duration: TOAST_DURATION,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
            duration: TOAST_DURATION,
        }
    }
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: ToastId,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    /// Adds a toast and returns the id it was assigned.
    pub fn push(&mut self, mut toast: Toast) -> ToastId {
        self.next_id += 1;
        toast.id = self.next_id;
        if self.toasts.len() == TOAST_LIMIT {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
        self.next_id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::success("Message envoyé !", None));
        let second = queue.push(Toast::error("Erreur", "boom"));
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        queue.dismiss(first);
        let left: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(left, vec!["Erreur"]);

        // dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..(TOAST_LIMIT + 2) {
            queue.push(Toast::success(format!("toast {i}"), None));
        }
        assert_eq!(queue.len(), TOAST_LIMIT);
        assert_eq!(queue.iter().next().map(|t| t.title.as_str()), Some("toast 2"));
    }

    #[test]
    fn test_default_duration() {
        let toast = Toast::error("Erreur", "x");
        assert_eq!(toast.duration, Duration::from_secs(5));
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }
}
