//! User-visible notices
//!
//! Every confirmation and failure the user needs to see goes through this one
//! queue. Blocking notices must be dismissed before anything else can happen;
//! passive ones sit in the status line until the next key press.

use std::collections::VecDeque;

use crate::utils::errors::ErrorSeverity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: ErrorSeverity,
    pub message: String,
    pub blocking: bool,
}

impl Notice {
    pub fn alert(severity: ErrorSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            blocking: true,
        }
    }

    pub fn passive(severity: ErrorSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            blocking: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        self.queue.push_back(notice);
    }

    /// Oldest notice still waiting
    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// The oldest notice that demands acknowledgement, wherever it sits in the queue
    pub fn blocking(&self) -> Option<&Notice> {
        self.queue.iter().find(|n| n.blocking)
    }

    /// Acknowledge the oldest blocking notice, or the oldest notice when none blocks
    pub fn dismiss(&mut self) -> Option<Notice> {
        match self.queue.iter().position(|n| n.blocking) {
            Some(index) => self.queue.remove(index),
            None => self.queue.pop_front(),
        }
    }

    /// Drop passive notices at the head of the queue
    pub fn clear_passive(&mut self) {
        while self.queue.front().is_some_and(|n| !n.blocking) {
            self.queue.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_are_fifo() {
        let mut notices = Notices::default();
        notices.push(Notice::alert(ErrorSeverity::Info, "first"));
        notices.push(Notice::alert(ErrorSeverity::Error, "second"));
        assert_eq!(notices.dismiss().map(|n| n.message), Some("first".to_string()));
        assert_eq!(notices.current().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn test_clear_passive_stops_at_blocking() {
        let mut notices = Notices::default();
        notices.push(Notice::passive(ErrorSeverity::Warning, "stale"));
        notices.push(Notice::alert(ErrorSeverity::Error, "important"));
        notices.push(Notice::passive(ErrorSeverity::Warning, "later"));

        notices.clear_passive();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices.blocking().map(|n| n.message.as_str()), Some("important"));
    }

    #[test]
    fn test_alert_behind_passive_warning_still_blocks() {
        let mut notices = Notices::default();
        notices.push(Notice::passive(ErrorSeverity::Warning, "stale"));
        notices.push(Notice::alert(ErrorSeverity::Error, "important"));

        assert_eq!(notices.blocking().map(|n| n.message.as_str()), Some("important"));
        assert_eq!(notices.dismiss().map(|n| n.message), Some("important".to_string()));
        assert!(notices.blocking().is_none());
        assert_eq!(notices.current().map(|n| n.message.as_str()), Some("stale"));
    }
}
