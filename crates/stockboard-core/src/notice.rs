//! Error Notices
//!
//! The single sink failed requests are routed to. The browser shows each
//! notice as a toast and dismisses it on click or after a delay.

use crate::error::ApiResult;

/// One error notice on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Notices currently shown, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    issued: u64,
}

impl NoticeBoard {
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.issued += 1;
        self.notices.push(Notice {
            id: self.issued,
            message: message.into(),
        });
        self.issued
    }

    /// Post the error of a failed operation; successes post nothing.
    pub fn report<T>(&mut self, result: &ApiResult<T>) -> Option<u64> {
        match result {
            Ok(_) => None,
            Err(err) => Some(self.push(err.to_string())),
        }
    }

    /// Remove notice `id`; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }
}
