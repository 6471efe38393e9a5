//! Alert dialog model
//!
//! Describes what a transient dialog shows. The desktop UI renders it; the
//! core only decides its content.

use std::collections::VecDeque;

/// What pressing a dialog button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogActionKind {
    /// Close the dialog
    Dismiss,
    /// Close the dialog, styled as a cancel button
    Cancel,
    /// Subscribe, then close the dialog
    Subscribe,
}

/// A dialog button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogAction {
    pub label: String,
    pub kind: DialogActionKind,
}

impl DialogAction {
    pub fn new(label: impl Into<String>, kind: DialogActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    pub fn dismiss(label: impl Into<String>) -> Self {
        Self::new(label, DialogActionKind::Dismiss)
    }
}

/// A modal alert with a title, a message and one or more buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDialog {
    pub title: String,
    pub message: String,
    pub actions: Vec<DialogAction>,
}

impl AlertDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions: Vec::new(),
        }
    }

    /// Append a button
    pub fn with_action(mut self, action: DialogAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Whether any button subscribes the user
    pub fn offers_subscription(&self) -> bool {
        self.actions
            .iter()
            .any(|a| a.kind == DialogActionKind::Subscribe)
    }
}

/// Dialogs waiting to be shown, one at a time
///
/// A dialog presented while another is open waits behind it and is shown
/// after the open one is dismissed. Nothing presented is ever dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogQueue {
    current: Option<AlertDialog>,
    waiting: VecDeque<AlertDialog>,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dialog on screen, if any
    pub fn current(&self) -> Option<&AlertDialog> {
        self.current.as_ref()
    }

    /// Number of dialogs behind the current one
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Show `dialog` now, or after the ones already queued
    pub fn present(&mut self, dialog: AlertDialog) {
        if self.current.is_none() {
            self.current = Some(dialog);
        } else {
            self.waiting.push_back(dialog);
        }
    }

    /// Close the current dialog and bring up the next one
    pub fn dismiss(&mut self) -> Option<&AlertDialog> {
        self.current = self.waiting.pop_front();
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_action_order() {
        let dialog = AlertDialog::new("t", "m")
            .with_action(DialogAction::new("Отмена", DialogActionKind::Cancel))
            .with_action(DialogAction::new("Оформить", DialogActionKind::Subscribe));

        let labels: Vec<_> = dialog.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Отмена", "Оформить"]);
        assert!(dialog.offers_subscription());
    }

    #[test]
    fn plain_dialog_offers_nothing() {
        let dialog = AlertDialog::new("t", "m").with_action(DialogAction::dismiss("OK"));
        assert!(!dialog.offers_subscription());
    }

    #[test]
    fn queue_shows_first_dialog_immediately() {
        let mut queue = DialogQueue::new();
        assert!(queue.current().is_none());

        queue.present(AlertDialog::new("Детали", "m"));
        assert_eq!(queue.current().map(|d| d.title.as_str()), Some("Детали"));
        assert_eq!(queue.waiting(), 0);
    }

    #[test]
    fn late_dialog_waits_for_the_open_one() {
        let mut queue = DialogQueue::new();
        queue.present(AlertDialog::new("Детали", "m"));
        queue.present(AlertDialog::new("AI Спокойное настрой", "m"));

        // the open dialog is not replaced
        assert_eq!(queue.current().map(|d| d.title.as_str()), Some("Детали"));
        assert_eq!(queue.waiting(), 1);

        let next = queue.dismiss().map(|d| d.title.clone());
        assert_eq!(next.as_deref(), Some("AI Спокойное настрой"));
        assert!(queue.dismiss().is_none());
        assert!(queue.current().is_none());
    }

    #[test]
    fn dismiss_on_empty_queue_is_a_no_op() {
        let mut queue = DialogQueue::new();
        assert!(queue.dismiss().is_none());
        assert_eq!(queue, DialogQueue::new());
    }
}
