//! Content gating for catalog entries
//!
//! The only access-control rule in the app: a premium meditation is locked
//! until the user subscribes.

use tracing::debug;

use crate::dialog::{AlertDialog, DialogAction, DialogActionKind};
use crate::types::MeditationEntry;

/// Title shown on a locked card in place of the meditation title
pub const LOCKED_TITLE: &str = "Premium";

/// Whether an entry can be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Unlocked,
    Locked,
}

impl Access {
    pub fn is_locked(&self) -> bool {
        matches!(self, Access::Locked)
    }
}

/// Decide access for an entry.
pub fn access_for(entry: &MeditationEntry, is_subscribed: bool) -> Access {
    if entry.is_premium && !is_subscribed {
        Access::Locked
    } else {
        Access::Unlocked
    }
}

/// Shorthand for `access_for(..).is_locked()`
pub fn is_locked(entry: &MeditationEntry, is_subscribed: bool) -> bool {
    access_for(entry, is_subscribed).is_locked()
}

/// Result of tapping a meditation card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Entry is unlocked; show its details
    Details(AlertDialog),
    /// Entry is locked and the caller handles upgrades itself
    UpgradeRequested,
    /// Entry is locked and nobody handles upgrades; prompt to subscribe
    SubscribePrompt(AlertDialog),
}

/// Decide what a tap on `entry` does.
///
/// A locked entry never yields its content.
pub fn tap_meditation(entry: &MeditationEntry, is_subscribed: bool, has_upgrade_handler: bool) -> TapOutcome {
    match access_for(entry, is_subscribed) {
        Access::Unlocked => TapOutcome::Details(details_dialog(entry)),
        Access::Locked if has_upgrade_handler => {
            debug!(id = entry.id, "Locked meditation tapped, requesting upgrade");
            TapOutcome::UpgradeRequested
        }
        Access::Locked => {
            debug!(id = entry.id, "Locked meditation tapped, prompting to subscribe");
            TapOutcome::SubscribePrompt(subscribe_prompt())
        }
    }
}

/// Dialog describing an unlocked meditation
pub fn details_dialog(entry: &MeditationEntry) -> AlertDialog {
    AlertDialog::new(
        entry.title,
        format!("{}\n\nДлительность: {}", entry.description, entry.duration),
    )
    .with_action(DialogAction::dismiss("OK"))
}

/// Generic prompt shown for locked content
pub fn subscribe_prompt() -> AlertDialog {
    AlertDialog::new(
        "Premium контент",
        "Эта медитация доступна только для подписчиков Premium. Хотите оформить подписку?",
    )
    .with_action(DialogAction::new("Отмена", DialogActionKind::Cancel))
    .with_action(DialogAction::new("Оформить", DialogActionKind::Subscribe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn free_entry_is_always_unlocked() {
        let catalog = Catalog::new();
        let morning = catalog.meditation("1").unwrap();
        assert_eq!(access_for(morning, false), Access::Unlocked);
        assert_eq!(access_for(morning, true), Access::Unlocked);
    }

    #[test]
    fn premium_entry_unlocks_with_subscription() {
        let catalog = Catalog::new();
        let sleep = catalog.meditation("2").unwrap();
        assert_eq!(access_for(sleep, false), Access::Locked);
        assert_eq!(access_for(sleep, true), Access::Unlocked);
    }

    #[test]
    fn unlocked_tap_shows_details() {
        let catalog = Catalog::new();
        let morning = catalog.meditation("1").unwrap();

        match tap_meditation(morning, false, true) {
            TapOutcome::Details(dialog) => {
                assert_eq!(dialog.title, "Утреннее пробуждение");
                assert_eq!(
                    dialog.message,
                    "Настройтесь на продуктивный день\n\nДлительность: 10 мин"
                );
                assert!(!dialog.offers_subscription());
            }
            other => panic!("expected details, got {:?}", other),
        }
    }

    #[test]
    fn locked_tap_prefers_upgrade_handler() {
        let catalog = Catalog::new();
        let sleep = catalog.meditation("2").unwrap();
        assert_eq!(tap_meditation(sleep, false, true), TapOutcome::UpgradeRequested);
    }

    #[test]
    fn locked_tap_without_handler_prompts() {
        let catalog = Catalog::new();
        let sleep = catalog.meditation("2").unwrap();

        match tap_meditation(sleep, false, false) {
            TapOutcome::SubscribePrompt(dialog) => {
                assert_eq!(dialog.title, "Premium контент");
                assert!(dialog.offers_subscription());
                assert!(!dialog.message.contains(sleep.description));
            }
            other => panic!("expected prompt, got {:?}", other),
        }
    }
}
