//! UI Components for ZenPulse.

mod alert_dialog;
mod meditation_card;
mod mood_modal;
mod plan_card;

pub use alert_dialog::AlertDialogView;
pub use meditation_card::MeditationCard;
pub use mood_modal::MoodModal;
pub use plan_card::PlanCard;
