//! AI mood picker and canned responses
//!
//! There is no inference. Each mood maps to one fixed meditation text. The
//! response dialog opens [`MOOD_RESPONSE_DELAY`] after the picker closes so the
//! two dialogs never overlap.

use std::time::Duration;

use tracing::{debug, error};

use crate::dialog::{AlertDialog, DialogAction};
use crate::error::ZenResult;
use crate::types::{MoodEntry, MoodId};

/// Gap between closing the picker and opening the response dialog
pub const MOOD_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Fixed response text for a mood
pub fn canned_response(mood: MoodId) -> &'static str {
    match mood {
        MoodId::Happy => "🌟 Радостная медитация дня:\n\n\"Сегодня прекрасный день для того, чтобы наполнить свою жизнь радостью! Представьте, как солнечные лучи проникают в ваше сердце, принося тепло и свет. Почувствуйте, как каждая клеточка вашего тела вибрирует от счастья. Вы достойны этой радости, и она уже с вами!\"",
        MoodId::Calm => "🌸 Спокойная медитация дня:\n\n\"В этот момент позвольте себе просто быть. Ваше дыхание спокойно и размеренно, как волны океана. Все мысли могут подождать - сейчас время для внутреннего покоя. Вы в безопасности, вы защищены, вы спокойны.\"",
        MoodId::Focused => "🎯 Сосредоточенная медитация дня:\n\n\"Ваше внимание подобно лазерному лучу - четкое, мощное и направленное. Каждый вдох помогает вам сосредоточиться на настоящем моменте. Ваши цели ясны, ваш путь определен. Вы способны достичь всего, на что направите свою энергию.\"",
    }
}

/// Look up a response by string identifier.
///
/// An identifier outside the closed set is an invariant break and is logged
/// at `error` before being returned.
pub fn lookup_response(id: &str) -> ZenResult<&'static str> {
    match id.parse::<MoodId>() {
        Ok(mood) => Ok(canned_response(mood)),
        Err(e) => {
            error!(id, "No canned response for mood");
            Err(e)
        }
    }
}

/// Dialog presenting the response for `mood`
pub fn response_dialog(mood: &MoodEntry) -> AlertDialog {
    AlertDialog::new(format!("AI {} настрой", mood.name), canned_response(mood.id))
        .with_action(DialogAction::dismiss("Понятно"))
}

/// A response waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResponse {
    pub mood: MoodId,
    pub dialog: AlertDialog,
    pub delay: Duration,
}

impl PendingResponse {
    /// Wait out the delay and hand back the dialog.
    ///
    /// Dropping the future before it completes drops the dialog with it, so a
    /// cancelled task never shows anything.
    pub async fn arrive(self) -> AlertDialog {
        tokio::time::sleep(self.delay).await;
        debug!(mood = %self.mood, "Mood response ready");
        self.dialog
    }
}

/// Picker modal state owned by the browse view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodPicker {
    modal_open: bool,
    selected: Option<MoodId>,
}

impl MoodPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    /// Last mood chosen in this session, shown in the header
    pub fn selected(&self) -> Option<MoodId> {
        self.selected
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    pub fn close(&mut self) {
        self.modal_open = false;
    }

    /// Choose a mood: close the modal now, respond after the delay.
    pub fn select(&mut self, mood: &MoodEntry) -> PendingResponse {
        self.modal_open = false;
        self.selected = Some(mood.id);
        debug!(mood = %mood.id, "Mood selected");

        PendingResponse {
            mood: mood.id,
            dialog: response_dialog(mood),
            delay: MOOD_RESPONSE_DELAY,
        }
    }
}
