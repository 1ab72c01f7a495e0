//! Conversation sessions.
//!
//! [`ConversationEngine`] owns one session: the transcript ([`History`]), the
//! sentiment records and the running [`ConversationState`]. Each user turn is
//! classified, compared with the previous judgment ([`MoodShift`]), mapped to
//! presentation hints ([`UiHints`]) and answered by the responder.

mod engine;
mod history;
mod mood_shift;
mod state;
mod ui_hints;

pub use engine::{
    clean_message, mood_context, ConversationEngine, ConversationStatistics, TurnOutcome,
};
pub use history::{History, Message, Role};
pub use mood_shift::{MoodShift, ShiftDirection};
pub use state::{ConversationState, EngagementLevel, SentimentTrend};
pub use ui_hints::{UiHints, DEFAULT_COLOR, DEFAULT_ICON};
