use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::{ConversationState, History, Message, MoodShift, Role, SentimentTrend, UiHints};
use crate::collaborators::{Classifier, ReplyContext, Responder};
use crate::config::ConversationConfig;
use crate::error::{EngineError, EngineResult};
use crate::sentiment::store::{dominant, recent_mood};
use crate::sentiment::{SentimentRecord, SentimentStore, SentimentSummary};

/// Result of processing one user turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    /// Assistant reply.
    pub reply: String,
    /// Validated judgment for the user message.
    pub judgment: SentimentRecord,
    /// State after the turn.
    pub state: ConversationState,
    /// Polarity change against the previous turn, if any.
    pub mood_shift: Option<MoodShift>,
    /// Presentation hints for the detected emotion.
    pub ui_hints: UiHints,
    /// Mood line handed to the responder.
    pub mood_context: String,
}

/// Snapshot of a session's counters and aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationStatistics {
    /// User and assistant turns; the persona is not counted.
    pub total_messages: usize,
    /// User turns.
    pub user_messages: usize,
    /// Assistant turns.
    pub assistant_messages: usize,
    /// Aggregates over the sentiment history.
    pub sentiment: SentimentSummary,
    /// Current conversation state.
    pub state: ConversationState,
}

/// One conversation session.
///
/// Owns the transcript, the sentiment records and the running state. Turns
/// are processed one at a time through `&mut self`; a turn is committed only
/// after both collaborators succeeded, so a failed turn leaves the session
/// exactly as it was.
pub struct ConversationEngine<C, R> {
    classifier: C,
    responder: R,
    settings: ConversationConfig,
    history: History,
    sentiments: SentimentStore,
    state: ConversationState,
}

impl<C: Classifier, R: Responder> ConversationEngine<C, R> {
    /// Start a session seeded with the configured persona
    pub fn new(classifier: C, responder: R, settings: ConversationConfig) -> Self {
        let history = History::new(settings.persona.clone());
        Self {
            classifier,
            responder,
            settings,
            history,
            sentiments: SentimentStore::new(),
            state: ConversationState::new(),
        }
    }

    /// Classify a user message, update the mood state and append both the
    /// user turn and the reply.
    pub async fn process_turn(&mut self, text: &str) -> EngineResult<TurnOutcome> {
        let start = Instant::now();
        let text = clean_message(text, self.settings.max_message_length)?;

        let record = self.classify(&text).await?;

        let mood_shift = MoodShift::detect(self.sentiments.last(), &record);
        let mut next_state = self.state.clone();
        next_state.update(&record);
        let ui_hints = UiHints::new(record.emotion, record.emotion_intensity);
        let mood_context = self.describe_mood(&record);

        let context = ReplyContext {
            persona: self.history.persona().to_string(),
            recent_turns: self
                .history
                .recent(self.settings.reply_context_turns)
                .to_vec(),
            mood_context: mood_context.clone(),
            user_message: text.clone(),
        };
        let reply = self.responder.reply(&context).await.map_err(|e| {
            warn!(error = %e, "Reply generation failed, turn discarded");
            EngineError::Reply(e)
        })?;

        self.sentiments.append(record.clone());
        self.state = next_state;
        self.history
            .append(Message::user_with_sentiment(text, record.clone()));
        self.history.append(Message::assistant(reply.clone()));

        if let Some(shift) = &mood_shift {
            info!(
                from = %shift.from,
                to = %shift.to,
                direction = %shift.direction,
                "Mood shift detected"
            );
        }
        info!(
            turn = self.sentiments.len(),
            sentiment = %record.sentiment,
            emotion = %record.emotion,
            engagement = %self.state.engagement_level,
            latency_ms = start.elapsed().as_millis(),
            "Turn processed"
        );

        Ok(TurnOutcome {
            reply,
            judgment: record,
            state: self.state.clone(),
            mood_shift,
            ui_hints,
            mood_context,
        })
    }

    /// Classify a message without touching the session.
    pub async fn analyze(&self, text: &str) -> EngineResult<SentimentRecord> {
        let text = clean_message(text, self.settings.max_message_length)?;
        self.classify(&text).await
    }

    async fn classify(&self, text: &str) -> EngineResult<SentimentRecord> {
        let judgment = self.classifier.classify(text).await.map_err(|e| {
            warn!(error = %e, "Classification failed");
            EngineError::Classification(e)
        })?;
        SentimentRecord::from_judgment(text, judgment)
    }

    /// Mood line for the responder, computed as if `current` were already
    /// recorded.
    fn describe_mood(&self, current: &SentimentRecord) -> String {
        let mut records: Vec<&SentimentRecord> = self.sentiments.iter().collect();
        records.push(current);
        mood_context(current, &records, self.settings.recent_mood_window)
    }

    /// Full transcript, persona first
    pub fn history(&self) -> &[Message] {
        self.history.messages()
    }

    /// Judgments in turn order, one per user message
    pub fn sentiment_history(&self) -> &[SentimentRecord] {
        self.sentiments.records()
    }

    /// Current mood state
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Active persona text
    pub fn persona(&self) -> &str {
        self.history.persona()
    }

    /// User message contents in order
    pub fn user_messages(&self) -> Vec<&str> {
        self.history.user_messages()
    }

    /// Counters and sentiment aggregates for the session
    pub fn statistics(&self) -> ConversationStatistics {
        let user_messages = self.history.count(Role::User);
        let assistant_messages = self.history.count(Role::Assistant);

        ConversationStatistics {
            total_messages: user_messages + assistant_messages,
            user_messages,
            assistant_messages,
            sentiment: self.sentiments.summary(self.settings.recent_mood_window),
            state: self.state.clone(),
        }
    }

    /// Drop every turn, judgment and state change.
    ///
    /// The history restarts with `persona`, or with the current persona when
    /// none is given.
    pub fn reset(&mut self, persona: Option<String>) {
        let persona = persona.unwrap_or_else(|| self.history.persona().to_string());
        self.history.reset(persona);
        self.sentiments.clear();
        self.state.reset();
        info!("Conversation reset");
    }

    /// Replace the active persona, keeping the transcript.
    pub fn set_persona(&mut self, persona: impl Into<String>) {
        self.history.set_persona(persona);
        debug!("Persona updated");
    }

    /// Record the trend reported by an external trend analysis.
    pub fn set_sentiment_trend(&mut self, trend: SentimentTrend) {
        self.state.set_sentiment_trend(trend);
    }
}

/// Build the one-line mood summary handed to the responder.
///
/// `records` must already include `current` as its last element.
pub fn mood_context(current: &SentimentRecord, records: &[&SentimentRecord], window: usize) -> String {
    let mut context = format!("Current: {} ({})", current.sentiment, current.emotion);

    let recent = recent_mood(records, window);
    if recent != current.sentiment {
        context.push_str(&format!(" | Shift detected from {}", recent));
    }

    if records.len() > 3 {
        if let Some(overall) = dominant(records.iter().map(|r| r.sentiment)) {
            context.push_str(&format!(" | Overall trend: {}", overall));
        }
    }

    context
}

/// Normalise user input and enforce length limits.
///
/// Control characters are dropped, whitespace runs collapse to a single
/// space and the ends are trimmed.
pub fn clean_message(text: &str, max_length: usize) -> EngineResult<String> {
    let visible: String = text
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    let cleaned = visible.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        return Err(EngineError::Validation {
            field: "text".to_string(),
            reason: "Message cannot be empty".to_string(),
        });
    }

    if cleaned.chars().count() > max_length {
        return Err(EngineError::Validation {
            field: "text".to_string(),
            reason: format!("Message cannot exceed {} characters", max_length),
        });
    }

    Ok(cleaned)
}
