use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Emotion, Sentiment, SentimentRecord};

/// Append-only, insertion-ordered collection of sentiment records.
///
/// Records are never reordered or removed individually; [`clear`](Self::clear)
/// is the only way to drop them.
#[derive(Debug, Clone, Default)]
pub struct SentimentStore {
    records: Vec<SentimentRecord>,
}

/// Snapshot of every aggregate the store can compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Number of judgments.
    pub total_messages: usize,
    /// Most frequent sentiment, first seen wins ties.
    pub dominant_sentiment: Option<Sentiment>,
    /// Most frequent emotion, first seen wins ties.
    pub dominant_emotion: Option<Emotion>,
    /// Mean confidence, 0.0 when empty.
    pub average_confidence: f64,
    /// Counts for all three sentiments.
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    /// Counts for observed emotions only.
    pub emotion_distribution: BTreeMap<Emotion, usize>,
    /// Dominant sentiment over the recent window.
    pub recent_mood: Sentiment,
}

impl SentimentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the store.
    pub fn append(&mut self, record: SentimentRecord) {
        self.records.push(record);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in insertion order
    pub fn records(&self) -> &[SentimentRecord] {
        &self.records
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, SentimentRecord> {
        self.records.iter()
    }

    /// The most recently appended record.
    pub fn last(&self) -> Option<&SentimentRecord> {
        self.records.last()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no judgment has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most frequent sentiment; ties go to the one seen first.
    pub fn dominant_sentiment(&self) -> Option<Sentiment> {
        dominant(self.records.iter().map(|r| r.sentiment))
    }

    /// Most frequent emotion; ties go to the one seen first.
    pub fn dominant_emotion(&self) -> Option<Emotion> {
        dominant(self.records.iter().map(|r| r.emotion))
    }

    /// Mean confidence, `0.0` when empty.
    pub fn average_confidence(&self) -> f64 {
        average_confidence(self.records.iter())
    }

    /// Counts for all three sentiments, zero-filled.
    pub fn sentiment_distribution(&self) -> BTreeMap<Sentiment, usize> {
        let mut distribution: BTreeMap<Sentiment, usize> =
            Sentiment::ALL.into_iter().map(|s| (s, 0)).collect();
        for record in &self.records {
            *distribution.entry(record.sentiment).or_insert(0) += 1;
        }
        distribution
    }

    /// Counts for the emotions actually observed.
    pub fn emotion_distribution(&self) -> BTreeMap<Emotion, usize> {
        let mut distribution = BTreeMap::new();
        for record in &self.records {
            *distribution.entry(record.emotion).or_insert(0) += 1;
        }
        distribution
    }

    /// Dominant sentiment over the last `window` records.
    ///
    /// Uses every record when fewer than `window` exist and falls back to
    /// neutral on an empty store. A zero window is treated as one.
    pub fn recent_mood(&self, window: usize) -> Sentiment {
        recent_mood(&self.records.iter().collect::<Vec<_>>(), window)
    }

    /// Bundle every aggregate into one snapshot.
    pub fn summary(&self, window: usize) -> SentimentSummary {
        SentimentSummary {
            total_messages: self.len(),
            dominant_sentiment: self.dominant_sentiment(),
            dominant_emotion: self.dominant_emotion(),
            average_confidence: self.average_confidence(),
            sentiment_distribution: self.sentiment_distribution(),
            emotion_distribution: self.emotion_distribution(),
            recent_mood: self.recent_mood(window),
        }
    }
}

/// Count `values` in first-seen order, then pick the highest count, replacing
/// the leader only on a strictly greater count so the first-seen value wins a
/// tie.
pub(crate) fn dominant<T, I>(values: I) -> Option<T>
where
    T: Copy + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value)
}

pub(crate) fn average_confidence<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a SentimentRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.confidence, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

pub(crate) fn recent_mood(records: &[&SentimentRecord], window: usize) -> Sentiment {
    let window = window.max(1);
    let start = records.len().saturating_sub(window);
    dominant(records[start..].iter().map(|r| r.sentiment)).unwrap_or_default()
}
