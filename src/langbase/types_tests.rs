//! Unit tests for Langbase API types.
//!
//! Tests request/response types, serialization, deserialization,
//! builder patterns and sentiment response normalisation.

use super::*;
use crate::sentiment::{Emotion, EmotionIntensity, Sentiment};
use serde_json::json;

// Message tests
#[test]
fn test_message_system() {
    let msg = Message::system("You are a helpful assistant");
    assert!(matches!(msg.role, MessageRole::System));
    assert_eq!(msg.content, "You are a helpful assistant");
}

#[test]
fn test_message_user() {
    let msg = Message::user("Hello, world!");
    assert!(matches!(msg.role, MessageRole::User));
    assert_eq!(msg.content, "Hello, world!");
}

#[test]
fn test_message_assistant() {
    let msg = Message::assistant("Hi there!");
    assert!(matches!(msg.role, MessageRole::Assistant));
    assert_eq!(msg.content, "Hi there!");
}

// PipeRequest tests
#[test]
fn test_pipe_request_new() {
    let req = PipeRequest::new("test-pipe", vec![Message::user("test")]);
    assert_eq!(req.name, "test-pipe");
    assert_eq!(req.messages.len(), 1);
    assert!(!req.stream);
}

#[test]
fn test_pipe_request_serialize() {
    let req = PipeRequest::new("sentiment", vec![Message::user("hi")]);
    let value = serde_json::to_value(&req).unwrap();

    assert_eq!(value["name"], "sentiment");
    assert_eq!(value["stream"], false);
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "hi");
}

#[test]
fn test_pipe_response_ignores_extra_fields() {
    let value = json!({
        "success": true,
        "completion": "{}",
        "threadId": "thread-1",
        "raw": {
            "model": "gpt-4o-mini",
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        }
    });
    let resp: PipeResponse = serde_json::from_value(value).unwrap();

    assert!(resp.success);
    assert_eq!(resp.completion, "{}");
}

#[test]
fn test_pipe_response_deserialize_minimal() {
    let resp: PipeResponse = serde_json::from_value(json!({ "completion": "ok" })).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.completion, "ok");
}

#[test]
fn test_create_pipe_response_only_needs_name() {
    let resp: CreatePipeResponse =
        serde_json::from_value(json!({ "name": "empathetic-reply-v1" })).unwrap();
    assert_eq!(resp.name, "empathetic-reply-v1");
    assert!(resp.url.is_none());
}

// CreatePipeRequest tests
#[test]
fn test_create_pipe_request_new() {
    let req = CreatePipeRequest::new("my-pipe");
    assert_eq!(req.name, "my-pipe");
    assert!(req.description.is_none());
    assert!(req.model.is_none());
}

#[test]
fn test_create_pipe_request_builder_chain() {
    let req = CreatePipeRequest::new("sentiment-analysis-v1")
        .with_description("classifier")
        .with_model("openai:gpt-4o-mini")
        .with_upsert(true)
        .with_json_output(true)
        .with_temperature(0.3)
        .with_max_tokens(500)
        .with_messages(vec![Message::system("prompt")]);

    assert_eq!(req.description.as_deref(), Some("classifier"));
    assert_eq!(req.model.as_deref(), Some("openai:gpt-4o-mini"));
    assert_eq!(req.upsert, Some(true));
    assert_eq!(req.json, Some(true));
    assert_eq!(req.temperature, Some(0.3));
    assert_eq!(req.max_tokens, Some(500));
    assert_eq!(req.messages.map(|m| m.len()), Some(1));
}

#[test]
fn test_create_pipe_request_serialize_skips_unset() {
    let value = serde_json::to_value(CreatePipeRequest::new("p").with_upsert(true)).unwrap();

    assert_eq!(value["name"], "p");
    assert_eq!(value["upsert"], true);
    assert!(value.get("model").is_none());
    assert!(value.get("messages").is_none());
}

// SentimentResponse tests
#[test]
fn test_sentiment_response_full() {
    let completion = r#"{
        "sentiment": "positive",
        "confidence": 0.92,
        "emotion": "excited",
        "emotion_intensity": "high",
        "reasoning": "Exclamation and praise"
    }"#;
    let judgment = SentimentResponse::from_completion(completion)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Positive);
    assert_eq!(judgment.confidence, 0.92);
    assert_eq!(judgment.emotion, Emotion::Excited);
    assert_eq!(judgment.emotion_intensity, EmotionIntensity::High);
    assert_eq!(judgment.reasoning, "Exclamation and praise");
}

#[test]
fn test_sentiment_response_in_code_block() {
    let completion = "```json\n{\"sentiment\": \"negative\", \"emotion\": \"sad\"}\n```";
    let judgment = SentimentResponse::from_completion(completion)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Negative);
    assert_eq!(judgment.emotion, Emotion::Sad);
}

#[test]
fn test_sentiment_response_missing_fields_use_defaults() {
    let judgment = SentimentResponse::from_completion(r#"{"sentiment": "negative"}"#)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Negative);
    assert_eq!(judgment.confidence, 0.5);
    assert_eq!(judgment.emotion, Emotion::Neutral);
    assert_eq!(judgment.emotion_intensity, EmotionIntensity::Medium);
    assert_eq!(judgment.reasoning, "Analysis completed.");
}

#[test]
fn test_sentiment_response_out_of_domain_values() {
    let completion = r#"{
        "sentiment": "ecstatic",
        "confidence": 7,
        "emotion": "melancholic",
        "emotion_intensity": "extreme",
        "reasoning": ""
    }"#;
    let judgment = SentimentResponse::from_completion(completion)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Neutral);
    assert_eq!(judgment.confidence, 1.0);
    assert_eq!(judgment.emotion, Emotion::Neutral);
    assert_eq!(judgment.emotion_intensity, EmotionIntensity::Medium);
    assert_eq!(judgment.reasoning, "Analysis completed.");
}

#[test]
fn test_sentiment_response_confidence_as_string() {
    let judgment = SentimentResponse::from_completion(r#"{"confidence": "0.25"}"#)
        .unwrap()
        .into_judgment();
    assert_eq!(judgment.confidence, 0.25);

    let judgment = SentimentResponse::from_completion(r#"{"confidence": -3}"#)
        .unwrap()
        .into_judgment();
    assert_eq!(judgment.confidence, 0.0);
}

#[test]
fn test_sentiment_response_case_insensitive() {
    let completion = r#"{"sentiment": "Positive", "emotion": "HOPEFUL", "emotion_intensity": "Low"}"#;
    let judgment = SentimentResponse::from_completion(completion)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Positive);
    assert_eq!(judgment.emotion, Emotion::Hopeful);
    assert_eq!(judgment.emotion_intensity, EmotionIntensity::Low);
}

#[test]
fn test_sentiment_response_with_trailing_prose() {
    let completion = "{\"sentiment\": \"positive\", \"confidence\": 0.9, \"emotion\": \"happy\"}\nHope this helps!";
    let judgment = SentimentResponse::from_completion(completion)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Positive);
    assert_eq!(judgment.confidence, 0.9);
    assert_eq!(judgment.emotion, Emotion::Happy);
}

#[test]
fn test_sentiment_response_after_bracketed_label() {
    let completion = "[analysis] {\"sentiment\": \"negative\", \"emotion\": \"frustrated\"}";
    let judgment = SentimentResponse::from_completion(completion)
        .unwrap()
        .into_judgment();

    assert_eq!(judgment.sentiment, Sentiment::Negative);
    assert_eq!(judgment.emotion, Emotion::Frustrated);
}

#[test]
fn test_sentiment_response_unparseable() {
    assert!(SentimentResponse::from_completion("I think it's positive").is_err());
    assert!(SentimentResponse::from_completion("{not json}").is_err());
}

#[test]
fn test_message_role_serialize() {
    assert_eq!(
        serde_json::to_string(&MessageRole::System).unwrap(),
        "\"system\""
    );
    assert_eq!(
        serde_json::to_string(&MessageRole::Assistant).unwrap(),
        "\"assistant\""
    );
}
