use quill::GenerationRequest;
use serde_json::json;

use quill_server::models::{
    client::{GenerateContentResponse, ModelOutcome},
    errors::ErrorKind,
    generation::{EndpointKind, ValidatedRequest, parse_titles},
    prompts::{SummaryLength, SummaryPrompt},
};

const ALL_KINDS: [EndpointKind; 4] = [
    EndpointKind::Summarize,
    EndpointKind::Paragraph,
    EndpointKind::Title,
    EndpointKind::Caption,
];

fn outcome(value: serde_json::Value) -> Result<ModelOutcome, serde_json::Error> {
    Ok(serde_json::from_value::<GenerateContentResponse>(value)?.into_outcome())
}

#[test]
fn outcome_classification() -> Result<(), Box<dyn std::error::Error>> {
    let text = outcome(json!({
        "candidates": [
            { "content": { "parts": [{ "text": "hello" }, { "text": "ignored" }] } },
            { "content": { "parts": [{ "text": "second candidate" }] } }
        ]
    }))?;
    assert_eq!(text, ModelOutcome::Text("hello".to_string()));

    let safety = outcome(json!({
        "candidates": [
            { "content": { "parts": [{ "text": "partial" }] }, "finishReason": "SAFETY" }
        ]
    }))?;
    assert_eq!(safety, ModelOutcome::SafetyRejected);

    let blocked = outcome(json!({ "promptFeedback": { "blockReason": "OTHER" } }))?;
    assert_eq!(blocked, ModelOutcome::SafetyRejected);

    // Other finish reasons still carry usable text.
    let max_tokens = outcome(json!({
        "candidates": [
            { "content": { "parts": [{ "text": "cut off" }] }, "finishReason": "MAX_TOKENS" }
        ]
    }))?;
    assert_eq!(max_tokens, ModelOutcome::Text("cut off".to_string()));

    let malformed = outcome(json!({ "candidates": [{ "content": {} }] }))?;
    assert_eq!(malformed, ModelOutcome::Malformed);

    // Only an empty string counts as missing text.
    let empty = outcome(json!({
        "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
    }))?;
    assert_eq!(empty, ModelOutcome::Malformed);
    let blank = outcome(json!({
        "candidates": [{ "content": { "parts": [{ "text": " \n" }] } }]
    }))?;
    assert_eq!(blank, ModelOutcome::Text(" \n".to_string()));
    Ok(())
}

#[test]
fn title_parsing() {
    assert_eq!(
        parse_titles("[\"One\", \"Two\"]"),
        Some(vec!["One".to_string(), "Two".to_string()])
    );
    assert_eq!(
        parse_titles("  ```\n[\"One\"]\n```  "),
        Some(vec!["One".to_string()])
    );
    assert_eq!(parse_titles("[]"), None);
    assert_eq!(parse_titles("One\nTwo"), None);
    assert_eq!(parse_titles("[\"One\", null]"), None);
}

#[test]
fn summary_length_from_tone() {
    assert_eq!(SummaryLength::from_tone("short"), SummaryLength::Short);
    assert_eq!(SummaryLength::from_tone("Medium"), SummaryLength::Medium);
    assert_eq!(SummaryLength::from_tone("LONG"), SummaryLength::Long);
    assert_eq!(SummaryLength::from_tone("brief"), SummaryLength::Brief);
    assert_eq!(SummaryLength::from_tone("default"), SummaryLength::Default);
    assert_eq!(SummaryLength::from_tone("concise"), SummaryLength::Default);
    assert_eq!(SummaryLength::from_tone(" short"), SummaryLength::Default);
    assert_eq!(SummaryLength::from_tone(""), SummaryLength::Default);
}

#[test]
fn summary_prompt_wraps_content() {
    let prompt = SummaryPrompt {
        content: "The quick brown fox.",
        length: SummaryLength::Long,
    }
    .to_string();
    assert!(prompt.starts_with("Summarize the following text in detail"));
    assert!(prompt.contains("\n\nThe quick brown fox.\n\n"));
}

#[test]
fn validation_fills_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerationRequest::builder().content("cats").build();
    let title = EndpointKind::Title.validate(request.clone())?;
    assert_eq!(
        title,
        ValidatedRequest {
            content: "cats".to_string(),
            tone: "concise".to_string(),
            style: "neutral".to_string(),
            context: "blog".to_string(),
        }
    );
    let caption = EndpointKind::Caption.validate(request)?;
    assert_eq!(caption.context, "Instagram");

    let request = GenerationRequest::builder()
        .content("cats")
        .tone("warm")
        .style("poetic")
        .context("newsletter")
        .build();
    let paragraph = EndpointKind::Paragraph.validate(request)?;
    assert_eq!(paragraph.tone, "warm");
    assert_eq!(paragraph.style, "poetic");
    assert_eq!(paragraph.context, "newsletter");
    Ok(())
}

#[test]
fn validation_rejects_missing_content() {
    for kind in ALL_KINDS {
        let err = kind
            .validate(GenerationRequest::default())
            .expect_err("content is required");
        assert_eq!(err.kind, ErrorKind::InvalidRequest);
        assert_eq!(err.message, kind.missing_content_message());
    }
}

#[test]
fn every_prompt_forbids_preamble() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerationRequest::builder().content("solar power").build();
    for kind in ALL_KINDS {
        let validated = kind.validate(request.clone())?;
        let generate_content_request = kind.to_generate_content_request(&validated);
        let prompt = generate_content_request
            .prompt()
            .ok_or("prompt is never empty")?;
        assert!(prompt.contains("solar power"));
        assert!(prompt.contains("without any"), "{kind:?}: {prompt}");
        assert_eq!(
            generate_content_request.generation_config.is_some(),
            kind == EndpointKind::Title
        );
    }
    Ok(())
}
