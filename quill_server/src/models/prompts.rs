use std::fmt;

use crate::models::client::{Content, GenerateContentRequest, GenerationConfig};

/// A prompt is anything that renders to the text sent to the model.
pub trait Prompt: fmt::Display {
    fn generation_config(&self) -> Option<GenerationConfig> {
        None
    }

    fn to_generate_content_request(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(self.to_string())],
            generation_config: self.generation_config(),
        }
    }
}

/// How long a summary should be. Chosen from the request's tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
    Brief,
    Default,
}

impl SummaryLength {
    /// Case-insensitive match on the tone. Anything unrecognized gets the
    /// default instruction.
    pub fn from_tone(tone: &str) -> Self {
        match tone.to_lowercase().as_str() {
            "short" => Self::Short,
            "medium" => Self::Medium,
            "long" => Self::Long,
            "brief" => Self::Brief,
            _ => Self::Default,
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Short => "Summarize the following text in two to three sentences",
            Self::Medium => "Summarize the following text in one well-developed paragraph",
            Self::Long => {
                "Summarize the following text in detail, in two to three paragraphs \
                that cover all of its key points"
            }
            Self::Brief => "Summarize the following text in a single sentence",
            Self::Default => "Summarize the following text in a concise paragraph",
        };
        write!(f, "{repr}")
    }
}

pub struct SummaryPrompt<'a> {
    pub content: &'a str,
    pub length: SummaryLength,
}

impl Prompt for SummaryPrompt<'_> {}

impl fmt::Display for SummaryPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\n\n{}\n\nProvide only the summary without any introductory words or explanations.",
            self.length, self.content
        )
    }
}

pub struct ParagraphPrompt<'a> {
    pub content: &'a str,
    pub tone: &'a str,
    pub style: &'a str,
}

impl Prompt for ParagraphPrompt<'_> {}

impl fmt::Display for ParagraphPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generate a single, well-constructed paragraph with a {} tone in a {} style \
            based on the following content:\n\n{}\n\nProvide only the paragraph text itself, \
            without any introductory phrases or additional explanations.",
            self.tone, self.style, self.content
        )
    }
}

pub struct TitlePrompt<'a> {
    pub content: &'a str,
    pub tone: &'a str,
    pub style: &'a str,
    pub context: &'a str,
}

impl Prompt for TitlePrompt<'_> {
    fn generation_config(&self) -> Option<GenerationConfig> {
        Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
        })
    }
}

impl fmt::Display for TitlePrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generate four unique title suggestions for a {} about \"{}\". Use a {} tone \
            and a {} style, and give each title a different format. Respond only with a JSON \
            array of four strings, without any introductory text, explanations, or markdown.",
            self.context, self.content, self.tone, self.style
        )
    }
}

pub struct CaptionPrompt<'a> {
    pub content: &'a str,
    pub style: &'a str,
    pub context: &'a str,
}

impl Prompt for CaptionPrompt<'_> {}

impl fmt::Display for CaptionPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Create a catchy and engaging {} caption in a {} style based on the following \
            content:\n\n{}\n\nProvide only the caption text without any additional explanations \
            or introductory phrases.",
            self.context, self.style, self.content
        )
    }
}
