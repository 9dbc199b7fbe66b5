use super::validation::{ChatRequest, DetectionData, SummarizeRequest};
use crate::config::AssistantConfig;

pub const SUMMARIZE_PREAMBLE: &str = "Your task is to summarize the following text concisely while preserving key information and meaning:";

pub const SUMMARIZE_CLOSING: &str = "Provide a clear and focused summary.";

pub const SCENARIO_PREAMBLE: &str = "You are a helpful and observant visual assistant. A user cannot see the image, so your task is to describe the visible scene clearly and naturally, as if you're standing next to them.

Based on the detected objects from an image, including their labels (e.g., \"dog\", \"car\", \"bench\"), their approximate positions within the frame (e.g., \"bottom-left\", \"centre-right\", \"top\"), and confidence levels, describe the image as a human would, using natural, flowing language that paints a vivid mental picture.

Be descriptive, but do not make assumptions about things that aren't detected. Use spatial relationships and grouping to make the scene feel real.

Imagine you are describing the scene out loud to a visually impaired person, focusing on clarity, simplicity, and imagery.

The detected objects in the image are:
";

/// System prompt used when `llm.system_prompt` is not configured.
pub fn default_system_prompt(assistant: &AssistantConfig) -> String {
    format!(
        "You are {}, a helpful AI assistant talking with {}. \
         Please respond to the user's request accurately and concisely.",
        assistant.name, assistant.user_name
    )
}

pub fn chat_prompt(request: &ChatRequest) -> String {
    match request.user_name() {
        Some(user_name) => format!("{}: {}", user_name, request.query()),
        None => request.query().to_string(),
    }
}

pub fn summarize_prompt(request: &SummarizeRequest) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        SUMMARIZE_PREAMBLE,
        request.text(),
        SUMMARIZE_CLOSING
    )
}

/// `0.8765` -> `87.65%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// One `- <category> at <position> (confidence: <pct>)` line per detection,
/// categories and detections in request order.
pub fn detection_lines(data: &DetectionData) -> String {
    data.groups()
        .iter()
        .flat_map(|group| {
            group.detections().iter().map(move |detection| {
                format!(
                    "- {} at {} (confidence: {})",
                    group.category(),
                    detection.position(),
                    format_confidence(detection.confidence())
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn scenario_prompt(data: &DetectionData) -> String {
    format!("{}\n{}", SCENARIO_PREAMBLE, detection_lines(data))
}
