//! Checks raw payloads and turns them into request values that the
//! dispatcher can trust. The validated types have no public constructors.

use super::types::{ChatPayload, DetectionPayload, ScenarioPayload, SummarizePayload};
use crate::error::ValidationError;

/// Shortest text, in characters after trimming, accepted for summarization.
pub const MIN_SUMMARY_CHARS: usize = 10;

/// The only detector status the scenario endpoint accepts.
pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    query: String,
    user_name: Option<String>,
}

impl ChatRequest {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizeRequest {
    text: String,
}

impl SummarizeRequest {
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    object_id: String,
    position: String,
    confidence: f64,
}

impl Detection {
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionGroup {
    category: String,
    detections: Vec<Detection>,
}

impl DetectionGroup {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionData {
    filename: String,
    groups: Vec<DetectionGroup>,
}

impl DetectionData {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Categories in request order.
    pub fn groups(&self) -> &[DetectionGroup] {
        &self.groups
    }

    pub fn detection_count(&self) -> usize {
        self.groups.iter().map(|g| g.detections.len()).sum()
    }
}

fn non_empty(field: &str, value: &str, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(trimmed.to_string())
}

pub fn validate_chat(payload: ChatPayload) -> Result<ChatRequest, ValidationError> {
    let query = non_empty("query", &payload.query, "Query cannot be empty")?;
    let user_name = payload
        .user_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(ChatRequest { query, user_name })
}

pub fn validate_summarize(payload: SummarizePayload) -> Result<SummarizeRequest, ValidationError> {
    let text = non_empty("text", &payload.text, "Text cannot be empty")?;
    if text.chars().count() < MIN_SUMMARY_CHARS {
        return Err(ValidationError::new("text", "Text is too short to summarize"));
    }

    Ok(SummarizeRequest { text })
}

pub fn validate_scenario(payload: ScenarioPayload) -> Result<DetectionData, ValidationError> {
    if payload.status != SUCCESS_STATUS {
        return Err(ValidationError::new(
            "status",
            format!("Status must be \"{}\"", SUCCESS_STATUS),
        ));
    }

    let groups = payload
        .detections
        .into_iter()
        .map(|(category, detections)| -> Result<DetectionGroup, ValidationError> {
            let detections = detections
                .into_iter()
                .enumerate()
                .map(|(index, detection)| validate_detection(&category, index, detection))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(DetectionGroup {
                category,
                detections,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DetectionData {
        filename: payload.filename,
        groups,
    })
}

fn validate_detection(
    category: &str,
    index: usize,
    detection: DetectionPayload,
) -> Result<Detection, ValidationError> {
    let confidence = detection.confidence;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(ValidationError::new(
            format!("detections.{}[{}].confidence", category, index),
            "Confidence must be between 0 and 1",
        ));
    }

    Ok(Detection {
        object_id: detection.object_id,
        position: detection.position,
        confidence,
    })
}
