#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use quizforge::application::ports::{
    ContentSource, ContentSourceError, RecordSink, RecordSinkError,
};
use quizforge::domain::McqCandidate;

pub const ONE_MCQ_REPLY: &str = r#"Here is what I found:
[
  {
    "question": "What is the SI unit of electric charge?",
    "options": ["Ampere", "Coulomb", "Volt", "Ohm"],
    "answer": "Coulomb",
    "subject": "Physics",
    "class": "12",
    "topic": "Electric Charges and Fields"
  }
]
Let me know if you need more."#;

pub fn candidate(question: &str) -> McqCandidate {
    McqCandidate {
        question: question.to_string(),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        answer: "Option B".to_string(),
        subject: "Physics".to_string(),
        topic: "Electric Charges and Fields".to_string(),
        ..McqCandidate::default()
    }
}

pub fn generated_reply(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"question": "Generated question {i}?", "options": ["w", "x", "y", "z"], "correct_option": "{letter}", "explanation": "Because.", "difficulty": "Medium", "topic": "Electric Charges and Fields", "subject": "Physics", "class": "12"}}"#,
                letter = ["A", "B", "C", "D"][i % 4]
            )
        })
        .collect();
    format!("Sure!\n[{}]\n", items.join(",\n"))
}

/// Content source double that serves fixed markup and counts fetches.
pub struct StubContentSource {
    html: Option<String>,
    structured: Vec<McqCandidate>,
    fetches: AtomicUsize,
}

impl StubContentSource {
    pub fn serving(html: &str) -> Self {
        Self {
            html: Some(html.to_string()),
            structured: Vec::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            html: None,
            structured: Vec::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_structured(mut self, structured: Vec<McqCandidate>) -> Self {
        self.structured = structured;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ContentSource for StubContentSource {
    async fn fetch(&self, url: &str) -> Result<String, ContentSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.html
            .clone()
            .ok_or_else(|| ContentSourceError::RequestFailed(format!("no route to {}", url)))
    }

    fn extract_body(&self, html: &str) -> String {
        html.to_string()
    }

    fn clean(&self, body: &str) -> String {
        body.trim().to_string()
    }

    fn extract_structured(&self, _html: &str) -> Vec<McqCandidate> {
        self.structured.clone()
    }
}

/// Sink double that keeps every written document in memory.
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingSink {
    pub fn destinations(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(d, _)| d.clone())
            .collect()
    }

    pub fn document(&self, destination: &str) -> Option<serde_json::Value> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .find(|(d, _)| d == destination)
            .map(|(_, v)| v.clone())
    }
}

#[async_trait::async_trait]
impl RecordSink for RecordingSink {
    async fn write(
        &self,
        destination: &str,
        document: &serde_json::Value,
    ) -> Result<(), RecordSinkError> {
        self.writes
            .lock()
            .unwrap()
            .push((destination.to_string(), document.clone()));
        Ok(())
    }
}

pub struct FailingSink;

#[async_trait::async_trait]
impl RecordSink for FailingSink {
    async fn write(
        &self,
        _destination: &str,
        _document: &serde_json::Value,
    ) -> Result<(), RecordSinkError> {
        Err(RecordSinkError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only output directory",
        )))
    }
}
