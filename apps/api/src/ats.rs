//! Heuristic ATS-compatibility checker.
//!
//! Text-pattern heuristics only: these scan the extracted plain text for
//! signals that applicant tracking systems commonly choke on. No layout or
//! image inspection happens here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters that commonly survive from tables, text boxes, or markup and
/// confuse ATS parsers.
const SPECIAL_CHARS: [char; 6] = ['<', '>', '{', '}', '[', ']'];

/// Minimum whitespace-delimited word count before the brevity flag fires.
const MIN_WORD_COUNT: usize = 100;

/// Matches a line ending in an image-file extension. A filename-like
/// substring in the extracted text usually means an embedded image with no
/// alt text.
static IMAGE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)\.(png|jpg|jpeg|gif|bmp)$").unwrap());

/// Result of one heuristic pass over a resume. Friendly iff no rule fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub is_ats_friendly: bool,
    pub issues: Vec<String>,
}

impl AtsReport {
    pub fn new(issues: Vec<String>) -> Self {
        Self {
            is_ats_friendly: issues.is_empty(),
            issues,
        }
    }
}

/// Runs every heuristic rule against the full resume text. Rules are
/// independent and all evaluated; issue order follows rule order.
pub fn check_ats_compatibility(text: &str) -> AtsReport {
    let mut issues = Vec::new();

    if text.contains(&SPECIAL_CHARS[..]) {
        issues.push("Contains special characters that may confuse ATS".to_string());
    }

    if IMAGE_LINE.is_match(text) {
        issues.push("Contains images without alt text".to_string());
    }

    if text.split_whitespace().count() < MIN_WORD_COUNT {
        issues.push("Content might be too brief for ATS".to_string());
    }

    AtsReport::new(issues)
}
