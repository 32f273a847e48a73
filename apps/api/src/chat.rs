//! Interactive chat session state.

use crate::models::AnalysisRecord;

/// Holds zero or one analysis record as conversation context for follow-up
/// questions. The context is replaced wholesale when a new analysis
/// completes, never merged.
#[derive(Default)]
pub struct ChatSession {
    context: Option<AnalysisRecord>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> Option<&AnalysisRecord> {
        self.context.as_ref()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Replaces whatever context was held before.
    pub fn set_context(&mut self, record: AnalysisRecord) {
        self.context = Some(record);
    }
}

/// Literal "quit", case-insensitive, ends a chat sub-session.
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::AtsReport;
    use crate::models::SectionAnalyses;

    fn record(summary: &str) -> AnalysisRecord {
        AnalysisRecord {
            overall_summary: summary.to_string(),
            sections: SectionAnalyses {
                work_experience: String::new(),
                education: String::new(),
                skills: String::new(),
                achievements: String::new(),
                formatting: String::new(),
                ats_compatibility: String::new(),
            },
            ats_compatibility: AtsReport::new(vec![]),
        }
    }

    #[test]
    fn test_new_session_has_no_context() {
        assert!(!ChatSession::new().has_context());
    }

    #[test]
    fn test_set_context_replaces_wholesale() {
        let mut session = ChatSession::new();
        session.set_context(record("first"));
        session.set_context(record("second"));
        assert_eq!(session.context().unwrap().overall_summary, "second");
    }

    #[test]
    fn test_is_quit_case_insensitive() {
        assert!(is_quit("quit"));
        assert!(is_quit("QUIT"));
        assert!(is_quit("  Quit  "));
        assert!(!is_quit("quit please"));
        assert!(!is_quit("exit"));
    }
}
