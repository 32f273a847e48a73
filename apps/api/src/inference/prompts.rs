// Prompt construction for all model calls. The templates are fixed; only
// the section identifier, content, and chat context vary.

use crate::models::AnalysisRecord;

/// Instruction prompt for one section analysis call.
pub fn section_prompt(section: &str, content: &str) -> String {
    format!("Analyze this resume {section}. Provide specific improvements:\n{content}")
}

/// Chat prompt. With no prior analysis the utterance goes through verbatim;
/// with context it is prefixed by the record's bounded text rendering.
pub fn chat_prompt(utterance: &str, context: Option<&AnalysisRecord>) -> String {
    match context {
        Some(record) => format!(
            "Based on the resume context: {}\n{}",
            record.chat_context(),
            utterance
        ),
        None => utterance.to_string(),
    }
}
