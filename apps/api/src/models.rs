//! Core data model: analysis sections and the aggregate analysis record.

use serde::{Deserialize, Serialize};

use crate::ats::AtsReport;

/// The fixed resume categories analyzed independently, in analysis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    WorkExperience,
    Education,
    Skills,
    Achievements,
    Formatting,
    AtsCompatibility,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::WorkExperience,
        Section::Education,
        Section::Skills,
        Section::Achievements,
        Section::Formatting,
        Section::AtsCompatibility,
    ];

    /// Snake-case identifier, used as the JSON key and in analysis prompts.
    pub fn key(&self) -> &'static str {
        match self {
            Section::WorkExperience => "work_experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Achievements => "achievements",
            Section::Formatting => "formatting",
            Section::AtsCompatibility => "ats_compatibility",
        }
    }

    /// Human-readable label, used in recommendation lines and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Section::WorkExperience => "Work Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Achievements => "Achievements",
            Section::Formatting => "Formatting",
            Section::AtsCompatibility => "ATS Compatibility",
        }
    }
}

/// Per-section generated feedback. One field per category keeps the
/// one-entry-per-section invariant in the type itself; field order matches
/// `Section::ALL`, so the serialized object keeps analysis order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAnalyses {
    pub work_experience: String,
    pub education: String,
    pub skills: String,
    pub achievements: String,
    pub formatting: String,
    pub ats_compatibility: String,
}

impl SectionAnalyses {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::WorkExperience => &self.work_experience,
            Section::Education => &self.education,
            Section::Skills => &self.skills,
            Section::Achievements => &self.achievements,
            Section::Formatting => &self.formatting,
            Section::AtsCompatibility => &self.ats_compatibility,
        }
    }

    /// All (section, feedback) pairs in analysis order.
    pub fn entries(&self) -> [(Section, &str); 6] {
        Section::ALL.map(|s| (s, self.get(s)))
    }
}

/// Complete result of one analysis pass. Immutable once constructed; also
/// serves as the conversational context for follow-up chat turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub overall_summary: String,
    pub sections: SectionAnalyses,
    pub ats_compatibility: AtsReport,
}

/// Per-section snippet length in the chat context rendering.
const SECTION_SNIPPET_CHARS: usize = 200;
/// Upper bound on the full chat context rendering.
const CONTEXT_MAX_CHARS: usize = 2000;

impl AnalysisRecord {
    /// Renders the record as a stable, bounded text form suitable for
    /// embedding in a chat prompt. Each section contributes at most
    /// `SECTION_SNIPPET_CHARS` characters and the whole rendering is capped
    /// at `CONTEXT_MAX_CHARS`.
    pub fn chat_context(&self) -> String {
        let mut out = String::new();
        out.push_str("Summary: ");
        out.push_str(truncate_chars(&self.overall_summary, SECTION_SNIPPET_CHARS));
        out.push_str(". ");

        if self.ats_compatibility.is_ats_friendly {
            out.push_str("ATS friendly. ");
        } else {
            out.push_str("ATS issues: ");
            out.push_str(&self.ats_compatibility.issues.join("; "));
            out.push_str(". ");
        }

        for (section, feedback) in self.sections.entries() {
            out.push_str(section.label());
            out.push_str(": ");
            out.push_str(truncate_chars(feedback, SECTION_SNIPPET_CHARS));
            out.push_str(". ");
        }

        truncate_chars(out.trim_end(), CONTEXT_MAX_CHARS).to_string()
    }
}

/// Truncates to at most `max` characters, never splitting a UTF-8 boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(issues: Vec<String>) -> AnalysisRecord {
        AnalysisRecord {
            overall_summary: "Solid resume overall".to_string(),
            sections: SectionAnalyses {
                work_experience: "Add metrics".to_string(),
                education: "Fine as is".to_string(),
                skills: "Group by domain".to_string(),
                achievements: "Quantify impact".to_string(),
                formatting: "Use one column".to_string(),
                ats_compatibility: "Avoid tables".to_string(),
            },
            ats_compatibility: AtsReport {
                is_ats_friendly: issues.is_empty(),
                issues,
            },
        }
    }

    #[test]
    fn test_section_keys_match_fixed_order() {
        let keys: Vec<&str> = Section::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                "work_experience",
                "education",
                "skills",
                "achievements",
                "formatting",
                "ats_compatibility"
            ]
        );
    }

    #[test]
    fn test_entries_cover_all_sections_in_order() {
        let r = record(vec![]);
        let entries = r.sections.entries();
        assert_eq!(entries.len(), 6);
        for (i, (section, _)) in entries.iter().enumerate() {
            assert_eq!(*section, Section::ALL[i]);
        }
        assert_eq!(entries[0].1, "Add metrics");
        assert_eq!(entries[5].1, "Avoid tables");
    }

    #[test]
    fn test_serialized_sections_keep_analysis_order() {
        let r = record(vec![]);
        let json = serde_json::to_string(&r).unwrap();
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| json.find(&format!("\"{}\"", s.key())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_chat_context_is_bounded() {
        let mut r = record(vec![]);
        r.overall_summary = "x".repeat(10_000);
        r.sections.skills = "y".repeat(10_000);
        let ctx = r.chat_context();
        assert!(ctx.chars().count() <= CONTEXT_MAX_CHARS);
    }

    #[test]
    fn test_chat_context_mentions_ats_issues() {
        let r = record(vec!["Content might be too brief for ATS".to_string()]);
        let ctx = r.chat_context();
        assert!(ctx.contains("ATS issues"));
        assert!(ctx.contains("too brief"));
    }

    #[test]
    fn test_truncate_chars_respects_utf8_boundaries() {
        let s = "héllo wörld";
        let t = truncate_chars(s, 4);
        assert_eq!(t, "héll");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
