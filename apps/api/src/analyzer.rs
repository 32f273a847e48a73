//! Section analysis and orchestration.
//!
//! `ResumeAnalyzer` is built once at startup and shared read-only by every
//! front-end. Each analysis pass is strictly sequential: one extraction, one
//! heuristic check, then one blocking model call per section.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::ats::check_ats_compatibility;
use crate::errors::AppError;
use crate::inference::prompts::{chat_prompt, section_prompt};
use crate::inference::{TextGenerator, CHAT_PROFILE, SECTION_PROFILE};
use crate::models::{AnalysisRecord, Section, SectionAnalyses};
use crate::reader::read_resume;

/// Section identifier used for the whole-document summary call.
const OVERALL_SECTION: &str = "complete content";

pub struct ResumeAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl ResumeAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// One model call for one section of the resume.
    async fn analyze_section(&self, section: &str, content: &str) -> Result<String, AppError> {
        let prompt = section_prompt(section, content);
        let feedback = self.generator.generate(&prompt, &SECTION_PROFILE).await?;
        Ok(feedback)
    }

    /// Full analysis of already-extracted text: heuristic ATS check, overall
    /// summary, then every category in fixed order. Any failing call aborts
    /// the pass; there is no partial record.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisRecord, AppError> {
        let ats_compatibility = check_ats_compatibility(text);

        let overall_summary = self.analyze_section(OVERALL_SECTION, text).await?;

        let sections = SectionAnalyses {
            work_experience: self
                .analyze_section(Section::WorkExperience.key(), text)
                .await?,
            education: self.analyze_section(Section::Education.key(), text).await?,
            skills: self.analyze_section(Section::Skills.key(), text).await?,
            achievements: self
                .analyze_section(Section::Achievements.key(), text)
                .await?,
            formatting: self
                .analyze_section(Section::Formatting.key(), text)
                .await?,
            ats_compatibility: self
                .analyze_section(Section::AtsCompatibility.key(), text)
                .await?,
        };

        Ok(AnalysisRecord {
            overall_summary,
            sections,
            ats_compatibility,
        })
    }

    /// Complete analysis of a resume file: extract, then `analyze_text`.
    pub async fn analyze_file(&self, path: &Path) -> Result<AnalysisRecord, AppError> {
        info!("Analyzing resume: {}", path.display());
        let document = read_resume(path)?;
        self.analyze_text(&document.text).await
    }

    /// One chat turn, optionally grounded in the most recent analysis.
    pub async fn chat(
        &self,
        utterance: &str,
        context: Option<&AnalysisRecord>,
    ) -> Result<String, AppError> {
        let prompt = chat_prompt(utterance, context);
        let response = self.generator.generate(&prompt, &CHAT_PROFILE).await?;
        Ok(response)
    }
}
