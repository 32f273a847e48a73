//! Document reader: extracts plain text from PDF and DOCX resumes.

use std::path::Path;

use crate::errors::AppError;

/// Resume file formats the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Detects the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }
}

/// Raw extracted resume text plus its source format. Immutable after
/// creation; discarded once an analysis pass completes.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub text: String,
    pub kind: FileKind,
}

/// Reads a resume file and extracts its full text content.
///
/// A missing path is `FileNotFound`; an extension other than `.pdf`/`.docx`
/// is `UnsupportedFormat` rather than a silently empty document.
pub fn read_resume(path: &Path) -> Result<ResumeDocument, AppError> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let kind = FileKind::from_path(path).ok_or_else(|| {
        AppError::UnsupportedFormat(format!(
            "'{}' is not a PDF or DOCX file",
            path.display()
        ))
    })?;

    let text = match kind {
        FileKind::Pdf => extract_pdf(path)?,
        FileKind::Docx => extract_docx(path)?,
    };

    tracing::debug!(
        "Extracted {} characters from {}",
        text.chars().count(),
        path.display()
    );

    Ok(ResumeDocument { text, kind })
}

/// Page-order text extraction. Pages without extractable text contribute an
/// empty string, not an error.
fn extract_pdf(path: &Path) -> Result<String, AppError> {
    pdf_extract::extract_text(path)
        .map_err(|e| AppError::Extraction(format!("PDF extraction failed: {e}")))
}

/// Paragraph texts in document order, each followed by a newline.
fn extract_docx(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Extraction(format!("Failed to read DOCX file: {e}")))?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| AppError::Extraction(format!("DOCX parsing failed: {e:?}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for para_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = para_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
