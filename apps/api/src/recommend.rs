//! Flattens a finished analysis into an ordered recommendation list.

use crate::models::AnalysisRecord;

/// ATS issues first (only when the resume is not ATS-friendly, in their
/// original order), then one line per section in category order.
pub fn improvement_recommendations(record: &AnalysisRecord) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !record.ats_compatibility.is_ats_friendly {
        recommendations.extend(record.ats_compatibility.issues.iter().cloned());
    }

    for (section, feedback) in record.sections.entries() {
        recommendations.push(format!("{}: {feedback}", section.label()));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::AtsReport;
    use crate::models::SectionAnalyses;

    fn record(issues: Vec<&str>) -> AnalysisRecord {
        AnalysisRecord {
            overall_summary: "ok".to_string(),
            sections: SectionAnalyses {
                work_experience: "add metrics".to_string(),
                education: "fine".to_string(),
                skills: "group by domain".to_string(),
                achievements: "quantify".to_string(),
                formatting: "single column".to_string(),
                ats_compatibility: "avoid tables".to_string(),
            },
            ats_compatibility: AtsReport::new(
                issues.into_iter().map(String::from).collect(),
            ),
        }
    }

    #[test]
    fn test_friendly_record_yields_six_lines() {
        let recs = improvement_recommendations(&record(vec![]));
        assert_eq!(recs.len(), 6);
        assert_eq!(recs[0], "Work Experience: add metrics");
        assert_eq!(recs[5], "ATS Compatibility: avoid tables");
    }

    #[test]
    fn test_issues_come_first_in_original_order() {
        let recs = improvement_recommendations(&record(vec![
            "Contains special characters that may confuse ATS",
            "Content might be too brief for ATS",
        ]));
        assert_eq!(recs.len(), 8);
        assert_eq!(recs[0], "Contains special characters that may confuse ATS");
        assert_eq!(recs[1], "Content might be too brief for ATS");
        assert_eq!(recs[2], "Work Experience: add metrics");
    }
}
