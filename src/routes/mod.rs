pub mod chronology;
pub mod evidence;
pub mod insights;
pub mod landing;
pub mod patterns;
pub mod summary;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::insights::GET_CASE_INSIGHTS, "get_case_insights");
        assert_eq!(super::summary::GET_CASE_SUMMARY, "get_case_summary");
        assert_eq!(super::patterns::GET_PATTERN_ANALYSIS, "get_pattern_analysis");
        assert_eq!(
            super::evidence::GET_EVIDENCE_SUMMARY,
            "get_evidence_summary"
        );
        assert_eq!(super::chronology::GET_CHRONOLOGY, "get_chronology");
        assert_eq!(super::landing::LIST_CASES, "list_cases");
        assert_eq!(super::landing::POST_CASE, "create_case");
    }
}
