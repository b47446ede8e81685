//! Tests for placement, analysis and output configuration constants

#[cfg(test)]
mod tests {
    use camoplace::io::configuration::{
        ANALYSIS_GRID_STEP, ANALYSIS_SAMPLE_CAP, CANDIDATE_TOP_FRACTION, DEFAULT_LEVEL_COUNT,
        DEFAULT_START_LEVEL, FREE_HINTS_PER_LEVEL, MAX_INDIVIDUAL_PROGRESS_BARS,
        MAX_PLACEMENT_ATTEMPTS, MIN_SEPARATION_PERCENT, MIN_VISIBLE_OPACITY,
        OBJECT_ID_NONCE_BOUND, OUTPUT_LEVEL_INFIX, PLACEMENT_MARGIN_PERCENT, PREVIEW_SUFFIX,
        SUPPORTED_EXTENSIONS,
    };

    // Tests placement geometry values
    #[test]
    fn test_placement_geometry() {
        assert_eq!(PLACEMENT_MARGIN_PERCENT.to_string(), "5");
        assert_eq!(MIN_SEPARATION_PERCENT.to_string(), "6");
        assert_eq!(CANDIDATE_TOP_FRACTION.to_string(), "0.7");
        assert_eq!(MIN_VISIBLE_OPACITY.to_string(), "0.15");
    }

    // Tests the rejection-sampling budget
    #[test]
    fn test_attempt_budget() {
        assert_eq!(MAX_PLACEMENT_ATTEMPTS, 1000);
        assert_eq!(OBJECT_ID_NONCE_BOUND.get(), 10_000);
    }

    // Tests sampling resolution and grid spacing
    #[test]
    fn test_sampling_values() {
        assert_eq!(ANALYSIS_SAMPLE_CAP, 200);
        assert_eq!(ANALYSIS_GRID_STEP, 10);
    }

    #[test]
    fn test_hint_and_progress_values() {
        assert_eq!(FREE_HINTS_PER_LEVEL, 2);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    #[test]
    fn test_cli_defaults() {
        assert_eq!(DEFAULT_START_LEVEL, 1);
        assert_eq!(DEFAULT_LEVEL_COUNT, 1);
    }

    #[test]
    fn test_output_naming() {
        assert_eq!(OUTPUT_LEVEL_INFIX, "_level");
        assert_eq!(PREVIEW_SUFFIX, "_preview");
        assert_eq!(SUPPORTED_EXTENSIONS, ["png", "jpg", "jpeg"]);
    }
}
