//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use camoplace::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use camoplace::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a full single-background lifecycle
    #[test]
    fn test_single_background_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        pm.start_file(0, Path::new("garden.png"), 3);
        pm.level_done(0, 10, 10);
        pm.level_done(0, 9, 10);
        pm.level_done(0, 10, 10);
        pm.complete_file(0);
        pm.finish();
    }

    #[test]
    fn test_default_matches_new() {
        let mut pm = ProgressManager::default();
        pm.initialize(0);
        pm.finish();
    }

    // Batches beyond the bar limit reuse bars by index
    #[test]
    fn test_large_batch_reuses_bars() {
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS * 2 + 1;
        let mut pm = ProgressManager::new();
        pm.initialize(file_count);

        for index in 0..file_count {
            pm.start_file(index, Path::new("scene.jpg"), 1);
            pm.level_done(index, 5, 5);
            pm.complete_file(index);
        }
        pm.finish();
    }

    // Calls before initialization are harmless
    #[test]
    fn test_uninitialized_calls() {
        let pm = ProgressManager::new();
        pm.start_file(3, Path::new("x.png"), 2);
        pm.level_done(3, 0, 10);
        pm.complete_file(3);
        pm.finish();
    }
}
