//! Tests for progress display lifecycle

#[cfg(test)]
mod tests {

    use tilefixture::io::progress::ProgressManager;

    // Bars are never configured, so every call must be a no-op
    #[test]
    fn test_uninitialized_manager_is_inert() {
        let pm = ProgressManager::new();
        pm.start_level(0, 16);
        pm.update_tiles(8);
        pm.complete_level();
        pm.finish();
    }

    #[test]
    fn test_full_lifecycle_over_several_levels() {
        let mut pm = ProgressManager::default();
        pm.initialize(4);

        for level in 0..4 {
            pm.start_level(level, 16);
            for written in 1..=16 {
                pm.update_tiles(written);
            }
            pm.complete_level();
        }

        pm.finish();
    }

    #[test]
    fn test_empty_level_completes_without_updates() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_level(0, 0);
        pm.complete_level();
        pm.finish();
    }
}
