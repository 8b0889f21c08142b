//! Tests for source pairing, parity selection, and placeholder synthesis

#[cfg(test)]
mod tests {

    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tilefixture::io::error::FixtureError;
    use tilefixture::io::sources::SourcePair;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    #[test]
    fn test_selection_alternates_by_level_parity() {
        let pair = SourcePair::new(PathBuf::from("a.png"), PathBuf::from("b.png"));

        assert_eq!(pair.for_level(0), pair.primary());
        assert_eq!(pair.for_level(1), pair.alternate());
        assert_eq!(pair.for_level(2), pair.primary());
        assert_eq!(pair.for_level(7), pair.alternate());
    }

    #[test]
    fn test_validate_reports_the_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.png");
        let pair = SourcePair::new(missing.clone(), temp.path().join("also_missing.png"));

        let err = pair.validate().unwrap_err();
        match err {
            FixtureError::MissingSource { path } => assert_eq!(path, missing),
            _ => unreachable!("Expected MissingSource error type"),
        }
    }

    #[test]
    fn test_synthesize_writes_distinct_png_placeholders() {
        let temp = TempDir::new().unwrap();
        let pair = SourcePair::new(temp.path().join("p.png"), temp.path().join("a.png"));

        let written = pair.synthesize_missing().unwrap();
        assert_eq!(written.len(), 2);
        assert!(pair.validate().is_ok());

        let primary = fs::read(pair.primary()).unwrap();
        let alternate = fs::read(pair.alternate()).unwrap();
        assert_eq!(primary.get(..8), Some(&PNG_MAGIC[..]));
        assert_eq!(alternate.get(..8), Some(&PNG_MAGIC[..]));
        assert_ne!(primary, alternate);
    }

    #[test]
    fn test_synthesize_leaves_existing_sources_untouched() {
        let temp = TempDir::new().unwrap();
        let primary = temp.path().join("p.png");
        let alternate = temp.path().join("a.png");
        fs::write(&primary, b"user supplied").unwrap();

        let pair = SourcePair::new(primary.clone(), alternate.clone());
        let written = pair.synthesize_missing().unwrap();

        assert_eq!(written, vec![alternate]);
        assert_eq!(fs::read(&primary).unwrap(), b"user supplied");
    }

    #[test]
    fn test_synthesize_is_a_no_op_when_both_exist() {
        let temp = TempDir::new().unwrap();
        let pair = SourcePair::new(temp.path().join("p.png"), temp.path().join("a.png"));

        pair.synthesize_missing().unwrap();
        let second = pair.synthesize_missing().unwrap();
        assert!(second.is_empty());
    }
}
