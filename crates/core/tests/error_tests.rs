// ═══════════════════════════════════════════════════════════════════
// Error Tests: CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_view_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_file_format() {
        let err = CoreError::InvalidFileFormat("bad header".into());
        assert_eq!(err.to_string(), "Invalid file format: bad header");
    }

    #[test]
    fn invalid_file_format_empty_message() {
        let err = CoreError::InvalidFileFormat(String::new());
        assert_eq!(err.to_string(), "Invalid file format: ");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("expected a sequence".into());
        assert_eq!(err.to_string(), "Deserialization error: expected a sequence");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("threshold is NaN".into());
        assert_eq!(err.to_string(), "Settings validation failed: threshold is NaN");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        match err {
            CoreError::FileIO(msg) => assert!(msg.contains("no such file")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.to_string().starts_with("Deserialization error: "));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read() -> Result<Vec<u8>, CoreError> {
            Ok(std::fs::read("/definitely/not/a/real/portfolio.json")?)
        }
        assert!(matches!(read(), Err(CoreError::FileIO(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CoreError>();
    }

    #[test]
    fn debug_names_variant() {
        let err = CoreError::FileIO("x".into());
        assert!(format!("{err:?}").contains("FileIO"));
    }
}
