use cardwatch_core::errors::{CardwatchError, StorageError};

#[test]
fn display_messages_carry_context() {
    let err = CardwatchError::InvalidCoordinate {
        latitude: 91.0,
        longitude: 0.0,
    };
    assert_eq!(err.to_string(), "invalid coordinate: latitude 91, longitude 0");

    let err = CardwatchError::Storage(StorageError::MigrationFailed {
        version: 2,
        reason: "no such table".into(),
    });
    assert!(err.to_string().contains("version 2"));
}

#[test]
fn only_transient_sqlite_failures_are_retryable() {
    let transient = CardwatchError::Storage(StorageError::SqliteError {
        message: "database is locked".into(),
    });
    assert!(transient.is_retryable());

    let corrupt = CardwatchError::Storage(StorageError::CorruptionDetected {
        details: "integrity_check failed".into(),
    });
    assert!(!corrupt.is_retryable());

    let invalid = CardwatchError::InvalidRecord {
        reason: "missing card_id".into(),
    };
    assert!(!invalid.is_retryable());
}

#[test]
fn storage_error_converts_into_top_level() {
    fn inner() -> Result<(), StorageError> {
        Err(StorageError::SqliteError {
            message: "disk I/O error".into(),
        })
    }
    fn outer() -> Result<(), CardwatchError> {
        inner()?;
        Ok(())
    }
    assert!(matches!(
        outer().unwrap_err(),
        CardwatchError::Storage(StorageError::SqliteError { .. })
    ));
}
