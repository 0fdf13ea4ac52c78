use quotient_core::errors::*;

#[test]
fn storage_error_sqlite_carries_message() {
    let err = StorageError::SqliteError {
        message: "no such table: pricing_priors".into(),
    };
    assert!(err.to_string().contains("no such table: pricing_priors"));
}

#[test]
fn storage_error_schema_missing_carries_object() {
    let err = StorageError::SchemaMissing {
        object: "pricing_priors".into(),
    };
    assert!(err.to_string().contains("pricing_priors"));
}

#[test]
fn storage_error_migration_carries_version_and_reason() {
    let err = StorageError::MigrationFailed {
        version: 1,
        reason: "disk full".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('1'));
    assert!(msg.contains("disk full"));
}

#[test]
fn storage_error_converts_to_quotient_error() {
    let storage_err = StorageError::SqliteError {
        message: "locked".into(),
    };
    let err: QuotientError = storage_err.into();
    assert!(err.to_string().contains("locked"));
}

#[test]
fn serde_error_converts_to_quotient_error() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: QuotientError = parse_err.into();
    assert!(err.to_string().contains("serialization error"));
}
