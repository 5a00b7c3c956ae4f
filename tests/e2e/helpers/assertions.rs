use sea_catering::error::AppError;

use super::fake_backend::FakeBackend;

pub fn assert_auth_required(result: &Result<String, AppError>) {
    assert!(
        matches!(result, Err(AppError::AuthRequired(_))),
        "expected AuthRequired, got {:?}",
        result
    );
}

pub fn assert_validation(result: &Result<String, AppError>) {
    assert!(
        matches!(result, Err(AppError::Validation(_))),
        "expected Validation, got {:?}",
        result
    );
}

/// The backend's own text surfaced unchanged
pub fn assert_rejected(result: &Result<String, AppError>, expected_status: u16, expected: &str) {
    match result {
        Err(AppError::RemoteRejection { status, message }) => {
            assert_eq!(*status, expected_status);
            assert_eq!(message, expected);
            assert_eq!(result.as_ref().unwrap_err().to_string(), expected);
        }
        other => panic!("expected RemoteRejection, got {:?}", other),
    }
}

/// Every request the client sent carried a distinct request id
pub fn assert_request_ids(backend: &FakeBackend) {
    let requests = backend.requests();
    assert!(!requests.is_empty(), "no requests recorded");

    let mut ids: Vec<String> = requests
        .iter()
        .map(|r| {
            r.request_id
                .clone()
                .unwrap_or_else(|| panic!("{} {} had no x-request-id", r.method, r.path))
        })
        .collect();
    for id in &ids {
        assert!(uuid::Uuid::parse_str(id).is_ok(), "not a uuid: {}", id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), requests.len(), "request ids were reused");
}
