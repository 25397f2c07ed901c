#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("triage record {record_id} not found for user {user_id}")]
    RecordNotFound {
        user_id: u64,
        record_id: uuid::Uuid,
    },
    #[error("triage history store is unavailable")]
    StoreUnavailable,
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
