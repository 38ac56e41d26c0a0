use quiz_core::model::{AnswerSheet, SessionState};
use sqlx::Row;

use crate::repository::{SessionRecord, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn question_to_i64(v: usize) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization("current_question overflow".into()))
}

fn question_from_i64(v: i64) -> Result<usize, StorageError> {
    usize::try_from(v)
        .map_err(|_| StorageError::Serialization(format!("invalid current_question: {v}")))
}

pub(crate) fn answers_to_json(answers: &AnswerSheet) -> Result<String, StorageError> {
    serde_json::to_string(answers).map_err(ser)
}

pub(crate) fn map_session_row(row: &sqlx::sqlite::SqliteRow) -> Result<SessionRecord, StorageError> {
    let current = question_from_i64(row.try_get::<i64, _>("current_question").map_err(ser)?)?;
    let answers: AnswerSheet =
        serde_json::from_str(&row.try_get::<String, _>("answers").map_err(ser)?).map_err(ser)?;
    let updated_at = row.try_get("updated_at").map_err(ser)?;

    Ok(SessionRecord::new(
        SessionState::from_persisted(current, answers),
        updated_at,
    ))
}
