use super::SqliteRepository;
use super::mapping::{answers_to_json, map_session_row, question_to_i64};
use crate::repository::{SessionId, SessionRecord, SessionRepository, StorageError};

#[async_trait::async_trait]
impl SessionRepository for SqliteRepository {
    async fn load_session(&self, id: SessionId) -> Result<Option<SessionRecord>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT current_question, answers, updated_at
                FROM quiz_sessions
                WHERE session_id = ?1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(map_session_row).transpose()
    }

    async fn save_session(
        &self,
        id: SessionId,
        record: &SessionRecord,
    ) -> Result<(), StorageError> {
        let current = question_to_i64(record.state.current_question().value())?;
        let answers = answers_to_json(record.state.answers())?;

        sqlx::query(
            r"
                INSERT INTO quiz_sessions (session_id, current_question, answers, updated_at)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(session_id) DO UPDATE SET
                    current_question = excluded.current_question,
                    answers = excluded.answers,
                    updated_at = excluded.updated_at
            ",
        )
        .bind(id.to_string())
        .bind(current)
        .bind(answers)
        .bind(record.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn remove_session(&self, id: SessionId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM quiz_sessions WHERE session_id = ?1")
            .bind(id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}
