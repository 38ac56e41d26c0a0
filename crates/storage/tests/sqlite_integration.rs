use chrono::Duration;
use quiz_core::model::{OptionIndex, QuestionIndex, SessionState};
use quiz_core::time::fixed_now;
use storage::repository::{SessionId, SessionRecord, SessionRepository, Storage};
use storage::sqlite::SqliteRepository;

fn sel(values: &[usize]) -> Vec<OptionIndex> {
    values.iter().copied().map(OptionIndex::new).collect()
}

#[tokio::test]
async fn sqlite_roundtrip_persists_progress_and_answers() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_sessions?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let id = SessionId::new_random();
    let mut state = SessionState::new();
    state.record_and_advance(sel(&[1]));
    state.record_and_advance(sel(&[2, 0]));
    state.record_and_advance(Vec::new());
    let record = SessionRecord::new(state, fixed_now());

    repo.save_session(id, &record).await.expect("save");
    let fetched = repo.load_session(id).await.expect("load").expect("present");

    assert_eq!(fetched, record);
    assert_eq!(fetched.state.current_question(), QuestionIndex::new(3));
    assert_eq!(
        fetched.state.answers().get(QuestionIndex::new(1)),
        Some(sel(&[2, 0]).as_slice())
    );
    assert_eq!(
        fetched.state.answers().get(QuestionIndex::new(2)),
        Some(&[][..])
    );
}

#[tokio::test]
async fn sqlite_save_overwrites_and_remove_clears() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    // Running migrations twice is a no-op.
    repo.migrate().await.expect("migrate again");

    let id = SessionId::new_random();
    repo.save_session(id, &SessionRecord::new(SessionState::new(), fixed_now()))
        .await
        .expect("save initial");

    let mut state = SessionState::new();
    state.record_and_advance(sel(&[0]));
    let later = fixed_now() + Duration::minutes(5);
    repo.save_session(id, &SessionRecord::new(state.clone(), later))
        .await
        .expect("save update");

    let fetched = repo.load_session(id).await.expect("load").expect("present");
    assert_eq!(fetched.state, state);
    assert_eq!(fetched.updated_at, later);

    repo.remove_session(id).await.expect("remove");
    assert!(repo.load_session(id).await.expect("load").is_none());
    repo.remove_session(id).await.expect("remove missing");
}

#[tokio::test]
async fn storage_sqlite_constructor_migrates() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    let id = SessionId::new_random();
    assert!(storage.sessions.load_session(id).await.expect("load").is_none());
}
