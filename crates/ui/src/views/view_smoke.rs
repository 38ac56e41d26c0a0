use storage::repository::SessionRepository;

use super::test_harness::{QuizFixture, ViewKind};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_bank_summary_and_resets() {
    let fixture = QuizFixture::sample();
    fixture
        .quiz_sessions
        .start(fixture.session_id)
        .await
        .expect("start");

    let mut harness = fixture.mount(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("7 questions"), "missing count in {html}");
    assert!(html.contains("up to 9 points"), "missing max score in {html}");
    assert!(html.contains("Start quiz"), "missing start link in {html}");

    let stored = fixture
        .storage
        .sessions
        .load_session(fixture.session_id)
        .await
        .expect("load");
    assert!(stored.is_none(), "home should discard the session");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_first_question() {
    let fixture = QuizFixture::sample();
    fixture
        .quiz_sessions
        .start(fixture.session_id)
        .await
        .expect("start");

    let mut harness = fixture.mount(ViewKind::Question);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Question 1 of 7"), "missing heading in {html}");
    assert!(
        html.contains("Which of these are prime numbers?"),
        "missing text in {html}"
    );
    assert!(html.contains("checkbox"), "multi-answer should use checkboxes: {html}");
    assert!(html.contains("Submit answer"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_does_not_advance_on_view() {
    let fixture = QuizFixture::sample();
    fixture
        .quiz_sessions
        .start(fixture.session_id)
        .await
        .expect("start");
    fixture
        .quiz_sessions
        .submit(fixture.session_id, &["0", "2", "3"])
        .await
        .expect("submit");
    let before = fixture
        .storage
        .sessions
        .load_session(fixture.session_id)
        .await
        .expect("load")
        .expect("present");

    for _ in 0..2 {
        let mut harness = fixture.mount(ViewKind::Question);
        harness.settle().await;
        let html = harness.render();
        assert!(html.contains("Question 2 of 7"), "missing heading in {html}");
        assert!(html.contains("radio"), "single-answer should use radios: {html}");
    }

    let after = fixture
        .storage
        .sessions
        .load_session(fixture.session_id)
        .await
        .expect("load")
        .expect("present");
    assert_eq!(before.state, after.state);
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_negative_score() {
    let fixture = QuizFixture::sample();
    let svc = &fixture.quiz_sessions;
    svc.start(fixture.session_id).await.expect("start");
    // Every answer wrong: two multi-answer (-1 each), five single (-0.5 each).
    for raw in ["1", "0", "1", "0", "0", "1", "0"] {
        svc.submit(fixture.session_id, &[raw]).await.expect("submit");
    }

    let mut harness = fixture.mount(ViewKind::Results);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("-4.5 / 9"), "missing raw score in {html}");
    assert!(html.contains("0.0%"), "missing floored percentage in {html}");
    assert!(html.contains("7 of 7"), "missing answered count in {html}");
}
