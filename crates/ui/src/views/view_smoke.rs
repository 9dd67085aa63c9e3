use services::{QuizCommand, QuizPhase};

use super::test_harness::{ViewKind, people, setup_view_harness, start_quiz};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reports_missing_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz, None, dir.path());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Failed to load quiz data."),
        "missing load error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_current_question() {
    let dir = tempfile::tempdir().unwrap();
    let quiz = start_quiz(people(), dir.path()).await;
    let mut harness = setup_view_harness(ViewKind::Quiz, Some(quiz), dir.path());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("images/math/Doe_Jane.jpg"), "missing image in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Streak: 0"), "missing streak in {html}");
    assert!(html.contains("Math"), "missing department option in {html}");
    assert!(html.contains("Submit"), "missing submit button in {html}");
    assert!(!html.contains("Continue"), "unexpected continue in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reveals_answer_after_skip() {
    let dir = tempfile::tempdir().unwrap();
    let quiz = start_quiz(people(), dir.path()).await;
    quiz.send(QuizCommand::Skip).unwrap();
    quiz.subscribe()
        .wait_for(|snapshot| snapshot.phase == QuizPhase::AnswerShown)
        .await
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Quiz, Some(quiz), dir.path());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("⏭ Skipped"), "missing skip feedback in {html}");
    assert!(html.contains("Jane Doe"), "missing revealed name in {html}");
    assert!(html.contains("Continue"), "missing continue button in {html}");
    assert!(!html.contains("Submit"), "guessing should be disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn random_photo_view_renders_name() {
    let dir = tempfile::tempdir().unwrap();
    let science = dir.path().join("Science");
    std::fs::create_dir(&science).unwrap();
    std::fs::write(science.join("Curie_Marie.png"), b"img").unwrap();

    let mut harness = setup_view_harness(ViewKind::RandomPhoto, None, dir.path());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Curie Marie"), "missing person name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn random_photo_view_reports_empty_tree() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness = setup_view_harness(ViewKind::RandomPhoto, None, dir.path());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No photos found."), "missing error in {html}");
}
