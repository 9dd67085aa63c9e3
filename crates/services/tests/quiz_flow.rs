use services::{AppServices, FeedbackStatus, QuizCommand, QuizPhase, ServiceConfig};

const ROSTER: &str = r#"[
  {"name": "Jane Doe", "department": "math", "image": "images/math/Doe_Jane.jpg", "variants": ["JD"]},
  {"name": "Bob Lee", "department": "Math", "image": "images/math/Lee_Bob.jpg"},
  {"name": "Ada Park", "department": "english", "image": "images/english/Park_Ada.jpg"},
  "not a person"
]"#;

async fn load(dir: &tempfile::TempDir) -> AppServices {
    let path = dir.path().join("people.json");
    std::fs::write(&path, ROSTER).unwrap();
    let config = ServiceConfig::new(path.to_string_lossy(), 1_500, false)
        .unwrap()
        .with_photos_root(dir.path());
    AppServices::load(config).await.unwrap()
}

#[tokio::test]
async fn quiz_plays_through_a_round() {
    let dir = tempfile::tempdir().unwrap();
    let services = load(&dir).await;
    assert_eq!(services.departments(), ["ALL", "Math", "English"]);

    let quiz = services.quiz();
    let mut rx = quiz.subscribe();

    quiz.send(QuizCommand::ChangeFilter("English".into())).unwrap();
    let shown = rx
        .wait_for(|s| s.phase == QuizPhase::Presenting && s.selected_department == "English")
        .await
        .unwrap()
        .clone();
    assert_eq!(shown.image.alt, "Ada Park");
    assert_eq!(shown.image.src.as_deref(), Some("images/english/Park_Ada.jpg"));

    quiz.send(QuizCommand::SubmitGuess("  park ".into())).unwrap();
    let correct = rx
        .wait_for(|s| s.phase == QuizPhase::Advancing)
        .await
        .unwrap()
        .clone();
    assert_eq!(correct.feedback.status, FeedbackStatus::Success);
    assert_eq!(correct.feedback.text, "✅ Correct! It's Ada Park from English.");
    assert_eq!((correct.score, correct.streak), (1, 1));

    quiz.send(QuizCommand::ChangeFilter("Math".into())).unwrap();
    rx.wait_for(|s| s.phase == QuizPhase::Presenting && s.selected_department == "Math")
        .await
        .unwrap();

    quiz.send(QuizCommand::SubmitGuess("nobody".into())).unwrap();
    let wrong = rx
        .wait_for(|s| s.phase == QuizPhase::AnswerShown)
        .await
        .unwrap()
        .clone();
    assert_eq!(wrong.feedback.text, "❌ Incorrect");
    assert_eq!((wrong.score, wrong.streak), (1, 0));
    let reveal = wrong.reveal.unwrap();
    assert_eq!(reveal.department, "Math");
    assert!(["Jane Doe", "Bob Lee"].contains(&reveal.name.as_str()));
}

#[tokio::test]
async fn unknown_department_goes_idle() {
    let dir = tempfile::tempdir().unwrap();
    let services = load(&dir).await;
    let quiz = services.quiz();
    let mut rx = quiz.subscribe();

    quiz.send(QuizCommand::ChangeFilter("History".into())).unwrap();
    let idle = rx
        .wait_for(|s| s.phase == QuizPhase::Idle && s.selected_department == "History")
        .await
        .unwrap()
        .clone();
    assert_eq!(idle.feedback.text, "No people found in History");
    assert_eq!(idle.image.src, None);
    assert!(!idle.guess_enabled());
}

#[tokio::test]
async fn random_photo_comes_from_the_configured_tree() {
    let dir = tempfile::tempdir().unwrap();
    let science = dir.path().join("Science");
    std::fs::create_dir(&science).unwrap();
    std::fs::write(science.join("Curie_Marie.png"), b"img").unwrap();

    let services = load(&dir).await;
    let photo = services.photos().pick().unwrap();
    assert_eq!(photo.person_name, "Curie Marie");
}
