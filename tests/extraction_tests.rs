use education_platform::extraction::{extract, ExplanationMarkerRepair, ExtractionError};
use education_platform::models::domain::OPTION_COUNT;

fn question_json(correct: usize, explanation: &str) -> String {
    format!(
        r#"{{
            "question": "Какая планета ближе всего к Солнцу?",
            "options": ["Меркурий", "Венера", "Земля", "Марс"],
            "correct": {},
            "explanation": "{}"
        }}"#,
        correct, explanation
    )
}

fn payload(questions: &[String]) -> String {
    format!(r#"{{ "questions": [{}] }}"#, questions.join(","))
}

#[test]
fn realistic_model_reply_survives_the_full_pipeline() {
    let disagreeing = question_json(
        0,
        "Правильный ответ: Венера, потому что именно о ней шла речь в вопросе.",
    );
    let agreeing = question_json(
        0,
        "Правильный ответ: Меркурий, он ближе всего к Солнцу.",
    );
    let terse = question_json(2, "Да.");
    let broken = r#"{ "question": "Сломанный вопрос", "options": ["только один"], "correct": 0, "explanation": "..." }"#;

    let raw = format!(
        "Вот ваш тест:\n```json\n{}\n```\nУдачи на экзамене!",
        payload(&[disagreeing, agreeing, terse, broken.to_string()])
    );

    let repair = ExplanationMarkerRepair::default();
    let quiz = extract(&raw, 10, &repair).expect("extraction should succeed");

    assert_eq!(quiz.questions.len(), 3);
    assert_eq!(quiz.questions[0].options.len(), OPTION_COUNT);

    // The first explanation names a different option than the stored index.
    assert_eq!(quiz.questions[0].correct, 1);
    // The second agrees with its index, so nothing moves.
    assert_eq!(quiz.questions[1].correct, 0);
    // The third explanation is too short and gets synthesized.
    assert_eq!(quiz.questions[2].explanation, "Правильный ответ: Земля.");
}

#[test]
fn too_much_breakage_fails_rather_than_serving_a_stub_quiz() {
    let good = question_json(
        0,
        "Правильный ответ: Меркурий, он ближе всего к Солнцу.",
    );
    let bad = r#"{ "question": "Сломанный вопрос", "options": ["только один"], "correct": 0, "explanation": "..." }"#;
    let raw = payload(&[good.clone(), good, bad.to_string()]);

    let repair = ExplanationMarkerRepair::default();
    let result = extract(&raw, 3, &repair);

    assert!(matches!(
        result,
        Err(ExtractionError::TooFewQuestions { kept: 2 })
    ));
}

#[test]
fn refusal_text_without_json_is_an_error() {
    let repair = ExplanationMarkerRepair::default();
    let result = extract("Извините, я не могу составить такой тест.", 3, &repair);

    assert!(matches!(result, Err(ExtractionError::NoJsonFound)));
}
