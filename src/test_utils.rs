//! Shared fixtures for unit tests.

pub mod fixtures {
    use serde_json::json;

    use crate::models::domain::{QuestionRecord, QuizPayload, TestResult, OPTION_COUNT};

    /// A plausible chat-completion reply: fenced JSON with `n` well-formed
    /// questions whose explanations already confirm the stored answer.
    pub fn raw_model_output(n: usize) -> String {
        let questions: Vec<_> = (0..n)
            .map(|i| {
                let correct = i % OPTION_COUNT;
                let options = vec![
                    format!("Вариант А-{}", i),
                    format!("Вариант Б-{}", i),
                    format!("Вариант В-{}", i),
                    format!("Вариант Г-{}", i),
                ];
                json!({
                    "question": format!("Вопрос номер {}?", i + 1),
                    "options": options,
                    "correct": correct,
                    "explanation": format!(
                        "Правильный ответ — {}, потому что так устроен этот предмет.",
                        options[correct]
                    ),
                })
            })
            .collect();

        format!("```json\n{}\n```", json!({ "questions": questions }))
    }

    /// A persisted test with `n` questions and rotating correct indices.
    pub fn stored_test(user_id: &str, n: usize) -> TestResult {
        let questions = (0..n)
            .map(|i| QuestionRecord {
                question: format!("Вопрос номер {}?", i + 1),
                options: vec![
                    format!("Вариант А-{}", i),
                    format!("Вариант Б-{}", i),
                    format!("Вариант В-{}", i),
                    format!("Вариант Г-{}", i),
                ],
                correct: i % OPTION_COUNT,
                explanation: format!("Пояснение к вопросу номер {}.", i + 1),
            })
            .collect();

        TestResult::new(user_id, "Астрономия", "Планеты", QuizPayload { questions })
    }
}
