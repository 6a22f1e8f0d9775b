//! Turns the free-text reply of the chat model into a validated
//! [`QuizPayload`]. The model is asked for strict JSON but routinely wraps
//! it in commentary or code fences, mislabels the answer index, or pads the
//! array with broken entries; everything here is about salvaging a usable
//! quiz out of that.

pub mod repair;

pub use repair::{ExplanationMarkerRepair, RepairStrategy};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::models::domain::question::{QuestionRecord, QuizPayload, OPTION_COUNT};

/// Payloads with fewer surviving questions than this are rejected outright.
pub const MIN_QUESTIONS: usize = 3;

/// Explanations shorter than this many characters are replaced with a
/// synthesized one-liner naming the correct option.
pub const MIN_EXPLANATION_CHARS: usize = 30;

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json|JSON)?").expect("code fence pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in model output")]
    NoJsonFound,

    #[error("model output is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("parsed object contains no questions")]
    NoQuestions,

    #[error("too few usable questions survived validation: {kept}")]
    TooFewQuestions { kept: usize },
}

/// Extracts, validates and repairs a quiz from raw model output.
///
/// Pure function of its inputs; all I/O belongs to the caller. The returned
/// payload holds between [`MIN_QUESTIONS`] and `requested_count` questions,
/// each satisfying the [`QuestionRecord`] invariants.
pub fn extract(
    raw: &str,
    requested_count: usize,
    repair: &dyn RepairStrategy,
) -> Result<QuizPayload, ExtractionError> {
    let cleaned = CODE_FENCE.replace_all(raw, "");

    // The candidate spans the first '{' to the last '}'. Both are ASCII, so
    // byte indices are safe slice boundaries even in Cyrillic text.
    let start = cleaned.find('{').ok_or(ExtractionError::NoJsonFound)?;
    let end = cleaned
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(ExtractionError::NoJsonFound)?;
    let candidate = &cleaned[start..=end];

    let parsed: Value = serde_json::from_str(candidate)
        .map_err(|err| ExtractionError::MalformedJson(err.to_string()))?;

    let items = parsed
        .get("questions")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ExtractionError::NoQuestions)?;

    let mut questions = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let number = index + 1;

        let (Some(question), Some(raw_options), Some(raw_correct), Some(explanation)) = (
            item.get("question").and_then(Value::as_str),
            item.get("options").and_then(Value::as_array),
            item.get("correct"),
            item.get("explanation").and_then(Value::as_str),
        ) else {
            log::warn!("question {}: missing required fields, dropped", number);
            continue;
        };

        if raw_options.len() != OPTION_COUNT {
            log::warn!(
                "question {}: expected {} options, got {}, dropped",
                number,
                OPTION_COUNT,
                raw_options.len()
            );
            continue;
        }

        let Some(options) = raw_options
            .iter()
            .map(|option| option.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>()
        else {
            log::warn!("question {}: non-string options, dropped", number);
            continue;
        };

        // A broken index is noise worth keeping the question over: most
        // generated keys are right, and the cross-check below gets a chance
        // to recover the outliers.
        let mut correct = match raw_correct.as_i64() {
            Some(value) if (0..OPTION_COUNT as i64).contains(&value) => value as usize,
            _ => {
                log::warn!(
                    "question {}: invalid correct index {}, reset to 0",
                    number,
                    raw_correct
                );
                0
            }
        };

        if let Some(fixed) = repair.reconcile(&options, correct, explanation) {
            if fixed != correct {
                log::info!(
                    "question {}: correct index {} -> {} (explanation match)",
                    number,
                    correct,
                    fixed
                );
                correct = fixed;
            }
        }

        let explanation = if explanation.chars().count() < MIN_EXPLANATION_CHARS {
            synthesize_explanation(&options[correct])
        } else {
            explanation.to_string()
        };

        questions.push(QuestionRecord {
            question: question.to_string(),
            options,
            correct,
            explanation,
        });
    }

    if questions.len() < MIN_QUESTIONS {
        return Err(ExtractionError::TooFewQuestions {
            kept: questions.len(),
        });
    }

    // Never pad: the model may legitimately return fewer than requested.
    questions.truncate(requested_count);

    Ok(QuizPayload { questions })
}

fn synthesize_explanation(correct_option: &str) -> String {
    format!("Правильный ответ: {}.", correct_option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repair() -> ExplanationMarkerRepair {
        ExplanationMarkerRepair::default()
    }

    fn planet_question(correct: usize) -> Value {
        let options = ["Меркурий", "Венера", "Земля", "Марс"];
        json!({
            "question": "Какая планета ближайшая к Солнцу?",
            "options": options,
            "correct": correct,
            "explanation": format!(
                "Правильный ответ - {}. Это следует из порядка планет в Солнечной системе.",
                options[correct.min(3)]
            ),
        })
    }

    fn payload(questions: Vec<Value>) -> String {
        json!({ "questions": questions }).to_string()
    }

    #[test]
    fn well_formed_input_round_trips() {
        let raw = payload(vec![
            planet_question(0),
            planet_question(1),
            planet_question(2),
        ]);

        let result = extract(&raw, 10, &repair()).expect("payload should extract");

        assert_eq!(result.questions.len(), 3);
        assert_eq!(result.questions[0].correct, 0);
        assert_eq!(result.questions[1].correct, 1);
        assert_eq!(result.questions[2].correct, 2);
        assert_eq!(result.questions[0].options.len(), OPTION_COUNT);
    }

    #[test]
    fn truncates_to_requested_count_in_order() {
        let raw = payload(vec![
            planet_question(0),
            planet_question(1),
            planet_question(2),
            planet_question(3),
            planet_question(0),
        ]);

        let result = extract(&raw, 3, &repair()).expect("payload should extract");

        assert_eq!(result.questions.len(), 3);
        assert_eq!(result.questions[0].correct, 0);
        assert_eq!(result.questions[2].correct, 2);
    }

    #[test]
    fn two_questions_fail_minimum_gate() {
        let raw = payload(vec![planet_question(0), planet_question(1)]);

        let result = extract(&raw, 10, &repair());

        assert_eq!(result, Err(ExtractionError::TooFewQuestions { kept: 2 }));
    }

    #[test]
    fn three_questions_pass_minimum_gate() {
        let raw = payload(vec![
            planet_question(0),
            planet_question(1),
            planet_question(2),
        ]);

        assert!(extract(&raw, 10, &repair()).is_ok());
    }

    #[test]
    fn out_of_range_index_is_clamped_not_dropped() {
        let bad = json!({
            "question": "Вопрос с испорченным индексом?",
            "options": ["Альфа", "Бета", "Гамма", "Дельта"],
            "correct": 7,
            "explanation": "Объяснение достаточно длинное, но без упоминания вариантов.",
        });
        let raw = payload(vec![bad, planet_question(1), planet_question(2)]);

        let result = extract(&raw, 10, &repair()).expect("payload should extract");

        assert_eq!(result.questions.len(), 3);
        assert_eq!(result.questions[0].correct, 0);
    }

    #[test]
    fn explanation_overrides_inconsistent_index() {
        let disagreeing = json!({
            "question": "Какая буква правильная?",
            "options": ["A", "B", "C", "D"],
            "correct": 0,
            "explanation": "Правильный ответ - C, потому что так сказано в учебнике.",
        });
        let raw = payload(vec![disagreeing, planet_question(1), planet_question(2)]);

        let result = extract(&raw, 10, &repair()).expect("payload should extract");

        assert_eq!(result.questions[0].correct, 2);
    }

    #[test]
    fn code_fences_and_commentary_are_stripped() {
        let bare = payload(vec![
            planet_question(0),
            planet_question(1),
            planet_question(2),
        ]);
        let noisy = format!("Вот ваш тест:\n```json\n{}\n```\nНадеюсь, поможет!", bare);

        let from_bare = extract(&bare, 10, &repair()).expect("bare payload should extract");
        let from_noisy = extract(&noisy, 10, &repair()).expect("noisy payload should extract");

        assert_eq!(from_bare, from_noisy);
    }

    #[test]
    fn input_without_braces_fails_cleanly() {
        let result = extract("Извините, я не могу составить тест.", 10, &repair());
        assert_eq!(result, Err(ExtractionError::NoJsonFound));
    }

    #[test]
    fn closing_brace_before_opening_brace_is_no_json() {
        let result = extract("} ничего полезного {", 10, &repair());
        assert_eq!(result, Err(ExtractionError::NoJsonFound));
    }

    #[test]
    fn unparseable_candidate_is_malformed_json() {
        let result = extract("{ \"questions\": [ broken ] }", 10, &repair());
        assert!(matches!(result, Err(ExtractionError::MalformedJson(_))));
    }

    #[test]
    fn missing_questions_array_fails() {
        let result = extract("{ \"items\": [] }", 10, &repair());
        assert_eq!(result, Err(ExtractionError::NoQuestions));

        let result = extract("{ \"questions\": [] }", 10, &repair());
        assert_eq!(result, Err(ExtractionError::NoQuestions));
    }

    #[test]
    fn short_explanation_is_synthesized_from_correct_option() {
        let terse = json!({
            "question": "Какая планета ближайшая к Солнцу?",
            "options": ["Меркурий", "Венера", "Земля", "Марс"],
            "correct": 0,
            "explanation": "Ok.",
        });
        let raw = payload(vec![terse, planet_question(1), planet_question(2)]);

        let result = extract(&raw, 10, &repair()).expect("payload should extract");

        assert!(result.questions[0].explanation.contains("Меркурий"));
    }

    #[test]
    fn structurally_broken_questions_are_dropped_silently() {
        let missing_key = json!({
            "question": "Вопрос без вариантов?",
            "correct": 0,
            "explanation": "Объяснение без вариантов ответа, достаточно длинное.",
        });
        let wrong_count = json!({
            "question": "Вопрос с тремя вариантами?",
            "options": ["Один", "Два", "Три"],
            "correct": 0,
            "explanation": "Объяснение для вопроса с тремя вариантами ответа.",
        });
        let raw = payload(vec![
            missing_key,
            wrong_count,
            planet_question(0),
            planet_question(1),
            planet_question(2),
        ]);

        let result = extract(&raw, 10, &repair()).expect("payload should extract");

        assert_eq!(result.questions.len(), 3);
    }
}
