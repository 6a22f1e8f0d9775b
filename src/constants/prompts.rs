//! Prompt templates for quiz generation. Both embed the exact output schema
//! and one worked example; the model still gets it wrong often enough that
//! the extraction pipeline has to clean up after it.

/// Prompt for generating a quiz from user-supplied text.
pub fn custom_text_prompt(text: &str, num_questions: usize) -> String {
    format!(
        r#"Ты - эксперт по созданию тестов. Создай тест из {num_questions} вопросов по тексту:

{text}

ВАЖНО:
- correct - это ИНДЕКС от 0 до 3
- 0 = первый вариант, 1 = второй, 2 = третий, 3 = четвертый
- В explanation первым делом укажи какой вариант правильный

ПРИМЕР ПРАВИЛЬНОГО JSON:
{{
  "questions": [
    {{
      "question": "Какая планета ближайшая к Солнцу?",
      "options": ["Меркурий", "Венера", "Земля", "Марс"],
      "correct": 0,
      "explanation": "Правильный ответ - Меркурий (первый вариант). Меркурий находится ближе всего к Солнцу на расстоянии 58 млн км. Венера - вторая планета. Земля - третья. Марс - четвертая."
    }}
  ]
}}

Верни ТОЛЬКО JSON без пояснений:"#
    )
}

/// Prompt for generating a quiz on a subject/topic pair from the taxonomy.
pub fn subject_topic_prompt(subject: &str, topic: &str, num_questions: usize) -> String {
    format!(
        r#"Создай тест: предмет "{subject}", тема "{topic}", {num_questions} вопросов.

СТРОГИЙ ФОРМАТ:
- correct = индекс 0-3 (0-первый, 1-второй, 2-третий, 3-четвертый)
- В explanation сначала пиши КАКОЙ вариант правильный

ПРИМЕР:
{{
  "questions": [
    {{
      "question": "Сколько будет 2+2?",
      "options": ["3", "4", "5", "6"],
      "correct": 1,
      "explanation": "Правильный ответ - 4 (второй вариант). Это базовая операция сложения: 2+2=4. Вариант 3 неверен, так как 2+1=3. Вариант 5 неверен, так как 2+3=5. Вариант 6 неверен, так как 2+4=6."
    }}
  ]
}}

Верни ТОЛЬКО JSON:"#
    )
}
