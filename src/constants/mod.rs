pub mod prompts;

/// Subject/topic labels stored for quizzes generated from pasted text, where
/// no taxonomy entry applies.
pub const CUSTOM_TEXT_SUBJECT: &str = "Пользовательский материал";
pub const CUSTOM_TEXT_TOPIC: &str = "Тест из загруженного текста";
