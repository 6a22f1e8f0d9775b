pub mod chat_service;
pub mod grading;
pub mod pe_service;
pub mod quiz_service;
pub mod taxonomy;
pub mod user_service;
