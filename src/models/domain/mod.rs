pub mod pe_result;
pub mod question;
pub mod test_result;
pub mod user;

pub use pe_result::PhysicalEducationResult;
pub use question::{QuestionRecord, QuizPayload, OPTION_COUNT};
pub use test_result::TestResult;
pub use user::User;
