pub mod auth_handler;
pub mod health_handler;
pub mod pe_handler;
pub mod quiz_handler;
pub mod taxonomy_handler;

pub use auth_handler::{login, register};
pub use health_handler::health_check;
pub use pe_handler::{get_pe_results, save_pe_result};
pub use quiz_handler::{check_test, delete_test, generate_test, get_dashboard, get_test, get_tests};
pub use taxonomy_handler::{get_subjects_topics, get_topics};
