pub mod pe_result_repository;
pub mod test_result_repository;
pub mod user_repository;

pub use pe_result_repository::{MongoPeResultRepository, PeResultRepository};
pub use test_result_repository::{MongoTestResultRepository, TestResultRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
