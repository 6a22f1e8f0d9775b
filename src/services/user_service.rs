use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{hash_password, verify_password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{AuthResponse, UserDto},
        },
    },
    repositories::UserRepository,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtService) -> Self {
        Self { users, jwt }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserDto> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Email '{}' is already in use",
                request.email
            )));
        }

        let salt = Uuid::new_v4().to_string();
        let password_hash = hash_password(&request.password, &salt);

        let user = self
            .users
            .create(User::new(
                &request.username,
                &request.email,
                &password_hash,
                &salt,
            ))
            .await?;

        log::info!("registered user {} ({})", user.username, user.id);
        Ok(user.into())
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        // Same error for unknown email and wrong password.
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &user.salt, &user.password_hash) {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.jwt.create_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, repositories::user_repository::MockUserRepository};

    fn jwt() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret, 1)
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "student".to_string(),
            email: "student@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn register_creates_user_with_hashed_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| user.password_hash != "secret123" && !user.salt.is_empty())
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repo), jwt());
        let dto = service
            .register(register_request())
            .await
            .expect("registration should succeed");

        assert_eq!(dto.username, "student");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| {
            Ok(Some(User::new(
                "existing",
                "student@example.com",
                "hash",
                "salt",
            )))
        });

        let service = UserService::new(Arc::new(repo), jwt());
        let result = service.register(register_request()).await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn login_returns_token_for_valid_credentials() {
        let salt = "salt-1";
        let user = User::new(
            "student",
            "student@example.com",
            &hash_password("secret123", salt),
            salt,
        );

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repo), jwt());
        let response = service
            .login(LoginRequest {
                email: "student@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .expect("login should succeed");

        assert!(!response.token.is_empty());
        assert_eq!(response.user.username, "student");
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let salt = "salt-1";
        let user = User::new(
            "student",
            "student@example.com",
            &hash_password("secret123", salt),
            salt,
        );

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repo), jwt());
        let result = service
            .login(LoginRequest {
                email: "student@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
