//! Sign In Use Case
//!
//! Authenticates a user and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::SessionTokenService;
use crate::domain::entity::session::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user: AuthenticatedUser,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    tokens: Arc<SessionTokenService>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        config: Arc<AuthConfig>,
        tokens: Arc<SessionTokenService>,
    ) -> Self {
        Self {
            user_repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::MissingCredentials)?;
        let raw_password = RawPassword::new(input.password)?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;

        // Unknown users still pay for one hash so timing does not reveal them
        let pepper = self.config.password_pepper.clone();
        let (user, password_valid) = tokio::task::spawn_blocking(move || {
            let valid = match &user {
                Some(user) => user.password_hash.verify(&raw_password, pepper.as_deref()),
                None => UserPassword::verify_dummy(&raw_password, pepper.as_deref()),
            };
            (user, valid)
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let identity = AuthenticatedUser::from(&user);
        let token = self.tokens.issue(&identity)?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput {
            token,
            user: identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::sqlite::{SqliteAuthRepository, memory_pool};

    struct Fixture {
        sign_up: SignUpUseCase<SqliteAuthRepository>,
        sign_in: SignInUseCase<SqliteAuthRepository>,
        tokens: Arc<SessionTokenService>,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(SqliteAuthRepository::new(memory_pool().await));
        let config = Arc::new(AuthConfig::with_secret("test"));
        let tokens = Arc::new(SessionTokenService::new(&config));
        Fixture {
            sign_up: SignUpUseCase::new(repo.clone(), config.clone()),
            sign_in: SignInUseCase::new(repo, config, tokens.clone()),
            tokens,
        }
    }

    fn sign_in_input(user_name: &str, password: &str) -> SignInInput {
        SignInInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    async fn register(fixture: &Fixture, user_name: &str, password: &str) {
        fixture
            .sign_up
            .execute(SignUpInput {
                user_name: user_name.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sign_in_issues_verifiable_token() {
        let fixture = fixture().await;
        register(&fixture, "bob", "pw123").await;

        let output = fixture
            .sign_in
            .execute(sign_in_input(" bob ", "pw123"))
            .await
            .unwrap();

        let claims = fixture.tokens.verify(&output.token).unwrap();
        assert_eq!(claims.identity(), output.user);
        assert_eq!(claims.username, "bob");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let fixture = fixture().await;
        register(&fixture, "bob", "pw123").await;

        let wrong = fixture
            .sign_in
            .execute(sign_in_input("bob", "nope"))
            .await
            .unwrap_err();
        let unknown = fixture
            .sign_in
            .execute(sign_in_input("ghost", "pw123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let fixture = fixture().await;
        let err = fixture
            .sign_in
            .execute(sign_in_input("bob", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }
}
