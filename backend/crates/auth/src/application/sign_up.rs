//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: UserId,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::MissingCredentials)?;
        let raw_password = RawPassword::new(input.password)?;

        // Argon2 is CPU-bound
        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))??;

        let user = self
            .user_repo
            .create(NewUser::new(user_name, password_hash))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::sqlite::SqliteAuthRepository;
    use crate::infra::sqlite::memory_pool;

    async fn use_case() -> SignUpUseCase<SqliteAuthRepository> {
        let repo = Arc::new(SqliteAuthRepository::new(memory_pool().await));
        SignUpUseCase::new(repo, Arc::new(AuthConfig::with_secret("test")))
    }

    fn input(user_name: &str, password: &str) -> SignUpInput {
        SignUpInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_assigns_id() {
        let use_case = use_case().await;
        let output = use_case.execute(input("bob", "pw123")).await.unwrap();
        assert!(output.user_id.value() > 0);
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_taken() {
        let use_case = use_case().await;
        use_case.execute(input("bob", "pw123")).await.unwrap();

        let err = use_case.execute(input("  bob ", "other")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_user_names_are_case_sensitive() {
        let use_case = use_case().await;
        use_case.execute(input("bob", "pw123")).await.unwrap();
        assert!(use_case.execute(input("Bob", "pw123")).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let use_case = use_case().await;
        for (name, password) in [("", "pw"), ("   ", "pw"), ("bob", "")] {
            let err = use_case.execute(input(name, password)).await.unwrap_err();
            assert!(matches!(err, AuthError::MissingCredentials));
        }
    }
}
