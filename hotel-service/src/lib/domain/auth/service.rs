use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedStaff;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::NewCredential;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialRepository;

/// Domain service implementation for staff authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `authenticator` - Password hashing and token lifecycle
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<String, AuthError> {
        if self
            .repository
            .exists_by_username(&command.username)
            .await?
        {
            tracing::debug!(username = %command.username, "Registration rejected, username taken");
            return Err(AuthError::AlreadyExists(command.username.to_string()));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let credential = self
            .repository
            .insert(NewCredential {
                username: command.username,
                password_hash,
                role: command.role,
            })
            .await?;

        tracing::info!(
            user_id = %credential.id,
            username = %credential.username,
            role = %credential.role,
            "Staff account registered"
        );

        Ok(self.authenticator.generate_token(&credential.identity())?)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let credential = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| AuthError::NotFound(command.username.to_string()))?;

        let result = self
            .authenticator
            .authenticate(
                &command.password,
                &credential.password_hash,
                &credential.identity(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::BadCredential,
                AuthenticationError::PasswordError(err) => {
                    AuthError::InternalFailure(format!("Password verification failed: {}", err))
                }
                AuthenticationError::JwtError(err) => AuthError::from(err),
            })?;

        tracing::debug!(user_id = %credential.id, "Staff logged in");

        Ok(result.access_token)
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedStaff, AuthError> {
        let claims = self.authenticator.validate_token(token)?;
        AuthenticatedStaff::try_from(claims)
    }
}

#[cfg(test)]
mod tests {
    use auth::SecretStore;
    use auth::StaticSecret;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::auth::models::Credential;
    use crate::domain::auth::models::CredentialId;
    use crate::domain::auth::models::Role;
    use crate::domain::auth::models::Username;

    mock! {
        pub TestCredentialRepository {}

        #[async_trait]
        impl CredentialRepository for TestCredentialRepository {
            async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError>;
            async fn insert(&self, credential: NewCredential) -> Result<Credential, AuthError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<Credential>, AuthError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(Arc::new(SecretStore::new(
            StaticSecret::new("test-secret-key-for-jwt-signing-at-least-32-bytes"),
        ))))
    }

    fn stored_credential(authenticator: &Authenticator, password: &str) -> Credential {
        Credential {
            id: CredentialId(17),
            username: Username::new("reception".to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            role: Role::MainManager,
            created_at: Utc::now(),
        }
    }

    fn register_command() -> RegisterCommand {
        RegisterCommand::new(
            Username::new("reception".to_string()).unwrap(),
            "pass_word!".to_string(),
            Role::MainManager,
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_exists_by_username()
            .times(1)
            .returning(|_| Ok(false));

        repository
            .expect_insert()
            .withf(|credential| {
                credential.username.as_str() == "reception"
                    && credential.role == Role::MainManager
                    && credential.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|credential| {
                Ok(Credential {
                    id: CredentialId(1),
                    username: credential.username,
                    password_hash: credential.password_hash,
                    role: credential.role,
                    created_at: Utc::now(),
                })
            });

        let service = AuthService::new(Arc::new(repository), authenticator());

        let token = service
            .register(register_command())
            .await
            .expect("Registration failed");

        let staff = service.verify(&token).expect("Token verification failed");
        assert_eq!(staff.id, CredentialId(1));
        assert_eq!(staff.username, "reception");
        assert_eq!(staff.role, Role::MainManager);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_exists_by_username()
            .times(1)
            .returning(|_| Ok(true));
        repository.expect_insert().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(AuthError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_lost_insert_race() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_exists_by_username()
            .times(1)
            .returning(|_| Ok(false));
        repository
            .expect_insert()
            .times(1)
            .returning(|credential| Err(AuthError::AlreadyExists(credential.username.to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(AuthError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_oversized_password() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_exists_by_username()
            .times(1)
            .returning(|_| Ok(false));
        repository.expect_insert().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let command = RegisterCommand::new(
            Username::new("reception".to_string()).unwrap(),
            "x".repeat(2000),
            Role::MainManager,
        );
        let result = service.register(command).await;
        assert!(matches!(result, Err(AuthError::InvalidPassword(_))));
    }

    #[tokio::test]
    async fn test_register_database_failure() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_exists_by_username()
            .times(1)
            .returning(|_| Err(AuthError::InternalFailure("connection reset".to_string())));
        repository.expect_insert().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(result, Err(AuthError::InternalFailure(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let authenticator = authenticator();
        let credential = stored_credential(&authenticator, "pass_word!");

        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .withf(|username| username.as_str() == "reception")
            .times(1)
            .returning(move |_| Ok(Some(credential.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator);

        let command = LoginCommand::new(
            Username::new("reception".to_string()).unwrap(),
            "pass_word!".to_string(),
        );
        let token = service.login(command).await.expect("Login failed");

        let staff = service.verify(&token).unwrap();
        assert_eq!(staff.id, CredentialId(17));
        assert_eq!(staff.username, "reception");
        assert_eq!(staff.role, Role::MainManager);
        assert!(service.is_valid(&token));
    }

    #[tokio::test]
    async fn test_login_unknown_username() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let command = LoginCommand::new(
            Username::new("nobody".to_string()).unwrap(),
            "pass_word!".to_string(),
        );
        let result = service.login(command).await;
        assert!(matches!(result, Err(AuthError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = authenticator();
        let credential = stored_credential(&authenticator, "pass_word!");

        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(credential.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator);

        let command = LoginCommand::new(
            Username::new("reception".to_string()).unwrap(),
            "wrong_password".to_string(),
        );
        let result = service.login(command).await;
        assert!(matches!(result, Err(AuthError::BadCredential)));
    }

    #[tokio::test]
    async fn test_login_with_malformed_stored_hash() {
        let mut repository = MockTestCredentialRepository::new();
        repository.expect_find_by_username().times(1).returning(|_| {
            Ok(Some(Credential {
                id: CredentialId(2),
                username: Username::new("legacy".to_string()).unwrap(),
                password_hash: "not-a-phc-string".to_string(),
                role: Role::Cleaner,
                created_at: Utc::now(),
            }))
        });

        let service = AuthService::new(Arc::new(repository), authenticator());

        let command = LoginCommand::new(
            Username::new("legacy".to_string()).unwrap(),
            "pass_word!".to_string(),
        );
        let result = service.login(command).await;
        assert!(matches!(result, Err(AuthError::InternalFailure(_))));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let repository = MockTestCredentialRepository::new();
        let service = AuthService::new(Arc::new(repository), authenticator());

        assert!(matches!(
            service.verify("not.a.token"),
            Err(AuthError::TokenMalformed(_))
        ));
        assert!(!service.is_valid("not.a.token"));
    }
}
