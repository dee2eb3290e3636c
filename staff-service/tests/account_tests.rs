use std::sync::Arc;

use auth::Authenticator;
use staff_service::domain::auth::errors::AuthError;
use staff_service::domain::auth::guard::AccessGuard;
use staff_service::domain::auth::models::AuthenticatedSubject;
use staff_service::domain::auth::models::LoginCommand;
use staff_service::domain::auth::models::RegisterCommand;
use staff_service::domain::auth::ports::AuthServicePort;
use staff_service::domain::auth::service::AuthService;
use staff_service::domain::identity::models::EmailAddress;
use staff_service::domain::identity::models::Password;
use staff_service::domain::identity::models::Username;
use staff_service::outbound::repositories::InMemoryIdentityRepository;
use staff_service::outbound::repositories::InMemoryStore;

const SECRET: &[u8] = b"account-tests-secret-with-at-least-32-bytes";

struct Accounts {
    service: AuthService<InMemoryIdentityRepository>,
    guard: AccessGuard,
}

impl Accounts {
    fn new() -> Self {
        let authenticator = Arc::new(Authenticator::new(SECRET));
        let store = InMemoryStore::new();
        Self {
            service: AuthService::new(Arc::new(store.identities()), Arc::clone(&authenticator)),
            guard: AccessGuard::new(authenticator),
        }
    }

    async fn register(&self, username: &str, email: &str) {
        self.service
            .register(RegisterCommand::new(
                Username::new(username.to_string()).unwrap(),
                EmailAddress::new(email.to_string()).unwrap(),
                Password::new("pw12345".to_string()).unwrap(),
            ))
            .await
            .unwrap();
    }

    async fn login(&self, username: &str, password: &str) -> Result<auth::TokenPair, AuthError> {
        self.service
            .login(LoginCommand::new(username.to_string(), password.to_string()))
            .await
    }

    async fn subject(&self, username: &str) -> (AuthenticatedSubject, auth::TokenPair) {
        let tokens = self.login(username, "pw12345").await.unwrap();
        let subject = self
            .guard
            .authenticate(Some(&tokens.access_token))
            .unwrap();
        (subject, tokens)
    }
}

#[tokio::test]
async fn test_deactivated_identity_cannot_login_or_refresh() {
    let accounts = Accounts::new();
    accounts.register("alice", "alice@example.com").await;
    accounts.register("bob", "bob@example.com").await;

    let (admin, _) = accounts.subject("alice").await;
    let (bob, bob_tokens) = accounts.subject("bob").await;

    let profile = accounts
        .service
        .set_active(&admin, &bob.identity_id(), false)
        .await
        .unwrap();
    assert!(!profile.is_active);

    assert!(matches!(
        accounts.login("bob", "pw12345").await,
        Err(AuthError::Inactive)
    ));
    assert!(matches!(
        accounts.login("bob", "wrong-password").await,
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        accounts.service.refresh(&bob_tokens.refresh_token).await,
        Err(AuthError::Inactive)
    ));

    // Access tokens already issued stay valid until they expire.
    assert!(accounts
        .guard
        .authenticate(Some(&bob_tokens.access_token))
        .is_ok());

    accounts
        .service
        .set_active(&admin, &bob.identity_id(), true)
        .await
        .unwrap();
    assert!(accounts.login("bob", "pw12345").await.is_ok());
}

#[tokio::test]
async fn test_current_identity_after_refresh() {
    let accounts = Accounts::new();
    accounts.register("alice", "alice@example.com").await;
    let (_, tokens) = accounts.subject("alice").await;

    let renewed = accounts
        .service
        .refresh(&tokens.refresh_token)
        .await
        .unwrap();
    let subject = accounts
        .guard
        .authenticate(Some(&renewed.access_token))
        .unwrap();

    let profile = accounts.service.current_identity(&subject).await.unwrap();
    assert_eq!(profile.username.as_str(), "alice");
    assert_eq!(profile.email.as_str(), "alice@example.com");
}
