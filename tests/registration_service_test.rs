//! Registration service tests.
//!
//! The user store and token issuer are mocked; hashing uses a real
//! Argon2id hasher with minimal cost parameters.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::{mock, predicate::eq};
use uuid::Uuid;

use registration_api::config::HashingConfig;
use registration_api::domain::{
    CreatedUser, CredentialHasher, HashedCredential, NewUser, RegistrationInput, UserRole,
};
use registration_api::errors::{AppError, SigningError, StoreError};
use registration_api::infra::UserStore;
use registration_api::services::{
    Claims, Identity, JwtIssuer, RegistrationPolicy, RegistrationResult, RegistrationService,
    Registrar, SessionToken, TokenIssuer,
};

const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

mock! {
    pub Store {}

    #[async_trait]
    impl UserStore for Store {
        async fn create(&self, user: NewUser) -> Result<CreatedUser, StoreError>;
        async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
    }
}

mock! {
    pub Issuer {}

    impl TokenIssuer for Issuer {
        fn issue(&self, identity: &Identity) -> Result<SessionToken, SigningError>;
        fn decode(&self, token: &str) -> Result<Claims, SigningError>;
    }
}

fn hasher() -> Arc<CredentialHasher> {
    Arc::new(
        CredentialHasher::new(&HashingConfig {
            work_factor: 1,
            memory_kib: 8,
            parallelism: 1,
        })
        .unwrap(),
    )
}

fn jane() -> RegistrationInput {
    RegistrationInput {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
        password: "secret123".to_string(),
    }
}

fn created(user: &NewUser) -> CreatedUser {
    CreatedUser {
        id: Uuid::new_v4(),
        name: format!("{} {}", user.first_name, user.last_name),
    }
}

fn no_token() -> RegistrationPolicy {
    RegistrationPolicy {
        issue_token: false,
        role: UserRole::User,
    }
}

fn registrar(
    store: MockStore,
    issuer: impl TokenIssuer + 'static,
    policy: RegistrationPolicy,
) -> Registrar {
    Registrar::new(hasher(), Arc::new(store), Arc::new(issuer), policy)
}

#[tokio::test]
async fn test_empty_password_rejected_before_any_collaborator() {
    let mut store = MockStore::new();
    store.expect_create().times(0);
    let mut issuer = MockIssuer::new();
    issuer.expect_issue().times(0);

    let service = registrar(store, issuer, RegistrationPolicy::default());
    let mut input = jane();
    input.password = String::new();

    let result = service.register(input).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_store_receives_hashed_password_once() {
    let received: Arc<Mutex<Option<HashedCredential>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&received);

    let mut store = MockStore::new();
    store
        .expect_create()
        .times(1)
        .withf(|user| {
            user.first_name == "Jane"
                && user.last_name == "Doe"
                && user.email == "jane@x.com"
                && user.password.as_str() != "secret123"
        })
        .returning(move |user| {
            *sink.lock().unwrap() = Some(user.password.clone());
            Ok(created(&user))
        });

    let service = registrar(store, MockIssuer::new(), no_token());
    service.register(jane()).await.unwrap();

    let stored = received.lock().unwrap().clone().expect("store was called");
    assert!(hasher().verify("secret123", &stored));
    assert!(!hasher().verify("secret124", &stored));
}

#[tokio::test]
async fn test_without_token_returns_created_user() {
    let mut store = MockStore::new();
    store.expect_create().returning(|user| Ok(created(&user)));
    let mut issuer = MockIssuer::new();
    issuer.expect_issue().times(0);

    let service = registrar(store, issuer, no_token());

    match service.register(jane()).await.unwrap() {
        RegistrationResult::Created { user } => assert_eq!(user.name, "Jane Doe"),
        other => panic!("expected created user, got {:?}", other),
    }
}

#[tokio::test]
async fn test_token_subject_is_created_user() {
    let user_id = Uuid::new_v4();

    let mut store = MockStore::new();
    store.expect_create().returning(move |_| {
        Ok(CreatedUser {
            id: user_id,
            name: "Jane Doe".to_string(),
        })
    });

    let issuer = JwtIssuer::new(SECRET, 3600).unwrap();
    let service = registrar(
        store,
        JwtIssuer::new(SECRET, 3600).unwrap(),
        RegistrationPolicy::default(),
    );

    let token = match service.register(jane()).await.unwrap() {
        RegistrationResult::Token { token } => token,
        other => panic!("expected token, got {:?}", other),
    };

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);

    let claims = issuer.decode(&token.access_token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, "user");
}

#[tokio::test]
async fn test_configured_role_is_used_for_claims() {
    let mut store = MockStore::new();
    store.expect_create().returning(|user| Ok(created(&user)));

    let mut issuer = MockIssuer::new();
    issuer
        .expect_issue()
        .times(1)
        .withf(|identity| identity.role == UserRole::Admin)
        .returning(|_| {
            Ok(SessionToken {
                access_token: "signed".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
            })
        });

    let policy = RegistrationPolicy {
        issue_token: true,
        role: UserRole::Admin,
    };
    let service = registrar(store, issuer, policy);

    assert!(service.register(jane()).await.is_ok());
}

#[tokio::test]
async fn test_store_conflict_skips_token_issuance() {
    let mut store = MockStore::new();
    store
        .expect_create()
        .times(1)
        .returning(|_| Err(StoreError::Conflict("User".to_string())));
    store.expect_delete().times(0);
    let mut issuer = MockIssuer::new();
    issuer.expect_issue().times(0);

    let service = registrar(store, issuer, RegistrationPolicy::default());

    let result = service.register(jane()).await;
    assert!(matches!(
        result,
        Err(AppError::Persistence(StoreError::Conflict(_)))
    ));
}

#[tokio::test]
async fn test_signing_failure_rolls_back_user() {
    let user_id = Uuid::new_v4();

    let mut store = MockStore::new();
    store.expect_create().returning(move |_| {
        Ok(CreatedUser {
            id: user_id,
            name: "Jane Doe".to_string(),
        })
    });
    store
        .expect_delete()
        .with(eq(user_id))
        .times(1)
        .returning(|_| Ok(()));

    let mut issuer = MockIssuer::new();
    issuer
        .expect_issue()
        .times(1)
        .returning(|_| Err(SigningError::MissingSecret));

    let service = registrar(store, issuer, RegistrationPolicy::default());

    let result = service.register(jane()).await;
    assert!(matches!(
        result,
        Err(AppError::Signing(SigningError::MissingSecret))
    ));
}

#[tokio::test]
async fn test_failed_rollback_still_reports_signing_error() {
    let mut store = MockStore::new();
    store.expect_create().returning(|user| Ok(created(&user)));
    store
        .expect_delete()
        .times(1)
        .returning(|_| Err(StoreError::Unavailable("connection reset".to_string())));

    let mut issuer = MockIssuer::new();
    issuer
        .expect_issue()
        .returning(|_| Err(SigningError::MissingSecret));

    let service = registrar(store, issuer, RegistrationPolicy::default());

    let result = service.register(jane()).await;
    assert!(matches!(result, Err(AppError::Signing(_))));
}
