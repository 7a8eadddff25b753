use orbx_api::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use orbx_auth_types::token::validate_token;
use orbx_core::error::AppError;
use orbx_domain::user::UserRole;
use orbx_testing::auth::test_keys;

use crate::helpers::MemoryDb;

fn register_input(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: Some("Ana".to_owned()),
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: Some(email.to_owned()),
        password: Some(password.to_owned()),
    }
}

#[tokio::test]
async fn should_register_user_with_hashed_password_and_user_role() {
    let db = MemoryDb::new();
    let usecase = RegisterUseCase { users: db.users() };

    let user = usecase
        .execute(register_input(" Ana@Example.com ", "s3cret"))
        .await
        .unwrap();

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, UserRole::User);
    assert_ne!(user.password_hash, "s3cret");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn should_conflict_on_duplicate_email_ignoring_case() {
    let db = MemoryDb::new();
    let usecase = RegisterUseCase { users: db.users() };
    usecase
        .execute(register_input("ana@example.com", "s3cret"))
        .await
        .unwrap();

    let err = usecase
        .execute(register_input("ANA@example.com", "other"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "a user with this email already exists"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn should_validate_registration_before_persistence() {
    let db = MemoryDb::broken();
    let usecase = RegisterUseCase { users: db.users() };

    let err = usecase
        .execute(RegisterInput {
            password: None,
            ..register_input("ana@example.com", "")
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m == "password required"));

    let err = usecase
        .execute(register_input("not-an-email", "s3cret"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m == "invalid email"));

    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn should_issue_token_carrying_identity_on_login() {
    let db = MemoryDb::new();
    let user = RegisterUseCase { users: db.users() }
        .execute(register_input("ana@example.com", "s3cret"))
        .await
        .unwrap();
    let keys = test_keys();
    let login = LoginUseCase {
        users: db.users(),
        keys: keys.clone(),
    };

    let output = login
        .execute(login_input("Ana@Example.com", "s3cret"))
        .await
        .unwrap();

    assert_eq!(output.user.id, user.id);
    let identity = validate_token(&output.token, &keys).unwrap();
    assert_eq!(identity.id, user.id);
    assert_eq!(identity.email, "ana@example.com");
    assert_eq!(identity.role, UserRole::User);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_email_alike() {
    let db = MemoryDb::new();
    RegisterUseCase { users: db.users() }
        .execute(register_input("ana@example.com", "s3cret"))
        .await
        .unwrap();
    let login = LoginUseCase {
        users: db.users(),
        keys: test_keys(),
    };

    for input in [
        login_input("ana@example.com", "wrong"),
        login_input("bob@example.com", "s3cret"),
    ] {
        let err = login.execute(input).await.unwrap_err();
        assert!(
            matches!(err, AppError::Unauthorized(ref m) if m == "invalid credentials"),
            "got {err:?}"
        );
    }
}
