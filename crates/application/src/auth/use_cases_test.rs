#[cfg(test)]
mod tests {
    use crate::auth::dtos::*;
    use crate::auth::use_cases::*;
    use crate::test_support::test_db;
    use crate::AppError;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use validator::Validate;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 900,
        }
    }

    fn register_req(phone: &str, username: &str) -> RegisterRequest {
        RegisterRequest {
            phone: phone.to_string(),
            username: username.to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_register_validation() {
        assert!(register_req("13812345678", "alice").validate().is_ok());

        // Wrong prefix
        assert!(register_req("12812345678", "alice").validate().is_err());
        // Too short
        assert!(register_req("1381234567", "alice").validate().is_err());
        // International format is not accepted
        assert!(register_req("+8613812345678", "alice").validate().is_err());

        // Username bounds
        assert!(register_req("13812345678", "a").validate().is_err());
        assert!(register_req("13812345678", &"a".repeat(21)).validate().is_err());
        assert!(register_req("13812345678", "张三").validate().is_ok());

        let short_password = RegisterRequest {
            password: "12345".to_string(),
            ..register_req("13812345678", "alice")
        };
        assert!(short_password.validate().is_err());
    }

    #[tokio::test]
    async fn test_register_then_login_by_phone_and_username() {
        let db = test_db().await;
        let config = auth_config();

        let registered = RegisterUseCase::execute(&db, register_req(" 13812345678 ", " alice "))
            .await
            .unwrap();
        assert_eq!(registered.username, "alice");
        assert_eq!(registered.phone, "13812345678");

        let by_phone = LoginUseCase::execute(
            &db,
            &config,
            LoginRequest {
                login_field: "13812345678".to_string(),
                password: "secret123".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(by_phone.user_id, registered.user_id);
        assert_eq!(by_phone.expires_in, 900);

        let claims = decode::<Claims>(
            &by_phone.access_token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap()
        .claims;
        assert_eq!(claims.user_id(), Some(registered.user_id));
        assert_eq!(claims.token_type, "access");

        let by_username = LoginUseCase::execute(
            &db,
            &config,
            LoginRequest {
                login_field: "alice".to_string(),
                password: "secret123".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(by_username.user_id, registered.user_id);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let db = test_db().await;
        let config = auth_config();
        RegisterUseCase::execute(&db, register_req("13812345678", "alice"))
            .await
            .unwrap();

        let wrong_password = LoginUseCase::execute(
            &db,
            &config,
            LoginRequest {
                login_field: "alice".to_string(),
                password: "not-it".to_string(),
            },
        )
        .await;
        assert!(matches!(wrong_password, Err(AppError::Authentication(_))));

        let unknown = LoginUseCase::execute(
            &db,
            &config,
            LoginRequest {
                login_field: "bob".to_string(),
                password: "secret123".to_string(),
            },
        )
        .await;
        assert!(matches!(unknown, Err(AppError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let db = test_db().await;
        RegisterUseCase::execute(&db, register_req("13812345678", "alice"))
            .await
            .unwrap();

        let same_phone = RegisterUseCase::execute(&db, register_req("13812345678", "bob")).await;
        assert!(matches!(same_phone, Err(AppError::Conflict(_))));

        let same_username = RegisterUseCase::execute(&db, register_req("13912345678", "alice")).await;
        assert!(matches!(same_username, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_reset_password() {
        let db = test_db().await;
        let config = auth_config();
        RegisterUseCase::execute(&db, register_req("13812345678", "alice"))
            .await
            .unwrap();

        let missing = ResetPasswordUseCase::execute(
            &db,
            ResetPasswordRequest {
                username: "nobody".to_string(),
                new_password: "newsecret".to_string(),
            },
        )
        .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        ResetPasswordUseCase::execute(
            &db,
            ResetPasswordRequest {
                username: "alice".to_string(),
                new_password: "newsecret".to_string(),
            },
        )
        .await
        .unwrap();

        let login = LoginUseCase::execute(
            &db,
            &config,
            LoginRequest {
                login_field: "alice".to_string(),
                password: "newsecret".to_string(),
            },
        )
        .await;
        assert!(login.is_ok());
    }

    #[tokio::test]
    async fn test_availability_checks() {
        let db = test_db().await;
        RegisterUseCase::execute(&db, register_req("13812345678", "alice"))
            .await
            .unwrap();

        assert!(CheckUsernameUseCase::execute(&db, "alice").await.unwrap().exists);
        assert!(!CheckUsernameUseCase::execute(&db, "bob").await.unwrap().exists);
        assert!(!CheckUsernameUseCase::execute(&db, "  ").await.unwrap().exists);

        assert!(CheckPhoneUseCase::execute(&db, "13812345678").await.unwrap().exists);
        assert!(!CheckPhoneUseCase::execute(&db, "13900000000").await.unwrap().exists);
    }

    #[tokio::test]
    async fn test_update_profile() {
        let db = test_db().await;
        let alice = RegisterUseCase::execute(&db, register_req("13812345678", "alice"))
            .await
            .unwrap();
        RegisterUseCase::execute(&db, register_req("13912345678", "bob"))
            .await
            .unwrap();

        let taken = UpdateProfileUseCase::execute(
            &db,
            alice.user_id,
            UpdateProfileRequest {
                username: Some("bob".to_string()),
                avatar_ref: None,
            },
        )
        .await;
        assert!(matches!(taken, Err(AppError::Conflict(_))));

        let updated = UpdateProfileUseCase::execute(
            &db,
            alice.user_id,
            UpdateProfileRequest {
                username: Some("alice_w".to_string()),
                avatar_ref: Some("avatars/alice.png".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.username, "alice_w");
        assert_eq!(updated.avatar_ref.as_deref(), Some("avatars/alice.png"));

        let cleared = UpdateProfileUseCase::execute(
            &db,
            alice.user_id,
            UpdateProfileRequest {
                username: None,
                avatar_ref: Some(String::new()),
            },
        )
        .await
        .unwrap();
        assert_eq!(cleared.username, "alice_w");
        assert!(cleared.avatar_ref.is_none());

        let missing = GetProfileUseCase::execute(&db, 9999).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_app_error_status_codes() {
        let auth_error = AppError::Authentication("test".to_string());
        assert_eq!(auth_error.status_code(), 401);
        assert_eq!(auth_error.error_code(), "AUTHENTICATION_FAILED");

        let validation_error = AppError::Validation("test".to_string());
        assert_eq!(validation_error.status_code(), 400);
        assert_eq!(validation_error.error_code(), "VALIDATION_ERROR");

        let conflict = AppError::Conflict("test".to_string());
        assert_eq!(conflict.status_code(), 409);

        let rate_limit_error = AppError::RateLimitExceeded("test".to_string());
        assert_eq!(rate_limit_error.status_code(), 429);
        assert_eq!(rate_limit_error.error_code(), "RATE_LIMITED");
        assert_eq!(rate_limit_error.retry_after_seconds(), Some(60));

        let db_error = AppError::Database(sea_orm::DbErr::Custom("disk I/O error".to_string()));
        assert_eq!(db_error.status_code(), 500);
        assert!(!db_error.public_message().contains("disk"));
    }
}
