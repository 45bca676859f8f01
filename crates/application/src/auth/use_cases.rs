use crate::auth::dtos::*;
use crate::{calendar, AppError, AppResult};
use chrono::{Duration, Utc};
use healthmate_core::entities::users;
use infrastructure::crypto::password;
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{info, instrument, warn};
use validator::Validate;

#[cfg(test)]
#[path = "use_cases_test.rs"]
mod tests;

// ============ Config ============

pub struct AuthConfig {
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub jwt_expiration: i64,
}

const INVALID_CREDENTIALS: &str = "Invalid phone/username or password";

// ============ Register Use Case ============

pub struct RegisterUseCase;

impl RegisterUseCase {
    #[instrument(skip(db, req), fields(phone = %req.phone, username = %req.username))]
    pub async fn execute(db: &DatabaseConnection, req: RegisterRequest) -> AppResult<RegisterResponse> {
        let req = req.trimmed();
        req.validate()?;

        if find_by_phone(db, &req.phone).await?.is_some() {
            return Err(AppError::Conflict("Phone number is already registered".to_string()));
        }
        if find_by_username(db, &req.username).await?.is_some() {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }

        let password_hash = password::hash_password(&req.password)?;
        let now = calendar::now();

        let user = users::ActiveModel {
            phone: Set(req.phone),
            username: Set(req.username),
            password_hash: Set(password_hash),
            avatar_ref: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(user_id = user.id, "User registered");

        Ok(RegisterResponse {
            user_id: user.id,
            username: user.username,
            phone: user.phone,
        })
    }
}

// ============ Login Use Case ============

pub struct LoginUseCase;

impl LoginUseCase {
    #[instrument(skip(db, config, req), fields(login_field = %req.login_field))]
    pub async fn execute(
        db: &DatabaseConnection,
        config: &AuthConfig,
        req: LoginRequest,
    ) -> AppResult<LoginResponse> {
        let login_field = req.login_field.trim().to_string();
        let password_input = req.password.trim().to_string();
        if login_field.is_empty() || password_input.is_empty() {
            return Err(AppError::Validation("Login field and password cannot be empty".to_string()));
        }

        let user = if crate::auth::is_phone_number(&login_field) {
            find_by_phone(db, &login_field).await?
        } else {
            find_by_username(db, &login_field).await?
        };

        let Some(user) = user else {
            warn!("Login failed: unknown account");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        };

        if !password::verify_password(&password_input, &user.password_hash)? {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let access_token = Self::generate_access_token(config, user.id)?;
        info!(user_id = user.id, "Login succeeded");

        Ok(LoginResponse {
            user_id: user.id,
            username: user.username,
            phone: user.phone,
            avatar_ref: user.avatar_ref,
            access_token,
            expires_in: config.jwt_expiration,
        })
    }

    fn generate_access_token(config: &AuthConfig, user_id: i32) -> AppResult<String> {
        let now = Utc::now();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(config.jwt_expiration)).timestamp(),
            token_type: "access".to_string(),
        };

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::Cryptographic(format!("JWT encoding error: {}", e)))
    }
}

// ============ Reset Password Use Case ============

pub struct ResetPasswordUseCase;

impl ResetPasswordUseCase {
    #[instrument(skip(db, req), fields(username = %req.username))]
    pub async fn execute(db: &DatabaseConnection, req: ResetPasswordRequest) -> AppResult<()> {
        let req = ResetPasswordRequest {
            username: req.username.trim().to_string(),
            new_password: req.new_password.trim().to_string(),
        };
        req.validate()?;

        let user = find_by_username(db, &req.username)
            .await?
            .ok_or_else(|| AppError::NotFound("Username does not exist".to_string()))?;

        let password_hash = password::hash_password(&req.new_password)?;

        let user_id = user.id;
        let mut active_user: users::ActiveModel = user.into();
        active_user.password_hash = Set(password_hash);
        active_user.updated_at = Set(calendar::now());
        active_user.update(db).await?;

        info!(user_id, "Password reset");
        Ok(())
    }
}

// ============ Availability Use Cases ============

pub struct CheckUsernameUseCase;

impl CheckUsernameUseCase {
    pub async fn execute(db: &DatabaseConnection, username: &str) -> AppResult<ExistsResponse> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(ExistsResponse { exists: false });
        }

        Ok(ExistsResponse {
            exists: find_by_username(db, username).await?.is_some(),
        })
    }
}

pub struct CheckPhoneUseCase;

impl CheckPhoneUseCase {
    pub async fn execute(db: &DatabaseConnection, phone: &str) -> AppResult<ExistsResponse> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Ok(ExistsResponse { exists: false });
        }

        Ok(ExistsResponse {
            exists: find_by_phone(db, phone).await?.is_some(),
        })
    }
}

// ============ Profile Use Cases ============

pub struct GetProfileUseCase;

impl GetProfileUseCase {
    #[instrument(skip(db))]
    pub async fn execute(db: &DatabaseConnection, user_id: i32) -> AppResult<ProfileResponse> {
        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(to_profile(user))
    }
}

pub struct UpdateProfileUseCase;

impl UpdateProfileUseCase {
    #[instrument(skip(db, req))]
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: i32,
        req: UpdateProfileRequest,
    ) -> AppResult<ProfileResponse> {
        let req = UpdateProfileRequest {
            username: req.username.map(|u| u.trim().to_string()),
            avatar_ref: req.avatar_ref.map(|a| a.trim().to_string()),
        };
        req.validate()?;

        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if let Some(ref username) = req.username {
            let taken = users::Entity::find()
                .filter(users::Column::Username.eq(username.as_str()))
                .filter(users::Column::Id.ne(user_id))
                .one(db)
                .await?;

            if taken.is_some() {
                return Err(AppError::Conflict("Username is already taken".to_string()));
            }
        }

        let mut active_user: users::ActiveModel = user.into();
        if let Some(username) = req.username {
            active_user.username = Set(username);
        }
        // Avatar bytes live in the blob store; only the reference is kept here
        if let Some(avatar_ref) = req.avatar_ref {
            active_user.avatar_ref = Set(if avatar_ref.is_empty() { None } else { Some(avatar_ref) });
        }
        active_user.updated_at = Set(calendar::now());

        let updated = active_user.update(db).await?;
        Ok(to_profile(updated))
    }
}

// ============ Helpers ============

async fn find_by_phone(db: &DatabaseConnection, phone: &str) -> AppResult<Option<users::Model>> {
    Ok(users::Entity::find()
        .filter(users::Column::Phone.eq(phone))
        .one(db)
        .await?)
}

async fn find_by_username(db: &DatabaseConnection, username: &str) -> AppResult<Option<users::Model>> {
    Ok(users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await?)
}

fn to_profile(user: users::Model) -> ProfileResponse {
    ProfileResponse {
        user_id: user.id,
        username: user.username,
        phone: user.phone,
        avatar_ref: user.avatar_ref,
        created_at: user.created_at.with_timezone(&Utc),
    }
}
