use axum::BoxError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid request body: {0}")]
    Json(#[from] JsonRejection),
    #[error("Invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Chirp is too long")]
    ChirpTooLong,
    #[error("No Authorization header")]
    MissingHeader,
    #[error("Malformed Authorization header")]
    MalformedHeader,
    #[error("Password is too long")]
    PasswordTooLong,
    #[error("Incorrect email or password")]
    InvalidCredentials,
    #[error("Password does not match hash")]
    PasswordMismatch,
    #[error("Malformed password hash: {0}")]
    MalformedHash(bcrypt::BcryptError),
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Expired JWT")]
    ExpiredToken,
    #[error("Malformed token: {0}")]
    MalformedToken(jsonwebtoken::errors::Error),
    #[error("Malformed token subject: {0}")]
    MalformedSubject(uuid::Error),
    #[error("Refresh token not found")]
    RefreshTokenNotFound,
    #[error("Refresh token expired")]
    RefreshTokenExpired,
    #[error("Refresh token revoked")]
    RefreshTokenRevoked,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Forbidden")]
    Forbidden,
    #[error("Chirp not found")]
    ChirpNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    pub(crate) fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Json(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            Error::InvalidUuid(_) => (StatusCode::BAD_REQUEST, "Invalid id"),
            Error::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email"),
            Error::ChirpTooLong => (StatusCode::BAD_REQUEST, "Chirp is too long"),
            Error::PasswordTooLong => (StatusCode::BAD_REQUEST, "Password is too long"),
            Error::InvalidCredentials | Error::PasswordMismatch | Error::MalformedHash(_) => {
                (StatusCode::UNAUTHORIZED, "Incorrect email or password")
            }
            Error::MissingHeader
            | Error::MalformedHeader
            | Error::InvalidSignature
            | Error::ExpiredToken
            | Error::MalformedToken(_)
            | Error::MalformedSubject(_)
            | Error::RefreshTokenNotFound
            | Error::RefreshTokenExpired
            | Error::RefreshTokenRevoked
            | Error::InvalidApiKey => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Error::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            Error::ChirpNotFound => (StatusCode::NOT_FOUND, "Chirp not found"),
            Error::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            Error::UserAlreadyExists => (StatusCode::CONFLICT, "User already exists"),
            Error::Sql(_) | Error::Bcrypt(_) | Error::Jwt(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = self.status();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!("Rejected request: {}", self)
            }
            s if s.is_server_error() => tracing::error!("{:?}", self),
            _ => tracing::debug!("{}", self),
        }

        (status, message).into_response()
    }
}

pub(crate) async fn handle_middleware_errors(err: BoxError) -> (StatusCode, &'static str) {
    tracing::error!("Unhandled error: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_share_one_message() {
        let errors = [
            Error::MissingHeader,
            Error::MalformedHeader,
            Error::InvalidSignature,
            Error::ExpiredToken,
            Error::RefreshTokenNotFound,
            Error::RefreshTokenExpired,
            Error::RefreshTokenRevoked,
            Error::InvalidApiKey,
        ];

        for error in errors {
            assert_eq!(error.status(), (StatusCode::UNAUTHORIZED, "Unauthorized"));
        }
    }

    #[test]
    fn test_credential_failures_are_indistinguishable() {
        assert_eq!(Error::InvalidCredentials.status(), Error::PasswordMismatch.status());
        assert_eq!(
            Error::InvalidCredentials.status(),
            Error::MalformedHash(bcrypt::BcryptError::InvalidHash("x".into())).status()
        );
    }

    #[test]
    fn test_long_password_is_bad_request() {
        assert_eq!(
            Error::PasswordTooLong.status(),
            (StatusCode::BAD_REQUEST, "Password is too long")
        );
    }

    #[test]
    fn test_store_failure_does_not_leak_details() {
        let (status, message) = Error::Sql(sqlx::Error::PoolTimedOut).status();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal server error");
    }
}
