use bcrypt::BcryptError;

use crate::core::error::Error;

/// bcrypt work factor. The cost and salt are embedded in every hash, so raising
/// it only affects newly hashed passwords.
pub(crate) const COST: u32 = 10;

/// Hashes a plaintext password. There is no minimum length, but a password that does not fit
/// into bcrypt's 72-byte input is refused with [`Error::PasswordTooLong`] instead of truncated.
pub(crate) fn hash_password(password: &str) -> Result<String, Error> {
    match bcrypt::non_truncating_hash(password, COST) {
        Ok(hash) => Ok(hash),
        Err(BcryptError::Truncation(_)) => Err(Error::PasswordTooLong),
        Err(e) => Err(Error::Bcrypt(e)),
    }
}

/// Checks `password` against a stored bcrypt hash.
///
/// Returns [`Error::MalformedHash`] when `hash` is not a bcrypt string and
/// [`Error::PasswordMismatch`] when it is but the password does not reproduce it.
/// A password too long to have been hashed by [`hash_password`] is a mismatch.
/// The digest comparison inside bcrypt is constant-time.
pub(crate) fn verify_password(password: &str, hash: &str) -> Result<(), Error> {
    match bcrypt::non_truncating_verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) | Err(BcryptError::Truncation(_)) => Err(Error::PasswordMismatch),
        Err(e) => Err(Error::MalformedHash(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash).is_ok());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("same", &first).is_ok());
        assert!(verify_password("same", &second).is_ok());
    }

    #[test]
    fn test_wrong_password_is_mismatch() {
        let hash = hash_password("pw1").unwrap();

        assert!(matches!(
            verify_password("pw2", &hash),
            Err(Error::PasswordMismatch)
        ));
    }

    #[test]
    fn test_empty_password() {
        let hash = hash_password("").unwrap();

        assert!(verify_password("", &hash).is_ok());
        assert!(matches!(
            verify_password("not empty", &hash),
            Err(Error::PasswordMismatch)
        ));
    }

    #[test]
    fn test_garbage_hash_is_format_error() {
        assert!(matches!(
            verify_password("pw1", "not-a-bcrypt-hash"),
            Err(Error::MalformedHash(_))
        ));
        assert!(matches!(
            verify_password("pw1", ""),
            Err(Error::MalformedHash(_))
        ));
    }

    #[test]
    fn test_long_passwords_sharing_a_prefix_do_not_collide() {
        let prefix = "a".repeat(72);
        let first = format!("{prefix}first");
        let second = format!("{prefix}second");

        assert!(matches!(hash_password(&first), Err(Error::PasswordTooLong)));

        let hash = hash_password(&prefix[..71]).unwrap();
        assert!(verify_password(&prefix[..71], &hash).is_ok());
        assert!(matches!(
            verify_password(&first, &hash),
            Err(Error::PasswordMismatch)
        ));
        assert!(matches!(
            verify_password(&second, &hash),
            Err(Error::PasswordMismatch)
        ));
    }

    #[test]
    fn test_truncated_hash_does_not_accept_a_different_tail() {
        let prefix = "a".repeat(72);
        let hash = bcrypt::hash(format!("{prefix}first"), COST).unwrap();

        assert!(verify_password(&format!("{prefix}second"), &hash).is_err());
    }

    #[test]
    fn test_hash_embeds_cost() {
        let hash = hash_password("pw1").unwrap();

        assert!(hash.starts_with(&format!("$2b${COST}$")));
    }
}
