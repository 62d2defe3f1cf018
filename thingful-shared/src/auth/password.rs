/// Password hashing and strength policy
///
/// Hashing delegates to the `bcrypt` crate with a fixed work factor of 12.
/// The adaptive hash is deliberately slow, so both operations are offloaded
/// to the Tokio blocking pool rather than running on the async executor.
///
/// # Example
///
/// ```no_run
/// use thingful_shared::auth::password::{hash_password, verify_password};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("My@Passw0rd").await?;
/// assert!(verify_password("My@Passw0rd", &hash).await?);
/// assert!(!verify_password("wrong", &hash).await?);
/// # Ok(())
/// # }
/// ```

/// bcrypt work factor used for all stored credentials
pub const HASH_COST: u32 = 12;

/// Symbols accepted by the composition rule of the strength policy
const PASSWORD_SYMBOLS: &str = "!@#$%^&";

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password against a stored hash
    #[error("Failed to verify password: {0}")]
    VerifyError(String),
}

/// Hashes a password with bcrypt (cost 12)
///
/// Returns the modular-crypt formatted hash string (`$2b$12$...`), which
/// embeds the salt and cost.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails or the blocking task
/// is cancelled.
pub async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|e| PasswordError::HashError(format!("Blocking task failed: {}", e)))?
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored bcrypt hash
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
///
/// # Errors
///
/// Returns `PasswordError::VerifyError` if the stored hash is malformed or
/// the blocking task is cancelled.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| PasswordError::VerifyError(format!("Blocking task failed: {}", e)))?
        .map_err(|e| PasswordError::VerifyError(e.to_string()))
}

/// Validates password strength
///
/// Rules are checked in fixed priority order and only the first violation's
/// message is returned:
///
/// 1. At least 8 characters
/// 2. At most 72 bytes; bcrypt silently truncates input beyond that, so
///    the ceiling is measured in bytes rather than characters
/// 3. No leading or trailing space
/// 4. At least one lowercase letter, one uppercase letter, one digit, and
///    one symbol from `!@#$%^&`
///
/// The composition rule is implemented as explicit character-class scans.
///
/// # Example
///
/// ```
/// use thingful_shared::auth::password::validate_password;
///
/// assert!(validate_password("My@Passw0rd").is_ok());
/// assert!(validate_password("short").is_err());
/// assert!(validate_password("NoSymbolHere1").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < 8 {
        return Err("Password must be longer than eight characters.".to_string());
    }

    // bcrypt truncates at 72 bytes, so the ceiling is in bytes
    if password.len() > 72 {
        return Err("Password must be shorter than 72 characters.".to_string());
    }

    if password.starts_with(' ') || password.ends_with(' ') {
        return Err("Password must not start or end with spaces.".to_string());
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if !(has_lower && has_upper && has_digit && has_symbol) {
        return Err(
            "Password must contain one uppercase letter, one lowercase letter, one number, \
             and one special character."
                .to_string(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_password_format() {
        let hash = hash_password("My@Passw0rd").await.expect("Hash should succeed");

        // Modular crypt format with the configured cost
        assert!(hash.starts_with("$2"));
        assert!(hash.contains("$12$"));
    }

    #[tokio::test]
    async fn test_hash_password_produces_different_salts() {
        let hash1 = hash_password("same password").await.expect("Hash 1 should succeed");
        let hash2 = hash_password("same password").await.expect("Hash 2 should succeed");

        assert_ne!(hash1, hash2);
    }

    #[tokio::test]
    async fn test_verify_password_correct() {
        let hash = hash_password("correct_password").await.expect("Hash should succeed");

        let result = verify_password("correct_password", &hash)
            .await
            .expect("Verify should succeed");
        assert!(result, "Correct password should verify");
    }

    #[tokio::test]
    async fn test_verify_password_incorrect() {
        let hash = hash_password("correct_password").await.expect("Hash should succeed");

        let result = verify_password("wrong_password", &hash)
            .await
            .expect("Verify should succeed");
        assert!(!result, "Wrong password should not verify");
    }

    #[tokio::test]
    async fn test_verify_password_malformed_hash() {
        let result = verify_password("password", "not-a-bcrypt-hash").await;
        assert!(result.is_err(), "Malformed hash should return error");
    }

    #[test]
    fn test_validate_password_valid() {
        let valid_passwords = vec!["My@Passw0rd", "Str0ng!Pass", "C0mpl3x#Pwd", "S3cure$Password"];

        for password in valid_passwords {
            assert!(
                validate_password(password).is_ok(),
                "Password '{}' should be valid",
                password
            );
        }
    }

    #[test]
    fn test_validate_password_too_short() {
        let result = validate_password("Sh0rt!a");
        assert_eq!(
            result.unwrap_err(),
            "Password must be longer than eight characters."
        );
    }

    #[test]
    fn test_validate_password_too_long() {
        let password = format!("aB1!{}", "x".repeat(70));
        let result = validate_password(&password);
        assert_eq!(
            result.unwrap_err(),
            "Password must be shorter than 72 characters."
        );
    }

    #[test]
    fn test_validate_password_too_long_in_bytes() {
        // 39 characters but 74 bytes; would be truncated by bcrypt
        let password = format!("aB1!{}", "é".repeat(35));
        assert!(password.chars().count() <= 72);

        let result = validate_password(&password);
        assert_eq!(
            result.unwrap_err(),
            "Password must be shorter than 72 characters."
        );
    }

    #[test]
    fn test_validate_password_leading_space() {
        let result = validate_password(" aB1!aB1!");
        assert_eq!(
            result.unwrap_err(),
            "Password must not start or end with spaces."
        );
    }

    #[test]
    fn test_validate_password_trailing_space() {
        let result = validate_password("aB1!aB1! ");
        assert_eq!(
            result.unwrap_err(),
            "Password must not start or end with spaces."
        );
    }

    #[test]
    fn test_validate_password_composition() {
        // Each is missing exactly one character class
        let invalid = vec![
            "lowercase1!",  // no uppercase
            "UPPERCASE1!",  // no lowercase
            "NoDigits!!",   // no digit
            "NoSymbol123A", // no symbol
            "Tilde~Not1In", // symbol outside the accepted set
        ];

        for password in invalid {
            let result = validate_password(password);
            assert!(
                result
                    .unwrap_err()
                    .starts_with("Password must contain one uppercase letter"),
                "Password '{}' should fail composition",
                password
            );
        }
    }

    #[test]
    fn test_validate_password_length_rule_wins_over_composition() {
        // Short *and* missing classes: the length message is returned
        let result = validate_password("aaa");
        assert_eq!(
            result.unwrap_err(),
            "Password must be longer than eight characters."
        );
    }
}
