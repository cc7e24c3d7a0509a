//! Short code generation.
//!
//! Codes are drawn from the OS CSPRNG and encoded with the URL-safe base64
//! alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`).

use base64::Engine as _;

/// Number of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of a generated short code in characters.
pub const CODE_LENGTH: usize = 8;

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// No uniqueness check is performed against stored codes.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE.encode(buffer);
    code.truncate(CODE_LENGTH);
    code
}
