//! Random short code generation.

use base64::Engine as _;

/// Number of random bytes drawn per code; 6 bytes encode to 8 base64 characters.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of every generated code.
pub const CODE_LENGTH: usize = 8;

/// Generates a random 8-character short code.
///
/// Draws entropy from the OS via `getrandom` and encodes it as URL-safe
/// base64 without padding, so codes only contain `[A-Za-z0-9_-]` and can be
/// used directly as a path segment.
///
/// # Errors
///
/// Returns the underlying error if the system random number generator fails.
pub fn generate_code() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
