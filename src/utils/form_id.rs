//! Form instance id generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const FORM_ID_BYTES: usize = 12;

/// Generates an unguessable id for a rendered form.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 16-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_form_id() -> String {
    let mut buffer = [0u8; FORM_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
