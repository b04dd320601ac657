//! Opaque token generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

/// Bytes of entropy per token
const TOKEN_BYTES: usize = 32;

/// Generate a URL-safe random token
///
/// 32 bytes of entropy, base64url-encoded without padding (43 characters).
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}
