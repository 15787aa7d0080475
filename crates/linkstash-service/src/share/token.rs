//! Share link token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

use linkstash_core::config::ShareConfig;

/// 128-bit floor regardless of configuration.
const MIN_TOKEN_BYTES: usize = 16;

/// Generates opaque, URL-safe share link tokens.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    token_bytes: usize,
}

impl TokenGenerator {
    /// Creates a new token generator from configuration.
    pub fn new(config: &ShareConfig) -> Self {
        Self {
            token_bytes: config.token_bytes.max(MIN_TOKEN_BYTES),
        }
    }

    /// Generates a cryptographically secure random token.
    ///
    /// Encoded with unpadded URL-safe base64 so the token can sit in a
    /// path segment without escaping.
    pub fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.token_bytes];
        rand::thread_rng().fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(&bytes)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new(&ShareConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let generator = TokenGenerator::default();
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn tokens_are_url_safe() {
        let generator = TokenGenerator::default();
        for _ in 0..32 {
            let token = generator.generate();
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in token: {token}"
            );
        }
    }

    #[test]
    fn default_tokens_carry_128_bits() {
        // 16 bytes base64-encode to 22 characters without padding.
        let token = TokenGenerator::default().generate();
        assert_eq!(token.len(), 22);
    }

    #[test]
    fn configured_size_below_floor_is_raised() {
        let config = ShareConfig { token_bytes: 4 };
        let token = TokenGenerator::new(&config).generate();
        assert!(token.len() >= 22);
    }
}
