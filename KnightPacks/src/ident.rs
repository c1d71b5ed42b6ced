//! Stable record identifiers
//!
//! Foundry treats `_id` as the primary key of a compendium entry, so it must
//! survive full regenerations: it is derived from the display name only.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Length of a generated identifier.
pub const ID_LEN: usize = 16;

/// Derive the 16-character identifier of a display name.
///
/// SHA-256 of the UTF-8 bytes, URL-safe base64 without padding, truncated.
/// Items that expand to several records must pass the suffixed name
/// (`"Fusil - Rafale"`, `"Module niv. 2"`).
#[must_use]
pub fn generate_id(display_name: &str) -> String {
    let digest = Sha256::digest(display_name.as_bytes());
    let mut encoded = URL_SAFE_NO_PAD.encode(digest);
    encoded.truncate(ID_LEN);
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(id: &str) -> bool {
        id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_generate_id_is_deterministic() {
        let names = [
            "Warrior",
            "Fusil d'assaut - Rafale",
            "Sang-froid - Niv. 2",
            "",
            "Œil de Lynx",
        ];
        for name in names {
            let id = generate_id(name);
            assert_eq!(id, generate_id(name));
            assert_eq!(id.len(), ID_LEN);
            assert!(is_url_safe(&id), "{id}");
        }
    }

    #[test]
    fn test_generate_id_known_value() {
        // sha256("") = e3b0c442..., base64url "47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU"
        assert_eq!(generate_id(""), "47DEQpj8HBSa-_TI");
    }

    #[test]
    fn test_suffixed_names_differ() {
        assert_ne!(generate_id("Fusil - Tir simple"), generate_id("Fusil - Rafale"));
        assert_ne!(generate_id("Module"), generate_id("Module niv. 1"));
    }
}
