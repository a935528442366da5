use sha2::{Digest, Sha256};

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Hex-encoded SHA-256 of the payload.
pub fn checksum_sha256(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

/// Object key under which an analysis image is stored.
pub fn image_object_key(record_id: uuid::Uuid) -> String {
    format!("{}.png", record_id.simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_matches_known_digest() {
        assert_eq!(
            checksum_sha256(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn object_key_is_hex_id_with_png_extension() {
        let id = uuid::Uuid::nil();

        assert_eq!(image_object_key(id), "00000000000000000000000000000000.png");
    }
}
