use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const ORDER_NUMBER_PREFIX: &str = "ORDER_";

/// 256-bit URL-safe download token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

pub fn hash_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    let out = hasher.finalize();
    hex::encode(out)
}

/// Customer-facing order id: `ORDER_` followed by 80 random bits in uppercase hex.
pub fn generate_order_number() -> String {
    let mut bytes = [0u8; 10];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    format!("{ORDER_NUMBER_PREFIX}{}", hex::encode_upper(bytes))
}

pub fn download_url(order_number: &str, token: &str) -> String {
    format!("/api/downloads/{order_number}/{token}")
}
