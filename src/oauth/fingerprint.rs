//! 日志中用于关联 token 的指纹，避免输出明文

use sha2::{Digest, Sha256};

/// SHA256 前 12 位十六进制
pub fn token_fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let mut hex = hex::encode(hasher.finalize());
    hex.truncate(12);
    hex
}
