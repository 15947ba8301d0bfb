use sha2::{Digest, Sha256};

/// Derive the dedup key for a posting from its canonical link.
///
/// The link is hashed byte-for-byte with no normalization: canonicalization
/// (resolving relative hrefs) happens before this is called, and two links
/// that differ in any character are different postings.
pub fn link_fingerprint(link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(link.as_bytes());
    hex::encode(hasher.finalize())
}
