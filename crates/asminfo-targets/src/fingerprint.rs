//! Content fingerprints for descriptors.
//!
//! The fingerprint covers every serialized field, so two descriptors built
//! from equal triples under equal configuration hash identically. Embedders
//! key per-target caches on it.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::asm_info::X86AsmInfo;
use crate::error::Result;

/// A 32-byte SHA-256 content hash.
pub type ContentHash = [u8; 32];

/// Compute the SHA-256 content hash of any serializable value.
pub fn content_hash<T: Serialize>(value: &T) -> Result<ContentHash> {
    let json = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&json);
    Ok(hasher.finalize().into())
}

/// Format a content hash as a hex string.
pub fn hash_hex(hash: &ContentHash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

impl X86AsmInfo {
    pub fn fingerprint(&self) -> Result<ContentHash> {
        content_hash(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AsmInfoConfig;
    use crate::syntax::AsmSyntax;
    use crate::triple::Triple;

    #[test]
    fn equal_descriptors_hash_equal() {
        let triple = Triple::parse("x86_64-unknown-linux-gnu");
        let config = AsmInfoConfig::default();
        let a = X86AsmInfo::for_triple(&triple, &config).fingerprint().unwrap();
        let b = X86AsmInfo::for_triple(&triple, &config).fingerprint().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dialect_changes_hash() {
        let triple = Triple::parse("x86_64-unknown-linux-gnu");
        let att = X86AsmInfo::for_triple(&triple, &AsmInfoConfig::default());
        let intel = X86AsmInfo::for_triple(&triple, &AsmInfoConfig::with_syntax(AsmSyntax::Intel));
        assert_ne!(att.fingerprint().unwrap(), intel.fingerprint().unwrap());
    }

    #[test]
    fn hash_hex_format() {
        let h = content_hash(&42u32).unwrap();
        assert_eq!(hash_hex(&h).len(), 64);
    }
}
