//! Key derivation utilities for PPK files.

use crate::putty::ppk::aes as ppk_aes;

use digest::Digest;
use zeroize::Zeroizing;

const SHA1_DIGEST_SIZE: usize = 20;

/// AES key material shared by the PPK v1 and v2 formats.
pub(crate) struct KeyMaterial {
    key: Zeroizing<[u8; ppk_aes::KEY_SIZE]>,
}

impl KeyMaterial {
    pub fn key(&self) -> &[u8] {
        self.key.as_ref()
    }

    pub fn iv() -> &'static [u8; ppk_aes::BLOCK_SIZE] {
        &[0u8; ppk_aes::BLOCK_SIZE]
    }
}

pub(crate) fn derive_key_material(passphrase: &str) -> KeyMaterial {
    let tagged_hash = |tag: u32| -> Zeroizing<[u8; SHA1_DIGEST_SIZE]> {
        let mut digest = sha1::Sha1::new();
        digest.update(tag.to_be_bytes());
        digest.update(passphrase.as_bytes());
        Zeroizing::new(digest.finalize().into())
    };

    let hash1 = tagged_hash(0);
    let hash2 = tagged_hash(1);

    let mut key = Zeroizing::new([0u8; ppk_aes::KEY_SIZE]);
    key[..SHA1_DIGEST_SIZE].copy_from_slice(&hash1[..]);
    key[SHA1_DIGEST_SIZE..].copy_from_slice(&hash2[..ppk_aes::KEY_SIZE - SHA1_DIGEST_SIZE]);

    KeyMaterial { key }
}
