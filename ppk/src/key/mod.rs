//! In-memory key representation shared by every codec.

mod blob;
mod parse;

pub(crate) use parse::{parse_private_key, parse_public_key};

use crate::fingerprint::{self, Fingerprint};
use crate::ssh::key_type;
use crate::PpkError;
use num_bigint_dig::BigUint;
use std::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

/// SSH protocol generation a key belongs to.
///
/// The same RSA material yields different public blobs and fingerprints for SSH1 and SSH2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SshVersion {
    Ssh1,
    Ssh2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    Rsa,
    Dss,
}

impl KeyAlgorithm {
    /// SSH2 key type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => key_type::RSA,
            KeyAlgorithm::Dss => key_type::DSA,
        }
    }

    pub(crate) fn from_key_type(key_type: &str) -> Result<Self, PpkError> {
        match key_type {
            key_type::RSA => Ok(KeyAlgorithm::Rsa),
            key_type::DSA => Ok(KeyAlgorithm::Dss),
            other => Err(PpkError::unsupported_algorithm(other)),
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyMaterial {
    Rsa {
        e: BigUint,
        n: BigUint,
    },
    Dss {
        p: BigUint,
        q: BigUint,
        g: BigUint,
        y: BigUint,
    },
}

impl PublicKeyMaterial {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PublicKeyMaterial::Rsa { .. } => KeyAlgorithm::Rsa,
            PublicKeyMaterial::Dss { .. } => KeyAlgorithm::Dss,
        }
    }
}

/// Private key components. Every integer is wiped when the value is dropped.
///
/// Equality compares the integers in constant time.
#[derive(Clone)]
pub enum PrivateKeyMaterial {
    Rsa {
        d: BigUint,
        p: BigUint,
        q: BigUint,
        iqmp: BigUint,
    },
    Dss {
        x: BigUint,
    },
}

impl PrivateKeyMaterial {
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            PrivateKeyMaterial::Rsa { .. } => KeyAlgorithm::Rsa,
            PrivateKeyMaterial::Dss { .. } => KeyAlgorithm::Dss,
        }
    }
}

fn ct_eq_biguint(a: &BigUint, b: &BigUint) -> Choice {
    let a = Zeroizing::new(a.to_bytes_be());
    let b = Zeroizing::new(b.to_bytes_be());
    a.as_slice().ct_eq(b.as_slice())
}

impl PartialEq for PrivateKeyMaterial {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                PrivateKeyMaterial::Rsa { d, p, q, iqmp },
                PrivateKeyMaterial::Rsa {
                    d: other_d,
                    p: other_p,
                    q: other_q,
                    iqmp: other_iqmp,
                },
            ) => bool::from(
                ct_eq_biguint(d, other_d)
                    & ct_eq_biguint(p, other_p)
                    & ct_eq_biguint(q, other_q)
                    & ct_eq_biguint(iqmp, other_iqmp),
            ),
            (PrivateKeyMaterial::Dss { x }, PrivateKeyMaterial::Dss { x: other_x }) => {
                bool::from(ct_eq_biguint(x, other_x))
            }
            _ => false,
        }
    }
}

impl Eq for PrivateKeyMaterial {}

impl Drop for PrivateKeyMaterial {
    fn drop(&mut self) {
        match self {
            PrivateKeyMaterial::Rsa { d, p, q, iqmp } => {
                d.zeroize();
                p.zeroize();
                q.zeroize();
                iqmp.zeroize();
            }
            PrivateKeyMaterial::Dss { x } => x.zeroize(),
        }
    }
}

impl fmt::Debug for PrivateKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyMaterial")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

/// Decoded key: public material, optional private material and comment.
///
/// A `Key` is validated once at construction and never mutated afterwards:
/// - public and private material describe the same algorithm;
/// - for RSA with private material, `n == p * q`;
/// - SSH1 keys are always RSA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    version: SshVersion,
    public_key: PublicKeyMaterial,
    private_key: Option<PrivateKeyMaterial>,
    comment: String,
}

impl Key {
    pub fn new(
        version: SshVersion,
        public_key: PublicKeyMaterial,
        private_key: Option<PrivateKeyMaterial>,
        comment: impl Into<String>,
    ) -> Result<Self, PpkError> {
        if version == SshVersion::Ssh1 && public_key.algorithm() != KeyAlgorithm::Rsa {
            return Err(PpkError::unsupported_algorithm(format!(
                "{} (SSH1 keys are RSA only)",
                public_key.algorithm()
            )));
        }

        match (&public_key, &private_key) {
            (_, None) => {}
            (PublicKeyMaterial::Rsa { n, .. }, Some(PrivateKeyMaterial::Rsa { p, q, .. })) => {
                if &(p * q) != n {
                    return Err(PpkError::corrupt("RSA modulus is not the product of the private primes"));
                }
            }
            (PublicKeyMaterial::Dss { .. }, Some(PrivateKeyMaterial::Dss { .. })) => {}
            _ => return Err(PpkError::corrupt("public and private key algorithms differ")),
        }

        Ok(Self {
            version,
            public_key,
            private_key,
            comment: comment.into(),
        })
    }

    pub fn version(&self) -> SshVersion {
        self.version
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.public_key.algorithm()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn public_key(&self) -> &PublicKeyMaterial {
        &self.public_key
    }

    pub fn private_key(&self) -> Option<&PrivateKeyMaterial> {
        self.private_key.as_ref()
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Returns a copy of this key without its private material.
    pub fn to_public_only(&self) -> Key {
        Key {
            version: self.version,
            public_key: self.public_key.clone(),
            private_key: None,
            comment: self.comment.clone(),
        }
    }

    /// SSH2 wire-format public key blob (`string type | mpint ...`).
    pub fn public_key_blob(&self) -> Result<Vec<u8>, PpkError> {
        self.public_key.to_blob()
    }

    /// Legacy SSH1 public key blob (`uint32 bits | mpint1 e | mpint1 n`).
    pub fn ssh1_public_key_blob(&self) -> Result<Vec<u8>, PpkError> {
        self.public_key.to_ssh1_blob()
    }

    /// MD5 fingerprint, computed over the SSH2 blob or, for SSH1 keys, over the raw
    /// modulus followed by the raw public exponent.
    pub fn fingerprint(&self) -> Result<Fingerprint, PpkError> {
        let input = match self.version {
            SshVersion::Ssh2 => self.public_key_blob()?,
            SshVersion::Ssh1 => self.public_key.ssh1_fingerprint_input()?,
        };

        Ok(fingerprint::fingerprint(&input))
    }
}
