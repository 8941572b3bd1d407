/// Broad classification of [`PpkError`].
///
/// Several error variants may describe the same failure class (e.g. a missing line and an
/// invalid base64 block are both malformed input); callers that only need to react to the
/// class should match on this instead of on the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed header, section, line count, hex or base64 data.
    Format,
    UnsupportedVersion,
    UnsupportedAlgorithm,
    /// Private section is encrypted and no passphrase was supplied.
    PassphraseRequired,
    /// MAC, hash or check bytes mismatch: wrong passphrase or corrupted file.
    Integrity,
    /// Key fields are truncated, inconsistent or followed by unexpected data.
    CorruptKey,
}

#[derive(thiserror::Error, Debug)]
pub enum PpkError {
    #[error("end of input")]
    EndOfInput,
    #[error("invalid {context}: expected {expected}, got `{actual}`")]
    InvalidInput {
        context: &'static str,
        expected: &'static str,
        actual: String,
    },
    #[error("invalid key value format")]
    InvalidKeyValueFormat,
    #[error("unsupported key file version: {version}")]
    UnsupportedVersion { version: String },
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },
    #[error("passphrase is required to decrypt the private key")]
    PassphraseRequired,
    #[error("integrity check failed (wrong passphrase or corrupted data)")]
    Integrity,
    #[error("corrupt key data: {reason}")]
    CorruptKey { reason: &'static str },
    #[error("encrypted data is not aligned to the cipher block size")]
    Cipher,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PpkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PpkError::EndOfInput
            | PpkError::InvalidInput { .. }
            | PpkError::InvalidKeyValueFormat
            | PpkError::Cipher => ErrorKind::Format,
            PpkError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            PpkError::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            PpkError::PassphraseRequired => ErrorKind::PassphraseRequired,
            PpkError::Integrity => ErrorKind::Integrity,
            // Cursor-based field readers only fail on truncated or non-canonical fields.
            PpkError::CorruptKey { .. } | PpkError::Io(_) => ErrorKind::CorruptKey,
        }
    }

    pub(crate) fn unsupported_algorithm(algorithm: impl Into<String>) -> Self {
        PpkError::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    pub(crate) fn corrupt(reason: &'static str) -> Self {
        PpkError::CorruptKey { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PpkError::EndOfInput, ErrorKind::Format)]
    #[case(PpkError::InvalidKeyValueFormat, ErrorKind::Format)]
    #[case(PpkError::Cipher, ErrorKind::Format)]
    #[case(PpkError::PassphraseRequired, ErrorKind::PassphraseRequired)]
    #[case(PpkError::Integrity, ErrorKind::Integrity)]
    #[case(PpkError::corrupt("test"), ErrorKind::CorruptKey)]
    #[case(PpkError::unsupported_algorithm("ssh-ed25519"), ErrorKind::UnsupportedAlgorithm)]
    #[case(
        PpkError::Io(std::io::Error::from(std::io::ErrorKind::UnexpectedEof)),
        ErrorKind::CorruptKey
    )]
    fn error_kind_classification(#[case] error: PpkError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }
}
