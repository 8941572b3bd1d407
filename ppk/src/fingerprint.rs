//! MD5 key fingerprints in the classic `xx:xx:...:xx` form.

use md5::{Digest, Md5};
use std::fmt;
use std::str::FromStr;

const FINGERPRINT_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }
}

impl From<[u8; FINGERPRINT_SIZE]> for Fingerprint {
    fn from(value: [u8; FINGERPRINT_SIZE]) -> Self {
        Self(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid fingerprint: expected 16 colon-separated hex octets")]
pub struct FingerprintParseError;

impl FromStr for Fingerprint {
    type Err = FingerprintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; FINGERPRINT_SIZE];
        let mut octets = s.split(':');

        for byte in bytes.iter_mut() {
            let octet = octets.next().ok_or(FingerprintParseError)?;
            if octet.len() != 2 {
                return Err(FingerprintParseError);
            }
            let mut decoded = [0u8; 1];
            hex::decode_to_slice(octet, &mut decoded).map_err(|_| FingerprintParseError)?;
            *byte = decoded[0];
        }

        if octets.next().is_some() {
            return Err(FingerprintParseError);
        }

        Ok(Self(bytes))
    }
}

/// Computes the MD5 fingerprint of `blob`.
pub fn fingerprint(blob: &[u8]) -> Fingerprint {
    let mut hasher = Md5::new();
    hasher.update(blob);
    Fingerprint(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_input() {
        // MD5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(
            fingerprint(b"").to_string(),
            "d4:1d:8c:d9:8f:00:b2:04:e9:80:09:98:ec:f8:42:7e"
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(fingerprint(b"ssh-rsa"), fingerprint(b"ssh-rsa"));
        assert_ne!(fingerprint(b"ssh-rsa"), fingerprint(b"ssh-dss"));
    }

    #[test]
    fn parse_roundtrip() {
        let text = "57:95:98:7f:c2:4e:98:1d:b9:5b:45:fe:6d:a4:6b:17";
        let parsed: Fingerprint = text.parse().unwrap();
        assert_eq!(parsed.as_bytes()[0], 0x57);
        assert_eq!(parsed.to_string(), text);
    }

    #[rstest]
    #[case("57:95:98:7f:c2:4e:98:1d:b9:5b:45:fe:6d:a4:6b")]
    #[case("57:95:98:7f:c2:4e:98:1d:b9:5b:45:fe:6d:a4:6b:17:00")]
    #[case("5795987fc24e981db95b45fe6da46b17")]
    #[case("57:95:98:7f:c2:4e:98:1d:b9:5b:45:fe:6d:a4:6b:1g")]
    fn parse_rejects_malformed(#[case] text: &str) {
        assert_eq!(text.parse::<Fingerprint>(), Err(FingerprintParseError));
    }
}
