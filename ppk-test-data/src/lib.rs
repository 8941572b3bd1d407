//! Test data shared between the ppk crates.
//!
//! Every encrypted fixture uses the passphrase [`PASSPHRASE`]. Encrypted and unencrypted
//! fixtures of the same algorithm hold the same key pair.

pub const PASSPHRASE: &str = "test";

// 1024-bit RSA, e = 37, comment "rsa-key-20261019"
pub const PPK_V2_RSA: &str = include_str!("../test_assets/ppk/ssh2-rsa-no-passphrase.ppk");
pub const PPK_V2_RSA_ENCRYPTED: &str = include_str!("../test_assets/ppk/ssh2-rsa-passphrase.ppk");

// Same RSA key in the legacy PPK v1 layout (integrity stored as `Private-Hash`)
pub const PPK_V1_RSA: &str = include_str!("../test_assets/ppk/v1-rsa-no-passphrase.ppk");
pub const PPK_V1_RSA_ENCRYPTED: &str = include_str!("../test_assets/ppk/v1-rsa-passphrase.ppk");

pub const PPK_RSA_COMMENT: &str = "rsa-key-20261019";
pub const PPK_RSA_FINGERPRINT: &str = "02:4e:a8:03:a7:b3:70:5d:32:80:79:f3:3e:ef:4e:f6";
pub const PPK_RSA_PUBLIC_BLOB: &str = "AAAAB3NzaC1yc2EAAAABJQAAAIEAzfqaWSJ3hhTRoLFM5M+8X8hFdfjIaLiLBHi8JbTf6TKQSIeWFqUa1XNnQyZhLs4sFH2YAghgeFIuE5MbQxcXlqhaMoeDMkiG8F2ScuPnmiJVYT/pucLkokF4vpsvXQqhefdcZLWpqIkMu6mZFGBORGp+/RsKhpnxHCqNrQO1eyM=";

// 1024-bit DSA, comment "dsa-key-20261019"
pub const PPK_V2_DSA: &str = include_str!("../test_assets/ppk/ssh2-dsa-no-passphrase.ppk");
pub const PPK_V2_DSA_ENCRYPTED: &str = include_str!("../test_assets/ppk/ssh2-dsa-passphrase.ppk");

pub const PPK_DSA_COMMENT: &str = "dsa-key-20261019";
pub const PPK_DSA_FINGERPRINT: &str = "bd:2c:81:f0:9c:6d:7f:be:eb:fb:b1:cf:3e:4b:24:cb";
pub const PPK_DSA_PUBLIC_BLOB: &str = "AAAAB3NzaC1kc3MAAACBAJrBi5a0rd6FAfOAzGBAGbiyNqHYKeyPPYNx/m68canTHeRUnWEdjaiMFaYJGt+QBmP+Ua1ObZ2965lCeZGJdXnP6toS3TG03qnPoeOl5o8v2wItWrneLlHZkchL5mmB4x4cUFlyDjCdMpwfPM5Hzl5D3ypS8n6HgOHc4Tn7x0O9AAAAFQCjmzlHlxumpRENo2jvfgGUHB2lPwAAAIBSWnmvNTtMCo9lZmBWuGn4185CRhRhrbk3HOG8MFdG8HW0na2iFH3OUJA+JuhruHY9LVLySK9cQ9nLOVABUGacUfXmA/hSn9rGZ3660GaPsL6W7L2U0xybWemdmuUjQAfNV2eY8HdOizQL7k2+17ZxzwOaH9PCyc5yxZ0Lko4oBwAAAIA3LZwkNUiQnQ8QD9oB6OFq9MzJx+XKEw24olIAuNuoLRFPLY5BCZKOJygFb8pDySnTNgq5EkIXaS0sEZ/ja15gzJ4d2+8FUcG72xGMm7XRu6Ozjy+TPuyTJBwM2ahfP/E143Y+lFeuA1f55m2PfvjSMpBZexnErRGgLKIdYfHH0Q==";
pub const PPK_DSA_PRIVATE_X: &str = "3710eddae19f82386e0d2dae3806db2a08ed5014";

// Binary "SSH PRIVATE KEY FILE FORMAT 1.1", 1024-bit RSA, e = 37, comment "rsa1-key-20261019".
// The encrypted variant uses SSH1 3DES.
pub const SSH1_RSA: &[u8] = include_bytes!("../test_assets/ssh1/ssh1-rsa-no-passphrase.key");
pub const SSH1_RSA_ENCRYPTED: &[u8] = include_bytes!("../test_assets/ssh1/ssh1-rsa-passphrase.key");

pub const SSH1_RSA_COMMENT: &str = "rsa1-key-20261019";
// MD5 over the raw modulus followed by the raw public exponent
pub const SSH1_RSA_FINGERPRINT: &str = "70:05:2d:e8:ce:91:56:7f:42:af:6d:da:f5:40:43:b0";
pub const SSH1_RSA_PUBLIC_BLOB: &str = "AAAEAAAGJQQAxOHL6aNOeFbZPrKYZiMRErQksb1tUxTN69la/FxZHio8XTs6UJtoA5ARRq4Ov1d9AhMZ0GSiliGxsoHNor6i+gM4fZfa4kbBn6i0ZlBMgvXQwZUFMQcM8bTJcXsLwVM0WusBgifiCEdxDV+GHzV0gOvydAciyRrSaeJzw9ky8gU=";
