//! PuTTY key format described in [Appendix C][1] of the PuTTY User Manual.
//!
//! Versions 1 and 2 of the private key file are supported, with RSA and DSA keys.
//!
//! [1]: https://the.earth.li/~sgtatham/putty/0.75/htmldoc/AppendixC.html#ppk

mod key_value;
mod ppk;

pub use key_value::{PpkEncryptionValue as PpkEncryption, PpkVersionKey as PpkVersion};
pub use ppk::KeyFile;
