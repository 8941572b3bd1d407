mod config;
mod logging;

use crate::config::{Config, OutputFormat, PPK_PASSPHRASE_ENV};
use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use ppk::{Key, SshVersion};
use serde::Serialize;
use std::path::Path;
use std::{env, fs};
use zeroize::Zeroizing;

fn main() -> anyhow::Result<()> {
    let matches = config::config();
    let config = Config::from_matches(&matches)?;

    logging::init_logs(config.log_level).context("failed to initialize logging")?;

    let data = fs::read(&config.input).with_context(|| format!("failed to read {}", config.input.display()))?;

    let passphrase_file = config.passphrase_file.clone();
    let key = ppk::decode_key(&data, |comment: &str| {
        log::info!("key `{}` is encrypted", comment);
        read_passphrase(passphrase_file.as_deref())
    })
    .with_context(|| format!("failed to decode {}", config.input.display()))?;

    let report = KeyReport::from_key(&key)?;

    match config.output_format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn read_passphrase(passphrase_file: Option<&Path>) -> Option<Zeroizing<String>> {
    match passphrase_file {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => Some(strip_line_ending(Zeroizing::new(content))),
            Err(e) => {
                log::error!("couldn't read passphrase file {}: {}", path.display(), e);
                None
            }
        },
        None => env::var(PPK_PASSPHRASE_ENV).ok().map(Zeroizing::new),
    }
}

fn strip_line_ending(mut passphrase: Zeroizing<String>) -> Zeroizing<String> {
    if passphrase.ends_with('\n') {
        passphrase.pop();
        if passphrase.ends_with('\r') {
            passphrase.pop();
        }
    }
    passphrase
}

#[derive(Debug, Serialize)]
struct KeyReport {
    algorithm: String,
    ssh_version: u8,
    comment: String,
    fingerprint: String,
    public_key: String,
}

impl KeyReport {
    fn from_key(key: &Key) -> anyhow::Result<Self> {
        let (ssh_version, blob) = match key.version() {
            SshVersion::Ssh1 => (1, key.ssh1_public_key_blob()?),
            SshVersion::Ssh2 => (2, key.public_key_blob()?),
        };

        Ok(Self {
            algorithm: key.algorithm().to_string(),
            ssh_version,
            comment: key.comment().to_owned(),
            fingerprint: key.fingerprint()?.to_string(),
            public_key: BASE64_ENGINE.encode(blob),
        })
    }

    fn to_text(&self) -> String {
        format!(
            "Algorithm:   {}\nSSH version: {}\nComment:     {}\nFingerprint: {}\nPublic key:  {}\n",
            self.algorithm, self.ssh_version, self.comment, self.fingerprint, self.public_key
        )
    }
}
