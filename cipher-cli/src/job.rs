//! JSON job descriptions and their execution.

use classic_crypto::cipher::Key;
use classic_crypto::codec::Codec;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::error::CliError;

/// One unit of work, selected by the `operation` field.
///
/// ```json
/// {"operation": "encrypt", "modulus": 26, "key": {"kind": "shift", "shift": 16}, "message": "STOP"}
/// {"operation": "generate_key", "cipher": "affine", "modulus": 29, "size": 2, "seed": 7}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Job {
    Encrypt(CipherJob),
    Decrypt(CipherJob),
    GenerateKey(KeygenJob),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CipherJob {
    pub modulus: u64,
    pub key: Key,
    /// Symbol text in the alphabet of `modulus`.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Shift,
    Keyword,
    Affine,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeygenJob {
    pub cipher: CipherKind,
    pub modulus: u64,
    /// Keyword length or matrix order. Unused for shift keys.
    #[serde(default)]
    pub size: usize,
    /// Fixed seed for reproducible keys; the OS RNG is used when absent.
    pub seed: Option<u64>,
}

impl Job {
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Job::Encrypt(_) => "encrypt",
            Job::Decrypt(_) => "decrypt",
            Job::GenerateKey(_) => "generate_key",
        }
    }

    pub fn modulus(&self) -> u64 {
        match self {
            Job::Encrypt(job) | Job::Decrypt(job) => job.modulus,
            Job::GenerateKey(job) => job.modulus,
        }
    }

    /// Runs the job and returns the text to print.
    pub fn run(&self) -> Result<String, CliError> {
        match self {
            Job::Encrypt(job) => {
                let message = job.decode_message()?;
                Ok(job.key.encrypt(&message, job.modulus)?)
            }
            Job::Decrypt(job) => {
                let ciphertext = job.decode_message()?;
                Ok(job.key.decrypt(&ciphertext, job.modulus)?)
            }
            Job::GenerateKey(job) => Ok(job.generate()?.to_json()?),
        }
    }
}

impl CipherJob {
    fn decode_message(&self) -> Result<Vec<i64>, CliError> {
        let codec = Codec::for_modulus(self.modulus)?;
        let message = codec.decode(&self.message)?;
        log::debug!("decoded {} symbols mod {}", message.len(), self.modulus);
        if let Key::Affine { matrix, .. } = &self.key {
            log::debug!(
                "{} blocks of order {}",
                message.len().div_ceil(matrix.len().max(1)),
                matrix.len()
            );
        }
        Ok(message)
    }
}

impl KeygenJob {
    fn generate(&self) -> Result<Key, CliError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        log::debug!("generating {:?} key of size {}", self.cipher, self.size);

        let key = match self.cipher {
            CipherKind::Shift => Key::random_shift(self.modulus, &mut rng)?,
            CipherKind::Keyword => Key::random_keyword(self.size, self.modulus, &mut rng)?,
            CipherKind::Affine => Key::random_affine(self.size, self.modulus, &mut rng)?,
        };
        Ok(key)
    }
}
