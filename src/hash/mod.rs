//! Pluggable content-hash primitive selected by algorithm name.
//!
//! The contract is `byte stream -> uppercase hex string`. Hasher instances
//! carry mutable digest state and are never shared between concurrent hash
//! operations; each worker obtains its own through [`Algorithm::hasher`].

use crate::error::ChecksumError;
use digest::{Digest, DynDigest};
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use std::io::Read;
use std::str::FromStr;

/// Buffer size for streaming file reads.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Content-hash algorithm selected by name on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    /// Canonical algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
        }
    }

    /// Factory for hasher instances.
    ///
    /// Each hashing worker calls this once and owns the returned instance
    /// for its lifetime.
    pub fn hasher(&self) -> ContentHasher {
        let digest: Box<dyn DynDigest + Send> = match self {
            Algorithm::Md5 => Box::new(Md5::new()),
            Algorithm::Sha1 => Box::new(Sha1::new()),
            Algorithm::Sha256 => Box::new(Sha256::new()),
        };
        ContentHasher { digest }
    }
}

impl FromStr for Algorithm {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "SHA1" | "SHA-1" => Ok(Algorithm::Sha1),
            "SHA256" | "SHA-256" => Ok(Algorithm::Sha256),
            _ => Err(ChecksumError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Reusable hasher wrapping one digest instance.
///
/// Digests are produced as uppercase hex. The instance resets itself after
/// every hash, so a worker can reuse it across files.
pub struct ContentHasher {
    digest: Box<dyn DynDigest + Send>,
}

impl ContentHasher {
    /// Hash a byte slice.
    pub fn hash_bytes(&mut self, bytes: &[u8]) -> String {
        self.digest.update(bytes);
        self.finalize_hex()
    }

    /// Hash a string's UTF-8 bytes.
    pub fn hash_str(&mut self, content: &str) -> String {
        self.hash_bytes(content.as_bytes())
    }

    /// Hash a reader to completion, reporting the byte offset after each
    /// chunk through `progress`.
    pub fn hash_reader<R: Read>(
        &mut self,
        reader: &mut R,
        mut progress: impl FnMut(u64),
    ) -> std::io::Result<String> {
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let mut offset = 0u64;
        loop {
            let n = reader.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            self.digest.update(&buffer[..n]);
            offset += n as u64;
            progress(offset);
        }
        Ok(self.finalize_hex())
    }

    fn finalize_hex(&mut self) -> String {
        hex::encode_upper(self.digest.finalize_reset())
    }
}
