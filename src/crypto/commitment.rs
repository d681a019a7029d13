use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// Bit width of the blinding value's sample space. The blinding is a full
/// `u128`, drawn fresh for every commitment of every round.
pub const LAMBDA: u32 = 128;

pub type Digest = [u8; 32];

/// Binds a color label and a blinding value to a digest:
/// `SHA-256(color UTF-8 bytes || r as 16-byte little-endian)`.
///
/// Binding comes from the hash's collision resistance; hiding comes from the
/// 2^128 blinding space making the digest useless without `r`.
pub fn commit(color: &str, r: u128) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(color.as_bytes());
    hasher.update(r.to_le_bytes());
    hasher.finalize().into()
}

/// A single vertex's commitment for the current round. Prover-private; only
/// the digest leaves the prover before the challenge, and only `open` after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commitment {
    color: String,
    r: u128,
    digest: Digest,
}

impl Commitment {
    pub fn new(color: String, r: u128) -> Self {
        let digest = commit(&color, r);
        Commitment { color, r, digest }
    }

    pub fn digest(&self) -> Digest {
        self.digest
    }

    pub fn open(&self) -> OpenCommitment {
        OpenCommitment {
            color: self.color.clone(),
            r: self.r,
        }
    }
}

/// The revealed half of a commitment: color label and blinding value. The
/// digest is never transmitted with an opening; the verifier recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCommitment {
    pub color: String,
    pub r: u128,
}
