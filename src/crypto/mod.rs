pub mod commitment;

pub use commitment::{commit, Commitment, Digest, OpenCommitment, LAMBDA};
