use crate::crypto::{Digest, OpenCommitment};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// First message of a session, prover to verifier. The verifier must run
/// `Graph::verify` on the announced graph before using it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphAnnouncement {
    pub graph: Graph,
}

/// Verifier to prover: how many independent rounds the session will run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionCount {
    pub repetitions: u32,
}

/// Prover to verifier, once per round: the commitment digests for every
/// vertex. Sent before the challenge is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexHashes {
    pub hashes: BTreeMap<u32, Digest>,
}

/// Verifier to prover, once per round: the challenged edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeChallenge {
    pub a: u32,
    pub b: u32,
}

/// Prover to verifier, once per round: the openings for exactly the two
/// challenged vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentOpening {
    pub a: OpenCommitment,
    pub b: OpenCommitment,
}
