use crate::crypto::{commit, Digest, OpenCommitment};
use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::Rng;
use std::collections::BTreeMap;

/// Verifier side of the protocol: holds only the graph and the digests
/// received for the current round, never a color or blinding value until an
/// opening arrives.
pub struct Verifier<R: Rng> {
    graph: Graph,
    hashes: Option<BTreeMap<u32, Digest>>,
    rng: R,
}

impl<R: Rng> Verifier<R> {
    pub fn new(graph: Graph, rng: R) -> Self {
        Verifier {
            graph,
            hashes: None,
            rng,
        }
    }

    /// Installs the round's digests, superseding any prior round's.
    pub fn receive_hashes(&mut self, hashes: BTreeMap<u32, Digest>) {
        self.hashes = Some(hashes);
    }

    /// Samples one edge uniformly from the deduplicated edge set.
    ///
    /// Refuses to run before the round's hashes have arrived: issuing the
    /// challenge first would let the prover tailor a coloring to the known
    /// edge and reduce soundness to nothing.
    pub fn challenge_edge(&mut self) -> Result<(u32, u32)> {
        if self.hashes.is_none() {
            return Err(Error::Protocol(
                "edge challenge requested before the round's hashes arrived".into(),
            ));
        }
        let edges = self.graph.edges();
        if edges.is_empty() {
            return Err(Error::InvalidGraph(
                "cannot challenge a graph with no edges".into(),
            ));
        }
        let index = self.rng.random_range(0..edges.len());
        Ok(edges[index])
    }

    /// Pure predicate over one round's openings: both recomputed commitments
    /// must match the stored digests and the two colors must differ. Any
    /// label alphabet is accepted; the inequality check is what carries the
    /// soundness argument. A vertex with no stored digest verifies false.
    pub fn verify(&self, a: u32, b: u32, oc_a: &OpenCommitment, oc_b: &OpenCommitment) -> bool {
        let Some(hashes) = &self.hashes else {
            return false;
        };
        let (Some(&hash_a), Some(&hash_b)) = (hashes.get(&a), hashes.get(&b)) else {
            return false;
        };
        commit(&oc_a.color, oc_a.r) == hash_a
            && commit(&oc_b.color, oc_b.r) == hash_b
            && oc_a.color != oc_b.color
    }
}
