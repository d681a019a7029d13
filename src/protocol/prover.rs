use crate::crypto::{Commitment, Digest, OpenCommitment};
use crate::error::{Error, Result};
use crate::graph::{Coloring, Graph};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

/// Uniformly random permutation of the label set, as original → renamed.
fn color_permutation<R: Rng>(colors: &[String], rng: &mut R) -> BTreeMap<String, String> {
    let mut shuffled = colors.to_vec();
    shuffled.shuffle(rng);
    colors.iter().cloned().zip(shuffled).collect()
}

/// Prover side of the protocol: owns the secret coloring and, per round, a
/// freshly permuted and blinded commitment for every vertex.
///
/// The randomness source is supplied at construction so sessions are
/// reproducible under test; production callers hand in an OS-seeded
/// generator, since the blinding values must resist guessing.
pub struct Prover<R: Rng> {
    graph: Graph,
    coloring: Coloring,
    commitments: BTreeMap<u32, Commitment>,
    rng: R,
}

impl<R: Rng> Prover<R> {
    /// Fails with `InvalidColoring` if any vertex of the graph has no color
    /// assigned. Properness is deliberately not checked here: catching an
    /// improper coloring is the verifier's job, one challenged edge at a
    /// time.
    pub fn new(graph: Graph, coloring: Coloring, rng: R) -> Result<Self> {
        for v in graph.vertices() {
            if !coloring.contains_key(&v) {
                return Err(Error::InvalidColoring(format!(
                    "vertex {v} has no color assigned"
                )));
            }
        }
        Ok(Prover {
            graph,
            coloring,
            commitments: BTreeMap::new(),
            rng,
        })
    }

    /// Draws a fresh label permutation and fresh blinding values, and
    /// replaces the commitment table wholesale. Must run before every round;
    /// reusing a prior round's permutation or blinding would let repeated
    /// challenges correlate across rounds and break zero-knowledge.
    pub fn start_round(&mut self) {
        let labels: Vec<String> = self
            .graph
            .vertices()
            .iter()
            .map(|v| self.coloring[v].clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let permutation = color_permutation(&labels, &mut self.rng);

        let mut commitments = BTreeMap::new();
        for v in self.graph.vertices() {
            let permuted = permutation[&self.coloring[&v]].clone();
            let r: u128 = self.rng.random();
            commitments.insert(v, Commitment::new(permuted, r));
        }
        self.commitments = commitments;
    }

    /// The current round's vertex → digest map. Never exposes a color or a
    /// blinding value.
    pub fn hashes(&self) -> BTreeMap<u32, Digest> {
        self.commitments
            .iter()
            .map(|(&v, commitment)| (v, commitment.digest()))
            .collect()
    }

    /// Opens the commitments of the two challenged vertices, and nothing
    /// else. `UnknownVertex` means the peers have desynchronized.
    pub fn open(&self, a: u32, b: u32) -> Result<(OpenCommitment, OpenCommitment)> {
        let oc_a = self
            .commitments
            .get(&a)
            .ok_or(Error::UnknownVertex(a))?
            .open();
        let oc_b = self
            .commitments
            .get(&b)
            .ok_or(Error::UnknownVertex(b))?
            .open();
        Ok((oc_a, oc_b))
    }
}
