use crate::crypto::commit;
use crate::error::{Error, Result};
use crate::graph::{Coloring, Graph};
use crate::protocol::messages::{
    CommitmentOpening, EdgeChallenge, GraphAnnouncement, RepetitionCount, VertexHashes,
};
use crate::protocol::prover::Prover;
use crate::protocol::verifier::Verifier;
use crate::protocol::wire;
use rand::Rng;
use std::io::{Read, Write};
use tracing::{debug, info, warn};

/// Outcome of a completed session. Any failed round condemns the whole
/// session; there is no partial credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub repetitions: u32,
    pub failures: u32,
}

impl SessionSummary {
    pub fn accepted(&self) -> bool {
        self.failures == 0
    }
}

/// Drives the prover side of one session over a blocking byte channel:
/// announce the graph, learn the repetition count, then commit / answer the
/// challenge / open, once per round. Any channel or engine fault aborts the
/// session immediately.
pub fn run_prover<C, R>(channel: &mut C, graph: Graph, coloring: Coloring, rng: R) -> Result<()>
where
    C: Read + Write,
    R: Rng,
{
    let mut prover = Prover::new(graph.clone(), coloring, rng)?;

    wire::write_message(channel, &GraphAnnouncement { graph })?;
    let RepetitionCount { repetitions } = wire::read_message(channel)?;
    if repetitions == 0 {
        return Err(Error::Protocol(
            "verifier requested zero repetitions".into(),
        ));
    }
    info!(repetitions, "prover session started");

    for round in 0..repetitions {
        prover.start_round();
        wire::write_message(
            channel,
            &VertexHashes {
                hashes: prover.hashes(),
            },
        )?;
        let EdgeChallenge { a, b } = wire::read_message(channel)?;
        let (oc_a, oc_b) = prover.open(a, b)?;
        wire::write_message(channel, &CommitmentOpening { a: oc_a, b: oc_b })?;
        debug!(round, a, b, "opened challenged edge");
    }
    info!("prover session complete");
    Ok(())
}

/// Drives the verifier side of one session: receive and validate the graph,
/// announce the repetition count, then for each round receive the digests,
/// issue the challenge, and verify the openings.
pub fn run_verifier<C, R>(channel: &mut C, repetitions: u32, rng: R) -> Result<SessionSummary>
where
    C: Read + Write,
    R: Rng,
{
    if repetitions == 0 {
        return Err(Error::Protocol("repetition count must be positive".into()));
    }

    let GraphAnnouncement { graph } = wire::read_message(channel)?;
    graph.verify()?;
    let mut verifier = Verifier::new(graph, rng);

    wire::write_message(channel, &RepetitionCount { repetitions })?;
    info!(repetitions, "verifier session started");

    let mut failures = 0;
    for round in 0..repetitions {
        let VertexHashes { hashes } = wire::read_message(channel)?;
        verifier.receive_hashes(hashes);

        let (a, b) = verifier.challenge_edge()?;
        wire::write_message(channel, &EdgeChallenge { a, b })?;

        let CommitmentOpening { a: oc_a, b: oc_b } = wire::read_message(channel)?;
        if verifier.verify(a, b, &oc_a, &oc_b) {
            debug!(round, a, b, "round accepted");
        } else {
            warn!(
                round,
                a,
                b,
                opened_a = %hex::encode(commit(&oc_a.color, oc_a.r)),
                opened_b = %hex::encode(commit(&oc_b.color, oc_b.r)),
                "round rejected"
            );
            failures += 1;
        }
    }

    let summary = SessionSummary {
        repetitions,
        failures,
    };
    info!(
        failures,
        repetitions,
        accepted = summary.accepted(),
        "verifier session complete"
    );
    Ok(summary)
}

/// Runs both roles in-process with no channel between them. Used by the
/// `local` subcommand and by statistical tests, where thousands of seeded
/// sessions have to be cheap.
pub fn run_local<P, V>(
    graph: &Graph,
    coloring: &Coloring,
    repetitions: u32,
    prover_rng: P,
    verifier_rng: V,
) -> Result<SessionSummary>
where
    P: Rng,
    V: Rng,
{
    let mut prover = Prover::new(graph.clone(), coloring.clone(), prover_rng)?;
    let mut verifier = Verifier::new(graph.clone(), verifier_rng);

    let mut failures = 0;
    for _ in 0..repetitions {
        prover.start_round();
        verifier.receive_hashes(prover.hashes());
        let (a, b) = verifier.challenge_edge()?;
        let (oc_a, oc_b) = prover.open(a, b)?;
        if !verifier.verify(a, b, &oc_a, &oc_b) {
            failures += 1;
        }
    }
    Ok(SessionSummary {
        repetitions,
        failures,
    })
}
