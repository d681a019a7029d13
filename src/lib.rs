pub mod crypto;
pub mod error;
pub mod graph;
pub mod protocol;

pub use crypto::{commit, Commitment, Digest, OpenCommitment, LAMBDA};
pub use error::{Error, Result};
pub use graph::{parse, Coloring, Graph};
pub use protocol::{
    messages::{
        CommitmentOpening,
        EdgeChallenge,
        GraphAnnouncement,
        RepetitionCount,
        VertexHashes,
    },
    prover::Prover,
    session::{run_local, run_prover, run_verifier, SessionSummary},
    verifier::Verifier,
    wire,
};
