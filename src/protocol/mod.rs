pub mod messages;
pub mod prover;
pub mod session;
pub mod verifier;
pub mod wire;

pub use messages::{
    CommitmentOpening, EdgeChallenge, GraphAnnouncement, RepetitionCount, VertexHashes,
};
pub use prover::Prover;
pub use session::{run_local, run_prover, run_verifier, SessionSummary};
pub use verifier::Verifier;
