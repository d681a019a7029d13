use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tricolor_zkp::protocol::{run_local, run_prover, run_verifier, SessionSummary};
use tricolor_zkp::{parse, Coloring, Graph};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Bounds how long a session can stall on an unresponsive peer.
const IO_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(author, version, about = "Interactive zero-knowledge proof of a proper 3-coloring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a verifier and prove knowledge of the coloring
    Prove {
        /// Address of the verifier
        #[arg(long)]
        address: String,
        /// Port of the verifier
        #[arg(long)]
        port: u16,
        /// Path to the graph+coloring file
        #[arg(long, value_name = "FILE")]
        graph: PathBuf,
    },
    /// Listen for one prover and run the verification session
    Verify {
        /// Port to listen on
        #[arg(long)]
        port: u16,
        /// Number of independent rounds to run
        #[arg(long, default_value_t = 1)]
        repetitions: u32,
    },
    /// Run both roles in-process against a local graph file
    Local {
        /// Path to the graph+coloring file
        #[arg(long, value_name = "FILE")]
        graph: PathBuf,
        /// Number of independent rounds to run
        #[arg(long, default_value_t = 1)]
        repetitions: u32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Prove {
            address,
            port,
            graph,
        } => run_prove(address, port, graph)?,
        Commands::Verify { port, repetitions } => run_verify(port, repetitions)?,
        Commands::Local { graph, repetitions } => run_local_session(graph, repetitions)?,
    }
    Ok(())
}

fn load_instance(path: &PathBuf) -> CliResult<(Graph, Coloring)> {
    let text = fs::read_to_string(path)?;
    let (graph, coloring) = parse(&text)?;
    Ok((graph, coloring))
}

fn run_prove(address: String, port: u16, graph_path: PathBuf) -> CliResult<()> {
    let (graph, coloring) = load_instance(&graph_path)?;
    let stream = TcpStream::connect((address.as_str(), port))?;
    stream.set_read_timeout(Some(IO_TIMEOUT))?;
    stream.set_write_timeout(Some(IO_TIMEOUT))?;
    info!(%address, port, "connected to verifier");

    let mut channel = stream;
    run_prover(&mut channel, graph, coloring, StdRng::from_os_rng())?;
    println!("Proof session complete.");
    Ok(())
}

fn run_verify(port: u16, repetitions: u32) -> CliResult<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))?;
    info!(port, "listening for a prover");
    let (stream, peer) = listener.accept()?;
    stream.set_read_timeout(Some(IO_TIMEOUT))?;
    stream.set_write_timeout(Some(IO_TIMEOUT))?;
    info!(%peer, "prover connected");

    let mut channel = stream;
    let summary = run_verifier(&mut channel, repetitions, StdRng::from_os_rng())?;
    report(summary);
    Ok(())
}

fn run_local_session(graph_path: PathBuf, repetitions: u32) -> CliResult<()> {
    let (graph, coloring) = load_instance(&graph_path)?;
    let summary = run_local(
        &graph,
        &coloring,
        repetitions,
        StdRng::from_os_rng(),
        StdRng::from_os_rng(),
    )?;
    report(summary);
    Ok(())
}

fn report(summary: SessionSummary) {
    if summary.accepted() {
        println!("All {} repetitions passed.", summary.repetitions);
    } else {
        println!(
            "Summary: {} failed out of {}.",
            summary.failures, summary.repetitions
        );
    }
}
