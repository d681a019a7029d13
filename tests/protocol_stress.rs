use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::{TcpListener, TcpStream};
use std::thread;
use tricolor_zkp::{parse, run_local, run_prover, run_verifier, Coloring, Graph};

fn triangle_with(colors: [&str; 3]) -> (Graph, Coloring) {
    let mut graph = Graph::new();
    for v in 0..3 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1);
    graph.add_edge(1, 2);
    graph.add_edge(2, 0);

    let coloring = colors
        .into_iter()
        .enumerate()
        .map(|(v, c)| (v as u32, c.to_string()))
        .collect();
    (graph, coloring)
}

fn proper_triangle() -> (Graph, Coloring) {
    triangle_with(["red", "green", "blue"])
}

// Edge (0, 1) is improperly colored.
fn improper_triangle() -> (Graph, Coloring) {
    triangle_with(["red", "red", "blue"])
}

#[test]
fn completeness_holds_for_any_repetition_count() {
    let (graph, coloring) = proper_triangle();
    for (seed, repetitions) in [(1u64, 1u32), (2, 5), (3, 20), (4, 100)] {
        let summary = run_local(
            &graph,
            &coloring,
            repetitions,
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed + 100),
        )
        .unwrap();
        assert_eq!(
            summary.failures, 0,
            "honest prover rejected at {repetitions} repetitions"
        );
    }
}

#[test]
fn completeness_is_independent_of_the_label_alphabet() {
    // Two labels suffice for a 4-cycle; the verifier accepts whatever
    // alphabet the coloring uses.
    let text = "0 1\n1 2\n2 3\n3 0\n0 hot\n1 cold\n2 hot\n3 cold\n";
    let (graph, coloring) = parse(text).unwrap();
    let summary = run_local(
        &graph,
        &coloring,
        40,
        StdRng::seed_from_u64(5),
        StdRng::seed_from_u64(6),
    )
    .unwrap();
    assert_eq!(summary.failures, 0);
}

#[test]
fn improper_triangle_is_caught_within_two_hundred_repetitions() {
    let (graph, coloring) = improper_triangle();
    let summary = run_local(
        &graph,
        &coloring,
        200,
        StdRng::seed_from_u64(7),
        StdRng::seed_from_u64(8),
    )
    .unwrap();
    // Miss probability is (2/3)^200, effectively zero.
    assert!(summary.failures >= 1);
    assert!(!summary.accepted());
}

#[test]
fn false_accept_rate_matches_the_soundness_bound() {
    // One bad edge out of three, three rounds per session: a session is
    // falsely accepted only if all three challenges miss the bad edge, so
    // the accept rate should sit near (2/3)^3.
    let (graph, coloring) = improper_triangle();
    let sessions = 3000;
    let rounds = 3;

    let mut accepted = 0;
    for i in 0..sessions {
        let summary = run_local(
            &graph,
            &coloring,
            rounds,
            StdRng::seed_from_u64(1_000 + i),
            StdRng::seed_from_u64(50_000 + i),
        )
        .unwrap();
        if summary.accepted() {
            accepted += 1;
        }
    }

    let expected = (2.0f64 / 3.0).powi(rounds as i32);
    let observed = accepted as f64 / sessions as f64;
    // Standard error at n = 3000 is about 0.008; 0.05 is over five sigma.
    assert!(
        (observed - expected).abs() < 0.05,
        "observed accept rate {observed:.4}, expected {expected:.4}"
    );
}

fn run_tcp_session(
    graph: Graph,
    coloring: Coloring,
    repetitions: u32,
) -> tricolor_zkp::SessionSummary {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    let verifier_thread = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        run_verifier(&mut stream, repetitions, StdRng::seed_from_u64(77)).unwrap()
    });

    let mut stream = TcpStream::connect(address).unwrap();
    run_prover(&mut stream, graph, coloring, StdRng::seed_from_u64(78)).unwrap();

    verifier_thread.join().unwrap()
}

#[test]
fn tcp_session_accepts_an_honest_prover() {
    let (graph, coloring) = proper_triangle();
    let summary = run_tcp_session(graph, coloring, 25);
    assert!(summary.accepted());
    assert_eq!(summary.repetitions, 25);
}

#[test]
fn tcp_session_rejects_an_improper_coloring() {
    let (graph, coloring) = improper_triangle();
    let summary = run_tcp_session(graph, coloring, 100);
    assert!(summary.failures >= 1);
}
