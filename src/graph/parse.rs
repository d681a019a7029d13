use crate::error::{Error, Result};
use crate::graph::Graph;
use std::collections::BTreeMap;

/// Vertex identifier to color label. The label alphabet is whatever the
/// coloring actually uses; the protocol never fixes it to three literals.
pub type Coloring = BTreeMap<u32, String>;

/// Parses the graph+coloring text format.
///
/// One record per non-empty line, two tokens separated by a single space.
/// `"A B"` with integer `B` registers both vertices and records the edge;
/// `"A label"` assigns the color label to vertex `A`. Anything else is an
/// `InvalidGraph`. The assembled graph must pass `verify` before it is
/// returned, so a caller never sees a partially valid graph.
pub fn parse(input: &str) -> Result<(Graph, Coloring)> {
    let mut graph = Graph::new();
    let mut coloring = Coloring::new();

    for (index, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let record = index + 1;
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != 2 {
            return Err(Error::InvalidGraph(format!(
                "line {record}: expected two space-separated tokens, found {}",
                tokens.len()
            )));
        }
        let vertex: u32 = tokens[0].parse().map_err(|_| {
            Error::InvalidGraph(format!(
                "line {record}: {:?} is not a valid vertex id",
                tokens[0]
            ))
        })?;

        match tokens[1].parse::<u32>() {
            Ok(other) => {
                graph.add_vertex(vertex);
                graph.add_vertex(other);
                graph.add_edge(vertex, other);
            }
            Err(_) => {
                if tokens[1].parse::<i64>().is_ok() {
                    return Err(Error::InvalidGraph(format!(
                        "line {record}: vertex id {:?} is out of range",
                        tokens[1]
                    )));
                }
                if tokens[1].is_empty() {
                    return Err(Error::InvalidColoring(format!(
                        "line {record}: empty color token for vertex {vertex}"
                    )));
                }
                graph.add_vertex(vertex);
                coloring.insert(vertex, tokens[1].to_string());
            }
        }
    }

    graph.verify()?;
    Ok((graph, coloring))
}
