use super::FlowGraph;
use std::fmt::Write;

/// Formats a [`FlowGraph`] into a human-readable listing of nodes and links.
pub fn visualize_graph(graph: &FlowGraph, title: &str) -> String {
    let mut output = String::new();
    writeln!(&mut output, "======== FLOW GRAPH: {} ========", title).unwrap();

    writeln!(&mut output, "\n--- NODES ---").unwrap();
    for (i, (label, color)) in graph.labels.iter().zip(&graph.colors).enumerate() {
        writeln!(&mut output, "{:04}: {:<32} {}", i, label, color).unwrap();
    }

    writeln!(&mut output, "\n--- LINKS ---").unwrap();
    if graph.edges.is_empty() {
        writeln!(&mut output, "(none)").unwrap();
    }
    for edge in &graph.edges {
        writeln!(
            &mut output,
            "{} -> {} (x{})",
            graph.labels[edge.source], graph.labels[edge.target], edge.weight
        )
        .unwrap();
    }

    writeln!(&mut output, "\n================ END OF GRAPH ================").unwrap();
    output
}
