//! Packaging a flow graph into the payload the renderer consumes.

use crate::graph::FlowGraph;
use crate::relation::Direction;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Sankey node padding, in pixels.
pub const NODE_PAD: u32 = 15;
/// Sankey node thickness, in pixels.
pub const NODE_THICKNESS: u32 = 20;
pub const NODE_LINE_COLOR: &str = "black";
pub const NODE_LINE_WIDTH: f64 = 0.5;
pub const FONT_SIZE: u32 = 10;

/// A titled flow graph, ready to be handed to a renderer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramPayload {
    pub graph: FlowGraph,
    pub title: String,
}

impl DiagramPayload {
    /// The payload as a Sankey figure: one `sankey` trace plus a layout.
    ///
    /// The shape matches what browser plotting libraries accept for a Sankey
    /// diagram, so the value can be serialized and forwarded untouched.
    pub fn to_sankey_figure(&self) -> Value {
        json!({
            "data": [{
                "type": "sankey",
                "node": {
                    "pad": NODE_PAD,
                    "thickness": NODE_THICKNESS,
                    "line": { "color": NODE_LINE_COLOR, "width": NODE_LINE_WIDTH },
                    "label": self.graph.labels,
                    "color": self.graph.colors,
                },
                "link": {
                    "source": self.graph.sources(),
                    "target": self.graph.targets(),
                    "value": self.graph.values(),
                },
            }],
            "layout": {
                "title": { "text": self.title },
                "font": { "size": FONT_SIZE },
            },
        })
    }
}

/// The diagram title for a root country, trade direction and node count.
pub fn title(root: &str, trade: Direction, node_count: usize) -> String {
    format!("{}, ({}), ({})", root, trade, node_count)
}

/// Wraps `graph` with its title.
pub fn assemble(
    graph: FlowGraph,
    root: &str,
    trade: Direction,
    node_count: usize,
) -> DiagramPayload {
    DiagramPayload {
        title: title(root, trade, node_count),
        graph,
    }
}
