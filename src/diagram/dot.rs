use std::fmt::Write;

use crate::config::DiagramConfig;

use super::HasseDiagram;

impl HasseDiagram {
    /// The diagram in the graphviz DOT language.
    ///
    /// Nodes are small fixed size circles labelled by their element, and highlighted nodes take the highlight colour of the config.
    pub fn as_dot(&self, config: &DiagramConfig) -> String {
        let width = config.node_width.value;
        let font_size = config.font_size.value;

        let mut dot = String::default();
        let _ = writeln!(dot, "digraph {{");
        let _ = writeln!(
            dot,
            "  node [shape=circle, width={width}, height={width}, fixedsize=true, fontsize={font_size}];"
        );
        let _ = writeln!(dot, "  edge [arrowhead=none];");

        for (node, highlighted) in self.highlighted.iter().enumerate() {
            let colour = match highlighted {
                true => &config.highlight_colour,
                false => &config.base_colour,
            };
            let _ = writeln!(dot, "  \"{node}\" [color={colour}];");
        }

        for (from, to) in &self.edges {
            let _ = writeln!(dot, "  \"{from}\" -> \"{to}\";");
        }

        dot.push('}');
        dot
    }
}
