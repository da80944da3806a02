use petgraph::{
    algo::{
        toposort,
        tred::{dag_to_toposorted_adjacency_list, dag_transitive_reduction_closure},
    },
    graph::{DiGraph, NodeIndex},
    visit::IntoNeighbors,
};

use crate::{
    misc::log::targets,
    structures::Element,
    types::err::{self, ErrorKind},
};

/// A square table from which a diagram is read.
#[derive(Clone, Copy, Debug)]
pub enum DiagramTable<'t> {
    /// A binary operation, read as `x` above `y` when `x·y = x`.
    Operation(&'t [Vec<Element>]),

    /// A binary relation, read as `x` above `y` when `x R y`.
    Relation(&'t [Vec<bool>]),
}

impl DiagramTable<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Operation(table) => table.len(),
            Self::Relation(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether each row has as many entries as there are rows.
    pub fn is_square(&self) -> bool {
        let n = self.len();
        match self {
            Self::Operation(table) => table.iter().all(|row| row.len() == n),
            Self::Relation(table) => table.iter().all(|row| row.len() == n),
        }
    }
}

/// How the edges of a diagram were obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Edges are the covering pairs of an acyclic edge relation.
    Reduced,

    /// The edge relation has a cycle, and all edges are kept.
    FallbackRaw,
}

/// A directed graph over the elements `0..nodes` of a structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HasseDiagram {
    pub nodes: usize,

    /// Flag for each node, drawn in a distinct colour.
    pub highlighted: Vec<bool>,

    /// Pairs `(x, y)`, sorted, where `x` is drawn above `y`.
    pub edges: Vec<(Element, Element)>,

    pub reduction: Reduction,
}

/// The diagram of `table`.
///
/// An edge `(x, y)` with `x != y` is present when:
/// - For a relation, `table[x][y]` holds, or `table[y][x]` holds if `dual`.
/// - For an operation, `table[x][y] == x`, or `table[x][y] == y` if `dual`.
///
/// So, the order `<=` and the meet `^` are drawn the right way up when dualised, while the join `v` is drawn the right way up as is.
///
/// Edges implied by transitivity are then removed, unless the edges contain a cycle, in which case every edge is kept.
///
/// Nodes beyond the length of `highlight` are not highlighted.
///
/// A table which is not square is a [TableShape](err::StructureError::TableShape) error.
pub fn hasse_diagram(
    table: DiagramTable,
    dual: bool,
    highlight: &[bool],
) -> Result<HasseDiagram, ErrorKind> {
    if !table.is_square() {
        return Err(err::StructureError::TableShape("diagram table".to_owned()).into());
    }
    let nodes = table.len();
    let domain = 0..nodes;

    let mut raw_edges = Vec::default();
    for x in domain.clone() {
        for y in domain.clone() {
            if x == y {
                continue;
            }
            let edge = match table {
                DiagramTable::Relation(rel) => match dual {
                    true => rel[y][x],
                    false => rel[x][y],
                },
                DiagramTable::Operation(op) => match dual {
                    true => op[x][y] == y,
                    false => op[x][y] == x,
                },
            };
            if edge {
                raw_edges.push((x, y));
            }
        }
    }

    let highlighted = domain
        .map(|x| highlight.get(x).copied().unwrap_or(false))
        .collect();

    let (mut edges, reduction) = match transitive_reduction(nodes, &raw_edges) {
        Some(reduced) => (reduced, Reduction::Reduced),
        None => {
            log::info!(target: targets::DIAGRAM, "Edges have a cycle, drawing all {} edges", raw_edges.len());
            (raw_edges, Reduction::FallbackRaw)
        }
    };
    edges.sort_unstable();

    Ok(HasseDiagram {
        nodes,
        highlighted,
        edges,
        reduction,
    })
}

/// The covering edges of an acyclic edge relation, or nothing if the edges have a cycle.
fn transitive_reduction(nodes: usize, edges: &[(Element, Element)]) -> Option<Vec<(Element, Element)>> {
    let mut graph = DiGraph::<(), ()>::with_capacity(nodes, edges.len());
    for _ in 0..nodes {
        graph.add_node(());
    }
    for (x, y) in edges {
        graph.add_edge(NodeIndex::new(*x), NodeIndex::new(*y), ());
    }

    let topological = toposort(&graph, None).ok()?;

    // The adjacency list is indexed by position in the topological order.
    let (sorted, _) = dag_to_toposorted_adjacency_list::<_, NodeIndex>(&graph, &topological);
    let (reduction, _) = dag_transitive_reduction_closure(&sorted);

    let mut covers = Vec::default();
    for position in 0..topological.len() {
        let from = topological[position].index();
        for to in reduction.neighbors(NodeIndex::new(position)) {
            covers.push((from, topological[to.index()].index()));
        }
    }
    Some(covers)
}
