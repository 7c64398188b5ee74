//! Combinational evaluation order.
//!
//! Nodes are the model's combinational elements. An edge `a -> b` means `b`
//! reads a net that `a` drives. Registers and external inputs are sources and
//! never appear as nodes.

use std::collections::{HashMap, VecDeque};

use crate::common::{RegFileId, UnitId};

/// A combinational element of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// A combinational unit.
    Unit(UnitId),
    /// The read side of a register file.
    RegisterFile(RegFileId),
}

/// Computes a topological order of `nodes` (Kahn's algorithm, BFS).
///
/// Ties are broken by the order of `nodes`, so the result is deterministic.
/// On a cycle, returns the first node of `nodes` that could not be ordered.
pub fn topo(nodes: &[Node], edges: &[(Node, Node)]) -> Result<Vec<Node>, Node> {
    let mut degree: HashMap<Node, usize> = nodes.iter().map(|&n| (n, 0)).collect();
    let mut successors: HashMap<Node, Vec<Node>> = HashMap::new();
    for &(from, to) in edges {
        *degree.entry(to).or_default() += 1;
        successors.entry(from).or_default().push(to);
    }

    let mut queue: VecDeque<Node> = nodes
        .iter()
        .copied()
        .filter(|n| degree.get(n).copied().unwrap_or_default() == 0)
        .collect();
    let mut order = Vec::with_capacity(nodes.len());
    while let Some(head) = queue.pop_front() {
        order.push(head);
        for &to in successors.get(&head).map(Vec::as_slice).unwrap_or_default() {
            if let Some(d) = degree.get_mut(&to) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(to);
                }
            }
        }
    }

    if order.len() == nodes.len() {
        Ok(order)
    } else {
        let stuck = nodes
            .iter()
            .copied()
            .find(|n| degree.get(n).copied().unwrap_or_default() > 0);
        Err(stuck.unwrap_or(nodes[0]))
    }
}
