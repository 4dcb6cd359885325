/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! DFS postorder with cycle detection.

use std::hash::Hash;

use dupe::Dupe;
use starlark_map::unordered_map::UnorderedMap;

use crate::graph::successors::GraphSuccessors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsError<N, E> {
    /// Successors of `node` could not be listed. `parent` is the node it was
    /// reached from, `None` when `node` is a root.
    Successors {
        node: N,
        parent: Option<N>,
        error: E,
    },
    /// An edge led back to a node that is still being visited. Lists the
    /// nodes from the re-entered one to the one holding the edge, in
    /// traversal order.
    Cycle(Vec<N>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

struct Frame<N> {
    node: N,
    successors: std::vec::IntoIter<N>,
}

struct Dfs<'s, N, S> {
    successors: &'s S,
    state: UnorderedMap<N, VisitState>,
    // Exactly the nodes in `InProgress` state, outermost first.
    stack: Vec<Frame<N>>,
}

impl<'s, N: Eq + Hash + Dupe, S: GraphSuccessors<N>> Dfs<'s, N, S> {
    fn enter(&mut self, node: N, parent: Option<N>) -> Result<(), DfsError<N, S::Error>> {
        let mut successors = Vec::new();
        if let Err(error) = self
            .successors
            .for_each_successor(&node, |succ| successors.push(succ.dupe()))
        {
            return Err(DfsError::Successors {
                node,
                parent,
                error,
            });
        }
        self.state.insert(node.dupe(), VisitState::InProgress);
        self.stack.push(Frame {
            node,
            successors: successors.into_iter(),
        });
        Ok(())
    }

    fn cycle_from(&self, node: &N) -> Vec<N> {
        let start = self
            .stack
            .iter()
            .position(|frame| &frame.node == node)
            .unwrap_or_default();
        self.stack[start..]
            .iter()
            .map(|frame| frame.node.dupe())
            .collect()
    }

    fn run(
        &mut self,
        root: N,
        visit: &mut impl FnMut(N),
    ) -> Result<(), DfsError<N, S::Error>> {
        if self.state.contains_key(&root) {
            return Ok(());
        }
        self.enter(root, None)?;

        while let Some(frame) = self.stack.last_mut() {
            let Some(succ) = frame.successors.next() else {
                if let Some(Frame { node, .. }) = self.stack.pop() {
                    self.state.insert(node.dupe(), VisitState::Done);
                    visit(node);
                }
                continue;
            };

            match self.state.get(&succ) {
                Some(VisitState::Done) => {}
                Some(VisitState::InProgress) => return Err(DfsError::Cycle(self.cycle_from(&succ))),
                None => {
                    let parent = self.stack.last().map(|frame| frame.node.dupe());
                    self.enter(succ, parent)?;
                }
            }
        }

        Ok(())
    }
}

/// Visits every node reachable from `roots`, each exactly once, after all of
/// its successors have been visited.
///
/// Roots and successors are explored in the order they are given, so the
/// visit order is deterministic for a deterministic `successors`. The first
/// cycle or successor error in that order aborts the traversal. Uses an
/// explicit stack, so deep graphs don't exhaust the call stack.
pub fn dfs_postorder<N, S>(
    roots: impl IntoIterator<Item = N>,
    successors: S,
    mut visit: impl FnMut(N),
) -> Result<(), DfsError<N, S::Error>>
where
    N: Eq + Hash + Dupe,
    S: GraphSuccessors<N>,
{
    let mut dfs = Dfs {
        successors: &successors,
        state: UnorderedMap::new(),
        stack: Vec::new(),
    };
    for root in roots {
        dfs.run(root, &mut visit)?;
    }
    Ok(())
}
