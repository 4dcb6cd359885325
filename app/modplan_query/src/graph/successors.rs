/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

/// Graph edges, as seen by a traversal.
pub trait GraphSuccessors<N> {
    /// Why the successors of a node could not be listed, e.g. the node does not exist.
    type Error;

    /// Calls `cb` once per direct successor of `node`. The call order is the
    /// order the traversal explores edges in, so it must be stable.
    fn for_each_successor(&self, node: &N, cb: impl FnMut(&N)) -> Result<(), Self::Error>;
}

impl<N, S: GraphSuccessors<N> + ?Sized> GraphSuccessors<N> for &S {
    type Error = S::Error;

    fn for_each_successor(&self, node: &N, cb: impl FnMut(&N)) -> Result<(), Self::Error> {
        (**self).for_each_successor(node, cb)
    }
}
