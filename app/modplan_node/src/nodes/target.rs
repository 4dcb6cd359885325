/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;
use modplan_core::module::name::ModuleName;
use modplan_core::target::kind::TargetKind;
use modplan_core::target::name::TargetName;

#[derive(Debug, Allocative)]
struct TargetNodeData {
    name: TargetName,
    kind: TargetKind,
    modules: Vec<ModuleName>,
}

/// A target rule: a binary of some kind and the modules it explicitly pulls in.
///
/// Member order only affects the order of the resolved plan.
#[derive(Debug, Clone, Dupe, Allocative)]
pub struct TargetNode(Arc<TargetNodeData>);

impl TargetNode {
    pub fn new(
        name: TargetName,
        kind: TargetKind,
        modules: impl IntoIterator<Item = ModuleName>,
    ) -> TargetNode {
        TargetNode(Arc::new(TargetNodeData {
            name,
            kind,
            modules: modules.into_iter().collect(),
        }))
    }

    pub fn testing_new(name: &str, kind: TargetKind, modules: &[&str]) -> TargetNode {
        TargetNode::new(
            TargetName::testing_new(name),
            kind,
            modules.iter().map(|m| ModuleName::testing_new(m)),
        )
    }

    pub fn name(&self) -> &TargetName {
        &self.0.name
    }

    pub fn kind(&self) -> TargetKind {
        self.0.kind
    }

    /// Member modules in declaration order.
    pub fn modules(&self) -> &[ModuleName] {
        &self.0.modules
    }
}
