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
use modplan_core::module::pch::PchUsage;
use starlark_map::small_set::SmallSet;

#[derive(Debug, Allocative)]
struct ModuleNodeData {
    name: ModuleName,
    /// Declaration order of first occurrence, duplicates dropped.
    public_dependencies: SmallSet<ModuleName>,
    pch_usage: PchUsage,
}

/// A module rule: a named module, the modules it publicly depends on and its
/// precompiled header mode.
///
/// Dependencies are only names. They are checked against the registry when a
/// target is resolved, not when the module is declared.
#[derive(Debug, Clone, Dupe, Allocative)]
pub struct ModuleNode(Arc<ModuleNodeData>);

impl ModuleNode {
    pub fn new(
        name: ModuleName,
        public_dependencies: impl IntoIterator<Item = ModuleName>,
        pch_usage: PchUsage,
    ) -> ModuleNode {
        ModuleNode(Arc::new(ModuleNodeData {
            name,
            public_dependencies: public_dependencies.into_iter().collect(),
            pch_usage,
        }))
    }

    pub fn testing_new(name: &str, public_dependencies: &[&str]) -> ModuleNode {
        ModuleNode::new(
            ModuleName::testing_new(name),
            public_dependencies
                .iter()
                .map(|dep| ModuleName::testing_new(dep)),
            PchUsage::default(),
        )
    }

    pub fn name(&self) -> &ModuleName {
        &self.0.name
    }

    pub fn public_dependencies(&self) -> impl ExactSizeIterator<Item = &ModuleName> {
        self.0.public_dependencies.iter()
    }

    pub fn depends_on(&self, module: &str) -> bool {
        self.0.public_dependencies.contains(module)
    }

    pub fn pch_usage(&self) -> PchUsage {
        self.0.pch_usage
    }
}
