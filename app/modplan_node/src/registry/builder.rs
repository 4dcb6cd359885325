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

use crate::nodes::module::ModuleNode;
use crate::nodes::target::TargetNode;
use crate::registry::modules_map::ModulesMap;
use crate::registry::targets_map::TargetsMap;
use crate::registry::RegistryError;

/// Write phase of the registries. Every descriptor is registered here, then
/// the builder is sealed into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modules: ModulesMap,
    targets: TargetsMap,
}

impl RegistryBuilder {
    pub fn new() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn register_module(&mut self, module: ModuleNode) -> Result<(), RegistryError> {
        self.modules.register(module)
    }

    pub fn register_target(&mut self, target: TargetNode) -> Result<(), RegistryError> {
        self.targets.register(target)
    }

    pub fn seal(self) -> Registry {
        tracing::debug!(
            modules = self.modules.len(),
            targets = self.targets.len(),
            "Sealed registry"
        );
        Registry(Arc::new(RegistryData {
            modules: self.modules,
            targets: self.targets,
        }))
    }
}

#[derive(Debug, Allocative)]
struct RegistryData {
    modules: ModulesMap,
    targets: TargetsMap,
}

/// Read-only registries, shared between concurrent resolutions.
///
/// There are no mutators: everything is registered on the [`RegistryBuilder`]
/// before sealing.
#[derive(Debug, Clone, Dupe, Allocative)]
pub struct Registry(Arc<RegistryData>);

impl Registry {
    pub fn modules(&self) -> &ModulesMap {
        &self.0.modules
    }

    pub fn targets(&self) -> &TargetsMap {
        &self.0.targets
    }

    pub fn module(&self, name: &str) -> Result<&ModuleNode, RegistryError> {
        self.0.modules.lookup(name)
    }

    pub fn target(&self, name: &str) -> Result<&TargetNode, RegistryError> {
        self.0.targets.lookup(name)
    }

    pub fn testing_new(modules: &[(&str, &[&str])], targets: &[TargetNode]) -> Registry {
        let mut builder = RegistryBuilder::new();
        for (name, deps) in modules {
            builder
                .register_module(ModuleNode::testing_new(name, deps))
                .unwrap();
        }
        for target in targets {
            builder.register_target(target.dupe()).unwrap();
        }
        builder.seal()
    }
}
