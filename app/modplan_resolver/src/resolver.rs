/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use dupe::Dupe;
use dupe::IterDupedExt;
use modplan_core::module::name::ModuleName;
use modplan_core::target::name::TargetName;
use modplan_node::nodes::module::ModuleNode;
use modplan_node::registry::ModulesMap;
use modplan_node::registry::Registry;
use modplan_node::registry::RegistryError;
use modplan_query::graph::dfs::dfs_postorder;
use modplan_query::graph::dfs::DfsError;
use modplan_query::graph::successors::GraphSuccessors;

use crate::error::Referrer;
use crate::error::ResolveError;
use crate::plan::BuildPlan;
use crate::plan::PlannedModule;

/// Edges of the module graph are public dependencies, explored in
/// declaration order.
struct ModuleDeps<'a>(&'a ModulesMap);

impl GraphSuccessors<ModuleName> for ModuleDeps<'_> {
    type Error = RegistryError;

    fn for_each_successor(
        &self,
        node: &ModuleName,
        cb: impl FnMut(&ModuleName),
    ) -> Result<(), RegistryError> {
        self.0.lookup(node.as_str())?.public_dependencies().for_each(cb);
        Ok(())
    }
}

fn resolve_nodes(
    modules: &ModulesMap,
    roots: impl IntoIterator<Item = ModuleName>,
    root_referrer: Referrer,
) -> Result<Vec<ModuleNode>, ResolveError> {
    let mut order = Vec::new();
    dfs_postorder(roots, ModuleDeps(modules), |name| {
        // Every visited module was looked up when the traversal entered it.
        if let Some(module) = modules.get(name.as_str()) {
            order.push(module.dupe());
        }
    })
    .map_err(|e| match e {
        DfsError::Successors { node, parent, .. } => ResolveError::UnknownModule {
            module: node,
            referenced_by: parent.map_or(root_referrer, Referrer::Module),
        },
        DfsError::Cycle(cycle) => ResolveError::CyclicDependency(cycle),
    })?;
    Ok(order)
}

/// Resolves a target into a build plan listing every module it transitively
/// requires, dependencies first.
///
/// Members are explored in declaration order and each module's dependencies
/// in declaration order, so the same registry always yields the same plan.
/// Fails with the first unknown module or dependency cycle met on the way.
pub fn resolve_target(registry: &Registry, target: &str) -> Result<BuildPlan, ResolveError> {
    let target = registry
        .targets()
        .get(target)
        .ok_or_else(|| ResolveError::UnknownTarget(target.to_owned()))?;

    let result = resolve_nodes(
        registry.modules(),
        target.modules().iter().duped(),
        Referrer::Target(target.name().dupe()),
    );
    let modules = match result {
        Ok(modules) => modules,
        Err(e) => {
            tracing::debug!(target_name = %target.name(), "Failed to resolve target: {}", e);
            return Err(e);
        }
    };
    tracing::debug!(
        target_name = %target.name(),
        modules = modules.len(),
        "Resolved target"
    );

    Ok(BuildPlan {
        target: target.name().dupe(),
        kind: target.kind(),
        modules: modules
            .iter()
            .map(|m| PlannedModule {
                name: m.name().dupe(),
                pch_usage: m.pch_usage(),
            })
            .collect(),
    })
}

/// Dependency-ordered closure of `roots`, roots included.
pub fn resolve_modules(
    registry: &Registry,
    roots: impl IntoIterator<Item = ModuleName>,
) -> Result<Vec<ModuleNode>, ResolveError> {
    resolve_nodes(registry.modules(), roots, Referrer::Request)
}

/// Resolves every registered target independently, in registration order.
pub fn resolve_all(registry: &Registry) -> Vec<(TargetName, Result<BuildPlan, ResolveError>)> {
    registry
        .targets()
        .iter()
        .map(|t| (t.name().dupe(), resolve_target(registry, t.name().as_str())))
        .collect()
}
