/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use allocative::Allocative;
use dupe::Dupe;
use modplan_core::module::name::ModuleName;
use starlark_map::small_map::SmallMap;

use crate::nodes::module::ModuleNode;
use crate::registry::RegistryError;

/// Module registry: module name -> module rule, in registration order.
#[derive(Debug, Clone, Default, Allocative)]
pub struct ModulesMap {
    map: SmallMap<ModuleName, ModuleNode>,
}

impl ModulesMap {
    #[inline]
    pub fn new() -> ModulesMap {
        ModulesMap {
            map: SmallMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&ModuleNode> {
        self.map.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&ModuleNode, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownModule(name.to_owned()))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ModuleNode> {
        self.map.values()
    }

    /// Fails if a module with the same name is already registered, keeping
    /// the first one.
    pub fn register(&mut self, module: ModuleNode) -> Result<(), RegistryError> {
        if self.map.contains_key(module.name()) {
            return Err(RegistryError::DuplicateModule(module.name().dupe()));
        }
        self.map.insert(module.name().dupe(), module);
        Ok(())
    }
}

/// For tests.
impl FromIterator<ModuleNode> for ModulesMap {
    fn from_iter<T: IntoIterator<Item = ModuleNode>>(iter: T) -> Self {
        let mut map = ModulesMap::new();
        for module in iter {
            map.register(module).unwrap();
        }
        map
    }
}
