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
use modplan_core::target::name::TargetName;
use starlark_map::small_map::SmallMap;

use crate::nodes::target::TargetNode;
use crate::registry::RegistryError;

/// Target registry: target name -> target rule, in registration order.
#[derive(Debug, Clone, Default, Allocative)]
pub struct TargetsMap {
    map: SmallMap<TargetName, TargetNode>,
}

impl TargetsMap {
    #[inline]
    pub fn new() -> TargetsMap {
        TargetsMap {
            map: SmallMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&TargetNode> {
        self.map.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&TargetNode, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownTarget(name.to_owned()))
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
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TargetNode> {
        self.map.values()
    }

    #[inline]
    pub fn register(&mut self, target: TargetNode) -> Result<(), RegistryError> {
        if self.map.contains_key(target.name()) {
            return Err(RegistryError::DuplicateTarget(target.name().dupe()));
        }
        self.map.insert(target.name().dupe(), target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use modplan_core::target::kind::TargetKind;

    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut targets = TargetsMap::new();
        targets
            .register(TargetNode::testing_new(
                "SS13Remake",
                TargetKind::Game,
                &["SS13Remake", "FluidSimulation"],
            ))
            .unwrap();
        targets
            .register(TargetNode::testing_new(
                "SS13RemakeEditor",
                TargetKind::Editor,
                &["SS13Remake"],
            ))
            .unwrap();

        let game = targets.lookup("SS13Remake").unwrap();
        assert_eq!(TargetKind::Game, game.kind());
        assert_eq!(2, game.modules().len());
        assert_eq!(
            vec!["SS13Remake", "SS13RemakeEditor"],
            targets.iter().map(|t| t.name().as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_duplicate_and_unknown() {
        let mut targets = TargetsMap::new();
        targets
            .register(TargetNode::testing_new("Game", TargetKind::Game, &[]))
            .unwrap();
        assert_eq!(
            Err(RegistryError::DuplicateTarget(TargetName::testing_new("Game"))),
            targets.register(TargetNode::testing_new("Game", TargetKind::Editor, &[]))
        );
        assert_eq!(TargetKind::Game, targets.lookup("Game").unwrap().kind());
        assert_eq!(
            Err(RegistryError::UnknownTarget("Server".to_owned())),
            targets.lookup("Server").map(|t| t.name().dupe())
        );
    }
}
