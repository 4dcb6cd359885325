/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;

use modplan_core::module::name::ModuleName;
use modplan_core::module::pch::PchUsage;
use modplan_core::target::kind::TargetKind;
use modplan_core::target::name::TargetName;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedModule {
    pub name: ModuleName,
    pub pch_usage: PchUsage,
}

/// What the host build tool consumes for a target: its kind and every module
/// it needs, each after all of its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub target: TargetName,
    pub kind: TargetKind,
    pub modules: Vec<PlannedModule>,
}

impl BuildPlan {
    pub fn module_names(&self) -> impl ExactSizeIterator<Item = &ModuleName> {
        self.modules.iter().map(|m| &m.name)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.target, self.kind)?;
        for m in &self.modules {
            writeln!(f, "  {} [pch: {}]", m.name, m.pch_usage)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> BuildPlan {
        BuildPlan {
            target: TargetName::testing_new("SS13Remake"),
            kind: TargetKind::Game,
            modules: vec![
                PlannedModule {
                    name: ModuleName::testing_new("Core"),
                    pch_usage: PchUsage::None,
                },
                PlannedModule {
                    name: ModuleName::testing_new("SS13Remake"),
                    pch_usage: PchUsage::UseExplicitOrSharedPch,
                },
            ],
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "SS13Remake (game)\n  Core [pch: none]\n  SS13Remake [pch: use_explicit_or_shared_pchs]\n",
            plan().to_string()
        );
    }

    #[test]
    fn test_json() {
        assert_eq!(
            serde_json::json!({
                "target": "SS13Remake",
                "kind": "game",
                "modules": [
                    {"name": "Core", "pch_usage": "none"},
                    {"name": "SS13Remake", "pch_usage": "use_explicit_or_shared_pchs"},
                ],
            }),
            serde_json::to_value(plan()).unwrap()
        );
    }
}
