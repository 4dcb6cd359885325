/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! The SS13Remake project descriptors, resolved end to end.

use assert_matches::assert_matches;
use modplan_core::module::name::ModuleName;
use modplan_core::module::pch::PchUsage;
use modplan_core::target::kind::TargetKind;
use modplan_node::nodes::module::ModuleNode;
use modplan_node::nodes::target::TargetNode;
use modplan_node::registry::Registry;
use modplan_node::registry::RegistryBuilder;
use modplan_resolver::resolve_target;
use modplan_resolver::ResolveError;

const ENGINE_MODULES: &[&str] = &[
    "Core",
    "CoreUObject",
    "Engine",
    "InputCore",
    "RHI",
    "RenderCore",
];

fn module(name: &str, deps: &[&str], pch_usage: PchUsage) -> ModuleNode {
    ModuleNode::new(
        ModuleName::testing_new(name),
        deps.iter().map(|d| ModuleName::testing_new(d)),
        pch_usage,
    )
}

fn project_builder() -> RegistryBuilder {
    let mut builder = RegistryBuilder::new();
    for name in ENGINE_MODULES {
        builder
            .register_module(module(name, &[], PchUsage::None))
            .unwrap();
    }
    builder
        .register_module(module(
            "FluidSimulation",
            &["Core", "CoreUObject", "Engine", "InputCore"],
            PchUsage::None,
        ))
        .unwrap();
    builder
        .register_module(module(
            "FogOfWarModule",
            &["Core", "CoreUObject", "Engine", "InputCore", "RHI", "RenderCore"],
            PchUsage::UseExplicitOrSharedPch,
        ))
        .unwrap();
    builder
        .register_module(module(
            "SS13Remake",
            &[
                "Core",
                "CoreUObject",
                "Engine",
                "InputCore",
                "RHI",
                "RenderCore",
                "FluidSimulation",
            ],
            PchUsage::UseExplicitOrSharedPch,
        ))
        .unwrap();
    for (name, kind) in [
        ("SS13Remake", TargetKind::Game),
        ("SS13RemakeEditor", TargetKind::Editor),
    ] {
        builder
            .register_target(TargetNode::testing_new(
                name,
                kind,
                &["SS13Remake", "FluidSimulation"],
            ))
            .unwrap();
    }
    builder
}

fn project() -> Registry {
    project_builder().seal()
}

#[test]
fn test_game_and_editor_plans() {
    let registry = project();
    let game = resolve_target(&registry, "SS13Remake").unwrap();
    let editor = resolve_target(&registry, "SS13RemakeEditor").unwrap();

    let expected = vec![
        "Core",
        "CoreUObject",
        "Engine",
        "InputCore",
        "RHI",
        "RenderCore",
        "FluidSimulation",
        "SS13Remake",
    ];
    assert_eq!(
        expected,
        game.module_names().map(|m| m.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(game.modules, editor.modules);
    assert_eq!(TargetKind::Game, game.kind);
    assert_eq!(TargetKind::Editor, editor.kind);
    assert_eq!(
        PchUsage::UseExplicitOrSharedPch,
        game.modules.last().unwrap().pch_usage
    );
}

#[test]
fn test_unused_module_not_planned() {
    let plan = resolve_target(&project(), "SS13Remake").unwrap();
    assert!(plan.module_names().all(|m| m.as_str() != "FogOfWarModule"));
}

#[test]
fn test_missing_engine_module() {
    let mut builder = RegistryBuilder::new();
    builder
        .register_module(module("FluidSimulation", &["Core", "Engine"], PchUsage::None))
        .unwrap();
    builder
        .register_module(module("Core", &[], PchUsage::None))
        .unwrap();
    builder
        .register_target(TargetNode::testing_new(
            "SS13Remake",
            TargetKind::Game,
            &["FluidSimulation"],
        ))
        .unwrap();
    let err = resolve_target(&builder.seal(), "SS13Remake").unwrap_err();
    assert_matches!(&err, ResolveError::UnknownModule { module, .. } if module.as_str() == "Engine");
    assert_eq!(
        "Unknown module `Engine` referenced by module `FluidSimulation`",
        err.to_string()
    );
}
