/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Module and target descriptors authored as TOML.
//!
//! ```toml
//! [[module]]
//! name = "FogOfWarModule"
//! public_dependencies = ["Core", "Engine", "RHI"]
//! pch_usage = "use_explicit_or_shared_pchs"
//!
//! [[target]]
//! name = "SS13Remake"
//! kind = "game"
//! modules = ["SS13Remake"]
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use modplan_core::module::name::ModuleName;
use modplan_core::module::pch::PchUsage;
use modplan_core::target::kind::TargetKind;
use modplan_core::target::name::TargetName;
use modplan_node::nodes::module::ModuleNode;
use modplan_node::nodes::target::TargetNode;
use modplan_node::registry::Registry;
use modplan_node::registry::RegistryBuilder;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDescriptor {
    pub name: ModuleName,
    #[serde(default)]
    pub public_dependencies: Vec<ModuleName>,
    #[serde(default)]
    pub pch_usage: PchUsage,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetDescriptor {
    pub name: TargetName,
    pub kind: TargetKind,
    #[serde(default)]
    pub modules: Vec<ModuleName>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleDescriptor>,
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetDescriptor>,
}

impl Manifest {
    pub fn parse(text: &str) -> anyhow::Result<Manifest> {
        toml::from_str(text).context("Failed to parse manifest")
    }

    pub fn load(path: &Path) -> anyhow::Result<Manifest> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest `{}`", path.display()))?;
        Manifest::parse(&text).with_context(|| format!("Invalid manifest `{}`", path.display()))
    }

    /// Registers every module, then every target, in file order.
    pub fn register_into(self, builder: &mut RegistryBuilder) -> anyhow::Result<()> {
        for m in self.modules {
            builder.register_module(ModuleNode::new(m.name, m.public_dependencies, m.pch_usage))?;
        }
        for t in self.targets {
            builder.register_target(TargetNode::new(t.name, t.kind, t.modules))?;
        }
        Ok(())
    }
}

/// Loads all manifests into one registry, so names must be unique across
/// files, and seals it.
pub fn load_registry<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Registry> {
    let mut builder = RegistryBuilder::new();
    for path in paths {
        let path = path.as_ref();
        let manifest = Manifest::load(path)?;
        tracing::debug!(
            "Loaded {} modules and {} targets from `{}`",
            manifest.modules.len(),
            manifest.targets.len(),
            path.display()
        );
        manifest
            .register_into(&mut builder)
            .with_context(|| format!("Invalid manifest `{}`", path.display()))?;
    }
    Ok(builder.seal())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use modplan_node::registry::RegistryError;

    use super::*;

    const PROJECT: &str = r#"
[[module]]
name = "Core"

[[module]]
name = "FluidSimulation"
public_dependencies = ["Core", "Core"]

[[module]]
name = "SS13Remake"
public_dependencies = ["Core", "FluidSimulation"]
pch_usage = "use_explicit_or_shared_pchs"

[[target]]
name = "SS13Remake"
kind = "game"
modules = ["SS13Remake", "FluidSimulation"]

[[target]]
name = "Tools"
kind = "editor"
"#;

    fn write_manifest(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse() {
        let manifest = Manifest::parse(PROJECT).unwrap();
        assert_eq!(3, manifest.modules.len());
        assert_eq!(PchUsage::None, manifest.modules[0].pch_usage);
        assert!(manifest.modules[0].public_dependencies.is_empty());
        assert_eq!(
            PchUsage::UseExplicitOrSharedPch,
            manifest.modules[2].pch_usage
        );
        assert_eq!(TargetKind::Editor, manifest.targets[1].kind);
        assert!(manifest.targets[1].modules.is_empty());
    }

    #[test]
    fn test_empty() {
        let manifest = Manifest::parse("").unwrap();
        assert!(manifest.modules.is_empty());
        assert!(manifest.targets.is_empty());
    }

    #[test]
    fn test_rejects_bad_input() {
        // Unknown key.
        assert!(Manifest::parse("[[module]]\nname = \"Core\"\nprivate_dependencies = []\n").is_err());
        // Invalid name.
        let err = Manifest::parse("[[module]]\nname = \"Fog Of War\"\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid character"));
        // Unknown target kind.
        assert!(Manifest::parse("[[target]]\nname = \"T\"\nkind = \"server\"\n").is_err());
        // Missing kind.
        assert!(Manifest::parse("[[target]]\nname = \"T\"\n").is_err());
    }

    #[test]
    fn test_register_into() {
        let mut builder = RegistryBuilder::new();
        Manifest::parse(PROJECT)
            .unwrap()
            .register_into(&mut builder)
            .unwrap();
        let registry = builder.seal();
        assert_eq!(3, registry.modules().len());
        assert_eq!(
            1,
            registry
                .module("FluidSimulation")
                .unwrap()
                .public_dependencies()
                .len()
        );
        assert_eq!(2, registry.target("SS13Remake").unwrap().modules().len());
    }

    #[test]
    fn test_load_registry() {
        let project = write_manifest(PROJECT);
        let engine = write_manifest("[[module]]\nname = \"Engine\"\n");
        let registry = load_registry(&[project.path(), engine.path()]).unwrap();
        assert_eq!(4, registry.modules().len());
        assert!(registry.module("Engine").is_ok());
    }

    #[test]
    fn test_duplicates_across_files() {
        let first = write_manifest("[[module]]\nname = \"Core\"\n");
        let second = write_manifest("[[module]]\nname = \"Core\"\n");
        let err = load_registry(&[first.path(), second.path()]).unwrap_err();
        assert_matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::DuplicateModule(name)) if name.as_str() == "Core"
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_registry(&[dir.path().join("missing.toml")]).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }
}
