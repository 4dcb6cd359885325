/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Subcommand bodies. Each writes its report to `out`.

use std::io::Write;

use modplan_core::module::name::ModuleName;
use modplan_node::registry::Registry;
use modplan_resolver::resolve_all;
use modplan_resolver::resolve_modules;
use modplan_resolver::resolve_target;

pub(crate) fn resolve(
    registry: &Registry,
    target: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let plan = resolve_target(registry, target)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &plan)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", plan)?;
    }
    Ok(())
}

/// Returns whether every target resolved.
pub(crate) fn check(registry: &Registry, out: &mut impl Write) -> anyhow::Result<bool> {
    let mut all_ok = true;
    for (target, result) in resolve_all(registry) {
        match result {
            Ok(plan) => writeln!(out, "{}: ok ({} modules)", target, plan.modules.len())?,
            Err(e) => {
                all_ok = false;
                writeln!(out, "{}: {}", target, e)?;
            }
        }
    }
    Ok(all_ok)
}

pub(crate) fn deps(
    registry: &Registry,
    modules: Vec<ModuleName>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for m in resolve_modules(registry, modules)? {
        writeln!(out, "{} [pch: {}]", m.name(), m.pch_usage())?;
    }
    Ok(())
}

pub(crate) fn modules(registry: &Registry, out: &mut impl Write) -> anyhow::Result<()> {
    for m in registry.modules().iter() {
        let deps: Vec<&str> = m.public_dependencies().map(|d| d.as_str()).collect();
        writeln!(out, "{}: {}", m.name(), deps.join(", "))?;
    }
    Ok(())
}

pub(crate) fn targets(registry: &Registry, out: &mut impl Write) -> anyhow::Result<()> {
    for t in registry.targets().iter() {
        let members: Vec<&str> = t.modules().iter().map(|m| m.as_str()).collect();
        writeln!(out, "{} ({}): {}", t.name(), t.kind(), members.join(", "))?;
    }
    Ok(())
}
