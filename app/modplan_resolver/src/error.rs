/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use derive_more::Display;
use modplan_core::module::name::ModuleName;
use modplan_core::target::name::TargetName;

/// Where a module name was referenced from.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Referrer {
    #[display(fmt = "target `{}`", _0)]
    Target(TargetName),
    #[display(fmt = "module `{}`", _0)]
    Module(ModuleName),
    /// A root passed directly to [`crate::resolve_modules`].
    #[display(fmt = "the request")]
    Request,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown target `{0}`")]
    UnknownTarget(String),
    #[error("Unknown module `{module}` referenced by {referenced_by}")]
    UnknownModule {
        module: ModuleName,
        referenced_by: Referrer,
    },
    #[error("{}", display_cycle(&.0[..]))]
    CyclicDependency(Vec<ModuleName>),
}

impl ResolveError {
    /// Modules of a dependency cycle, in traversal order.
    pub fn cycle(&self) -> Option<&[ModuleName]> {
        match self {
            ResolveError::CyclicDependency(cycle) => Some(cycle),
            _ => None,
        }
    }
}

fn display_cycle(cycle: &[ModuleName]) -> String {
    use std::fmt::Write;

    let mut s = String::new();
    s.push_str("Module dependency cycle detected (`->` means \"depends on\"):\n");
    for m in cycle {
        let _ = writeln!(s, "  {} ->", m);
    }
    // point back at the first item in the cycle.
    if let Some(first) = cycle.first() {
        let _ = write!(s, "  {}", first);
    }
    s
}
