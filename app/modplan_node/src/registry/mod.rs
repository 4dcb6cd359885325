/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use modplan_core::module::name::ModuleName;
use modplan_core::target::name::TargetName;

mod builder;
mod modules_map;
mod targets_map;

pub use builder::Registry;
pub use builder::RegistryBuilder;
pub use modules_map::ModulesMap;
pub use targets_map::TargetsMap;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Attempted to register module `{0}` twice")]
    DuplicateModule(ModuleName),
    #[error("Attempted to register target `{0}` twice")]
    DuplicateTarget(TargetName),
    #[error("Unknown module `{0}`")]
    UnknownModule(String),
    #[error("Unknown target `{0}`")]
    UnknownTarget(String),
}
