/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Dependency resolution: turns a target into the dependency-ordered list of
//! modules the host build tool has to compile and link.

pub mod error;
pub mod plan;
pub mod resolver;

pub use error::Referrer;
pub use error::ResolveError;
pub use plan::BuildPlan;
pub use plan::PlannedModule;
pub use resolver::resolve_all;
pub use resolver::resolve_modules;
pub use resolver::resolve_target;
