/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use allocative::Allocative;
use derive_more::Display;
use dupe::Dupe;
use serde::Deserialize;
use serde::Serialize;

/// How a module consumes precompiled headers.
///
/// Only the chosen mode is tracked; header content is generated by the host
/// build tool.
#[derive(
    Clone, Copy, Dupe, Debug, Display, Default, Hash, Eq, PartialEq, Allocative,
    Serialize, Deserialize
)]
pub enum PchUsage {
    #[default]
    #[display(fmt = "none")]
    #[serde(rename = "none")]
    None,
    #[display(fmt = "use_shared_pchs")]
    #[serde(rename = "use_shared_pchs")]
    UseSharedPch,
    #[display(fmt = "use_explicit_or_shared_pchs")]
    #[serde(rename = "use_explicit_or_shared_pchs")]
    UseExplicitOrSharedPch,
}

impl PchUsage {
    /// Whether the module may pick up a shared precompiled header.
    pub fn uses_shared_pch(self) -> bool {
        !matches!(self, PchUsage::None)
    }
}
