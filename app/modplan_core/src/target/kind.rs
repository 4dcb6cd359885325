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

/// Which binary a target produces.
#[derive(
    Clone, Copy, Dupe, Debug, Display, Hash, Eq, PartialEq, Allocative, Serialize,
    Deserialize
)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    #[display(fmt = "game")]
    Game,
    #[display(fmt = "editor")]
    Editor,
}
