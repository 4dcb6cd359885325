/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use crate::name::define_name;

define_name!(
    /// Name of a build target such as `SS13Remake` or `SS13RemakeEditor`.
    TargetName,
    "Target"
);
