/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use anyhow::Context;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "MODPLAN_LOG";

fn env_filter() -> anyhow::Result<EnvFilter> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(v) => EnvFilter::try_new(&v)
            .with_context(|| format!("Failed to parse ${} as a filter", LOG_ENV_VAR)),
        // By default, show warnings/errors.
        Err(std::env::VarError::NotPresent) => Ok(EnvFilter::new("warn")),
        Err(e) => Err(e).with_context(|| format!("Failed to read ${}", LOG_ENV_VAR)),
    }
}

pub fn init_tracing_for_writer<W>(writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_filter(env_filter()?);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Tracing subscriber was already initialized")?;

    tracing::debug!("Log filter was set from ${}", LOG_ENV_VAR);
    Ok(())
}

/// Log to stderr so stdout stays reserved for plans.
pub fn init_tracing() -> anyhow::Result<()> {
    init_tracing_for_writer(std::io::stderr)
}
