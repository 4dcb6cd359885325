/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use modplan_core::logging::init_tracing;
use modplan_core::module::name::ModuleName;
use modplan_manifest::load_registry;

mod commands;

/// Resolves build targets of a module-based game project into
/// dependency-ordered build plans.
#[derive(Debug, Parser)]
#[command(name = "modplan")]
struct Args {
    /// TOML manifest with module and target descriptors. May be repeated;
    /// names must be unique across all manifests.
    #[arg(
        long = "manifest",
        short = 'm',
        value_name = "PATH",
        required = true,
        env = "MODPLAN_MANIFEST",
        value_delimiter = ','
    )]
    manifests: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the build plan of a target.
    Resolve {
        target: String,
        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Resolve every target and report the ones that fail.
    Check,
    /// Print the given modules and everything they depend on, dependencies first.
    Deps {
        #[arg(required = true)]
        modules: Vec<ModuleName>,
    },
    /// List registered modules with their direct dependencies.
    Modules,
    /// List registered targets with their member modules.
    Targets,
}

fn run(args: Args) -> anyhow::Result<bool> {
    let registry = load_registry(&args.manifests)?;
    tracing::info!(
        "Loaded {} modules and {} targets",
        registry.modules().len(),
        registry.targets().len()
    );

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Resolve { target, json } => {
            commands::resolve(&registry, &target, json, &mut out)?;
            Ok(true)
        }
        Command::Check => commands::check(&registry, &mut out),
        Command::Deps { modules } => {
            commands::deps(&registry, modules, &mut out)?;
            Ok(true)
        }
        Command::Modules => {
            commands::modules(&registry, &mut out)?;
            Ok(true)
        }
        Command::Targets => {
            commands::targets(&registry, &mut out)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_tracing() {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
