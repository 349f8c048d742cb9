// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Offline GDFA builder.
//!
//! `zids-gdfa build` reads an ODFA description (JSON), garbles it and
//! publishes either the `header.json` + `rows.bin` pair or the
//! single-file container.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;
use zids_gdfa::{GdfaError, KeySource, PadSeedMode, build_gdfa, container};
use zids_odfa::{Odfa, SecurityParams, SparsityParams};
use zids_rand::SystemEntropySource;

#[derive(Parser)]
#[command(name = "zids-gdfa", version, about = "ZIDS garbled-DFA tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Garble an ODFA into a publishable GDFA.
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// ODFA description (JSON).
    #[arg(long, value_name = "PATH")]
    odfa: PathBuf,

    /// Output directory.
    #[arg(long, value_name = "DIR", default_value = "gdfa-out")]
    outdir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Jsonbin)]
    format: OutputFormat,

    /// Pad-seed length in bits.
    #[arg(long = "k", default_value_t = 128)]
    k_bits: usize,

    /// Group-key length in bits.
    #[arg(long = "kprime", default_value_t = 128)]
    kprime_bits: usize,

    /// Statistical security parameter.
    #[arg(long, default_value_t = 128)]
    kappa: usize,

    /// Alphabet size.
    #[arg(long, default_value_t = 256)]
    alphabet: usize,

    /// Maximum out-degree per row.
    #[arg(long)]
    outmax: usize,

    /// Maximum column membership per symbol.
    #[arg(long)]
    cmax: usize,

    /// Attack-id field width in bits.
    #[arg(long = "aid-bits", default_value_t = 16)]
    aid_bits: usize,

    /// Derive group keys from this master key (hex) instead of fresh
    /// randomness; builds become reproducible.
    #[arg(long = "master-key-hex", value_name = "HEX")]
    master_key_hex: Option<String>,

    /// Gzip-frame header.json.
    #[arg(long = "gzip-header")]
    gzip_header: bool,

    /// Container output path (container format only; default
    /// <outdir>/gdfa.zids).
    #[arg(long = "container-path", value_name = "PATH")]
    container_path: Option<PathBuf>,

    /// Which server secrets to write next to the output.
    #[arg(long = "save-secrets", value_enum, default_value_t = SaveSecrets::None)]
    save_secrets: SaveSecrets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// header.json + rows.bin.
    Jsonbin,
    /// Single-file container.
    Container,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SaveSecrets {
    /// Keep everything in memory only.
    None,
    /// Write the inverse permutation.
    Invperm,
    /// Write group keys and pad seeds too (test/debug only).
    Full,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("--master-key-hex is not valid hex")]
    BadMasterKey,

    #[error(transparent)]
    Gdfa(#[from] GdfaError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Build(args) => build(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build(args: BuildArgs) -> Result<(), CliError> {
    let odfa_bytes = fs::read(&args.odfa).map_err(|source| CliError::ReadInput {
        path: args.odfa.clone(),
        source,
    })?;
    let odfa: Odfa = serde_json::from_slice(&odfa_bytes)?;

    let sec = SecurityParams {
        k_bits: args.k_bits,
        kprime_bits: args.kprime_bits,
        kappa: args.kappa,
        alphabet_size: args.alphabet,
    };
    let sp = SparsityParams {
        outmax: args.outmax,
        cmax: args.cmax,
    };

    let master = args
        .master_key_hex
        .as_deref()
        .map(|h| hex::decode(h).map(Zeroizing::new))
        .transpose()
        .map_err(|_| CliError::BadMasterKey)?;
    let mode = match &master {
        Some(key) => PadSeedMode::BoundToGroupKeys(KeySource::Master(key)),
        None => PadSeedMode::BoundToGroupKeys(KeySource::Fresh),
    };

    let entropy = SystemEntropySource;
    let bundle = build_gdfa(&odfa, &sec, &sp, args.aid_bits, mode, &entropy)?;
    info!(
        num_states = bundle.header.num_states,
        row_bytes = bundle.header.row_bytes,
        "garbled ODFA"
    );

    fs::create_dir_all(&args.outdir)?;
    match args.format {
        OutputFormat::Jsonbin => {
            let (header_path, rows_path) = container::write_two_file(
                &args.outdir,
                &bundle.header,
                &bundle.rows,
                args.gzip_header,
            )?;
            info!(header = %header_path.display(), rows = %rows_path.display(), "wrote GDFA");
        }
        OutputFormat::Container => {
            let path = args
                .container_path
                .unwrap_or_else(|| args.outdir.join("gdfa.zids"));
            container::write_container(&path, &bundle.header, &bundle.rows)?;
            info!(container = %path.display(), "wrote GDFA");
        }
    }

    match args.save_secrets {
        SaveSecrets::None => {}
        SaveSecrets::Invperm => {
            let path = args.outdir.join("inv_perm.json");
            fs::write(
                &path,
                serde_json::to_vec(&bundle.secrets.inverse_permutation())?,
            )?;
            info!(path = %path.display(), "saved inverse permutation");
        }
        SaveSecrets::Full => {
            warn!("writing full server secrets to disk; never ship this output");
            let path = args.outdir.join("secrets.json");
            fs::write(&path, serde_json::to_vec(&bundle.secrets.export())?)?;
            info!(path = %path.display(), "saved full secrets");
        }
    }
    Ok(())
}
