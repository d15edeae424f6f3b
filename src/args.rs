//
// Copyright (c) 2025 Nathan Fiedler
//

use std::path::PathBuf;

use clap::Parser;

/// Compute the change list that transforms one file into another using
/// content-defined chunking and chunk-set diffing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The file to diff from.
    #[arg(value_name = "OLD_FILE", value_hint = clap::ValueHint::FilePath)]
    pub old_file: PathBuf,

    /// The file to diff to.
    #[arg(value_name = "NEW_FILE", value_hint = clap::ValueHint::FilePath)]
    pub new_file: PathBuf,

    /// Raise logging verbosity (stacks: -v, -vv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
