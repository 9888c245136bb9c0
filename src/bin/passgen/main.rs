use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

mod generate;
mod presets;
mod select;
mod table;

#[derive(Parser)]
enum Args {
    /// Generate one or more passwords.
    #[command(alias = "gen")]
    Generate(generate::GenerateArgs),
    /// List the presets in the presets file.
    Presets {
        /// Presets file to read, instead of ~/.passgen/presets.yaml.
        #[arg(long)]
        presets: Option<PathBuf>,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate(args) => generate::generate(args)?,
        Args::Presets { presets } => presets::list_presets(presets)?,
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            log::debug!("exiting with {err:?}");
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn default_presets_file() -> anyhow::Result<PathBuf> {
    let home = env::var_os("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot find home directory of user"))?;
    let default_path = {
        let mut p = PathBuf::from(home);
        p.push(".passgen");
        p.push("presets.yaml");
        p
    };
    Ok(default_path)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Preset selection cancelled; exiting.")]
    PresetSelectionCancelled,
    #[error("There are no presets to pick from.")]
    NoPresets,
    #[error("No preset named {0:?}.")]
    UnknownPreset(String),
    #[error("Failed to parse presets file {0}: {1}")]
    BadPresetsFile(PathBuf, #[source] serde_yaml::Error),
    #[error("{0}")]
    Generate(passgen::GenerateError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::GenerateError> for ProgError {
    fn from(err: passgen::GenerateError) -> ProgError {
        ProgError::Generate(err)
    }
}
