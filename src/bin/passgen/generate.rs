use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Context;
use log::info;

use crate::ProgError;
use passgen::{Generator, Options, Symbols};

#[derive(clap::Args)]
pub(crate) struct GenerateArgs {
    /// Length of each password [default: 10].
    #[arg(short, long)]
    length: Option<usize>,
    /// Include digits.
    #[arg(short, long)]
    numbers: bool,
    /// Include symbols. Optionally, give the exact symbols to use.
    #[arg(short, long, value_name = "CUSTOM", num_args = 0..=1)]
    symbols: Option<Option<String>>,
    /// Characters to leave out.
    #[arg(short = 'x', long)]
    exclude: Option<String>,
    /// Leave out uppercase letters.
    #[arg(long)]
    no_uppercase: bool,
    /// Leave out lowercase letters.
    #[arg(long)]
    no_lowercase: bool,
    /// Leave out characters that are easily confused, like `l` and `I`.
    #[arg(long)]
    exclude_similar: bool,
    /// Require at least one character from every enabled class.
    #[arg(long)]
    strict: bool,
    /// How many passwords to generate.
    #[arg(short, long, default_value_t = 1)]
    count: usize,
    /// Start from the named preset; other flags override it.
    #[arg(long, conflicts_with = "pick")]
    preset: Option<String>,
    /// Choose the preset to start from interactively.
    #[arg(long)]
    pick: bool,
    /// Presets file to read, instead of ~/.passgen/presets.yaml.
    #[arg(long)]
    presets: Option<PathBuf>,
    /// Copy the passwords to the clipboard instead of printing them.
    #[arg(long)]
    copy: bool,
}

impl GenerateArgs {
    /// Override `options` with whatever was given on the command line.
    fn apply_to(&self, options: &mut Options) {
        if let Some(length) = self.length {
            options.length = length;
        }
        if self.numbers {
            options.numbers = true;
        }
        match &self.symbols {
            Some(Some(custom)) => options.symbols = Symbols::Custom(custom.clone()),
            Some(None) => options.symbols = Symbols::Default,
            None => (),
        }
        if let Some(exclude) = &self.exclude {
            options.exclude = exclude.clone();
        }
        if self.no_uppercase {
            options.uppercase = false;
        }
        if self.no_lowercase {
            options.lowercase = false;
        }
        if self.exclude_similar {
            options.exclude_similar_characters = true;
        }
        if self.strict {
            options.strict = true;
        }
    }

    fn base_options(&self) -> Result<Options, ProgError> {
        if !self.pick && self.preset.is_none() {
            return Ok(Options::default());
        }
        let mut presets = crate::presets::load_presets(self.presets.clone())?;
        let name = match &self.preset {
            Some(name) => name.clone(),
            None => crate::select::select_preset(&presets)?.to_owned(),
        };
        info!("using preset {name:?}");
        presets
            .remove(&name)
            .ok_or(ProgError::UnknownPreset(name))
    }
}

pub(crate) fn generate(args: GenerateArgs) -> Result<(), ProgError> {
    let mut options = args.base_options()?;
    args.apply_to(&mut options);

    let passwords = Generator::default().generate_multiple(args.count, &options)?;

    if args.copy {
        let joined = passwords
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        send_to_clipboard(joined.as_bytes())?;
        eprintln!("Copied {} password(s) to the clipboard.", passwords.len());
    } else {
        let mut stdout = io::stdout().lock();
        for password in &passwords {
            writeln!(stdout, "{}", password.as_str()).context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut child = clipboard_cmd()
        .stdin(Stdio::piped())
        .spawn()
        .context("failed to start the clipboard command")?;
    child
        .stdin
        .as_mut()
        .context("the clipboard command has no stdin")?
        .write_all(data)?;
    let status = child.wait()?;
    if !status.success() {
        anyhow::bail!("the clipboard command exited with {}", status);
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::Args;

    fn parse(argv: &[&str]) -> GenerateArgs {
        let argv = std::iter::once("passgen").chain(argv.iter().copied());
        match Args::try_parse_from(argv).unwrap() {
            Args::Generate(args) => args,
            _ => panic!("expected the generate subcommand"),
        }
    }

    #[test]
    fn no_flags_keeps_options() {
        let args = parse(&["generate"]);
        let mut options = Options::default();
        args.apply_to(&mut options);
        assert_eq!(options, Options::default());
        assert_eq!(args.count, 1);
    }

    #[test]
    fn flags_override_options() {
        let args = parse(&[
            "gen",
            "-l",
            "16",
            "-n",
            "--no-lowercase",
            "--exclude-similar",
            "--strict",
            "-x",
            "abc",
            "-c",
            "3",
        ]);
        let mut options = Options::default();
        args.apply_to(&mut options);
        assert_eq!(
            options,
            Options {
                length: 16,
                numbers: true,
                lowercase: false,
                exclude_similar_characters: true,
                strict: true,
                exclude: "abc".to_owned(),
                ..Options::default()
            }
        );
        assert_eq!(args.count, 3);
    }

    #[test]
    fn symbols_flag_with_and_without_value() {
        let mut options = Options::default();
        parse(&["generate", "--symbols"]).apply_to(&mut options);
        assert_eq!(options.symbols, Symbols::Default);

        let mut options = Options::default();
        parse(&["generate", "--symbols", "!?"]).apply_to(&mut options);
        assert_eq!(options.symbols, Symbols::Custom("!?".to_owned()));
    }

    #[test]
    fn preset_values_survive_absent_flags() {
        let mut options = Options {
            length: 24,
            symbols: Symbols::Custom("#".to_owned()),
            uppercase: false,
            ..Options::default()
        };
        let expected = Options {
            numbers: true,
            ..options.clone()
        };
        parse(&["generate", "-n"]).apply_to(&mut options);
        assert_eq!(options, expected);
    }

    #[test]
    fn preset_and_pick_conflict() {
        let argv = ["passgen", "generate", "--preset", "web", "--pick"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
