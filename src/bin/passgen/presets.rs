//! Named option sets, read from a YAML file.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use crate::ProgError;
use passgen::{CharacterClass, Options, Symbols};

#[derive(Deserialize)]
struct PresetsFile {
    #[serde(default)]
    presets: BTreeMap<String, Options>,
}

/// Load the presets from `presets_path`, or from the default location if none is given.
///
/// The default file not existing is the same as it being empty; an explicitly given file must
/// exist.
pub(crate) fn load_presets(
    presets_path: Option<PathBuf>,
) -> Result<BTreeMap<String, Options>, ProgError> {
    let (path, explicit) = match presets_path {
        Some(p) => (p, true),
        None => (crate::default_presets_file()?, false),
    };
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
            debug!("no presets file at {}", path.display());
            return Ok(BTreeMap::new());
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("failed to open presets file {}", path.display()))
                .into())
        }
    };
    read_presets(file, &path)
}

fn read_presets(rdr: impl io::Read, path: &Path) -> Result<BTreeMap<String, Options>, ProgError> {
    let file: PresetsFile = serde_yaml::from_reader(rdr)
        .map_err(|err| ProgError::BadPresetsFile(path.to_owned(), err))?;
    debug!("loaded {} presets from {}", file.presets.len(), path.display());
    Ok(file.presets)
}

pub(crate) fn list_presets(presets_path: Option<PathBuf>) -> Result<(), ProgError> {
    let presets = load_presets(presets_path)?;

    struct PresetRow {
        name: String,
        length: String,
        classes: String,
        exclude: String,
        strict: &'static str,
    }

    impl crate::table::TableDisplay for PresetRow {
        fn columns() -> usize {
            5
        }

        fn column_name(column_index: usize) -> &'static str {
            match column_index {
                0 => "Preset",
                1 => "Length",
                2 => "Classes",
                3 => "Excluded",
                4 => "Strict",
                _ => panic!(),
            }
        }

        fn item(&self, column_index: usize) -> &str {
            match column_index {
                0 => &self.name,
                1 => &self.length,
                2 => &self.classes,
                3 => &self.exclude,
                4 => self.strict,
                _ => panic!(),
            }
        }
    }

    let rows = presets
        .iter()
        .map(|(name, options)| PresetRow {
            name: name.clone(),
            length: options.length.to_string(),
            classes: describe_classes(options),
            exclude: describe_exclusions(options),
            strict: if options.strict { "yes" } else { "no" },
        })
        .collect::<Vec<_>>();
    crate::table::display_table(&rows, io::stdout()).context("failed to output table")?;

    Ok(())
}

fn describe_classes(options: &Options) -> String {
    let mut classes = Vec::new();
    for class in CharacterClass::ALL {
        if !class.is_enabled(options) {
            continue;
        }
        match (class, &options.symbols) {
            (CharacterClass::Symbols, Symbols::Custom(custom)) => {
                classes.push(format!("symbols {custom:?}"))
            }
            _ => classes.push(class.to_string()),
        }
    }
    if classes.is_empty() {
        "(none)".to_owned()
    } else {
        classes.join(", ")
    }
}

fn describe_exclusions(options: &Options) -> String {
    match (options.exclude_similar_characters, options.exclude.is_empty()) {
        (false, true) => String::new(),
        (true, true) => "similar".to_owned(),
        (false, false) => format!("{:?}", options.exclude),
        (true, false) => format!("similar, {:?}", options.exclude),
    }
}
