//! # jsonfreeze CLI
//!
//! Reads a JSON sample, writes the generated `<name>.dart` model file and
//! optionally renames classes or lists them.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use jsonfreeze_codegen::{FieldMode, GeneratedDocument, Generator, GeneratorOptions};
use jsonfreeze_schema::{SchemaIr, parse_json};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Field modifier selection on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum ModeArg {
    /// `final <Type>? name;`
    Final,
    /// `required <Type>? name;`
    Required,
    /// `<Type>? name;`
    Optional,
}

impl From<ModeArg> for FieldMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Final => Self::Final,
            ModeArg::Required => Self::Required,
            ModeArg::Optional => Self::Optional,
        }
    }
}

/// A `--rename OLD=NEW` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rename {
    /// Current class name.
    pub old: String,
    /// Replacement class name.
    pub new: String,
}

fn parse_rename(s: &str) -> Result<Rename, String> {
    match s.split_once('=') {
        Some((old, new)) if !old.is_empty() && !new.is_empty() => Ok(Rename {
            old: old.to_string(),
            new: new.to_string(),
        }),
        _ => Err(format!("expected OLD=NEW, got '{s}'")),
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "jsonfreeze",
    version,
    about = "Generate Dart freezed models from a JSON sample"
)]
pub struct Cli {
    #[arg(
        value_name = "INPUT",
        help = "JSON sample file. Reads standard input when omitted"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "name",
        default_value = "",
        help = "File base name in snake_case, also used for the root class"
    )]
    pub name: String,

    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = ModeArg::Final,
        help = "Modifier placed before every field"
    )]
    pub mode: ModeArg,

    #[arg(
        short = 'o',
        long = "out-dir",
        default_value = ".",
        help = "Directory the model file is written to"
    )]
    pub out_dir: PathBuf,

    #[arg(long, help = "Print the model to standard output instead of writing a file")]
    pub stdout: bool,

    #[arg(
        long = "rename",
        value_name = "OLD=NEW",
        value_parser = parse_rename,
        help = "Rename a generated class. May be repeated; applied in order"
    )]
    pub renames: Vec<Rename>,

    #[arg(long, help = "Print the generated class names, one per line")]
    pub list_classes: bool,

    #[arg(long, help = "Print the decomposed class schemas as JSON and exit")]
    pub dump_schema: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Cli {
    /// Builds generator options from the arguments.
    #[must_use]
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions::builder()
            .file_base_name(self.name.as_str())
            .field_mode(self.mode.into())
            .build()
    }

    /// Returns the log filter implied by `--verbose`.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Runs the command.
///
/// `stdin` is read only when no input file is given. Everything meant for the
/// user (model text, class names, schema dump, written path) goes to `out`.
///
/// # Errors
/// Returns an error if the input is missing or malformed, a rename fails, or
/// the model file cannot be written.
pub fn run(cli: &Cli, mut stdin: impl Read, mut out: impl Write) -> Result<()> {
    let json = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            buf
        }
    };

    let options = cli.options();
    let value = parse_json(&json)?;
    let ir = SchemaIr::from_json(&value, &options.root_class_name());

    if cli.dump_schema {
        serde_json::to_writer_pretty(&mut out, &ir).context("failed to write schema")?;
        writeln!(out)?;
        return Ok(());
    }

    let mut doc = Generator::new(&ir, &options).generate();
    apply_renames(&mut doc, &cli.renames)?;

    if cli.stdout {
        out.write_all(doc.text().as_bytes())?;
    } else {
        if !cli.out_dir.is_dir() {
            bail!("output directory {} does not exist", cli.out_dir.display());
        }
        let path = cli.out_dir.join(options.file_name());
        std::fs::write(&path, doc.text())
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "model written");
        writeln!(out, "wrote {}", path.display())?;
    }

    if cli.list_classes {
        for name in doc.class_names() {
            writeln!(out, "{name}")?;
        }
    }

    Ok(())
}

fn apply_renames(doc: &mut GeneratedDocument, renames: &[Rename]) -> Result<()> {
    for rename in renames {
        doc.rename_class(&rename.old, &rename.new)
            .with_context(|| format!("cannot rename '{}' to '{}'", rename.old, rename.new))?;
    }
    Ok(())
}
