//! Example driver: build sample structures → write → print JSON text
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use json_reflect::populate::{
    populate_array, populate_bool, populate_dict, populate_double, populate_long, populate_null,
    populate_string, populate_struct,
};
use json_reflect::samples::{Catalog, FlatRecord, Inner, Outer};
use json_reflect::{AbsentFields, Format, Structure, Writer};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// serialize sample structures into JSON, by hand or through descriptor tables
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// print per-step diagnostics to stderr
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// hand-written population of scalars, a list, a dict and a fixed record
    Basic(BasicOut),
    /// generic writer over nested structures
    Advanced(AdvancedOut),
    /// generic writer over sequence and mapping fields
    Catalog(CatalogOut),
    /// encode many independent structures in parallel
    Batch(BatchOut),
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// pretty-print (indentation only, same content)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AbsentArg {
    /// leave absent fields out
    Omit,
    /// write absent fields as null
    Null,
}

#[derive(clap::Parser, Debug)]
struct BasicOut {
    #[command(flatten)]
    output: OutputSettings,
}

#[derive(clap::Parser, Debug)]
struct AdvancedOut {
    #[command(flatten)]
    output: OutputSettings,

    /// how absent structure fields are written
    #[arg(long, value_enum, default_value_t = AbsentArg::Omit)]
    absent: AbsentArg,

    /// fail when a field declared required is absent
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(clap::Parser, Debug)]
struct CatalogOut {
    #[command(flatten)]
    output: OutputSettings,

    /// how absent structure fields are written
    #[arg(long, value_enum, default_value_t = AbsentArg::Omit)]
    absent: AbsentArg,
}

#[derive(clap::Parser, Debug)]
struct BatchOut {
    #[command(flatten)]
    output: OutputSettings,

    /// number of structures to encode
    #[arg(long, default_value_t = 8)]
    count: usize,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl From<AbsentArg> for AbsentFields {
    fn from(arg: AbsentArg) -> Self {
        match arg {
            AbsentArg::Omit => AbsentFields::Omit,
            AbsentArg::Null => AbsentFields::Null,
        }
    }
}

impl OutputSettings {
    fn format(&self) -> Format {
        Format::from_pretty(self.pretty)
    }

    fn emit(&self, text: &str) -> anyhow::Result<()> {
        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|source| json_reflect::Error::Io { path: parent.to_path_buf(), source })?;
                }
                std::fs::write(out, text)
                    .map_err(|source| json_reflect::Error::Io { path: out.clone(), source })?;
            }
            None => println!("{text}"),
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Basic(target) => {
                // debug path
                if target.output.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let format = target.output.format();
                let mut record = FlatRecord::default();
                let full = populate_struct(&record);
                record.clear_string();
                let cleared = populate_struct(&record);

                let trees = [
                    populate_null(),
                    populate_string("Hello World"),
                    populate_bool(true),
                    populate_bool(false),
                    populate_double(12.345),
                    populate_long(12345),
                    populate_array(["l1", "l2", "l3"]),
                    populate_dict([("k1", "v1"), ("k2", "v2"), ("k3", "v3")]),
                    full,
                    cleared,
                ];
                let lines = trees
                    .iter()
                    .map(|tree| json_reflect::encode(tree, format))
                    .collect::<Result<Vec<_>, _>>()
                    .context("failed to encode basic example")?;
                self.note(format!("populated {} standalone documents", lines.len()));
                target.output.emit(&lines.join("\n"))
            }
            Command::Advanced(target) => {
                // debug path
                if target.output.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let outer = Outer::sample();
                self.note(format!(
                    "{} has {} descriptors, {} has {}",
                    Outer::NAME,
                    Outer::FIELDS.len(),
                    Inner::NAME,
                    Inner::FIELDS.len()
                ));
                let missing = json_reflect::missing_required(&outer);
                if !missing.is_empty() {
                    eprintln!(
                        "{} {} is missing required fields: {}",
                        "warning:".yellow().bold(),
                        Outer::NAME,
                        missing.join(", ")
                    );
                }
                if target.strict {
                    json_reflect::check_required(&outer)?;
                }
                let writer = Writer::new()
                    .absent(target.absent.into())
                    .format(target.output.format());
                let text = writer.text(&outer).context("failed to encode advanced example")?;
                self.note(format!("encoded {} bytes", text.len()));
                target.output.emit(&text)
            }
            Command::Catalog(target) => {
                // debug path
                if target.output.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let catalog = Catalog::sample();
                self.note(format!("{} has {} descriptors", Catalog::NAME, Catalog::FIELDS.len()));
                let writer = Writer::new()
                    .absent(target.absent.into())
                    .format(target.output.format());
                let text = writer.text(&catalog).context("failed to encode catalog example")?;
                self.note(format!("encoded {} bytes", text.len()));
                target.output.emit(&text)
            }
            Command::Batch(target) => {
                // debug path
                if target.output.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let items = batch_samples(target.count);
                let writer = Writer::new().format(target.output.format());
                let texts = json_reflect::encode_batch(&items, &writer)
                    .context("failed to encode batch")?;
                let bytes: usize = texts.iter().map(String::len).sum();
                self.note(format!("encoded {} documents, {bytes} bytes", texts.len()));
                target.output.emit(&texts.join("\n"))
            }
        }
    }

    fn note(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{} {}", "•".cyan(), message.as_ref().dimmed());
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Outer structures with a varying mix of present fields.
fn batch_samples(count: usize) -> Vec<Outer> {
    (0..count).map(batch_sample).collect()
}

fn batch_sample(i: usize) -> Outer {
    let n = i64::try_from(i).unwrap_or(i64::MAX);
    let inner = (i % 2 == 0).then(|| {
        Box::new(Inner {
            long_member: Some(n.saturating_mul(100)),
            string_member: Some(format!("inner-{i}")),
            ..Inner::default()
        })
    });
    Outer {
        long_member: Some(n),
        string_member: Some(format!("outer-{i}")),
        bool_member: (i % 3 == 0).then_some(true),
        double_member: (i % 4 != 0).then_some(n as f64 / 4.0),
        inner_member: inner,
    }
}
