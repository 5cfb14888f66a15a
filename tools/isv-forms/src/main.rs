use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use isv_protocol::{Flavor, Script, WordEntry};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod archive;
mod config;
mod render;

use config::Settings;
use render::Report;

#[derive(Parser)]
#[command(author, version, about = "Interslavic inflection tables and transliteration")]
struct Cli {
    /// JSON display settings (flavor, alphabets, case_order)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless ISV_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the paradigm of one word
    Show {
        lemma: String,
        /// Part-of-speech descriptor, e.g. "m.anim." or "v.tr. ipf."
        #[arg(short, long)]
        descriptor: String,
        /// Present-stem hint, e.g. "(piše)"
        #[arg(short, long)]
        addition: Option<String>,
        #[arg(short, long = "script")]
        scripts: Vec<Script>,
        #[arg(short, long)]
        flavor: Option<Flavor>,
        #[arg(long, value_delimiter = ',')]
        case_order: Option<Vec<String>>,
        #[arg(long)]
        json: bool,
    },
    /// Compile a JSON word list into a paradigm archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Validate an archive and optionally look up one lemma
    Inspect {
        archive: PathBuf,
        #[arg(short, long)]
        lemma: Option<String>,
    },
    /// Render etymological text in a script and flavor
    Translit {
        text: String,
        #[arg(short, long, default_value = "latin")]
        script: Script,
        #[arg(short, long)]
        flavor: Option<Flavor>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ISV_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Show { lemma, descriptor, addition, scripts, flavor, case_order, json } => {
            if let Some(flavor) = flavor {
                settings.flavor = flavor;
            }
            if !scripts.is_empty() {
                settings.alphabets = scripts;
            }
            if let Some(order) = case_order {
                settings.case_order = order;
            }

            let mut entry = WordEntry::new(lemma, descriptor);
            if let Some(addition) = addition {
                entry = entry.with_addition(addition);
            }
            let features = isv_descriptor::try_extract_features(&entry.pos_descriptor)
                .with_context(|| format!("descriptor {:?}", entry.pos_descriptor))?;
            let paradigm = isv_morph::try_inflect(&entry, &features)
                .with_context(|| format!("inflecting {:?}", entry.lemma))?;

            let report = Report {
                lemma: &entry.lemma,
                features: &features,
                flavor: settings.flavor,
                renderings: render::render_all(&paradigm, &settings.alphabets(), settings.flavor),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::report_text(&report, &settings.case_order()));
            }
        }
        Command::Compile { input, output } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let list: archive::WordList = serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", input.display()))?;

            let compiled = archive::compile(list.into_entries());
            let bytes = archive::to_bytes(&compiled)?;
            fs::write(&output, bytes.as_slice()).with_context(|| format!("writing {}", output.display()))?;

            info!(bytes = bytes.len(), path = %output.display(), "archive written");
            println!("{} entries written to {}", compiled.entries.len(), output.display());
        }
        Command::Inspect { archive: path, lemma } => {
            let raw = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            let bytes = archive::align(&raw);
            let view = archive::view(&bytes)?;
            let with_paradigm = view.entries.iter().filter(|e| e.paradigm.is_some()).count();
            println!("version {}: {} entries, {} with paradigms", view.version, view.entries.len(), with_paradigm);

            if let Some(lemma) = lemma {
                let Some(found) = archive::find(view, &lemma)? else {
                    bail!("{lemma:?} is not in {}", path.display());
                };
                let Some(paradigm) = &found.paradigm else {
                    println!("{lemma} [{}] has no paradigm", found.features.part_of_speech.name());
                    return Ok(());
                };
                let report = Report {
                    lemma: &found.entry.lemma,
                    features: &found.features,
                    flavor: settings.flavor,
                    renderings: render::render_all(paradigm, &settings.alphabets(), settings.flavor),
                };
                print!("{}", render::report_text(&report, &settings.case_order()));
            }
        }
        Command::Translit { text, script, flavor } => {
            let flavor = flavor.unwrap_or(settings.flavor);
            println!("{}", isv_translit::transliterate(&text, script, flavor));
        }
    }
    Ok(())
}
