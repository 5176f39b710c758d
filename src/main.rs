use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rdfalign::alignment::writer::{write_mapping, AlignmentXmlWriter, MappingWriter, TsvWriter};
use rdfalign::error::AlignError;
use rdfalign::matching::{LexicalMatcher, MatcherConfig, ResourceKind};
use rdfalign::model::{read_ntriples_file, Graph, Resource};
use rdfalign::Mapping;

/// Align two RDF knowledge graphs via lexical Formal Concept Analysis.
#[derive(Parser)]
#[command(name = "rdfalign", version, about)]
struct Cli {
    /// Path to the source graph (N-Triples).
    source: PathBuf,

    /// Path to the target graph (N-Triples).
    target: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: tsv, xml, json.
    #[arg(short, long, value_name = "FORMAT", default_value = "tsv")]
    format: String,

    /// Resource kinds to match: class, property, instance, all.
    #[arg(short, long, value_name = "KIND", default_value = "all")]
    kind: String,

    /// Lowercase harvested labels before indexing.
    #[arg(long)]
    fold_case: bool,

    /// Extract clusters from the full concept lattice as well.
    #[arg(long)]
    lattice: bool,

    /// Skip the Galois sub-hierarchy extraction.
    #[arg(long)]
    no_gsh: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

/// Sorted resource handles of one kind from one graph.
fn resources_of_kind(graph: &Graph, kind: ResourceKind) -> Vec<Resource<'_>> {
    let uris = match kind {
        ResourceKind::Class => graph.classes(),
        ResourceKind::Property => graph.properties(),
        ResourceKind::Instance => graph.instances(),
    };
    let mut uris: Vec<String> = uris.into_iter().collect();
    uris.sort();
    uris.iter().map(|uri| graph.resource(uri)).collect()
}

fn run(cli: Cli) -> Result<(), AlignError> {
    let source = read_ntriples_file(&cli.source)?;
    let target = read_ntriples_file(&cli.target)?;
    source.log_summary("source");
    target.log_summary("target");

    let kinds: Vec<ResourceKind> = match cli.kind.as_str() {
        "class" => vec![ResourceKind::Class],
        "property" => vec![ResourceKind::Property],
        "instance" => vec![ResourceKind::Instance],
        "all" => vec![
            ResourceKind::Class,
            ResourceKind::Property,
            ResourceKind::Instance,
        ],
        other => return Err(AlignError::UnknownKind(other.to_string())),
    };

    let matcher = LexicalMatcher::with_config(MatcherConfig {
        lowercase: cli.fold_case,
        extract_gsh: !cli.no_gsh,
        extract_lattice: cli.lattice,
    });

    let mut mapping = Mapping::new();
    for kind in kinds {
        let sources = resources_of_kind(&source, kind);
        let targets = resources_of_kind(&target, kind);
        matcher.match_resources(kind, &sources, &targets, &mut mapping)?;
    }

    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let format = cli.format.to_lowercase();
    let cell_count = match format.as_str() {
        "tsv" => {
            let mut writer = TsvWriter::new(output_writer);
            write_mapping(&mut writer, &mapping)?;
            writer.cell_count()
        }
        "xml" => {
            let mut writer = AlignmentXmlWriter::new(output_writer);
            write_mapping(&mut writer, &mapping)?;
            writer.cell_count()
        }
        "json" => {
            let mut output_writer = output_writer;
            serde_json::to_writer_pretty(&mut output_writer, &mapping.sorted_cells())?;
            writeln!(output_writer)?;
            output_writer.flush()?;
            mapping.len() as u64
        }
        _ => return Err(AlignError::UnknownFormat(format)),
    };

    if !cli.quiet {
        eprintln!(
            "Found {cell_count} mappings between {} and {}",
            cli.source.display(),
            cli.target.display()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "rdfalign=error"
    } else if cli.verbose {
        "rdfalign=debug"
    } else {
        "rdfalign=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
