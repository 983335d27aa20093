//! lexigraph-cli: CLI entry point for the Lexigraph syntax-graph builder.

use clap::{Parser, Subcommand};
use lexigraph_core::WalkConfig;
use lexigraph_walk::{languages, JsonLinesEmitter, ProjectWalker};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexigraph",
    about = "Flatten parsed syntax trees into a keyed, streaming JSON node graph"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk a project and emit one JSON node per line
    ParseProject {
        /// Trunk seed all keys for this run derive from
        trunk: String,

        /// Project root directory
        root: PathBuf,

        /// Changed files for an incremental run (all files when empty)
        files: Vec<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to <root>/lexigraph.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default lexigraph.toml into a project
    Init {
        /// Project directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// List registered grammars and the extensions they handle
    Grammars,
}

fn main() -> anyhow::Result<()> {
    // Tracing goes to stderr; stdout is reserved for the node stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexigraph_walk=info".parse().expect("valid tracing directive"))
                .add_directive("lexigraph_cli=info".parse().expect("valid tracing directive")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ParseProject {
            trunk,
            root,
            files,
            output,
            config,
        } => {
            cmd_parse_project(&trunk, &root, &files, output.as_deref(), config.as_deref())?;
        }
        Commands::Init { path } => {
            let project_dir = match path {
                Some(p) => p,
                None => std::env::current_dir()?,
            };
            cmd_init(&project_dir)?;
        }
        Commands::Grammars => {
            cmd_grammars();
        }
    }

    Ok(())
}

fn cmd_parse_project(
    trunk: &str,
    root: &std::path::Path,
    files: &[String],
    output: Option<&std::path::Path>,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => WalkConfig::load(path)?,
        None => WalkConfig::load_or_default(root),
    };

    let writer: Box<dyn std::io::Write> = match output {
        Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(std::io::stdout()),
    };
    let mut emitter = JsonLinesEmitter::new(writer);

    let walker = ProjectWalker::new(root, trunk, files, config, &mut emitter)?;
    walker.run()?;
    emitter.flush()?;

    Ok(())
}

fn cmd_init(project_dir: &std::path::Path) -> anyhow::Result<()> {
    let path = WalkConfig::default_path(project_dir);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    WalkConfig::default().save(&path)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn cmd_grammars() {
    for grammar in languages::all_grammars() {
        println!(
            "{} (namespace {}): .{}",
            grammar.name(),
            grammar.namespace(),
            grammar.extensions().join(", .")
        );
    }
}
