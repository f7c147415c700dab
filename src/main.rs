//! mdsite CLI - build a static site, or convert a single Markdown file.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdsite::config::{CONFIG_FILENAME, Config, Overrides};

#[derive(Parser)]
#[command(name = "mdsite", version, about = "Markdown to HTML static site generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and generate every page.
    Build(BuildArgs),
    /// Render one Markdown file (or stdin) to HTML on stdout.
    Render {
        /// Input file; `-` or absent reads stdin.
        input: Option<PathBuf>,
    },
    /// Print the title (first `# ` heading) of a Markdown file.
    Title {
        /// Input file; `-` or absent reads stdin.
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Project root; relative config paths resolve against it.
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to `mdsite.toml` in the root).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Static asset directory.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Markdown content directory.
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// HTML template.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Log progress at info level.
    #[arg(short, long)]
    verbose: bool,
}

impl BuildArgs {
    fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = self
            .config
            .unwrap_or_else(|| self.root.join(CONFIG_FILENAME));
        let config = Config::load(&config_path)?
            .apply(Overrides {
                static_dir: self.static_dir,
                content_dir: self.content_dir,
                public_dir: self.public_dir,
                template: self.template,
            })
            .resolve(&self.root);

        let report = mdsite::site::build(&config)?;
        writeln!(
            io::stderr(),
            "Built {} pages, copied {} assets into {}",
            report.pages.len(),
            report.assets_copied,
            config.public_dir.display()
        )?;
        Ok(())
    }
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Build(args) => args.execute(),
        Commands::Render { input } => {
            let markdown = read_input(input.as_deref())?;
            let html = mdsite::to_html(&markdown)?;
            io::stdout().write_all(html.as_bytes())?;
            Ok(())
        }
        Commands::Title { input } => {
            let markdown = read_input(input.as_deref())?;
            writeln!(io::stdout(), "{}", mdsite::extract_title(&markdown)?)?;
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        let _ = writeln!(io::stderr(), "Error: {err}");
        std::process::exit(1);
    }
}
