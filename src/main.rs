use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use stork_gen::{config, generate, output, scan, title};

fn version_string() -> &'static str {
    let build_id = env!("STORK_GEN_BUILD_ID");
    if build_id.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{} ({build_id})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "stork-gen")]
#[command(about = "Generate a Stork search config from rendered blog HTML")]
#[command(long_about = "\
Generate a Stork search config from rendered blog HTML

Run after the site generator. Every top-level .html file in the output
directory becomes one [[input.files]] entry, titled from its <title> tag
or, failing that, its file name.

  output/
  ├── index.html        # Home page (url = \"\")
  ├── about.html        # Indexed (url = \"about.html\")
  ├── 404.html          # Skipped
  ├── archives.html     # Skipped
  ├── authors.html      # Skipped
  ├── categories.html   # Skipped
  └── tags.html         # Skipped

Settings are read from ./stork-gen.toml when present.
Run 'stork-gen gen-config' to print a documented config.")]
#[command(version = version_string())]
struct Cli {
    /// Rendered site directory [default: output]
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Generated Stork config path [default: stork.toml]
    #[arg(long, global = true)]
    destination: Option<PathBuf>,

    /// Config file (defaults to ./stork-gen.toml if it exists)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the output directory and write the Stork config (default)
    Generate,
    /// List the pages that would be indexed, without writing anything
    Scan {
        /// Print the page records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the title resolved for a single HTML file
    Title {
        /// HTML file to read
        file: PathBuf,
    },
    /// Print a stock stork-gen.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Generate) {
        Command::Generate => {
            let index_config = load_index_config(&cli)?;
            let summary = generate::generate(&index_config)?;
            output::print_generate_output(&summary);
        }
        Command::Scan { json } => {
            let index_config = load_index_config(&cli)?;
            let pages = scan::scan(&index_config.source, scan::RESERVED_PAGES)?;
            let records = generate::build_records(&pages, scan::HOME_PAGE);
            if *json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                output::print_scan_output(&records, &index_config.source);
            }
        }
        Command::Title { file } => {
            // `..` and `/` have no stem
            let fallback = file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            println!("{}", title::title_from_file(file, &fallback));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file layer, then apply command-line overrides.
fn load_index_config(cli: &Cli) -> Result<config::IndexConfig, config::ConfigError> {
    let mut index_config = config::load_config(Path::new("."), cli.config.as_deref())?;
    if let Some(source) = &cli.source {
        index_config.source = source.clone();
    }
    if let Some(destination) = &cli.destination {
        index_config.destination = destination.clone();
    }
    index_config.validate()?;
    Ok(index_config)
}
