use clap::{Parser, Subcommand};
use mapsnip::embed::{list_providers, Coordinate, EmbedConfig, TemplateSelector};
use std::path::PathBuf;

/// mapsnip — embeddable map snippets
///
/// Prints an HTML fragment (container, provider scripts, and a marker) for a
/// coordinate, ready to paste into a page.
///
/// Examples:
///   mapsnip render --lat 35.6892 --lon 51.3890
///   mapsnip render --lat 35.6892 --lon 51.3890 --provider neshan
///   mapsnip render --lat 40.7128 --lon -74.0060 --provider mapbox --container store-map
///   mapsnip render --lat 59.3293 --lon 18.0686 --provider osm --width 640px --height 50vh
///   mapsnip providers --json
#[derive(Parser)]
#[command(name = "mapsnip", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the snippet for a coordinate.
    Render {
        /// Latitude (-90 to 90 by convention; not checked).
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude (-180 to 180 by convention; not checked).
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Provider key (case-insensitive). Defaults to the configured provider.
        #[arg(long, short = 'p', default_value = "")]
        provider: String,

        /// Container element id override.
        #[arg(long)]
        container: Option<String>,

        /// Container CSS width override (e.g. 640px).
        #[arg(long)]
        width: Option<String>,

        /// Container CSS height override (e.g. 50vh).
        #[arg(long)]
        height: Option<String>,

        /// Config file. Defaults to ~/.mapsnip/config.json.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fail on unknown providers instead of printing the fallback.
        #[arg(long)]
        strict: bool,
    },

    /// List supported providers.
    Providers {
        /// Print a JSON array of {key, name} entries.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render { lat, lon, provider, container, width, height, config, strict } => {
            let mut cfg = match config {
                Some(path) => EmbedConfig::load_from(&path),
                None => EmbedConfig::load(),
            };
            if let Some(id) = container {
                cfg.container_id = id;
            }
            if let Some(w) = width {
                cfg.width = w;
            }
            if let Some(h) = height {
                cfg.height = h;
            }

            let selector = TemplateSelector::with_config(cfg);
            let coord = Coordinate::new(lat, lon);

            let fragment = if strict {
                selector.try_render(coord, &provider).unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                })
            } else {
                selector.render(coord, &provider)
            };

            if !fragment.is_supported() {
                eprintln!("  Warning: provider '{}' is not supported; printed fallback", provider);
            }
            println!("{}", fragment);
        }
        Command::Providers { json } => {
            let providers = list_providers();
            if json {
                match serde_json::to_string_pretty(&providers) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                for entry in &providers {
                    println!("{:<10} {}", entry.key.as_str(), entry.name);
                }
            }
        }
    }
}
