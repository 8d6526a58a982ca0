use anyhow::Context;
use chroma_core::{BlindnessType, PaletteSet, Rgb};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chroma_vision::api::{self, parse_color};
use chroma_vision::models::{self, AppConfig, ColorReport, ContrastSummary, SimulationReport};
use chroma_vision::rendering::SvgRenderer;
use chroma_vision::server;
use chroma_vision::services::{ExportFormat, PaletteExporter};

#[derive(Parser)]
#[command(name = "chroma-vision")]
#[command(about = "Chroma Vision - color codes, contrast checks and palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Show every code, contrast and blindness simulation for a color
    Inspect {
        /// Color as RRGGBB, #RRGGBB or r,g,b
        color: String,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate palettes for a base color
    Palette {
        /// Base color as RRGGBB, #RRGGBB or r,g,b
        color: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = PaletteFormat::Text)]
        format: PaletteFormat,

        /// Write to a file instead of stdout (required for png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check WCAG contrast of a foreground over a background
    Contrast {
        /// Foreground color
        fg: String,

        /// Background color (defaults to the configured background)
        bg: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate how a color appears with a color-vision deficiency
    Simulate {
        /// Color as RRGGBB, #RRGGBB or r,g,b
        color: String,

        /// protanopia, deuteranopia or tritanopia (all when omitted)
        #[arg(short = 't', long = "type")]
        kind: Option<BlindnessType>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PaletteFormat {
    /// Grouped, human-readable listing
    Text,
    /// Export document with metadata
    Json,
    /// Combined colors, one per line
    Txt,
    /// Swatch sheet image
    Png,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chroma Vision API",
        description = "Color codes, WCAG contrast, color-blindness simulation and palettes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_color,
        api::handle_contrast,
        api::handle_simulate,
        api::handle_palette,
        api::handle_palette_export,
        api::handle_create_session,
        api::handle_get_session,
        api::handle_hover,
        api::handle_select,
        api::handle_select_history,
        api::handle_clear_selection,
        api::handle_reset,
        api::handle_delete_session,
    ),
    components(schemas(
        api::RgbBody,
        models::ColorCodes,
        models::ColorReport,
        models::ContrastSummary,
        models::PaletteReport,
        models::SessionSnapshot,
        models::SimulationEntry,
        models::SimulationReport,
    )),
    tags(
        (name = "Color", description = "Color codes for a sampled color"),
        (name = "Accessibility", description = "Contrast checks and color-blindness simulation"),
        (name = "Palette", description = "Palette generation and export"),
        (name = "Session", description = "Picker state and selection history")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Inspect { color, json }) => {
            init_cli_logging();
            run_inspect_command(&color, json)
        }
        Some(Commands::Palette {
            color,
            format,
            output,
        }) => {
            init_cli_logging();
            run_palette_command(&color, format, output.as_deref())
        }
        Some(Commands::Contrast { fg, bg, json }) => {
            init_cli_logging();
            run_contrast_command(&fg, bg.as_deref(), json)
        }
        Some(Commands::Simulate { color, kind }) => {
            init_cli_logging();
            run_simulate_command(&color, kind)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_vision=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AppConfig::load(config_file.as_deref())
}

/// WCAG levels passed, e.g. `AA large, AAA large`
fn verdicts(summary: &ContrastSummary) -> String {
    let passed: Vec<&str> = [
        (summary.aa_normal, "AA"),
        (summary.aa_large, "AA large"),
        (summary.aaa_normal, "AAA"),
        (summary.aaa_large, "AAA large"),
    ]
    .into_iter()
    .filter_map(|(pass, level)| pass.then_some(level))
    .collect();

    if passed.is_empty() {
        "fails all levels".to_string()
    } else {
        passed.join(", ")
    }
}

/// Print codes, contrast and simulations for one color
fn run_inspect_command(color: &str, json: bool) -> anyhow::Result<()> {
    let rgb = parse_color(color)?;
    let config = load_config();
    let report = ColorReport::new(rgb, config.contrast_background());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let codes = &report.codes;
    println!("{}", codes.hex);
    println!("  RGB   {}", codes.rgb);
    println!("  HSL   {}", codes.hsl);
    println!("  HSV   {}", codes.hsv);
    println!("  CMYK  {}", codes.cmyk);

    println!("\nContrast:");
    let mut backgrounds = vec![config.contrast_background()];
    for extra in [Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)] {
        if !backgrounds.contains(&extra) {
            backgrounds.push(extra);
        }
    }
    for background in backgrounds {
        let summary = ContrastSummary::evaluate(rgb, background);
        println!(
            "  on {}  {:>8}  {}",
            summary.background,
            summary.label,
            verdicts(&summary)
        );
    }

    println!("\nColor blindness:");
    for entry in &report.simulations {
        println!("  {:<13} {}", entry.kind.as_str(), entry.hex);
    }

    Ok(())
}

/// Print or export the palettes for a base color
fn run_palette_command(
    color: &str,
    format: PaletteFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rgb = parse_color(color)?;
    let palettes = PaletteSet::from_rgb(rgb);

    let export_format = match format {
        PaletteFormat::Text => {
            let listing = palette_listing(&palettes);
            return match output {
                Some(path) => write_output(path, listing.as_bytes()),
                None => {
                    print!("{listing}");
                    Ok(())
                }
            };
        }
        PaletteFormat::Json => ExportFormat::Json,
        PaletteFormat::Txt => ExportFormat::Txt,
        PaletteFormat::Png => ExportFormat::Png,
    };

    let config = load_config();
    let font_dir = config.export.font_dir.as_deref().map(Path::new);
    let renderer = Arc::new(SvgRenderer::with_font_dir(font_dir));
    let exporter = PaletteExporter::new(config.export.clone(), renderer);
    let bytes = exporter
        .export(&palettes, export_format, chrono::Utc::now())
        .context("Failed to export palette")?;

    match output {
        Some(path) => write_output(path, &bytes),
        None if export_format == ExportFormat::Png => {
            anyhow::bail!("PNG output needs a file, use --output <PATH>")
        }
        None => {
            println!("{}", String::from_utf8_lossy(&bytes));
            Ok(())
        }
    }
}

fn palette_listing(palettes: &PaletteSet) -> String {
    let mut listing = String::new();
    for (kind, colors) in palettes.groups() {
        listing.push_str(&format!("{:<14} {}\n", kind.title(), colors.join(" ")));
    }
    let combined = palettes.combined();
    listing.push_str(&format!(
        "\nCombined ({}): {}\n",
        combined.len(),
        combined.join(" ")
    ));
    listing
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Print the contrast ratio and WCAG verdicts for a color pair
fn run_contrast_command(fg: &str, bg: Option<&str>, json: bool) -> anyhow::Result<()> {
    let foreground = parse_color(fg)?;
    let background = match bg {
        Some(bg) => parse_color(bg)?,
        None => load_config().contrast_background(),
    };
    let summary = ContrastSummary::evaluate(foreground, background);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} on {}: {}",
        summary.foreground, summary.background, summary.label
    );
    let mark = |pass: bool| if pass { "pass" } else { "fail" };
    println!("  AA normal text   {}", mark(summary.aa_normal));
    println!("  AA large text    {}", mark(summary.aa_large));
    println!("  AAA normal text  {}", mark(summary.aaa_normal));
    println!("  AAA large text   {}", mark(summary.aaa_large));

    Ok(())
}

/// Print simulated colors
fn run_simulate_command(color: &str, kind: Option<BlindnessType>) -> anyhow::Result<()> {
    let rgb = parse_color(color)?;
    let report = SimulationReport::new(rgb, kind);

    println!("{}", report.original);
    for entry in &report.simulations {
        println!("  {:<13} {}  {}", entry.kind.as_str(), entry.hex, entry.rgb);
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Chroma Vision v{VERSION}");
    println!("Color codes, contrast checks and palettes\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    // Commands section
    println!("\nCommands:");
    println!("  chroma-vision serve      Start the HTTP server");
    println!("  chroma-vision inspect    Show codes, contrast and simulations for a color");
    println!("  chroma-vision palette    Generate or export palettes");
    println!("  chroma-vision contrast   Check WCAG contrast of two colors");
    println!("  chroma-vision simulate   Simulate color-vision deficiencies");
    println!("\nRun 'chroma-vision --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_vision=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = load_config();

    // Create application state using shared server module
    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "Chroma Vision server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
