//! brandmark CLI
//!
//! Renders a brand spec JSON file. Without `--out` the asset for
//! `--context` is printed to stdout; with `--out` the whole kit is written
//! to that directory. Set `RUST_LOG=debug` to see fallbacks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use brandmark_renderer::{
    generate_brand_kit, render_exports, render_for_context, render_mark, AssetBundle, AssetContext,
    BrandError, BrandSpec, ExportRequest, ExportTarget, FileIconSource, IconCatalog, IconSource,
    RenderOptions, ResvgRasterizer, Result, Template,
};

#[derive(Parser)]
#[command(name = "brandmark")]
#[command(about = "Render brand marks, lockups and kits from a spec")]
struct Cli {
    /// Path to a BrandSpec JSON file
    spec: PathBuf,

    /// Icon subset JSON to load as the external icon set
    #[arg(long)]
    icons: Option<PathBuf>,

    /// Namespace for keys of the icon subset
    #[arg(long, default_value = "lucide")]
    icon_namespace: String,

    /// Nominal canvas size in pixels
    #[arg(short, long, default_value_t = 256.0)]
    size: f64,

    /// Context to render for
    #[arg(short, long, value_enum, default_value = "hero-preview")]
    context: AssetContext,

    /// Override the spec's hero style
    #[arg(long, value_enum)]
    hero: Option<Template>,

    /// Render the color-swapped variant
    #[arg(long)]
    inverse: bool,

    /// Write the kit to this directory instead of printing one asset
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// With --out, write the full export (PNG, ICO, tokens) instead of SVGs
    #[arg(long)]
    export: bool,

    /// Export targets (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    targets: Vec<ExportTarget>,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| BrandError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> Result<()> {
    let path = dir.join(name);
    let io = |source: std::io::Error| BrandError::Io {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io)?;
    }
    fs::write(&path, bytes).map_err(io)
}

fn write_bundle(dir: &Path, prefix: &str, bundle: &AssetBundle) -> Result<()> {
    let assets = [
        ("mark", bundle.icon.as_deref().or(bundle.monogram.as_deref())),
        ("wordmark", Some(bundle.wordmark.as_str())),
        ("lockup-left", Some(bundle.lockups.left.as_str())),
        ("lockup-stacked", Some(bundle.lockups.stacked.as_str())),
        ("lockup-badge", Some(bundle.lockups.badge.as_str())),
    ];
    for (name, svg) in assets {
        if let Some(svg) = svg {
            write(dir, &format!("{prefix}{name}.svg"), svg.as_bytes())?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut spec = BrandSpec::from_json(&read(&cli.spec)?)?;
    if let Some(hero) = cli.hero {
        spec.hero_style = hero;
    }
    if cli.inverse {
        spec = spec.inverse();
    }

    let mut catalog = IconCatalog::new();
    if let Some(path) = &cli.icons {
        let set = FileIconSource::new(path, cli.icon_namespace.as_str()).fetch()?;
        info!("loaded {} icons from {}", set.len(), path.display());
        catalog.set_external(Some(set.into()));
    }

    let Some(dir) = cli.out else {
        // export has no single asset; print the mark instead
        let svg = render_for_context(&spec, cli.size, &catalog, cli.context, true)
            .unwrap_or_else(|| render_mark(&spec, cli.size, &catalog, &RenderOptions::default()));
        println!("{svg}");
        return Ok(());
    };

    if cli.export {
        let request = if cli.targets.is_empty() {
            ExportRequest::default()
        } else {
            ExportRequest {
                targets: cli.targets,
                ..ExportRequest::default()
            }
        };
        let rasterizer = ResvgRasterizer::with_system_fonts();
        for file in render_exports(&spec, &catalog, &rasterizer, &request)? {
            write(&dir, &file.path, &file.bytes)?;
        }
    } else {
        let kit = generate_brand_kit(&spec, cli.size, &catalog, &RenderOptions::default());
        write_bundle(&dir, "", &kit.primary)?;
        write_bundle(&dir, "inverse-", &kit.inverse)?;
    }
    info!("wrote kit to {}", dir.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
