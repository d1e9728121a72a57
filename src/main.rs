//! `bandsite` command line.
//!
//! Resolves the site configuration (defaults, override file, genre preset,
//! band content) and prints what rendering would consume.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use bandsite::bridge::{BridgeSettings, ContentOrigin};
use bandsite::config::loader::load_design_export;
use bandsite::config::watcher::OverrideWatcher;
use bandsite::config::{ConfigStore, DesignExport, SiteConfig};
use bandsite::content::queries::highlights;
use bandsite::content::{ContentConfig, ContentConfigUpdate, ContentSource};
use bandsite::observability::logging::init_logging;
use bandsite::presets::{Genre, GenrePreset};
use bandsite::styling::{
    animation_classes, configured_classes, effect_toggles, inject_css_variables, RootStylesheet,
};
use bandsite::SiteContext;

#[derive(Parser)]
#[command(name = "bandsite")]
#[command(about = "Resolve band site configuration and content", long_about = None)]
struct Cli {
    /// Partial configuration file (TOML or JSON).
    #[arg(long = "override", global = true)]
    override_file: Option<PathBuf>,

    /// Genre preset applied after the override.
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Content source: file, api or cms.
    #[arg(long, global = true)]
    source: Option<ContentSource>,

    #[arg(long, global = true)]
    band_id: Option<String>,

    /// Base URL for the api/cms sources.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding one subdirectory per band.
    #[arg(long, global = true)]
    content_root: Option<PathBuf>,

    /// Resolve band content through the CMS.
    #[arg(long, global = true)]
    cms: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the `:root` stylesheet of CSS variables
    Css,
    /// Print utility class bundles
    Classes,
    /// Validate the configuration (exit status 1 on violations)
    Validate,
    /// List genre presets
    Presets,
    /// Print the configuration in the design export format
    Export,
    /// Read a design export file and print the resulting configuration
    Import { file: PathBuf },
    /// Resolve band content into the site configuration
    Content { band: Option<String> },
    /// Print media asset paths for a band
    Media { band: Option<String> },
    /// Reload the override file on change and print CSS variables
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let store = ConfigStore::new();
    if let Some(path) = &cli.override_file {
        store.load_from_path(path);
    }
    if let Some(name) = &cli.preset {
        store.apply_preset(name)?;
    }

    let mut settings = BridgeSettings::from_env();
    settings.cms_enabled |= cli.cms;

    let update = ContentConfigUpdate {
        source: cli.source,
        band_id: cli.band_id.clone(),
        api_url: cli.api_url.clone().map(Some),
        fallback_to_file: None,
        content_root: cli.content_root.clone(),
    };
    let ctx = SiteContext::new(store.clone(), ContentConfig::from_env(), settings);
    let loader = ctx.content_loader(Some(&update));

    match cli.command {
        Commands::Css => {
            print!("{}", stylesheet(&store.get()));
        }
        Commands::Classes => {
            let config = store.get();
            let report = json!({
                "classes": configured_classes(&config),
                "animation": animation_classes(config.core.animation_intensity),
                "effects": effect_toggles(&config),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Validate => {
            let report = store.validate();
            if report.valid {
                println!("Configuration is valid");
            } else {
                for error in &report.errors {
                    eprintln!("error: {}", error);
                }
                std::process::exit(1);
            }
        }
        Commands::Presets => {
            let table: BTreeMap<&str, GenrePreset> =
                Genre::ALL.into_iter().map(|g| (g.key(), g.preset())).collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Export => {
            let export = DesignExport::from(&*store.get());
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        Commands::Import { file } => {
            let config = SiteConfig::from(load_design_export(&file)?);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Content { band } => {
            let band = band.unwrap_or_else(|| loader.config().band_id.clone());
            let unified = ctx.bridge().unified_content(&band).await;
            let config = &unified.config;
            let mut summary = json!({
                "band": band,
                "source": unified.source,
                "bandName": config.content.band_name,
                "tagline": config.content.tagline,
                "palette": config.core.primary_color_palette,
                "genre": config.genre,
                "media": config.media,
            });

            if unified.source != ContentOrigin::Old {
                match loader.load_band_content(&band).await {
                    Ok(content) => {
                        let now = chrono::Utc::now();
                        summary["highlights"] = serde_json::to_value(highlights(&content, now))?;
                    }
                    Err(e) => tracing::warn!(band_id = %band, error = %e, "Band content unavailable for highlights"),
                }
            }
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Media { band } => {
            let band = band.unwrap_or_else(|| loader.config().band_id.clone());
            let report = json!({
                "assets": loader.load_media_assets(&band),
                "paths": ctx.bridge().media_paths(&band).await,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Watch => {
            let path = cli
                .override_file
                .clone()
                .ok_or("watch requires --override <file>")?;
            let (watcher, mut updates) = OverrideWatcher::new(&path, store.clone());
            let _handle = watcher.run()?;
            print!("{}", stylesheet(&store.get()));

            loop {
                tokio::select! {
                    Some(mut config) = updates.recv() => {
                        if let Some(name) = &cli.preset {
                            config = store.apply_preset(name)?;
                        }
                        print!("{}", stylesheet(&config));
                    }
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn stylesheet(config: &SiteConfig) -> String {
    let mut sheet = RootStylesheet::new();
    inject_css_variables(config, Some(&mut sheet));
    sheet.render()
}
