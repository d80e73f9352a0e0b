use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use edit_breakdown::{
    ChromeKind, ChromeRegion, DrawRegion, EditBreakdown, LayoutOptions, Marker, SheetOverlay,
    ShotTag, ThumbnailLayout, ThumbnailSet, Viewport, compose_sheet, configuration,
    format_timestamp,
};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  edit-breakdown layout shots --width 1280 --height 720 --header 26 --json\n  edit-breakdown sheet shots --out breakdown.png --width 1920 --height 1080 --fx 96 --highlight fx\n  edit-breakdown validate shots\n  edit-breakdown breakdown shots --scene-end 2400 --csv\n  edit-breakdown completions zsh > _edit-breakdown";

#[derive(Debug, Parser)]
#[command(
    name = "edit-breakdown",
    version,
    about = "Lay out shot thumbnails and export edit breakdown metadata",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show debug logging output (overrides RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    /// Allow overwriting existing output files.
    #[arg(long, global = true)]
    overwrite: bool,
}

/// Host viewport and the chrome drawn over it.
#[derive(Debug, Args, Clone)]
struct ViewportArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: i32,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: i32,
    /// Height of the header bar along the top edge.
    #[arg(long, default_value_t = 0)]
    header: i32,
    /// Width of the properties panel along the right edge.
    #[arg(long, default_value_t = 0)]
    sidebar: i32,
    /// Width of the tool panel along the left edge.
    #[arg(long, default_value_t = 0)]
    toolbar: i32,
    /// The host reserves space for its chrome instead of drawing over the viewport.
    #[arg(long)]
    no_overlap: bool,
}

/// Tunable layout constants.
#[derive(Debug, Args, Clone)]
struct TuningArgs {
    /// Horizontal whitespace budget in pixels.
    #[arg(long, default_value_t = configuration::DEFAULT_SPACING_BUDGET.0)]
    spacing_x: f64,
    /// Vertical whitespace budget in pixels.
    #[arg(long, default_value_t = configuration::DEFAULT_SPACING_BUDGET.1)]
    spacing_y: f64,
    /// Minimum margin around the grid in pixels.
    #[arg(long, default_value_t = configuration::DEFAULT_MIN_MARGIN)]
    margin: f64,
    /// Per-thumbnail area (px²) below which nothing is laid out.
    #[arg(long, default_value_t = configuration::DEFAULT_MIN_AREA)]
    min_area: f64,
    /// Edge length (px) at or below which thumbnails are not drawn.
    #[arg(long, default_value_t = configuration::DEFAULT_MIN_EDGE)]
    min_edge: f64,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute thumbnail size and positions for a viewport.
    #[command(
        about = "Compute the thumbnail layout",
        after_help = "Examples:\n  edit-breakdown layout shots --width 1280 --height 720\n  edit-breakdown layout shots --toolbar 48 --sidebar 300 --json"
    )]
    Layout {
        /// Directory of frame-numbered thumbnails.
        directory: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
        #[command(flatten)]
        tuning: TuningArgs,
        /// Output the layout as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render the layout to an image.
    #[command(
        about = "Render a contact sheet",
        after_help = "Examples:\n  edit-breakdown sheet shots --out sheet.png\n  edit-breakdown sheet shots --out sheet.png --crowd 96,240 --highlight crowd --select 250"
    )]
    Sheet {
        /// Directory of frame-numbered thumbnails.
        directory: PathBuf,
        /// Output image path.
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
        #[command(flatten)]
        tuning: TuningArgs,
        /// Start frames of shots tagged with effects.
        #[arg(long, value_delimiter = ',')]
        fx: Vec<i64>,
        /// Start frames of shots tagged with crowds.
        #[arg(long, value_delimiter = ',')]
        crowd: Vec<i64>,
        /// Tag to draw strips for: fx | crowd.
        #[arg(long)]
        highlight: Option<String>,
        /// Outline the shot playing at this frame.
        #[arg(long)]
        select: Option<i64>,
    },

    /// Check a thumbnail directory for layout problems.
    #[command(about = "Validate thumbnails")]
    Validate {
        /// Directory of frame-numbered thumbnails.
        directory: PathBuf,
        /// Output the report as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build the shot list from a thumbnail directory.
    #[command(
        about = "Print the shot breakdown",
        after_help = "Examples:\n  edit-breakdown breakdown shots --scene-end 2400\n  edit-breakdown breakdown shots --scene-end 2400 --fps 25 --csv > shots.csv"
    )]
    Breakdown {
        /// Directory of frame-numbered thumbnails.
        directory: PathBuf,
        /// First frame of the scene.
        #[arg(long, default_value_t = 0)]
        scene_start: i64,
        /// Last frame of the scene. Defaults to the last shot's start.
        #[arg(long)]
        scene_end: Option<i64>,
        /// Scene frame rate.
        #[arg(long, default_value_t = 24.0)]
        fps: f64,
        /// Output CSV instead of a table.
        #[arg(long, conflicts_with = "json")]
        csv: bool,
        /// Output machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn parse_tag(value: &str) -> Option<ShotTag> {
    match value.to_ascii_lowercase().as_str() {
        "fx" | "has_fx" | "effects" => Some(ShotTag::HasFx),
        "crowd" | "has_crowd" => Some(ShotTag::HasCrowd),
        _ => None,
    }
}

fn build_viewport(args: &ViewportArgs) -> Viewport {
    Viewport::new(args.width, args.height)
        .with_overlap(!args.no_overlap)
        .with_chrome(ChromeRegion::new(ChromeKind::Header, args.width, args.header))
        .with_chrome(ChromeRegion::new(ChromeKind::Sidebar, args.sidebar, args.height))
        .with_chrome(ChromeRegion::new(ChromeKind::Toolbar, args.toolbar, args.height))
}

fn build_options(args: &TuningArgs) -> LayoutOptions {
    LayoutOptions::new()
        .with_spacing_budget(args.spacing_x, args.spacing_y)
        .with_min_margin(args.margin)
        .with_min_area(args.min_area)
        .with_min_edge(args.min_edge)
}

fn load_thumbnails(directory: &Path) -> Result<ThumbnailSet, Box<dyn std::error::Error>> {
    let thumbnails = ThumbnailSet::load(directory)?;
    for warning in &thumbnails.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning.yellow());
    }
    Ok(thumbnails)
}

/// One shot per thumbnail, named after the file.
fn breakdown_from_thumbnails(thumbnails: &ThumbnailSet, scene_end: i64) -> EditBreakdown {
    let markers: Vec<Marker> = thumbnails
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let name = image
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Marker::new(index as u64, name, image.start_frame)
        })
        .collect();

    let mut breakdown = EditBreakdown::new();
    breakdown.sync(&markers, scene_end);
    breakdown
}

fn fit_layout(
    thumbnails: &ThumbnailSet,
    viewport: &ViewportArgs,
    tuning: &TuningArgs,
) -> (DrawRegion, ThumbnailLayout) {
    let region = DrawRegion::from_viewport(&build_viewport(viewport));
    let layout = ThumbnailLayout::fit(&thumbnails.layout_request(region), &build_options(tuning));
    (region, layout)
}

fn ensure_writable_path(path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Layout {
            directory,
            viewport,
            tuning,
            json,
        } => {
            let thumbnails = load_thumbnails(&directory)?;
            let (region, layout) = fit_layout(&thumbnails, &viewport, &tuning);

            if json {
                let payload = json!({
                    "region": {
                        "offset_x": region.offset_x,
                        "width": region.width,
                        "height": region.height,
                    },
                    "renderable": layout.is_renderable(),
                    "size": [layout.size.0, layout.size.1],
                    "columns": layout.columns,
                    "rows": layout.rows,
                    "margins": [layout.margins.0, layout.margins.1],
                    "spacing": [layout.spacing.0, layout.spacing.1],
                    "thumbnails": thumbnails.images.iter().zip(&layout.positions).map(|(image, position)| json!({
                        "path": image.path.display().to_string(),
                        "start_frame": image.start_frame,
                        "x": position.0,
                        "y": position.1,
                    })).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "Region: {}x{} (offset {})",
                    region.width, region.height, region.offset_x
                );
                if !layout.is_renderable() {
                    println!("Thumbnails too small to draw ({} images)", thumbnails.len());
                    return Ok(());
                }
                println!(
                    "Thumbnail: {:.1}x{:.1}, grid {}x{}, margins {:?}, spacing {:?}",
                    layout.size.0,
                    layout.size.1,
                    layout.columns,
                    layout.rows,
                    layout.margins,
                    layout.spacing,
                );
                for (image, (x, y)) in thumbnails.images.iter().zip(&layout.positions) {
                    println!("{:>8}  ({x:.1}, {y:.1})", image.start_frame);
                }
            }
        }
        Commands::Sheet {
            directory,
            out,
            viewport,
            tuning,
            fx,
            crowd,
            highlight,
            select,
        } => {
            let tag = highlight
                .as_deref()
                .map(|value| parse_tag(value).ok_or(format!("unsupported --highlight: {value}")))
                .transpose()?;
            if viewport.width <= 0 || viewport.height <= 0 {
                return Err("--width and --height must be greater than 0".into());
            }

            ensure_writable_path(&out, cli.global.overwrite)?;
            let thumbnails = load_thumbnails(&directory)?;
            let (_, layout) = fit_layout(&thumbnails, &viewport, &tuning);

            let scene_end = thumbnails.images.last().map_or(0, |image| image.start_frame);
            let mut breakdown = breakdown_from_thumbnails(&thumbnails, scene_end);
            for shot in &mut breakdown.shots {
                shot.has_fx = fx.contains(&shot.frame_start);
                shot.has_crowd = crowd.contains(&shot.frame_start);
            }
            if let Some(frame) = select {
                breakdown.select_at_frame(frame);
            }

            let overlay = SheetOverlay {
                breakdown: &breakdown,
                tag,
            };
            let canvas = (viewport.width as u32, viewport.height as u32);
            let sheet = compose_sheet(&thumbnails, &layout, canvas, Some(&overlay))?;
            sheet.save(&out)?;

            println!(
                "{} {}",
                "success:".green().bold(),
                format!("Rendered {} thumbnail(s) to {}", thumbnails.len(), out.display()).green()
            );
        }
        Commands::Validate { directory, json } => {
            let thumbnails = load_thumbnails(&directory)?;
            let report = thumbnails.validate();
            if json {
                let payload = json!({
                    "valid": report.is_valid(),
                    "info": &report.info,
                    "warnings": &report.warnings,
                    "errors": &report.errors,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{report}");
            }
            if !report.is_valid() {
                return Err(format!("{} validation error(s)", report.errors.len()).into());
            }
        }
        Commands::Breakdown {
            directory,
            scene_start,
            scene_end,
            fps,
            csv,
            json,
        } => {
            let thumbnails = load_thumbnails(&directory)?;
            let scene_end = scene_end
                .or_else(|| thumbnails.images.last().map(|image| image.start_frame))
                .unwrap_or(scene_start);
            let breakdown = breakdown_from_thumbnails(&thumbnails, scene_end);

            if csv {
                print!("{}", breakdown.to_csv());
            } else if json {
                let shots = breakdown
                    .shots
                    .iter()
                    .map(|shot| {
                        Ok(json!({
                            "shot_name": shot.name,
                            "frame_start": shot.frame_start,
                            "duration": shot.duration,
                            "duration_seconds": shot.duration_seconds(fps)?,
                            "character_count": shot.character_count(),
                            "animation_complexity": shot.animation_complexity.score(),
                            "has_fx": shot.has_fx,
                            "has_crowd": shot.has_crowd,
                        }))
                    })
                    .collect::<Result<Vec<_>, edit_breakdown::BreakdownError>>()?;
                let payload = json!({
                    "shots": shots,
                    "total_frames": EditBreakdown::total_frames(scene_start, scene_end),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let total_frames = EditBreakdown::total_frames(scene_start, scene_end);
                println!("Shots: {}", breakdown.shots.len());
                println!(
                    "Frames: {total_frames} ({})",
                    format_timestamp(total_frames, fps)?
                );
                for shot in &breakdown.shots {
                    println!(
                        "{:<16} {:>8}  {}  {:>6} frames",
                        shot.name,
                        shot.frame_start,
                        format_timestamp(shot.duration, fps)?,
                        shot.duration,
                    );
                }
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "edit-breakdown", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
