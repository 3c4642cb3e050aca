use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use sigmotion::{
    AnimationMode, ExportOptions, OutlineOptions, PixmapSurface, PreviewScene, Rgba8,
    SessionConfig, Signature, SplitMode,
};

#[derive(Parser, Debug)]
#[command(name = "sigmotion", version)]
struct Cli {
    /// Log pipeline events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn captured strokes into an animated component.
    Export(ExportArgs),
    /// Turn typed text into an animated component.
    Type(TypeArgs),
    /// Render the preview scene at one instant as a PNG.
    Frame(FrameArgs),
    /// Replay captured strokes to completion and write the canvas as a PNG.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Strokes JSON.
    #[arg(long)]
    strokes: PathBuf,

    /// Reveal style (draw or fill); overrides the config.
    #[arg(long)]
    mode: Option<AnimationMode>,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TypeArgs {
    /// Text to outline.
    #[arg(long)]
    text: String,

    /// Font name from the config.
    #[arg(long)]
    font: String,

    /// Font file to register under `--font`, bypassing the config.
    #[arg(long)]
    font_file: Option<PathBuf>,

    /// Path granularity (glyph, word or line).
    #[arg(long, default_value = "glyph")]
    split: SplitMode,

    /// Em size.
    #[arg(long, default_value_t = 128.0)]
    font_size: f64,

    /// Extra advance after each glyph.
    #[arg(long, default_value_t = 0.0)]
    letter_spacing: f64,

    /// Reveal style (draw or fill); overrides the config.
    #[arg(long)]
    mode: Option<AnimationMode>,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file; stdout when absent.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Strokes JSON.
    #[arg(long)]
    strokes: PathBuf,

    /// Seconds since the animation started.
    #[arg(long)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Reveal style (draw or fill); overrides the config.
    #[arg(long)]
    mode: Option<AnimationMode>,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Background color (#RRGGBB); transparent when absent.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Strokes JSON.
    #[arg(long)]
    strokes: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Replay frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Draw the ghost stroke.
    #[arg(long)]
    ghost: bool,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// Background color (#RRGGBB); transparent when absent.
    #[arg(long)]
    background: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Type(args) => cmd_type(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(p) => SessionConfig::from_path(p)
            .with_context(|| format!("load session config '{}'", p.display())),
        None => Ok(SessionConfig::default()),
    }
}

fn export_options(cfg: &SessionConfig, mode: Option<AnimationMode>) -> ExportOptions {
    let mut opts = cfg.export.clone();
    if let Some(mode) = mode {
        opts.animation_mode = mode;
    }
    opts
}

fn load_signature(path: &Path) -> anyhow::Result<Signature> {
    let strokes = sigmotion::strokes_from_path(path)
        .with_context(|| format!("load strokes '{}'", path.display()))?;
    Ok(Signature::from_strokes(&strokes))
}

fn parse_background(background: Option<&str>) -> anyhow::Result<Option<Rgba8>> {
    background
        .map(|s| Rgba8::parse_hex(s).with_context(|| format!("parse background '{s}'")))
        .transpose()
}

fn write_text(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    if text.is_empty() {
        eprintln!("nothing to export");
        return Ok(());
    }
    match out {
        Some(path) => {
            create_parent(path)?;
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let signature = load_signature(&args.strokes)?;
    let text = sigmotion::generate_motion_component(&signature, &export_options(&cfg, args.mode))?;
    write_text(args.out.as_deref(), &text)
}

fn cmd_type(args: TypeArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut fonts = cfg.font_library();
    if let Some(file) = &args.font_file {
        fonts.register(args.font.clone(), file.clone());
    }

    let outline = OutlineOptions {
        font_size: args.font_size,
        letter_spacing: args.letter_spacing,
        split: args.split,
    };
    let glyphs = fonts
        .outline(&args.font, &args.text, &outline)
        .with_context(|| format!("outline text with font \"{}\"", args.font))?;
    let signature = Signature::from_glyphs(&glyphs);

    let text = sigmotion::generate_motion_component(&signature, &export_options(&cfg, args.mode))?;
    write_text(args.out.as_deref(), &text)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let signature = load_signature(&args.strokes)?;
    let scene = PreviewScene::build(&signature, &export_options(&cfg, args.mode))?;
    let background = parse_background(args.background.as_deref())?;

    create_parent(&args.out)?;
    let frame = sigmotion::SceneFrame::new(&scene, args.time);
    sigmotion::save_frame_png(&frame, &args.out, args.width, args.height, background)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    cfg.pad.ghost.enabled |= args.ghost;
    let strokes = sigmotion::strokes_from_path(&args.strokes)
        .with_context(|| format!("load strokes '{}'", args.strokes.display()))?;

    let mut surface = PixmapSurface::new(args.width, args.height)?;
    if let Some(bg) = parse_background(args.background.as_deref())? {
        surface = surface.with_background(bg);
    }

    let frame_ms = if args.fps > 0.0 { 1000.0 / args.fps } else { 0.0 };
    let ticks = sigmotion::replay_to_end(&strokes, &cfg.pad, frame_ms, &mut surface);
    tracing::debug!(ticks, segments = surface.segment_count(), "replay complete");

    create_parent(&args.out)?;
    surface
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
