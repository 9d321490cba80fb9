use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cutin", version, about = "Composite a portrait onto cut-in frame templates")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame with the portrait applied and write it as a PNG.
    Preview(PreviewArgs),
    /// Render all 20 frames into `<out-root>/<name>/`.
    Export(ExportArgs),
    /// Print the resolved frame layout as JSON.
    Table(TableArgs),
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Portrait image.
    #[arg(long)]
    portrait: PathBuf,

    /// Directory holding the frame templates `1.png` .. `20.png`.
    #[arg(long, default_value = "Template")]
    templates: PathBuf,

    /// Horizontal offset added to each frame's baseline.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i32).range(-100..=100))]
    dx: i32,

    /// Vertical offset added to the default y.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i32).range(-100..=100))]
    dy: i32,

    /// Layout JSON overriding the built-in frame positions.
    #[arg(long)]
    layout: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Frame to render (defaults to the layout's preview frame).
    #[arg(long)]
    frame: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Character name; used as the output directory name.
    #[arg(long)]
    name: String,

    /// Directory the character directory is created in.
    #[arg(long, default_value = ".")]
    out_root: PathBuf,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Layout JSON overriding the built-in frame positions.
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Export(args) => cmd_export(args),
        Command::Table(args) => cmd_table(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_layout(path: Option<&Path>) -> anyhow::Result<cutin::Layout> {
    let cfg = match path {
        Some(p) => cutin::LayoutConfig::from_path(p)
            .with_context(|| format!("read layout '{}'", p.display()))?,
        None => cutin::LayoutConfig::default(),
    };
    Ok(cfg.build()?)
}

fn open_session(args: &SessionArgs) -> anyhow::Result<cutin::CutinSession> {
    let layout = read_layout(args.layout.as_deref())?;
    let portrait = cutin::load_rgba(&args.portrait).context("load portrait")?;
    let mut session = cutin::CutinSession::new(
        layout,
        cutin::TemplateStore::new(&args.templates),
        portrait,
    );
    session.set_offset(cutin::Offset::new(args.dx, args.dy)?);
    Ok(session)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let session = open_session(&args.session)?;
    let img = match args.frame {
        Some(n) => session.render_frame(cutin::FrameIndex::new(n)?)?,
        None => session.preview()?,
    };

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    // Reject a blank name before the portrait or templates are touched.
    cutin::normalize_identifier(&args.name)?;

    let session = open_session(&args.session)?;
    let missing = session.templates().missing_frames();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|f| f.file_name()).collect();
        anyhow::bail!(
            "template dir '{}' is missing {}",
            session.templates().root().display(),
            names.join(", ")
        );
    }

    let report = session.export(&args.name, &args.out_root)?;

    eprintln!(
        "wrote {} frames ({} with portrait, {} passed through) to {}",
        report.written.len(),
        report.overlaid.len(),
        report.frames_passed_through(),
        report.output_dir.display()
    );
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let layout = read_layout(args.layout.as_deref())?;
    println!("{}", layout.to_config().to_json_pretty()?);
    Ok(())
}
