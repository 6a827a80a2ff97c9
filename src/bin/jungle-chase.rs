use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use jungle_chase::{
    AnimationDriver, CAPTURE_FPS, CLIP_DURATION_MS, CaptureController, CpuCanvas, CpuCanvasOpts,
    DRAW_ORDER, FfmpegCapability, FileArtifactStore, FrameStepper, HeadlessPlatform, NullSurface,
    StartOutcome, ViewerSettings, scene::info,
};

#[derive(Parser, Debug)]
#[command(name = "jungle-chase", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scene after N ticks as a PNG.
    Frame(FrameArgs),
    /// Capture a 7s WebM clip (requires `ffmpeg` on PATH).
    Record(RecordArgs),
    /// Print the scene state after N ticks as JSON.
    State(StateArgs),
    /// Print scene metadata and the draw order.
    Info,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Viewer settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seed for the entity factories (overrides settings).
    #[arg(long)]
    seed: Option<u64>,

    /// Device pixel ratio (overrides settings).
    #[arg(long)]
    dpr: Option<f64>,

    /// Container width (overrides settings).
    #[arg(long)]
    container_width: Option<f64>,
}

impl ViewArgs {
    fn resolve(&self) -> anyhow::Result<ViewerSettings> {
        let mut settings = match &self.settings {
            Some(path) => ViewerSettings::from_path(path)?,
            None => ViewerSettings::default(),
        };
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(dpr) = self.dpr {
            settings.device_pixel_ratio = dpr;
        }
        if let Some(width) = self.container_width {
            settings.container_width = width;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Ticks to run at 60 fps; the frame drawn by the last one is written.
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
    ticks: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RecordArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Directory the clip is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Ticks to run before recording starts.
    #[arg(long, default_value_t = 0)]
    warmup: u64,
}

#[derive(Parser, Debug)]
struct StateArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Ticks to run at 60 fps.
    #[arg(long, default_value_t = 120)]
    ticks: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Record(args) => cmd_record(args),
        Command::State(args) => cmd_state(args),
        Command::Info => cmd_info(),
    }
}

fn mount(settings: &ViewerSettings) -> AnimationDriver<HeadlessPlatform> {
    let platform = HeadlessPlatform::new(settings.container_width, settings.device_pixel_ratio);
    AnimationDriver::mount(platform, &mut settings.rng(), 0.0)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let settings = args.view.resolve()?;
    let mut driver = mount(&settings);
    let mut stepper = FrameStepper::new(0.0, CAPTURE_FPS);

    stepper.run(&mut driver, &mut NullSurface, args.ticks - 1);

    let opts = CpuCanvasOpts::default().with_clear_rgba(settings.clear_rgba);
    let mut canvas = CpuCanvas::new(driver.layout().backing, opts)?;
    stepper.step(&mut driver, &mut canvas);
    let frame = canvas.read_frame().to_straight();
    driver.unmount();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_record(args: RecordArgs) -> anyhow::Result<()> {
    let settings = args.view.resolve()?;
    let mut driver = mount(&settings);
    let mut stepper = FrameStepper::new(0.0, CAPTURE_FPS);
    stepper.run(&mut driver, &mut NullSurface, args.warmup);

    let opts = CpuCanvasOpts::default().with_clear_rgba(settings.clear_rgba);
    let mut canvas = CpuCanvas::new(driver.layout().backing, opts)?;
    let bg = settings.clear_rgba.unwrap_or([0, 0, 0, 255]);
    let mut capture =
        CaptureController::new(FileArtifactStore::new(&args.out_dir)).with_background(bg);

    let capability = FfmpegCapability::detect();
    let outcome = capture.start(stepper.now_ms(), canvas.canvas(), &capability);
    if outcome != StartOutcome::Started {
        anyhow::bail!("could not start capture: {outcome:?}");
    }

    // One spare second covers frames lost to timer rounding.
    let max_frames = (CLIP_DURATION_MS / CAPTURE_FPS.frame_duration_ms()) as u64 + 60;
    for _ in 0..max_frames {
        if !stepper.step(&mut driver, &mut canvas) {
            break;
        }
        let frame = canvas.read_frame();
        if capture.on_frame(stepper.now_ms(), &frame)? {
            break;
        }
    }
    capture.poll(stepper.now_ms() + CLIP_DURATION_MS)?;
    driver.unmount();

    let artifact = capture
        .artifact()
        .context("capture finished without producing a clip")?;
    eprintln!(
        "wrote {} ({} bytes, download as {})",
        artifact.location(),
        artifact.len(),
        artifact.download_name()
    );
    Ok(())
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let settings = args.view.resolve()?;
    let mut driver = mount(&settings);
    let mut stepper = FrameStepper::new(0.0, CAPTURE_FPS);
    let ran = stepper.run(&mut driver, &mut NullSurface, args.ticks);

    let out = serde_json::json!({
        "ticks": ran,
        "fingerprint": format!("{:016x}", driver.scene().fingerprint()),
        "layout": driver.layout(),
        "scene": driver.scene(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("serialize scene state")?
    );
    Ok(())
}

fn cmd_info() -> anyhow::Result<()> {
    println!("{}", info::TITLE);
    println!("{}", info::SUBTITLE);
    println!();
    println!("record control: {}", info::RECORD_LABEL_IDLE);
    println!("clip: {} ms at {} fps", CLIP_DURATION_MS, CAPTURE_FPS.as_f64());
    println!("draw order:");
    for (i, stage) in DRAW_ORDER.iter().enumerate() {
        println!("  {:2}. {}", i + 1, stage.name());
    }
    Ok(())
}
