use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use shortform::pipeline::{FfmpegMuxer, MediaMuxer as _, Script};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shortform", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a job and dump the scene plan as JSON.
    Plan(PlanArgs),
    /// Print draw parameters for a single frame.
    Frame(FrameArgs),
    /// Evaluate every frame in parallel and print a per-scene summary.
    Sample(SampleArgs),
    /// Print the palette for a theme.
    Theme(ThemeArgs),
    /// Print the upload description and tags for a script.
    Describe(DescribeArgs),
    /// Mux a video track with narration audio (requires `ffmpeg` on PATH).
    Mux(MuxArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// Theme name (`market_open`, `space`, ...).
    name: String,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Script JSON written by the pipeline.
    #[arg(long)]
    script: PathBuf,

    /// Channel name used in the sign-off and tags.
    #[arg(long, default_value = "Shortform")]
    channel: String,
}

#[derive(Parser, Debug)]
struct MuxArgs {
    /// Video track.
    #[arg(long)]
    video: PathBuf,

    /// Narration audio.
    #[arg(long)]
    audio: PathBuf,

    /// Output media path.
    #[arg(long)]
    out: PathBuf,

    /// Refuse to replace an existing output.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Theme(args) => cmd_theme(args),
        Command::Describe(args) => cmd_describe(args),
        Command::Mux(args) => cmd_mux(args),
    }
}

fn read_job_json(path: &Path) -> anyhow::Result<shortform::JobConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open job '{}'", path.display()))?;
    let job = shortform::JobConfig::from_json_str(&s).with_context(|| "parse job JSON")?;
    Ok(job)
}

fn build_timeline(job: &shortform::JobConfig) -> anyhow::Result<shortform::Timeline> {
    Ok(shortform::Timeline::build(&job.request, &job.timing)?)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let job = read_job_json(&args.in_path)?;
    let timeline = build_timeline(&job)?;

    match args.out {
        Some(out) => {
            shortform::pipeline::ensure_parent_dir(&out)?;
            let f = File::create(&out)
                .with_context(|| format!("create plan '{}'", out.display()))?;
            serde_json::to_writer_pretty(f, &timeline)
                .with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print_json(&timeline)?,
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let job = read_job_json(&args.in_path)?;
    let timeline = build_timeline(&job)?;
    let params = timeline.draw_params(shortform::FrameIndex(args.frame))?;

    #[derive(serde::Serialize)]
    struct FrameReport<'a> {
        #[serde(flatten)]
        params: &'a shortform::FrameParams,
        transform: [f64; 6],
    }

    print_json(&FrameReport {
        params: &params,
        transform: params.transform(job.canvas).as_coeffs(),
    })
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let job = read_job_json(&args.in_path)?;
    let timeline = build_timeline(&job)?;

    #[derive(serde::Serialize)]
    struct WindowSummary {
        kind: shortform::SceneKind,
        index: usize,
        start_frame: u64,
        frames: u64,
        min_opacity: f64,
        max_opacity: f64,
    }

    let mut summaries: Vec<WindowSummary> = timeline
        .windows()
        .iter()
        .map(|w| WindowSummary {
            kind: w.kind,
            index: w.index,
            start_frame: w.start_frame,
            frames: 0,
            min_opacity: f64::INFINITY,
            max_opacity: f64::NEG_INFINITY,
        })
        .collect();

    // Window ranges only, so a truncated trailing gap never fails the sweep.
    let mut sampled = 0u64;
    for (w, summary) in timeline.windows().iter().zip(summaries.iter_mut()) {
        let window_range = w.range();
        let params = timeline.draw_params_range(window_range, args.threads)?;
        for p in &params {
            summary.frames += 1;
            summary.min_opacity = summary.min_opacity.min(p.opacity);
            summary.max_opacity = summary.max_opacity.max(p.opacity);
        }
        sampled += params.len() as u64;
    }

    tracing::info!(sampled, total = timeline.total_frames(), "sampled timeline");
    print_json(&summaries)
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let palette = shortform::resolve_theme(&args.name)?;
    print_json(&palette)
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.script)
        .with_context(|| format!("open script '{}'", args.script.display()))?;
    let script: Script =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse script JSON")?;
    script.validate()?;

    println!("{}", shortform::pipeline::describe(&script, &args.channel));
    println!();
    println!(
        "tags: {}",
        shortform::pipeline::tags(script.theme, &args.channel).join(", ")
    );
    Ok(())
}

fn cmd_mux(args: MuxArgs) -> anyhow::Result<()> {
    let muxer = FfmpegMuxer {
        overwrite: !args.no_overwrite,
        ..FfmpegMuxer::default()
    };
    let out = muxer.mux(&args.video, &args.audio, &args.out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
