use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandelbrot_bench::{
    benchmark_all, compare_with_serial, max_iterations_for_zoom, render_timed, Backend,
    BufferDescriptor, RenderRequest, ViewState, DEFAULT_FRAMES,
};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_bench", version, about = "Render and benchmark the Mandelbrot set")]
struct Cli {
    /// Override rayon worker threads for the CPU parallel backend.
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame and report its timing.
    Render {
        #[command(flatten)]
        frame: FrameArgs,

        #[arg(long, value_enum, default_value_t = BackendArg::CpuParallel)]
        backend: BackendArg,
    },
    /// Time every backend over repeated frames.
    Bench {
        #[command(flatten)]
        frame: FrameArgs,

        /// Frames rendered per backend.
        #[arg(long, default_value_t = DEFAULT_FRAMES)]
        frames: u32,
    },
    /// Diff one backend's frame against the serial reference.
    Compare {
        #[command(flatten)]
        frame: FrameArgs,

        #[arg(long, value_enum, default_value_t = BackendArg::GpuSingle)]
        backend: BackendArg,
    },
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Plane units per pixel, within (0, 1).
    #[arg(long, default_value_t = ViewState::default().zoom_level())]
    zoom: f64,

    #[arg(long, default_value_t = ViewState::default().center_real(), allow_negative_numbers = true)]
    center_real: f64,

    #[arg(long, default_value_t = ViewState::default().center_imag(), allow_negative_numbers = true)]
    center_imag: f64,
}

impl FrameArgs {
    fn request(&self, backend: Backend) -> anyhow::Result<RenderRequest> {
        let view = ViewState::new(self.zoom, self.center_real, self.center_imag).context("invalid view")?;
        let descriptor = BufferDescriptor::new(self.width, self.height).context("invalid buffer size")?;

        Ok(RenderRequest::new(view, descriptor, backend))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum BackendArg {
    Serial,
    CpuParallel,
    GpuSingle,
    GpuDouble,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Serial => Backend::Serial,
            BackendArg::CpuParallel => Backend::CpuParallel,
            BackendArg::GpuSingle => Backend::GpuSingle,
            BackendArg::GpuDouble => Backend::GpuDouble,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configure rayon thread pool")?;
    }

    match cli.cmd {
        Command::Render { frame, backend } => cmd_render(&frame, backend.into()),
        Command::Bench { frame, frames } => cmd_bench(&frame, frames),
        Command::Compare { frame, backend } => cmd_compare(&frame, backend.into()),
    }
}

fn cmd_render(frame: &FrameArgs, backend: Backend) -> anyhow::Result<()> {
    let request = frame.request(backend)?;
    let mut pixels = vec![0u32; request.buffer.len()];

    let elapsed = render_timed(&mut pixels, &request).with_context(|| format!("render on {backend}"))?;

    info!(
        %backend,
        width = frame.width,
        height = frame.height,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        iterations = max_iterations_for_zoom(frame.zoom),
        magnification = request.view.magnification(),
        checksum = %format!("{:016x}", checksum(&pixels)),
        "frame rendered"
    );

    Ok(())
}

fn cmd_bench(frame: &FrameArgs, frames: u32) -> anyhow::Result<()> {
    let request = frame.request(Backend::Serial)?;
    let mut pixels = vec![0u32; request.buffer.len()];

    println!(
        "{}x{} at zoom {} ({} iterations), {} frames per backend",
        frame.width,
        frame.height,
        frame.zoom,
        max_iterations_for_zoom(frame.zoom),
        frames
    );
    println!("{:<24} {:>12} {:>10}", "backend", "ms/frame", "fps");

    for (backend, result) in benchmark_all(&mut pixels, request.view, request.buffer, frames) {
        match result {
            Ok(report) => println!(
                "{:<24} {:>12.3} {:>10.1}",
                backend.display_name(),
                report.average_ms(),
                report.frames_per_second()
            ),
            Err(err) => println!("{:<24} {err}", backend.display_name()),
        }
    }

    Ok(())
}

fn cmd_compare(frame: &FrameArgs, backend: Backend) -> anyhow::Result<()> {
    let request = frame.request(backend)?;

    let report = compare_with_serial(&request).with_context(|| format!("compare {backend} with serial"))?;

    println!(
        "{}: {} of {} pixels differ from serial, max channel delta {}",
        backend.display_name(),
        report.differing_pixels,
        report.pixels,
        report.max_channel_delta
    );

    Ok(())
}

/// Order-sensitive fingerprint of a frame.
fn checksum(pixels: &[u32]) -> u64 {
    pixels
        .iter()
        .fold(0xcbf2_9ce4_8422_2325, |hash, &pixel| (hash ^ pixel as u64).wrapping_mul(0x0100_0000_01b3))
}
