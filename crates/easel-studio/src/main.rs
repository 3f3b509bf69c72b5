//! Headless demo: builds a small sprite scene, runs the frame loop against a
//! recording surface and prints what was drawn.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "easel-studio", about = "Run an easel scene headlessly")]
struct Args {
    /// TOML config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to render before pausing.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Number of walking sprites in the scene.
    #[arg(long, default_value_t = 8)]
    sprites: u32,

    /// Directory images are loaded from. Without it, in-memory placeholders are used.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Sleep between frames instead of running on a virtual clock.
    #[arg(long)]
    realtime: bool,

    /// Log filter, e.g. "debug" or "easel_engine=trace".
    #[arg(long)]
    log: Option<String>,
}

/// Pauses the controller after a fixed number of frames.
struct Director {
    frames: u64,
}

impl ControllerHooks for Director {
    fn on_start(&mut self, _commands: &mut Commands) {
        log::info!("scene started, rendering {} frames", self.frames);
    }

    fn on_update(&mut self, frame: &FrameReport, commands: &mut Commands) {
        if !frame.pass.reaped.is_empty() {
            log::info!("frame {}: reaped {:?}", frame.frames, frame.pass.reaped);
        }
        if frame.frames >= self.frames {
            commands.pause();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let ids = Arc::new(IdSource::new());
    let mut provider = RecordingProvider::new();
    let recorded = provider.log();

    let builder = ControllerBuilder::new(config)
        .ids(ids.clone())
        .hooks(Director { frames: args.frames.max(1) });
    let builder = match &args.assets {
        Some(dir) => builder.images(FileImageLoader::new(dir.clone())),
        None => builder.images(
            MemoryImageLoader::new()
                .with_image("walker.png", 128, 32)
                .with_image("banner.png", 256, 64),
        ),
    };
    let builder = if args.realtime {
        builder.scheduler(TimerScheduler::new())
    } else {
        builder.scheduler(ManualScheduler::new())
    };
    let mut controller = builder.build(&mut provider).context("failed to build controller")?;

    populate(&mut controller, &ids, args.sprites);
    log::info!(
        "{} components, {} services",
        controller.registry().component_count(),
        controller.registry().service_count()
    );

    controller.start();
    let ticks = controller.run();

    let commands = recorded.snapshot();
    let draws = commands.iter().filter(|cmd| cmd.is_draw()).count();
    println!("frames rendered : {}", controller.frames_rendered());
    println!("ticks handled   : {ticks}");
    println!("components left : {}", controller.registry().component_count());
    println!("surface calls   : {}", commands.len());
    println!("draw calls      : {draws}");
    Ok(())
}

/// A banner on the top layer, a row of animated walkers heading right, and a
/// marker that fades out and removes itself.
fn populate(controller: &mut Controller, ids: &IdSource, walkers: u32) {
    let banner = Sprite::new(ids, AttributePatch::new().position(16.0, 16.0).size(256.0, 64.0).layer(4))
        .image("banner.png")
        .background(ColorRgba::from_u8(24, 24, 32, 255));
    controller.add_component(banner);

    for i in 0..walkers {
        let y = 120.0 + (i % 4) as f32 * 24.0;
        let patch = AttributePatch::new()
            .position(-32.0 * i as f32, y)
            .size(32.0, 32.0)
            .origin(16.0, 32.0)
            .layer(1)
            .z_index(i as f32);
        let walker = Sprite::new(ids, patch)
            .image("walker.png")
            .sheet(Sheet::grid(4, 1))
            .with_trait(TraitKind::Animation, FrameAnimation::new(4, 6))
            .with_trait(TraitKind::MoveTo, MoveTo::new(Vec2::new(640.0, y), 2.0))
            .when_created(|attrs| log::debug!("walker {} created", attrs.id));
        controller.add_component(walker);
    }

    let marker = Sprite::new(ids, AttributePatch::new().position(320.0, 240.0).size(16.0, 16.0).layer(2))
        .background(ColorRgba::from_u8(220, 60, 60, 255))
        .with_trait(TraitKind::Fade, Fade::new(0, 5).destroy_on_finish())
        .when_destroyed(|attrs| log::info!("marker {} removed", attrs.id));
    controller.add_component(marker);
}
