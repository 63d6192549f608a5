//! Headless front end: renders a demo scene progressively and saves a PNG.

mod cli;
mod logger;
mod scenes;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use lumen_renderer::RenderContext;
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.clone().into());

    let settings = args.render_settings()?;
    let (scene, camera) = args.scene.build(args.width, args.height, args.fov);
    log::info!(
        "Rendering {:?}: {}x{}, {} frames, {} primitives",
        args.scene,
        args.width,
        args.height,
        args.frames,
        scene.len()
    );

    let mut context = RenderContext::new(scene, camera, settings)?;
    let mut framebuffer = vec![0; context.framebuffer_len()];

    let start = Instant::now();
    for frame in 1..=args.frames {
        let frame_start = Instant::now();
        context.render_frame(&mut framebuffer)?;
        log::info!(
            "Frame {}/{} in {:?} ({} spp)",
            frame,
            args.frames,
            frame_start.elapsed(),
            context.frames_rendered()
        );
    }
    log::info!("Rendered in {:?}", start.elapsed());

    context
        .to_rgb_image()
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
