use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Instant;

use rasterlet::{Model, RenderConfig, Renderer};

const OUTPUT_PATH: &str = "output.tga";

#[derive(Parser)]
#[command(name = "rasterlet")]
#[command(about = "Renders a textured OBJ model to output.tga")]
struct Settings {
    /// OBJ model to render; its texture is read from <name>_diffuse.tga
    #[arg(default_value = "obj/african_head.obj")]
    model: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = Settings::parse();

    let model = Model::load(&settings.model)?;

    let frame_start = Instant::now();
    let mut renderer = Renderer::new(RenderConfig::default());
    renderer.render(&model);
    info!("frame time: {:.2?}", frame_start.elapsed());

    // origin at the bottom-left corner of the picture
    let mut screen = renderer.into_screen();
    screen.flip_vertically();
    screen.save(OUTPUT_PATH).with_context(|| format!("writing {OUTPUT_PATH}"))?;
    info!("saved {OUTPUT_PATH}");
    Ok(())
}
