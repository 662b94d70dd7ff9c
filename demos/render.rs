//! Paints a shaded sphere on the virtual screen and prints it
//!
//! Run with: cargo run --example render --features libaa -- --width 76 --height 24

use aascreen::engine::libaa::MemoryDriver;
use aascreen::{AttributeEncoder, Overrides, Pixmap, Screen};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "render", about = "Render a test pattern as character art")]
struct Cli {
    /// Text columns
    #[arg(long, default_value_t = 76)]
    width: i32,

    /// Text rows
    #[arg(long, default_value_t = 24)]
    height: i32,

    /// ascii, ansi or linux; detected from the terminal when omitted
    #[arg(long)]
    encoder: Option<AttributeEncoder>,

    /// Extra render settings as JSON, e.g. '{"gamma": 1.4, "inversion": true}'
    #[arg(long)]
    render: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let encoder = cli.encoder.unwrap_or_else(AttributeEncoder::detect);
    let hardware = Overrides::new()
        .set("width", cli.width)
        .set("height", cli.height);
    let render = match &cli.render {
        Some(json) => Overrides::from_json(json)?,
        None => Overrides::new(),
    };

    let mut screen = Screen::new(&MemoryDriver, encoder, &hardware)?;
    let (width, height) = screen.virtual_size();
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = cx.min(cy) * 0.9;

    let sphere = Pixmap::from_fn(width, height, |x, y| {
        let dx = (x as f64 - cx) / radius;
        let dy = (y as f64 - cy) / radius;
        let d2 = dx * dx + dy * dy;
        if d2 > 1.0 {
            return 0;
        }
        let dz = (1.0 - d2).sqrt();
        let light = (-0.4 * dx - 0.5 * dy + 0.77 * dz).clamp(0.0, 1.0);
        (light * 255.0) as u8
    });
    screen.blit(0, 0, &sphere)?;

    println!("{}", screen.render(&render)?);
    screen.close();
    Ok(())
}
