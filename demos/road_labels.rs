//! Lays out a few street names along screen-space polylines and prints the
//! recorded draw commands.
//!
//! ```text
//! cargo run --example road_labels
//! RUST_LOG=textpath=trace cargo run --example road_labels
//! ```

use textpath::layout::{Overflow, TextAlign};
use textpath::math::Point2;
use textpath::overlay::{LineSymbol, TextPathLine, TextPathSymbol};
use textpath::render::{Color, DrawCommand, RecordingCanvas};
use textpath::text::{AdvanceTable, FontSize};

fn main() -> textpath::Result<()> {
    // Default: WARN for everything, INFO for textpath.
    // Override with RUST_LOG env var (e.g. RUST_LOG=textpath=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("textpath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Rough Arial advances in em units.
    let arial = AdvanceTable::new(0.56)
        .with(' ', 0.28)
        .with('i', 0.22)
        .with('l', 0.22)
        .with('t', 0.28)
        .with('r', 0.33)
        .with('M', 0.83)
        .with('W', 0.94);
    let mut canvas = RecordingCanvas::new(arial);

    let casing = LineSymbol::new("#ffffff".parse::<Color>()?, 3.0, 0.9)?;
    let roads = [
        (
            "Wilhelmstrasse",
            TextPathSymbol {
                font_size: "14px".parse::<FontSize>()?,
                align: TextAlign::Center,
                justify: false,
                ..TextPathSymbol::default()
            },
            vec![
                Point2::new(20.0, 200.0),
                Point2::new(120.0, 150.0),
                Point2::new(260.0, 160.0),
            ],
        ),
        (
            "Mill Race Lane",
            TextPathSymbol {
                font_size: "20m".parse::<FontSize>()?,
                overflow: Overflow::Ellipsis,
                justify: false,
                keep_upright: true,
                ..TextPathSymbol::default()
            },
            vec![Point2::new(300.0, 40.0), Point2::new(200.0, 60.0)],
        ),
    ];

    for (name, symbol, points) in roads {
        let line = TextPathLine::new(casing).with_text(name, symbol);
        let painted = line.paint(&mut canvas, points, 1.25);
        println!("{name}: {painted:?}");
    }

    for cmd in canvas.take_commands() {
        if let DrawCommand::FillText(t) = cmd {
            println!(
                "  {:?} at ({:7.2}, {:7.2}) rot {:6.3} rad, {}",
                t.text, t.position.x, t.position.y, t.rotation, t.font
            );
        }
    }
    Ok(())
}
