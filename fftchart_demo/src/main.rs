// Copyright 2025 the fftchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demo for `fftchart_axis`.
//!
//! Builds the two axes of a spectrum view (log frequency, linear level),
//! resizes them like a window would, prints a few cursor readouts and writes
//! the resulting draw commands to `fftchart_demo.svg`.
//!
//! Set `RUST_LOG=fftchart_axis=trace` to see skipped ticks and suppressed labels.

mod svg;

use std::cell::Cell;
use std::rc::Rc;

use fftchart_axis::{
    AxisError, AxisModel, AxisRenderer, AxisStyle, HeuristicTextMeasurer, LabelBox, ScaleType,
};
use kurbo::Size;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VIEW: Size = Size::new(900.0, 480.0);

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fftchart_demo=info,fftchart_axis=debug".into()),
        )
        .init();

    if let Err(err) = run() {
        warn!(%err, "demo aborted");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let repaints = Rc::new(Cell::new(0_usize));

    let mut frequency = AxisModel::horizontal();
    let counter = Rc::clone(&repaints);
    frequency.on_repaint(move |reason| {
        counter.set(counter.get() + 1);
        tracing::debug!(?reason, "frequency axis wants a repaint");
    });
    frequency.use_iso_ticks();
    frequency.configure(ScaleType::Logarithmic, 20.0, 20_000.0, 0, 1.0)?;

    let mut level = AxisModel::vertical();
    level.configure(ScaleType::Linear, -90.0, 30.0, 9, 1.0)?;

    // The container reports its size once it is laid out.
    for axis in [&mut frequency, &mut level] {
        axis.on_resize(VIEW.width, VIEW.height);
    }

    // Showcase the per-tick domain error the renderer skips over.
    if let Err(AxisError::Domain { value }) = frequency.value_to_coord(0.0, 1.0) {
        info!(value, "0 Hz has no place on a log axis");
    }

    for x in [50.0, 300.0, 600.0, VIEW.width - 10.0] {
        info!(x, hz = frequency.screen_to_value(x), "frequency readout");
    }
    for y in [10.0, VIEW.height / 2.0, VIEW.height - 20.0] {
        info!(y, db = level.screen_to_value(y), "level readout");
    }

    // Zoom into the upper part of the level range, as a drag would.
    level.set_min(-60.0);
    level.set_max(24.0);

    let frequency_renderer = AxisRenderer::default();
    let level_renderer = AxisRenderer::new(
        AxisStyle::default().with_label_box(LabelBox::Measured { pad: 2.0 }),
    );
    let frequency_scene = frequency_renderer.render(&frequency, None);
    let level_scene = level_renderer.render(&level, Some(&HeuristicTextMeasurer));
    frequency.clear_dirty();
    level.clear_dirty();

    info!(
        gridlines = frequency_scene.commands.len(),
        labels = frequency_scene.labels().count(),
        repaints = repaints.get(),
        "frequency axis rendered"
    );
    info!(
        gridlines = level_scene.commands.len(),
        labels = level_scene.labels().count(),
        "level axis rendered"
    );

    let mut scene = svg::SvgScene::new(VIEW);
    scene.push_axis(&frequency_scene, &frequency_renderer.style);
    scene.push_axis(&level_scene, &level_renderer.style);
    std::fs::write("fftchart_demo.svg", scene.to_svg_string())?;
    info!("wrote fftchart_demo.svg");
    Ok(())
}
