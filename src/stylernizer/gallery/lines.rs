use crate::error::Result;
use crate::figure::Figure;
use crate::model::{module_id, Orientation, SweepValue};
use crate::registrar::PlotOptions;
use crate::registry::Registry;
use crate::render::{Artifact, RenderState};
use std::f64::consts::PI;

const SAMPLES: usize = 200;

pub fn module() -> String {
    module_id(module_path!())
}

pub fn load(registry: &mut Registry) -> Result<()> {
    registry.register(
        PlotOptions::new().orientation(Orientation::Landscape),
        crate::plot_fn!(sine),
    )?;
    registry.register(
        PlotOptions::new().style("grid").sweep([1, 2, 4]),
        crate::plot_fn!(damped),
    )?;
    registry.register(
        PlotOptions::new()
            .styles(["dark_background", "grid"])
            .sweep([vec![1, 2], vec![3, 4]])
            .orientation(Orientation::Square),
        crate::plot_fn!(lissajous),
    )?;
    Ok(())
}

fn samples(from: f64, to: f64) -> impl Iterator<Item = f64> {
    (0..SAMPLES).map(move |i| from + (to - from) * i as f64 / (SAMPLES - 1) as f64)
}

fn sine(state: &RenderState, _arg: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
    let mut fig = Figure::new(state, "sin(x) and cos(x)");
    fig.line("sin", samples(0.0, 2.0 * PI).map(|x| (x, x.sin())))
        .line("cos", samples(0.0, 2.0 * PI).map(|x| (x, x.cos())));
    Ok(Box::new(fig))
}

/// Damped oscillation; the sweep value is the frequency.
fn damped(state: &RenderState, frequency: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
    let f = frequency.and_then(SweepValue::as_f64).unwrap_or(1.0);
    let mut fig = Figure::new(state, format!("damped oscillation, f = {}", f));
    fig.line(
        "signal",
        samples(0.0, 5.0).map(|t| (t, (-t / 2.0).exp() * (2.0 * PI * f * t).cos())),
    );
    Ok(Box::new(fig))
}

/// Lissajous curve; the sweep value is the `[a, b]` frequency pair.
fn lissajous(state: &RenderState, ratio: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
    let (a, b) = match ratio.and_then(SweepValue::as_slice) {
        Some([a, b]) => (a.as_f64().unwrap_or(1.0), b.as_f64().unwrap_or(1.0)),
        _ => (1.0, 2.0),
    };
    let mut fig = Figure::new(state, format!("Lissajous {}:{}", a, b));
    fig.line(
        "curve",
        samples(0.0, 2.0 * PI).map(|t| ((a * t + PI / 2.0).sin(), (b * t).sin())),
    );
    Ok(Box::new(fig))
}
