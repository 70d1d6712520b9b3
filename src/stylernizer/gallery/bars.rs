use crate::error::{Result, StylernizerError};
use crate::figure::Figure;
use crate::model::{module_id, Orientation, SweepValue};
use crate::registrar::PlotOptions;
use crate::registry::Registry;
use crate::render::{Artifact, RenderState};

pub fn module() -> String {
    module_id(module_path!())
}

pub fn load(registry: &mut Registry) -> Result<()> {
    registry.register(
        PlotOptions::new().sweep([vec![10, 3], vec![20, 5]]),
        crate::plot_fn!(histogram),
    )?;
    registry.register(
        PlotOptions::new()
            .style("dark_background")
            .orientation(Orientation::Portrait),
        crate::plot_fn!(ranking),
    )?;
    Ok(())
}

/// Deterministic pseudo-random numbers in `[0, 1)`.
fn noise(seed: u64) -> impl Iterator<Item = f64> {
    let mut x = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    std::iter::repeat_with(move || {
        x = x
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (x >> 11) as f64 / (1u64 << 53) as f64
    })
}

/// Histogram of summed noise; the sweep value is `[bins, seed]`.
fn histogram(state: &RenderState, arg: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
    let (bins, seed) = match arg.and_then(SweepValue::as_slice) {
        Some([bins, seed]) => (
            bins.as_i64().unwrap_or(10),
            seed.as_i64().unwrap_or(0),
        ),
        _ => (10, 0),
    };
    if bins <= 0 {
        return Err(StylernizerError::Artifact(format!(
            "histogram needs a positive bin count, got {}",
            bins
        )));
    }

    let bins = bins as usize;
    let mut counts = vec![0u32; bins];
    let mut rng = noise(seed as u64);
    for _ in 0..1000 {
        let sample: f64 = rng.by_ref().take(4).sum::<f64>() / 4.0;
        let bin = ((sample * bins as f64) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    let mut fig = Figure::new(state, format!("{} bins, seed {}", bins, seed));
    fig.bars(
        "counts",
        counts.iter().enumerate().map(|(i, c)| (i as f64, f64::from(*c))),
    );
    Ok(Box::new(fig))
}

fn ranking(state: &RenderState, _arg: Option<&SweepValue>) -> Result<Box<dyn Artifact>> {
    let scores = [9.1, 7.4, 6.8, 5.5, 3.2, 2.9, 1.0];
    let mut fig = Figure::new(state, "ranking");
    fig.bars(
        "score",
        scores.iter().enumerate().map(|(i, s)| (i as f64, *s)),
    );
    Ok(Box::new(fig))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_pair_suffixes() {
        let mut registry = Registry::new();
        load(&mut registry).unwrap();
        assert_eq!(
            registry.keys(),
            vec![
                "stylernizer.gallery.bars:histogram_10_3",
                "stylernizer.gallery.bars:histogram_20_5",
                "stylernizer.gallery.bars:ranking",
            ]
        );
    }

    #[test]
    fn noise_is_deterministic_and_bounded() {
        let a: Vec<f64> = noise(3).take(50).collect();
        let b: Vec<f64> = noise(3).take(50).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn rejects_zero_bins() {
        let state = RenderState::default();
        let err = histogram(&state, Some(&SweepValue::from(vec![0, 1])))
            .err()
            .unwrap();
        assert!(matches!(err, StylernizerError::Artifact(_)));
    }

    #[test]
    fn ranking_is_portrait_after_registration() {
        let mut registry = Registry::new();
        load(&mut registry).unwrap();
        let mut state = RenderState::default();
        registry
            .get("stylernizer.gallery.bars:ranking")
            .unwrap()
            .invoke(&mut state)
            .unwrap();
        assert_eq!(state.orientation(), Orientation::Portrait);
        assert_eq!(state.styles(), ["dark_background"]);
    }
}
