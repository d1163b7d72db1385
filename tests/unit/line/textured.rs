use super::*;
use crate::foundation::{core::Rgba8, error::InterpolationError};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Debug, PartialEq)]
enum Call {
    Stroke {
        xs: Vec<f64>,
        ys: Vec<f64>,
        colour: Rgba8,
        width_pt: f64,
    },
    Scatter {
        xs: Vec<f64>,
        ys: Vec<f64>,
        size_pt: f64,
        colour: Rgba8,
    },
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<Call>,
}

impl DrawSurface for RecordingSurface {
    fn stroke_polyline(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        colour: Rgba8,
        width_pt: f64,
    ) -> TexturedResult<()> {
        self.calls.push(Call::Stroke {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            colour,
            width_pt,
        });
        Ok(())
    }

    fn scatter(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        marker_size_pt: f64,
        colour: Rgba8,
    ) -> TexturedResult<()> {
        self.calls.push(Call::Scatter {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            size_pt: marker_size_pt,
            colour,
        });
        Ok(())
    }
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn line(coords: &[(f64, f64)], n: usize) -> TexturedLine {
    TexturedLine::new(pts(coords), LineStyleConfig::new(0.0, n)).unwrap()
}

#[test]
fn construction_derives_parallel_coordinates() {
    let l = line(&[(0.0, 3.0), (2.0, 5.0), (7.0, -1.0)], 5);
    assert_eq!(l.xs(), &[0.0, 2.0, 7.0]);
    assert_eq!(l.ys(), &[3.0, 5.0, -1.0]);
    assert_eq!(l.points().len(), 3);
}

#[test]
fn default_style_is_applied_when_omitted() {
    let l = TexturedLine::with_default_style(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
    assert_eq!(*l.style(), LineStyleConfig::default());
}

#[test]
fn flat_segment_samples_in_thirds() {
    let l = line(&[(0.0, 1.0), (1.0, 1.0)], 4);
    let (xs, ys) = l.sample_points_along_line().unwrap();
    let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
    assert_eq!(xs.len(), 4);
    for (x, e) in xs.iter().zip(expected) {
        assert!((x - e).abs() < 1e-12, "{x} vs {e}");
    }
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[3], 1.0);
    assert!(ys.iter().all(|&y| y == 1.0));
}

#[test]
fn samples_land_on_control_points_when_evenly_divisible() {
    let l = line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)], 3);
    let (xs, ys) = l.sample_points_along_line().unwrap();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    assert_eq!(ys, vec![0.0, 1.0, 4.0]);
}

#[test]
fn two_point_line_samples_lie_on_the_segment() {
    let (x0, y0, x1, y1) = (-3.0, 2.0, 5.0, -6.0);
    let l = line(&[(x0, y0), (x1, y1)], 257);
    let (xs, ys) = l.sample_points_along_line().unwrap();
    assert_eq!(xs.len(), 257);
    assert_eq!(xs[0], x0);
    assert_eq!(xs[256], x1);

    let step = (x1 - x0) / 256.0;
    for (i, (x, y)) in xs.iter().zip(&ys).enumerate() {
        assert!((x - (x0 + step * i as f64)).abs() < 1e-9);
        let expected = y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        assert!((y - expected).abs() < 1e-9);
    }
}

#[test]
fn samples_follow_the_bounding_segment_of_a_parabola() {
    let coords: Vec<(f64, f64)> = (0..25).map(|x| (x as f64, (x * x) as f64)).collect();
    let l = line(&coords, 4000);
    let (xs, ys) = l.sample_points_along_line().unwrap();
    assert_eq!(xs.len(), 4000);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[3999], 24.0);
    for (x, y) in xs.iter().zip(&ys) {
        let lo = x.floor().min(23.0);
        let hi = lo + 1.0;
        let expected = lo * lo + (hi * hi - lo * lo) * (x - lo);
        assert!((y - expected).abs() < 1e-9, "x={x} y={y} expected={expected}");
    }
}

#[test]
fn sampling_is_idempotent() {
    let l = line(&[(0.0, 0.0), (0.3, 2.0), (4.0, 1.0)], 101);
    assert_eq!(
        l.sample_points_along_line().unwrap(),
        l.sample_points_along_line().unwrap()
    );
}

#[test]
fn invalid_points_fail_at_construction() {
    let single = TexturedLine::with_default_style(pts(&[(0.0, 0.0)]));
    assert!(matches!(
        single,
        Err(TexturedError::Interpolation(
            InterpolationError::InsufficientPoints(1)
        ))
    ));

    let same_x = TexturedLine::with_default_style(pts(&[(1.0, 0.0), (1.0, 2.0)]));
    assert!(matches!(
        same_x,
        Err(TexturedError::Interpolation(
            InterpolationError::DegenerateDomain(_)
        ))
    ));

    let backwards = TexturedLine::with_default_style(pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]));
    assert!(matches!(
        backwards,
        Err(TexturedError::Interpolation(
            InterpolationError::NonIncreasingX { .. }
        ))
    ));
}

#[test]
fn invalid_style_fails_at_construction() {
    let p = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    assert!(matches!(
        TexturedLine::new(p.clone(), LineStyleConfig::new(-1.0, 10)),
        Err(TexturedError::Validation(_))
    ));
    assert!(matches!(
        TexturedLine::new(p, LineStyleConfig::new(1.0, 0)),
        Err(TexturedError::Validation(_))
    ));
}

#[test]
fn zero_variance_scatter_equals_baseline() {
    let l = line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)], 50);
    let mut rng = StdRng::seed_from_u64(7);
    let baseline = l.sample_points_along_line().unwrap();
    assert_eq!(l.scatter_points(&mut rng).unwrap(), baseline);
}

#[test]
fn split_variance_keeps_one_axis_on_the_baseline() {
    let style = LineStyleConfig::new(0.5, 200).with_vertical_variance(0.0);
    let l = TexturedLine::new(pts(&[(0.0, 0.0), (10.0, 10.0)]), style).unwrap();
    let (bx, by) = l.sample_points_along_line().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let (sx, sy) = l.scatter_points(&mut rng).unwrap();

    assert_eq!(sy, by);
    assert!(sx.iter().zip(&bx).any(|(s, b)| s != b));
}

#[test]
fn shared_variance_perturbs_both_axes() {
    let l = TexturedLine::new(
        pts(&[(0.0, 0.0), (1.0, 0.0)]),
        LineStyleConfig::new(0.25, 2000),
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let (bx, by) = l.sample_points_along_line().unwrap();
    let (sx, sy) = l.scatter_points(&mut rng).unwrap();

    let dev = |s: &[f64], b: &[f64]| {
        let n = s.len() as f64;
        let mean = s.iter().zip(b).map(|(s, b)| s - b).sum::<f64>() / n;
        let var = s
            .iter()
            .zip(b)
            .map(|(s, b)| (s - b - mean).powi(2))
            .sum::<f64>()
            / n;
        (mean, var.sqrt())
    };
    let (mx, sdx) = dev(&sx, &bx);
    let (my, sdy) = dev(&sy, &by);
    assert!(mx.abs() < 0.05 && my.abs() < 0.05);
    assert!((sdx - 0.25).abs() < 0.03, "sdx={sdx}");
    assert!((sdy - 0.25).abs() < 0.03, "sdy={sdy}");
}

#[test]
fn seeded_rng_is_reproducible() {
    let l = TexturedLine::new(
        pts(&[(0.0, 0.0), (1.0, 1.0)]),
        LineStyleConfig::new(0.1, 64),
    )
    .unwrap();
    let a = l.scatter_points(&mut StdRng::seed_from_u64(42)).unwrap();
    let b = l.scatter_points(&mut StdRng::seed_from_u64(42)).unwrap();
    let c = l.scatter_points(&mut StdRng::seed_from_u64(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn draw_strokes_then_scatters() {
    let colour = Rgba8::rgb(1, 2, 3);
    let style = LineStyleConfig::new(0.0, 3).with_colour(colour);
    let l = TexturedLine::new(pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]), style).unwrap();

    let mut surface = RecordingSurface::default();
    l.draw(&mut surface, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(
        surface.calls,
        vec![
            Call::Stroke {
                xs: vec![0.0, 1.0, 2.0],
                ys: vec![0.0, 1.0, 4.0],
                colour,
                width_pt: 1.5,
            },
            Call::Scatter {
                xs: vec![0.0, 1.0, 2.0],
                ys: vec![0.0, 1.0, 4.0],
                size_pt: 1.0,
                colour,
            },
        ]
    );
}

#[test]
fn draw_works_through_a_trait_object() {
    let l = line(&[(0.0, 0.0), (1.0, 1.0)], 10);
    let mut surface = RecordingSurface::default();
    let dyn_surface: &mut dyn DrawSurface = &mut surface;
    l.draw(dyn_surface, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(surface.calls.len(), 2);
}

#[test]
fn very_wide_domain_still_samples() {
    let l = line(&[(-1e308, 0.0), (1e308, 1.0)], 3);
    let (xs, ys) = l.sample_points_along_line().unwrap();
    assert_eq!(xs, vec![-1e308, 0.0, 1e308]);
    assert_eq!(ys, vec![0.0, 0.5, 1.0]);
}
