use super::*;

#[test]
fn defaults_match_documented_values() {
    let s = LineStyleConfig::default();
    assert_eq!(s.variance, 1000.0);
    assert_eq!(s.num_scatter_points, 4000);
    assert_eq!(s.line_colour.to_string(), "#2F1E1E");
    assert_eq!(s.vertical_variance, None);
    assert_eq!(s.effective_vertical_variance(), 1000.0);
    assert!(s.validate().is_ok());
}

#[test]
fn vertical_variance_overrides_only_the_vertical_axis() {
    let s = LineStyleConfig::new(0.5, 10).with_vertical_variance(0.0);
    assert_eq!(s.horizontal_variance(), 0.5);
    assert_eq!(s.effective_vertical_variance(), 0.0);
}

#[test]
fn rejects_invalid_values() {
    assert!(LineStyleConfig::new(-1.0, 10).validate().is_err());
    assert!(LineStyleConfig::new(f64::INFINITY, 10).validate().is_err());
    assert!(LineStyleConfig::new(1.0, 0).validate().is_err());
    assert!(
        LineStyleConfig::new(1.0, 10)
            .with_vertical_variance(-0.1)
            .validate()
            .is_err()
    );

    let mut s = LineStyleConfig::default();
    s.marker_size = 0.0;
    assert!(matches!(s.validate(), Err(TexturedError::Validation(_))));

    let mut s = LineStyleConfig::default();
    s.stroke_width = f64::NAN;
    assert!(s.validate().is_err());

    assert!(LineStyleConfig::new(0.0, 1).validate().is_ok());
}

#[test]
fn partial_json_fills_in_defaults() {
    let s: LineStyleConfig =
        serde_json::from_str(r##"{"variance": 0.001, "line_colour": "#102030"}"##).unwrap();
    assert_eq!(s.variance, 0.001);
    assert_eq!(s.num_scatter_points, 4000);
    assert_eq!(s.line_colour, Rgba8::rgb(0x10, 0x20, 0x30));
}
