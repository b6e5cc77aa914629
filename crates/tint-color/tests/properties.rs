//! Behavioral properties of the public conversion API.

use approx::assert_abs_diff_eq;
use tint_color::prelude::*;

const HUES: [f64; 9] = [0.0, 15.0, 60.0, 119.5, 180.0, 275.0, 359.9, 360.0, 1000.0];
const UNITS: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.8, 1.0];

fn assert_close(got: Rgba, want: Rgba) {
    for (g, w) in got.to_array().iter().zip(want.to_array()) {
        assert_abs_diff_eq!(*g, w, epsilon = 1e-12);
    }
}

#[test]
fn hsl_extreme_lightness_is_black_or_white() {
    for h in HUES {
        for s in UNITS {
            for a in UNITS {
                assert_eq!(hsla_to_rgba(h, s, 0.0, a), Rgba::new(0.0, 0.0, 0.0, a));
                assert_eq!(hsla_to_rgba(h, s, 1.0, a), Rgba::new(1.0, 1.0, 1.0, a));
            }
        }
    }
}

#[test]
fn hsl_zero_saturation_is_gray() {
    for h in HUES {
        for l in [0.01, 0.3, 0.5, 0.7, 0.99] {
            assert_eq!(hsla_to_rgba(h, 0.0, l, 0.5), Rgba::new(l, l, l, 0.5));
        }
    }
}

#[test]
fn hsi_zero_intensity_is_black() {
    for h in HUES {
        for s in UNITS {
            for i in [0.0, -0.5] {
                assert_eq!(hsia_to_rgba(h, s, i, 0.75), Rgba::new(0.0, 0.0, 0.0, 0.75));
            }
        }
    }
}

#[test]
fn hsi_zero_saturation_is_gray() {
    for h in HUES {
        for i in [0.2, 0.5, 1.0] {
            assert_eq!(hsia_to_rgba(h, 0.0, i, 1.0), Rgba::new(i, i, i, 1.0));
        }
    }
}

#[test]
fn hsl_primaries() {
    assert_close(hsla_to_rgba(0.0, 1.0, 0.5, 1.0), Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_close(hsla_to_rgba(120.0, 1.0, 0.5, 1.0), Rgba::new(0.0, 1.0, 0.0, 1.0));
    assert_close(hsla_to_rgba(240.0, 1.0, 0.5, 1.0), Rgba::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn hsl_hue_wraps_at_full_turn() {
    for s in [0.2, 0.6, 1.0] {
        for l in [0.2, 0.5, 0.8] {
            assert_eq!(hsla_to_rgba(360.0, s, l, 1.0), hsla_to_rgba(0.0, s, l, 1.0));
            assert_eq!(hsla_to_rgba(720.0, s, l, 1.0), hsla_to_rgba(0.0, s, l, 1.0));
        }
    }
}

#[test]
fn hsl_negative_hue_uses_truncating_wrap() {
    // -30 deg stays in the first sector with the green ramp pushed below min
    assert_close(hsla_to_rgba(-30.0, 1.0, 0.5, 1.0), Rgba::new(1.0, -0.5, 0.0, 1.0));
    // -90 deg drops into the last sector row
    assert_close(hsla_to_rgba(-90.0, 1.0, 0.5, 1.0), Rgba::new(1.0, 0.0, 1.5, 1.0));
}

#[test]
fn hsl_and_hsi_agree_on_full_saturation() {
    // at s = 1 both sweep from 0 to the same top when l = 0.5 and i = 1
    for h in HUES {
        assert_close(hsla_to_rgba(h, 1.0, 0.5, 1.0), hsia_to_rgba(h, 1.0, 1.0, 1.0));
    }
}

#[test]
fn morph_endpoints() {
    let pairs = [
        (Rgba::new(0.0, 0.0, 0.0, 0.0), Rgba::WHITE),
        (Rgba::new(0.3, 0.6, 0.9, 0.5), Rgba::new(0.9, 0.1, 0.2, 0.8)),
        (Rgba::new(1.0, 0.5, 0.25, 1.0), Rgba::new(0.125, 0.75, 0.0, 0.0)),
    ];
    for (c1, c2) in pairs {
        assert_eq!(morph_rgba(c1, c2, 0.0), c1);
        assert_close(morph_rgba(c1, c2, 1.0), c2);
    }
}

#[test]
fn formatting_examples() {
    assert_eq!(rgba_to_string(Rgba::new(1.0, 0.0, 0.0, 1.0)), "rgba(255,0,0,1.00)");
    assert_eq!(rgba_to_string(Rgba::new(0.0, 0.5, 1.0, 0.5)), "rgba(0,127,255,0.50)");
}

#[test]
fn formatted_alpha_ties_round_up() {
    // an eighth of the way from transparent to opaque is an exact tie
    let c = morph_rgba(Rgba::new(1.0, 0.0, 0.0, 0.0), Rgba::new(1.0, 0.0, 0.0, 1.0), 0.125);
    assert_eq!(rgba_to_string(c), "rgba(255,0,0,0.13)");
    assert_eq!(rgba_to_string(hsla_to_rgba(0.0, 1.0, 0.5, 0.625)), "rgba(255,0,0,0.63)");
}

#[test]
fn formatted_conversion_parses_back() {
    let c = hsla_to_rgba(200.0, 0.6, 0.4, 0.8);
    let parsed: Rgba = rgba_to_string(c).parse().unwrap();
    for (orig, back) in c.rgb().iter().zip(parsed.rgb()) {
        assert!((orig - back).abs() < 1.0 / 255.0);
    }
    assert_abs_diff_eq!(parsed.a, 0.8);
}
