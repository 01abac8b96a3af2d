// Host-side tests for the theme controller and its subscribers.

use orbit_folio::core::color::{
    hsl_to_rgb, lightness, srgb_to_linear, srgb_to_linear_rgb, to_css_hex,
};
use orbit_folio::core::constants::{PARTICLE_HUE, PARTICLE_SATURATION};
use orbit_folio::core::constants::{DARK_BACKGROUND, LIGHT_BACKGROUND};
use orbit_folio::core::{ParticleField, SceneConfig, Theme, ThemeController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn initial_theme_follows_system_preference() {
    assert_eq!(ThemeController::new(false).theme(), Theme::Light);
    assert!(!ThemeController::new(false).is_dark());
    assert_eq!(ThemeController::new(true).theme(), Theme::Dark);
}

#[test]
fn toggle_flips_and_notifies_in_order() {
    let mut themes = ThemeController::new(false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        themes.subscribe(move |t| seen.borrow_mut().push(("first", *t)));
    }
    {
        let seen = seen.clone();
        themes.subscribe(move |t| seen.borrow_mut().push(("second", *t)));
    }

    assert_eq!(themes.toggle(), Theme::Dark);
    assert_eq!(themes.toggle(), Theme::Light);
    assert_eq!(
        *seen.borrow(),
        vec![
            ("first", Theme::Dark),
            ("second", Theme::Dark),
            ("first", Theme::Light),
            ("second", Theme::Light),
        ]
    );
}

#[test]
fn bands_do_not_overlap() {
    let light = Theme::Light.particle_lightness_band();
    let dark = Theme::Dark.particle_lightness_band();
    assert!((light.start - 0.3).abs() < 1e-6 && (light.end - 0.5).abs() < 1e-6);
    assert!((dark.start - 0.5).abs() < 1e-6 && (dark.end - 0.7).abs() < 1e-6);
    assert!(light.end <= dark.start);
}

#[test]
fn background_per_theme() {
    assert_eq!(Theme::Dark.background_rgb(), DARK_BACKGROUND);
    assert_eq!(Theme::Light.background_rgb(), LIGHT_BACKGROUND);
    assert!(lightness(DARK_BACKGROUND) < lightness(LIGHT_BACKGROUND));
    assert_eq!(Theme::Dark.css_class(), "dark");
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

// Light load, then one toggle: background and particle band both move to dark.
#[test]
fn light_load_then_toggle_scenario() {
    let config = SceneConfig::default();
    let mut themes = ThemeController::new(false);
    let particles = Rc::new(RefCell::new(ParticleField::with_rng(
        &config,
        themes.theme(),
        StdRng::seed_from_u64(11),
    )));
    let background = Rc::new(RefCell::new(themes.theme().background_rgb()));

    for c in particles.borrow().colors() {
        let l = lightness(*c);
        assert!((0.3 - 1e-5..0.5 + 1e-5).contains(&l));
    }

    {
        let particles = particles.clone();
        themes.subscribe(move |t| particles.borrow_mut().recolor(*t));
        let background = background.clone();
        themes.subscribe(move |t| *background.borrow_mut() = t.background_rgb());
    }

    themes.toggle();
    assert!(themes.is_dark());
    assert_eq!(*background.borrow(), DARK_BACKGROUND);
    for c in particles.borrow().colors() {
        let l = lightness(*c);
        assert!((0.5 - 1e-5..0.7 + 1e-5).contains(&l), "lightness {l}");
    }
}

#[test]
fn hsl_primaries_and_grays() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
    let blue = hsl_to_rgb(2.0 / 3.0, 1.0, 0.5);
    assert!(blue[0].abs() < 1e-5 && blue[1].abs() < 1e-5 && (blue[2] - 1.0).abs() < 1e-5);
    let gray = hsl_to_rgb(0.3, 0.0, 0.25);
    assert!(gray.iter().all(|v| (v - 0.25).abs() < 1e-6));
}

#[test]
fn css_hex_formatting() {
    assert_eq!(to_css_hex([1.0, 0.0, 0.0]), "#ff0000");
    assert_eq!(to_css_hex([0.0, 0.5, 1.5]), "#0080ff");
}

// What an sRGB render target writes for a linear value.
fn encode_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[test]
fn srgb_decode_reference_points() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!((srgb_to_linear(0.5) - 0.21404).abs() < 1e-4);
    assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    assert!(srgb_to_linear(0.2) < 0.2);
}

// Decoded then re-encoded by the surface, particle colors keep their theme band
// and the canvas clear color matches the page background hex.
#[test]
fn displayed_colors_match_authored_colors() {
    for theme in [Theme::Light, Theme::Dark] {
        let band = theme.particle_lightness_band();
        for l in [band.start, (band.start + band.end) * 0.5, band.end - 1e-4] {
            let authored = hsl_to_rgb(PARTICLE_HUE, PARTICLE_SATURATION, l);
            let shown = srgb_to_linear_rgb(authored).map(encode_srgb);
            assert!((lightness(shown) - l).abs() < 1e-4, "{theme:?} l={l}");
        }

        let bg = theme.background_rgb();
        let shown = srgb_to_linear_rgb(bg).map(encode_srgb);
        assert_eq!(to_css_hex(shown), to_css_hex(bg));
    }
}
