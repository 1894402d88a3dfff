//! End-to-end tests for palette generation.
//!
//! Exercises the full pipeline: tone ramp synthesis through the Oklab
//! spline, slot extraction into light/dark palettes, and the derived
//! hue bookkeeping.

use huekit::color::{
    accent_hue, generate_color_tones, generate_palette_model, ColorToneChroma,
    ExtractionIndices, HueOffsetDirection, ACCENT_HUE_OFFSET, TONES_COUNT,
};
use huekit::models::{Color, PaletteRole};

/// Approximate relative luminance, good enough for ordering checks.
fn luma(color: Color) -> f32 {
    0.2126 * f32::from(color.r) + 0.7152 * f32::from(color.g) + 0.0722 * f32::from(color.b)
}

#[test]
fn test_generation_is_deterministic() {
    let a = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    let b = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    assert_eq!(a, b);
}

#[test]
fn test_base_hue_is_normalized() {
    let wrapped = generate_palette_model(570, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    let direct = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    assert_eq!(wrapped, direct);
    assert_eq!(wrapped.base_tones_hue, 210);
}

#[test]
fn test_accent_hue_wraps_around_the_circle() {
    assert_eq!(accent_hue(30, 67, HueOffsetDirection::Down), 323);
    assert_eq!(accent_hue(330, 67, HueOffsetDirection::Up), 37);
    assert_eq!(accent_hue(210, 67, HueOffsetDirection::Down), 143);
}

#[test]
fn test_tone_ramps_run_dark_to_light() {
    for chroma in [
        ColorToneChroma::Vibrant,
        ColorToneChroma::Muted,
        ColorToneChroma::Zero,
    ] {
        let tones = generate_color_tones(210, chroma);
        assert!(!tones.is_empty());
        assert!(tones.len() <= TONES_COUNT);

        let first = tones[0];
        let last = *tones.last().unwrap();
        assert!(luma(first) < 60.0, "ramp should start near black: {first}");
        assert!(luma(last) > 195.0, "ramp should end near white: {last}");
        assert!(luma(first) < luma(last));
    }
}

#[test]
fn test_zero_chroma_ramp_is_achromatic() {
    let tones = generate_color_tones(210, ColorToneChroma::Zero);
    for tone in &tones {
        let spread = i16::from(tone.r.max(tone.g).max(tone.b))
            - i16::from(tone.r.min(tone.g).min(tone.b));
        assert!(spread <= 6, "gray tone drifted: {tone}");
    }
}

#[test]
fn test_light_and_dark_extract_from_shared_ramps() {
    let model = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);

    // Ramps keep all 30 samples, so the fixed indices address them directly.
    let at = |tones: &[Color], index: usize| tones[index];

    // Both variants read the same ramps at fixed slots.
    assert_eq!(model.light_palette.base, at(&model.base_tones, 10));
    assert_eq!(model.light_palette.on_base, at(&model.base_tones, 28));
    assert_eq!(model.dark_palette.base, at(&model.base_tones, 20));
    assert_eq!(model.dark_palette.on_base, at(&model.base_tones, 3));

    assert_eq!(model.light_palette.surface_low, at(&model.surface_tones, 26));
    assert_eq!(model.dark_palette.surface_low, at(&model.surface_tones, 4));

    assert_eq!(model.light_palette.error, at(&model.error_tones, 10));
    assert_eq!(model.dark_palette.error, at(&model.error_tones, 20));
}

#[test]
fn test_light_containers_are_darker_than_their_content() {
    let model = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);

    // Light variant: saturated containers carry near-white content.
    let light = &model.light_palette;
    assert!(luma(light.base) < luma(light.on_base));
    assert!(luma(light.accent) < luma(light.on_accent));
    assert!(luma(light.error) < luma(light.on_error));

    // Dark variant inverts the relationship.
    let dark = &model.dark_palette;
    assert!(luma(dark.base) > luma(dark.on_base));
    assert!(luma(dark.accent) > luma(dark.on_accent));
    assert!(luma(dark.error) > luma(dark.on_error));
}

#[test]
fn test_surfaces_step_away_from_the_background() {
    let model = generate_palette_model(140, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);

    let light = &model.light_palette;
    assert!(luma(light.surface_low) <= luma(light.surface_medium));
    assert!(luma(light.surface_medium) <= luma(light.surface_high));

    let dark = &model.dark_palette;
    assert!(luma(dark.surface_low) <= luma(dark.surface_medium));
    assert!(luma(dark.surface_medium) <= luma(dark.surface_high));
}

#[test]
fn test_every_slot_is_opaque() {
    let model = generate_palette_model(45, ACCENT_HUE_OFFSET, HueOffsetDirection::Up);
    for palette in [&model.light_palette, &model.dark_palette] {
        for role in PaletteRole::ALL {
            assert!(palette.color(role).is_opaque(), "{role:?} should be opaque");
        }
    }
}

#[test]
fn test_ramps_keep_full_length_at_every_hue() {
    // Fixed-index extraction relies on every ramp carrying all 30 samples.
    for hue in (0..360u16).step_by(15) {
        let model = generate_palette_model(hue, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
        for (name, ramp) in [
            ("base", &model.base_tones),
            ("accent", &model.accent_tones),
            ("surface", &model.surface_tones),
            ("error", &model.error_tones),
        ] {
            assert_eq!(ramp.len(), TONES_COUNT, "{name} ramp, hue {hue}");
        }
    }
}

#[test]
fn test_contrast_pair_indices_sit_on_opposite_halves() {
    // Every container/content pairing reads from opposite halves of the
    // 0-29 lightness ramp, so contrast holds at any hue.
    for table in [ExtractionIndices::LIGHT, ExtractionIndices::DARK] {
        for (container, content) in PaletteRole::CONTRAST_PAIRS {
            let container_index = table.index(container);
            let content_index = table.index(content);
            assert!(
                (container_index < TONES_COUNT / 2) != (content_index < TONES_COUNT / 2),
                "{container:?} ({container_index}) and {content:?} ({content_index}) \
                 share a ramp half"
            );
        }
    }
}

#[test]
fn test_contrast_pairs_resolve_content_colors() {
    let model = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    let palette = &model.light_palette;

    for (container, content) in PaletteRole::CONTRAST_PAIRS {
        let resolved = palette.content_color_for(palette.color(container));
        assert_eq!(resolved, Some(palette.color(content)));
    }

    // Unknown container color has no mapped content color.
    assert_eq!(palette.content_color_for(Color::new(1, 2, 3)), None);
}

#[test]
fn test_distinct_hues_produce_distinct_palettes() {
    let blue = generate_palette_model(210, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    let red = generate_palette_model(10, ACCENT_HUE_OFFSET, HueOffsetDirection::Down);
    assert_ne!(blue.light_palette.base, red.light_palette.base);
    // Error slots share the fixed red hue regardless of base hue.
    assert_eq!(blue.error_tones, red.error_tones);
}
