use floem_harmony::math::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use floem_harmony::{
    analogous_colors, complementary_color, contrast_color, is_light_color, monochromatic_colors,
    shades_of_color, tints_of_color, triadic_colors, HexColor, HslColor, RgbColor, Scheme,
    DEFAULT_COUNT,
};

/// Saturated mid-lightness colors where 8-bit quantization keeps hue stable.
const SATURATED: [&str; 6] = [
    "#9b87f5", "#3B82F6", "#10B981", "#FF0000", "#F59E0B", "#DB2777",
];

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn hue_distance(a: u16, b: u16) -> u16 {
    let d = a.abs_diff(b) % 360;
    d.min(360 - d)
}

#[test]
fn reference_color_walkthrough() {
    let rgb = hex_to_rgb("#9b87f5").unwrap();
    assert_eq!(rgb, RgbColor::new(155, 135, 245));

    let hsl = rgb_to_hsl(rgb);
    assert_eq!(hsl, HslColor::new(251, 85, 75));

    let comp = complementary_color("#9b87f5").hsl();
    assert!(
        (70..=72).contains(&comp.h),
        "complementary hue {} should be near 71",
        comp.h
    );
    assert_eq!(contrast_color("#9b87f5"), HexColor::BLACK);
}

#[test]
fn hex_codec_round_trips() {
    for v in (0..=0xFF_FFFFu32).step_by(997).chain([0, 0xFF_FFFF]) {
        let lower = format!("#{v:06x}");
        let rgb = hex_to_rgb(&lower).unwrap();
        assert_eq!(rgb_to_hex(rgb), lower);

        let upper = format!("#{v:06X}");
        assert_eq!(HexColor::parse(&upper).unwrap().to_string(), upper);
        assert_eq!(HexColor::parse(&lower).unwrap().rgb(), rgb);
    }
}

#[test]
fn hsl_codec_round_trips_within_quantization() {
    // Low saturation and extreme lightness leave too few 8-bit steps to
    // recover hue and saturation to the degree, so the sweep stays in the
    // saturated mid-lightness band.
    for h in (0..360u16).step_by(15) {
        for s in (50..=100u8).step_by(10) {
            for l in (40..=60u8).step_by(5) {
                let back = rgb_to_hsl(hsl_to_rgb(f64::from(h), f64::from(s), f64::from(l)));
                assert!(hue_distance(back.h, h) <= 1, "h {h} s {s} l {l} → {back:?}");
                assert!(back.s.abs_diff(s) <= 1, "h {h} s {s} l {l} → {back:?}");
                assert!(back.l.abs_diff(l) <= 1, "h {h} s {s} l {l} → {back:?}");
            }
        }
    }
}

#[test]
fn achromatic_round_trip_keeps_lightness() {
    for l in 0..=100u8 {
        let back = rgb_to_hsl(hsl_to_rgb(123.0, 0.0, f64::from(l)));
        assert_eq!(back.s, 0);
        assert!(back.l.abs_diff(l) <= 1, "l {l} → {}", back.l);
    }
}

#[test]
fn complementary_is_an_involution_on_hue() {
    for s in SATURATED {
        let base = hex(s);
        let twice = base.complementary().complementary();
        let (h0, h2) = (base.hsl().h, twice.hsl().h);
        assert!(hue_distance(h0, h2) <= 2, "{s}: {h0} vs {h2}");
    }
}

#[test]
fn triadic_offsets() {
    for s in SATURATED {
        let base = hex(s).hsl().h;
        let [a, b] = triadic_colors(s);
        assert!(hue_distance(a.hsl().h, (base + 120) % 360) <= 2, "{s}");
        assert!(hue_distance(b.hsl().h, (base + 240) % 360) <= 2, "{s}");
    }
}

#[test]
fn analogous_offsets() {
    for s in SATURATED {
        let base = hex(s).hsl().h;
        let [plus, minus] = analogous_colors(s);
        assert!(hue_distance(plus.hsl().h, (base + 30) % 360) <= 2, "{s}");
        assert!(hue_distance(minus.hsl().h, (base + 330) % 360) <= 2, "{s}");
    }
}

#[test]
fn monochromatic_keeps_hue_and_sorts_lightness() {
    for s in SATURATED {
        let base = hex(s).hsl();
        let colors = monochromatic_colors(s, DEFAULT_COUNT);
        assert_eq!(colors.len(), 5);
        let hsl: Vec<HslColor> = colors.iter().map(|c| c.hsl()).collect();
        for w in hsl.windows(2) {
            assert!(w[0].l <= w[1].l, "{s}: lightness not sorted {hsl:?}");
        }
        for c in &hsl {
            assert!(hue_distance(c.h, base.h) <= 3, "{s}: hue drift {c:?}");
        }
    }
}

#[test]
fn shades_and_tints_start_at_base_and_move_monotonically() {
    for s in SATURATED.iter().chain(&["#808080", "#1F1F1F"]) {
        let base = hex(s);

        let shades = shades_of_color(s, 6);
        assert_eq!(shades.len(), 6);
        assert_eq!(shades[0], base);
        for w in shades.windows(2) {
            assert!(w[0].hsl().l >= w[1].hsl().l, "{s}: shades {shades:?}");
        }

        let tints = tints_of_color(s, 6);
        assert_eq!(tints[0], base);
        for w in tints.windows(2) {
            assert!(w[0].hsl().l <= w[1].hsl().l, "{s}: tints {tints:?}");
        }
    }
}

#[test]
fn light_dark_boundary() {
    assert!(is_light_color("#FFFFFF"));
    assert!(!is_light_color("#000000"));
    assert!(!is_light_color("#808080"), "luma 128 is not light");
    assert!(is_light_color("#818181"));
}

#[test]
fn every_scheme_yields_a_palette_headed_by_or_centered_on_the_base() {
    let base = hex("#3B82F6");
    for scheme in Scheme::ALL {
        let palette = scheme.palette(base, DEFAULT_COUNT);
        assert!(!palette.is_empty(), "{scheme}");
        let originals = palette
            .swatches
            .iter()
            .filter(|s| s.label.as_deref() == Some("Original"))
            .count();
        assert_eq!(originals, 1, "{scheme} should label exactly one original");
        if scheme != Scheme::Monochromatic {
            assert_eq!(palette.swatches[0].color, base, "{scheme}");
        }
    }
}

#[test]
fn unparseable_input_never_panics() {
    for bad in ["", "#", "nope", "#12345", "#1234567", "#GGGGGG"] {
        assert_eq!(complementary_color(bad), HexColor::BLACK);
        assert_eq!(monochromatic_colors(bad, 3).len(), 3);
        assert_eq!(tints_of_color(bad, 2), vec![HexColor::WHITE; 2]);
        assert!(is_light_color(bad));
    }
}
