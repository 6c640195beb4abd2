//! Named schemes and labelled palettes built from the harmony generators.

use std::fmt;

use crate::color::HexColor;

/// Which harmony a palette is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    #[default]
    Complementary,
    Analogous,
    Triadic,
    Monochromatic,
    Shades,
    Tints,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Monochromatic,
        Self::Shades,
        Self::Tints,
    ];

    /// Build the labelled palette for `base`.
    ///
    /// `count` only affects monochromatic, shades and tints.
    pub fn palette(self, base: HexColor, count: usize) -> Palette {
        let swatches = match self {
            Self::Complementary => vec![
                Swatch::labelled(base, "Original"),
                Swatch::labelled(base.complementary(), "Complementary"),
            ],
            Self::Analogous => with_original(base, base.analogous(), "Analogous"),
            Self::Triadic => with_original(base, base.triadic(), "Triadic"),
            Self::Monochromatic => {
                let colors = base.monochromatic(count);
                let middle = colors.len() / 2;
                colors
                    .into_iter()
                    .enumerate()
                    .map(|(i, color)| {
                        if i == middle {
                            Swatch::labelled(color, "Original")
                        } else {
                            Swatch::plain(color)
                        }
                    })
                    .collect()
            }
            Self::Shades => numbered(base.shades(count), "Shade"),
            Self::Tints => numbered(base.tints(count), "Tint"),
        };
        Palette {
            scheme: self,
            swatches,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Monochromatic => "Monochromatic",
            Self::Shades => "Shades",
            Self::Tints => "Tints",
        };
        f.write_str(name)
    }
}

/// One color with an optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub color: HexColor,
    pub label: Option<String>,
}

impl Swatch {
    pub fn plain(color: HexColor) -> Self {
        Self { color, label: None }
    }

    pub fn labelled(color: HexColor, label: impl Into<String>) -> Self {
        Self {
            color,
            label: Some(label.into()),
        }
    }
}

/// An ordered, labelled list of swatches for one scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub scheme: Scheme,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// The bare colors, in order.
    pub fn colors(&self) -> Vec<HexColor> {
        self.swatches.iter().map(|s| s.color).collect()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

fn with_original(base: HexColor, derived: [HexColor; 2], name: &str) -> Vec<Swatch> {
    std::iter::once(Swatch::labelled(base, "Original"))
        .chain(
            derived
                .iter()
                .enumerate()
                .map(|(i, &c)| Swatch::labelled(c, format!("{name} {}", i + 1))),
        )
        .collect()
}

fn numbered(colors: Vec<HexColor>, name: &str) -> Vec<Swatch> {
    colors
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            if i == 0 {
                Swatch::labelled(color, "Original")
            } else {
                Swatch::labelled(color, format!("{name} {i}"))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> HexColor {
        HexColor::parse("#9b87f5").unwrap()
    }

    fn labels(p: &Palette) -> Vec<Option<&str>> {
        p.swatches.iter().map(|s| s.label.as_deref()).collect()
    }

    #[test]
    fn complementary_palette() {
        let p = Scheme::Complementary.palette(base(), 5);
        assert_eq!(labels(&p), vec![Some("Original"), Some("Complementary")]);
        assert_eq!(p.colors(), vec![base(), base().complementary()]);
    }

    #[test]
    fn triadic_and_analogous_number_their_entries() {
        let t = Scheme::Triadic.palette(base(), 5);
        assert_eq!(
            labels(&t),
            vec![Some("Original"), Some("Triadic 1"), Some("Triadic 2")]
        );
        let a = Scheme::Analogous.palette(base(), 5);
        assert_eq!(a.colors()[1..], base().analogous());
    }

    #[test]
    fn monochromatic_labels_the_midpoint() {
        let p = Scheme::Monochromatic.palette(base(), 5);
        assert_eq!(
            labels(&p),
            vec![None, None, Some("Original"), None, None]
        );
        let even = Scheme::Monochromatic.palette(base(), 4);
        assert_eq!(even.swatches[2].label.as_deref(), Some("Original"));
    }

    #[test]
    fn shades_and_tints_keep_count() {
        let shades = Scheme::Shades.palette(base(), 7);
        assert_eq!(shades.len(), 7);
        assert_eq!(shades.swatches[0].color, base());
        assert_eq!(shades.swatches[6].label.as_deref(), Some("Shade 6"));
        let tints = Scheme::Tints.palette(base(), 3);
        assert_eq!(labels(&tints), vec![Some("Original"), Some("Tint 1"), Some("Tint 2")]);
    }

    #[test]
    fn empty_palette() {
        assert!(Scheme::Tints.palette(base(), 0).is_empty());
        assert!(Scheme::Monochromatic.palette(base(), 0).is_empty());
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Scheme::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["Complementary", "Analogous", "Triadic", "Monochromatic", "Shades", "Tints"]
        );
    }
}
