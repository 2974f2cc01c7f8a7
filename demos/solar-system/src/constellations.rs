/// The twelve zodiac figures, as flat star patterns plus the line pairs
/// connecting them. Coordinates are in pattern-local units; placement on
/// the celestial ring happens in `scenery`.

pub struct Constellation {
    pub name: &'static str,
    /// Star positions in pattern space.
    pub stars: &'static [(f32, f32)],
    /// Index pairs into `stars` forming the figure.
    pub lines: &'static [(usize, usize)],
}

pub const ZODIAC: [Constellation; 12] = [
    Constellation {
        name: "Aries",
        stars: &[(0.0, 0.0), (1.0, 0.5), (2.0, 0.2), (2.5, -0.5)],
        lines: &[(0, 1), (1, 2), (2, 3)],
    },
    Constellation {
        name: "Taurus",
        stars: &[(0.0, 0.0), (1.0, -1.0), (2.0, -0.5), (3.0, 1.0), (4.0, 2.0), (-1.0, 2.0)],
        lines: &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 5)],
    },
    Constellation {
        name: "Gemini",
        stars: &[(0.0, 4.0), (1.5, 4.0), (0.0, 0.0), (1.5, 0.0), (0.5, 2.0), (1.0, 2.0)],
        lines: &[(0, 2), (1, 3), (0, 1), (2, 3)],
    },
    Constellation {
        name: "Cancer",
        stars: &[(0.0, 0.0), (-1.0, 1.0), (1.0, 1.0), (0.0, -1.0)],
        lines: &[(0, 1), (0, 2), (0, 3)],
    },
    Constellation {
        name: "Leo",
        stars: &[
            (0.0, 0.0),
            (0.5, 1.0),
            (1.5, 1.0),
            (2.0, 0.0),
            (2.0, -1.0),
            (-1.0, -1.0),
            (-2.0, 0.0),
        ],
        lines: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 5), (5, 6), (6, 0)],
    },
    Constellation {
        name: "Virgo",
        stars: &[(0.0, 3.0), (0.0, 0.0), (-1.5, -1.0), (1.5, -1.0), (2.0, 1.0)],
        lines: &[(0, 1), (1, 2), (1, 3), (3, 4), (4, 0)],
    },
    Constellation {
        name: "Libra",
        stars: &[(0.0, 1.0), (1.5, 0.0), (0.0, -1.0), (-1.5, 0.0)],
        lines: &[(0, 1), (1, 2), (2, 3), (3, 0)],
    },
    Constellation {
        name: "Scorpius",
        stars: &[
            (0.0, 3.0),
            (-0.5, 2.5),
            (0.0, 2.0),
            (0.0, 0.0),
            (0.5, -1.0),
            (1.5, -2.0),
            (2.5, -1.5),
        ],
        lines: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)],
    },
    Constellation {
        name: "Sagittarius",
        stars: &[
            (0.0, 0.0),
            (1.5, 0.0),
            (0.75, 1.0),
            (2.0, 0.5),
            (2.5, -0.5),
            (-0.5, -0.5),
        ],
        lines: &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 1), (0, 5), (5, 1)],
    },
    Constellation {
        name: "Capricornus",
        stars: &[(0.0, 1.0), (2.0, 1.0), (1.0, -1.0)],
        lines: &[(0, 1), (1, 2), (2, 0)],
    },
    Constellation {
        name: "Aquarius",
        stars: &[
            (0.0, 2.0),
            (-1.0, 1.0),
            (1.0, 1.0),
            (0.0, 0.0),
            (0.5, -1.0),
            (1.5, -0.5),
        ],
        lines: &[(0, 1), (0, 2), (0, 3), (3, 4), (4, 5)],
    },
    Constellation {
        name: "Pisces",
        stars: &[(0.0, 0.0), (1.5, 2.0), (-1.5, 1.5)],
        lines: &[(0, 1), (0, 2)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_figures() {
        assert_eq!(ZODIAC.len(), 12);
    }

    #[test]
    fn line_indices_stay_in_bounds() {
        for c in &ZODIAC {
            for &(a, b) in c.lines {
                assert!(a < c.stars.len(), "{}: line start {a} out of range", c.name);
                assert!(b < c.stars.len(), "{}: line end {b} out of range", c.name);
                assert_ne!(a, b, "{}: degenerate line", c.name);
            }
        }
    }

    #[test]
    fn every_figure_has_at_least_one_line() {
        for c in &ZODIAC {
            assert!(!c.lines.is_empty(), "{} has no figure", c.name);
            assert!(c.stars.len() >= 3, "{} too few stars", c.name);
        }
    }
}
