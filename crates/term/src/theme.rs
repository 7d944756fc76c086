//! Colour themes.
//!
//! A theme only changes colours; layout and glyphs are the same for all.

use std::fmt;
use std::str::FromStr;

use crate::fb::Rgb;
use crate::types::PieceKind;

const CYAN: Rgb = Rgb::new(80, 220, 220);
const YELLOW: Rgb = Rgb::new(240, 220, 80);
const MAGENTA: Rgb = Rgb::new(200, 120, 220);
const GREEN: Rgb = Rgb::new(100, 220, 120);
const RED: Rgb = Rgb::new(220, 80, 80);
const BLUE: Rgb = Rgb::new(80, 120, 220);
const WHITE: Rgb = Rgb::new(220, 220, 220);
const AMBER: Rgb = Rgb::new(255, 176, 0);
const PHOSPHOR: Rgb = Rgb::new(0, 200, 70);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Indexed by `PieceKind::index()`.
    pub pieces: [Rgb; 7],
    pub ghost: Rgb,
    pub border: Rgb,
    pub label: Rgb,
    pub legend: Rgb,
}

impl Theme {
    pub fn piece(&self, kind: PieceKind) -> Rgb {
        self.pieces[kind.index()]
    }
}

pub const PASTEL: Theme = Theme {
    name: "PASTEL",
    pieces: [CYAN, YELLOW, MAGENTA, GREEN, RED, BLUE, WHITE],
    ghost: WHITE,
    border: WHITE,
    label: WHITE,
    legend: WHITE,
};

pub const RETRO: Theme = Theme {
    name: "RETRO",
    pieces: [CYAN, YELLOW, MAGENTA, GREEN, RED, BLUE, WHITE],
    ghost: AMBER,
    border: AMBER,
    label: AMBER,
    legend: AMBER,
};

pub const MATRIX: Theme = Theme {
    name: "MATRIX",
    pieces: [PHOSPHOR; 7],
    ghost: PHOSPHOR,
    border: PHOSPHOR,
    label: PHOSPHOR,
    legend: PHOSPHOR,
};

/// Selectable theme, cycled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Pastel,
    Retro,
    Matrix,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Pastel, ThemeKind::Retro, ThemeKind::Matrix];

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeKind::Pastel => &PASTEL,
            ThemeKind::Retro => &RETRO,
            ThemeKind::Matrix => &MATRIX,
        }
    }

    pub fn name(self) -> &'static str {
        self.theme().name
    }

    /// The following theme, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Pastel => ThemeKind::Retro,
            ThemeKind::Retro => ThemeKind::Matrix,
            ThemeKind::Matrix => ThemeKind::Pastel,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_ascii_lowercase())
    }
}

impl FromStr for ThemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown theme '{}' (expected pastel, retro or matrix)", s))
    }
}
