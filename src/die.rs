//! Die catalog and roll logic.
//!
//! Each die is described by a `DieSpec`: how many sides, whether results
//! count from zero, an optional symbol set replacing numbers, and the
//! backdrop polygon drawn behind the result.

use crate::rng::RandomSource;
use core::fmt;
use heapless::String;

/// One die the gadget can roll. Immutable; lives in the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DieSpec {
    sides: u16,
    zero_indexed: bool,
    symbols: Option<&'static [&'static str]>,
    polygon_sides: u8,
    base_rotation_deg: u16,
}

impl DieSpec {
    /// Construct a validated spec. The catalog is `const`, so a bad entry
    /// (symbol list length != sides, zero sides, degenerate polygon) fails
    /// the build rather than a roll at runtime.
    pub const fn new(
        sides: u16,
        zero_indexed: bool,
        symbols: Option<&'static [&'static str]>,
        polygon_sides: u8,
        base_rotation_deg: u16,
    ) -> Self {
        assert!(sides > 0, "a die needs at least one side");
        assert!(polygon_sides >= 3, "backdrop polygon needs at least 3 sides");
        assert!(base_rotation_deg < 360);
        if let Some(list) = symbols {
            assert!(
                list.len() == sides as usize,
                "symbol list length must equal side count"
            );
        }
        Self {
            sides,
            zero_indexed,
            symbols,
            polygon_sides,
            base_rotation_deg,
        }
    }

    pub fn sides(&self) -> u16 {
        self.sides
    }

    pub fn zero_indexed(&self) -> bool {
        self.zero_indexed
    }

    pub fn symbols(&self) -> Option<&'static [&'static str]> {
        self.symbols
    }

    pub fn polygon_sides(&self) -> u8 {
        self.polygon_sides
    }

    pub fn base_rotation_deg(&self) -> u16 {
        self.base_rotation_deg
    }

    /// Roll this die once.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Roll {
        let n = rng.uniform(self.sides as u32) as u16;
        if let Some(list) = self.symbols {
            Roll::Symbol(list[(n - 1) as usize])
        } else if self.zero_indexed {
            Roll::Number(n - 1)
        } else {
            Roll::Number(n)
        }
    }
}

/// Result of a single roll; stable until the next draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Roll {
    Number(u16),
    Symbol(&'static str),
}

impl Roll {
    /// Render for the die glyph. Capacity fits three digits or a symbol.
    pub fn label(&self) -> String<4> {
        let mut s = String::new();
        let _ = fmt::Write::write_fmt(&mut s, format_args!("{}", self));
        s
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roll::Number(n) => write!(f, "{}", n),
            Roll::Symbol(sym) => f.write_str(sym),
        }
    }
}

/// The dice this gadget offers, cycled with the DIE button.
pub const DICE: [DieSpec; 5] = [
    DieSpec::new(3, false, Some(&["-", "O", "+"]), 3, 0),
    DieSpec::new(6, false, None, 4, 45),
    DieSpec::new(10, true, None, 5, 54), // shows 0-9, not 1-10
    DieSpec::new(20, false, None, 6, 0),
    DieSpec::new(100, true, None, 10, 0),
];

/// Wrap-around step to the next die in the catalog.
pub fn next_die_index(index: u8) -> u8 {
    ((index as usize + 1) % DICE.len()) as u8
}
