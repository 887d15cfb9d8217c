//! Raster operation codes.
//!
//! A binary raster operation is a Boolean function of two bits, destination
//! `D` and source `S`, applied in parallel to the 8 bit-lanes of a scan
//! byte. The sixteen possible functions are named in reverse Polish
//! notation: operands first (`D`, then `S`), then the operators: `a` AND,
//! `o` OR, `x` XOR, `n` NOT. `DSon` therefore reads "D OR S, then NOT".

use crate::error::Error;

/// Binary raster operation: one of the sixteen Boolean functions of
/// destination and source.
///
/// The discriminant is the conventional raster-op index, so `Rop2::DSx as
/// u8` is 6 and [`Rop2::from_index`] recovers the variant from a numeric
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rop2 {
    /// All zeros (blackness).
    Zero = 0,
    /// `!(D | S)`
    DSon = 1,
    /// `D & !S`
    DSna = 2,
    /// `!S`
    Sn = 3,
    /// `S & !D`
    SDna = 4,
    /// `!D`
    Dn = 5,
    /// `D ^ S`
    DSx = 6,
    /// `!(D & S)`
    DSan = 7,
    /// `D & S`
    DSa = 8,
    /// `!(D ^ S)`
    DSxn = 9,
    /// `D`, leaving the destination unchanged.
    D = 10,
    /// `D | !S`
    DSno = 11,
    /// `S`, a plain copy.
    S = 12,
    /// `S | !D`
    SDno = 13,
    /// `D | S`
    DSo = 14,
    /// All ones (whiteness).
    One = 15,
}

impl Rop2 {
    pub const NOT_SRC_ERASE: Rop2 = Rop2::DSon;
    pub const NOT_SRC_COPY: Rop2 = Rop2::Sn;
    pub const SRC_ERASE: Rop2 = Rop2::SDna;
    pub const DST_INVERT: Rop2 = Rop2::Dn;
    pub const SRC_INVERT: Rop2 = Rop2::DSx;
    pub const SRC_AND: Rop2 = Rop2::DSa;
    pub const MERGE_PAINT: Rop2 = Rop2::DSno;
    pub const SRC_COPY: Rop2 = Rop2::S;
    pub const SRC_PAINT: Rop2 = Rop2::DSo;
    pub const BLACKNESS: Rop2 = Rop2::Zero;
    pub const WHITENESS: Rop2 = Rop2::One;

    /// The conventional 0..=15 raster-op index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Decodes a numeric raster-op code, `None` if outside 0..=15.
    pub const fn from_index(index: u8) -> Option<Rop2> {
        Some(match index {
            0 => Rop2::Zero,
            1 => Rop2::DSon,
            2 => Rop2::DSna,
            3 => Rop2::Sn,
            4 => Rop2::SDna,
            5 => Rop2::Dn,
            6 => Rop2::DSx,
            7 => Rop2::DSan,
            8 => Rop2::DSa,
            9 => Rop2::DSxn,
            10 => Rop2::D,
            11 => Rop2::DSno,
            12 => Rop2::S,
            13 => Rop2::SDno,
            14 => Rop2::DSo,
            15 => Rop2::One,
            _ => return None,
        })
    }

    /// Whether the Boolean function references the source operand.
    ///
    /// The blit dispatcher fetches source bytes only when the operation
    /// evaluates `S`; the four source-free operations (`Zero`, `Dn`, `D`,
    /// `One`) never touch the source. The unary blit relies on this to make
    /// destination-as-source aliasing safe.
    #[inline]
    pub const fn uses_source(self) -> bool {
        !matches!(self, Rop2::Zero | Rop2::Dn | Rop2::D | Rop2::One)
    }
}

impl TryFrom<u8> for Rop2 {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        Rop2::from_index(code).ok_or(Error::InvalidRop { code })
    }
}

/// Unary raster operation: a Boolean function of the destination alone.
///
/// The unary set is a strict subset of [`Rop2`]; [`Rop1::to_rop2`] is the
/// explicit embedding used by the unary blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rop1 {
    Blackness,
    DstInvert,
    Whiteness,
}

impl Rop1 {
    /// The equivalent binary operation. All three images are source-free.
    #[inline]
    pub const fn to_rop2(self) -> Rop2 {
        match self {
            Rop1::Blackness => Rop2::Zero,
            Rop1::DstInvert => Rop2::Dn,
            Rop1::Whiteness => Rop2::One,
        }
    }
}

impl From<Rop1> for Rop2 {
    fn from(rop: Rop1) -> Rop2 {
        rop.to_rop2()
    }
}
