//! The fetch-logic-store engine.
//!
//! A [`Blt`] walks the destination scan bytes of one blit. Each step reads
//! the destination byte, runs the selected Boolean function (fetching a
//! phase-aligned source byte if and only if the function references the
//! source operand), and stores the result, optionally under an edge mask.

use crate::phase::PhaseAlign;
use crate::rop::Rop2;

pub(crate) struct Blt<'d, 's> {
    store: &'d mut [u8],
    cursor: usize,
    align: PhaseAlign<'s>,
    rop: Rop2,
}

impl<'d, 's> Blt<'d, 's> {
    pub(crate) fn new(
        rop: Rop2,
        store: &'d mut [u8],
        cursor: usize,
        align: PhaseAlign<'s>,
    ) -> Self {
        Self {
            store,
            cursor,
            align,
            rop,
        }
    }

    /// Re-arms the source fetcher at the start of a scan line.
    #[inline]
    pub(crate) fn prefetch(&mut self) {
        self.align.prefetch();
    }

    /// Runs the raster operation against the current destination byte.
    ///
    /// The match keeps source evaluation lazy: arms without a `fetch` call
    /// never advance the source cursor, which the unary blit depends on.
    /// Arms with one call it exactly once.
    #[inline]
    fn fetch_logic(&mut self) -> u8 {
        let d = self.store[self.cursor];
        match self.rop {
            Rop2::Zero => 0x00,
            Rop2::DSon => !(d | self.align.fetch()),
            Rop2::DSna => d & !self.align.fetch(),
            Rop2::Sn => !self.align.fetch(),
            Rop2::SDna => self.align.fetch() & !d,
            Rop2::Dn => !d,
            Rop2::DSx => d ^ self.align.fetch(),
            Rop2::DSan => !(d & self.align.fetch()),
            Rop2::DSa => d & self.align.fetch(),
            Rop2::DSxn => !(d ^ self.align.fetch()),
            Rop2::D => d,
            Rop2::DSno => d | !self.align.fetch(),
            Rop2::S => self.align.fetch(),
            Rop2::SDno => self.align.fetch() | !d,
            Rop2::DSo => d | self.align.fetch(),
            Rop2::One => 0xFF,
        }
    }

    /// Masked fetch-logic-store: ones in `mask` select the bits written,
    /// zeros preserve the destination. Steps to the next scan byte.
    #[inline]
    pub(crate) fn fetch_logic_store_masked(&mut self, mask: u8) {
        let value = self.fetch_logic();
        let d = &mut self.store[self.cursor];
        *d = (*d & !mask) | (mask & value);
        self.cursor += 1;
    }

    /// Unmasked fetch-logic-store for the interior bytes of a scan line.
    #[inline]
    pub(crate) fn fetch_logic_store(&mut self) {
        let value = self.fetch_logic();
        self.store[self.cursor] = value;
        self.cursor += 1;
    }

    /// Applies the destination per-row stride. Never negative: the first
    /// and last touched bytes of a row both lie within the row.
    #[inline]
    pub(crate) fn advance(&mut self, stride: usize) {
        self.cursor += stride;
    }

    /// Applies the source per-row stride, which can step backwards when the
    /// shifted source window spans one more byte than the destination row.
    #[inline]
    pub(crate) fn advance_source(&mut self, stride: isize) {
        self.align.advance(stride);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blt_one(rop: Rop2, dst: u8, src: &[u8], mask: u8) -> u8 {
        let mut store = [dst];
        let align = PhaseAlign::new(src, 0, 0);
        let mut blt = Blt::new(rop, &mut store, 0, align);
        blt.prefetch();
        blt.fetch_logic_store_masked(mask);
        store[0]
    }

    #[test]
    fn truth_table() {
        let d = 0b1100_1100;
        let s = 0b1010_1010;
        let expect = [
            0x00,
            !(d | s),
            d & !s,
            !s,
            s & !d,
            !d,
            d ^ s,
            !(d & s),
            d & s,
            !(d ^ s),
            d,
            d | !s,
            s,
            s | !d,
            d | s,
            0xFF,
        ];
        for (code, want) in expect.into_iter().enumerate() {
            let rop = Rop2::from_index(code as u8).unwrap();
            assert_eq!(blt_one(rop, d, &[s], 0xFF), want, "rop {code}");
        }
    }

    #[test]
    fn mask_preserves_unselected_bits() {
        // Whiteness under mask 0x0F must leave the high nybble alone.
        assert_eq!(blt_one(Rop2::One, 0xA0, &[], 0x0F), 0xAF);
        // Copy under mask 0xF0 takes only the source's high nybble.
        assert_eq!(blt_one(Rop2::S, 0x0C, &[0x5A], 0xF0), 0x5C);
    }

    #[test]
    fn source_free_ops_do_not_fetch() {
        for rop in [Rop2::Zero, Rop2::Dn, Rop2::D, Rop2::One] {
            let mut store = [0x3C, 0x3C];
            let align = PhaseAlign::new(&[0xFF, 0xFF], 0, 0);
            let mut blt = Blt::new(rop, &mut store, 0, align);
            blt.prefetch();
            blt.fetch_logic_store_masked(0xFF);
            blt.fetch_logic_store();
            assert_eq!(blt.align.cursor(), 0, "{rop:?} touched the source");
        }
    }

    #[test]
    fn source_ops_fetch_exactly_once_per_store() {
        for code in 0..16u8 {
            let rop = Rop2::from_index(code).unwrap();
            if !rop.uses_source() {
                continue;
            }
            let mut store = [0u8; 3];
            let align = PhaseAlign::new(&[0x11, 0x22, 0x33], 0, 0);
            let mut blt = Blt::new(rop, &mut store, 0, align);
            for step in 1..=3 {
                blt.fetch_logic_store();
                assert_eq!(blt.align.cursor(), step, "rop {code}");
            }
        }
    }

    #[test]
    fn store_reads_destination_before_writing() {
        // DSx with a masked store: the preserved bits must come from the
        // original destination, not the rop result.
        let out = blt_one(Rop2::DSx, 0xFF, &[0xFF], 0x0F);
        assert_eq!(out, 0xF0);
    }
}
