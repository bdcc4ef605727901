//! Per-curve storage: one optional homogenized expression and a display
//! color per slot, plus the per-tick extraction over all slots.
//!
//! A slot is filled (or refilled) whenever the user edits its formula: the
//! text is parsed, simplified and homogenized in one step. A failed parse
//! reports the error to the host and leaves the slot's previous valid
//! expression untouched, so the last good curve keeps rendering while the
//! user types.

use crate::curve::marching_squares::{extract_curve, ExtractionSettings, Segment};
use crate::curve::view::ViewState;
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use log::info;
use rayon::prelude::*;

/// Display color of a curve, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Colors assigned to new slots, cycling by slot index.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color { r: 0x00, g: 0x00, b: 0x00 },
    Color { r: 0x07, g: 0x74, b: 0xa9 },
    Color { r: 0xff, g: 0x6c, b: 0x00 },
    Color { r: 0xad, g: 0x00, b: 0xad },
    Color { r: 0x75, g: 0xad, b: 0x00 },
    Color { r: 0x5d, g: 0xe8, b: 0xe4 },
];

#[derive(Clone, Debug)]
pub struct CurveSlot {
    expr: Option<Expr>,
    degree: u32,
    color: Color,
}

/// All curve slots of one viewer session.
#[derive(Clone, Debug, Default)]
pub struct CurveSet {
    slots: Vec<CurveSlot>,
}

impl CurveSet {
    pub fn new() -> Self {
        CurveSet { slots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends an empty slot with the next palette color, returning its index.
    pub fn add_slot(&mut self) -> usize {
        let index = self.slots.len();
        self.slots.push(CurveSlot {
            expr: None,
            degree: 0,
            color: DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()],
        });
        index
    }

    /// Removes a slot; the indices of later slots shift down by one. Like
    /// all mutators here, panics if the slot index is out of range; the
    /// read accessors return `Option` instead.
    pub fn delete_slot(&mut self, index: usize) {
        self.slots.remove(index);
    }

    /// Parses, simplifies and homogenizes a formula into the slot, returning
    /// the homogeneous degree. On a parse error the slot keeps its previous
    /// expression and the error is returned for the host to display.
    /// Panics if the slot index is out of range.
    pub fn update_formula(&mut self, index: usize, text: &str) -> Result<u32, ParseError> {
        let parsed = Expr::parse_expression(text)?;
        let (homogeneous, degree) = parsed.simplify().homogenize();
        info!("slot {}: {} (degree {})", index, homogeneous, degree);
        let slot = &mut self.slots[index];
        slot.expr = Some(homogeneous);
        slot.degree = degree;
        Ok(degree)
    }

    /// Clears a slot's expression without removing the slot. Panics if the
    /// slot index is out of range.
    pub fn clear_formula(&mut self, index: usize) {
        self.slots[index].expr = None;
        self.slots[index].degree = 0;
    }

    pub fn expression(&self, index: usize) -> Option<&Expr> {
        self.slots.get(index).and_then(|s| s.expr.as_ref())
    }

    pub fn degree(&self, index: usize) -> Option<u32> {
        self.slots.get(index).map(|s| s.degree)
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        self.slots.get(index).map(|s| s.color)
    }

    /// Panics if the slot index is out of range.
    pub fn set_color(&mut self, index: usize, color: Color) {
        self.slots[index].color = color;
    }

    /// Extracts all filled slots for the current view. Slots are independent
    /// pure computations over immutable trees, so they run in parallel; the
    /// per-slot segment lists keep the slot order deterministic.
    pub fn extract_all(
        &self,
        view: &ViewState,
        settings: &ExtractionSettings,
    ) -> Vec<(Color, Vec<Segment>)> {
        self.slots
            .par_iter()
            .filter_map(|slot| {
                slot.expr.as_ref().map(|expr| {
                    let f = view.evaluator(expr);
                    (slot.color, extract_curve(&f, view.domain(), settings))
                })
            })
            .collect()
    }
}
