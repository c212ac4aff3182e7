//! The ordered stroke log.

use crate::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// All strokes on the board, back to front.
///
/// Insertion order is paint order. Strokes are only ever appended; the one
/// deletion is [`Document::clear`]. Only the last stroke may be mutated, and
/// only while its action is in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    strokes: Vec<Stroke>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke on top of everything drawn so far.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// The most recently added stroke, if any.
    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }

    /// Remove every stroke. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.strokes.len();
        self.strokes.clear();
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{StrokeColor, StrokeKind, StrokeStyle};
    use kurbo::Point;

    fn stroke(kind: StrokeKind, x: f64) -> Stroke {
        Stroke::begin(kind, Point::new(x, 0.0), StrokeStyle::new(StrokeColor::black(), 1.0))
    }

    #[test]
    fn test_document_creation() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.last().is_none());
    }

    #[test]
    fn test_push_keeps_order() {
        let mut doc = Document::new();
        doc.push(stroke(StrokeKind::FreehandDraw, 1.0));
        doc.push(stroke(StrokeKind::Circle, 2.0));
        doc.push(stroke(StrokeKind::FreehandErase, 3.0));

        let kinds: Vec<_> = doc.iter().map(Stroke::kind).collect();
        assert_eq!(
            kinds,
            vec![StrokeKind::FreehandDraw, StrokeKind::Circle, StrokeKind::FreehandErase]
        );
        assert_eq!(doc.last().map(Stroke::kind), Some(StrokeKind::FreehandErase));
    }

    #[test]
    fn test_clear() {
        let mut doc = Document::new();
        doc.push(stroke(StrokeKind::Line, 0.0));
        doc.push(stroke(StrokeKind::Line, 1.0));
        assert_eq!(doc.clear(), 2);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_clear_empty_is_noop() {
        let mut doc = Document::new();
        assert_eq!(doc.clear(), 0);
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn test_serialization_preserves_strokes() {
        let mut doc = Document::new();
        doc.push(stroke(StrokeKind::Rectangle, 4.0));
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
