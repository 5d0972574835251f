/// Plain floating-point geometry shared by measurement and drawing.
///
/// Coordinates are in the host's logical units with the origin at the
/// widget's top-left corner and y growing downwards.

/// Padding applied when the host reports zero (or negative) padding on an
/// edge, so the stroke and indicator are never clipped by the view bounds.
pub const EXTRA_PADDING: f32 = 10.0;

/// Axis-aligned rectangle stored as its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::from_ltrb(0.0, 0.0, 0.0, 0.0);

    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Shrink every edge inwards by `amount`.
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::from_ltrb(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    /// True when the rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }
}

/// Resolved widget size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Host-provided padding on each edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Padding actually used for layout: any edge that is not strictly
    /// positive becomes [`EXTRA_PADDING`].
    pub fn effective(&self) -> Padding {
        let edge = |v: f32| if v > 0.0 { v } else { EXTRA_PADDING };
        Padding::new(
            edge(self.left),
            edge(self.top),
            edge(self.right),
            edge(self.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding_becomes_extra_padding() {
        let p = Padding::new(0.0, 4.0, -2.0, 0.0).effective();
        assert_eq!(p, Padding::new(EXTRA_PADDING, 4.0, EXTRA_PADDING, EXTRA_PADDING));
    }

    #[test]
    fn test_rect_inset() {
        let r = Rect::from_ltrb(10.0, 20.0, 110.0, 60.0).inset(2.0);
        assert_eq!(r, Rect::from_ltrb(12.0, 22.0, 108.0, 58.0));
        assert_eq!(r.width(), 96.0);
        assert_eq!(r.center_y(), 40.0);
    }

    #[test]
    fn test_empty_rect() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::from_ltrb(5.0, 0.0, 4.0, 10.0).is_empty());
        assert!(!Rect::from_ltrb(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
