/// Change tags returned by every configuration setter.
///
/// Setters never call back into the host. They report what kind of work the
/// change requires and the shell coalesces the tags, so a batch of setter
/// calls made for one external event turns into at most one relayout.
use std::ops::{BitOr, BitOrAssign};

/// What the host has to redo after a configuration change.
///
/// Ordered by cost: combining two tags keeps the more expensive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Invalidation {
    /// Nothing observable changed.
    #[default]
    NoOp,
    /// Geometry is unchanged; only colours or the displayed value moved.
    NeedsRepaint,
    /// Measured size may have changed; measure again, then repaint.
    NeedsRelayout,
}

impl Invalidation {
    /// Coalesce two tags into the one that covers both.
    pub fn merge(self, other: Invalidation) -> Invalidation {
        self.max(other)
    }

    pub fn needs_repaint(self) -> bool {
        self != Invalidation::NoOp
    }

    pub fn needs_relayout(self) -> bool {
        self == Invalidation::NeedsRelayout
    }

    /// `tag` when `changed`, otherwise [`Invalidation::NoOp`].
    pub fn when(changed: bool, tag: Invalidation) -> Invalidation {
        if changed {
            tag
        } else {
            Invalidation::NoOp
        }
    }
}

impl BitOr for Invalidation {
    type Output = Invalidation;

    fn bitor(self, rhs: Invalidation) -> Invalidation {
        self.merge(rhs)
    }
}

impl BitOrAssign for Invalidation {
    fn bitor_assign(&mut self, rhs: Invalidation) {
        *self = self.merge(rhs);
    }
}
