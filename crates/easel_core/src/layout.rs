//! Text placement

use crate::geometry::{clamp_dim, Rect};
use crate::state::{DrawState, TextAlign};

/// Destination rectangle for text of natural size `natural` requested at
/// `(x, y, w, h)` under the given state.
///
/// `Center` adds half the size difference on each axis, whichever of the
/// two sizes is larger. `Left` ignores `w`/`h`. Both keep the natural size
/// and apply the state's translation. Coordinates wrap on overflow.
pub fn text_rect(state: &DrawState, x: i32, y: i32, w: i32, h: i32, natural: (u32, u32)) -> Rect {
    let rw = clamp_dim(natural.0);
    let rh = clamp_dim(natural.1);
    let x = x.wrapping_add(state.offset_x);
    let y = y.wrapping_add(state.offset_y);

    match state.text_align {
        TextAlign::Center => Rect::new(
            x.wrapping_add(half_gap(rw, w)),
            y.wrapping_add(half_gap(rh, h)),
            rw,
            rh,
        ),
        TextAlign::Left => Rect::new(x, y, rw, rh),
    }
}

/// Half the distance between two extents, computed without overflow
fn half_gap(a: i32, b: i32) -> i32 {
    let gap = i64::from(a.max(b)) - i64::from(a.min(b));
    i32::try_from(gap / 2).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(align: TextAlign, ox: i32, oy: i32) -> DrawState {
        DrawState {
            text_align: align,
            offset_x: ox,
            offset_y: oy,
            ..DrawState::default()
        }
    }

    #[test]
    fn test_center_box_larger_than_text() {
        let r = text_rect(&state(TextAlign::Center, 5, 7), 10, 20, 100, 40, (30, 10));
        assert_eq!(r, Rect::new(10 + 5 + 35, 20 + 7 + 15, 30, 10));
    }

    #[test]
    fn test_center_text_larger_than_box_still_adds() {
        let r = text_rect(&state(TextAlign::Center, 0, 0), 0, 0, 10, 4, (30, 10));
        assert_eq!(r, Rect::new(10, 3, 30, 10));
    }

    #[test]
    fn test_extreme_box_does_not_overflow() {
        let r = text_rect(&state(TextAlign::Center, i32::MAX, 0), 1, 0, i32::MIN, 0, (30, 10));
        assert_eq!(r.x, i32::MIN.wrapping_add(half_gap(30, i32::MIN)));
        assert_eq!((r.w, r.h), (30, 10));
    }

    #[test]
    fn test_left_ignores_requested_size() {
        let s = state(TextAlign::Left, 3, 4);
        let a = text_rect(&s, 1, 2, 500, 500, (30, 10));
        let b = text_rect(&s, 1, 2, 0, 0, (30, 10));
        assert_eq!(a, Rect::new(4, 6, 30, 10));
        assert_eq!(a, b);
    }
}
