//! Geometry kernel - integer line and circle rasterization
//!
//! Both functions are pure and integer-only. They never fail: a degenerate line
//! and a zero radius each yield the single input point.

use arrayvec::ArrayVec;

use crate::types::Position;

/// Every cell crossed by the segment `start..=end`, ordered from `start` to `end`.
///
/// Shallow lines (|dy| < |dx|) step along x, steep ones along y. When the
/// stepping axis runs backwards the endpoints are swapped and the result is
/// reversed, so `bresenham_line(b, a)` is always `bresenham_line(a, b)` reversed.
pub fn bresenham_line(start: Position, end: Position) -> Vec<Position> {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let mut out = Vec::with_capacity(dx.max(dy) as usize + 1);

    if dy < dx {
        if start.x > end.x {
            plot_low(end, start, &mut out);
            out.reverse();
        } else {
            plot_low(start, end, &mut out);
        }
    } else if start.y > end.y {
        plot_high(end, start, &mut out);
        out.reverse();
    } else {
        plot_high(start, end, &mut out);
    }

    out
}

/// Shallow octants; requires `start.x <= end.x`.
fn plot_low(start: Position, end: Position, out: &mut Vec<Position>) {
    let dx = end.x - start.x;
    let mut dy = end.y - start.y;
    let mut yi = 1;
    if dy < 0 {
        yi = -1;
        dy = -dy;
    }
    let mut d = 2 * dy - dx;
    let mut y = start.y;

    for x in start.x..=end.x {
        out.push(Position::new(x, y));
        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }
}

/// Steep octants; requires `start.y <= end.y`.
fn plot_high(start: Position, end: Position, out: &mut Vec<Position>) {
    let mut dx = end.x - start.x;
    let dy = end.y - start.y;
    let mut xi = 1;
    if dx < 0 {
        xi = -1;
        dx = -dx;
    }
    let mut d = 2 * dx - dy;
    let mut x = start.x;

    for y in start.y..=end.y {
        out.push(Position::new(x, y));
        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }
}

/// Boundary points of the midpoint circle of `radius` around `center`.
///
/// Points come out in generation order, eight per step (see [`octant_points`]).
/// Cells on the axes and diagonals appear more than once; callers that scan
/// in order rely on that order, so duplicates are kept.
pub fn bresenham_circle(center: Position, radius: u32) -> Vec<Position> {
    if radius == 0 {
        return vec![center];
    }

    let r = radius as i32;
    let mut out = Vec::with_capacity(8 * (r as usize + 1));
    let mut x = 0;
    let mut y = r;
    let mut delta = 1 - 2 * r;

    while y >= x {
        out.extend(octant_points(center, x, y));

        let error = 2 * (delta + y) - 1;
        if delta < 0 && error <= 0 {
            x += 1;
            delta += 2 * x + 1;
            continue;
        }
        if delta > 0 && error > 0 {
            y -= 1;
            delta -= 2 * y + 1;
            continue;
        }
        x += 1;
        y -= 1;
        delta += 2 * (x - y);
    }

    out
}

/// The eight reflections of offset `(x, y)` around `center`, in emission order.
pub fn octant_points(center: Position, x: i32, y: i32) -> ArrayVec<Position, 8> {
    let mut pts = ArrayVec::new();
    pts.push(center.offset(x, y));
    pts.push(center.offset(x, -y));
    pts.push(center.offset(-x, y));
    pts.push(center.offset(-x, -y));
    pts.push(center.offset(y, x));
    pts.push(center.offset(y, -x));
    pts.push(center.offset(-y, x));
    pts.push(center.offset(-y, -x));
    pts
}
