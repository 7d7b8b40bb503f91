use crate::color::Color;
use crate::point2d::{Axis, Point2Di};
use crate::screen::ScreenSpace;

/// Coordinate along `solve_for` of the point on the line `p0`-`p1` whose other
/// coordinate equals `at`. Rounds to the nearest pixel.
///
/// When the edge has no extent along the known axis there is no unique answer
/// and `p0`'s coordinate is returned.
pub fn interpolate_on_edge(p0: Point2Di, p1: Point2Di, solve_for: Axis, at: i32) -> i32 {
    let known = solve_for.other();
    // i64 differences: endpoints may sit anywhere in the i32 range
    let span = p1[known] as i64 - p0[known] as i64;
    if span == 0 {
        return p0[solve_for];
    }
    let t = (at as i64 - p0[known] as i64) as f64 / span as f64;
    let delta = (p1[solve_for] as i64 - p0[solve_for] as i64) as f64 * t;
    (p0[solve_for] as f64 + delta.round()) as i32
}

/// Draws a one pixel wide line, stepping once per pixel along the longer axis.
/// Pixels outside the screen are skipped. Returns the number of pixels written.
pub fn draw_line(screen: &mut ScreenSpace, p0: Point2Di, p1: Point2Di, color: Color) -> usize {
    let dx = (p1.x as i64 - p0.x as i64).abs();
    let dy = (p1.y as i64 - p0.y as i64).abs();
    let (major, minor) = if dy > dx { (Axis::Y, Axis::X) } else { (Axis::X, Axis::Y) };
    let (start, end) = if p0[major] <= p1[major] { (p0, p1) } else { (p1, p0) };

    // only the part of the major span that lies on the screen is walked
    let extent = match major {
        Axis::X => screen.width,
        Axis::Y => screen.height,
    } as i64;
    let first = start[major].max(0);
    let last = (end[major] as i64).min(extent - 1);

    let mut written = 0;
    for at in first as i64..=last {
        let at = at as i32;
        let mut p = Point2Di::default();
        p[major] = at;
        p[minor] = interpolate_on_edge(start, end, minor, at);
        if p.x >= 0 && p.y >= 0 && (p.x as u32) < screen.width && (p.y as u32) < screen.height {
            screen.set_pixel(p.x as u32, p.y as u32, color);
            written += 1;
        }
    }
    written
}

pub fn draw_triangle_outline(screen: &mut ScreenSpace, pts: [Point2Di; 3], color: Color) {
    draw_line(screen, pts[0], pts[1], color);
    draw_line(screen, pts[1], pts[2], color);
    draw_line(screen, pts[2], pts[0], color);
}
