//! Numify application icon generator.
//!
//! Produces a procedural icon: a rounded blue badge carrying three bars of
//! shrinking length, a long number being cut down to a short one. The icon
//! is rendered at an arbitrary resolution as RGBA pixel data suitable for
//! use as a window icon.

/// Generate a Numify icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let badge_half = s * 0.46;
    let badge_radius = s * 0.18;
    let centre = s * 0.5;

    // Bars: (left, right, centre-y) as fractions of the icon size.
    let bar_half_h = s * 0.065;
    let bar_round = bar_half_h;
    let bars: &[(f32, f32, f32)] = &[
        (0.22, 0.78, 0.30),
        (0.22, 0.60, 0.50),
        (0.22, 0.42, 0.70),
    ];

    let top = [0x89u8, 0xb4, 0xfa];
    let bottom = [0x3a, 0x5c, 0xc8];

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // 1. Badge with a vertical gradient.
            let badge_d = rounded_rect_dist(
                px - centre,
                py - centre,
                badge_half,
                badge_half,
                badge_radius,
            );
            let ca = smooth_edge(badge_d, 0.0);
            let t = (py / s).clamp(0.0, 1.0);
            let mut cr = lerp_c(top[0], bottom[0], t);
            let mut cg = lerp_c(top[1], bottom[1], t);
            let mut cb = lerp_c(top[2], bottom[2], t);

            // 2. Bars.
            for &(left, right, cy) in bars {
                let half_w = (right - left) * s * 0.5;
                let bx = (left + right) * s * 0.5;
                let d = rounded_rect_dist(px - bx, py - cy * s, half_w, bar_half_h, bar_round);
                let bar_aa = smooth_edge(d, 0.0);
                cr = lerp_c(cr, 0xff, bar_aa);
                cg = lerp_c(cg, 0xff, bar_aa);
                cb = lerp_c(cb, 0xff, bar_aa);
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Signed distance from a point (relative to the centre) to a rounded
/// rectangle with the given half extents. Negative inside.
fn rounded_rect_dist(dx: f32, dy: f32, half_w: f32, half_h: f32, radius: f32) -> f32 {
    let qx = dx.abs() - (half_w - radius);
    let qy = dy.abs() - (half_h - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_matches_size() {
        let icon = generate_icon(32);
        assert_eq!(icon.rgba.len(), 32 * 32 * 4);
        assert_eq!((icon.width, icon.height), (32, 32));
    }

    #[test]
    fn corners_are_transparent_and_centre_is_opaque() {
        let size = 64;
        let px = render_icon(size);
        let alpha = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(size - 1, size - 1), 0);
        assert_eq!(alpha(size / 2, size / 2), 255);
    }

    #[test]
    fn rounded_rect_distance_sign() {
        assert!(rounded_rect_dist(0.0, 0.0, 10.0, 10.0, 2.0) < 0.0);
        assert!(rounded_rect_dist(20.0, 0.0, 10.0, 10.0, 2.0) > 0.0);
        assert!((rounded_rect_dist(10.0, 0.0, 10.0, 10.0, 2.0)).abs() < 1e-4);
    }
}
