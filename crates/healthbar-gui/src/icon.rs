//! HealthBar application icon generator.
//!
//! Produces a procedural icon: a miniature health bar with a gradient track,
//! a dark outline and an indicator that overflows the track. Rendered at any
//! resolution as RGBA pixel data suitable for a window icon.
use healthbar_core::model::Color;

/// Generate the icon as egui `IconData`.
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
    let track_left = s * 0.08;
    let track_right = s * 0.92;
    let track_top = s * 0.36;
    let track_bottom = s * 0.64;
    let outline = (s * 0.04).max(1.0);

    let indicator_x = track_left + (track_right - track_left) * 0.65;
    let indicator_half_w = (s * 0.035).max(0.75);
    let indicator_top = s * 0.18;
    let indicator_bottom = s * 0.82;

    let start = Color::from_rgb(0x00, 0x79, 0x6b);
    let end = Color::from_rgb(0xff, 0x40, 0x81);
    let outline_col = [0x00, 0x96, 0x88];
    let indicator_col = [0x26, 0x32, 0x38];

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Outline box. ────────────────────────────────────
            let outer = box_coverage(
                px,
                py,
                track_left - outline,
                track_top - outline,
                track_right + outline,
                track_bottom + outline,
            );
            if outer > 0.0 {
                cr = outline_col[0];
                cg = outline_col[1];
                cb = outline_col[2];
                ca = outer;
            }

            // 2. Gradient fill. ──────────────────────────────────
            let fill = box_coverage(px, py, track_left, track_top, track_right, track_bottom);
            if fill > 0.0 {
                let t = ((px - track_left) / (track_right - track_left)).clamp(0.0, 1.0);
                let track = start.lerp(end, t);
                cr = lerp_c(cr, track.r(), fill);
                cg = lerp_c(cg, track.g(), fill);
                cb = lerp_c(cb, track.b(), fill);
                ca = ca + (1.0 - ca) * fill;
            }

            // 3. Indicator. ──────────────────────────────────────
            let ind = box_coverage(
                px,
                py,
                indicator_x - indicator_half_w,
                indicator_top,
                indicator_x + indicator_half_w,
                indicator_bottom,
            );
            if ind > 0.0 {
                cr = lerp_c(cr, indicator_col[0], ind);
                cg = lerp_c(cg, indicator_col[1], ind);
                cb = lerp_c(cb, indicator_col[2], ind);
                ca = ca + (1.0 - ca) * ind;
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

/// Anti-aliased coverage of an axis-aligned box at a pixel centre.
fn box_coverage(px: f32, py: f32, left: f32, top: f32, right: f32, bottom: f32) -> f32 {
    let h = smooth_edge(left - px, 0.0).min(smooth_edge(px - right, 0.0));
    let v = smooth_edge(top - py, 0.0).min(smooth_edge(py - bottom, 0.0));
    h.min(v)
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -0.5 {
        1.0
    } else if d > 0.5 {
        0.0
    } else {
        0.5 - d
    }
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
