//! Drawing utilities for the flow canvas.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

/// Draw a background grid that scrolls with `pan`.
pub fn draw_grid(painter: &egui::Painter, rect: Rect, pan: Vec2, color: Color32, spacing: f32) {
    if spacing < 4.0 {
        return;
    }
    let start_x = rect.min.x + pan.x.rem_euclid(spacing);
    let start_y = rect.min.y + pan.y.rem_euclid(spacing);

    let mut x = start_x;
    while x < rect.max.x {
        painter.line_segment(
            [Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)],
            Stroke::new(1.0, color),
        );
        x += spacing;
    }

    let mut y = start_y;
    while y < rect.max.y {
        painter.line_segment(
            [Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)],
            Stroke::new(1.0, color),
        );
        y += spacing;
    }
}

/// Draw a flattened curve as a polyline.
pub fn draw_polyline(painter: &egui::Painter, points: Vec<Pos2>, color: Color32, width: f32) {
    if points.len() < 2 {
        return;
    }
    painter.add(egui::Shape::line(points, Stroke::new(width, color)));
}
