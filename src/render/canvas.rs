//! Canvas widget - paints shape paths with egui
//!
//! Shapes produce geometry in screen space (Y down); this widget decides
//! where the drawing area sits, then strokes or fills every layer.
//!
//! ## Paints
//!
//! - `Stroke`: outline every subpath
//! - `Fill`: fill every closed subpath, which must be convex
//! - `Gradient`: outline with a hue whose brightness fades across the
//!   drawing area

use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};

use super::palette::{gradient_brightness, ring_color, GradientDirection};
use crate::shapes::{Path, Point, Polyline, Rect};

/// Longest piece a gradient stroke is split into, in pixels
const GRADIENT_PIECE: f64 = 4.0;

/// How a layer is painted
#[derive(Clone, Debug)]
pub enum Paint {
    Stroke { width: f32, color: Color32 },
    Fill { color: Color32 },
    Gradient {
        width: f32,
        hue: f64,
        direction: GradientDirection,
    },
}

/// A path together with its paint
#[derive(Clone, Debug)]
pub struct Layer {
    pub path: Path,
    pub paint: Paint,
}

impl Layer {
    pub fn stroke(path: Path, width: f32, color: Color32) -> Self {
        Self {
            path,
            paint: Paint::Stroke { width, color },
        }
    }

    pub fn fill(path: Path, color: Color32) -> Self {
        Self {
            path,
            paint: Paint::Fill { color },
        }
    }
}

/// Display settings for the canvas
#[derive(Clone)]
pub struct CanvasSettings {
    /// Background color
    pub background: Color32,

    /// Whether to draw a grid behind the shapes
    pub show_grid: bool,

    /// Gap between the widget edge and the drawing area
    pub padding: f32,

    /// Upper bound on the widget's side length
    pub max_side: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 250),
            show_grid: false,
            padding: 20.0,
            max_side: 600.0,
        }
    }
}

/// Square drawing widget
pub struct Canvas {
    pub settings: CanvasSettings,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with default settings
    pub fn new() -> Self {
        Self {
            settings: CanvasSettings::default(),
        }
    }

    /// Draw the canvas
    ///
    /// `build` receives the drawing area in screen coordinates and
    /// returns the layers to paint, back to front. The response senses
    /// clicks so demos can react to taps.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        build: impl FnOnce(Rect) -> Vec<Layer>,
    ) -> egui::Response {
        let available = ui.available_size();
        let side = available.x.min(available.y).min(self.settings.max_side).max(1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), egui::Sense::click());
        let screen = response.rect;

        painter.rect_filled(screen, 4.0, self.settings.background);

        if self.settings.show_grid {
            Self::draw_grid(&painter, screen);
        }

        let area = screen.shrink(self.settings.padding);
        let rect = Rect::new(
            area.left() as f64,
            area.top() as f64,
            area.width() as f64,
            area.height() as f64,
        );

        for layer in build(rect) {
            Self::draw_layer(&painter, rect, &layer);
        }

        response
    }

    /// Draw the grid (10 divisions)
    fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
        let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(0, 0, 0, 40));

        for i in 0..=10 {
            let t = i as f32 / 10.0;

            let x = rect.left() + t * rect.width();
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);

            let y = rect.top() + t * rect.height();
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        }
    }

    fn draw_layer(painter: &egui::Painter, rect: Rect, layer: &Layer) {
        for subpath in layer.path.subpaths() {
            match &layer.paint {
                Paint::Stroke { width, color } => {
                    Self::stroke_subpath(painter, subpath, Stroke::new(*width, *color));
                }
                Paint::Fill { color } => {
                    if subpath.is_closed() && subpath.len() >= 3 {
                        painter.add(egui::Shape::convex_polygon(
                            to_screen(subpath.points()),
                            *color,
                            Stroke::NONE,
                        ));
                    }
                }
                Paint::Gradient {
                    width,
                    hue,
                    direction,
                } => {
                    Self::gradient_subpath(painter, rect, subpath, *width, *hue, *direction);
                }
            }
        }
    }

    fn stroke_subpath(painter: &egui::Painter, subpath: &Polyline, stroke: Stroke) {
        let points = to_screen(subpath.points());
        match points.len() {
            0 => {}
            1 => {
                painter.circle_filled(points[0], stroke.width / 2.0, stroke.color);
            }
            _ if subpath.is_closed() => {
                painter.add(egui::Shape::closed_line(points, stroke));
            }
            _ => {
                painter.add(egui::Shape::line(points, stroke));
            }
        }
    }

    /// Stroke a subpath piece by piece, coloring each piece by where it sits
    fn gradient_subpath(
        painter: &egui::Painter,
        rect: Rect,
        subpath: &Polyline,
        width: f32,
        hue: f64,
        direction: GradientDirection,
    ) {
        for (start, end, brightness) in gradient_pieces(rect, subpath, direction) {
            let stroke = Stroke::new(width, ring_color(hue, brightness));
            painter.line_segment([to_pos(&start), to_pos(&end)], stroke);
        }
    }
}

/// Split a subpath into pieces no longer than `GRADIENT_PIECE`
///
/// Each piece carries the brightness at its midpoint. Closed subpaths get
/// pieces for the segment from the last point back to the first.
fn gradient_pieces(
    rect: Rect,
    subpath: &Polyline,
    direction: GradientDirection,
) -> Vec<(Point, Point, f32)> {
    let points = subpath.points();
    let closing = match (subpath.is_closed(), points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 2 => Some([*last, *first]),
        _ => None,
    };

    let segments = points
        .windows(2)
        .map(|w| [w[0], w[1]])
        .chain(closing);

    let mut pieces = Vec::new();
    for [a, b] in segments {
        let count = (nalgebra::distance(&a, &b) / GRADIENT_PIECE).ceil().max(1.0) as usize;
        for i in 0..count {
            let start = a + (b - a) * (i as f64 / count as f64);
            let end = a + (b - a) * ((i + 1) as f64 / count as f64);
            let mid = nalgebra::center(&start, &end);
            pieces.push((start, end, gradient_brightness(direction.fraction(rect, mid.x, mid.y))));
        }
    }
    pieces
}

fn to_pos(p: &Point) -> Pos2 {
    Pos2::new(p.x as f32, p.y as f32)
}

fn to_screen(points: &[Point]) -> Vec<Pos2> {
    points.iter().map(to_pos).collect()
}
