//! Application shell - demo picker, sliders and live preview
//!
//! Each demo composes one or two shapes with the sliders bound to their
//! parameters. Parameters that animate (trapezoid inset, checkerboard
//! size, arrow thickness) are driven by `Animated` values and retarget
//! whenever a slider moves or the preview is tapped.

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::animation::{Animated, Easing};
use crate::render::{color_cycle_layers, ring_color, Canvas, GradientDirection, Layer, DEFAULT_STEPS};
use crate::settings::AppSettings;
use crate::shapes::{
    Arc, Arrow, BoxedShape, CheckerBoard, Circle, CurveParameters, Flower, InsettableShape, Rect,
    Rectangle, Shape, ShapeError, Spirograph, Trapezoid, Triangle,
};

/// Inset values a tapped trapezoid cycles through
const TRAPEZOID_INSETS: [f64; 5] = [50.0, 15.0, 85.0, 30.0, 65.0];

/// Available demos
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Demo {
    Arc,
    Triangle,
    Flower,
    ColorCyclingCircle,
    ColorCyclingRectangle,
    Trapezoid,
    CheckerBoard,
    Spirograph,
    Arrow,
}

impl Demo {
    pub fn all() -> &'static [Demo] {
        &[
            Demo::Arc,
            Demo::Triangle,
            Demo::Flower,
            Demo::ColorCyclingCircle,
            Demo::ColorCyclingRectangle,
            Demo::Trapezoid,
            Demo::CheckerBoard,
            Demo::Spirograph,
            Demo::Arrow,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Arc => "Arc",
            Demo::Triangle => "Triangle",
            Demo::Flower => "Flower",
            Demo::ColorCyclingCircle => "Color cycling circle",
            Demo::ColorCyclingRectangle => "Color cycling rectangle",
            Demo::Trapezoid => "Trapezoid",
            Demo::CheckerBoard => "Checkerboard",
            Demo::Spirograph => "Spirograph",
            Demo::Arrow => "Arrow",
        }
    }

    /// Whether tapping the preview starts an animation
    pub fn is_tappable(&self) -> bool {
        matches!(self, Demo::Trapezoid | Demo::CheckerBoard | Demo::Arrow)
    }
}

/// Slider-bound parameters of every demo
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoParams {
    // Arc
    pub arc_start: f64,
    pub arc_end: f64,
    pub arc_clockwise: bool,
    pub arc_line_width: f64,

    // Triangle
    pub triangle_line_width: f64,

    // Flower
    pub petal_offset: f64,
    pub petal_width: f64,
    pub flower_filled: bool,

    // Color cycling
    pub color_amount: f64,
    pub color_steps: usize,
    pub gradient_direction: GradientDirection,

    // Trapezoid
    pub trapezoid_inset: f64,

    // Checkerboard
    pub checker_rows: f64,
    pub checker_columns: f64,

    // Spirograph
    pub curve: CurveParameters,
    pub curve_hue: f64,

    // Arrow
    pub arrow_head: f64,
    pub arrow_shaft: f64,
    pub arrow_thickness: f64,

    // Animation
    pub animation_duration: f64,
    pub easing: Easing,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            arc_start: -90.0,
            arc_end: 90.0,
            arc_clockwise: true,
            arc_line_width: 40.0,

            triangle_line_width: 10.0,

            petal_offset: -20.0,
            petal_width: 100.0,
            flower_filled: true,

            color_amount: 0.0,
            color_steps: DEFAULT_STEPS,
            gradient_direction: GradientDirection::TopToBottom,

            trapezoid_inset: 50.0,

            checker_rows: 4.0,
            checker_columns: 4.0,

            curve: CurveParameters::default(),
            curve_hue: 0.6,

            arrow_head: 0.4,
            arrow_shaft: 0.3,
            arrow_thickness: 5.0,

            animation_duration: 1.0,
            easing: Easing::EaseInOut,
        }
    }
}

/// Main application state
pub struct DrawingApp {
    pub selected_demo: Demo,
    pub show_settings: bool,
    pub params: DemoParams,
    pub canvas: Canvas,
    pub color: egui::Color32,

    // Animated values behind the tappable demos
    trapezoid_inset: Animated,
    checker_rows: Animated,
    checker_columns: Animated,
    arrow_thickness: Animated,
    tap_count: usize,

    // Validated spirograph, rebuilt when its sliders move
    spirograph: Result<Spirograph, ShapeError>,
    pub shape_needs_update: bool,
    status: String,
}

impl DrawingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::with_params(DemoParams::default());
        AppSettings::load().apply(&mut app);
        app
    }

    /// Build the app state around `params`, without touching disk
    pub fn with_params(params: DemoParams) -> Self {
        let duration = params.animation_duration;
        let mut app = Self {
            selected_demo: Demo::Arc,
            show_settings: true,
            canvas: Canvas::new(),
            color: egui::Color32::from_rgb(30, 90, 220),
            trapezoid_inset: Animated::new(params.trapezoid_inset, duration),
            checker_rows: Animated::new(params.checker_rows, duration),
            checker_columns: Animated::new(params.checker_columns, duration),
            arrow_thickness: Animated::new(params.arrow_thickness, duration),
            tap_count: 0,
            spirograph: Spirograph::new(params.curve),
            params,
            shape_needs_update: false,
            status: String::new(),
        };
        app.sync_animations();
        app
    }

    /// Snap animated values to the current parameters
    pub fn sync_animations(&mut self) {
        let duration = self.params.animation_duration;
        let easing = self.params.easing;
        for (value, target) in [
            (&mut self.trapezoid_inset, self.params.trapezoid_inset),
            (&mut self.checker_rows, self.params.checker_rows),
            (&mut self.checker_columns, self.params.checker_columns),
            (&mut self.arrow_thickness, self.params.arrow_thickness),
        ] {
            value.duration = duration;
            value.easing = easing;
            value.set_immediate(target);
        }
    }

    /// Revalidate the spirograph after its parameters changed
    fn update_shape(&mut self) {
        self.spirograph = Spirograph::new(self.params.curve);
        match &self.spirograph {
            Ok(shape) => log::debug!(
                "Rebuilt spirograph: {} samples",
                shape.params().sample_count()
            ),
            Err(e) => log::warn!("Spirograph rejected: {}", e),
        }
        self.shape_needs_update = false;
    }

    fn is_animating(&self, now: f64) -> bool {
        [
            &self.trapezoid_inset,
            &self.checker_rows,
            &self.checker_columns,
            &self.arrow_thickness,
        ]
        .iter()
        .any(|value| value.is_animating(now))
    }

    /// React to a tap on the preview
    fn on_tap(&mut self, now: f64) {
        self.tap_count += 1;
        match self.selected_demo {
            Demo::Trapezoid => {
                let inset = TRAPEZOID_INSETS[self.tap_count % TRAPEZOID_INSETS.len()];
                self.params.trapezoid_inset = inset;
                self.trapezoid_inset.set_target(inset, now);
            }
            Demo::CheckerBoard => {
                // Alternate between the chosen size and a finer board
                let (rows, columns) = if self.tap_count % 2 == 1 {
                    (self.params.checker_rows * 2.0, self.params.checker_columns * 4.0)
                } else {
                    (self.params.checker_rows, self.params.checker_columns)
                };
                self.checker_rows.set_target(rows, now);
                self.checker_columns.set_target(columns, now);
            }
            Demo::Arrow => {
                let thick = self.params.arrow_thickness * 4.0;
                let target = if self.arrow_thickness.target() > self.params.arrow_thickness {
                    self.params.arrow_thickness
                } else {
                    thick
                };
                self.arrow_thickness.set_target(target, now);
            }
            _ => {}
        }
        log::debug!("Tapped {} (tap {})", self.selected_demo.name(), self.tap_count);
    }

    /// The shape a demo is built around, for display
    fn primary_shape(&self, now: f64) -> Option<BoxedShape> {
        let p = &self.params;
        let shape: BoxedShape = match self.selected_demo {
            Demo::Arc => Box::new(Arc::new(p.arc_start, p.arc_end)),
            Demo::Triangle => Box::new(Triangle),
            Demo::Flower => Box::new(Flower::new(p.petal_offset, p.petal_width)),
            Demo::ColorCyclingCircle => Box::new(Circle::new()),
            Demo::ColorCyclingRectangle => Box::new(Rectangle::new()),
            Demo::Trapezoid => Box::new(Trapezoid::new(self.trapezoid_inset.value(now))),
            Demo::CheckerBoard => Box::new(CheckerBoard::new(
                self.checker_rows.value(now),
                self.checker_columns.value(now),
            )),
            Demo::Spirograph => Box::new(self.spirograph.as_ref().ok()?.clone()),
            Demo::Arrow => Box::new(Arrow::new(p.arrow_head, p.arrow_shaft)),
        };
        Some(shape)
    }

    /// Layers to paint for the selected demo inside `rect`
    pub fn layers(&self, rect: Rect, now: f64) -> Vec<Layer> {
        let p = &self.params;
        match self.selected_demo {
            Demo::Arc => {
                // Stroke border: keep the whole stroke inside the rectangle
                let mut arc = Arc::new(p.arc_start, p.arc_end);
                arc.clockwise = p.arc_clockwise;
                let arc = arc.inset(p.arc_line_width / 2.0);
                vec![Layer::stroke(arc.path(rect), p.arc_line_width as f32, self.color)]
            }
            Demo::Triangle => {
                let path = Triangle.path(rect.inset(p.triangle_line_width / 2.0));
                vec![Layer::stroke(
                    path,
                    p.triangle_line_width as f32,
                    egui::Color32::RED,
                )]
            }
            Demo::Flower => {
                let path = Flower::new(p.petal_offset, p.petal_width).path(rect);
                if p.flower_filled {
                    vec![Layer::fill(
                        path,
                        egui::Color32::from_rgba_unmultiplied(220, 30, 30, 70),
                    )]
                } else {
                    vec![Layer::stroke(path, 1.0, egui::Color32::RED)]
                }
            }
            Demo::ColorCyclingCircle => color_cycle_layers(
                &Circle::new(),
                rect,
                p.color_steps,
                p.color_amount,
                GradientDirection::TopToBottom,
                2.0,
            ),
            Demo::ColorCyclingRectangle => color_cycle_layers(
                &Rectangle::new(),
                rect,
                p.color_steps,
                p.color_amount,
                p.gradient_direction,
                2.0,
            ),
            Demo::Trapezoid => {
                let trapezoid = Trapezoid::new(self.trapezoid_inset.value(now));
                vec![Layer::fill(trapezoid.path(rect.aspect_fit(1.5)), self.color)]
            }
            Demo::CheckerBoard => {
                let board = CheckerBoard::new(
                    self.checker_rows.value(now),
                    self.checker_columns.value(now),
                );
                vec![Layer::fill(board.path(rect), egui::Color32::BLACK)]
            }
            Demo::Spirograph => match &self.spirograph {
                Ok(shape) => vec![Layer::stroke(
                    shape.path(rect),
                    1.0,
                    ring_color(p.curve_hue, 1.0),
                )],
                Err(_) => Vec::new(),
            },
            Demo::Arrow => {
                let thickness = self.arrow_thickness.value(now);
                let arrow = Arrow::new(p.arrow_head, p.arrow_shaft);
                let path = arrow.path(rect.inset(thickness / 2.0).aspect_fit(0.6));
                vec![Layer::stroke(path, thickness as f32, self.color)]
            }
        }
    }

    fn settings_ui(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.heading("Demo");
        ui.separator();

        egui::ComboBox::from_label("Type")
            .selected_text(self.selected_demo.name())
            .show_ui(ui, |ui| {
                for demo in Demo::all() {
                    ui.selectable_value(&mut self.selected_demo, *demo, demo.name());
                }
            });

        ui.separator();
        ui.label("Parameters:");

        let p = &mut self.params;
        match self.selected_demo {
            Demo::Arc => {
                ui.add(egui::Slider::new(&mut p.arc_start, -360.0..=360.0).text("Start angle"));
                ui.add(egui::Slider::new(&mut p.arc_end, -360.0..=360.0).text("End angle"));
                ui.add(egui::Slider::new(&mut p.arc_line_width, 1.0..=60.0).text("Line width"));
                ui.checkbox(&mut p.arc_clockwise, "Clockwise");
            }

            Demo::Triangle => {
                ui.add(
                    egui::Slider::new(&mut p.triangle_line_width, 1.0..=40.0).text("Line width"),
                );
            }

            Demo::Flower => {
                ui.add(egui::Slider::new(&mut p.petal_offset, -40.0..=40.0).text("Offset"));
                ui.add(egui::Slider::new(&mut p.petal_width, 0.0..=100.0).text("Width"));
                ui.checkbox(&mut p.flower_filled, "Filled");
            }

            Demo::ColorCyclingCircle | Demo::ColorCyclingRectangle => {
                ui.add(egui::Slider::new(&mut p.color_amount, 0.0..=1.0).text("Amount"));
                ui.add(egui::Slider::new(&mut p.color_steps, 1..=150).text("Steps"));
                if self.selected_demo == Demo::ColorCyclingRectangle {
                    egui::ComboBox::from_label("Gradient")
                        .selected_text(p.gradient_direction.name())
                        .show_ui(ui, |ui| {
                            for direction in GradientDirection::all() {
                                ui.selectable_value(
                                    &mut p.gradient_direction,
                                    *direction,
                                    direction.name(),
                                );
                            }
                        });
                }
            }

            Demo::Trapezoid => {
                if ui
                    .add(egui::Slider::new(&mut p.trapezoid_inset, 0.0..=100.0).text("Inset"))
                    .changed()
                {
                    self.trapezoid_inset.set_target(p.trapezoid_inset, now);
                }
            }

            Demo::CheckerBoard => {
                let rows = ui.add(egui::Slider::new(&mut p.checker_rows, 1.0..=16.0).text("Rows"));
                let columns =
                    ui.add(egui::Slider::new(&mut p.checker_columns, 1.0..=16.0).text("Columns"));
                if rows.changed() || columns.changed() {
                    self.checker_rows.set_target(p.checker_rows, now);
                    self.checker_columns.set_target(p.checker_columns, now);
                }
            }

            Demo::Spirograph => {
                let curve = &mut p.curve;
                let changed = [
                    ui.add(egui::Slider::new(&mut curve.inner_radius, 0..=150).text("Inner radius")),
                    ui.add(egui::Slider::new(&mut curve.outer_radius, 0..=150).text("Outer radius")),
                    ui.add(egui::Slider::new(&mut curve.arm_distance, 0..=150).text("Distance")),
                    ui.add(egui::Slider::new(&mut curve.winding_fraction, 0.0..=1.0).text("Amount")),
                ]
                .iter()
                .any(|response| response.changed());
                if changed {
                    self.shape_needs_update = true;
                }
                ui.add(egui::Slider::new(&mut p.curve_hue, 0.0..=1.0).text("Color"));
            }

            Demo::Arrow => {
                ui.add(egui::Slider::new(&mut p.arrow_head, 0.1..=0.9).text("Head"));
                ui.add(egui::Slider::new(&mut p.arrow_shaft, 0.05..=1.0).text("Shaft"));
                if ui
                    .add(egui::Slider::new(&mut p.arrow_thickness, 1.0..=20.0).text("Thickness"))
                    .changed()
                {
                    self.arrow_thickness.set_target(p.arrow_thickness, now);
                }
            }
        }

        if self.selected_demo.is_tappable() {
            ui.small("Tap the preview to animate");
        }

        ui.separator();

        ui.collapsing("Animation", |ui| {
            let p = &mut self.params;
            let duration =
                ui.add(egui::Slider::new(&mut p.animation_duration, 0.0..=3.0).text("Duration (s)"));
            let mut easing_changed = false;
            egui::ComboBox::from_label("Easing")
                .selected_text(p.easing.name())
                .show_ui(ui, |ui| {
                    for easing in Easing::all() {
                        easing_changed |=
                            ui.selectable_value(&mut p.easing, *easing, easing.name()).changed();
                    }
                });
            if duration.changed() || easing_changed {
                self.sync_animations();
            }
        });

        ui.separator();

        ui.collapsing("Display", |ui| {
            ui.checkbox(&mut self.canvas.settings.show_grid, "Show grid");
            ui.horizontal(|ui| {
                ui.label("Color");
                ui.color_edit_button_srgba(&mut self.color);
            });
        });

        ui.separator();

        if ui.button("Save settings").clicked() {
            AppSettings::from_app(self).save();
        }
    }
}

impl eframe::App for DrawingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        if self.shape_needs_update {
            self.update_shape();
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            AppSettings::from_app(self).save();
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("drawing-rs");
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(240.0)
                .show(ctx, |ui| self.settings_ui(ui, now));
        }

        // Live preview
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut point_count = 0;
            let mut length = 0.0;

            let response = self.canvas.show(ui, |rect| {
                let layers = self.layers(rect, now);
                for layer in &layers {
                    point_count += layer.path.point_count();
                    length += layer.path.length();
                }
                layers
            });

            if response.clicked() && self.selected_demo.is_tappable() {
                self.on_tap(now);
            }

            self.status = match (self.primary_shape(now), &self.spirograph) {
                (Some(shape), _) => format!(
                    "{}: {} points, length {:.0}",
                    shape.name(),
                    point_count,
                    length
                ),
                (None, Err(e)) => format!("Spirograph: {}", e),
                (None, Ok(_)) => String::new(),
            };
        });

        if self.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
