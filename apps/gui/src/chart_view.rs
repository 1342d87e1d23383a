//! Hand-painted gauge and radar renderings of the chart specs.

use std::f32::consts::PI;

use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke};
use risk_view::{BAND_STOPS, GaugeSpec, RadarSpec, RiskBand};

const BAR_COLOR: Color32 = Color32::from_rgb(139, 0, 0);
const MARKER_COLOR: Color32 = Color32::BLACK;
const GRID_COLOR: Color32 = Color32::from_gray(90);
const PATIENT_COLOR: Color32 = Color32::from_rgb(66, 133, 244);
const REFERENCE_COLOR: Color32 = Color32::from_rgb(60, 179, 113);

pub fn band_color(band: RiskBand) -> Color32 {
    match band {
        RiskBand::Low => Color32::from_rgb(144, 238, 144),
        RiskBand::Medium => Color32::from_rgb(255, 221, 0),
        RiskBand::High => Color32::from_rgb(255, 99, 71),
    }
}

/// Dial angle in radians for a 0..=100 value. 0 maps to the left end of
/// the semicircle, 100 to the right.
pub fn dial_angle(value: f64) -> f32 {
    let t = (value / 100.0).clamp(0.0, 1.0) as f32;
    PI * (1.0 - t)
}

fn point_on_dial(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    Pos2::new(center.x + radius * angle.cos(), center.y - radius * angle.sin())
}

fn stroke_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    from_value: f64,
    to_value: f64,
    stroke: Stroke,
) {
    const SEGMENTS: usize = 24;
    let mut points = Vec::with_capacity(SEGMENTS + 1);
    for i in 0..=SEGMENTS {
        let value = from_value + (to_value - from_value) * (i as f64 / SEGMENTS as f64);
        points.push(point_on_dial(center, radius, dial_angle(value)));
    }
    painter.add(egui::Shape::line(points, stroke));
}

pub fn render_gauge(ui: &mut egui::Ui, spec: &GaugeSpec) {
    let width = ui.available_width().min(380.0);
    let (rect, _response) = ui.allocate_at_least(egui::vec2(width, 180.0), Sense::hover());
    let painter = ui.painter_at(rect);

    let center = Pos2::new(rect.center().x, rect.bottom() - 28.0);
    let radius = (rect.height() - 56.0).min(rect.width() / 2.0 - 24.0);

    for (from, to, band) in BAND_STOPS {
        stroke_arc(&painter, center, radius, from, to, Stroke::new(14.0, band_color(band)));
    }

    // Needle at the bar value; the threshold tick sits on the same value.
    let needle_tip = point_on_dial(center, radius - 12.0, dial_angle(spec.value));
    painter.line_segment([center, needle_tip], Stroke::new(3.0, BAR_COLOR));
    painter.circle_filled(center, 4.0, BAR_COLOR);

    let marker_angle = dial_angle(spec.threshold);
    painter.line_segment(
        [
            point_on_dial(center, radius - 10.0, marker_angle),
            point_on_dial(center, radius + 10.0, marker_angle),
        ],
        Stroke::new(2.0, MARKER_COLOR),
    );

    let text_color = ui.visuals().strong_text_color();
    painter.text(
        Pos2::new(center.x, center.y - radius / 2.5),
        Align2::CENTER_CENTER,
        format!("{:.0}", spec.value),
        FontId::proportional(22.0),
        text_color,
    );
    painter.text(
        point_on_dial(center, radius + 16.0, dial_angle(0.0)),
        Align2::CENTER_CENTER,
        "0",
        FontId::proportional(11.0),
        text_color,
    );
    painter.text(
        point_on_dial(center, radius + 16.0, dial_angle(100.0)),
        Align2::CENTER_CENTER,
        "100",
        FontId::proportional(11.0),
        text_color,
    );
}

/// Position of axis `index` of `count` at `radius` from the center; the
/// first axis points straight up.
pub fn radar_point(center: Pos2, radius: f32, index: usize, count: usize) -> Pos2 {
    let angle = -PI / 2.0 + 2.0 * PI * index as f32 / count as f32;
    Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

fn polygon(
    center: Pos2,
    radius: f32,
    values: &[f64],
    axis_max: f64,
) -> Vec<Pos2> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let fraction = if axis_max > 0.0 { (value / axis_max) as f32 } else { 0.0 };
            radar_point(center, radius * fraction, index, values.len())
        })
        .collect()
}

pub fn render_radar(ui: &mut egui::Ui, spec: &RadarSpec) {
    let width = ui.available_width().min(380.0);
    let (rect, _response) = ui.allocate_at_least(egui::vec2(width, 300.0), Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let radius = rect.height().min(rect.width()) / 2.0 - 36.0;
    let axis_count = spec.axes.len();

    for ring in 1..=4 {
        let points: Vec<Pos2> = (0..axis_count)
            .map(|index| radar_point(center, radius * ring as f32 / 4.0, index, axis_count))
            .collect();
        painter.add(egui::Shape::closed_line(points, Stroke::new(1.0, GRID_COLOR)));
    }

    let text_color = ui.visuals().text_color();
    for (index, axis) in spec.axes.iter().enumerate() {
        painter.line_segment(
            [center, radar_point(center, radius, index, axis_count)],
            Stroke::new(1.0, GRID_COLOR),
        );
        painter.text(
            radar_point(center, radius + 20.0, index, axis_count),
            Align2::CENTER_CENTER,
            *axis,
            FontId::proportional(12.0),
            text_color,
        );
    }

    for (values, color) in [
        (&spec.patient, PATIENT_COLOR),
        (&spec.reference, REFERENCE_COLOR),
    ] {
        let points = polygon(center, radius, values.as_slice(), spec.axis_max);
        for point in &points {
            painter.circle_filled(*point, 3.0, color);
        }
        painter.add(egui::Shape::closed_line(points, Stroke::new(2.0, color)));
    }

    // Legend in the top-left corner of the plot.
    painter.circle_filled(Pos2::new(rect.left() + 10.0, rect.top() + 10.0), 4.0, PATIENT_COLOR);
    painter.text(
        Pos2::new(rect.left() + 20.0, rect.top() + 10.0),
        Align2::LEFT_CENTER,
        "Patient",
        FontId::proportional(11.0),
        text_color,
    );
    painter.circle_filled(Pos2::new(rect.left() + 10.0, rect.top() + 26.0), 4.0, REFERENCE_COLOR);
    painter.text(
        Pos2::new(rect.left() + 20.0, rect.top() + 26.0),
        Align2::LEFT_CENTER,
        "Healthy Reference",
        FontId::proportional(11.0),
        text_color,
    );
}
