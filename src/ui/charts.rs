//! Radar chart and word cloud
//!
//! Both are plain data models built by the controller from a prediction,
//! plus painters that draw them with the egui painter. The word cloud layout
//! is a pure function so it can be tested without a GPU context.

use crate::constants::{CATEGORY_LABELS, CHART_MAX, WORD_CLOUD_WEIGHT, WORD_CLOUD_WEIGHT_FACTOR};
use crate::theme::Palette;
use egui::{pos2, vec2, Color32, Pos2, Rect, Stroke, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

// =============================================================================
// RADAR CHART
// =============================================================================

/// Six-axis chart of the per-category scores, on a 0..=100 scale
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    id: u64,
    values: [f32; 6],
}

impl RadarChart {
    pub fn new(id: u64, scores: &[f64; 6]) -> Self {
        Self {
            id,
            values: scores.map(|s| ((s * 100.0) as f32).clamp(0.0, CHART_MAX)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn values(&self) -> &[f32; 6] {
        &self.values
    }

    pub fn labels(&self) -> &'static [&'static str; 6] {
        &CATEGORY_LABELS
    }

    /// Direction of axis `i`, starting straight up and going clockwise
    fn axis(i: usize) -> Vec2 {
        let angle = -FRAC_PI_2 + i as f32 * TAU / 6.0;
        vec2(angle.cos(), angle.sin())
    }

    /// Vertex of each data point for a chart centred at `center`
    pub fn points(&self, center: Pos2, radius: f32) -> Vec<Pos2> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| center + Self::axis(i) * radius * (v / CHART_MAX))
            .collect()
    }
}

pub fn paint_radar(ui: &mut egui::Ui, chart: &RadarChart, palette: &Palette, size: f32) {
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    let center = rect.center();
    // Leave room for the axis labels
    let radius = size * 0.32;
    let grid = Stroke::new(1.0, palette.border);

    // Concentric grid rings at 20, 40, .. 100
    for step in 1..=5 {
        let r = radius * step as f32 / 5.0;
        let ring: Vec<Pos2> = (0..6).map(|i| center + RadarChart::axis(i) * r).collect();
        painter.add(egui::Shape::closed_line(ring, grid));
    }

    for (i, label) in chart.labels().iter().enumerate() {
        let dir = RadarChart::axis(i);
        painter.line_segment([center, center + dir * radius], grid);
        let anchor = if dir.x > 0.2 {
            egui::Align2::LEFT_CENTER
        } else if dir.x < -0.2 {
            egui::Align2::RIGHT_CENTER
        } else if dir.y < 0.0 {
            egui::Align2::CENTER_BOTTOM
        } else {
            egui::Align2::CENTER_TOP
        };
        painter.text(
            center + dir * (radius + 6.0),
            anchor,
            *label,
            egui::FontId::proportional(11.0),
            palette.text_muted,
        );
    }

    // Fill as a triangle fan so concave shapes render correctly
    let points = chart.points(center, radius);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, palette.chart_fill);
    for p in &points {
        mesh.colored_vertex(*p, palette.chart_fill);
    }
    for i in 0..points.len() as u32 {
        let next = (i + 1) % points.len() as u32;
        mesh.add_triangle(0, i + 1, next + 1);
    }
    painter.add(egui::Shape::mesh(mesh));
    painter.add(egui::Shape::closed_line(
        points.clone(),
        Stroke::new(1.0, palette.chart_line),
    ));
    for p in &points {
        painter.circle_filled(*p, 2.5, palette.chart_line);
    }

    response.on_hover_ui(|ui| {
        for (label, value) in chart.labels().iter().zip(chart.values()) {
            ui.label(format!("{}: {:.1}", label, value));
        }
    });
}

// =============================================================================
// WORD CLOUD
// =============================================================================

const MIN_FONT: f32 = 10.0;
const SHRINK: f32 = 0.8;
const WORD_PADDING: f32 = 2.0;

/// Explanation keywords, deduplicated in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloud {
    words: Vec<String>,
}

impl WordCloud {
    pub fn new(keywords: &[String]) -> Self {
        let mut words: Vec<String> = Vec::with_capacity(keywords.len());
        for word in keywords.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
            if !words.iter().any(|w| w == word) {
                words.push(word.to_string());
            }
        }
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    /// Relative to the canvas origin
    pub rect: Rect,
    pub font_size: f32,
}

/// Place words on a spiral around the canvas centre, shrinking the font until
/// all of them fit or the minimum size is reached. Words that still do not fit
/// are left out.
pub fn layout_words(
    words: &[String],
    canvas: Vec2,
    measure: impl Fn(&str, f32) -> Vec2,
) -> Vec<PlacedWord> {
    let mut font_size = WORD_CLOUD_WEIGHT * WORD_CLOUD_WEIGHT_FACTOR;
    loop {
        let placed = try_layout(words, canvas, font_size, &measure);
        if placed.len() == words.len() || font_size <= MIN_FONT {
            return placed;
        }
        font_size = (font_size * SHRINK).max(MIN_FONT);
    }
}

fn try_layout(
    words: &[String],
    canvas: Vec2,
    font_size: f32,
    measure: &impl Fn(&str, f32) -> Vec2,
) -> Vec<PlacedWord> {
    let bounds = Rect::from_min_size(Pos2::ZERO, canvas);
    let center = bounds.center();
    let max_radius = canvas.length() / 2.0;
    let mut placed: Vec<PlacedWord> = Vec::with_capacity(words.len());

    for word in words {
        let size = measure(word, font_size);
        let mut t = 0.0_f32;
        loop {
            let r = 2.0 * t;
            if r > max_radius {
                break;
            }
            // Wider than tall, like the canvas
            let offset = vec2(r * t.cos(), r * 0.6 * t.sin());
            let rect = Rect::from_center_size(center + offset, size);
            let padded = rect.expand(WORD_PADDING);
            if bounds.contains_rect(rect) && !placed.iter().any(|p| p.rect.intersects(padded)) {
                placed.push(PlacedWord {
                    text: word.clone(),
                    rect,
                    font_size,
                });
                break;
            }
            t += 0.1;
        }
    }
    placed
}

pub fn paint_word_cloud(ui: &mut egui::Ui, cloud: &WordCloud, palette: &Palette, size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    let color = palette.word_cloud;
    let placed = ui.fonts(|fonts| {
        layout_words(cloud.words(), size, |text, font_size| {
            fonts
                .layout_no_wrap(text.to_string(), egui::FontId::proportional(font_size), color)
                .size()
        })
    });
    for word in placed {
        painter.text(
            pos2(rect.min.x + word.rect.center().x, rect.min.y + word.rect.center().y),
            egui::Align2::CENTER_CENTER,
            &word.text,
            egui::FontId::proportional(word.font_size),
            color,
        );
    }
}

pub fn paint_placeholder(ui: &mut egui::Ui, text: &str, color: Color32, size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(12.0),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(text: &str, font_size: f32) -> Vec2 {
        vec2(text.chars().count() as f32 * font_size * 0.55, font_size * 1.2)
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn radar_scales_scores_to_hundred() {
        let chart = RadarChart::new(1, &[0.9, 0.1, 0.2, 0.05, 0.8, 0.1]);
        let values = chart.values();
        assert_eq!(values.len(), 6);
        assert!((values[0] - 90.0).abs() < 1e-4);
        assert!((values[3] - 5.0).abs() < 1e-4);
    }

    #[test]
    fn radar_clamps_out_of_range_scores() {
        let chart = RadarChart::new(1, &[1.5, -0.2, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(chart.values()[0], CHART_MAX);
        assert_eq!(chart.values()[1], 0.0);
    }

    #[test]
    fn radar_points_lie_on_their_axes() {
        let chart = RadarChart::new(1, &[1.0, 0.5, 0.0, 0.0, 0.0, 0.0]);
        let center = pos2(100.0, 100.0);
        let points = chart.points(center, 50.0);
        assert_eq!(points.len(), 6);
        // First axis points straight up
        assert!((points[0].x - 100.0).abs() < 1e-3);
        assert!((points[0].y - 50.0).abs() < 1e-3);
        assert!(((points[1] - center).length() - 25.0).abs() < 1e-3);
        assert_eq!(points[2], center);
    }

    #[test]
    fn word_cloud_dedups_and_drops_blanks() {
        let cloud = WordCloud::new(&words(&["stupid", " ", "idiot", "stupid"]));
        assert_eq!(cloud.words(), &["stupid".to_string(), "idiot".to_string()]);
    }

    #[test]
    fn layout_keeps_words_inside_and_apart() {
        let list = words(&["stupid", "idiot", "hate", "threat", "obscene"]);
        let canvas = vec2(320.0, 200.0);
        let placed = layout_words(&list, canvas, estimate);
        assert_eq!(placed.len(), list.len());

        let bounds = Rect::from_min_size(Pos2::ZERO, canvas);
        for (i, a) in placed.iter().enumerate() {
            assert!(bounds.contains_rect(a.rect), "{} escapes the canvas", a.text);
            for b in &placed[i + 1..] {
                assert!(!a.rect.intersects(b.rect), "{} overlaps {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn layout_shrinks_font_to_fit() {
        let placed = layout_words(&words(&["wonderful"]), vec2(200.0, 80.0), estimate);
        assert_eq!(placed.len(), 1);
        assert!(placed[0].font_size < WORD_CLOUD_WEIGHT * WORD_CLOUD_WEIGHT_FACTOR);
    }

    #[test]
    fn layout_drops_words_that_never_fit() {
        let placed = layout_words(&words(&["x"]), vec2(4.0, 4.0), estimate);
        assert!(placed.is_empty());
    }

    #[test]
    fn layout_of_nothing_is_empty() {
        assert!(layout_words(&[], vec2(100.0, 100.0), estimate).is_empty());
    }
}
