//! Geometry for the zigzag glitch lines running down the right edge.
//!
//! Everything here is a pure function of time, scroll position and canvas
//! size; the component only strokes what these return.

use std::f64::consts::PI;

pub const CANVAS_WIDTH: f64 = 140.0;
pub const LINE_THICKNESS: f64 = 4.0;
const RIGHT_MARGIN: f64 = 37.8;
const LINE_GAP: f64 = 22.0;
const MAX_KINKS_ON_SCREEN: f64 = 7.0;
const KINKS_PER_SEGMENT: usize = 1;
const AMPLITUDE_BASE: f64 = 8.0;
const AMPLITUDE_VARIATION: f64 = 4.0;
const KINK_SPEED: f64 = 0.008;
const SCROLL_FACTOR: f64 = 0.8;
const MIN_SEGMENT_HEIGHT: f64 = 200.0;

const GLITCH_MS: f64 = 300.0;
const WHITE_MS: f64 = 500.0;

/// Share of the viewport a hero or footer must cover to hide the lines.
pub const OCCLUSION_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Chromatic split applied on top of the white line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchPhase {
    pub offset_x: f64,
    pub intensity: f64,
}

impl GlitchPhase {
    /// 300 ms of continuous split followed by 500 ms of plain white.
    pub fn at(elapsed_ms: f64) -> Self {
        let cycle = elapsed_ms.rem_euclid(GLITCH_MS + WHITE_MS);
        if cycle >= GLITCH_MS {
            return Self {
                offset_x: 0.0,
                intensity: 0.0,
            };
        }
        let progress = cycle / GLITCH_MS;
        let fast = (progress * PI * 20.0).sin();
        let medium = (progress * PI * 8.0).sin();
        let slow = (progress * PI * 2.0).sin();
        Self {
            offset_x: fast * 1.5 + medium + slow * 0.5,
            intensity: 0.7 + fast.abs() * 0.2 + medium.abs() * 0.1,
        }
    }

    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }
}

pub fn segment_height(viewport_height: f64) -> f64 {
    let segments_on_screen = MAX_KINKS_ON_SCREEN / (KINKS_PER_SEGMENT as f64 + 1.0);
    (viewport_height / segments_on_screen).max(MIN_SEGMENT_HEIGHT)
}

/// X positions of the right, middle and left lines for a canvas `width`.
pub fn line_bases(width: f64) -> [f64; 3] {
    let max_amplitude = AMPLITUDE_BASE + AMPLITUDE_VARIATION;
    let right = width - RIGHT_MARGIN - max_amplitude / 2.0;
    let step = LINE_GAP + LINE_THICKNESS * 2.0;
    let middle = (right - step).max(max_amplitude / 2.0);
    let left = (middle - step).max(max_amplitude / 2.0);
    [right, middle, left]
}

/// Whether an element spanning `top..bottom` (viewport coordinates) covers
/// enough of the viewport to hide the lines.
pub fn occludes(top: f64, bottom: f64, viewport_height: f64) -> bool {
    let margin = viewport_height * OCCLUSION_MARGIN;
    bottom > margin && top < viewport_height - margin
}

/// Polylines of the right-hand line, one per visible segment, chained so
/// each segment starts where the previous one ended. `frame` is elapsed
/// time in 60 Hz frames.
pub fn zigzag(frame: f64, scroll_top: f64, height: f64, viewport_height: f64, base_x: f64) -> Vec<Vec<Point>> {
    let segment_len = segment_height(viewport_height);
    let kink_len = segment_len / (KINKS_PER_SEGMENT as f64 + 1.0);
    let scroll_offset = (scroll_top * SCROLL_FACTOR).rem_euclid(segment_len);
    let count = (height / segment_len).ceil() as i32 + 2;

    let mut polylines = Vec::new();
    let mut previous_end: Option<Point> = None;

    for segment in -1..count {
        let s = f64::from(segment);
        let start = previous_end.unwrap_or(Point {
            x: base_x,
            y: s * segment_len + scroll_offset,
        });
        let mut points = vec![start];
        let mut last_y = start.y;

        for i in 0..=KINKS_PER_SEGMENT {
            let k = i as f64;
            let y_jitter = (s * 0.7 + k * 0.3).sin() * kink_len * 0.12
                + (frame * 0.004 + s * 0.5 + k * 0.6).sin() * kink_len * 0.14;
            let y = (start.y + (k + 1.0) * kink_len + y_jitter).max(last_y + kink_len * 0.35);

            let phase = frame * KINK_SPEED + k * 0.8 + s * 0.4;
            let chaos = frame * 0.006 + s * 0.37 + k * 0.91;
            let chaos_wave = (chaos * 1.7).sin() + (chaos * 3.3).sin() * 0.6;
            let spike = (chaos * 0.9).sin().max(0.0).powi(3);
            let boost = 1.0 + spike * 1.8 + chaos_wave.abs() * 0.6;
            let amplitude =
                (AMPLITUDE_BASE + (s * 0.5 + k * 0.7 + frame * 0.001).sin() * AMPLITUDE_VARIATION) * boost;

            let alternate = if i % 2 == 0 { 1.0 } else { -1.0 };
            let direction = alternate
                + (s * 0.4 + k * 0.6 + frame * 0.001).cos() * 0.5
                + (chaos * 2.1).sin() * 0.35;

            points.push(Point {
                x: base_x + phase.sin() * amplitude * direction,
                y,
            });
            last_y = y;
        }

        let end_k = KINKS_PER_SEGMENT as f64 + 1.0;
        let end_jitter = (s * 0.7 + end_k * 0.3).sin() * kink_len * 0.12
            + (frame * 0.004 + s * 0.5 + end_k * 0.6).sin() * kink_len * 0.14;
        let end_y = (start.y + end_k * kink_len + end_jitter).max(last_y + kink_len * 0.35);
        let end_phase = frame * KINK_SPEED + KINKS_PER_SEGMENT as f64 * 0.8 + s * 0.4;
        let end_amplitude = AMPLITUDE_BASE + (s * 0.5 + end_k * 0.7 + frame * 0.001).sin() * AMPLITUDE_VARIATION;
        let end_direction = if KINKS_PER_SEGMENT % 2 == 0 { 1.0 } else { -1.0 }
            + (s * 0.4 + end_k * 0.6 + frame * 0.0005).cos() * 0.3;
        let end = Point {
            x: base_x + end_phase.sin() * end_amplitude * end_direction,
            y: end_y,
        };
        points.push(end);
        previous_end = Some(end);

        if end_y > -50.0 && start.y < height + 50.0 {
            polylines.push(points);
        }
    }
    polylines
}

/// Copies a polyline horizontally, used for the middle and left lines.
pub fn shifted(points: &[Point], dx: f64) -> Vec<Point> {
    points.iter().map(|p| Point { x: p.x + dx, y: p.y }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glitch_cycle_has_a_white_phase() {
        assert!(GlitchPhase::at(0.0).is_active());
        assert!(GlitchPhase::at(299.0).is_active());
        assert!(!GlitchPhase::at(300.0).is_active());
        assert!(!GlitchPhase::at(799.0).is_active());
        assert!(GlitchPhase::at(800.0).is_active());
        // 200 ms into the second cycle
        let split = GlitchPhase::at(1000.0);
        assert!(split.intensity >= 0.7 && split.intensity <= 1.0);
        let white = GlitchPhase::at(1234.0);
        assert_eq!(white.intensity, 0.0);
        assert_eq!(white.offset_x, 0.0);
    }

    #[test]
    fn segments_never_get_too_short() {
        assert_eq!(segment_height(350.0), 200.0);
        assert_eq!(segment_height(1400.0), 400.0);
    }

    #[test]
    fn lines_stay_inside_the_canvas() {
        let [right, middle, left] = line_bases(CANVAS_WIDTH);
        assert!(right < CANVAS_WIDTH - RIGHT_MARGIN);
        assert!(right > middle && middle > left);
        assert!(left >= (AMPLITUDE_BASE + AMPLITUDE_VARIATION) / 2.0);
    }

    #[test]
    fn polylines_are_continuous_and_descending() {
        let base = line_bases(CANVAS_WIDTH)[0];
        let lines = zigzag(120.0, 900.0, 800.0, 800.0, base);
        assert!(!lines.is_empty());
        for pair in lines.windows(2) {
            assert_eq!(pair[0].last(), pair[1].first());
        }
        for line in &lines {
            for step in line.windows(2) {
                assert!(step[1].y > step[0].y);
            }
        }
    }

    #[test]
    fn occlusion_uses_margins() {
        assert!(occludes(0.0, 800.0, 800.0));
        assert!(!occludes(-800.0, 100.0, 800.0));
        assert!(!occludes(700.0, 1500.0, 800.0));
    }
}
