use image::{DynamicImage, GrayImage};
use serde::{Deserialize, Serialize};

/// Bounding box in corner form, half-open on the right and bottom edges
/// (a pixel (x, y) is inside when x1 <= x < x2 and y1 <= y < y2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Bbox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// A box that covers no pixels once truncated to the raster grid
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Corners as whole pixel coordinates (truncated, not rounded)
    pub fn to_pixel_corners(&self) -> (i32, i32, i32, i32) {
        (
            self.x1 as i32,
            self.y1 as i32,
            self.x2 as i32,
            self.y2 as i32,
        )
    }
}

impl From<[f32; 4]> for Bbox {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Result bundle of a single detection call: boxes, optional per-box masks
/// and an optional annotated preview. Consumed once by the inpainting side.
#[derive(Debug, Clone, Default)]
pub struct DetectionOutput {
    pub bboxes: Vec<Bbox>,
    pub masks: Vec<GrayImage>,
    pub preview: Option<DynamicImage>,
}

impl DetectionOutput {
    pub fn is_empty(&self) -> bool {
        self.bboxes.is_empty()
    }
}
