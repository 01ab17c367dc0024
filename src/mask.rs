use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::models::Bbox;

/// Rasterize bounding boxes into binary masks.
///
/// Each box becomes its own single-channel canvas of `shape` (width, height)
/// with the half-open rectangle filled to 255. Output order matches input
/// order. Coordinates are truncated to whole pixels and clipped to the
/// canvas by the drawing primitive; they are not otherwise validated.
pub fn create_mask_from_bbox(bboxes: &[Bbox], shape: (u32, u32)) -> Vec<GrayImage> {
    let (width, height) = shape;
    let mut masks = Vec::with_capacity(bboxes.len());

    for bbox in bboxes {
        let mut mask = GrayImage::new(width, height);
        let (x1, y1, x2, y2) = bbox.to_pixel_corners();
        if x2 > x1 && y2 > y1 {
            let rect = Rect::at(x1, y1).of_size((x2 - x1) as u32, (y2 - y1) as u32);
            draw_filled_rect_mut(&mut mask, rect, Luma([255u8]));
        }
        masks.push(mask);
    }

    masks
}

/// Extract tight bounding boxes from binary masks.
///
/// Each mask is resized to `shape` (nearest-neighbour, masks are binary)
/// and reduced to the half-open bounding box of its non-zero pixels.
/// Masks with no foreground contribute no entry, so the output may be
/// shorter than the input; order is otherwise preserved.
pub fn create_bbox_from_mask(masks: &[GrayImage], shape: (u32, u32)) -> Vec<Bbox> {
    let (width, height) = shape;
    let mut bboxes = Vec::new();

    for mask in masks {
        let resized = if mask.dimensions() == shape {
            mask.clone()
        } else {
            imageops::resize(mask, width, height, FilterType::Nearest)
        };

        if let Some(bbox) = tight_bbox(&resized) {
            bboxes.push(bbox);
        }
    }

    bboxes
}

/// Half-open bounding box of non-zero pixels, or None for an all-zero mask
fn tight_bbox(mask: &GrayImage) -> Option<Bbox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel[0] == 0 {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| {
        Bbox::new(
            min_x as f32,
            min_y as f32,
            (max_x + 1) as f32,
            (max_y + 1) as f32,
        )
    })
}
