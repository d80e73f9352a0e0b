//! Thumbnail directory loading tests.
//!
//! Fixture images are written to a temporary directory on the fly.

use std::path::Path;

use edit_breakdown::{BreakdownError, DrawRegion, ThumbnailImage, ThumbnailSet};
use image::RgbImage;

fn write_thumbnail(directory: &Path, name: &str, width: u32, height: u32) {
    RgbImage::new(width, height)
        .save(directory.join(name))
        .expect("Failed to write fixture thumbnail");
}

#[test]
fn load_orders_by_start_frame() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let directory = temporary_directory.path();
    write_thumbnail(directory, "240.png", 32, 18);
    write_thumbnail(directory, "0.png", 32, 18);
    write_thumbnail(directory, "120.png", 32, 18);

    let thumbnails = ThumbnailSet::load(directory).expect("Failed to load thumbnails");
    let frames: Vec<i64> = thumbnails.images.iter().map(|image| image.start_frame).collect();
    assert_eq!(frames, [0, 120, 240]);
    assert_eq!(thumbnails.image_size(), Some((32, 18)));
    assert!(thumbnails.warnings.is_empty());
}

#[test]
fn load_skips_unrelated_files() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let directory = temporary_directory.path();
    write_thumbnail(directory, "48.png", 16, 9);
    write_thumbnail(directory, "cover.png", 16, 9);
    std::fs::write(directory.join("notes.txt"), "not an image").expect("Failed to write file");
    std::fs::create_dir(directory.join("96.png")).expect("Failed to create dir");

    let thumbnails = ThumbnailSet::load(directory).expect("Failed to load thumbnails");
    assert_eq!(thumbnails.len(), 1);
    assert_eq!(thumbnails.images[0].start_frame, 48);
    assert_eq!(thumbnails.warnings.len(), 1);
    assert!(thumbnails.warnings[0].contains("cover.png"));
}

#[test]
fn missing_directory_is_empty_with_warning() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = temporary_directory.path().join("does_not_exist");

    let thumbnails = ThumbnailSet::load(&missing).expect("Missing folder should not fail");
    assert!(thumbnails.is_empty());
    assert_eq!(thumbnails.image_size(), None);
    assert_eq!(thumbnails.warnings.len(), 1);
    assert!(thumbnails.warnings[0].contains("folder does not exist"));
}

#[test]
fn unreadable_thumbnail_is_an_error() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let directory = temporary_directory.path();
    std::fs::write(directory.join("60.png"), b"this is not a png").expect("Failed to write file");

    let result = ThumbnailSet::load(directory);
    match result {
        Err(BreakdownError::ThumbnailRead { path, .. }) => {
            assert!(path.ends_with("60.png"));
        }
        other => panic!("Expected ThumbnailRead error, got {other:?}"),
    }
}

#[test]
fn from_images_sorts_and_builds_request() {
    let thumbnails = ThumbnailSet::from_images(vec![
        ThumbnailImage::new("b.jpg", 50, 400, 300),
        ThumbnailImage::new("a.jpg", 10, 256, 144),
    ]);
    assert_eq!(thumbnails.images[0].start_frame, 10);

    let request = thumbnails.layout_request(DrawRegion::new(8, 800, 600));
    assert_eq!(request.count, 2);
    // First image by start frame decides the size.
    assert_eq!(request.image_size, (256, 144));
    assert_eq!(request.region.offset_x, 8);
}

#[test]
fn empty_set_requests_nothing() {
    let request = ThumbnailSet::default().layout_request(DrawRegion::new(0, 800, 600));
    assert_eq!(request.count, 0);
    assert_eq!(request.image_size, (0, 0));
}

#[test]
fn aspect_ratio_of_zero_sized_image() {
    assert_eq!(ThumbnailImage::new("x.png", 0, 0, 10).aspect_ratio(), None);
    assert_eq!(ThumbnailImage::new("x.png", 0, 20, 10).aspect_ratio(), Some(2.0));
}
