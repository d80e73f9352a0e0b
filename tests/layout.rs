//! Grid packer integration tests.

use edit_breakdown::{DrawRegion, LayoutOptions, LayoutRequest, ThumbnailLayout};

fn fit(region: DrawRegion, count: usize, image_size: (u32, u32)) -> ThumbnailLayout {
    ThumbnailLayout::fit(
        &LayoutRequest::new(region, count, image_size),
        &LayoutOptions::default(),
    )
}

// ── Reference scenarios ──────────────────────────────────────────

#[test]
fn no_images_is_empty() {
    let layout = fit(DrawRegion::new(0, 1000, 600), 0, (200, 100));
    assert!(layout.is_empty());
    assert_eq!((layout.columns, layout.rows), (0, 0));
    assert!(!layout.is_renderable());
    assert_eq!(layout.thumbnail_at(500.0, 300.0), None);
}

#[test]
fn single_image_is_centered() {
    let layout = fit(DrawRegion::new(0, 1000, 600), 1, (200, 100));

    assert!(layout.is_renderable());
    assert_eq!((layout.columns, layout.rows), (1, 1));
    assert_eq!(layout.spacing, (0.0, 0.0));
    assert_eq!(layout.margins, (62.0, 81.0));

    // Scaled up from the 850x450 area left after the spacing budget.
    let (width, height) = layout.size;
    assert!((width - 874.64).abs() < 0.01, "width {width}");
    assert!((height - 437.32).abs() < 0.01, "height {height}");

    let (x, y) = layout.positions[0];
    assert!((x + width / 2.0 - 500.0).abs() <= 1.0);
    assert!((y + height / 2.0 - 300.0).abs() <= 1.0);
}

#[test]
fn six_images_fill_two_rows_of_three() {
    let layout = fit(DrawRegion::new(0, 1000, 600), 6, (200, 100));

    assert_eq!((layout.columns, layout.rows), (3, 2));
    assert_eq!(layout.size, (320.0, 160.0));
    assert_eq!(layout.spacing, (0.0, 40.0));
    // The row is as wide as the region minus the minimum margin, and the
    // margin left over is only half of that minimum: min_margin is taken off
    // the leftover once before it is split into gaps.
    assert_eq!(layout.margins, (20.0, 120.0));
    assert_eq!(
        layout.positions,
        vec![
            (20.0, 320.0),
            (340.0, 320.0),
            (660.0, 320.0),
            (20.0, 120.0),
            (340.0, 120.0),
            (660.0, 120.0),
        ]
    );
}

#[test]
fn tiny_region_degenerates() {
    let layout = fit(DrawRegion::new(0, 50, 50), 100, (200, 100));
    assert!(!layout.is_renderable());
    assert_eq!(layout.size, (0.0, 0.0));
    assert_eq!(layout.positions.len(), 100);
}

#[test]
fn area_below_threshold_degenerates() {
    // 100x100 available over 1000 images is 10 px² each.
    let layout = fit(DrawRegion::new(0, 250, 250), 1000, (16, 9));
    assert!(!layout.is_renderable());
    assert_eq!(layout.size, (0.0, 0.0));

    let relaxed = ThumbnailLayout::fit(
        &LayoutRequest::new(DrawRegion::new(0, 250, 250), 1000, (16, 9)),
        &LayoutOptions::new().with_min_area(5.0).with_min_edge(0.0),
    );
    assert!(relaxed.size.0 > 0.0);
}

#[test]
fn negative_region_degenerates() {
    let layout = fit(DrawRegion::new(0, -120, -40), 4, (200, 100));
    assert!(!layout.is_renderable());
    assert_eq!(layout.positions.len(), 4);
}

#[test]
fn zero_sized_images_degenerate() {
    let layout = fit(DrawRegion::new(0, 1000, 600), 3, (0, 100));
    assert!(!layout.is_renderable());
    assert_eq!(layout.positions.len(), 3);
}

#[test]
fn small_thumbnails_are_not_renderable() {
    // Laid out normally, but below the configured drawable edge length.
    let layout = ThumbnailLayout::fit(
        &LayoutRequest::new(DrawRegion::new(0, 1000, 600), 1, (200, 100)),
        &LayoutOptions::new().with_min_edge(1000.0),
    );
    assert!(layout.size.0 > 0.0);
    assert!(!layout.is_renderable());
}

#[test]
fn toolbar_offset_shifts_every_column() {
    let plain = fit(DrawRegion::new(0, 1000, 600), 6, (200, 100));
    let shifted = fit(DrawRegion::new(48, 1000, 600), 6, (200, 100));

    assert_eq!(plain.size, shifted.size);
    for (&(x, y), &(shifted_x, shifted_y)) in plain.positions.iter().zip(&shifted.positions) {
        assert_eq!(shifted_x, x + 48.0);
        assert_eq!(shifted_y, y);
    }
}

#[test]
fn single_image_in_wide_region_gets_one_column() {
    let layout = fit(DrawRegion::new(0, 2000, 200), 1, (100, 100));
    assert_eq!((layout.columns, layout.rows), (1, 1));
    // Height-bound: the region minus the minimum margin.
    assert_eq!(layout.size, (160.0, 160.0));
    assert_eq!(layout.margins.0, 920.0);
}

#[test]
fn short_row_keeps_the_full_column_count() {
    // Four columns fit across, but only two images fill the row.
    let layout = fit(DrawRegion::new(0, 2000, 300), 2, (16, 9));
    assert_eq!((layout.columns, layout.rows), (4, 1));
    assert!((layout.size.0 - 4160.0 / 9.0).abs() < 1e-9);
    assert_eq!(layout.size.1, 260.0);
    assert_eq!(layout.spacing, (38.0, 0.0));
    assert_eq!(layout.margins, (18.0, 20.0));

    let (first_x, first_y) = layout.positions[0];
    let (second_x, second_y) = layout.positions[1];
    assert_eq!((first_x, first_y), (18.0, 20.0));
    assert!((second_x - (18.0 + layout.size.0 + 38.0)).abs() < 1e-9);
    assert_eq!(second_y, 20.0);
}

#[test]
fn custom_spacing_budget_changes_estimate() {
    let tight = ThumbnailLayout::fit(
        &LayoutRequest::new(DrawRegion::new(0, 1000, 600), 9, (16, 9)),
        &LayoutOptions::new().with_spacing_budget(0.0, 0.0),
    );
    let loose = fit(DrawRegion::new(0, 1000, 600), 9, (16, 9));
    assert!(tight.size.0 >= loose.size.0);
}

// ── Hit testing ──────────────────────────────────────────────────

#[test]
fn thumbnail_at_finds_the_hovered_image() {
    let layout = fit(DrawRegion::new(0, 1000, 600), 6, (200, 100));

    assert_eq!(layout.thumbnail_at(25.0, 325.0), Some(0));
    assert_eq!(layout.thumbnail_at(20.0, 320.0), Some(0));
    assert_eq!(layout.thumbnail_at(341.0, 321.0), Some(1));
    assert_eq!(layout.thumbnail_at(700.0, 200.0), Some(5));
    // Gap between the rows.
    assert_eq!(layout.thumbnail_at(100.0, 300.0), None);
    assert_eq!(layout.thumbnail_at(5.0, 5.0), None);
}

#[test]
fn rect_reports_shared_size() {
    let layout = fit(DrawRegion::new(0, 1000, 600), 6, (200, 100));
    assert_eq!(layout.rect(4), Some((340.0, 120.0, 320.0, 160.0)));
    assert_eq!(layout.rect(6), None);
}

// ── Properties ───────────────────────────────────────────────────

const IMAGE_SIZES: [(u32, u32); 4] = [(200, 100), (100, 200), (256, 144), (100, 100)];

#[test]
fn every_image_gets_a_position_inside_the_region() {
    for width in (200..2000).step_by(97) {
        for height in (150..1200).step_by(83) {
            for count in 0..40 {
                for image_size in IMAGE_SIZES {
                    let region = DrawRegion::new(30, width, height);
                    let layout = fit(region, count, image_size);
                    assert_eq!(layout.positions.len(), count);
                    if !layout.is_renderable() {
                        continue;
                    }

                    let (thumb_width, thumb_height) = layout.size;
                    let context = format!("{width}x{height}, {count} of {image_size:?}");
                    assert!(layout.columns * layout.rows >= count, "{context}");
                    for &(x, y) in &layout.positions {
                        assert!(x >= 30.0, "{context}: x {x}");
                        assert!(x + thumb_width <= 30.0 + f64::from(width) + 1e-6, "{context}");
                        assert!(y >= -1e-6, "{context}: y {y}");
                        assert!(y + thumb_height <= f64::from(height) + 1e-6, "{context}");
                    }
                }
            }
        }
    }
}

#[test]
fn positions_are_row_major_from_the_top() {
    let layout = fit(DrawRegion::new(0, 1280, 720), 10, (256, 144));
    let columns = layout.columns;
    assert!(columns > 1 && layout.rows > 1);

    for (index, pair) in layout.positions.windows(2).enumerate() {
        let (previous, next) = (pair[0], pair[1]);
        if (index + 1) % columns == 0 {
            assert_eq!(next.0, layout.positions[0].0);
            assert!(next.1 < previous.1);
        } else {
            assert!(next.0 > previous.0);
            assert_eq!(next.1, previous.1);
        }
    }
}

#[test]
fn single_image_has_no_spacing() {
    for (width, height) in [(640, 480), (1920, 300), (300, 1080)] {
        for image_size in IMAGE_SIZES {
            let layout = fit(DrawRegion::new(0, width, height), 1, image_size);
            assert_eq!(layout.spacing, (0.0, 0.0));
            let (x, y) = layout.positions[0];
            let right = f64::from(width) - x - layout.size.0;
            let top = f64::from(height) - y - layout.size.1;
            // Margins are rounded down, so the far side may get up to 2px more.
            assert!((0.0..2.0).contains(&(right - x)), "{width}x{height} {image_size:?}");
            assert!((0.0..2.0).contains(&(top - y)), "{width}x{height} {image_size:?}");
        }
    }
}

#[test]
fn layout_is_idempotent() {
    let request = LayoutRequest::new(DrawRegion::new(12, 1366, 768), 23, (256, 144));
    let options = LayoutOptions::default();
    assert_eq!(
        ThumbnailLayout::fit(&request, &options),
        ThumbnailLayout::fit(&request, &options)
    );
}

#[test]
fn aspect_ratio_is_preserved() {
    for count in 1..30 {
        for image_size in IMAGE_SIZES {
            let layout = fit(DrawRegion::new(0, 1280, 720), count, image_size);
            if !layout.is_renderable() {
                continue;
            }
            let expected = f64::from(image_size.0) / f64::from(image_size.1);
            assert!((layout.size.0 / layout.size.1 - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn wider_region_never_loses_columns() {
    let mut previous_columns = 0;
    for width in (400..3000).step_by(50) {
        let layout = fit(DrawRegion::new(0, width, 300), 3, (100, 100));
        assert!(
            layout.columns >= previous_columns,
            "width {width}: {} < {previous_columns}",
            layout.columns
        );
        previous_columns = layout.columns;
    }
    assert!(previous_columns > 3);
}
