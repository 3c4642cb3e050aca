use super::*;

fn alpha_at(data: &[u8], width: u32, x: u32, y: u32) -> u8 {
    data[((y * width + x) * 4 + 3) as usize]
}

fn black_ink(width: f64) -> Ink {
    Ink {
        color: Rgba8::rgb(0, 0, 0),
        alpha: 1.0,
        width,
    }
}

#[test]
fn rejects_degenerate_sizes() {
    assert!(PixmapSurface::new(0, 10).is_err());
    assert!(PixmapSurface::new(10, 70_000).is_err());
}

#[test]
fn stroked_segment_covers_its_pixels_only() {
    let mut surface = PixmapSurface::new(20, 20).unwrap();
    surface.stroke(
        &Segment::Line {
            from: Point::new(2.0, 10.0),
            to: Point::new(18.0, 10.0),
        },
        &black_ink(4.0),
    );
    let data = surface.render_premul_rgba8();
    assert_eq!(data.len(), 20 * 20 * 4);
    assert!(alpha_at(&data, 20, 10, 10) > 200);
    assert_eq!(alpha_at(&data, 20, 10, 2), 0);
}

#[test]
fn clear_empties_the_display_list() {
    let mut surface = PixmapSurface::new(8, 8).unwrap();
    surface.stroke(
        &Segment::Line {
            from: Point::new(0.0, 4.0),
            to: Point::new(8.0, 4.0),
        },
        &black_ink(2.0),
    );
    assert_eq!(surface.segment_count(), 1);
    surface.clear();
    assert_eq!(surface.segment_count(), 0);
    assert!(surface.render_premul_rgba8().iter().all(|&b| b == 0));
}

#[test]
fn background_fills_every_pixel() {
    let surface = PixmapSurface::new(4, 4)
        .unwrap()
        .with_background(Rgba8::rgb(0xF7, 0xF5, 0xF3));
    let data = surface.render_premul_rgba8();
    assert!(data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn png_writer_checks_buffer_length() {
    let path = std::env::temp_dir().join("sigmotion_raster_bad_len.png");
    assert!(save_premul_rgba8_png(&path, &[0; 7], 1, 2).is_err());
}

#[test]
fn save_png_writes_a_decodable_file() {
    let path = std::env::temp_dir().join(format!(
        "sigmotion_raster_{}.png",
        std::process::id()
    ));
    let surface = PixmapSurface::new(6, 3).unwrap();
    surface.save_png(&path).unwrap();
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (6, 3));
    let _ = std::fs::remove_file(&path);
}
