use super::*;
use crate::foundation::core::Rect;

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn rejects_empty_and_oversized_canvases() {
    assert!(
        CpuCanvas::new(
            Canvas {
                width: 0,
                height: 4
            },
            CpuCanvasOpts::default()
        )
        .is_err()
    );
    assert!(
        CpuCanvas::new(
            Canvas {
                width: 70_000,
                height: 4
            },
            CpuCanvasOpts::default()
        )
        .is_err()
    );
}

#[test]
fn clear_color_fills_the_frame() {
    let mut c = CpuCanvas::new(
        Canvas {
            width: 8,
            height: 8,
        },
        CpuCanvasOpts::default().with_clear_rgba(Some([10, 20, 30, 255])),
    )
    .unwrap();
    c.begin_frame(1.0);
    let f = c.read_frame();
    assert_eq!((f.width, f.height), (8, 8));
    assert_eq!(f.data.len(), 8 * 8 * 4);
    assert_eq!(px(&f, 3, 3), [10, 20, 30, 255]);
}

#[test]
fn scale_maps_logical_units_to_pixels() {
    let mut c = CpuCanvas::new(
        Canvas {
            width: 16,
            height: 16,
        },
        CpuCanvasOpts::default(),
    )
    .unwrap();
    c.begin_frame(2.0);
    c.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        &Paint::Solid(Color::hex(0xff0000)),
    );
    let f = c.read_frame();
    assert_eq!(px(&f, 2, 2), [255, 0, 0, 255]);
    assert_eq!(px(&f, 12, 12)[3], 0);
}

#[test]
fn saved_transforms_are_restored() {
    let mut c = CpuCanvas::new(
        Canvas {
            width: 16,
            height: 16,
        },
        CpuCanvasOpts::default(),
    )
    .unwrap();
    c.begin_frame(1.0);
    c.save();
    c.translate(8.0, 8.0);
    c.restore();
    c.fill_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        &Paint::Solid(Color::hex(0x00ff00)),
    );
    let f = c.read_frame();
    assert_eq!(px(&f, 1, 1), [0, 255, 0, 255]);
    assert_eq!(px(&f, 10, 10)[3], 0);
}
