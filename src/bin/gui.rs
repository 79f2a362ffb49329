// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use word_indexer::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui, log,
};

// Green disc with a few "text lines"
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let r = SIZE as f32 / 2.0;

    let img = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if (dx * dx + dy * dy).sqrt() > r {
            Rgba([0, 0, 0, 0])
        } else if (16..48).contains(&x) && (16..48).contains(&y) && (y / 6) % 2 == 0 {
            Rgba([240, 240, 240, 255])
        } else {
            Rgba([38, 120, 70, 255])
        }
    });

    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
