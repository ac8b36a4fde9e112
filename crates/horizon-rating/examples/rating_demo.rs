//! Headless rating control demo.
//!
//! Builds a control from TOML, replays a tap and a drag, and writes a PNG
//! snapshot after each step.
//!
//! Run with: cargo run -p horizon-rating --example rating_demo [output-dir]

use std::path::PathBuf;
use std::sync::Arc;

use horizon_rating::prelude::*;

const CONFIG: &str = r#"
spacing = 8.0
selected_image_name = "star_full"
unselected_image_name = "star_empty"
unrated_image_name = "star_grey"

[frame]
x = 10.0
y = 10.0
width = 280.0
height = 56.0
"#;

fn pointer(control: &mut RatingControl, mut event: WidgetEvent) {
    control.event(&mut event);
}

fn snapshot(
    control: &mut RatingControl,
    dir: &std::path::Path,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut renderer = SoftwareRenderer::new(300, 76, [255, 255, 255, 255])?;
    paint_widget(control, &mut renderer);
    let path = dir.join(name);
    renderer.save_png(&path)?;
    println!("rating {} -> {}", control.rating(), path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let bundle = Arc::new(ImageBundle::new());
    bundle.insert("star_full", Image::solid(44, 44, [255, 196, 0, 255])?);
    bundle.insert("star_empty", Image::solid(44, 44, [150, 150, 150, 255])?);
    bundle.insert("star_grey", Image::solid(44, 44, [225, 225, 225, 255])?);

    let config = RatingControlConfig::from_toml_str(CONFIG)?;
    let mut control = RatingControl::from_config(&config, bundle);
    control.value_changed.connect(|&rating| {
        tracing::info!(rating, "value changed");
    });

    snapshot(&mut control, &out_dir, "rating_unrated.png")?;

    let centers: Vec<f32> = (0..ITEM_COUNT)
        .filter_map(|index| control.item_rect(index))
        .map(|rect| rect.center().x)
        .collect();
    let y = control.size().height / 2.0;

    // Tap the second star.
    pointer(
        &mut control,
        WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, Point::new(centers[1], y))),
    );
    pointer(
        &mut control,
        WidgetEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, Point::new(centers[1], y))),
    );
    snapshot(&mut control, &out_dir, "rating_tap.png")?;

    // Drag across to the last star.
    pointer(
        &mut control,
        WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, Point::new(centers[1], y))),
    );
    for &x in &centers[2..] {
        pointer(
            &mut control,
            WidgetEvent::MouseMove(MouseMoveEvent::dragging(Point::new(x, y))),
        );
    }
    pointer(
        &mut control,
        WidgetEvent::MouseRelease(MouseReleaseEvent::new(MouseButton::Left, Point::new(centers[4], y))),
    );
    snapshot(&mut control, &out_dir, "rating_drag.png")?;

    println!("{}", config.to_toml_string()?);
    Ok(())
}
