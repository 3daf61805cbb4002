//! Headless run of the looping pencil scene.
//!
//! Usage:
//! ```text
//! cargo run --example headless                 # 10 seconds at 60 fps
//! cargo run --example headless -- 600 debug    # frame count, debug outline
//! RUST_LOG=knotflow=trace cargo run --example headless
//! ```

use std::convert::Infallible;

use knotflow::math::Point3;
use knotflow::scene::{PencilConfig, Scene, SceneConfig};

const FRAME_DELTA: f64 = 1.0 / 60.0;

fn main() -> knotflow::Result<()> {
    // Default: WARN for everything, INFO for knotflow.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("knotflow=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let frames: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);
    let debug = args.next().is_some_and(|a| a == "debug");

    let defaults = SceneConfig::default();
    let pencil = PencilConfig {
        debug,
        ..defaults.pencil.clone()
    };
    let config = defaults.with_pencil(pencil);

    // The asset is opaque here; a real host hands back its mesh handle.
    let loader = |uri: &str| Ok::<_, Infallible>(uri.to_owned());
    let mut scene = Scene::build(&config, &loader)?;

    if let Some(outline) = scene.pencil().outline() {
        tracing::info!(
            points = outline.points.len(),
            length = outline.length(),
            "debug outline"
        );
    }

    for frame in 1..=frames {
        let transform = scene.tick(FRAME_DELTA);
        if frame % 60 == 0 {
            let p = transform.position;
            let f = transform.forward();
            let c = scene.camera().position;
            // model-space +X is the pencil tip before scaling
            let tip = scene
                .pencil()
                .model()
                .matrix()
                .transform_point(&Point3::new(1.0, 0.0, 0.0));
            tracing::info!(
                "t={:5.2}s pencil=({:+.3}, {:+.3}, {:+.3}) heading=({:+.3}, {:+.3}, {:+.3}) tip=({:+.2}, {:+.2}, {:+.2}) camera=({:+.2}, {:+.2}, {:+.2})",
                scene.elapsed(),
                p.x, p.y, p.z,
                f.x, f.y, f.z,
                tip.x, tip.y, tip.z,
                c.x, c.y, c.z,
            );
        }
    }

    tracing::info!(
        frames = scene.frames(),
        position = scene.pencil().follower().position(),
        curve_length = scene.pencil().curve().total_length(),
        "done"
    );
    Ok(())
}
