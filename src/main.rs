//! Disc Arena headless demo
//!
//! Builds the reference arena, sweeps a scripted pointer across the first
//! body and logs how the bodies settle. The browser build goes through the
//! wasm surface in `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Disc Arena (native) starting...");

    if let Err(e) = run_demo() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}

/// Frames per simulated second at display refresh rate
#[cfg(not(target_arch = "wasm32"))]
const FRAMES_PER_SECOND: u64 = 60;

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> Result<(), disc_arena::ConfigError> {
    use disc_arena::{Arena, ArenaConfig};
    use glam::Vec2;

    let config = ArenaConfig::default();
    let mut arena = Arena::from_config(&config)?;

    // Pointer drags rightward across the red body, one move event per frame
    let start = arena.bodies()[0].pos;
    for step in 0..10 {
        let pointer = start + Vec2::new(step as f32 * 2.0, 0.0);
        if let Some(index) = arena.nudge(pointer) {
            log::debug!("Nudged body {} at {}", index, pointer);
        }
        arena.tick();
    }

    if let Some(index) = arena.hit_test(arena.bodies()[1].pos) {
        arena.set_color(index, "purple");
    }

    let mut bounces = 0;
    let mut collisions = 0;
    for frame in 1..=(5 * FRAMES_PER_SECOND) {
        let stats = arena.tick();
        bounces += stats.wall_bounces;
        collisions += stats.collisions;

        if frame % FRAMES_PER_SECOND == 0 {
            log::info!(
                "t={}s energy={:.3} momentum={} bounces={} collisions={}",
                frame / FRAMES_PER_SECOND,
                arena.kinetic_energy(),
                arena.momentum(),
                bounces,
                collisions
            );
        }
    }

    for (i, body) in arena.bodies().iter().enumerate() {
        log::info!("Body {} ({}): pos={} vel={}", i, body.color, body.pos, body.vel);
    }
    Ok(())
}
