//! Rabbit Dodge headless runner
//!
//! Builds a demo level in code and plays it with a scripted driver, logging
//! how long the car survives. Usage: `rabbit-dodge [tuning.json]`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::{Quat, UVec2, Vec3};

    use rabbit_dodge::consts::*;
    use rabbit_dodge::hud::overlay_lines;
    use rabbit_dodge::sim::{Camera, GameState, InputEvent, Key, Scene, Transform, handle_event, tick};
    use rabbit_dodge::{SceneError, Tuning, TuningError};

    const WINDOW: UVec2 = UVec2::new(1280, 720);
    /// Give up after this many simulated seconds
    const MAX_SECS: f32 = 60.0;
    /// Seconds between steering direction changes
    const WEAVE_SECS: f32 = 0.75;

    #[derive(Debug, thiserror::Error)]
    pub enum RunError {
        #[error(transparent)]
        Tuning(#[from] TuningError),
        #[error(transparent)]
        Scene(#[from] SceneError),
    }

    /// Two rows of rabbits either side of the road plus a few in it
    fn demo_scene() -> Scene {
        let mut scene = Scene::default();
        scene.add(Transform::new(MOON_NAME, Vec3::new(0.0, 120.0, 20.0)));
        scene.add(Transform::new(CAR_NAME, Vec3::ZERO));

        let mut index = 0;
        let mut rabbit = |scene: &mut Scene, pos: Vec3, rotation: Quat| {
            scene.add(Transform::new(format!("{RABBIT_PREFIX}.{index:03}"), pos).with_rotation(rotation));
            index += 1;
        };
        for i in 0..6 {
            let y = 15.0 + i as f32 * 12.0;
            rabbit(&mut scene, Vec3::new(-14.0, y, -32.0), Quat::IDENTITY);
            rabbit(&mut scene, Vec3::new(14.0, y, -32.0), Quat::IDENTITY);
        }
        // Road hazards leaning towards the car
        let lean = Quat::from_rotation_x(-0.25);
        for x in [-8.0, -2.0, 4.0, 9.0] {
            rabbit(&mut scene, Vec3::new(x, 6.0, -32.0), lean);
        }

        let eye = scene.add(
            Transform::new("Camera", Vec3::new(0.0, -25.0, 12.0))
                .with_rotation(Quat::from_rotation_x(1.2)),
        );
        scene.cameras.push(Camera::new(eye, 60f32.to_radians()));
        scene
    }

    pub fn run() -> Result<(), RunError> {
        let tuning = match std::env::args().nth(1) {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let mut state = GameState::new(demo_scene(), tuning)?;
        state.set_drawable_size(WINDOW);
        for line in overlay_lines(&state) {
            log::info!("{line}");
        }

        let mut heading = Key::D;
        handle_event(&mut state, &InputEvent::KeyDown(heading), WINDOW);
        let mut next_turn = WEAVE_SECS;

        while state.time < MAX_SECS && !state.is_game_over() {
            if state.time >= next_turn {
                handle_event(&mut state, &InputEvent::KeyUp(heading), WINDOW);
                heading = if heading == Key::D { Key::A } else { Key::D };
                handle_event(&mut state, &InputEvent::KeyDown(heading), WINDOW);
                next_turn += WEAVE_SECS;
            }
            tick(&mut state, FRAME_DT);
        }

        if state.is_game_over() {
            log::info!("{}", overlay_lines(&state).join(" | "));
        } else {
            log::info!("Survived {MAX_SECS:.0}s");
        }
        log::info!(
            "{:.2}s simulated, {} rabbits rising at the end",
            state.time,
            state.rising_count()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Rabbit Dodge (headless) starting...");

    if let Err(err) = native::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}
