//! Per-frame simulation step
//!
//! Order matters: moon, then each rabbit followed by its hit test, then the
//! car, then the press-count reset. Hits are therefore tested against the
//! car's position from before this frame's steering.

use super::collision::rabbit_hits_car;
use super::random::RandomSource;
use super::state::GameState;

/// Advance the game by `elapsed` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, elapsed: f32) {
    debug_assert!(elapsed >= 0.0, "negative frame time {elapsed}");
    let tuning = &state.tuning;
    state.time += elapsed;

    // Moon
    let moon_id = state.moon.transform;
    let rotation = state.scene.transform(moon_id).rotation;
    let rotation = state.moon.update(rotation, &mut state.rng, tuning, elapsed);
    state.scene.transform_mut(moon_id).rotation = rotation;

    // Rabbits
    let car_pos = state.scene.transform(state.car.transform).position;
    // Running count: each rabbit is throttled only by the risers before it
    let mut rising = 0;
    for rabbit in &mut state.rabbits {
        let transform = state.scene.transform_mut(rabbit.transform);
        rabbit.advance(transform, &mut rising, &mut state.rng, tuning, elapsed);

        if rabbit_hits_car(transform, car_pos, tuning) && !state.game_over {
            state.game_over = true;
            log::info!(
                "Game over: {} reached the car after {:.2}s",
                transform.name,
                state.time
            );
        }
    }

    // Car
    let car_transform = state.scene.transform_mut(state.car.transform);
    state.car.drive(&mut car_transform.position, &state.controls, tuning, elapsed);

    state.controls.reset_downs();
}
