//! Overlay text
//!
//! The presentation layer draws these lines bottom-left; this module only
//! decides what they say.

use crate::sim::{GameState, RandomSource};

pub const HINT: &str = "AD moves the car; Try to dodge all alien rabbits";
pub const GAME_OVER: &str = "Game Over";

/// Lines to overlay this frame
pub fn overlay_lines<R: RandomSource>(state: &GameState<R>) -> Vec<&'static str> {
    let mut lines = vec![HINT];
    if state.is_game_over() {
        lines.push(GAME_OVER);
    }
    lines
}
