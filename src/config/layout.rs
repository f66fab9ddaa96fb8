//! Fixed maze layout.
//!
//! `W` wall, `D` dot, `N` power pellet, `P` empty path,
//! `S` player start, `E` enemy spawn.
use super::game::{MAZE_HEIGHT, MAZE_WIDTH};

pub const MAZE_LAYOUT: [&str; MAZE_HEIGHT] = [
    "WWWWWWWWWWWWWWWWWWWW",
    "WSDNDDDNDDDDDDDDDDDW",
    "WDWWWDWWWDWWWDWWWDDW",
    "WDWDDDWDDDDNWDDDWDWW",
    "WDWNWWWDWDWDWWWDWDWW",
    "WDDDDDDDWDWDDDWDDDWW",
    "WWWDWDWWWWWWWDWWDWWW",
    "WDDDWDDDDDDDDDDDDDDW",
    "WDWWWDWWWWWWWDWWWDWW",
    "WDWDDEWDEEDDWDDDWDWW",
    "WDDDWWWDWWWDWWWDWDWW",
    "WDDDWDDDDDDDDDDDDDWW",
    "WWWWWWWWWWWWWWWWWDWW",
    "WDDDDDDDDWDDDDDDDDDW",
    "WDWWWDWWWWWWWDWWWEDW",
    "WNWDDDWDDDDDWDDDWNWW",
    "WDWDWWWDWWWDWWWDWDWW",
    "WDDDWDDDWDWDDDWDDDWW",
    "WDWWWWWWWWWWWWWWWDDW",
    "WWWWWWWWWWWWWWWWWWWW",
];

// Every row must span the full maze width.
const _: () = {
    let mut row = 0;
    while row < MAZE_HEIGHT {
        assert!(MAZE_LAYOUT[row].len() == MAZE_WIDTH);
        row += 1;
    }
};
