pub mod game;
pub mod layout;
pub mod render;
pub mod timing;
