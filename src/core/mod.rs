pub mod extract;
pub mod playback;
pub mod trajectory;
pub mod window;
