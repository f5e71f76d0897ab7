pub mod assets;
pub mod config;
pub mod content;
pub mod filter;
pub mod motion;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod theme;
pub mod typewriter;
