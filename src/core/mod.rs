pub mod config;
pub mod constants;
pub mod geometry;
pub mod lifecycle;
pub mod menu;
pub mod observe;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod visuals;

pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use lifecycle::*;
pub use menu::*;
pub use observe::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
pub use visuals::*;
