pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod road;
pub mod tessellation;
pub mod view;

pub use config::{RenderQuality, RoadConfig};
pub use error::{RoadError, Result};
pub use road::Road;
