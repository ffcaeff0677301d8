pub mod curve;

pub use curve::{CatmullRom, CurveSource, Line};
