mod axis;
mod component;
mod marker;
pub mod scale;
mod scene;
mod types;

pub use component::TangleView;
pub use types::{TangleData, TangleLink, TangleNode};
