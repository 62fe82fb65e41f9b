pub mod camera;
pub mod input;
pub mod scene;

pub use camera::Camera;
pub use input::PointerState;
pub use scene::{HudInfo, Intent, Scene};
