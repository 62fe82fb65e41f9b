pub mod app;
pub mod camera_controls;
pub mod controls_panel;
pub mod grid_view;
pub mod hud_panel;
pub mod legend;
pub mod legend_panel;
pub mod settings_modal;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{Intent, Scene};

/// Shared scene for the components of one view. Equality is identity, so
/// props holding it only change when the scene itself is replaced.
#[derive(Clone)]
pub struct SceneHandle(pub Rc<RefCell<Scene>>);

impl SceneHandle {
    pub fn push(&self, intent: Intent) {
        self.0.borrow_mut().push(intent);
    }
}

impl PartialEq for SceneHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
