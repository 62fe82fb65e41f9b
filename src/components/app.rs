use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use super::{
    SceneHandle, camera_controls::CameraControls, controls_panel::ControlsPanel,
    grid_view::GridView, hud_panel::HudPanel, legend_panel::LegendPanel,
    settings_modal::SettingsModal,
};
use crate::canvas::window_viewport;
use crate::model::{Grid, TileKind};
use crate::settings::RenderSettings;
use crate::state::{HudInfo, Intent, Scene};

#[function_component(App)]
pub fn app() -> Html {
    let scene = use_memo((), |_| {
        SceneHandle(Rc::new(RefCell::new(Scene::new(Grid::demo(), window_viewport()))))
    });
    let settings = use_state(RenderSettings::load);
    let open_settings = use_state(|| false);
    let hud = {
        let scene = scene.clone();
        use_state(move || scene.0.borrow().hud())
    };

    // Persist settings changes
    use_effect_with(*settings, move |s| {
        s.save();
        || ()
    });

    let on_hud = {
        let hud = hud.clone();
        Callback::from(move |info: HudInfo| hud.set(info))
    };
    let push = |intent: Intent| {
        let scene = scene.clone();
        Callback::from(move |()| scene.push(intent))
    };
    let toggle_coordinates = {
        let settings = settings.clone();
        Callback::from(move |()| {
            settings.set(RenderSettings {
                show_coordinates: !settings.show_coordinates,
                ..*settings
            })
        })
    };
    let toggle_outline = {
        let settings = settings.clone();
        Callback::from(move |()| {
            settings.set(RenderSettings {
                show_outline: !settings.show_outline,
                ..*settings
            })
        })
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };

    let info = *hud;
    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
        <GridView scene={(*scene).clone()} settings={*settings} on_hud={on_hud} />
        <HudPanel zoom={info.zoom} selected={info.selected} selected_kind={info.selected_kind} buildings={info.buildings} />
        <ControlsPanel on_open_settings={open_settings_cb} />
        <CameraControls
            on_zoom_in={push(Intent::ZoomStep(1))}
            on_zoom_out={push(Intent::ZoomStep(-1))}
            on_center={push(Intent::Recenter)}
        />
        <LegendPanel
            highlight_ground={info.selected_kind == Some(TileKind::Empty)}
            highlight_building={info.selected_kind == Some(TileKind::Building)}
        />
        <SettingsModal
            show={*open_settings}
            on_close={close_settings_cb}
            show_coordinates={settings.show_coordinates}
            on_toggle_coordinates={toggle_coordinates}
            show_outline={settings.show_outline}
            on_toggle_outline={toggle_outline}
        />
    </div>}
}
