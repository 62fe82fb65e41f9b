use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, WheelEvent, Window};
use yew::prelude::*;

use super::SceneHandle;
use crate::canvas::{CanvasSurface, window_viewport};
use crate::model::Point;
use crate::render::{Surface, render_frame};
use crate::settings::RenderSettings;
use crate::state::{HudInfo, Intent};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct GridViewProps {
    pub scene: SceneHandle,
    pub settings: RenderSettings,
    pub on_hud: Callback<HudInfo>,
}

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// DOM listeners and the animation frame loop, kept alive until `detach`.
struct Listeners {
    window: Window,
    canvas: HtmlCanvasElement,
    mousedown: Closure<dyn FnMut(MouseEvent)>,
    mousemove: Closure<dyn FnMut(MouseEvent)>,
    mouseup: Closure<dyn FnMut(MouseEvent)>,
    dblclick: Closure<dyn FnMut(MouseEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    contextmenu: Closure<dyn FnMut(Event)>,
    resize: Closure<dyn FnMut(Event)>,
    frame: FrameCell,
    raf_id: Rc<RefCell<Option<i32>>>,
}

impl Listeners {
    fn detach(self) {
        let _ = self.canvas.remove_event_listener_with_callback(
            "mousedown",
            self.mousedown.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.mousemove.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "mouseup",
            self.mouseup.as_ref().unchecked_ref(),
        );
        let _ = self.canvas.remove_event_listener_with_callback(
            "dblclick",
            self.dblclick.as_ref().unchecked_ref(),
        );
        let _ = self
            .canvas
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self.canvas.remove_event_listener_with_callback(
            "contextmenu",
            self.contextmenu.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        if let Some(id) = *self.raf_id.borrow() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The frame closure holds its own cell; dropping it here breaks the cycle.
        self.frame.borrow_mut().take();
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement) {
    let vp = window_viewport();
    canvas.set_width(vp.width as u32);
    canvas.set_height(vp.height as u32);
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn request_frame(window: &Window, frame: &FrameCell, raf_id: &Rc<RefCell<Option<i32>>>) {
    if let Some(cb) = frame.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            *raf_id.borrow_mut() = Some(id);
        }
    }
}

fn attach(
    canvas: HtmlCanvasElement,
    scene: SceneHandle,
    settings: Rc<RefCell<RenderSettings>>,
    on_hud: Callback<HudInfo>,
) -> Option<Listeners> {
    let window = web_sys::window()?;
    fit_canvas(&canvas);

    let mousedown = {
        let scene = scene.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            scene.push(Intent::PointerDown(mouse_point(&e)));
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())
        .ok();

    let mousemove = {
        let scene = scene.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            scene.push(Intent::PointerMoved(mouse_point(&e)));
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())
        .ok();

    let mouseup = {
        let scene = scene.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            scene.push(Intent::PointerUp(mouse_point(&e)));
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())
        .ok();

    let dblclick = {
        let scene = scene.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            scene.push(Intent::ToggleBuilding(mouse_point(&e)));
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("dblclick", dblclick.as_ref().unchecked_ref())
        .ok();

    let wheel = {
        let scene = scene.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| {
            e.prevent_default();
            scene.push(Intent::WheelScrolled {
                delta_y: e.delta_y(),
            });
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())
        .ok();

    let contextmenu = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
    }) as Box<dyn FnMut(_)>);
    canvas
        .add_event_listener_with_callback("contextmenu", contextmenu.as_ref().unchecked_ref())
        .ok();

    // Only resizes the canvas; the frame loop notices the new surface size.
    let resize = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            fit_canvas(&canvas);
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .ok();

    // RAF loop
    let frame: FrameCell = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(RefCell::new(None));
    {
        let frame_loop = frame.clone();
        let raf_id_loop = raf_id.clone();
        let window_loop = window.clone();
        let canvas = canvas.clone();
        let mut seen = scene.0.borrow().camera.viewport;
        let mut last_hud: Option<HudInfo> = None;
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if canvas.is_connected() {
                if let Some(mut surface) = CanvasSurface::from_canvas(&canvas) {
                    let mut s = scene.0.borrow_mut();
                    let vp = surface.viewport();
                    if vp != seen {
                        seen = vp;
                        s.push(Intent::Resized(vp));
                    }
                    s.drain_intents();
                    render_frame(&mut surface, &s, &settings.borrow());
                    let hud = s.hud();
                    drop(s);
                    if last_hud != Some(hud) {
                        last_hud = Some(hud);
                        on_hud.emit(hud);
                    }
                }
            }
            request_frame(&window_loop, &frame_loop, &raf_id_loop);
        }) as Box<dyn FnMut()>));
    }
    request_frame(&window, &frame, &raf_id);
    clog("grid view attached");

    Some(Listeners {
        window,
        canvas,
        mousedown,
        mousemove,
        mouseup,
        dblclick,
        wheel,
        contextmenu,
        resize,
        frame,
        raf_id,
    })
}

#[function_component(GridView)]
pub fn grid_view(props: &GridViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let settings_ref = use_mut_ref(|| props.settings);

    {
        let settings_ref = settings_ref.clone();
        use_effect_with(props.settings, move |s| {
            *settings_ref.borrow_mut() = *s;
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let scene = props.scene.clone();
        let on_hud = props.on_hud.clone();
        use_effect_with((), move |_| {
            let listeners = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| attach(canvas, scene, settings_ref, on_hud));
            if listeners.is_none() {
                clog("grid view: no canvas to attach to");
            }
            move || {
                if let Some(l) = listeners {
                    l.detach();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="grid-canvas" style="display:block; width:100%; height:100%; cursor:grab;"></canvas>
    }
}
