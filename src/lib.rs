#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use ripple_core::{RippleSettings, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

pub(crate) type SharedScene = Rc<RefCell<Scene<audio::WebTone>>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::fit_canvas_to_window(canvas);
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        dom::add_listener(&window, "resize", move || {
            dom::fit_canvas_to_window(&canvas_resize);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_or_create_canvas(&document, constants::CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    let surface = render::CanvasSurface::new(&canvas)?;
    let size = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    surface.clear(size);

    let scene: SharedScene = Rc::new(RefCell::new(Scene::new(size, RippleSettings::default())));
    log::info!(
        "[scene] canvas={}x{} {}",
        size.x,
        size.y,
        scene.borrow().settings.summary()
    );

    ui::build_controls(&document, &scene)?;

    let tones = Rc::new(RefCell::new(audio::WebTones::new()));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));

    events::wire_global_keydown(scene.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: mouse_state.clone(),
        tones: tones.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        tones,
        canvas,
        surface,
        mouse: mouse_state,
        frame_index: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
