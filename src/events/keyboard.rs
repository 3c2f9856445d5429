use crate::ui;
use crate::SharedScene;
use ripple_core::action_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &SharedScene) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let mut sc = scene.borrow_mut();
    sc.apply(action);
    if let Some(doc) = crate::dom::window_document() {
        ui::sync_controls(&doc, &sc.settings);
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: SharedScene) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
