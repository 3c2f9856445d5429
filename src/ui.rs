//! DOM controls: two range sliders and the color-mode button.
//!
//! Each control publishes into the scene's `RippleSettings`; the spawner reads
//! those settings only when it creates a ripple.

use crate::constants::*;
use crate::dom;
use crate::SharedScene;
use ripple_core::{ConfigError, RippleSettings, SliderSpec, SIZE_SLIDER, SPEED_SLIDER};
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_range_slider(
    document: &web::Document,
    id: &str,
    spec: &SliderSpec,
    pos: (f64, f64),
) -> anyhow::Result<web::HtmlInputElement> {
    let input = document
        .create_element("input")
        .map_err(|e| anyhow::anyhow!("create input: {:?}", e))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    input.set_id(id);
    input.set_type("range");
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    input.set_value(&spec.default.to_string());
    dom::place(&input, pos.0, pos.1, SLIDER_HEIGHT_PX);
    Ok(input)
}

fn wire_slider(
    input: &web::HtmlInputElement,
    scene: &SharedScene,
    apply: fn(&mut RippleSettings, &str) -> Result<(), ConfigError>,
) {
    let scene = scene.clone();
    let source = input.clone();
    dom::add_listener(input, "input", move || {
        let value = source.value();
        let mut sc = scene.borrow_mut();
        match apply(&mut sc.settings, &value) {
            Ok(()) => log::info!("[settings] {}", sc.settings.summary()),
            Err(e) => log::warn!("[settings] {}", e),
        }
    });
}

pub fn build_controls(document: &web::Document, scene: &SharedScene) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let size = create_range_slider(document, SIZE_SLIDER_ID, &SIZE_SLIDER, SIZE_SLIDER_POS)?;
    wire_slider(&size, scene, RippleSettings::set_size_str);

    let speed = create_range_slider(document, SPEED_SLIDER_ID, &SPEED_SLIDER, SPEED_SLIDER_POS)?;
    wire_slider(&speed, scene, RippleSettings::set_speed_str);

    let button = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?
        .dyn_into::<web::HtmlButtonElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    button.set_text_content(Some(COLOR_BUTTON_TEXT));
    dom::place(&button, COLOR_BUTTON_POS.0, COLOR_BUTTON_POS.1, BUTTON_HEIGHT_PX);
    {
        let scene = scene.clone();
        dom::add_listener(&button, "click", move || {
            let mut sc = scene.borrow_mut();
            sc.settings.toggle_color_mode();
            log::info!("[settings] {}", sc.settings.summary());
        });
    }

    for el in [
        size.unchecked_ref::<web::Node>(),
        speed.unchecked_ref::<web::Node>(),
        button.unchecked_ref::<web::Node>(),
    ] {
        body.append_child(el)
            .map_err(|e| anyhow::anyhow!("append control: {:?}", e))?;
    }
    Ok(())
}

/// Keep DOM slider positions in sync when keyboard shortcuts change settings.
pub fn sync_controls(document: &web::Document, settings: &RippleSettings) {
    for (id, value) in [
        (SIZE_SLIDER_ID, settings.size()),
        (SPEED_SLIDER_ID, settings.speed()),
    ] {
        if let Some(input) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_value(&value.to_string());
        }
    }
}
