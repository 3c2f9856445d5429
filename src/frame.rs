use crate::audio::WebTones;
use crate::input;
use crate::render::CanvasSurface;
use crate::SharedScene;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SharedScene,
    pub tones: Rc<RefCell<WebTones>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub frame_index: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let pointer = self.mouse.borrow().pos();

        let mut scene = self.scene.borrow_mut();
        if scene.canvas() != size {
            // Resizing wipes the backing store; start from solid black again.
            scene.resize(size);
            self.surface.clear(size);
        }

        self.surface.fade(size);
        self.surface.draw_labels();

        let report = scene.frame(pointer, &mut self.surface, &mut *self.tones.borrow_mut());
        self.frame_index += 1;
        if report.tick.removed > 0 {
            log::trace!(
                "[frame {}] live={} removed={}",
                self.frame_index,
                scene.registry().len(),
                report.tick.removed
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
