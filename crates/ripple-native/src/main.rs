use glam::Vec2;
use ripple_core::{action_for_key, KeyAction, RippleSettings, Scene};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod audio;
mod gpu;
mod ui;

fn window_title(settings: &RippleSettings) -> String {
    format!("Ripples ({})", settings.summary())
}

fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Character(s) => action_for_key(s.as_str()),
        Key::Named(NamedKey::Escape) => Some(KeyAction::Clear),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let settings = RippleSettings::default();
    let window = WindowBuilder::new()
        .with_title(window_title(&settings))
        .with_inner_size(LogicalSize::new(960.0, 720.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window))?;
    let mut tones = audio::NativeTones::new();
    let mut scene: Scene<audio::NativeTone> = Scene::new(gpu.size(), settings);
    let mut panel = ui::ControlPanel::default();
    let mut batch = gpu::RingBatch::default();
    let mut cursor = Vec2::ZERO;
    let mut title = window_title(&scene.settings);
    log::info!(
        "[scene] canvas={}x{} {}",
        gpu.size().x,
        gpu.size().y,
        scene.settings.summary()
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                scene.resize(gpu.size());
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Vec2::new(position.x as f32, position.y as f32);
                panel.drag(cursor, &mut scene.settings);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    if !panel.press(cursor, &mut scene.settings) {
                        scene.pointer_pressed(cursor);
                    }
                }
                ElementState::Released => {
                    panel.release();
                    scene.pointer_released();
                }
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(action) = key_action(&logical_key) {
                    scene.apply(action);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            batch.begin(scene.canvas());
            let report = scene.frame(cursor, &mut batch, &mut tones);
            if report.spawned {
                log::trace!(
                    "[frame] live={} tone={}",
                    scene.registry().len(),
                    report.tone_started
                );
            }
            let overlay = panel.shapes(&scene.settings);
            match gpu.render(batch.instances(), &overlay) {
                Ok(()) => gpu.window().request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window().inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {}", e),
            }

            let next_title = window_title(&scene.settings);
            if next_title != title {
                gpu.window().set_title(&next_title);
                title = next_title;
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            key_action(&Key::Character(SmolStr::new("c"))),
            Some(KeyAction::ToggleColorMode)
        );
        assert_eq!(
            key_action(&Key::Named(NamedKey::Escape)),
            Some(KeyAction::Clear)
        );
        assert_eq!(key_action(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn title_carries_settings() {
        let title = window_title(&RippleSettings::default());
        assert!(title.contains("size 10"));
        assert!(title.contains("speed 0.5"));
    }
}
