use std::error::Error;
use std::time::{Duration, Instant};

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;

pub struct AppConfig {
    pub title: String,
    /// Logical canvas in pixels. The window opens at this size.
    pub canvas: SurfaceSize,
    pub vsync: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: VirtualKeyCode,
    pub pressed: bool,
}

/// Everything the platform saw between two frames, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub key_events: Vec<KeyEvent>,
}

/// Turns absolute frame timestamps into per-frame elapsed time.
///
/// The previous timestamp starts at zero, so the first frame's elapsed time is its own timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Duration {
        self.last
    }

    pub fn advance(&mut self, timestamp: Duration) -> Duration {
        let dt = timestamp.saturating_sub(self.last);
        self.last = timestamp;
        dt
    }
}

pub trait GameApp {
    type State;

    fn init_state(&mut self) -> Self::State;

    /// Called once per redraw, before rendering. `input` is drained afterwards.
    fn update_state(&mut self, state: &mut Self::State, input: &InputFrame, dt: Duration);

    /// Frames where this returns `false` keep whatever was presented last.
    fn should_render(&self, _state: &Self::State) -> bool {
        true
    }

    fn render(&mut self, state: &Self::State, gfx: &mut dyn Renderer2d);

    /// Hook for events the driver does not handle itself. Return `true` to swallow the event.
    fn handle_event(&mut self, _event: &Event<()>, _state: &mut Self::State) -> bool {
        false
    }
}

pub fn run_game<G: GameApp + 'static>(config: AppConfig, mut game: G) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(config.canvas.width, config.canvas.height))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels_builder =
        PixelsBuilder::new(config.canvas.width, config.canvas.height, surface_texture);
    if let Some(vsync) = config.vsync {
        pixels_builder = pixels_builder.enable_vsync(vsync);
    }
    let mut renderer = PixelsRenderer2d::new(pixels_builder.build()?, config.canvas)?;
    log::info!(
        "window ready: canvas {}x{}, window {}x{}",
        config.canvas.width,
        config.canvas.height,
        window_size.width,
        window_size.height
    );

    let mut state = game.init_state();
    let mut input = InputFrame::default();
    let origin = Instant::now();
    let mut clock = FrameClock::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if game.handle_event(&event, &mut state) {
            return;
        }

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info!("close requested, exiting");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    let size = SurfaceSize::new(size.width, size.height);
                    if let Err(err) = renderer.resize_window(size) {
                        log::error!("resize failed: {err}");
                    }
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    input.key_events.push(KeyEvent {
                        key: *key,
                        pressed: *key_state == ElementState::Pressed,
                    });
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let dt = clock.advance(origin.elapsed());
                game.update_state(&mut state, &input, dt);
                input.key_events.clear();

                if game.should_render(&state) {
                    renderer.draw_frame(|gfx| game.render(&state, gfx));
                }
                if let Err(err) = renderer.present() {
                    log::error!("present failed: {err}");
                }
            }
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    });

    #[allow(unreachable_code)]
    Ok(())
}
