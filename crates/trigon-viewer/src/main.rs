//! Interactive viewer for the procedural triangle pipelines.
//!
//! Controls:
//! - Space       toggle plain / rainbow pipeline
//! - Left drag   pick the clear color from the cursor position
//! - Escape      quit

use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use trigon_engine::core::{App, AppControl, FrameCtx};
use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::paint::Color;
use trigon_engine::render::TriangleRenderer;
use trigon_engine::stage::Variant;
use trigon_engine::window::{Runtime, RuntimeConfig};

struct Viewer {
    renderer: TriangleRenderer,
    variant: Variant,
    clear: Color,
    dragging: bool,
    size: PhysicalSize<u32>,
}

impl Viewer {
    fn new() -> Self {
        Self {
            renderer: TriangleRenderer::new(),
            variant: Variant::Plain,
            clear: Color::BLUE,
            dragging: false,
            size: PhysicalSize::new(0, 0),
        }
    }
}

impl App for Viewer {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::Resized(new_size) => {
                self.size = *new_size;
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Space) if !event.repeat => {
                        self.variant = self.variant.toggled();
                        log::info!("pipeline variant: {:?}", self.variant);
                    }
                    PhysicalKey::Code(KeyCode::Escape) => return AppControl::Exit,
                    _ => {}
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.dragging = *button == MouseButton::Left && *state == ElementState::Pressed;
            }

            WindowEvent::CursorMoved { position, .. } if self.dragging => {
                // Clear color follows the cursor while dragging.
                self.clear = Color::new(
                    (position.x / self.size.width.max(1) as f64) as f32,
                    (position.y / self.size.height.max(1) as f64) as f32,
                    1.0,
                    1.0,
                );
            }

            WindowEvent::CursorLeft { .. } => {
                self.dragging = false;
                self.clear = Color::BLACK;
            }

            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let variant = self.variant;
        let renderer = &mut self.renderer;

        ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, variant);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("trigon viewer starting (space toggles the rainbow pipeline)");

    Runtime::run(
        RuntimeConfig {
            title: "trigon".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        Viewer::new(),
    )
}
