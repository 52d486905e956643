//! Desktop simulator for the balance-chart reveal animation.
//!
//! Renders the sample balance chart in an SDL2 window via
//! `embedded-graphics-simulator` and plays the left-to-right reveal.
//!
//! # Key bindings
//!
//! | Key | Action                            |
//! |-----|-----------------------------------|
//! | R   | Restart the reveal animation      |
//! | S   | Toggle smooth / linear curve      |
//! | E   | Toggle linear / fast-out easing   |
//! | G   | Toggle the grid-only panel        |
//! | Q   | Quit                              |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use balance_chart::animation::{AnimationConfig, Easing, RevealAnimation};
use balance_chart::chart::constants::COLOR_CHART_BACKGROUND;
use balance_chart::chart::{Chart, ChartResult, GridPanel};
use balance_chart::framebuffer::FrameBuffer;
use balance_chart::layout::{CHART_ASPECT_RATIO, CHART_PADDING_PX, chart_frame};
use balance_chart::sample_data::SAMPLE_BALANCES;
use balance_chart::ui::Drawable;

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Simulated display width in pixels.
const DISPLAY_WIDTH_PX: u32 = 320;

/// Simulated display height in pixels.
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Which widget fills the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum View {
    Chart,
    GridOnly,
}

/// Everything shown in the window.
struct Scene {
    chart: Chart,
    panel: GridPanel,
    animation: RevealAnimation,
    view: View,
}

impl Scene {
    fn new(screen: Rectangle) -> ChartResult<Self> {
        let frame = chart_frame(screen, CHART_PADDING_PX, CHART_ASPECT_RATIO);
        info!("Chart frame: {:?}", frame);

        let chart = Chart::new(frame, &SAMPLE_BALANCES)?;
        let panel = GridPanel::new(frame);

        let mut animation = RevealAnimation::new(AnimationConfig::default());
        animation.start();

        Ok(Self {
            chart,
            panel,
            animation,
            view: View::Chart,
        })
    }

    /// Apply a key press. Returns `true` when the whole screen must be redrawn.
    fn handle_key(&mut self, keycode: Keycode) -> bool {
        match keycode {
            Keycode::R => {
                info!("Restarting reveal animation");
                self.animation.restart();
                false
            }
            Keycode::S => {
                let interpolation = self.chart.config().interpolation.toggled();
                info!("Interpolation: {:?}", interpolation);
                self.chart.set_interpolation(interpolation);
                false
            }
            Keycode::E => {
                let easing = match self.animation.config().easing {
                    Easing::Linear => Easing::FastOutSlowIn,
                    _ => Easing::Linear,
                };
                info!("Easing: {:?}", easing);
                self.animation.set_easing(easing);
                self.animation.restart();
                false
            }
            Keycode::G => {
                self.view = match self.view {
                    View::Chart => View::GridOnly,
                    View::GridOnly => View::Chart,
                };
                info!("View: {:?}", self.view);
                self.chart.mark_dirty();
                self.panel.mark_dirty();
                true
            }
            _ => false,
        }
    }

    /// Advance the animation by one frame.
    fn tick(&mut self, dt: Duration) {
        let progress = self.animation.advance(dt);
        self.chart.set_progress(progress);
    }

    fn is_dirty(&self) -> bool {
        match self.view {
            View::Chart => self.chart.is_dirty(),
            View::GridOnly => self.panel.is_dirty(),
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        match self.view {
            View::Chart => {
                self.chart.draw(display)?;
                self.chart.mark_clean();
            }
            View::GridOnly => {
                self.panel.draw(display)?;
                self.panel.mark_clean();
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting balance-chart simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: R=Restart  S=Smooth/Linear  E=Easing  G=GridOnly  Q=Quit");

    let screen_size = Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX);
    let screen = Rectangle::new(Point::zero(), screen_size);

    let mut scene = match Scene::new(screen) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Sample data cannot be charted: {}", e);
            return;
        }
    };

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(screen_size);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Balance Chart Simulator", &output_settings);

    // All drawing goes through the framebuffer; only changed pixels reach the window
    let mut framebuffer = FrameBuffer::new(screen_size, COLOR_CHART_BACKGROUND);
    framebuffer.invalidate();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = scene.draw(&mut framebuffer);
    let _ = framebuffer.flush(&mut display);
    window.update(&display);

    let mut last_frame = Instant::now();

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if scene.handle_key(keycode) {
                        let _ = framebuffer.clear(COLOR_CHART_BACKGROUND);
                    }
                }

                _ => {}
            }
        }

        // --- Animation tick -----------------------------------------------
        scene.tick(frame_start.duration_since(last_frame));
        last_frame = frame_start;

        // --- Render -------------------------------------------------------
        if scene.is_dirty() {
            let _ = scene.draw(&mut framebuffer);
            let _ = framebuffer.flush(&mut display);
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
