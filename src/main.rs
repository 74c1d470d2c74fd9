//! Soccer Pong entry point
//!
//! Opens the window, then runs one simulation step, one draw and one
//! present per frame at a fixed 60 Hz.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use soccer_pong::assets::Assets;
use soccer_pong::audio::AudioManager;
use soccer_pong::consts::*;
use soccer_pong::platform::{FpsMeter, FrameClock, InputCollector};
use soccer_pong::renderer::Renderer;
use soccer_pong::sim::{GameState, tick};
use soccer_pong::{AppError, Settings};

/// Game instance holding everything the frame loop touches
struct Game {
    settings: Settings,
    assets: Assets,
    audio: AudioManager,
    state: GameState,
    input: InputCollector,
    clock: FrameClock,
    fps: FpsMeter,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    /// First fatal error; the loop exits once it is set
    error: Option<AppError>,
}

impl Game {
    fn new(settings: Settings, assets: Assets, audio: AudioManager) -> Self {
        let now = Instant::now();
        Self {
            state: GameState::new(settings.tuning.clone()),
            settings,
            assets,
            audio,
            input: InputCollector::new(),
            clock: FrameClock::new(TARGET_FPS, now),
            fps: FpsMeter::new(now),
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.window_title.clone())
            .with_inner_size(LogicalSize::new(FRAME_WIDTH, FRAME_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(AppError::CreateWindow)?,
        );
        let renderer = Renderer::new(Arc::clone(&window)).map_err(AppError::CreateRenderer)?;

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Step the simulation if a frame is due, then draw and present
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let now = Instant::now();
        let input = self.input.snapshot();
        if self.clock.is_due(now) {
            tick(&mut self.state, &input);
            self.audio.play_events(&self.state.drain_events());
            self.clock.advance(now);
            if let Some(fps) = self.fps.frame(now) {
                log::trace!("{fps:.1} fps, frame {}", self.state.time_ticks);
            }
        }

        renderer.draw(&self.state, &self.assets, &input.pointer);
        if let Err(err) = renderer.present() {
            self.fail(event_loop, AppError::Present(err));
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.focus_lost(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.input.key(code, state),
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self
                    .renderer
                    .as_ref()
                    .and_then(|r| r.window_to_frame(position.x, position.y));
                self.input.cursor_moved(pos);
            }
            WindowEvent::CursorLeft { .. } => self.input.cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.mouse_button(button, state);
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.clock.is_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}

fn run() -> Result<(), AppError> {
    log::info!("Soccer Pong starting");

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path);
    let assets = Assets::load(&settings.asset_dir)?;
    let audio = AudioManager::new(&settings.asset_dir, &settings)?;

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let mut game = Game::new(settings, assets, audio);
    event_loop.run_app(&mut game).map_err(AppError::EventLoopRun)?;

    match game.error.take() {
        Some(err) => Err(err),
        None => {
            log::info!("Goodbye");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
