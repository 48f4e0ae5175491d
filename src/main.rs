use anyhow::Result;
use glam::{Vec2, Vec4};
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputEvent, InputManager};
use engine::physics::Bounds;
use engine::renderer::{Circle, Renderer};
use game::{Sandbox, BALL_RADIUS};

/// Initial window size; also the size of the simulation space
const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 720.0;

const BALL_COLOR: Vec4 = Vec4::ONE;
const AIM_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.35);

/// Everything the event loop drives
struct App {
    window: Arc<Window>,
    renderer: Renderer,
    sandbox: Sandbox,
    input: InputManager,
    game_loop: GameLoop,
    /// Paused because the window lost focus (not by the user)
    focus_paused: bool,
}

impl App {
    fn new(window: Arc<Window>) -> Result<Self> {
        let world_size = Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        let renderer = pollster::block_on(Renderer::new(window.clone(), world_size))?;
        let sandbox = Sandbox::new(Bounds::new(WINDOW_WIDTH, WINDOW_HEIGHT))?;

        Ok(Self {
            window,
            renderer,
            sandbox,
            input: InputManager::default(),
            game_loop: GameLoop::new(),
            focus_paused: false,
        })
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.renderer.resize(physical_size);
            }
            WindowEvent::Focused(focused) => self.handle_focus(focused),
            WindowEvent::CursorMoved { position, .. } => {
                let screen = Vec2::new(position.x as f32, position.y as f32);
                let world = self.renderer.camera().screen_to_world(screen);
                self.input.process_cursor_moved(world.into());
            }
            WindowEvent::CursorLeft { .. } => self.input.cancel_pointer(),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input
                    .process_mouse_button(button, state, Instant::now());
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.process_keyboard_event(&event);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.frame(elwt) {
                    error!("Frame failed: {:#}", err);
                    elwt.exit();
                }
            }
            _ => {}
        }
    }

    /// Pause while the window is in the background, without overriding a
    /// pause the user asked for
    fn handle_focus(&mut self, focused: bool) {
        if focused {
            if self.focus_paused {
                self.focus_paused = false;
                self.game_loop.resume();
            }
        } else {
            self.input.cancel_pointer();
            if !self.game_loop.is_paused() {
                self.focus_paused = true;
                self.game_loop.pause();
            }
        }
    }

    /// Apply input, step the simulation and draw it
    fn frame(&mut self, elwt: &EventLoopWindowTarget<()>) -> Result<()> {
        for event in self.input.drain() {
            match event {
                InputEvent::Gesture(gesture) => {
                    self.sandbox.spawn(&gesture);
                }
                InputEvent::Action(Action::TogglePause) => {
                    self.focus_paused = false;
                    self.game_loop.toggle_pause();
                }
                InputEvent::Action(Action::Clear) => self.sandbox.clear(),
                InputEvent::Action(Action::Quit) => {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return Ok(());
                }
                InputEvent::Action(Action::Spawn) => {}
            }
        }

        let ticks = self.game_loop.begin_frame();
        self.sandbox.update(ticks, self.game_loop.fixed_timestep());

        let mut circles: Vec<Circle> = self
            .sandbox
            .bodies()
            .map(|body| Circle::new(body.position().into(), body.radius(), BALL_COLOR))
            .collect();
        if let Some(origin) = self.input.aim_origin() {
            circles.push(Circle::new(origin.into(), BALL_RADIUS, AIM_COLOR));
        }

        self.renderer.render(&circles)
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Bouncy Balls...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Bouncy Balls")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut app = App::new(window)?;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => app.handle_window_event(event, elwt),
            Event::AboutToWait => {
                // Request redraw on next frame
                app.window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
