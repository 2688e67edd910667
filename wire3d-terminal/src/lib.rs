/// Terminal wireframe viewer: event loop, mouse capture, status display
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{render_scene, Camera, InteractionController, PointerButton, Scene, Viewport};

pub mod renderer;

pub use renderer::TermSurface;

/// Status messages disappear on their own after this long
const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// One scroll notch, expressed in the wheel-delta units the controller
/// expects (browser-style, ~40 per notch)
const WHEEL_NOTCH_DELTA: f32 = 40.0;

const KEY_ROTATE_STEP: f32 = 0.1;

/// Main application struct for the terminal wireframe viewer
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    viewport: Viewport,
    surface: TermSurface,
    controller: InteractionController,
    status: Option<(String, Instant)>,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene,
            camera: Camera::default(),
            viewport: Viewport::new(width as u32, height as u32),
            surface: TermSurface::new(width as usize, height as usize),
            // Sensitivity freezes on the width the surface had at startup
            controller: InteractionController::new(width as f32),
            status: None,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Show a transient status message; it auto-clears after a fixed delay.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Drain pending input before drawing the frame
            while event::poll(Duration::from_millis(0))? {
                let ev = event::read()?;
                self.handle_event(ev);
            }

            if let Some((_, since)) = &self.status {
                if since.elapsed() >= STATUS_CLEAR_DELAY {
                    self.status = None;
                }
            }

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Key(KeyEvent { code, .. }) => self.handle_key(code),
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => self.handle_mouse(kind, column as f32, row as f32),
            Event::Resize(width, height) => {
                // The viewport tracks the terminal; the controller's
                // rotation sensitivity deliberately does not.
                self.viewport = Viewport::new(width as u32, height as u32);
                self.surface = TermSurface::new(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('w') | KeyCode::Up => self.rotate_all(KEY_ROTATE_STEP, 0.0, 0.0),
            KeyCode::Char('s') | KeyCode::Down => self.rotate_all(-KEY_ROTATE_STEP, 0.0, 0.0),
            KeyCode::Char('a') | KeyCode::Left => self.rotate_all(0.0, -KEY_ROTATE_STEP, 0.0),
            KeyCode::Char('d') | KeyCode::Right => self.rotate_all(0.0, KEY_ROTATE_STEP, 0.0),
            KeyCode::Char('e') => self.rotate_all(0.0, 0.0, KEY_ROTATE_STEP),
            KeyCode::Char('r') => self.rotate_all(0.0, 0.0, -KEY_ROTATE_STEP),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: f32, y: f32) {
        match kind {
            MouseEventKind::Down(button) => {
                self.controller.pointer_down(map_button(button), x, y);
            }
            MouseEventKind::Up(button) => {
                self.controller.pointer_up(map_button(button));
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                self.controller.pointer_move(&mut self.scene, x, y);
            }
            MouseEventKind::ScrollDown => {
                self.controller.wheel(&mut self.scene, WHEEL_NOTCH_DELTA);
            }
            MouseEventKind::ScrollUp => {
                self.controller.wheel(&mut self.scene, -WHEEL_NOTCH_DELTA);
            }
            _ => {}
        }
    }

    fn rotate_all(&mut self, dx: f32, dy: f32, dz: f32) {
        for object in &mut self.scene.objects {
            object.rotation.rotate(dx, dy, dz);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        render_scene(&self.scene, &self.camera, &self.viewport, &mut self.surface);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.surface.draw(&mut stdout)?;

        // UI overlay on the top row
        let overlay = match &self.status {
            Some((message, _)) => format!("wire3d | FPS: {:.1} | {}", self.fps, message),
            None => format!(
                "wire3d | FPS: {:.1} | LMB drag=Pan MMB drag=Orbit Scroll=Zoom Q=Quit",
                self.fps
            ),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(overlay),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Other,
    }
}
