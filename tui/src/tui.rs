//! The terminal user interface.
//!
//! Every cell is drawn as two terminal columns, so that the cells look
//! roughly square.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, Stylize},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use gridca_lib::{Color, Config, Simulation};
use log::{debug, warn};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

const HELP: &str = "[left] activate  [right] clear  [middle/n/→] step  \
                    [space] run/pause  [c] clear  [q] quit";

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.rgb();
    TermColor::Rgb { r, g, b }
}

/// Restores the terminal when dropped, even after an error.
struct Screen {
    stdout: Stdout,
}

impl Screen {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Screen { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

struct App {
    world: Box<dyn Simulation>,
    name: String,

    /// Terminal size in columns and rows.
    size: (u16, u16),

    /// The cell under the mouse pointer.
    hovered: Option<(usize, usize)>,

    /// The last cell activated in the current stroke.
    last_drag: Option<(usize, usize)>,

    dirty: bool,
    quit: bool,
}

impl App {
    fn new(world: Box<dyn Simulation>, config: &Config) -> io::Result<Self> {
        Ok(App {
            world,
            name: config.automaton.to_string(),
            size: terminal::size()?,
            hovered: None,
            last_drag: None,
            dirty: true,
            quit: false,
        })
    }

    /// Numbers of columns and rows of cells that fit between the bars.
    fn visible(&self) -> (usize, usize) {
        let (width, height) = self.size;
        (
            self.world.cols().min(width as usize / 2),
            self.world.rows().min((height as usize).saturating_sub(2)),
        )
    }

    /// The cell under a terminal position, if there is a visible one.
    fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let (cols, rows) = self.visible();
        let i = (column / 2) as usize;
        let j = (row as usize).checked_sub(1)?;
        (i < cols && j < rows).then_some((i, j))
    }

    fn activate(&mut self, (i, j): (usize, usize)) {
        if let Err(e) = self.world.activate(i, j) {
            warn!("{}", e);
        }
        self.dirty = true;
    }

    fn paint(&mut self, (i, j): (usize, usize)) {
        if let Err(e) = self.world.paint(i, j) {
            warn!("{}", e);
        }
        self.dirty = true;
    }

    fn step(&mut self) {
        self.world.step();
        self.dirty = true;
    }

    fn clear(&mut self) {
        self.world.clear();
        debug!("cleared at generation {}", self.world.generation());
        self.dirty = true;
    }

    fn key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.world.toggle_running();
                self.dirty = true;
            }
            KeyCode::Char('n') | KeyCode::Right => self.step(),
            KeyCode::Char('c') => self.clear(),
            _ => (),
        }
    }

    fn mouse(&mut self, mouse: MouseEvent) {
        let pos = self.cell_at(mouse.column, mouse.row);
        match (mouse.kind, pos) {
            (MouseEventKind::Down(MouseButton::Left), Some(pos)) => {
                self.activate(pos);
                self.last_drag = Some(pos);
            }
            (MouseEventKind::Drag(MouseButton::Left), Some(pos)) => {
                if self.last_drag != Some(pos) {
                    self.paint(pos);
                    self.last_drag = Some(pos);
                }
            }
            (MouseEventKind::Up(MouseButton::Left), _) => self.last_drag = None,
            (MouseEventKind::Down(MouseButton::Right), _) => self.clear(),
            (MouseEventKind::Down(MouseButton::Middle), _) => self.step(),
            _ => (),
        }
        if self.hovered != pos {
            self.hovered = pos;
            self.dirty = true;
        }
    }

    fn status(&self) -> String {
        let state = if self.world.is_running() {
            "running"
        } else {
            "paused"
        };
        let mut status = format!(
            " {}  Gen: {}  {}",
            self.name,
            self.world.generation(),
            state
        );
        if let Some((i, j)) = self.hovered {
            let label = self
                .world
                .text(i, j)
                .or_else(|| self.world.symbol(i, j).map(String::from));
            if let Some(label) = label {
                status.push_str(&format!("  ({}, {}): {}", i, j, label));
            }
        }
        status
    }

    fn bar<W: Write>(out: &mut W, row: u16, width: u16, text: &str) -> io::Result<()> {
        let text: String = text
            .chars()
            .chain(std::iter::repeat(' '))
            .take(width as usize)
            .collect();
        queue!(out, MoveTo(0, row), Print(text.reverse()))
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let (width, height) = self.size;
        let (cols, rows) = self.visible();
        Self::bar(out, 0, width, &self.status())?;
        for j in 0..rows {
            queue!(out, MoveTo(0, j as u16 + 1))?;
            let mut current = None;
            for i in 0..cols {
                let color = self.world.color(i, j);
                if color != current {
                    match color {
                        Some(color) => queue!(out, SetBackgroundColor(term_color(color)))?,
                        None => queue!(out, ResetColor)?,
                    }
                    current = color;
                }
                queue!(out, Print("  "))?;
            }
            queue!(out, ResetColor, Clear(ClearType::UntilNewLine))?;
        }
        queue!(out, MoveTo(0, rows as u16 + 1), Clear(ClearType::FromCursorDown))?;
        Self::bar(out, height.saturating_sub(1), width, HELP)?;
        out.flush()?;
        self.dirty = false;
        Ok(())
    }
}

/// Runs the automaton in the terminal until the user quits.
pub(crate) fn run_with_tui(world: Box<dyn Simulation>, config: &Config) -> io::Result<()> {
    let tick = Duration::from_secs_f64(1.0 / config.frame_rate() as f64);
    let mut app = App::new(world, config)?;
    let mut screen = Screen::enter()?;
    let mut last_tick = Instant::now();

    while !app.quit {
        if app.dirty {
            app.draw(&mut screen.stdout)?;
        }

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.key(key),
                Event::Mouse(mouse) => app.mouse(mouse),
                Event::Resize(width, height) => {
                    app.size = (width, height);
                    queue!(screen.stdout, Clear(ClearType::All))?;
                    app.dirty = true;
                }
                _ => (),
            }
        }

        if last_tick.elapsed() >= tick {
            if app.world.is_running() {
                app.step();
            }
            last_tick = Instant::now();
        }
    }

    debug!(
        "quit {} at generation {}",
        app.name,
        app.world.generation()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridca_lib::Automaton;

    fn new_app(automaton: Automaton, size: (u16, u16)) -> Result<App, gridca_lib::Error> {
        let config = Config::new(automaton, 4, 5).set_seeded(false);
        Ok(App {
            world: config.world()?,
            name: config.automaton.to_string(),
            size,
            hovered: None,
            last_drag: None,
            dirty: true,
            quit: false,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn cells_under_the_mouse() -> Result<(), gridca_lib::Error> {
        let app = new_app(Automaton::Conway, (80, 24))?;
        assert_eq!(app.cell_at(0, 0), None);
        assert_eq!(app.cell_at(0, 1), Some((0, 0)));
        assert_eq!(app.cell_at(9, 4), Some((4, 3)));
        assert_eq!(app.cell_at(10, 1), None);
        assert_eq!(app.cell_at(0, 5), None);
        assert_eq!(app.cell_at(0, 23), None);

        // Rows hidden behind the help bar.
        let small = new_app(Automaton::Conway, (80, 4))?;
        assert_eq!(small.cell_at(0, 2), Some((0, 1)));
        assert_eq!(small.cell_at(0, 3), None);
        Ok(())
    }

    #[test]
    fn clicks_on_the_bars() -> Result<(), gridca_lib::Error> {
        let mut app = new_app(Automaton::Conway, (80, 24))?;
        let left = MouseEventKind::Down(MouseButton::Left);
        app.mouse(mouse(left, 0, 0));
        app.mouse(mouse(left, 0, 23));
        assert_eq!(app.world.plaintext(), ".....\n.....\n.....\n.....\n");
        assert_eq!(app.hovered, None);
        Ok(())
    }

    #[test]
    fn dragging_paints() -> Result<(), gridca_lib::Error> {
        let mut app = new_app(Automaton::Conway, (80, 24))?;
        app.mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 1));
        app.mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1));
        app.mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 2, 1));
        app.mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, 1));
        assert_eq!(app.world.plaintext(), "oo...\n.....\n.....\n.....\n");

        // A new stroke toggles the cell it starts on, then only adds cells.
        app.mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 1));
        app.mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 0, 1));
        assert_eq!(app.world.plaintext(), "o....\n.....\n.....\n.....\n");
        assert_eq!(app.hovered, Some((0, 0)));
        Ok(())
    }
}
