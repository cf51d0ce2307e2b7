//! Terminal host for the calculator, using crossterm and ratatui.
//!
//! The [`App`] owns its [`Engine`] outright; every key press or keypad click
//! becomes one engine action, followed by one redraw.

mod keypad;

pub use keypad::{Button, COLUMNS, KEYPAD, Keypad, render_display};

use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode as CKeyCode,
        KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::config::Config;
use crate::engine::Engine;
use crate::key::{InputEvent, KeyCode, KeyEvent, Modifiers};
use crate::traits::Clipboard;
use crate::types::{Action, DisplayMode};

/// Screen regions, derived from the full frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);
    Regions {
        display: chunks[0],
        keypad: chunks[1],
        status: chunks[2],
    }
}

pub struct App<C: Clipboard> {
    engine: Engine,
    display_mode: DisplayMode,
    clipboard: C,
    area: Rect,
    message: String,
    should_quit: bool,
}

impl<C: Clipboard> App<C> {
    pub fn new(display_mode: DisplayMode, clipboard: C) -> Self {
        Self {
            engine: Engine::new(),
            display_mode,
            clipboard,
            area: Rect::default(),
            message: String::new(),
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Record the frame area so mouse clicks can be matched to buttons.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// The display text as the display surface shows it.
    pub fn rendered_display(&self) -> String {
        render_display(self.engine.display_value(), self.display_mode)
    }

    pub fn handle_crossterm_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: CKeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match (key.code, key.modifiers) {
            (CKeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (CKeyCode::Char('q'), _) => self.should_quit = true,
            (CKeyCode::Char('y'), _) => self.copy_display(),
            _ => {
                if let Some(input) = convert_crossterm_key(key) {
                    self.dispatch(input);
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some(action) = Keypad::hit(regions(self.area).keypad, mouse.column, mouse.row)
        {
            self.dispatch(InputEvent::Press(action));
        }
    }

    fn dispatch(&mut self, input: InputEvent) {
        if self.engine.handle_event(input).is_some() {
            self.message.clear();
        }
    }

    fn copy_display(&mut self) {
        let text = self.engine.display_value().to_string();
        self.message = format!("copied {text}");
        self.clipboard.set(text);
    }
}

fn convert_crossterm_key(key: CKeyEvent) -> Option<InputEvent> {
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Esc => KeyCode::Esc,
        _ => return None,
    };

    let mut mods = Modifiers::empty();
    mods.set(Modifiers::SHIFT, key.modifiers.contains(KeyModifiers::SHIFT));
    mods.set(Modifiers::CTRL, key.modifiers.contains(KeyModifiers::CONTROL));
    mods.set(Modifiers::ALT, key.modifiers.contains(KeyModifiers::ALT));
    mods.set(Modifiers::META, key.modifiers.contains(KeyModifiers::META));

    Some(InputEvent::Key(KeyEvent { code, mods }))
}

pub fn draw<C: Clipboard>(f: &mut Frame, app: &App<C>) {
    let regions = regions(f.size());

    let display = Paragraph::new(app.rendered_display())
        .alignment(Alignment::Right)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("calc_mini"));
    f.render_widget(display, regions.display);

    let snapshot = app.engine.snapshot();
    for (cell, button) in Keypad::buttons(regions.keypad) {
        let label = match button.action {
            Action::Clear => app.engine.clear_label(),
            _ => button.label,
        };
        let mut style = match button.action {
            Action::Operator(_) | Action::Equals => Style::default().fg(Color::Yellow),
            Action::Clear | Action::ToggleSign | Action::Percent => {
                Style::default().fg(Color::Gray)
            }
            _ => Style::default(),
        };
        if snapshot.waiting_for_operand
            && matches!(button.action, Action::Operator(op) if snapshot.operator == Some(op))
        {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let widget = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, cell);
    }

    let status = if app.message.is_empty() {
        "q quit · y copy · esc clear"
    } else {
        app.message.as_str()
    };
    f.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        regions.status,
    );
}

/// Owns the terminal while the calculator runs.
///
/// Raw mode, the alternate screen and mouse capture are acquired once in
/// [`TerminalSession::start`] and released once on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
        debug!("terminal session restored");
    }
}

/// Run the calculator until the user quits.
pub fn run<C: Clipboard>(config: &Config, clipboard: C) -> io::Result<()> {
    let mut session = TerminalSession::start()?;
    let mut app = App::new(config.display, clipboard);

    while !app.should_quit() {
        session.terminal().draw(|f| {
            app.set_area(f.size());
            draw(f, &app);
        })?;
        app.handle_crossterm_event(event::read()?);
    }

    Ok(())
}
