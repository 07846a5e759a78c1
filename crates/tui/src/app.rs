use std::{cell::RefCell, io, rc::Rc, thread, time::Duration};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tfm_core::{
    view_model::TITLE, Action, AppConfig, GameSession, ResourceCollection, ResourceKind,
    ResourceState,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::big_digits;

const TICK_RATE: Duration = Duration::from_millis(250);
const GRID_COLUMNS: usize = 3;
const GRID_ROWS: usize = ResourceKind::ALL.len() / GRID_COLUMNS;
const PICKER_PAGE: i32 = 10;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    selection_bg: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Header text, rewritten by the board callbacks.
#[derive(Debug)]
struct HeaderLabels {
    generation: i32,
    generation_label: String,
    terraform_label: String,
}

impl HeaderLabels {
    fn new(generation: i32, terraform: i32) -> Self {
        Self {
            generation,
            generation_label: ResourceCollection::display_generation(generation),
            terraform_label: ResourceCollection::display_terraform(terraform),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TerraformPicker {
    value: i32,
    min: i32,
    max: i32,
}

impl TerraformPicker {
    fn new(current: i32, min: i32, max: i32) -> Self {
        Self {
            value: current.clamp(min, max),
            min,
            max,
        }
    }

    fn move_by(&mut self, delta: i32) {
        self.value = self.value.saturating_add(delta).clamp(self.min, self.max);
    }
}

/// Terminal front-end for one play session.
pub struct TfmApp {
    config: AppConfig,
    session: GameSession,
    header: Rc<RefCell<HeaderLabels>>,
    picker: Option<TerraformPicker>,
    status: String,
    should_quit: bool,
    theme: Theme,
}

impl TfmApp {
    pub fn new(config: AppConfig) -> Self {
        let mut session = GameSession::new();
        let header = Rc::new(RefCell::new(HeaderLabels::new(
            session.board().generation(),
            session.board().terraform(),
        )));

        let generation_header = Rc::clone(&header);
        session.board_mut().on_generation_change(move |value| {
            let mut labels = generation_header.borrow_mut();
            labels.generation = value;
            labels.generation_label = ResourceCollection::display_generation(value);
        });
        let terraform_header = Rc::clone(&header);
        session.board_mut().on_terraform_change(move |value| {
            terraform_header.borrow_mut().terraform_label =
                ResourceCollection::display_terraform(value);
        });

        Self {
            config,
            session,
            header,
            picker: None,
            status: "Ready".to_string(),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("starting terminal UI");
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }

            match event_rx.recv().await {
                Some(AppEvent::Input(event)) => self.handle_input(event),
                Some(AppEvent::Tick) => {}
                None => break,
            }
        }

        restore_terminal(&mut terminal)?;
        info!(
            generation = self.session.board().generation(),
            "terminal UI closed"
        );
        Ok(())
    }

    fn set_status(&mut self, message: String) {
        self.status = message;
    }

    fn apply(&mut self, action: Action) {
        self.session.apply(action);
    }

    fn handle_input(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            if self.picker.is_some() {
                self.handle_picker_key(key);
            } else {
                self.handle_key(key);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let selected = self.session.selected();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Action::Tap(selected));
                self.set_status(format!("Tapped {selected}"));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.adjust_quantity(selected, self.config.quantity_step)
            }
            KeyCode::Char('-') => self.adjust_quantity(selected, -self.config.quantity_step),
            KeyCode::Char(']') => self.adjust_production(selected, 1),
            KeyCode::Char('[') => self.adjust_production(selected, -1),
            KeyCode::Char('n') => {
                self.apply(Action::AdvanceGeneration);
                let label = self.header.borrow().generation_label.clone();
                self.set_status(format!("Advanced to {label}"));
            }
            KeyCode::Char('t') => self.open_picker(),
            KeyCode::Char('r') => {
                self.apply(Action::Reset);
                self.set_status("All values reset".to_string());
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => picker.move_by(1),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => picker.move_by(-1),
            KeyCode::PageUp => picker.move_by(PICKER_PAGE),
            KeyCode::PageDown => picker.move_by(-PICKER_PAGE),
            KeyCode::Home => picker.value = picker.min,
            KeyCode::End => picker.value = picker.max,
            KeyCode::Enter => {
                let value = picker.value;
                self.picker = None;
                self.apply(Action::SetTerraform(value));
                let label = self.header.borrow().terraform_label.clone();
                self.set_status(format!("{label} set"));
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('t') => {
                self.picker = None;
                self.set_status("Terraform unchanged".to_string());
            }
            _ => {}
        }
    }

    fn open_picker(&mut self) {
        let picker = TerraformPicker::new(
            self.session.board().terraform(),
            self.config.terraform_min,
            self.config.terraform_max,
        );
        debug!(?picker, "terraform picker opened");
        self.picker = Some(picker);
    }

    fn move_selection(&mut self, dx: isize, dy: isize) {
        let index = self.session.selected().index();
        let col = (index % GRID_COLUMNS) as isize + dx;
        let row = (index / GRID_COLUMNS) as isize + dy;
        let col = col.clamp(0, GRID_COLUMNS as isize - 1) as usize;
        let row = row.clamp(0, GRID_ROWS as isize - 1) as usize;
        let kind = ResourceKind::ALL[row * GRID_COLUMNS + col];
        if kind != self.session.selected() {
            self.apply(Action::Tap(kind));
            self.set_status(format!("Selected {kind}"));
        }
    }

    fn adjust_quantity(&mut self, kind: ResourceKind, delta: i32) {
        self.apply(Action::AdjustQuantity { kind, delta });
        let label = self.session.resources().resource(kind).quantity_label();
        self.set_status(format!("{kind} {label}"));
    }

    fn adjust_production(&mut self, kind: ResourceKind, delta: i32) {
        self.apply(Action::AdjustProduction { kind, delta });
        let label = self.session.resources().resource(kind).production_label();
        self.set_status(format!("{kind} {label}"));
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(big_digits::HEIGHT + 2),
                Constraint::Min(6),
                Constraint::Length(4),
            ])
            .split(area);

        self.render_header(frame, layout[0]);
        self.render_cards(frame, layout[1]);
        self.render_status(frame, layout[2]);

        if let Some(picker) = &self.picker {
            self.render_picker(frame, picker);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                TITLE,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(10)])
            .split(inner);

        let labels = self.header.borrow();
        let digits: Vec<Line> = big_digits::render(labels.generation)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(self.theme.accent))))
            .collect();
        frame.render_widget(
            Paragraph::new(digits).alignment(Alignment::Center),
            columns[0],
        );

        let lines = vec![
            Line::from(Span::styled(
                labels.generation_label.clone(),
                Style::default()
                    .fg(self.theme.primary_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                labels.terraform_label.clone(),
                Style::default().fg(self.theme.warning),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "n next generation · t set terraform · r reset",
                Style::default().fg(self.theme.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), columns[1]);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
            .split(area);
        let mut resources = self.session.resources().all_resources();
        for row in rows.iter() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row);
            for cell in cells.iter() {
                if let Some(resource) = resources.next() {
                    self.render_card(frame, *cell, resource);
                }
            }
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, resource: &ResourceState) {
        let selected = resource.kind() == self.session.selected();
        let border_style = if selected {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(resource.title());

        let production_style = if resource.production_factor() < 0 {
            Style::default().fg(self.theme.danger)
        } else {
            Style::default().fg(self.theme.primary_fg)
        };
        let lines = vec![
            Line::from(Span::styled(resource.production_label(), production_style)),
            Line::from(resource.quantity_label()),
            Line::from(Span::styled(
                format!(
                    "Range {}..{}",
                    resource.minimum_production(),
                    resource.maximum_production()
                ),
                Style::default().fg(self.theme.muted),
            )),
        ];
        let mut paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        if selected {
            paragraph = paragraph.style(Style::default().bg(self.theme.selection_bg));
        }
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Status");
        let started = self
            .session
            .started_at()
            .with_timezone(&Local)
            .format("%H:%M");
        let secondary = format!(
            "Session started {started}  ·  ←↑↓→ select  +/- quantity  [/] production  q quit"
        );
        let paragraph = Paragraph::new(vec![
            Line::from(self.status.clone()),
            Line::from(Span::styled(secondary, Style::default().fg(self.theme.muted))),
        ])
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_picker(&self, frame: &mut Frame, picker: &TerraformPicker) {
        let area = centered_rect(40, 9, frame.size());
        frame.render_widget(Clear, area);
        let lines = vec![
            Line::from(Span::styled(
                ResourceCollection::display_terraform(picker.value),
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Range {}..{}", picker.min, picker.max),
                Style::default().fg(self.theme.muted),
            )),
            Line::from(""),
            Line::from("↑/↓ ±1  PgUp/PgDn ±10"),
            Line::from("Enter set · Esc cancel"),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title("Terraform"),
            )
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
