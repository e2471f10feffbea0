//! Application state and input handling

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use divdash_sdk::prelude::*;
use ratatui::style::Color;
use std::time::{Duration, Instant};
use tracing::debug;

/// Terminal color theme
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(10, 14, 20);           // Deep blue-black
    pub const FG: Color = Color::Rgb(179, 177, 173);        // Warm gray
    pub const ACCENT: Color = Color::Rgb(0, 217, 255);      // Cyan
    pub const GAIN: Color = Color::Rgb(0, 255, 136);        // Green
    pub const LOSS: Color = Color::Rgb(255, 68, 68);        // Red
    pub const HIGHLIGHT: Color = Color::Rgb(255, 215, 0);   // Gold
    pub const MUTED: Color = Color::Rgb(74, 74, 74);        // Dim gray
    pub const BORDER: Color = Color::Rgb(42, 46, 56);       // Subtle border
    pub const PAID: Color = Color::Rgb(34, 197, 94);
    pub const UPCOMING: Color = Color::Rgb(234, 179, 8);
    pub const PENDING: Color = Color::Rgb(120, 124, 132);
    pub const WARNING: Color = Color::Rgb(255, 200, 0);     // Amber

    /// Terminal color for a payment status color
    pub fn status(color: StatusColor) -> Color {
        match color {
            StatusColor::Green => Self::PAID,
            StatusColor::Yellow => Self::UPCOMING,
            StatusColor::Gray => Self::PENDING,
        }
    }

    pub fn trend(trend: Trend) -> Color {
        match trend {
            Trend::Up => Self::GAIN,
            Trend::Down => Self::LOSS,
            Trend::Flat => Self::FG,
        }
    }
}

/// Focusable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Ticker,
    Timeframe,
    Quantity,
    StartDate,
    EndDate,
}

impl Focus {
    pub fn all() -> &'static [Focus] {
        &[
            Focus::Ticker,
            Focus::Timeframe,
            Focus::Quantity,
            Focus::StartDate,
            Focus::EndDate,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Focus::Ticker => "Ticker",
            Focus::Timeframe => "Timeframe",
            Focus::Quantity => "Quantity",
            Focus::StartDate => "Start",
            Focus::EndDate => "End",
        }
    }

    /// Form field this focus edits, for matching validation errors
    pub fn field(&self) -> FormField {
        match self {
            Focus::Ticker => FormField::Ticker,
            Focus::Timeframe => FormField::Timeframe,
            Focus::Quantity => FormField::Quantity,
            Focus::StartDate => FormField::StartDate,
            Focus::EndDate => FormField::EndDate,
        }
    }

    fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Work the event loop has to start after a key press
#[derive(Debug)]
pub enum Command {
    Quit,
    /// Run the analysis for this ticket off the UI thread
    Analyze(RequestTicket),
}

/// Results coming back from spawned tasks
#[derive(Debug)]
pub enum AppMessage {
    Probe(RestResult<()>),
    Analysis(RequestTicket, RestResult<PortfolioSnapshot>),
}

pub struct App {
    // UI State
    pub form: AnalysisForm,
    pub focus: Focus,
    pub show_form: bool,
    /// Hide the form after a successful analysis
    pub auto_hide_form: bool,
    pub frame_count: u64,
    pub start_time: Instant,

    // Data
    pub controller: PortfolioController,
    /// Date used to find the current period on the timeline
    pub today: NaiveDate,
}

impl App {
    pub fn new(controller: PortfolioController, today: NaiveDate) -> Self {
        Self {
            form: default_form(),
            focus: Focus::Ticker,
            show_form: true,
            auto_hide_form: true,
            frame_count: 0,
            start_time: Instant::now(),
            controller,
            today,
        }
    }

    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Spinner glyph while an analysis is running
    pub fn spinner(&self) -> &'static str {
        const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
        FRAMES[((self.frame_count / 8) % FRAMES.len() as u64) as usize]
    }

    /// Timeline for the displayed snapshot
    ///
    /// An explicit `as_of` in the controller config wins over `today`.
    pub fn timeline(&self) -> Timeline {
        let snapshot = self.controller.displayed();
        let as_of = self
            .controller
            .config()
            .as_of
            .unwrap_or_else(|| AsOf::from_date(self.today, &snapshot.dividend_frequency));
        Timeline::for_snapshot(snapshot, Some(as_of))
    }

    /// Text currently in a form field
    pub fn field_value(&self, focus: Focus) -> String {
        match focus {
            Focus::Ticker => self.form.ticker.clone(),
            Focus::Timeframe => self.form.timeframe.as_str().to_string(),
            Focus::Quantity => self.form.quantity.clone(),
            Focus::StartDate => self.form.start_date.clone(),
            Focus::EndDate => self.form.end_date.clone(),
        }
    }

    /// Handle a key press, returning work for the event loop
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Esc => {
                self.show_form = !self.show_form;
                None
            }
            KeyCode::F(2) => {
                self.auto_hide_form = !self.auto_hide_form;
                None
            }
            KeyCode::Enter => self.submit(),
            _ if self.show_form => {
                self.edit_form(key.code);
                None
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                None
            }
            _ => None,
        }
    }

    fn edit_form(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus == Focus::Timeframe => {
                self.form.timeframe = self.form.timeframe.prev();
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focus == Focus::Timeframe => {
                self.form.timeframe = self.form.timeframe.next();
            }
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Ticker => Some(&mut self.form.ticker),
            Focus::Quantity => Some(&mut self.form.quantity),
            Focus::StartDate => Some(&mut self.form.start_date),
            Focus::EndDate => Some(&mut self.form.end_date),
            Focus::Timeframe => None,
        }
    }

    fn insert_char(&mut self, c: char) {
        let accepted = match self.focus {
            Focus::Ticker => c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='),
            Focus::Quantity => c.is_ascii_digit(),
            Focus::StartDate | Focus::EndDate => c.is_ascii_digit() || c == '-',
            Focus::Timeframe => false,
        };
        if !accepted {
            return;
        }

        let focus = self.focus;
        if let Some(text) = self.focused_text() {
            let limit = if focus == Focus::Ticker { 16 } else { 10 };
            if text.chars().count() < limit {
                // Tickers are uppercased while typing
                text.push(if focus == Focus::Ticker { c.to_ascii_uppercase() } else { c });
            }
        }
    }

    fn submit(&mut self) -> Option<Command> {
        match self.controller.begin(&self.form) {
            Ok(ticket) => Some(Command::Analyze(ticket)),
            Err(err) => {
                debug!(error = %err, "Form rejected");
                self.show_form = true;
                self.focus = focus_for(err.field());
                None
            }
        }
    }

    /// Apply a result from a spawned task
    pub fn apply(&mut self, message: AppMessage) {
        match message {
            AppMessage::Probe(result) => {
                self.controller.record_probe(result);
            }
            AppMessage::Analysis(ticket, result) => {
                let succeeded = result.is_ok();
                let resolution = self.controller.resolve(ticket, result);
                if resolution == Resolution::Applied {
                    if succeeded {
                        self.controller.record_probe(Ok(()));
                    }
                    // Hide the form once there is a real result to look at
                    if self.auto_hide_form
                        && matches!(self.controller.state(), ControllerState::Ready(_))
                    {
                        self.show_form = false;
                    }
                }
            }
        }
    }
}

fn focus_for(field: Option<FormField>) -> Focus {
    match field {
        Some(FormField::Ticker) | None => Focus::Ticker,
        Some(FormField::Timeframe) => Focus::Timeframe,
        Some(FormField::Quantity) => Focus::Quantity,
        Some(FormField::StartDate) => Focus::StartDate,
        Some(FormField::EndDate) => Focus::EndDate,
    }
}
