use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, category_chart::CategoryChart, monthly_panel::MonthlyPanel,
    status_bar::StatusBar, summary_cards::SummaryCards,
};
use crate::loader::OverviewLoader;
use crate::state::DashboardState;

pub struct App {
    loader: OverviewLoader,
    state: DashboardState,
    summary_cards: SummaryCards,
    category_chart: CategoryChart,
    monthly_panel: MonthlyPanel,
    status_bar: StatusBar,
}

impl App {
    /// Create the dashboard and perform the first load
    pub fn new(loader: OverviewLoader) -> Self {
        let state = DashboardState::new(loader.source_name());
        let mut app = Self {
            loader,
            state,
            summary_cards: SummaryCards::new(),
            category_chart: CategoryChart::new(),
            monthly_panel: MonthlyPanel::new(),
            status_bar: StatusBar::new(),
        };
        app.reload();
        app
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Fetch and aggregate again. On failure the previous overview stays on
    /// screen and the error goes to the status bar.
    pub fn reload(&mut self) {
        match self.loader.load() {
            Ok(snapshot) => self.state.apply_snapshot(snapshot),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load transactions");
                self.state.error_message = Some(e.to_string());
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header and cards
                Constraint::Min(0),    // Charts
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);

        self.summary_cards.render(frame, chunks[0], &self.state);
        self.category_chart.render(frame, charts[0], &self.state);
        self.monthly_panel.render(frame, charts[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') => {
                self.reload();
                return;
            }
            _ => {}
        }

        if self.category_chart.handle_key(key_event, &mut self.state) == EventResult::NotHandled {
            tracing::trace!(code = ?key_event.code, "Unbound key");
        }
    }
}
