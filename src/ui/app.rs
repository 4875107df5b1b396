//! Main application state and UI loop
//!
//! Contains the App struct and the fetch/render/wait controller logic

use crate::config::{Config, CurrencyPair};
use crate::events::Event;
use crate::quotes::QuoteSource;
use crate::rows::{DisplayRow, derive_rows};
use crate::ui::dashboard::{DashboardState, body_capacity, render_dashboard};
use crate::ui::input::{Action, InputMultiplexer};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::Instant;

/// Application state
///
/// Owns the dashboard state outright; every mutation happens on the
/// controller loop, never concurrently with a render.
pub struct App {
    /// The dashboard state mutated by the controller loop.
    state: DashboardState,

    /// Asset identifiers queried each cycle, in display order.
    tracked_assets: Vec<String>,

    /// Currency pairs cross-computed each cycle, in display order.
    tracked_pairs: Vec<CurrencyPair>,

    /// Currency codes requested from the quote source.
    currency_codes: Vec<String>,

    /// Time between scheduled fetch cycles.
    refresh_interval: Duration,

    /// Receives the shutdown signal raced against in-flight fetches.
    shutdown: broadcast::Receiver<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(config: &Config, shutdown: broadcast::Receiver<()>) -> Self {
        let refresh_interval = Duration::from_secs(config.refresh_interval_secs);
        let mut state = DashboardState::new(refresh_interval);
        state.set_last_event(Event::refresh("fetching quotes".to_string()));
        Self {
            state,
            tracked_assets: config.tracked_assets.clone(),
            tracked_pairs: config.tracked_pairs.clone(),
            currency_codes: config.currency_codes(),
            refresh_interval,
            shutdown,
        }
    }

    /// Runs one fetch cycle and replaces the rows wholesale.
    ///
    /// A failed cycle leaves exactly one error row behind; prior rows are
    /// discarded either way. The fetch races the shutdown broadcast, so a
    /// quit never waits out a network timeout - the in-flight future is
    /// simply dropped.
    async fn refresh(&mut self, source: &dyn QuoteSource) {
        tokio::select! {
            _ = self.shutdown.recv() => {
                self.state.stop();
            }
            result = source.fetch(&self.tracked_assets, &self.currency_codes) => match result {
                Ok(quotes) => {
                    let rows = derive_rows(&quotes, &self.tracked_assets, &self.tracked_pairs);
                    self.state
                        .set_last_event(Event::success(format!("updated {} rows", rows.len())));
                    self.state.replace_rows(rows);
                }
                Err(e) => {
                    let msg = e.to_string();
                    self.state.set_last_event(Event::error(msg.clone(), e.log_level()));
                    self.state.replace_rows(vec![DisplayRow::error(&msg)]);
                }
            },
        }
    }

    /// Applies one action; returns whether a new fetch cycle is due.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.state.stop();
                false
            }
            Action::Refresh => {
                self.state
                    .set_last_event(Event::refresh("refreshing quotes".to_string()));
                true
            }
            Action::Timeout => true,
            Action::ScrollUp => {
                self.state.scroll_up();
                false
            }
            Action::ScrollDown => {
                self.state.scroll_down();
                false
            }
            // The next draw picks up the new dimensions and reclamps.
            Action::Resize => false,
        }
    }

    /// Clamps the scroll offset against the current viewport, then draws.
    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let height = terminal.size()?.height;
        self.state.clamp_scroll(body_capacity(height));
        terminal.draw(|f| render_dashboard(f, &self.state))?;
        Ok(())
    }
}

/// Runs the dashboard loop: fetch, render, wait for one action, apply it.
///
/// Scroll and resize actions re-render without fetching; the refresh
/// deadline carries over, so the timer still fires exactly once per
/// interval. Terminal-mode teardown is the caller's job and happens on
/// every exit path.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    source: &dyn QuoteSource,
    input: &mut InputMultiplexer,
) -> std::io::Result<()> {
    let mut needs_fetch = true;
    let mut next_refresh = Instant::now();

    while app.state.is_running() {
        if needs_fetch {
            // Paint the current state first so a slow fetch does not leave a
            // frozen frame without its "refreshing" status.
            app.draw(terminal)?;
            app.refresh(source).await;
            needs_fetch = false;
            next_refresh = Instant::now() + app.refresh_interval;
        }

        app.draw(terminal)?;
        if !app.state.is_running() {
            break;
        }

        let timeout = next_refresh.saturating_duration_since(Instant::now());
        needs_fetch = app.apply(input.next_action(timeout).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::error::QuoteError;
    use crate::quotes::{MockQuoteSource, QuoteMap};
    use crate::rows::RowKind;

    fn test_app() -> (App, broadcast::Sender<()>) {
        let (sender, receiver) = broadcast::channel(1);
        let app = App::new(&Config::default(), receiver);
        (app, sender)
    }

    fn bitcoin_quotes() -> QuoteMap {
        let mut quotes = QuoteMap::new();
        quotes.insert(
            "bitcoin".to_string(),
            [("usd".to_string(), 50_000.0), ("eur".to_string(), 46_000.0)]
                .into_iter()
                .collect(),
        );
        quotes
    }

    #[tokio::test]
    async fn test_refresh_replaces_rows_wholesale() {
        let (mut app, _sender) = test_app();
        app.state.replace_rows(vec![
            DisplayRow::asset("Stale0".to_string(), 1.0, 0.0),
            DisplayRow::asset("Stale1".to_string(), 2.0, 0.0),
        ]);

        let mut source = MockQuoteSource::new();
        source
            .expect_fetch()
            .returning(|_, _| Ok(bitcoin_quotes()));

        app.refresh(&source).await;

        let labels: Vec<&str> = app.state.rows().iter().map(|r| r.label.as_str()).collect();
        assert!(labels.contains(&"Bitcoin"));
        assert!(!labels.iter().any(|l| l.starts_with("Stale")));
    }

    #[tokio::test]
    // A failed fetch discards previous rows and leaves exactly one error row.
    async fn test_fetch_failure_yields_single_error_row() {
        let (mut app, _sender) = test_app();
        app.state
            .replace_rows(vec![DisplayRow::asset("Bitcoin".to_string(), 1.0, 0.0)]);

        let mut source = MockQuoteSource::new();
        source.expect_fetch().returning(|_, _| {
            Err(QuoteError::Http {
                status: 500,
                message: "server exploded".to_string(),
            })
        });

        app.refresh(&source).await;

        assert_eq!(app.state.rows().len(), 1);
        assert_eq!(app.state.rows()[0].kind, RowKind::Error);
        assert!(app.state.is_running());
    }

    #[tokio::test]
    // A pending shutdown wins the race against an in-flight fetch.
    async fn test_shutdown_short_circuits_fetch() {
        struct StalledSource;

        #[async_trait::async_trait]
        impl QuoteSource for StalledSource {
            async fn fetch(
                &self,
                _asset_ids: &[String],
                _currency_codes: &[String],
            ) -> Result<QuoteMap, QuoteError> {
                tokio::time::sleep(Duration::from_secs(600)).await;
                Ok(QuoteMap::new())
            }
        }

        let (mut app, sender) = test_app();
        sender.send(()).unwrap();

        tokio::time::timeout(Duration::from_secs(1), app.refresh(&StalledSource))
            .await
            .expect("refresh returns without waiting out the fetch");
        assert!(!app.state.is_running());
    }

    #[test]
    fn test_quit_transitions_to_terminating() {
        let (mut app, _sender) = test_app();
        assert!(app.state.is_running());
        assert!(!app.apply(Action::Quit));
        assert!(!app.state.is_running());
    }

    #[test]
    // Refresh and timeout both schedule exactly one new fetch cycle.
    fn test_refresh_and_timeout_schedule_a_fetch() {
        let (mut app, _sender) = test_app();
        assert!(app.apply(Action::Timeout));
        assert!(app.apply(Action::Refresh));
        assert!(app.state.is_running());
    }

    #[test]
    fn test_scroll_actions_move_offset_without_fetching() {
        let (mut app, _sender) = test_app();
        app.state.replace_rows(
            (0..5)
                .map(|i| DisplayRow::asset(format!("Coin{i}"), 1.0, 0.0))
                .collect(),
        );

        assert!(!app.apply(Action::ScrollDown));
        assert_eq!(app.state.scroll_offset(), 1);
        assert!(!app.apply(Action::ScrollUp));
        assert_eq!(app.state.scroll_offset(), 0);
        assert!(!app.apply(Action::Resize));
    }

    #[tokio::test]
    // Full loop against a test backend: first cycle fetches, quit tears down.
    async fn test_run_fetches_then_quits() {
        use ratatui::backend::TestBackend;

        // Separate channels so the first fetch completes undisturbed and the
        // quit arrives as the first action afterwards.
        let (_quiet_sender, quiet_receiver) = broadcast::channel(1);
        let (quit_sender, quit_receiver) = broadcast::channel(1);
        let app = App::new(&Config::default(), quiet_receiver);
        let mut input = InputMultiplexer::new(quit_receiver);

        let mut source = MockQuoteSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|_, _| Ok(bitcoin_quotes()));

        let backend = TestBackend::new(70, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        quit_sender.send(()).unwrap();
        run(&mut terminal, app, &source, &mut input).await.unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Bitcoin"));
    }
}
