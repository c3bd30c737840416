//! Renders [`UiEvent`]s from the application layer on the console

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use resolver_application::UiEvent;
use tokio::sync::mpsc;

/// What a single event turns into on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Regular output on stdout
    Line(String),
    /// Error output on stderr
    Error(String),
    /// Start the pending spinner with this message
    Pending(String),
    /// Nothing to show
    Silent,
}

/// Consumes the application's event stream and prints it
pub struct EventPresenter {
    progress: ProgressReporter,
}

impl EventPresenter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            progress: ProgressReporter::new(config.show_progress),
        }
    }

    /// Map an event to its console form.
    pub fn render(event: &UiEvent) -> Rendered {
        match event {
            UiEvent::CodeChanged { code } => Rendered::Line(ConsoleFormatter::code(code)),
            UiEvent::LedgerChanged { code, statements } => {
                Rendered::Line(ConsoleFormatter::statement_saved(code, *statements))
            }
            UiEvent::ReadinessChanged { ready, .. } => {
                Rendered::Line(ConsoleFormatter::readiness(*ready))
            }
            UiEvent::SummaryPending { request_id, code } => {
                Rendered::Pending(format!("request {} for {}", request_id, code))
            }
            UiEvent::SummaryReady { ai_response, .. } => {
                Rendered::Line(ConsoleFormatter::summary(ai_response))
            }
            UiEvent::SummaryFailed { kind, message, .. } | UiEvent::Error { kind, message } => {
                Rendered::Error(ConsoleFormatter::error(*kind, message))
            }
            // Stale responses are only of interest in the logs
            UiEvent::SummaryDiscarded { .. } => Rendered::Silent,
        }
    }

    /// Show one event.
    pub fn present(&self, event: &UiEvent) {
        match Self::render(event) {
            Rendered::Pending(message) => {
                if self.progress.is_enabled() {
                    self.progress.start("Summarizing", &message);
                } else {
                    println!("Summarizing {}...", message);
                }
            }
            Rendered::Line(line) => {
                if matches!(event, UiEvent::SummaryReady { .. }) {
                    self.progress.finish();
                }
                self.progress.println(&line);
            }
            Rendered::Error(line) => {
                if matches!(event, UiEvent::SummaryFailed { .. }) {
                    self.progress.finish();
                }
                eprintln!("{}", line);
            }
            Rendered::Silent => {}
        }
    }

    /// Present events until every sender is dropped.
    pub async fn run(self, mut rx: mpsc::UnboundedReceiver<UiEvent>) {
        while let Some(event) = rx.recv().await {
            self.present(&event);
        }
        self.progress.finish();
    }
}
