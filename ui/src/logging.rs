//! Browser logging
//!
//! Routes `tracing` events to the developer console.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the console subscriber. Debug builds log at DEBUG, release at INFO.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(ConsoleLayer)
        .try_init();
}

/// Writes each event as one console line, using the console method that
/// matches its level
struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = EventLine::default();
        event.record(&mut line);

        let meta = event.metadata();
        let text = JsValue::from_str(&line.render(meta.level(), meta.target()));
        match *meta.level() {
            Level::ERROR => console::error_1(&text),
            Level::WARN => console::warn_1(&text),
            Level::INFO => console::info_1(&text),
            _ => console::debug_1(&text),
        }
    }
}

#[derive(Default)]
struct EventLine {
    message: String,
    fields: String,
}

impl EventLine {
    fn render(&self, level: &Level, target: &str) -> String {
        format!("{} {}: {}{}", level, target, self.message, self.fields)
    }
}

impl Visit for EventLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
