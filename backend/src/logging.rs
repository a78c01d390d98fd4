use std::fmt::Write as _;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_DIRECTIVES: &str = "warn,backend=info,tower_http=info";

/// Collects the event message first, then any structured fields as `key=value`.
#[derive(Default)]
struct EventText {
    message: String,
    fields: String,
}

impl tracing::field::Visit for EventText {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

fn level_prefix(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "❌ Error: ",
        Level::WARN => "⚠️ Warning: ",
        Level::INFO => "ℹ️ ",
        _ => "🔄 ",
    }
}

fn format_line(timestamp: &str, level: &Level, target: &str, message: &str, fields: &str) -> String {
    format!("[{}] {}{} - {}{}", timestamp, level_prefix(level), target, message, fields)
}

struct WidgetLogLayer;

impl<S: Subscriber> Layer<S> for WidgetLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == Level::TRACE {
            return;
        }

        let mut text = EventText::default();
        event.record(&mut text);
        if text.message.is_empty() && text.fields.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        println!(
            "{}",
            format_line(&timestamp, metadata.level(), metadata.target(), &text.message, &text.fields)
        );
    }
}

/// Installs the global subscriber; `RUST_LOG` overrides the default directives.
pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let subscriber = Registry::default().with(env_filter).with(WidgetLogLayer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging already initialised");
    }
}
