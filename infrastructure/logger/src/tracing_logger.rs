use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub const TARGET: &'static str = "products";
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TracingLogger::TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TracingLogger::TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TracingLogger::TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TracingLogger::TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Captured = Arc<Mutex<Vec<(String, Level, String)>>>;

    struct CaptureLayer(Captured);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            let metadata = event.metadata();
            self.0.lock().unwrap().push((
                metadata.target().to_string(),
                *metadata.level(),
                visitor.0,
            ));
        }
    }

    #[test]
    fn should_emit_each_level_under_the_products_target() {
        let captured: Captured = Arc::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        tracing::subscriber::with_default(subscriber, || {
            logger.info("product created");
            logger.warn("product name empty");
            logger.error("product lookup failed");
            logger.debug("listing products");
        });

        let events = captured.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ("products".to_string(), Level::INFO, "product created".to_string()),
                ("products".to_string(), Level::WARN, "product name empty".to_string()),
                ("products".to_string(), Level::ERROR, "product lookup failed".to_string()),
                ("products".to_string(), Level::DEBUG, "listing products".to_string()),
            ]
        );
    }
}
