use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

pub const DEFAULT_FILTER: &str = "pixel_dad=debug,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn build_subscriber<W>(make_writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .finish()
}

/// Logs go to stderr so `generate` output on stdout stays pipeable.
pub fn init() {
    let subscriber = build_subscriber(std::io::stderr, env_filter());
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn events_go_to_the_given_writer() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = build_subscriber(move || writer.clone(), EnvFilter::new(DEFAULT_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("saved 3 bytes");
            tracing::trace!("too noisy");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("saved 3 bytes"));
        assert!(!output.contains("too noisy"));
    }
}
