// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{BrowserLauncher, PageWriter};

/// Browser double that records every path it is asked to open.
///
/// # Examples
///
/// ```
/// use mapview::application::BrowserLauncher;
/// use mapview::util::testing::MockBrowser;
/// use std::path::Path;
///
/// let mut browser = MockBrowser::builder().with_failure("no display").build();
/// assert!(browser.open(Path::new("/tmp/map.html")).is_err());
/// assert_eq!(browser.opened().len(), 1);
/// ```
#[derive(Debug)]
pub struct MockBrowser {
    failure: Option<String>,
    opened: Vec<PathBuf>,
}

impl MockBrowser {
    pub fn builder() -> MockBrowserBuilder {
        MockBrowserBuilder::new()
    }

    /// Paths passed to `open`, in call order, including failed attempts
    pub fn opened(&self) -> &[PathBuf] {
        &self.opened
    }
}

impl BrowserLauncher for MockBrowser {
    fn open(&mut self, path: &Path) -> Result<()> {
        self.opened.push(path.to_path_buf());
        match &self.failure {
            Some(reason) => Err(anyhow::anyhow!("{}", reason)),
            None => Ok(()),
        }
    }
}

pub struct MockBrowserBuilder {
    failure: Option<String>,
}

impl MockBrowserBuilder {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Make every `open` call fail with `reason`
    pub fn with_failure(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MockBrowser {
        MockBrowser {
            failure: self.failure,
            opened: vec![],
        }
    }
}

impl Default for MockBrowserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory page store for use cases that depend on PageWriter
///
/// Paths are returned unchanged, as if already absolute.
#[derive(Debug)]
pub struct MockPageWriter {
    failure: Option<String>,
    written: Vec<PathBuf>,
    pages: HashMap<PathBuf, String>,
}

impl MockPageWriter {
    pub fn builder() -> MockPageWriterBuilder {
        MockPageWriterBuilder::new()
    }

    /// Paths of successful writes, in call order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Latest content stored at `path`
    pub fn content(&self, path: &Path) -> Option<&str> {
        self.pages.get(path).map(String::as_str)
    }
}

impl PageWriter for MockPageWriter {
    fn write(&mut self, path: &Path, content: &str) -> Result<PathBuf> {
        if let Some(reason) = &self.failure {
            return Err(anyhow::anyhow!("{}", reason));
        }
        self.written.push(path.to_path_buf());
        self.pages.insert(path.to_path_buf(), content.to_string());
        Ok(path.to_path_buf())
    }
}

pub struct MockPageWriterBuilder {
    failure: Option<String>,
}

impl MockPageWriterBuilder {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Make every `write` call fail with `reason`
    pub fn with_failure(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MockPageWriter {
        MockPageWriter {
            failure: self.failure,
            written: vec![],
            pages: HashMap::new(),
        }
    }
}

impl Default for MockPageWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["rstest"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
