// src/application/map_generator.rs
use crate::domain::{MapRequest, RequestDefaults};
use crate::ports::{MapPresenter, Prompter};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub trait PageWriter {
    /// Store `content` at `path`, replacing what was there, and return the
    /// absolute path actually written.
    fn write(&mut self, path: &Path, content: &str) -> Result<PathBuf>;
}

pub trait BrowserLauncher {
    /// Ask the host to show `path`. Returns once the request is handed off.
    fn open(&mut self, path: &Path) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingInput,
    Generating,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
    Opened,
    Skipped,
    /// Launch failed; the page itself was written.
    Failed(String),
}

#[derive(Debug)]
pub struct GeneratedPage {
    pub path: PathBuf,
    pub request: MapRequest,
    pub browser: BrowserOutcome,
}

pub struct MapGenerator<P: PageWriter, B: BrowserLauncher> {
    writer: P,
    browser: B,
    presenter: MapPresenter,
    output: PathBuf,
    open_browser: bool,
    stage: Stage,
}

impl<P: PageWriter, B: BrowserLauncher> MapGenerator<P, B> {
    pub fn new(writer: P, browser: B, output: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            browser,
            presenter: MapPresenter::new(),
            output: output.into(),
            open_browser: true,
            stage: Stage::CollectingInput,
        }
    }

    pub fn without_browser(mut self) -> Self {
        self.open_browser = false;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn writer(&self) -> &P {
        &self.writer
    }

    /// Prompt for the parameters, then generate the page.
    ///
    /// Input errors abort before anything is written to disk.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        defaults: &RequestDefaults,
    ) -> Result<GeneratedPage> {
        self.transition(Stage::CollectingInput);
        let request = prompter
            .collect_request(defaults)
            .context("Input error")?;
        debug!(?request, "Collected map request");

        self.generate(request)
    }

    /// Render, write and (optionally) open the page for `request`.
    ///
    /// Only the write can fail; a failed browser launch is reported in
    /// `GeneratedPage::browser`.
    pub fn generate(&mut self, request: MapRequest) -> Result<GeneratedPage> {
        self.transition(Stage::Generating);

        let html = self.presenter.render(&request);
        let path = self.writer.write(&self.output, &html)?;
        info!(path = %path.display(), "Map page generated");

        let browser = if self.open_browser {
            match self.browser.open(&path) {
                Ok(()) => BrowserOutcome::Opened,
                Err(e) => {
                    warn!(error = %e, "Could not open browser");
                    BrowserOutcome::Failed(format!("{e:#}"))
                }
            }
        } else {
            BrowserOutcome::Skipped
        };

        self.transition(Stage::Done);
        Ok(GeneratedPage {
            path,
            request,
            browser,
        })
    }

    fn transition(&mut self, next: Stage) {
        debug!(from = ?self.stage, to = ?next, "Stage transition");
        self.stage = next;
    }
}
