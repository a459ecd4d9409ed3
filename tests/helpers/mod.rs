use anyhow::Result;
use mapview::application::{GeneratedPage, MapGenerator};
use mapview::domain::RequestDefaults;
use mapview::infrastructure::FilePageWriter;
use mapview::ports::Prompter;
use mapview::util::testing::MockBrowser;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated output directory for one generated `map.html`
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub output_path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let output_path = temp_dir.path().join("map.html");
        Ok(Self {
            _temp_dir: temp_dir,
            output_path,
        })
    }

    pub fn generator(&self) -> MapGenerator<FilePageWriter, MockBrowser> {
        MapGenerator::new(
            FilePageWriter::new(),
            MockBrowser::builder().build(),
            &self.output_path,
        )
    }

    /// Feed `answers` (one per prompt) through a fresh generator
    pub fn run_with_answers(
        &self,
        answers: &[&str],
        defaults: &RequestDefaults,
    ) -> Result<GeneratedPage> {
        let mut prompter = scripted_prompter(answers);
        self.generator().run(&mut prompter, defaults)
    }
}

/// Newline-terminated answers, one per prompt
pub fn script(answers: &[&str]) -> String {
    answers.iter().map(|a| format!("{a}\n")).collect()
}

pub fn scripted_prompter(answers: &[&str]) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(script(answers).into_bytes()), Vec::new())
}
