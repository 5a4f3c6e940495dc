//! Hermetic environment for end-to-end command tests
//!
//! Each [`TestEnvironment`] owns a mock TMDB server and a scratch directory.
//! Requests nothing was mocked for get a 501, which the resolver treats
//! like any other failed search.
//! Commands run in-process against it with plain styling, and the same
//! settings can be handed to the `reelmatch` binary as environment variables.

use anyhow::Result;
use mockito::{Matcher, Mock, ServerGuard};
use reelmatch_lib::application::commands::{CommandContext, CommandOutcome, execute_command_with_context};
use reelmatch_lib::application::{AppConfig, Commands};
use reelmatch_lib::display::Display;
use reelmatch_lib::primitives::ColorIntent;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "e2e-test-key";

pub struct TestEnvironment {
    server: ServerGuard,
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        Ok(Self {
            server: mockito::Server::new_async().await,
            temp_dir: TempDir::new()?,
        })
    }

    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub fn workdir(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Configuration pointing at the mock server
    pub fn config(&self) -> AppConfig {
        AppConfig {
            tmdb_api_key: Some(TEST_API_KEY.to_string()),
            tmdb_base_url: self.server.url(),
            color: ColorIntent::Never,
            ..AppConfig::default()
        }
    }

    /// Environment variables equivalent to [`Self::config`]
    pub fn binary_env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("REELMATCH_TMDB_API_KEY", TEST_API_KEY.to_string()),
            ("REELMATCH_TMDB_BASE_URL", self.server.url()),
            ("REELMATCH_COLOR", "never".to_string()),
        ]
    }

    /// Write `contents` to `name` inside the scratch directory
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Answer `/search/{endpoint}` for one query with `body`
    pub async fn mock_search(&mut self, endpoint: &str, query: &str, body: String) -> Mock {
        self.server
            .mock("GET", format!("/search/{}", endpoint).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".to_string(), query.to_string()),
                Matcher::UrlEncoded("api_key".to_string(), TEST_API_KEY.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Answer `/{media_type}/{id}` with `body`
    pub async fn mock_detail(&mut self, media_type: &str, id: u64, body: String) -> Mock {
        self.server
            .mock("GET", format!("/{}/{}", media_type, id).as_str())
            .match_query(Matcher::UrlEncoded(
                "api_key".to_string(),
                TEST_API_KEY.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Answer any request to `path` with a bare status
    pub async fn mock_status(&mut self, path: &str, status: usize) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .create_async()
            .await
    }

    /// Run a command in-process, returning its outcome and stdout
    pub async fn run(&self, command: Commands) -> Result<(CommandOutcome, String)> {
        self.run_with_config(command, self.config()).await
    }

    pub async fn run_with_config(
        &self,
        command: Commands,
        config: AppConfig,
    ) -> Result<(CommandOutcome, String)> {
        let context = CommandContext::with_display(config, Display::plain());
        let mut out = Vec::new();
        let outcome = execute_command_with_context(command, &context, &mut out).await?;
        Ok((outcome, String::from_utf8(out)?))
    }
}
