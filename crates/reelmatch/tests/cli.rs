//! Binary-level tests: argument parsing, environment configuration, output
//! and exit codes of the `reelmatch` executable

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use reelmatch_tests::TestEnvironment;
use reelmatch_tests::fixtures::{search_body, tv_hit};

/// The binary with a scrubbed environment, run inside `env`'s scratch dir
fn reelmatch(env: &TestEnvironment) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_reelmatch"));
    cmd.env_clear().current_dir(env.workdir());
    for (key, value) in env.binary_env() {
        cmd.env(key, value);
    }
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_help_lists_subcommands() -> Result<()> {
    let env = TestEnvironment::new().await?;

    reelmatch(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("resolve")
                .and(predicate::str::contains("batch"))
                .and(predicate::str::contains("detail")),
        );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_similarity_prints_score() -> Result<()> {
    let env = TestEnvironment::new().await?;

    reelmatch(&env)
        .args(["similarity", "Dune", "DUNE"])
        .assert()
        .success()
        .stdout("1.0000\n");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_resolve_success() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "tv",
        "怪奇物语 第四季",
        search_body(vec![tv_hit(66732, "怪奇物语", "Stranger Things", "2016-07-15")]),
    )
    .await;

    reelmatch(&env)
        .args(["resolve", "怪奇物语 第四季"])
        .assert()
        .success()
        .stdout("tv:66732\n");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_resolve_not_found_exits_nonzero() -> Result<()> {
    let env = TestEnvironment::new().await?;

    reelmatch(&env)
        .args(["resolve", "Nothing Is Mocked Here"])
        .assert()
        .code(2)
        .stdout("not found\n");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_resolve_without_api_key_fails() -> Result<()> {
    let env = TestEnvironment::new().await?;

    reelmatch(&env)
        .env_remove("REELMATCH_TMDB_API_KEY")
        .args(["resolve", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("REELMATCH_TMDB_API_KEY"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_rejects_zero_jobs() -> Result<()> {
    let env = TestEnvironment::new().await?;

    reelmatch(&env)
        .args(["--jobs", "0", "normalize", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("jobs must be greater than zero"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_batch_reads_file() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "tv",
        "Chernobyl",
        search_body(vec![tv_hit(87108, "Chernobyl", "Chernobyl", "2019-05-06")]),
    )
    .await;
    let file = env.write_file("titles.txt", "# mini series\nChernobyl|2019|tv\n")?;

    reelmatch(&env)
        .arg("batch")
        .arg(&file)
        .assert()
        .success()
        .stdout("Chernobyl|2019|tv\ttv:87108\n");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_dotenv_file_supplies_api_key() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "tv",
        "Chernobyl",
        search_body(vec![tv_hit(87108, "Chernobyl", "Chernobyl", "2019-05-06")]),
    )
    .await;
    env.write_file(
        ".env",
        &format!("REELMATCH_TMDB_API_KEY={}\n", reelmatch_tests::TEST_API_KEY),
    )?;

    reelmatch(&env)
        .env_remove("REELMATCH_TMDB_API_KEY")
        .args(["resolve", "Chernobyl", "--media-type", "tv"])
        .assert()
        .success()
        .stdout("tv:87108\n");
    Ok(())
}
