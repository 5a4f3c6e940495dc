//! E2E tests for the batch command

use anyhow::Result;
use reelmatch_lib::application::Commands;
use reelmatch_lib::application::commands::CommandOutcome;
use reelmatch_tests::TestEnvironment;
use reelmatch_tests::fixtures::{movie_hit, search_body, tv_hit};

async fn env_with_catalog() -> Result<TestEnvironment> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "movie",
        "Heat",
        search_body(vec![movie_hit(949, "Heat", "1995-12-15")]),
    )
    .await;
    env.mock_search(
        "tv",
        "权力的游戏 第二季",
        search_body(vec![tv_hit(1399, "权力的游戏", "Game of Thrones", "2011-04-17")]),
    )
    .await;
    Ok(env)
}

#[tokio::test]
async fn e2e_batch_prints_one_line_per_entry() -> Result<()> {
    let env = env_with_catalog().await?;
    let file = env.write_file(
        "titles.txt",
        "# watch list\nHeat|1995\n\n权力的游戏 第二季\nNo Such Film|1901|movie\nBroken|1999|person\n",
    )?;

    let (outcome, stdout) = env
        .run(Commands::Batch { file, json: false })
        .await?;

    assert_eq!(outcome, CommandOutcome::Completed);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Heat|1995\tmovie:949");
    assert_eq!(lines[1], "权力的游戏 第二季\ttv:1399");
    assert_eq!(lines[2], "No Such Film|1901|movie\tnot found");
    assert!(lines[3].starts_with("Broken|1999|person\tinvalid: "));
    Ok(())
}

#[tokio::test]
async fn e2e_batch_json_lines() -> Result<()> {
    let env = env_with_catalog().await?;
    let file = env.write_file("titles.txt", "Heat\nHeat|\n")?;

    let (_, stdout) = env.run(Commands::Batch { file, json: true }).await?;

    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert_eq!(report["id"], 949);
        assert_eq!(report["media_type"], "movie");
    }
    assert!(reports[1]["year"].is_null());
    Ok(())
}

#[tokio::test]
async fn e2e_batch_respects_single_job() -> Result<()> {
    let env = env_with_catalog().await?;
    let file = env.write_file("titles.txt", "Heat\n权力的游戏 第二季\n")?;
    let mut config = env.config();
    config.jobs = 1;

    let (_, stdout) = env
        .run_with_config(Commands::Batch { file, json: false }, config)
        .await?;

    assert_eq!(stdout, "Heat\tmovie:949\n权力的游戏 第二季\ttv:1399\n");
    Ok(())
}

#[tokio::test]
async fn e2e_batch_missing_file_fails() -> Result<()> {
    let env = env_with_catalog().await?;
    let file = env.workdir().join("absent.txt");

    let err = env
        .run(Commands::Batch { file, json: false })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to read batch file"));
    Ok(())
}
