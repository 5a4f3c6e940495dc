//! E2E tests for commands that never touch the network

use anyhow::Result;
use reelmatch_lib::application::Commands;
use reelmatch_tests::TestEnvironment;

#[tokio::test]
async fn e2e_normalize_reports_season_intent() -> Result<()> {
    let env = TestEnvironment::new().await?;
    let mut config = env.config();
    config.tmdb_api_key = None;

    let (_, stdout) = env
        .run_with_config(
            Commands::Normalize {
                title: "《权力的游戏》第二季".to_string(),
            },
            config,
        )
        .await?;

    assert!(stdout.contains("season intent: yes\n"));
    assert!(stdout.contains("first search: tv\n"));
    Ok(())
}

#[tokio::test]
async fn e2e_similarity_of_sequel_titles() -> Result<()> {
    let env = TestEnvironment::new().await?;

    let (_, stdout) = env
        .run(Commands::Similarity {
            a: "流浪地球".to_string(),
            b: "流浪地球2".to_string(),
        })
        .await?;

    let score: f64 = stdout.trim().parse()?;
    assert!(score > 0.34 && score <= 1.0);
    Ok(())
}
