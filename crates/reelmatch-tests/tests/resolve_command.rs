//! E2E tests for the resolve command
//!
//! Commands run in-process against a mockito TMDB server.

use anyhow::Result;
use reelmatch_lib::application::Commands;
use reelmatch_lib::application::commands::CommandOutcome;
use reelmatch_lib::primitives::MediaType;
use reelmatch_tests::TestEnvironment;
use reelmatch_tests::fixtures::{movie_hit, multi_hit, search_body, tv_hit};

fn resolve(title: &str, year: Option<&str>, media_type: MediaType, json: bool) -> Commands {
    Commands::Resolve {
        title: title.to_string(),
        year: year.map(str::to_string),
        media_type,
        id: None,
        json,
    }
}

#[tokio::test]
async fn e2e_season_query_resolves_to_tv_show() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let tv = env
        .mock_search(
            "tv",
            "怪奇物语 第四季",
            search_body(vec![tv_hit(66732, "怪奇物语", "Stranger Things", "2016-07-15")]),
        )
        .await;

    let (outcome, stdout) = env
        .run(resolve("怪奇物语 第四季", None, MediaType::Movie, false))
        .await?;

    assert_eq!(outcome, CommandOutcome::Completed);
    assert_eq!(stdout, "tv:66732\n");
    tv.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn e2e_year_hint_picks_matching_release() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "movie",
        "Dune",
        search_body(vec![
            movie_hit(841, "Dune", "1984-12-14"),
            movie_hit(438631, "Dune", "2021-09-15"),
        ]),
    )
    .await;

    let (_, stdout) = env
        .run(resolve("Dune", Some("2021"), MediaType::Movie, false))
        .await?;

    assert_eq!(stdout, "movie:438631\n");
    Ok(())
}

#[tokio::test]
async fn e2e_multi_search_skips_people() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "multi",
        "Nomadland",
        search_body(vec![
            multi_hit(1, "person", "Nomadland"),
            multi_hit(581734, "movie", "Nomadland"),
        ]),
    )
    .await;

    let (_, stdout) = env
        .run(resolve("Nomadland", None, MediaType::Movie, false))
        .await?;

    assert_eq!(stdout, "movie:581734\n");
    Ok(())
}

#[tokio::test]
async fn e2e_unmatched_title_is_not_found() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "movie",
        "Completely Unrelated",
        search_body(vec![movie_hit(7, "Zzyzx Road", "2006-02-03")]),
    )
    .await;

    let (outcome, stdout) = env
        .run(resolve("Completely Unrelated", None, MediaType::Movie, false))
        .await?;

    assert_eq!(outcome, CommandOutcome::NotFound);
    assert_eq!(stdout, "not found\n");
    Ok(())
}

#[tokio::test]
async fn e2e_json_output() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_search(
        "tv",
        "Chernobyl",
        search_body(vec![tv_hit(87108, "Chernobyl", "Chernobyl", "2019-05-06")]),
    )
    .await;

    let (_, stdout) = env
        .run(resolve("Chernobyl", Some("2019"), MediaType::Tv, true))
        .await?;

    let report: serde_json::Value = serde_json::from_str(stdout.trim())?;
    assert_eq!(report["found"], true);
    assert_eq!(report["media_type"], "tv");
    assert_eq!(report["id"], 87108);
    assert_eq!(report["year"], "2019");
    Ok(())
}

#[tokio::test]
async fn e2e_known_id_needs_no_search() -> Result<()> {
    let env = TestEnvironment::new().await?;

    let (outcome, stdout) = env
        .run(Commands::Resolve {
            title: String::new(),
            year: None,
            media_type: MediaType::Tv,
            id: Some(1399),
            json: false,
        })
        .await?;

    assert_eq!(outcome, CommandOutcome::Completed);
    assert_eq!(stdout, "tv:1399\n");
    Ok(())
}

#[tokio::test]
async fn e2e_missing_api_key_is_reported() -> Result<()> {
    let env = TestEnvironment::new().await?;
    let mut config = env.config();
    config.tmdb_api_key = None;

    let err = env
        .run_with_config(resolve("Dune", None, MediaType::Movie, false), config)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No TMDB API key configured"));
    Ok(())
}
