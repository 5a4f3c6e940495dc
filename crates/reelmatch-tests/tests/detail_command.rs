//! E2E tests for the detail command

use anyhow::Result;
use reelmatch_lib::application::Commands;
use reelmatch_lib::primitives::MediaType;
use reelmatch_tests::TestEnvironment;
use reelmatch_tests::fixtures::{inception_detail, stranger_things_detail};

#[tokio::test]
async fn e2e_detail_picks_logo_rating_and_trailer() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    let detail = env
        .mock_detail("tv", 66732, stranger_things_detail().to_string())
        .await;

    let (_, stdout) = env
        .run(Commands::Detail {
            media_type: MediaType::Tv,
            id: 66732,
            prefer_en: false,
        })
        .await?;

    detail.assert_async().await;
    assert!(stdout.starts_with("tv:66732\n"));
    assert!(stdout.contains("title: 怪奇物语\n"));
    assert!(stdout.contains("genres: Sci-Fi & Fantasy, 剧情\n"));
    assert!(stdout.contains("cast: Winona Ryder, Millie Bobby Brown\n"));
    assert!(stdout.contains("logo: /zh-logo.png (3.00)\n"));
    assert!(stdout.contains("rating: US TV-14\n"));
    assert!(stdout.contains("trailer: https://www.youtube.com/watch?v=b9EkMc79ZSU\n"));
    Ok(())
}

#[tokio::test]
async fn e2e_detail_prefer_english_logo() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_detail("tv", 66732, stranger_things_detail().to_string())
        .await;

    let (_, stdout) = env
        .run(Commands::Detail {
            media_type: MediaType::Tv,
            id: 66732,
            prefer_en: true,
        })
        .await?;

    assert!(stdout.contains("logo: /en-logo.png (2.50)\n"));
    Ok(())
}

#[tokio::test]
async fn e2e_movie_rating_from_release_dates() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_detail("movie", 27205, inception_detail().to_string())
        .await;

    let (_, stdout) = env
        .run(Commands::Detail {
            media_type: MediaType::Movie,
            id: 27205,
            prefer_en: false,
        })
        .await?;

    assert!(stdout.contains("rating: CN PG-13\n"));
    assert!(stdout.contains("logo: -\n"));
    assert!(stdout.contains("cast: -\n"));
    assert!(stdout.contains("trailer: -\n"));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_entity_fails() -> Result<()> {
    let mut env = TestEnvironment::new().await?;
    env.mock_status("/movie/999999", 404).await;

    let err = env
        .run(Commands::Detail {
            media_type: MediaType::Movie,
            id: 999999,
            prefer_en: false,
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("movie:999999"));
    Ok(())
}
