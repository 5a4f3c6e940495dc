use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("reelmatch").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_resolve_arguments() {
    let cli = parse(&["resolve", "怪奇物语 第四季", "--year", "2022", "-m", "tv", "--json"]);

    assert_eq!(
        cli.command,
        Some(Commands::Resolve {
            title: "怪奇物语 第四季".to_string(),
            year: Some("2022".to_string()),
            media_type: MediaType::Tv,
            id: None,
            json: true,
        })
    );
}

#[test]
fn test_resolve_defaults_to_movie() {
    let cli = parse(&["resolve", "Dune"]);

    match cli.command {
        Some(Commands::Resolve {
            media_type, json, ..
        }) => {
            assert_eq!(media_type, MediaType::Movie);
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_global_flags_before_subcommand() {
    let cli = parse(&["--jobs", "2", "--color", "never", "batch", "titles.txt"]);

    assert_eq!(cli.config.jobs, 2);
    assert_eq!(cli.config.color, crate::primitives::ColorIntent::Never);
    assert_eq!(
        cli.command,
        Some(Commands::Batch {
            file: PathBuf::from("titles.txt"),
            json: false,
        })
    );
}

#[test]
fn test_detail_requires_valid_media_type() {
    let cli = parse(&["detail", "tv", "66732", "--prefer-en"]);
    assert_eq!(
        cli.command,
        Some(Commands::Detail {
            media_type: MediaType::Tv,
            id: 66732,
            prefer_en: true,
        })
    );

    let rejected = Cli::try_parse_from(["reelmatch", "detail", "person", "1"]);
    assert!(rejected.is_err());
}

#[test]
fn test_requires_network() {
    assert!(!Commands::Normalize { title: "x".into() }.requires_network());
    assert!(
        !Commands::Similarity {
            a: "a".into(),
            b: "b".into()
        }
        .requires_network()
    );
    assert!(
        Commands::Detail {
            media_type: MediaType::Movie,
            id: 1,
            prefer_en: false
        }
        .requires_network()
    );
}

#[test]
fn test_cli_config_from_parsed() {
    let config: CliConfig = parse(&["similarity", "a", "b"]).into();
    assert_eq!(config.app_config.jobs, 4);
    assert!(matches!(config.command, Some(Commands::Similarity { .. })));
}
