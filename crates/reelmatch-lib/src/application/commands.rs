//! Command execution handlers
//!
//! Each subcommand is split into a thin dispatcher that builds live clients
//! from [`AppConfig`] and a `run_*` function generic over the API traits and
//! the output writer, which is what the tests drive.

use crate::api::{DetailApi, EntityDetails, SearchApi, TmdbClient};
use crate::application::{AppConfig, Commands};
use crate::display::{Display, StyleManager};
use crate::networking::NetworkingManager;
use crate::primitives::MediaType;
use crate::resolve::{
    CachedResolver, QueryProfile, ResolveRequest, ResolvedEntity, Resolver,
    build_query_title_variants, normalize_title_for_match, title_similarity, to_compact_title_for_match,
};
use crate::select::{
    LanguagePreference, RatingTable, select_logo, select_rating, select_trailer_url,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Cast members shown by `detail`
pub const DETAIL_CAST_LIMIT: usize = 5;

const MISSING: &str = "-";

/// How a command ended, when it did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    /// `resolve` found no confident match
    NotFound,
}

impl CommandOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            CommandOutcome::Completed => ExitCode::SUCCESS,
            CommandOutcome::NotFound => ExitCode::from(2),
        }
    }
}

/// Everything a command needs besides its arguments
pub struct CommandContext {
    config: AppConfig,
    display: Display,
}

impl CommandContext {
    pub fn new(config: AppConfig) -> Self {
        let display = Display::new(config.color.enabled());
        Self { config, display }
    }

    pub fn with_display(config: AppConfig, display: Display) -> Self {
        Self { config, display }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    fn networking(&self) -> Result<Arc<NetworkingManager>> {
        let networking = NetworkingManager::new(self.config.to_networking_config())
            .context("Failed to set up HTTP client")?;
        Ok(Arc::new(networking))
    }

    fn tmdb_client(&self, networking: Arc<NetworkingManager>) -> Result<TmdbClient> {
        let credential = self.config.credential().context(
            "No TMDB API key configured; set REELMATCH_TMDB_API_KEY or pass --tmdb-api-key",
        )?;

        Ok(TmdbClient::with_base_url(
            networking,
            self.config.tmdb_base_url.clone(),
            Some(credential),
        )
        .with_detail_language(&self.config.language))
    }

    fn resolver<S: SearchApi>(&self, api: Arc<S>) -> Resolver<S> {
        Resolver::new(api).with_language(&self.config.language)
    }
}

/// Execute a parsed command against stdout
pub async fn execute_command(config: AppConfig, command: Option<Commands>) -> Result<CommandOutcome> {
    let context = CommandContext::new(config);
    let mut stdout = std::io::stdout();

    let Some(command) = command else {
        writeln!(stdout, "reelmatch - match movie and TV titles against TMDB")?;
        writeln!(
            stdout,
            "{}",
            context
                .display()
                .styling()
                .style_subtle("Run 'reelmatch --help' for usage information")
        )?;
        return Ok(CommandOutcome::Completed);
    };

    execute_command_with_context(command, &context, &mut stdout).await
}

/// Execute a command with a provided context and writer
pub async fn execute_command_with_context<W: Write>(
    command: Commands,
    context: &CommandContext,
    out: &mut W,
) -> Result<CommandOutcome> {
    let styling = context.display().styling();

    match command {
        Commands::Normalize { title } => {
            run_normalize(&title, styling, out)?;
            Ok(CommandOutcome::Completed)
        }
        Commands::Similarity { a, b } => {
            run_similarity(&a, &b, out)?;
            Ok(CommandOutcome::Completed)
        }
        Commands::Resolve {
            title,
            year,
            media_type,
            id,
            json,
        } => {
            let request = ResolveRequest::new(&title, media_type)
                .with_year(year.as_deref())
                .with_id(id);
            request.validate()?;

            let client = context.tmdb_client(context.networking()?)?;
            let resolver = context.resolver(Arc::new(client));
            run_resolve(
                &resolver,
                &request,
                context.config().resolve_deadline(),
                json,
                styling,
                out,
            )
            .await
        }
        Commands::Batch { file, json } => {
            let entries = read_batch_file(&file).await?;
            let networking = context.networking()?;
            let client = context.tmdb_client(networking.clone())?;
            let resolver = Arc::new(CachedResolver::new(
                context.resolver(Arc::new(client)),
                context.config().to_cache_config(),
            ));

            run_batch(
                resolver,
                &networking,
                entries,
                context.config().resolve_deadline(),
                json,
                context.display(),
                out,
            )
            .await?;
            Ok(CommandOutcome::Completed)
        }
        Commands::Detail {
            media_type,
            id,
            prefer_en,
        } => {
            let client = context.tmdb_client(context.networking()?)?;
            let preference = if prefer_en {
                LanguagePreference::EnFirst
            } else {
                LanguagePreference::ZhFirst
            };
            run_detail(&client, media_type, id, preference, styling, out).await?;
            Ok(CommandOutcome::Completed)
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Print the comparable forms and query expansions of a title
pub fn run_normalize<W: Write>(title: &str, styling: &StyleManager, out: &mut W) -> Result<()> {
    let profile = QueryProfile::from_request(&ResolveRequest::new(title, MediaType::Movie));

    let fields = [
        ("normalized", normalize_title_for_match(title)),
        ("compact", to_compact_title_for_match(title)),
        ("season intent", yes_no(profile.season_intent).to_string()),
        ("noisy", yes_no(profile.noisy).to_string()),
        ("first search", profile.primary.to_string()),
        ("scoring variants", build_query_title_variants(title).join(" | ")),
        ("search variants", profile.search_variants.join(" | ")),
    ];

    for (label, value) in fields {
        writeln!(out, "{}", styling.format_field(label, &value))?;
    }
    Ok(())
}

pub fn run_similarity<W: Write>(a: &str, b: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{:.4}", title_similarity(a, b))?;
    Ok(())
}

/// One resolution outcome as printed by `--json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport {
    pub title: String,
    pub year: Option<String>,
    pub found: bool,
    pub media_type: Option<MediaType>,
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionReport {
    pub fn new(request: &ResolveRequest, entity: Option<ResolvedEntity>) -> Self {
        Self {
            title: request.title.clone(),
            year: request.year.clone(),
            found: entity.is_some(),
            media_type: entity.map(|entity| entity.media_type),
            id: entity.map(|entity| entity.id),
            error: None,
        }
    }

    pub fn invalid(input: &str, reason: &str) -> Self {
        Self {
            title: input.to_string(),
            year: None,
            found: false,
            media_type: None,
            id: None,
            error: Some(reason.to_string()),
        }
    }

    /// Text column: `tv:66732`, `not found` or `invalid: ...`
    fn status_text(&self, styling: &StyleManager) -> String {
        match (&self.error, self.media_type, self.id) {
            (Some(reason), _, _) => styling.style_error(&format!("invalid: {}", reason)),
            (None, Some(media_type), Some(id)) => {
                styling.style_success(&ResolvedEntity { id, media_type }.to_string())
            }
            _ => styling.style_warning("not found"),
        }
    }
}

/// Resolve one request; cancellations and deadline misses count as not found
async fn resolve_or_none<S: SearchApi>(
    resolver: &CachedResolver<S>,
    request: &ResolveRequest,
    deadline: Duration,
) -> Option<ResolvedEntity> {
    match resolver.resolve_with_deadline(request, deadline).await {
        Ok(entity) => entity,
        Err(e) => {
            debug!("Treating {:?} as not found: {}", request.title, e);
            None
        }
    }
}

/// Resolve a single request and print the entity or `not found`
pub async fn run_resolve<S: SearchApi, W: Write>(
    resolver: &Resolver<S>,
    request: &ResolveRequest,
    deadline: Duration,
    json: bool,
    styling: &StyleManager,
    out: &mut W,
) -> Result<CommandOutcome> {
    let entity = match resolver.resolve_with_deadline(request, deadline).await {
        Ok(entity) => entity,
        Err(e) => {
            debug!("Treating {:?} as not found: {}", request.title, e);
            None
        }
    };

    if json {
        let report = ResolutionReport::new(request, entity);
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        match entity {
            Some(entity) => writeln!(out, "{}", entity)?,
            None => writeln!(out, "{}", styling.style_warning("not found"))?,
        }
    }

    Ok(match entity {
        Some(_) => CommandOutcome::Completed,
        None => CommandOutcome::NotFound,
    })
}

/// One non-blank, non-comment line of a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub line: usize,
    pub input: String,
    pub request: Result<ResolveRequest, String>,
}

/// Parse `title[|year[|type]]`; `None` for blank and `#` lines
pub fn parse_batch_line(line: &str) -> Option<Result<ResolveRequest, String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.splitn(3, '|').map(str::trim);
    let title = fields.next().unwrap_or_default();
    let year = fields.next();
    let media_type = match fields.next().filter(|kind| !kind.is_empty()) {
        Some(kind) => match MediaType::from_str(kind) {
            Ok(media_type) => media_type,
            Err(e) => return Some(Err(e.to_string())),
        },
        None => MediaType::Movie,
    };

    let request = ResolveRequest::new(title, media_type).with_year(year);
    Some(request.validate().map(|_| request).map_err(|e| e.to_string()))
}

/// Parse a whole batch file, keeping 1-based line numbers
pub fn parse_batch(contents: &str) -> Vec<BatchEntry> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            parse_batch_line(line).map(|request| BatchEntry {
                line: index + 1,
                input: line.trim().to_string(),
                request,
            })
        })
        .collect()
}

async fn read_batch_file(path: &Path) -> Result<Vec<BatchEntry>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    Ok(parse_batch(&contents))
}

/// Resolve every entry with bounded concurrency, printing in input order
pub async fn run_batch<S, W>(
    resolver: Arc<CachedResolver<S>>,
    networking: &NetworkingManager,
    entries: Vec<BatchEntry>,
    deadline: Duration,
    json: bool,
    display: &Display,
    out: &mut W,
) -> Result<Vec<ResolutionReport>>
where
    S: SearchApi + Send + Sync + 'static,
    W: Write,
{
    let requests: Vec<ResolveRequest> = entries
        .iter()
        .filter_map(|entry| entry.request.as_ref().ok().cloned())
        .collect();

    let progress = display
        .progress()
        .bar(requests.len() as u64, "Resolving titles");

    let resolved = if requests.is_empty() {
        Vec::new()
    } else {
        let worker_progress = progress.clone();
        networking
            .run_bounded(requests, move |request: ResolveRequest| {
                let resolver = resolver.clone();
                let progress = worker_progress.clone();
                async move {
                    progress.set_message(&request.title);
                    let entity = resolve_or_none(&resolver, &request, deadline).await;
                    progress.inc();
                    (request, entity)
                }
            })
            .await
            .context("Batch resolution failed")?
    };

    // Results come back in submission order, one per valid entry
    let mut resolved = resolved.into_iter();
    let mut rows = Vec::with_capacity(entries.len());
    for entry in &entries {
        let report = match &entry.request {
            Ok(_) => match resolved.next() {
                Some((request, entity)) => ResolutionReport::new(&request, entity),
                None => continue,
            },
            Err(reason) => ResolutionReport::invalid(&entry.input, reason),
        };
        rows.push((entry, report));
    }

    let found = rows.iter().filter(|(_, report)| report.found).count();
    progress.finish_clear();
    info!("Resolved {} of {} batch entries", found, rows.len());

    let styling = display.styling();
    for (entry, report) in &rows {
        if json {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
        } else {
            writeln!(out, "{}\t{}", entry.input, report.status_text(styling))?;
        }
    }

    let reports = rows.into_iter().map(|(_, report)| report).collect();
    Ok(reports)
}

/// Print the presentation fields picked from one entity's detail
pub async fn run_detail<D: DetailApi, W: Write>(
    api: &D,
    media_type: MediaType,
    id: u64,
    preference: LanguagePreference,
    styling: &StyleManager,
    out: &mut W,
) -> Result<EntityDetails> {
    let details = api
        .details(media_type, id)
        .await
        .with_context(|| format!("Failed to fetch details for {}:{}", media_type, id))?;

    let or_missing = |value: String| {
        if value.is_empty() {
            MISSING.to_string()
        } else {
            value
        }
    };

    let logo = select_logo(&details.images.logos, preference)
        .map(|logo| match logo.aspect_ratio {
            Some(ratio) => format!("{} ({:.2})", logo.file_path, ratio),
            None => logo.file_path,
        })
        .unwrap_or_default();

    let ratings = RatingTable::from_details(&details);
    let rating = select_rating(&ratings)
        .map(|(country, certification)| format!("{} {}", country, certification))
        .unwrap_or_default();

    let fields = [
        ("title", details.display_title().unwrap_or_default().to_string()),
        ("genres", details.genre_names().join(", ")),
        ("cast", details.top_cast(DETAIL_CAST_LIMIT).join(", ")),
        ("logo", logo),
        ("rating", rating),
        ("trailer", select_trailer_url(&details.videos.results)),
    ];

    writeln!(
        out,
        "{}",
        styling.style_emphasis(&format!("{}:{}", media_type, details.id))
    )?;
    for (label, value) in fields {
        writeln!(out, "{}", styling.format_field(label, &or_missing(value)))?;
    }

    Ok(details)
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
