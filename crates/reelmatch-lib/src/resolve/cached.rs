//! Memoized resolution
//!
//! [`CachedResolver`] puts a [`ResolutionCache`] in front of a [`Resolver`].
//! Requests are keyed on what actually determines the outcome, so
//! `"Dune"` and `"  DUNE "` share an entry.

use crate::api::search::{SearchApi, parse_year};
use crate::networking::cache::{CacheConfig, ResolutionCache};
use crate::primitives::MediaType;
use crate::resolve::normalize::{has_season_intent, normalize_title_for_match};
use crate::resolve::resolver::{ResolveError, ResolveRequest, ResolvedEntity, Resolver};
use std::time::Duration;

/// Cache key for one resolution request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Title {
        media_type: MediaType,
        title: String,
        year: Option<i32>,
    },
    Id {
        media_type: MediaType,
        id: u64,
    },
}

impl CacheKey {
    /// Key on (media type, id) when an id is known, otherwise on the
    /// effective media type, normalized title and year
    pub fn for_request(request: &ResolveRequest) -> Self {
        if let Some(id) = request.known_id() {
            return Self::Id {
                media_type: request.preferred,
                id,
            };
        }

        let media_type = if has_season_intent(&request.title) {
            MediaType::Tv
        } else {
            request.preferred
        };

        Self::Title {
            media_type,
            title: normalize_title_for_match(&request.title),
            year: request.year.as_deref().and_then(parse_year),
        }
    }
}

/// A [`Resolver`] with memoized outcomes
///
/// Not-found outcomes are cached too; cancellations and deadline misses are
/// not.
pub struct CachedResolver<S> {
    resolver: Resolver<S>,
    cache: ResolutionCache<CacheKey, Option<ResolvedEntity>>,
}

impl<S: SearchApi> CachedResolver<S> {
    pub fn new(resolver: Resolver<S>, config: CacheConfig) -> Self {
        Self {
            resolver,
            cache: ResolutionCache::with_config(config),
        }
    }

    pub fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    pub fn cache(&self) -> &ResolutionCache<CacheKey, Option<ResolvedEntity>> {
        &self.cache
    }

    pub async fn resolve(
        &self,
        request: &ResolveRequest,
    ) -> Result<Option<ResolvedEntity>, ResolveError> {
        self.cache
            .get_or_try_resolve(CacheKey::for_request(request), || {
                self.resolver.resolve(request)
            })
            .await
    }

    pub async fn resolve_with_deadline(
        &self,
        request: &ResolveRequest,
        deadline: Duration,
    ) -> Result<Option<ResolvedEntity>, ResolveError> {
        self.cache
            .get_or_try_resolve(CacheKey::for_request(request), || {
                self.resolver.resolve_with_deadline(request, deadline)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    include!("cached.test.rs");
}
