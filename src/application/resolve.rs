use crate::application::phrases;
use crate::domain::model::{Origin, Resolution, TranslationRequest};
use crate::infrastructure::storage::db::{lookup, record_hit, upsert};
use crate::state::AppState;

/// Resolve one piece of UI text through the tiered pipeline:
/// persistent cache, static phrase table, then (if allowed) the remote
/// translator behind the in-flight de-duplicator.
///
/// Never fails: every error path degrades to the source text, so the
/// caller always has something to display.
pub async fn resolve_text(
    state: &AppState,
    request: TranslationRequest,
    allow_remote: bool,
    no_cache: bool,
) -> Resolution {
    // Same language or empty input: nothing to translate, no tier is
    // consulted.
    if request.target_lang == request.source_lang || request.text.is_empty() {
        return Resolution::source(request.text);
    }

    // 1. Persistent cache. A storage error is a miss, not a failure.
    if !no_cache {
        match lookup(&state.db, &request).await {
            Ok(Some(entry)) => {
                if let Err(e) = record_hit(&state.db, entry.id).await {
                    tracing::debug!("hit-count update failed: {}", e);
                }
                return Resolution {
                    text: entry.translated_text,
                    origin: Origin::Cache,
                };
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("cache lookup failed, treating as miss: {}", e);
            }
        }
    }

    // 2. Static phrase table.
    if let Some(fixed) = phrases::lookup(
        &request.text,
        &request.target_lang,
        request.context.as_deref(),
    ) {
        return Resolution {
            text: fixed,
            origin: Origin::Phrase,
        };
    }

    // 3. Remote fallback, or pass the source through untouched.
    if !allow_remote {
        return Resolution::source(request.text);
    }

    let key = request.dedupe_key();
    let gateway_state = state.clone();
    state
        .inflight
        .run_or_join(key, async move {
            remote_resolve(gateway_state, request, no_cache).await
        })
        .await
}

/// Remote translator gateway. Re-checks the cache (another process may
/// have persisted the tuple since the first miss), calls the remote
/// provider, and writes the result back. Infallible by contract: any
/// failure returns the source text.
async fn remote_resolve(state: AppState, request: TranslationRequest, no_cache: bool) -> Resolution {
    if !no_cache {
        match lookup(&state.db, &request).await {
            Ok(Some(entry)) => {
                if let Err(e) = record_hit(&state.db, entry.id).await {
                    tracing::debug!("hit-count update failed: {}", e);
                }
                return Resolution {
                    text: entry.translated_text,
                    origin: Origin::Cache,
                };
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("cache re-check failed, treating as miss: {}", e);
            }
        }
    }

    let translated = match state.translator.translate(&request).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!("remote translation failed, returning source text: {}", e);
            return Resolution::source(request.text);
        }
    };

    let provider = state.translator.provider_tag().to_string();

    // Write-back failure is tolerated: the text is still returned and
    // the next request for this tuple simply re-translates.
    if !no_cache {
        if let Err(e) = upsert(&state.db, &request, &translated, &provider).await {
            tracing::warn!("cache write-back failed: {}", e);
        }
    }

    Resolution {
        text: translated,
        origin: Origin::Remote(provider),
    }
}
