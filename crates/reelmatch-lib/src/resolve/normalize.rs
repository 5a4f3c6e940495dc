//! Title normalization for matching
//!
//! Turns free-text, often bilingual and season-qualified titles into
//! comparable lowercase forms. The pipeline runs in a fixed order:
//!
//! 1. Unicode NFKC (folds full-width and compatibility forms)
//! 2. Season hints (`Season 2`, `S02`, `第二季`, `第3部`)
//! 3. Bare media-type words (`tv`, `movie`, `电视剧`, ...)
//! 4. Lowercase
//! 5. Quote and separator punctuation become spaces
//! 6. Release/source-code tokens (`hevc-1080`, `abc123`)
//! 7. Whitespace collapse
//!
//! Latin tokens use ASCII word boundaries, so `绝命毒师S05` still carries a
//! season hint and `怪奇物语tv` still loses its media word.
//!
//! # Examples
//!
//! ```
//! use reelmatch_lib::resolve::normalize::{has_season_intent, normalize_title_for_match};
//!
//! assert_eq!(normalize_title_for_match("《权力的游戏》第二季"), "权力的游戏");
//! assert!(has_season_intent("权力的游戏 第二季"));
//! ```

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// `Season 2`, `series 03`, `S1`
static SEASON_HINT_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:season|series|s)\s*0*\d{1,2}(?-u:\b)")
        .expect("valid english season pattern")
});

/// `第二季`, `第 3 部`, `第十辑`
static SEASON_HINT_CJK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第\s*[0-9一二三四五六七八九十百零〇两兩]+\s*[季部辑輯]")
        .expect("valid cjk season pattern")
});

static MEDIA_WORD_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:tv|movie|show)(?-u:\b)").expect("valid english media-word pattern")
});

static MEDIA_WORD_CJK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"电视剧|電視劇|电影|電影|剧集|劇集|综艺|綜藝|真人秀")
        .expect("valid cjk media-word pattern")
});

static QUOTE_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'`“”‘’„‟«»‹›「」『』《》〈〉〝〞]"#).expect("valid quote pattern")
});

static SYMBOL_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\-_.,:;!?/\\|()\[\]{}<>~@#$%\^&*+=·•・、，。：；！？（）【】〔〕［］｛｝〖〗…—–―～]",
    )
    .expect("valid punctuation pattern")
});

/// Release-group / episode codes once lowercased (`hevc-1080`, `ipx 177`)
static SOURCE_CODE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[a-z]{2,6}[-_ ]?\d{2,6}(?-u:\b)").expect("valid source-code pattern")
});

/// Joined code tokens in the raw string; the spaced form is too common in real titles
static JOINED_CODE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[a-z]{2,6}[-_]?\d{2,6}(?-u:\b)").expect("valid joined code pattern")
});

/// Resolution, codec and source tags found in release names
static RELEASE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u:\b)(?:\d{3,4}[pi]|[248]k|[xh]\.?26[45]|hevc|avc|web-?dl|web-?rip|blu-?ray|bd-?rip|hdtv|hdr|remux|dts|aac)(?-u:\b)",
    )
    .expect("valid release tag pattern")
});

/// Minimum compact length for the punctuation-density noise rule
const NOISY_MIN_COMPACT_LEN: usize = 18;
/// Minimum punctuation marks for the punctuation-density noise rule
const NOISY_MIN_PUNCTUATION: usize = 3;

/// Normalize a title into its spaced, lowercase matching form
///
/// Idempotent: `normalize_title_for_match(&normalize_title_for_match(x)) ==
/// normalize_title_for_match(x)`. The pipeline is re-run until nothing
/// changes, since a removal can expose a token that an earlier step matches
/// (`"s tv 1"` loses `tv` and becomes a season hint). Every pass that changes
/// the text removes a token or a punctuation mark, so the loop terminates.
pub fn normalize_title_for_match(raw: &str) -> String {
    let mut current = normalize_pass(raw);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Normalized form with all whitespace removed
pub fn to_compact_title_for_match(raw: &str) -> String {
    compact(&normalize_title_for_match(raw))
}

/// Whether the raw query names a specific season or part
///
/// Computed on the raw string, before any stripping.
pub fn has_season_intent(raw: &str) -> bool {
    let folded = nfkc(raw);
    SEASON_HINT_EN.is_match(&folded) || SEASON_HINT_CJK.is_match(&folded)
}

/// Remove season hints and bare media-type words, keeping case and punctuation
pub fn strip_season_and_media_words(raw: &str) -> String {
    collapse_whitespace(&strip_season_and_media_tokens(&nfkc(raw)))
}

/// Whether the query looks like a release name rather than a title
///
/// True when it carries a release tag (`1080p`, `x265`, `web-dl`) or a joined
/// source-code token (`hevc-1080`, `abc123`), or when its compact form is
/// long and punctuation-heavy.
pub fn is_likely_noisy_query_title(raw: &str) -> bool {
    let folded = nfkc(raw).to_lowercase();
    if RELEASE_TAG.is_match(&folded) || JOINED_CODE_TOKEN.is_match(&folded) {
        return true;
    }

    let punctuation =
        QUOTE_PUNCT.find_iter(&folded).count() + SYMBOL_PUNCT.find_iter(&folded).count();
    punctuation >= NOISY_MIN_PUNCTUATION
        && to_compact_title_for_match(raw).chars().count() >= NOISY_MIN_COMPACT_LEN
}

/// Remove every whitespace character
pub fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Collapse whitespace runs into single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn nfkc(raw: &str) -> String {
    raw.nfkc().collect()
}

fn strip_season_and_media_tokens(text: &str) -> String {
    let text = SEASON_HINT_EN.replace_all(text, " ");
    let text = SEASON_HINT_CJK.replace_all(&text, " ");
    let text = MEDIA_WORD_EN.replace_all(&text, " ");
    MEDIA_WORD_CJK.replace_all(&text, " ").into_owned()
}

fn normalize_pass(raw: &str) -> String {
    let text = strip_season_and_media_tokens(&nfkc(raw)).to_lowercase();
    let text = QUOTE_PUNCT.replace_all(&text, " ");
    let text = SYMBOL_PUNCT.replace_all(&text, " ");
    let text = SOURCE_CODE_TOKEN.replace_all(&text, " ");
    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    include!("normalize.test.rs");
}
