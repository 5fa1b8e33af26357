//! Translated dashboard text.
//!
//! Every label, caption and tooltip the dashboard shows is a Fluent message in
//! `i18n/<locale>/runboard-ui.ftl`; `en-US` is the fallback and the reference
//! that `fl!` checks keys and arguments against at compile time (see
//! `i18n.toml`). Bundles are embedded, so neither launcher ships loose files.
//!
//! ```ignore
//! crate::i18n::init();
//! let heading = t!("chart-deaths-title");
//! let caption = t!("table-caption", runs = "12", players = "3");
//! ```
//!
//! Player names, causes and milestone names come from the run table and are
//! passed in as arguments, never translated. Messages are formatted without
//! bidi isolation marks because most of them end up inside SVG `<text>`.
use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` against the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-dashboard")
/// t!("tile-death-meta", deaths = "4")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Bundle file stem. Must match `domain` in `i18n.toml`.
const DOMAIN: &str = "runboard-ui";
const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language tag");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

fn select(requested: &[LanguageIdentifier]) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Bundles, requested)?;
    // Reselecting rebuilds the bundles, which resets this flag.
    LOADER.set_use_isolating(false);
    Ok(selected)
}

/// Pick the best embedded locale for the user's system (or browser) languages.
/// Only the first call does anything.
pub fn init() {
    INIT.call_once(|| match select(&requested_languages()) {
        Ok(selected) => tracing::debug!(?selected, "dashboard locale selected"),
        Err(err) => tracing::warn!(error = %err, "locale selection failed, using {FALLBACK}"),
    });
}

/// Switch the dashboard language. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring invalid language tag");
        return Ok(());
    };
    select(&[lang])?;
    tracing::debug!(tag, "language switched");
    Ok(())
}

/// Locale directories embedded under `i18n/`, sorted.
pub fn available_languages() -> Vec<String> {
    Bundles::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
