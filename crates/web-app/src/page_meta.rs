//! Document metadata for social sharing.
//!
//! [`PageMeta`] derives the values (pure, tested natively); [`PageMetadata`]
//! applies them to the document on detail-view enter and restores the
//! defaults on exit. Failures are logged, never surfaced.

use log::error;
use stilla_domain::{self as domain, Property};

pub const SITE_NAME: &str = "Mindfulnessguiden Verktygslådan";
const DEFAULT_DESCRIPTION: &str = "Verktygslåda för certifierade mindfulnessguider";
const IMAGE_PATH: &str = "/logo_transparent.webp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

impl PageMeta {
    #[must_use]
    pub fn for_exercise(exercise: &domain::Exercise, origin: &str, path: &str) -> Self {
        let description = if exercise.one_liner.is_empty() {
            format!(
                "Mindfulnessövning: {} - {}",
                exercise.title,
                exercise.competency.name()
            )
        } else {
            exercise.one_liner.to_string()
        };
        Self {
            title: format!("{} | {SITE_NAME}", exercise.title),
            description,
            url: format!("{origin}{path}#exercise-{}", exercise.id),
            image: format!("{origin}{IMAGE_PATH}"),
        }
    }

    #[must_use]
    pub fn defaults(origin: &str, path: &str) -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            url: format!("{origin}{path}"),
            image: format!("{origin}{IMAGE_PATH}"),
        }
    }
}

/// Collaborator owning the document metadata. Only one detail view is ever
/// mounted, so `set` and `reset` follow a plain acquire/release discipline.
pub struct PageMetadata {
    origin: String,
    path: String,
}

impl PageMetadata {
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let location = web_sys::window()?.location();
        match (location.origin(), location.pathname()) {
            (Ok(origin), Ok(path)) => Some(Self { origin, path }),
            _ => {
                error!("failed to read window location");
                None
            }
        }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set(&self, exercise: &domain::Exercise) {
        apply(&PageMeta::for_exercise(exercise, &self.origin, &self.path));
    }

    pub fn reset(&self) {
        apply(&PageMeta::defaults(&self.origin, &self.path));
    }
}

fn apply(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("failed to access document to set page metadata");
        return;
    };

    document.set_title(&meta.title);

    for (name, content) in [
        ("title", meta.title.as_str()),
        ("description", &meta.description),
        ("twitter:card", "summary_large_image"),
        ("twitter:title", &meta.title),
        ("twitter:description", &meta.description),
        ("twitter:image", &meta.image),
    ] {
        set_meta_tag(&document, "name", name, content);
    }

    for (property, content) in [
        ("og:title", &meta.title),
        ("og:description", &meta.description),
        ("og:url", &meta.url),
        ("og:image", &meta.image),
    ] {
        set_meta_tag(&document, "property", property, content);
    }

    set_canonical_link(&document, &meta.url);
}

fn set_meta_tag(document: &web_sys::Document, attribute: &str, name: &str, content: &str) {
    let selector = format!("meta[{attribute}=\"{name}\"]");
    let element = match document.query_selector(&selector) {
        Ok(Some(element)) => element,
        Ok(None) => match create_head_element(document, "meta") {
            Some(element) => {
                if let Err(err) = element.set_attribute(attribute, name) {
                    error!("failed to name meta tag {name}: {err:?}");
                    return;
                }
                element
            }
            None => return,
        },
        Err(err) => {
            error!("failed to look up meta tag {name}: {err:?}");
            return;
        }
    };
    if let Err(err) = element.set_attribute("content", content) {
        error!("failed to set meta tag {name}: {err:?}");
    }
}

fn set_canonical_link(document: &web_sys::Document, url: &str) {
    let element = match document.query_selector("link[rel=\"canonical\"]") {
        Ok(Some(element)) => Some(element),
        Ok(None) => create_head_element(document, "link").and_then(|element| {
            element
                .set_attribute("rel", "canonical")
                .map(|()| element)
                .ok()
        }),
        Err(err) => {
            error!("failed to look up canonical link: {err:?}");
            None
        }
    };
    if let Some(element) = element {
        if let Err(err) = element.set_attribute("href", url) {
            error!("failed to set canonical link: {err:?}");
        }
    }
}

fn create_head_element(document: &web_sys::Document, tag: &str) -> Option<web_sys::Element> {
    let head = document.head()?;
    match document.create_element(tag) {
        Ok(element) => match head.append_child(&element) {
            Ok(_) => Some(element),
            Err(err) => {
                error!("failed to append {tag} element to head: {err:?}");
                None
            }
        },
        Err(err) => {
            error!("failed to create {tag} element: {err:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use stilla_domain::{ExerciseID, catalog};

    #[test]
    fn test_page_meta_for_exercise() {
        let exercise = catalog::exercise_by_id(ExerciseID::from(1)).unwrap();
        let meta = PageMeta::for_exercise(exercise, "https://example.org", "/");
        assert_eq!(
            meta.title,
            "Stillhetsmeditation | Mindfulnessguiden Verktygslådan"
        );
        assert_eq!(meta.description, exercise.one_liner);
        assert_eq!(meta.url, "https://example.org/#exercise-1");
        assert_eq!(meta.image, "https://example.org/logo_transparent.webp");
    }

    #[test]
    fn test_page_meta_description_fallback() {
        let mut exercise = *catalog::exercise_by_id(ExerciseID::from(1)).unwrap();
        exercise.one_liner = "";
        let meta = PageMeta::for_exercise(&exercise, "https://example.org", "/");
        assert_eq!(
            meta.description,
            "Mindfulnessövning: Stillhetsmeditation - Psykologisk trygghet"
        );
    }

    #[test]
    fn test_page_meta_defaults() {
        let meta = PageMeta::defaults("https://example.org", "/");
        assert_eq!(meta.title, SITE_NAME);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(meta.url, "https://example.org/");
    }
}
