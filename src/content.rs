// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: profile, skills, projects, posts and jobs.
//!
//! The default content ships inside the binary as
//! `assets/content/portfolio.toml`. A different file can be passed with
//! `--content`; it goes through the same validation.

use crate::error::{ContentError, Error, Result};
use chrono::NaiveDate;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

const EMBEDDED_FILE: &str = "portfolio.toml";

/// Id of the implicit tab that shows every entry.
pub const ALL_TAB: &str = "all";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Email,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

/// Pictogram shown on a skill card.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Document,
    Target,
    Bot,
    #[default]
    Sparkles,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub years: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub code_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_minutes: u32,
    pub category: String,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// A tab of a filtered listing. Entries whose category is listed are shown.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TabFilter {
    pub id: String,
    pub label: String,
    pub categories: Vec<String>,
}

impl TabFilter {
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(category))
    }
}

/// Something that can be filtered by tab.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }
}

/// A listing with tabs, such as projects or blog posts.
///
/// Entries whose category no tab lists still show under [`ALL_TAB`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Listing<T> {
    #[serde(default)]
    pub tabs: Vec<TabFilter>,
    pub items: Vec<T>,
}

impl<T: Categorized> Listing<T> {
    /// Entries visible under `tab_id`. Unknown ids and [`ALL_TAB`] show everything.
    pub fn filtered<'a>(&'a self, tab_id: &'a str) -> impl Iterator<Item = &'a T> + 'a {
        let tab = self.tabs.iter().find(|tab| tab.id == tab_id);
        self.items
            .iter()
            .filter(move |item| tab.is_none_or(|tab| tab.accepts(item.category())))
    }

    /// Number of entries visible under `tab_id`.
    #[must_use]
    pub fn count(&self, tab_id: &str) -> usize {
        self.filtered(tab_id).count()
    }

    fn validate(&self) -> std::result::Result<(), ContentError> {
        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if tab.id == ALL_TAB || !seen.insert(tab.id.as_str()) {
                return Err(ContentError::DuplicateTab(tab.id.clone()));
            }
            if tab.categories.is_empty() {
                return Err(ContentError::EmptyTab(tab.id.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub projects: Listing<Project>,
    pub blog: Listing<BlogPost>,
    #[serde(default)]
    pub experience: Vec<Job>,
}

impl Portfolio {
    /// Parses and validates a TOML document.
    pub fn parse(source: &str) -> Result<Self> {
        let mut portfolio: Portfolio =
            toml::from_str(source).map_err(|err| ContentError::Parse(err.to_string()))?;
        portfolio.validate()?;
        // Posts list newest first; same-day posts keep their file order.
        portfolio.blog.items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(portfolio)
    }

    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = ContentAsset::get(EMBEDDED_FILE)
            .ok_or_else(|| ContentError::MissingAsset(EMBEDDED_FILE.to_string()))?;
        Self::parse(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Content from a file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Loads `path` when given, falling back to the embedded content.
    ///
    /// Returns the i18n key of a warning when the custom file was rejected.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<(Self, Option<&'static str>)> {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(portfolio) => return Ok((portfolio, None)),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using embedded portfolio content");
                    let key = match &err {
                        Error::Content(content) => content.i18n_key(),
                        _ => "error-content-read",
                    };
                    return Ok((Self::embedded()?, Some(key)));
                }
            }
        }
        Ok((Self::embedded()?, None))
    }

    fn validate(&self) -> std::result::Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        self.projects.validate()?;
        self.blog.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
        [profile]
        name = "Ada"
        title = "Engineer"
        tagline = "Builds things"
        about = ["Hello"]
        email = "ada@example.com"

        [projects]
        tabs = [{ id = "nlp", label = "NLP", categories = ["nlp"] }]
        items = [{ title = "Bot", description = "Chat", category = "nlp" }]

        [blog]
        items = [
            { title = "Old", excerpt = "x", date = "2024-01-02", read_minutes = 3, category = "misc", url = "https://example.com/old" },
            { title = "New", excerpt = "y", date = "2025-03-04", read_minutes = 5, category = "misc", url = "https://example.com/new" },
        ]
    "#;

    #[test]
    fn embedded_content_is_valid() {
        let portfolio = Portfolio::embedded().expect("embedded content parses");
        assert_eq!(portfolio.profile.name, "Rabbani Shaik");
        assert_eq!(portfolio.skills.len(), 4);
        assert_eq!(portfolio.skills[0].icon, SkillIcon::Document);
        assert_eq!(portfolio.technologies.len(), 16);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.projects.count(ALL_TAB), 3);
        assert_eq!(portfolio.projects.count("cv"), 1);
    }

    #[test]
    fn blog_tabs_group_categories() {
        let portfolio = Portfolio::embedded().expect("embedded content parses");
        let tab = portfolio
            .blog
            .tabs
            .iter()
            .find(|tab| tab.id == "language")
            .expect("language tab");
        assert!(tab.accepts("nlp"));
        assert!(tab.accepts("Multimodal"));
        assert!(!tab.accepts("mlops"));

        // Posts outside every tab only show under "all"
        assert_eq!(portfolio.blog.count(ALL_TAB), 2);
        assert_eq!(portfolio.blog.count("language"), 0);
    }

    #[test]
    fn minimal_document_parses() {
        let portfolio = Portfolio::parse(MINIMAL).expect("valid");
        assert!(portfolio.social.is_empty());
        assert_eq!(portfolio.projects.count("nlp"), 1);
        assert_eq!(portfolio.blog.count("anything"), 2);
    }

    #[test]
    fn posts_sort_newest_first() {
        let portfolio = Portfolio::parse(MINIMAL).expect("valid");
        let titles: Vec<&str> = portfolio
            .blog
            .filtered(ALL_TAB)
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let source = MINIMAL.replace("name = \"Ada\"", "name = \"  \"");
        match Portfolio::parse(&source) {
            Err(Error::Content(ContentError::EmptyName)) => {}
            other => panic!("expected EmptyName, got {:?}", other),
        }
    }

    #[test]
    fn uncategorized_entries_only_show_under_all() {
        let source = MINIMAL.replace("category = \"nlp\" }", "category = \"audio\" }");
        let portfolio = Portfolio::parse(&source).expect("valid");
        assert_eq!(portfolio.projects.count(ALL_TAB), 1);
        assert_eq!(portfolio.projects.count("nlp"), 0);
    }

    #[test]
    fn tab_without_categories_is_rejected() {
        let source = MINIMAL.replace("categories = [\"nlp\"]", "categories = []");
        match Portfolio::parse(&source) {
            Err(Error::Content(ContentError::EmptyTab(id))) => assert_eq!(id, "nlp"),
            other => panic!("expected EmptyTab, got {:?}", other),
        }
    }

    #[test]
    fn reserved_tab_id_is_rejected() {
        let source = MINIMAL.replace("id = \"nlp\"", "id = \"all\"");
        assert!(matches!(
            Portfolio::parse(&source),
            Err(Error::Content(ContentError::DuplicateTab(_)))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Portfolio::parse("[profile"),
            Err(Error::Content(ContentError::Parse(_)))
        ));
    }

    #[test]
    fn invalid_custom_file_falls_back_with_warning() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, "[profile]\nname = \"\"\n").expect("write");

        let (portfolio, warning) =
            Portfolio::load_or_embedded(Some(&path)).expect("embedded fallback");
        assert_eq!(portfolio.profile.name, "Rabbani Shaik");
        assert_eq!(warning, Some("error-content-parse"));
    }

    #[test]
    fn missing_custom_file_warns_about_reading() {
        let dir = tempdir().expect("tempdir");
        let (_, warning) = Portfolio::load_or_embedded(Some(&dir.path().join("absent.toml")))
            .expect("embedded fallback");
        assert_eq!(warning, Some("error-content-read"));
    }

    #[test]
    fn valid_custom_file_is_used() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("portfolio.toml");
        fs::write(&path, MINIMAL).expect("write");

        let (portfolio, warning) = Portfolio::load_or_embedded(Some(&path)).expect("loads");
        assert_eq!(portfolio.profile.name, "Ada");
        assert!(warning.is_none());
    }
}
