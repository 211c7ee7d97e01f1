//! Portfolio content model.
//!
//! All text displayed by the sections lives here as plain data, separate from
//! rendering and animation. Content can be loaded from a TOML file so the
//! portfolio is personalizable without recompiling; a built-in default is used
//! when no file is given.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the hero, nav bar, and preloader
    pub name: String,
    /// Role line shown under the name (e.g. "Systems Engineer")
    pub role: String,
    /// Short tagline shown in the hero section
    pub tagline: String,
    /// Paragraphs for the about section
    pub bio: Vec<String>,
    /// Contact email shown in the footer
    pub email: String,
}

/// A single skill card in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
}

/// A project card in the projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title
    pub title: String,
    /// One or two sentence description
    pub description: String,
    /// Technology tags
    pub technologies: Vec<String>,
    /// Link to the running project, if any
    #[serde(default)]
    pub url: Option<String>,
    /// Link to the source repository, if any
    #[serde(default)]
    pub repo: Option<String>,
}

/// A social/contact link shown in the contact section and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label (e.g. "GitHub")
    pub label: String,
    /// Target URL
    pub url: String,
}

/// Complete portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Profile information
    pub profile: Profile,
    /// Skill cards for the about section
    pub skills: Vec<Skill>,
    /// Project cards for the projects section
    pub projects: Vec<Project>,
    /// Social links
    pub socials: Vec<SocialLink>,
}

impl Content {
    /// Loads content from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        let content: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse content file: {}", path.display()))?;
        Ok(content)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Ada Reyes".to_string(),
                role: "Systems Engineer".to_string(),
                tagline: "I build fast, reliable tools for the terminal. \
                          Specializing in Rust, TUIs, and software that respects your machine."
                    .to_string(),
                bio: vec![
                    "I'm a systems engineer with a soft spot for text interfaces. \
                     Most of my work lives where performance budgets are tight and \
                     feedback loops need to be instant."
                        .to_string(),
                    "I care about the details between beautiful and functional: \
                     latency you can feel, output you can read, and tools that stay \
                     out of your way."
                        .to_string(),
                ],
                email: "hello@adareyes.dev".to_string(),
            },
            skills: vec![
                Skill {
                    name: "Systems Programming".to_string(),
                },
                Skill {
                    name: "Terminal Interfaces".to_string(),
                },
                Skill {
                    name: "Performance Tuning".to_string(),
                },
                Skill {
                    name: "Network Services".to_string(),
                },
                Skill {
                    name: "Developer Tooling".to_string(),
                },
                Skill {
                    name: "Open Source".to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "ledgerd".to_string(),
                    description: "Append-only metrics store with a live terminal dashboard \
                                  and sub-millisecond ingest path."
                        .to_string(),
                    technologies: vec![
                        "Rust".to_string(),
                        "ratatui".to_string(),
                        "io_uring".to_string(),
                    ],
                    url: None,
                    repo: Some("https://github.com/adareyes/ledgerd".to_string()),
                },
                Project {
                    title: "hopscotch".to_string(),
                    description: "Fuzzy directory jumper that learns from your shell history \
                                  instead of tracking you."
                        .to_string(),
                    technologies: vec!["Rust".to_string(), "clap".to_string()],
                    url: None,
                    repo: Some("https://github.com/adareyes/hopscotch".to_string()),
                },
                Project {
                    title: "wirecheck".to_string(),
                    description: "Protocol conformance tester for binary wire formats with \
                                  human-readable diff output."
                        .to_string(),
                    technologies: vec![
                        "Rust".to_string(),
                        "nom".to_string(),
                        "proptest".to_string(),
                    ],
                    url: None,
                    repo: Some("https://github.com/adareyes/wirecheck".to_string()),
                },
                Project {
                    title: "termfolio".to_string(),
                    description: "This very portfolio: a single scrolling page with \
                                  choreographed reveals, rendered entirely in your terminal."
                        .to_string(),
                    technologies: vec![
                        "Rust".to_string(),
                        "ratatui".to_string(),
                        "crossterm".to_string(),
                    ],
                    url: None,
                    repo: Some("https://github.com/termfolio/termfolio".to_string()),
                },
            ],
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/adareyes".to_string(),
                },
                SocialLink {
                    label: "Mastodon".to_string(),
                    url: "https://hachyderm.io/@adareyes".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:hello@adareyes.dev".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_complete() {
        let content = Content::default();
        assert!(!content.profile.name.is_empty());
        assert!(!content.profile.bio.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.socials.is_empty());
    }

    #[test]
    fn test_content_toml_roundtrip() {
        let content = Content::default();
        let text = toml::to_string(&content).expect("serialize");
        let parsed: Content = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = Content::load(Path::new("/nonexistent/content.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("content.toml");
        let text = toml::to_string(&Content::default()).expect("serialize");
        std::fs::write(&path, text).expect("write");

        let loaded = Content::load(&path).expect("load");
        assert_eq!(loaded, Content::default());
    }
}
