//! The profile record: a static description of the portfolio owner.
//!
//! The record is embedded at compile time and parsed once at startup. Field
//! order is significant: relay prompts embed the record's compact JSON verbatim.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const EMBEDDED_PROFILE: &str = include_str!("../data/profile.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub date: String,
    pub logo: String,
    pub desc: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tech: String,
    pub description: String,
    /// Gradient hint for the project card.
    pub color: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    /// Link to the hosted resume document.
    pub resume: String,
    pub contact: Contact,
    pub about: String,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
}

impl Profile {
    /// The record compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_PROFILE).context("Embedded profile record is invalid")
    }

    /// Loads a replacement record from disk, e.g. via `PROFILE_PATH`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Profile file '{}' is invalid", path.display()))
    }

    /// Embedded record unless an override path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let profile = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::embedded()?,
        };
        info!(
            "Profile loaded: {} ({} projects, {} skills)",
            profile.name,
            profile.projects.len(),
            profile.skills.len()
        );
        Ok(profile)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(raw)?;
        if profile.name.trim().is_empty() {
            bail!("profile name cannot be empty");
        }
        Ok(profile)
    }

    /// First token of the owner's name, as used in prompts and page copy.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Compact JSON of the whole record, in declaration order.
    pub fn to_prompt_json(&self) -> String {
        serde_json::to_string(self)
            .expect("profile holds only strings, vectors and structs; JSON serialization cannot fail")
    }
}
