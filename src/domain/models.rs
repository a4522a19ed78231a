use anyhow::{Result, bail};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::dates;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Publication state of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    #[default]
    Draft,
    Published,
}

/// Tournament as authored in the content store.
///
/// Older files carry `heroImage` and per-section `entryFee`; newer ones carry
/// `images` and `additionalNotes`. Both shapes deserialize into this struct and
/// are reconciled by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default)]
    pub registration_open: bool,
    #[serde(with = "dates::flexible")]
    pub date_start: NaiveDate,
    #[serde(with = "dates::flexible")]
    pub date_end: NaiveDate,
    #[serde(with = "dates::flexible")]
    pub registration_deadline: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
    #[serde(default)]
    pub time_control: String,
    pub rounds: u32,
    #[serde(default)]
    pub prizes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Publication date, used for ordering listings
    #[serde(default, with = "dates::flexible_opt", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Category entry of a tournament (e.g. "U-10", "Open")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    /// Legacy key, superseded by `additional_notes`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TournamentRecord {
    pub fn is_published(&self) -> bool {
        self.status == TournamentStatus::Published
    }

    /// Numeric id kept for older UI code that keyed tournaments by number
    pub fn id(&self) -> u32 {
        legacy_id(&self.slug)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s.name == name)
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Checks the structural invariants every record must satisfy
    pub fn validate(&self) -> Result<()> {
        if !SLUG_PATTERN.is_match(&self.slug) {
            bail!("slug '{}' is not URL-safe", self.slug);
        }
        if self.title.trim().is_empty() {
            bail!("tournament '{}' has no title", self.slug);
        }
        if self.date_start > self.date_end {
            bail!(
                "tournament '{}' starts ({}) after it ends ({})",
                self.slug,
                self.date_start,
                self.date_end
            );
        }
        if self.rounds == 0 {
            bail!("tournament '{}' must have at least one round", self.slug);
        }
        self.validate_section_names()
    }

    /// `images` present but with nothing usable in it. Pages fall back to the
    /// hero or default images.
    pub fn has_blank_images(&self) -> bool {
        self.images
            .as_ref()
            .is_some_and(|images| images.iter().all(|path| path.trim().is_empty()))
    }

    /// Deadline after the first playing day. Allowed, but worth flagging.
    pub fn deadline_after_start(&self) -> bool {
        self.registration_deadline > self.date_start
    }

    fn validate_section_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.name.as_str()) {
                bail!(
                    "tournament '{}' declares section '{}' twice",
                    self.slug,
                    section.name
                );
            }
        }
        Ok(())
    }
}

/// 31-multiplier rolling hash over UTF-16 code units, wrapped to 32 bits
pub fn legacy_id(slug: &str) -> u32 {
    let hash = slug
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32)
        });
    hash.unsigned_abs()
}
