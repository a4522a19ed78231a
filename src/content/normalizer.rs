use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{DefaultContact, NOTES_PLACEHOLDER, default_images};
use crate::domain::{ContactInfo, SectionEntry, TournamentRecord};

/// Tournament in the single shape every page renders, whatever schema version
/// the source file was written against
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPage {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub registration_open: bool,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub registration_deadline: NaiveDate,
    pub location: String,
    pub venue: String,
    pub images: Vec<String>,
    pub description: String,
    pub paragraphs: Vec<String>,
    pub sections: Vec<SectionView>,
    pub time_control: String,
    pub rounds: u32,
    pub prizes: String,
    pub payment_link: Option<String>,
    pub features: Vec<String>,
    pub contact: Contact,
    pub meta_description: String,
    pub registration_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub name: String,
    pub description: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub person: String,
    pub phone: String,
    pub email: String,
}

pub fn normalize(record: &TournamentRecord, defaults: &DefaultContact) -> TournamentPage {
    TournamentPage {
        id: record.id(),
        slug: record.slug.clone(),
        title: record.title.clone(),
        registration_open: record.registration_open,
        date_start: record.date_start,
        date_end: record.date_end,
        registration_deadline: record.registration_deadline,
        location: record.location.clone(),
        venue: record.venue.clone(),
        images: resolve_images(record.images.as_deref(), record.hero_image.as_deref()),
        description: record.description.clone(),
        paragraphs: split_paragraphs(&record.full_description),
        sections: record.sections.iter().map(normalize_section).collect(),
        time_control: record.time_control.clone(),
        rounds: record.rounds,
        prizes: record.prizes.clone(),
        payment_link: non_blank(record.payment_link.as_deref()).map(str::to_string),
        features: record.features.clone().unwrap_or_default(),
        contact: resolve_contact(record.contact.as_ref(), defaults),
        meta_description: non_blank(record.meta_description.as_deref())
            .unwrap_or(record.description.as_str())
            .to_string(),
        registration_path: format!("/tournaments/{}/register", urlencoding::encode(&record.slug)),
    }
}

pub fn normalize_section(section: &SectionEntry) -> SectionView {
    SectionView {
        name: section.name.clone(),
        description: section.description.clone(),
        notes: resolve_notes(section),
    }
}

/// Current key first, then the legacy key, then the placeholder.
/// Blank values count as missing.
pub fn resolve_notes(section: &SectionEntry) -> String {
    non_blank(section.additional_notes.as_deref())
        .or(non_blank(section.entry_fee.as_deref()))
        .unwrap_or(NOTES_PLACEHOLDER)
        .to_string()
}

pub fn resolve_images(images: Option<&[String]>, hero_image: Option<&str>) -> Vec<String> {
    let authored: Vec<String> = images
        .unwrap_or_default()
        .iter()
        .filter(|path| !path.trim().is_empty())
        .cloned()
        .collect();
    if !authored.is_empty() {
        return authored;
    }

    match non_blank(hero_image) {
        Some(hero) => vec![hero.to_string(); 3],
        None => default_images(),
    }
}

pub fn resolve_contact(contact: Option<&ContactInfo>, defaults: &DefaultContact) -> Contact {
    let pick = |value: Option<&String>, fallback: &String| {
        non_blank(value.map(String::as_str))
            .unwrap_or(fallback.as_str())
            .to_string()
    };

    Contact {
        person: pick(contact.and_then(|c| c.person.as_ref()), &defaults.person),
        phone: pick(contact.and_then(|c| c.phone.as_ref()), &defaults.phone),
        email: pick(contact.and_then(|c| c.email.as_ref()), &defaults.email),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn split_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
