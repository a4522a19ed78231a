use chrono::NaiveDate;

use crate::domain::{ContactInfo, SectionEntry, TournamentRecord, TournamentStatus};

/// Records shown when the content store is empty or unreadable
pub fn get_fallback() -> Vec<TournamentRecord> {
    vec![summer_rapid(), district_selection()]
}

fn summer_rapid() -> TournamentRecord {
    TournamentRecord {
        slug: "summer-rapid-open".to_string(),
        title: "Summer Rapid Open".to_string(),
        status: TournamentStatus::Published,
        registration_open: true,
        date_start: date(2025, 5, 17),
        date_end: date(2025, 5, 18),
        registration_deadline: date(2025, 5, 10),
        location: "Bengaluru".to_string(),
        venue: "Knights Academy Main Hall".to_string(),
        hero_image: None,
        images: Some(vec![
            "/images/tournaments/summer-rapid-1.jpg".to_string(),
            "/images/tournaments/summer-rapid-2.jpg".to_string(),
            "/images/tournaments/summer-rapid-3.jpg".to_string(),
        ]),
        description: "A two-day FIDE-rated rapid open for all age groups.".to_string(),
        full_description: "Seven rounds of rapid chess across two days.\n\
                           Age-group prizes are awarded in every section."
            .to_string(),
        sections: vec![
            section("U-10", "Players born in 2015 or later", Some("₹600 per player")),
            section("U-14", "Players born in 2011 or later", Some("₹700 per player")),
            section("Open", "No age limit", Some("₹900 per player")),
        ],
        time_control: "15 minutes + 10 seconds increment".to_string(),
        rounds: 7,
        prizes: "Trophies for the top 5 in every section, medals for all finishers".to_string(),
        payment_link: None,
        features: Some(vec![
            "FIDE rated".to_string(),
            "Air-conditioned playing hall".to_string(),
            "Live results".to_string(),
        ]),
        contact: None,
        meta_description: Some("Summer Rapid Open at Knights Academy, Bengaluru".to_string()),
        date: Some(date(2025, 3, 1)),
    }
}

fn district_selection() -> TournamentRecord {
    TournamentRecord {
        slug: "district-selection-classical".to_string(),
        title: "District Selection Classical".to_string(),
        status: TournamentStatus::Published,
        registration_open: false,
        date_start: date(2025, 2, 8),
        date_end: date(2025, 2, 10),
        registration_deadline: date(2025, 1, 31),
        location: "Bengaluru".to_string(),
        venue: "Community Chess Centre".to_string(),
        hero_image: Some("/images/tournaments/district-selection.jpg".to_string()),
        images: None,
        description: "Classical selection event for the state championship.".to_string(),
        full_description: "Top finishers qualify for the state championship.".to_string(),
        sections: vec![section("Open", "Selection section", None)],
        time_control: "90 minutes + 30 seconds increment".to_string(),
        rounds: 6,
        prizes: "Qualification spots and cash prizes".to_string(),
        payment_link: None,
        features: None,
        contact: Some(ContactInfo {
            person: Some("Arbiter's Desk".to_string()),
            phone: None,
            email: None,
        }),
        meta_description: None,
        date: Some(date(2024, 12, 15)),
    }
}

fn section(name: &str, description: &str, notes: Option<&str>) -> SectionEntry {
    SectionEntry {
        name: name.to_string(),
        description: description.to_string(),
        additional_notes: notes.map(str::to_string),
        entry_fee: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
