use chrono::NaiveDate;

use super::models::{SectionEntry, TournamentRecord, TournamentStatus};

pub fn sample_record() -> TournamentRecord {
    TournamentRecord {
        slug: "spring-open-2025".to_string(),
        title: "Spring Open 2025".to_string(),
        status: TournamentStatus::Published,
        registration_open: true,
        date_start: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
        date_end: NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
        registration_deadline: NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
        location: "Pune".to_string(),
        venue: "Academy Hall".to_string(),
        hero_image: None,
        images: None,
        description: "Two-day rapid open".to_string(),
        full_description: String::new(),
        sections: vec![
            SectionEntry {
                name: "U-10".to_string(),
                description: "Born 2015 or later".to_string(),
                additional_notes: None,
                entry_fee: None,
            },
            SectionEntry {
                name: "Open".to_string(),
                description: "All ages".to_string(),
                additional_notes: None,
                entry_fee: None,
            },
        ],
        time_control: "15+10".to_string(),
        rounds: 7,
        prizes: "Trophies".to_string(),
        payment_link: None,
        features: None,
        contact: None,
        meta_description: None,
        date: None,
    }
}
