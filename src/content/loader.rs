use anyhow::{Context, Result};
use log::{info, warn};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use super::fallback;
use super::front_matter;
use super::source::{ContentSource, DirectorySource};
use crate::config::settings::ContentSettings;
use crate::domain::TournamentRecord;

struct Snapshot {
    records: Arc<Vec<TournamentRecord>>,
    loaded_at: Instant,
}

/// Reads tournament records from a content source and keeps the last parse
/// as a snapshot.
///
/// The snapshot is rebuilt on `reload()`, on first use, and on the first
/// read after the TTL (if any) has elapsed. Only one caller rebuilds at a
/// time; readers arriving meanwhile wait for its result. Read and parse
/// failures never reach the caller: they are logged and the affected files
/// skipped.
///
/// Reads go through blocking I/O. Async callers should run them on the
/// blocking pool.
pub struct ContentLoader {
    source: Box<dyn ContentSource>,
    ttl: Option<Duration>,
    snapshot: RwLock<Option<Snapshot>>,
}

impl ContentLoader {
    pub fn new<S: ContentSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            ttl: None,
            snapshot: RwLock::new(None),
        }
    }

    pub fn from_settings(settings: &ContentSettings) -> Self {
        let loader = Self::new(DirectorySource::new(settings.tournaments_path()));
        match settings.refresh_secs {
            Some(secs) => loader.with_ttl(Duration::from_secs(secs)),
            None => loader,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn list_content_files(&self) -> Vec<String> {
        self.source.list_content_files()
    }

    /// Re-reads every content file. Returns how many records parsed.
    pub fn reload(&self) -> usize {
        self.refresh().len()
    }

    /// Published record with this slug, if any
    pub fn get_by_slug(&self, slug: &str) -> Option<TournamentRecord> {
        self.records()
            .iter()
            .find(|r| r.slug == slug && r.is_published())
            .cloned()
    }

    /// Published records, most recent `date` first. Records without a date go last.
    pub fn get_all(&self) -> Vec<TournamentRecord> {
        let mut published: Vec<TournamentRecord> = self
            .records()
            .iter()
            .filter(|r| r.is_published())
            .cloned()
            .collect();
        published.sort_by(|a, b| {
            Reverse(a.date)
                .cmp(&Reverse(b.date))
                .then_with(|| a.slug.cmp(&b.slug))
        });
        published
    }

    pub fn get_active(&self) -> Vec<TournamentRecord> {
        self.get_all()
            .into_iter()
            .filter(|r| r.registration_open)
            .collect()
    }

    pub fn get_fallback() -> Vec<TournamentRecord> {
        fallback::get_fallback()
    }

    /// `get_all()`, or the fallback records when the store has nothing published
    pub fn tournaments_or_fallback(&self) -> Vec<TournamentRecord> {
        let all = self.get_all();
        if all.is_empty() {
            info!("No published tournaments in content store, serving fallback records");
            return Self::get_fallback();
        }
        all
    }

    pub fn active_or_fallback(&self) -> Vec<TournamentRecord> {
        self.tournaments_or_fallback()
            .into_iter()
            .filter(|r| r.registration_open)
            .collect()
    }

    /// Looks a slug up in whatever `tournaments_or_fallback()` would list
    pub fn find_or_fallback(&self, slug: &str) -> Option<TournamentRecord> {
        self.tournaments_or_fallback()
            .into_iter()
            .find(|r| r.slug == slug)
    }

    fn records(&self) -> Arc<Vec<TournamentRecord>> {
        if let Some(records) = self.fresh_records() {
            return records;
        }

        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have rebuilt while we waited for the lock
        if let Some(snapshot) = guard.as_ref().filter(|s| !self.is_stale(s)) {
            return Arc::clone(&snapshot.records);
        }
        self.rebuild(&mut guard)
    }

    fn refresh(&self) -> Arc<Vec<TournamentRecord>> {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        self.rebuild(&mut guard)
    }

    fn rebuild(&self, slot: &mut Option<Snapshot>) -> Arc<Vec<TournamentRecord>> {
        let records = Arc::new(self.read_all());
        *slot = Some(Snapshot {
            records: Arc::clone(&records),
            loaded_at: Instant::now(),
        });
        records
    }

    fn fresh_records(&self) -> Option<Arc<Vec<TournamentRecord>>> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        let snapshot = guard.as_ref()?;
        if self.is_stale(snapshot) {
            return None;
        }
        Some(Arc::clone(&snapshot.records))
    }

    fn is_stale(&self, snapshot: &Snapshot) -> bool {
        self.ttl
            .is_some_and(|ttl| snapshot.loaded_at.elapsed() >= ttl)
    }

    fn read_all(&self) -> Vec<TournamentRecord> {
        let mut records = Vec::new();
        let mut slugs = HashSet::new();
        for name in self.source.list_content_files() {
            match self.read_record(&name) {
                Ok(record) if !slugs.insert(record.slug.clone()) => warn!(
                    "Skipping content file {}: slug '{}' is already used by another file",
                    name, record.slug
                ),
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping content file {}: {:#}", name, e),
            }
        }
        info!("Loaded {} tournament records", records.len());
        records
    }

    fn read_record(&self, name: &str) -> Result<TournamentRecord> {
        let raw = self.source.read(name)?;
        parse_record(&raw).with_context(|| format!("Invalid tournament file {}", name))
    }
}

/// Parses and checks one tournament Markdown file
pub fn parse_record(raw: &str) -> Result<TournamentRecord> {
    let record: TournamentRecord = front_matter::parse(raw)?;
    record.validate()?;
    if record.has_blank_images() {
        warn!(
            "Tournament '{}' lists no usable images, pages will use the fallback images",
            record.slug
        );
    }
    if record.deadline_after_start() {
        warn!(
            "Tournament '{}' closes registration ({}) after it starts ({})",
            record.slug, record.registration_deadline, record.date_start
        );
    }
    Ok(record)
}
