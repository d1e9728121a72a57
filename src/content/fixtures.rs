//! In-memory documents and fetcher shared by unit tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::content::error::FetchError;
use crate::content::fetcher::DocumentFetcher;
use crate::content::loader::{
    ABOUT_DOCUMENT, CONTACT_DOCUMENT, PROFILE_DOCUMENT, SHOWS_DOCUMENT, SOCIAL_DOCUMENT,
};

pub fn profile_json() -> Value {
    json!({
        "id": "night-owls",
        "name": "Night Owls",
        "tagline": "Loud after midnight",
        "genre": "indie-rock",
        "established": "2015",
        "theme": {
            "primaryColor": "red-900",
            "secondaryColor": "gray-800",
            "accentColor": "#ffcc00",
            "animationIntensity": "moderate",
            "particleEffects": true,
            "glowEffects": false
        },
        "seo": {
            "metaTitle": "Night Owls | Official Site",
            "metaDescription": "Indie rock from Leeds",
            "keywords": ["indie", "rock", "leeds"]
        },
        "branding": {
            "logoMain": "/logos/main.png",
            "logoIcon": "/logos/icon.png",
            "favicon": "/favicon.ico"
        }
    })
}

pub fn about_json() -> Value {
    json!({
        "title": "About Night Owls",
        "descriptions": {
            "short": "Indie rock quartet.",
            "medium": "An indie rock quartet from Leeds.",
            "long": "An indie rock quartet from Leeds playing loud songs about quiet towns."
        },
        "members": [
            { "name": "Ada", "role": "Vocals", "bio": "Sings." }
        ]
    })
}

pub fn social_json() -> Value {
    json!({
        "platforms": {
            "spotify": { "url": "https://open.spotify.com/artist/owls", "artistId": "owls", "active": true },
            "instagram": { "url": "https://instagram.com/nightowls", "handle": "@nightowls", "active": true },
            "facebook": { "url": "https://facebook.com/nightowls", "active": true },
            "tiktok": { "url": "https://tiktok.com/@nightowls", "active": false }
        },
        "preferredOrder": ["instagram", "tiktok", "spotify"],
        "displaySettings": { "showInHeader": true, "showInFooter": true, "showInContact": false }
    })
}

pub fn contact_json() -> Value {
    json!({
        "primary": { "email": "hello@nightowls.test", "phone": "+441130000000", "phoneDisplay": "0113 000 0000" },
        "booking": { "email": "booking@nightowls.test", "contactPerson": "Sam" },
        "location": { "city": "Leeds", "country": "UK" },
        "responseTime": "48 hours",
        "preferredContact": "email"
    })
}

pub fn shows_json() -> Value {
    json!({
        "upcoming": [
            {
                "id": "old",
                "date": "2020-01-10",
                "time": "20:00",
                "venue": { "name": "Brudenell", "city": "Leeds", "country": "UK" }
            },
            {
                "id": "late",
                "date": "2099-05-01",
                "time": "21:00",
                "venue": { "name": "Academy", "city": "Manchester", "country": "UK" },
                "featured": true
            },
            {
                "id": "early",
                "date": "2099-03-01T20:00:00Z",
                "time": "20:00",
                "venue": { "name": "Garage", "city": "Glasgow", "country": "UK" },
                "soldOut": true
            }
        ],
        "settings": { "showPastShows": false, "maxUpcomingDisplay": 2 }
    })
}

/// Single-document form served by the api and cms sources.
pub fn band_content_json() -> Value {
    json!({
        "profile": profile_json(),
        "about": about_json(),
        "social": social_json(),
        "contact": contact_json(),
        "shows": shows_json(),
    })
}

/// Fetcher backed by a map of documents. Counts every fetch per location.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    documents: Mutex<HashMap<String, Value>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetcher holding the five file-source documents of `band_id` under `root`.
    pub fn with_band_files(root: &str, band_id: &str) -> Self {
        let fetcher = Self::new();
        let base = Path::new(root).join(band_id);
        for (doc, value) in [
            (PROFILE_DOCUMENT, profile_json()),
            (ABOUT_DOCUMENT, about_json()),
            (SOCIAL_DOCUMENT, social_json()),
            (CONTACT_DOCUMENT, contact_json()),
            (SHOWS_DOCUMENT, shows_json()),
        ] {
            fetcher.insert(&base.join(doc).to_string_lossy(), value);
        }
        fetcher
    }

    pub fn insert(&self, location: &str, value: Value) {
        self.documents.lock().unwrap().insert(location.to_string(), value);
    }

    pub fn remove(&self, location: &str) {
        self.documents.lock().unwrap().remove(location);
    }

    pub fn calls_for(&self, location: &str) -> usize {
        self.calls.lock().unwrap().get(location).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl DocumentFetcher for MemoryFetcher {
    async fn fetch(&self, location: &str) -> Result<Value, FetchError> {
        *self.calls.lock().unwrap().entry(location.to_string()).or_insert(0) += 1;
        self.documents
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                location: location.to_string(),
                status: 404,
            })
    }

    async fn exists(&self, location: &str) -> bool {
        self.documents.lock().unwrap().contains_key(location)
    }
}
