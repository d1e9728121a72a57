//! Band content data model.
//!
//! Shapes of the documents under a band's content directory and of the
//! single document served by the api/cms sources.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::schema::AnimationIntensity;

/// Complete band content.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BandContent {
    pub profile: BandProfile,
    pub about: AboutContent,
    pub social: SocialContent,
    pub contact: ContactContent,
    pub shows: ShowsContent,
}

// ================================
// Profile (band-profile.json)
// ================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandProfile {
    pub id: String,
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub established: String,
    #[serde(default)]
    pub theme: BandTheme,
    pub seo: BandSeo,
    #[serde(default)]
    pub branding: BandBranding,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BandTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub animation_intensity: Option<AnimationIntensity>,
    pub particle_effects: bool,
    pub glow_effects: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandSeo {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BandBranding {
    pub logo_main: String,
    pub logo_icon: String,
    pub favicon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,
}

// ================================
// About (data/about.json)
// ================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AboutContent {
    #[serde(default)]
    pub title: String,
    pub descriptions: AboutDescriptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<BandStory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<BandMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AboutDescriptions {
    pub short: String,
    pub medium: String,
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BandStory {
    pub founding: String,
    pub mission: String,
    pub vision: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BandMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Achievement {
    pub year: String,
    pub achievement: String,
}

// ================================
// Social (data/social.json)
// ================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialContent {
    /// Platform name → platform entry, in document order. Keys are unique.
    pub platforms: IndexMap<String, SocialPlatform>,
    #[serde(default)]
    pub preferred_order: Vec<String>,
    #[serde(default)]
    pub display_settings: SocialDisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPlatform {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialDisplaySettings {
    pub show_in_header: bool,
    pub show_in_footer: bool,
    pub show_in_contact: bool,
}

// ================================
// Contact (data/contact.json)
// ================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub primary: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management: Option<ManagementInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office: Option<OfficeInfo>,
    #[serde(default)]
    pub response_time: String,
    #[serde(default)]
    pub preferred_contact: PreferredContact,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementInfo {
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationInfo {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeInfo {
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub zip: String,
    pub country: String,
    #[serde(default)]
    pub show_on_website: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
    Form,
}

// ================================
// Shows (data/shows.json)
// ================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShowsContent {
    #[serde(default)]
    pub upcoming: Vec<Show>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<Vec<Show>>,
    #[serde(default)]
    pub settings: ShowSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub venue: Venue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Show {
    /// Start of the show in UTC. Bare dates mean midnight UTC.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowSettings {
    pub show_past_shows: bool,
    pub max_upcoming_display: usize,
    pub max_past_display: usize,
    pub auto_archive_after_days: u32,
}

impl Default for ShowSettings {
    fn default() -> Self {
        Self {
            show_past_shows: true,
            max_upcoming_display: 10,
            max_past_display: 5,
            auto_archive_after_days: 1,
        }
    }
}

// ================================
// Media
// ================================

/// Predictable asset paths for a band.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaAssets {
    pub backgrounds: SectionBackgroundAssets,
    pub gallery: Vec<String>,
    pub videos: Vec<String>,
    pub logos: LogoAssets,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SectionBackgroundAssets {
    pub hero: Vec<String>,
    pub about: Vec<String>,
    pub shows: Vec<String>,
    pub contact: Vec<String>,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogoAssets {
    pub main: String,
    pub icon: String,
    pub favicon: String,
    pub light: String,
    pub dark: String,
}
