//! Read-only helpers over loaded content.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::types::{
    BandContent, BandProfile, ContactContent, Show, ShowsContent, SocialContent, SocialPlatform,
};

pub const FALLBACK_CONTACT_EMAIL: &str = "contact@band.com";
pub const PLACEHOLDER_BAND_NAME: &str = "[Your Band Name]";

/// Shows starting at or after `now`, earliest first. Shows with an
/// unparsable date are skipped. A limit of zero means no limit.
pub fn upcoming_shows<'a>(shows: &'a ShowsContent, now: DateTime<Utc>, limit: Option<usize>) -> Vec<&'a Show> {
    let mut dated: Vec<(DateTime<Utc>, &Show)> = shows
        .upcoming
        .iter()
        .filter_map(|show| show.starts_at().map(|at| (at, show)))
        .filter(|(at, _)| *at >= now)
        .collect();
    dated.sort_by_key(|(at, _)| *at);

    let iter = dated.into_iter().map(|(_, show)| show);
    match limit {
        Some(n) if n > 0 => iter.take(n).collect(),
        _ => iter.collect(),
    }
}

/// Upcoming shows flagged as featured.
pub fn featured_shows(shows: &ShowsContent, now: DateTime<Utc>) -> Vec<&Show> {
    upcoming_shows(shows, now, None)
        .into_iter()
        .filter(|show| show.featured)
        .collect()
}

/// Active platforms, ordered by `preferred_order`. Platforms missing from
/// the order come last, in document order.
pub fn active_social_platforms(social: &SocialContent) -> Vec<(&str, &SocialPlatform)> {
    let rank = |name: &str| {
        social
            .preferred_order
            .iter()
            .position(|p| p == name)
            .unwrap_or(usize::MAX)
    };

    let mut active: Vec<(&str, &SocialPlatform)> = social
        .platforms
        .iter()
        .filter(|(_, platform)| platform.active)
        .map(|(name, platform)| (name.as_str(), platform))
        .collect();
    // Stable sort keeps document order among unranked platforms.
    active.sort_by_key(|(name, _)| rank(*name));
    active
}

pub fn contact_email(contact: Option<&ContactContent>) -> &str {
    contact
        .map(|c| c.primary.email.as_str())
        .filter(|email| !email.is_empty())
        .unwrap_or(FALLBACK_CONTACT_EMAIL)
}

/// Display phone if set, else the raw phone.
pub fn contact_phone(contact: &ContactContent) -> Option<&str> {
    contact
        .primary
        .phone_display
        .as_deref()
        .or(contact.primary.phone.as_deref())
}

/// Whether the profile is the unedited template.
pub fn is_placeholder_profile(profile: &BandProfile) -> bool {
    profile.name == PLACEHOLDER_BAND_NAME
}

/// What a band page shows at a glance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHighlights<'a> {
    pub upcoming_shows: Vec<&'a Show>,
    pub featured_shows: Vec<&'a Show>,
    pub social_platforms: Vec<&'a str>,
    pub contact_email: &'a str,
    pub contact_phone: Option<&'a str>,
    pub placeholder_profile: bool,
}

/// Upcoming shows are capped by the band's `maxUpcomingDisplay` setting.
pub fn highlights(content: &BandContent, now: DateTime<Utc>) -> ContentHighlights<'_> {
    ContentHighlights {
        upcoming_shows: upcoming_shows(
            &content.shows,
            now,
            Some(content.shows.settings.max_upcoming_display),
        ),
        featured_shows: featured_shows(&content.shows, now),
        social_platforms: active_social_platforms(&content.social)
            .into_iter()
            .map(|(name, _)| name)
            .collect(),
        contact_email: contact_email(Some(&content.contact)),
        contact_phone: contact_phone(&content.contact),
        placeholder_profile: is_placeholder_profile(&content.profile),
    }
}
