use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used by the API for `published_at`, e.g. `Apr 19, 2019`
const PUBLISHED_AT_FORMAT: &str = "%b %d, %Y";

/// A video as displayed on the home screen.
///
/// Built from [`RawVideo`] by renaming fields; values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub view_count: String,
    pub published_at: String,
    pub channel_name: String,
    pub profile_image_url: String,
}

impl Video {
    pub fn views_label(&self) -> String {
        format!("{} views", self.view_count)
    }

    /// Human readable age of the video relative to `today`.
    /// Falls back to the raw value when the date cannot be parsed.
    pub fn published_label(&self, today: NaiveDate) -> String {
        match NaiveDate::parse_from_str(&self.published_at, PUBLISHED_AT_FORMAT) {
            Ok(date) => relative_age(date, today),
            Err(_) => self.published_at.clone(),
        }
    }
}

fn relative_age(date: NaiveDate, today: NaiveDate) -> String {
    if date >= today {
        return String::from("today");
    }

    let mut months = (today.year() * 12 + today.month() as i32)
        - (date.year() * 12 + date.month() as i32);
    if today.day() < date.day() {
        months -= 1;
    }

    let (count, unit) = if months >= 12 {
        (i64::from(months / 12), "year")
    } else if months >= 1 {
        (i64::from(months), "month")
    } else {
        ((today - date).num_days(), "day")
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Channel object nested in each entry of the API response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawChannel {
    pub name: String,
    pub profile_image_url: String,
}

/// Video entry as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawVideo {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub view_count: String,
    pub published_at: String,
    pub channel: RawChannel,
}

impl From<RawVideo> for Video {
    fn from(raw: RawVideo) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            thumbnail_url: raw.thumbnail_url,
            view_count: raw.view_count,
            published_at: raw.published_at,
            channel_name: raw.channel.name,
            profile_image_url: raw.channel.profile_image_url,
        }
    }
}

/// Body of a successful `GET /videos/all` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideosResponse {
    pub videos: Vec<RawVideo>,
}

impl VideosResponse {
    pub fn into_videos(self) -> Vec<Video> {
        self.videos.into_iter().map(Video::from).collect()
    }
}
