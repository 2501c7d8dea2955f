use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{ Deserialize, Serialize };

pub const DEFAULT_SHOW_ID: &str = "sharp-tech";

pub const SHOW_IDS: [&str; 5] = ["sharp-tech", "founders", "jre", "modern-wisdom", "dithering"];

fn raw_show(id: &str) -> Option<&'static str> {
    match id {
        "sharp-tech" => Some(include_str!("shows/sharp-tech.json")),
        "founders" => Some(include_str!("shows/founders.json")),
        "jre" => Some(include_str!("shows/jre.json")),
        "modern-wisdom" => Some(include_str!("shows/modern-wisdom.json")),
        "dithering" => Some(include_str!("shows/dithering.json")),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeImage {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub name: String,
    pub description: String,
    pub html_description: String,
    pub duration_ms: u64,
    pub release_date: String,
    #[serde(default)]
    pub images: Vec<EpisodeImage>,
    pub external_urls: ExternalUrls,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodePage {
    pub items: Vec<Option<Episode>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: String,
    pub name: String,
    pub publisher: String,
    #[serde(default)]
    pub images: Vec<EpisodeImage>,
    pub episodes: EpisodePage,
}

/// Unknown or missing ids fall back to the default show.
pub fn find_show(id: Option<&str>) -> Result<Show, serde_json::Error> {
    let raw = id
        .and_then(raw_show)
        .or_else(|| raw_show(DEFAULT_SHOW_ID))
        .unwrap_or_default();
    serde_json::from_str(raw)
}

impl Show {
    /// Pages can contain `null` slots for unavailable episodes.
    pub fn first_episode(&self) -> Option<&Episode> {
        self.episodes.items.iter().flatten().next()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

lazy_static! {
    static ref EMPTY_PARAGRAPH: Regex = Regex::new(r"(?i)<p><br\s*/?></p>").unwrap();
    static ref BREAK_BETWEEN_PARAGRAPHS: Regex = Regex::new(r"(?i)</p>\s*<br\s*/?>\s*<p>").unwrap();
}

impl Episode {
    /// `H:MM:SS` from one hour up, otherwise `M:SS`.
    pub fn formatted_duration(&self) -> String {
        let total_seconds = self.duration_ms / 1000;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }

    pub fn formatted_release_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d") {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => self.release_date.clone(),
        }
    }

    pub fn cover_url<'a>(&'a self, show: &'a Show) -> Option<&'a str> {
        self.images
            .first()
            .map(|image| image.url.as_str())
            .or_else(|| show.image_url())
    }

    /// Drops empty paragraphs and line breaks wedged between paragraphs.
    pub fn cleaned_html_description(&self) -> String {
        let without_empty = EMPTY_PARAGRAPH.replace_all(&self.html_description, "");
        BREAK_BETWEEN_PARAGRAPHS.replace_all(&without_empty, "</p><p>").into_owned()
    }
}
