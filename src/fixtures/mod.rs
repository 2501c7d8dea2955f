//! Mock content rendered by the prototype screens.

mod shows;

use serde::{ Deserialize, Serialize };
use crate::utils::palette::{ content_colors, provider_colors };

pub use shows::{
    find_show,
    Episode,
    EpisodeImage,
    EpisodePage,
    ExternalUrls,
    Show,
    DEFAULT_SHOW_ID,
    SHOW_IDS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Podcast,
    Article,
    Post,
}

impl ContentType {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Video => content_colors::VIDEO,
            Self::Podcast => content_colors::PODCAST,
            Self::Article => content_colors::ARTICLE,
            Self::Post => content_colors::POST,
        }
    }

    /// Single-letter badge shown in list rows.
    pub fn initial(&self) -> &'static str {
        match self {
            Self::Video => "V",
            Self::Podcast => "P",
            Self::Article | Self::Post => "A",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Podcast => "Podcast",
            Self::Article => "Article",
            Self::Post => "Post",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    YouTube,
    Spotify,
    Substack,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Spotify => "Spotify",
            Self::Substack => "Substack",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::YouTube => provider_colors::YOUTUBE,
            Self::Spotify => provider_colors::SPOTIFY,
            Self::Substack => provider_colors::SUBSTACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub saved: u32,
    pub in_progress: u32,
    pub this_week: u32,
}

pub const STATS: Stats = Stats { saved: 42, in_progress: 7, this_week: 12 };

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeaturedContent {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub provider: Provider,
}

pub const FEATURED: FeaturedContent = FeaturedContent {
    id: "featured-1",
    title: "The Art of Calm Technology",
    subtitle: "How to design products that respect human attention",
    provider: Provider::Substack,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecentItem {
    pub id: &'static str,
    pub title: &'static str,
    pub provider: Provider,
    pub kind: ContentType,
}

pub const RECENT_ITEMS: [RecentItem; 3] = [
    RecentItem {
        id: "1",
        title: "Building Better APIs",
        provider: Provider::YouTube,
        kind: ContentType::Video,
    },
    RecentItem {
        id: "2",
        title: "The Future of AI",
        provider: Provider::Spotify,
        kind: ContentType::Podcast,
    },
    RecentItem {
        id: "3",
        title: "React Native Best Practices",
        provider: Provider::Substack,
        kind: ContentType::Article,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Duration(&'static str),
    ReadTime(&'static str),
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duration(value) | Self::ReadTime(value) => value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InboxItem {
    pub id: &'static str,
    pub title: &'static str,
    pub creator: &'static str,
    pub provider: Provider,
    pub kind: ContentType,
    pub length: Length,
}

pub const INBOX_ITEMS: [InboxItem; 5] = [
    InboxItem {
        id: "1",
        title: "Understanding TypeScript Generics",
        creator: "Matt Pocock",
        provider: Provider::YouTube,
        kind: ContentType::Video,
        length: Length::Duration("15:32"),
    },
    InboxItem {
        id: "2",
        title: "The State of JavaScript 2024",
        creator: "Syntax.fm",
        provider: Provider::Spotify,
        kind: ContentType::Podcast,
        length: Length::Duration("1:23:45"),
    },
    InboxItem {
        id: "3",
        title: "Why React Server Components Matter",
        creator: "Dan Abramov",
        provider: Provider::Substack,
        kind: ContentType::Article,
        length: Length::ReadTime("8 min read"),
    },
    InboxItem {
        id: "4",
        title: "Building a Design System from Scratch",
        creator: "Figma",
        provider: Provider::YouTube,
        kind: ContentType::Video,
        length: Length::Duration("42:18"),
    },
    InboxItem {
        id: "5",
        title: "The Future of Mobile Development",
        creator: "React Native Radio",
        provider: Provider::Spotify,
        kind: ContentType::Podcast,
        length: Length::Duration("58:12"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LibraryItem {
    pub id: &'static str,
    pub title: &'static str,
    pub creator: &'static str,
    pub kind: ContentType,
    pub saved_at: &'static str,
    /// Percent consumed, 0..=100.
    pub progress: u8,
}

pub const LIBRARY_ITEMS: [LibraryItem; 5] = [
    LibraryItem {
        id: "1",
        title: "Understanding TypeScript Generics",
        creator: "Matt Pocock",
        kind: ContentType::Video,
        saved_at: "2 days ago",
        progress: 75,
    },
    LibraryItem {
        id: "2",
        title: "The State of JavaScript 2024",
        creator: "Syntax.fm",
        kind: ContentType::Podcast,
        saved_at: "3 days ago",
        progress: 30,
    },
    LibraryItem {
        id: "3",
        title: "Why React Server Components Matter",
        creator: "Dan Abramov",
        kind: ContentType::Article,
        saved_at: "1 week ago",
        progress: 100,
    },
    LibraryItem {
        id: "4",
        title: "Advanced CSS Techniques",
        creator: "Kevin Powell",
        kind: ContentType::Video,
        saved_at: "1 week ago",
        progress: 0,
    },
    LibraryItem {
        id: "5",
        title: "Building Accessible Components",
        creator: "Sara Soueidan",
        kind: ContentType::Article,
        saved_at: "2 weeks ago",
        progress: 50,
    },
];

/// Library filter chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    #[default]
    All,
    Only(ContentType),
}

impl LibraryFilter {
    pub const OPTIONS: [LibraryFilter; 4] = [
        LibraryFilter::All,
        LibraryFilter::Only(ContentType::Article),
        LibraryFilter::Only(ContentType::Podcast),
        LibraryFilter::Only(ContentType::Video),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(ContentType::Article) => "Articles",
            Self::Only(ContentType::Podcast) => "Podcasts",
            Self::Only(ContentType::Video) => "Videos",
            Self::Only(ContentType::Post) => "Posts",
        }
    }

    /// Dot color for type chips; `All` has none.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(kind) => Some(kind.color()),
        }
    }

    pub fn matches(&self, item: &LibraryItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => item.kind == *kind,
        }
    }

    pub fn apply<'a>(&self, items: &'a [LibraryItem]) -> Vec<&'a LibraryItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .collect()
    }
}
