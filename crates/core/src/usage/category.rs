//! Coarse site categories used for the local score and breakdown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Coding,
    Learning,
    Social,
    Entertainment,
    Communication,
    Shopping,
    News,
    Productivity,
    Other,
}

/// Categories backed by a fixed domain list, in lookup order.
const CATEGORY_DOMAINS: &[(Category, &[&str])] = &[
    (
        Category::Coding,
        &[
            "github.com",
            "gitlab.com",
            "bitbucket.org",
            "stackblitz.com",
            "vscode.dev",
            "codepen.io",
            "stackshare.io",
        ],
    ),
    (
        Category::Learning,
        &[
            "coursera.org",
            "edx.org",
            "udemy.com",
            "khanacademy.org",
            "pluralsight.com",
            "nptel.ac.in",
            "w3schools.com",
            "developer.mozilla.org",
        ],
    ),
    (
        Category::Social,
        &[
            "facebook.com",
            "instagram.com",
            "twitter.com",
            "x.com",
            "reddit.com",
            "linkedin.com",
            "tiktok.com",
        ],
    ),
    (
        Category::Entertainment,
        &["youtube.com", "netflix.com", "spotify.com", "hulu.com", "primevideo.com", "twitch.tv"],
    ),
    (
        Category::Communication,
        &[
            "slack.com",
            "teams.microsoft.com",
            "discord.com",
            "mail.google.com",
            "outlook.live.com",
            "zoom.us",
            "meet.google.com",
        ],
    ),
    (Category::Shopping, &["amazon.com", "ebay.com", "etsy.com", "flipkart.com"]),
    (Category::News, &["nytimes.com", "bbc.com", "cnn.com", "theguardian.com"]),
];

/// Substring fallbacks, checked only when no domain list matched.
const CATEGORY_KEYWORDS: &[(&[&str], Category)] = &[
    (&["docs", "notion", "confluence"], Category::Productivity),
    (&["blog", "news"], Category::News),
    (&["video", "stream"], Category::Entertainment),
];

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::Learning => "Learning",
            Self::Social => "Social",
            Self::Entertainment => "Entertainment",
            Self::Communication => "Communication",
            Self::Shopping => "Shopping",
            Self::News => "News",
            Self::Productivity => "Productivity",
            Self::Other => "Other",
        }
    }

    /// Whether time in this category counts towards the heuristic score.
    #[must_use]
    pub const fn is_productive(self) -> bool {
        matches!(self, Self::Coding | Self::Learning)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trims, lowercases and drops one leading `www.`.
#[must_use]
pub fn normalize_domain(domain: &str) -> String {
    let lowered = domain.trim().to_lowercase();
    match lowered.strip_prefix("www.") {
        Some(rest) => rest.to_owned(),
        None => lowered,
    }
}

/// True if `domain` is `target` or one of its subdomains.
///
/// `domain` must already be normalised; `target` is normalised here.
#[must_use]
pub fn domain_matches(domain: &str, target: &str) -> bool {
    let target = normalize_domain(target);
    domain == target
        || domain.strip_suffix(target.as_str()).is_some_and(|head| head.ends_with('.'))
}

#[must_use]
pub fn category_for_domain(domain: &str) -> Category {
    let normalized = normalize_domain(domain);
    if normalized.is_empty() {
        return Category::Other;
    }

    for (category, domains) in CATEGORY_DOMAINS {
        if domains.iter().any(|target| domain_matches(&normalized, target)) {
            return *category;
        }
    }

    for (keywords, category) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_www_and_case() {
        assert_eq!(normalize_domain("  WWW.GitHub.com "), "github.com");
        assert_eq!(normalize_domain("docs.google.com"), "docs.google.com");
        assert_eq!(normalize_domain(""), "");
    }

    #[test]
    fn test_domain_matches_subdomain() {
        assert!(domain_matches("gist.github.com", "github.com"));
        assert!(domain_matches("github.com", "www.github.com"));
        assert!(!domain_matches("notgithub.com", "github.com"));
    }

    #[test]
    fn test_category_from_domain_list() {
        assert_eq!(category_for_domain("www.github.com"), Category::Coding);
        assert_eq!(category_for_domain("coursera.org"), Category::Learning);
        assert_eq!(category_for_domain("m.youtube.com"), Category::Entertainment);
        assert_eq!(category_for_domain("x.com"), Category::Social);
    }

    #[test]
    fn test_domain_list_wins_over_keywords() {
        // keyword "video" would say Entertainment
        assert_eq!(category_for_domain("video.github.com"), Category::Coding);
        assert_eq!(category_for_domain("mail.google.com"), Category::Communication);
    }

    #[test]
    fn test_category_from_keywords() {
        assert_eq!(category_for_domain("docs.google.com"), Category::Productivity);
        assert_eq!(category_for_domain("www.notion.so"), Category::Productivity);
        assert_eq!(category_for_domain("techblog.example"), Category::News);
        assert_eq!(category_for_domain("livestream.example"), Category::Entertainment);
    }

    #[test]
    fn test_unknown_and_empty_are_other() {
        assert_eq!(category_for_domain("example.org"), Category::Other);
        assert_eq!(category_for_domain("   "), Category::Other);
    }

    #[test]
    fn test_productive_categories() {
        assert!(Category::Coding.is_productive());
        assert!(Category::Learning.is_productive());
        assert!(!Category::Productivity.is_productive());
    }
}
