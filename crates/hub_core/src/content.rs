//! Static illustrative content shown alongside the live search results.

/// A curated blog teaser. Only the title is actionable ("Read More" searches for it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub description: &'static str,
}

/// A trending headline with a prebuilt link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingNews {
    pub title: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
}

/// Videos displayed before the first successful search, as `(title, video id)`.
pub const DEFAULT_VIDEOS: [(&str, &str); 6] = [
    ("Stock Market for Beginners", "p7HKvqRI_Bo"),
    ("How to Invest in ETFs", "pT7tW4miW0w"),
    ("Mutual Funds Explained", "R8u8oL2l-aM"),
    ("Cryptocurrency Investing", "iS2-SfolkJc"),
    ("Understanding Bonds", "IoV_ggmQ4nk"),
    ("Ethereum and Smart Contracts", "pWGLtjG-F5c"),
];

pub const BLOG_POSTS: [BlogPost; 6] = [
    BlogPost {
        title: "Stock Market vs. Cryptocurrency: Where Should You Invest?",
        description: "A comparison of traditional stocks and crypto investments.",
    },
    BlogPost {
        title: "Mutual Funds for Beginners: A Step-by-Step Guide",
        description: "Learn the basics of mutual funds and how to start investing.",
    },
    BlogPost {
        title: "How to Diversify Your Portfolio",
        description: "Tips to reduce risk and maximize returns.",
    },
    BlogPost {
        title: "The Rise of ESG Investing",
        description: "Explore sustainable investing trends.",
    },
    BlogPost {
        title: "Understanding Market Volatility",
        description: "What causes market ups and downs?",
    },
    BlogPost {
        title: "Retirement Planning with Index Funds",
        description: "A simple strategy for long-term growth.",
    },
];

pub const TRENDING_NEWS: [TrendingNews; 4] = [
    TrendingNews {
        title: "Tech Stocks Surge in 2025",
        summary: "Analysts predict a boom in tech investments.",
        url: "https://www.google.com/search?q=tech+stocks+surge+2025",
    },
    TrendingNews {
        title: "Crypto Market Volatility Continues",
        summary: "Bitcoin and Ethereum face fluctuations.",
        url: "https://www.google.com/search?q=crypto+market+volatility+2025",
    },
    TrendingNews {
        title: "Federal Reserve Rate Cut Impact",
        summary: "How lower rates affect markets in 2025.",
        url: "https://www.google.com/search?q=federal+reserve+rate+cut+2025",
    },
    TrendingNews {
        title: "Emerging Markets Gain Momentum",
        summary: "Investment trends in developing economies.",
        url: "https://www.google.com/search?q=emerging+markets+2025",
    },
];
