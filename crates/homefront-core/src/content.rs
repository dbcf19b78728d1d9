//! Landing page content catalog and listing search URLs

use crate::locale::LocaleDictionary;
use crate::routes::Route;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Base path of the listings page
pub const LISTINGS_PATH: &str = "/listings";

/// Cities with listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Beirut,
    Jounieh,
    Byblos,
    Tripoli,
    Saida,
    Batroun,
    Zahle,
    Tyre,
}

impl City {
    pub const ALL: [City; 8] = [
        City::Beirut,
        City::Jounieh,
        City::Byblos,
        City::Tripoli,
        City::Saida,
        City::Batroun,
        City::Zahle,
        City::Tyre,
    ];

    /// Cities offered in the hero search
    pub const SEARCHABLE: [City; 6] = [
        City::Beirut,
        City::Jounieh,
        City::Byblos,
        City::Tripoli,
        City::Saida,
        City::Batroun,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            City::Beirut => "beirut",
            City::Jounieh => "jounieh",
            City::Byblos => "byblos",
            City::Tripoli => "tripoli",
            City::Saida => "saida",
            City::Batroun => "batroun",
            City::Zahle => "zahle",
            City::Tyre => "tyre",
        }
    }

    pub fn from_slug(slug: &str) -> Option<City> {
        City::ALL.into_iter().find(|c| c.slug() == slug)
    }

    fn english_name(&self) -> &'static str {
        match self {
            City::Beirut => "Beirut",
            City::Jounieh => "Jounieh",
            City::Byblos => "Byblos",
            City::Tripoli => "Tripoli",
            City::Saida => "Saida",
            City::Batroun => "Batroun",
            City::Zahle => "Zahle",
            City::Tyre => "Tyre",
        }
    }

    pub fn name(&self, dict: &LocaleDictionary) -> String {
        dict.text_or(
            &format!("pages.home.locations.{}", self.slug()),
            self.english_name(),
        )
    }

    fn icon(&self) -> &'static str {
        match self {
            City::Beirut => "🏙️",
            City::Jounieh => "🏖️",
            City::Byblos => "🏰",
            City::Tripoli => "🕌",
            City::Saida => "🏛️",
            City::Batroun => "⛵",
            City::Zahle => "🏔️",
            City::Tyre => "🌊",
        }
    }

    fn listing_count(&self) -> u32 {
        match self {
            City::Beirut => 1250,
            City::Jounieh => 680,
            City::Byblos => 420,
            City::Tripoli => 550,
            City::Saida => 380,
            City::Batroun => 290,
            City::Zahle => 310,
            City::Tyre => 240,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Villa,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Villa,
        PropertyType::Land,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
        }
    }

    pub fn from_slug(slug: &str) -> Option<PropertyType> {
        PropertyType::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Villa => "Villa",
            PropertyType::Land => "Land",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "0-200k")]
    UpTo200k,
    #[serde(rename = "200k-400k")]
    From200kTo400k,
    #[serde(rename = "400k-600k")]
    From400kTo600k,
    #[serde(rename = "600k-800k")]
    From600kTo800k,
    #[serde(rename = "800k-1m")]
    From800kTo1m,
    #[serde(rename = "1m+")]
    Above1m,
}

impl PriceRange {
    pub const ALL: [PriceRange; 6] = [
        PriceRange::UpTo200k,
        PriceRange::From200kTo400k,
        PriceRange::From400kTo600k,
        PriceRange::From600kTo800k,
        PriceRange::From800kTo1m,
        PriceRange::Above1m,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PriceRange::UpTo200k => "0-200k",
            PriceRange::From200kTo400k => "200k-400k",
            PriceRange::From400kTo600k => "400k-600k",
            PriceRange::From600kTo800k => "600k-800k",
            PriceRange::From800kTo1m => "800k-1m",
            PriceRange::Above1m => "1m+",
        }
    }

    pub fn from_slug(slug: &str) -> Option<PriceRange> {
        PriceRange::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::UpTo200k => "$0 - $200,000",
            PriceRange::From200kTo400k => "$200,000 - $400,000",
            PriceRange::From400kTo600k => "$400,000 - $600,000",
            PriceRange::From600kTo800k => "$600,000 - $800,000",
            PriceRange::From800kTo1m => "$800,000 - $1,000,000",
            PriceRange::Above1m => "$1,000,000+",
        }
    }
}

/// Filters chosen in the hero search form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSearch {
    pub city: Option<City>,
    pub property_type: Option<PropertyType>,
    pub price_range: Option<PriceRange>,
}

impl ListingSearch {
    pub fn for_city(city: City) -> Self {
        Self {
            city: Some(city),
            ..Self::default()
        }
    }

    /// `/listings?city=..&type=..&price=..` with only the chosen filters
    pub fn to_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(city) = self.city {
            query.append_pair("city", city.slug());
        }
        if let Some(kind) = self.property_type {
            query.append_pair("type", kind.slug());
        }
        if let Some(price) = self.price_range {
            query.append_pair("price", price.slug());
        }

        let query = query.finish();
        if query.is_empty() {
            LISTINGS_PATH.to_string()
        } else {
            format!("{}?{}", LISTINGS_PATH, query)
        }
    }
}

/// `/listings?q=..` for the header search box; `/listings` for blank input
pub fn keyword_search_url(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return LISTINGS_PATH.to_string();
    }
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("{}?{}", LISTINGS_PATH, encoded)
}

/// A city tile in the locations block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCard {
    pub city: City,
    pub name: String,
    pub icon: &'static str,
    pub listings: u32,
    pub destination: String,
}

/// City tiles in display order
pub fn location_cards(dict: &LocaleDictionary) -> Vec<LocationCard> {
    City::ALL
        .iter()
        .map(|&city| LocationCard {
            city,
            name: city.name(dict),
            icon: city.icon(),
            listings: city.listing_count(),
            destination: ListingSearch::for_city(city).to_url(),
        })
        .collect()
}

/// A headline figure in the stats block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStat {
    pub value: &'static str,
    pub label: String,
}

pub fn site_stats(dict: &LocaleDictionary) -> Vec<SiteStat> {
    [
        ("5,000+", "propertiesLabel", "Properties Listed"),
        ("200+", "agentsLabel", "Trusted Agents"),
        ("8", "citiesLabel", "Cities Covered"),
        ("98%", "satisfactionLabel", "Client Satisfaction"),
    ]
    .into_iter()
    .map(|(value, key, fallback)| SiteStat {
        value,
        label: dict.text_or(&format!("pages.home.stats.{}", key), fallback),
    })
    .collect()
}

/// Whether a featured listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Sale,
    Rent,
}

impl ListingKind {
    pub fn label(&self, dict: &LocaleDictionary) -> String {
        match self {
            ListingKind::Sale => dict.text_or("pages.home.featured.forSale", "For Sale"),
            ListingKind::Rent => dict.text_or("pages.home.featured.forRent", "For Rent"),
        }
    }

    /// Listings page filtered to this kind
    pub fn route(&self) -> Route {
        match self {
            ListingKind::Sale => Route::BuyListings,
            ListingKind::Rent => Route::RentListings,
        }
    }
}

struct FeaturedProperty {
    title: &'static str,
    neighborhood: &'static str,
    city: City,
    kind: ListingKind,
    price: &'static str,
    beds: u8,
    baths: u8,
    area_sqft: &'static str,
}

const FEATURED_PROPERTIES: [FeaturedProperty; 3] = [
    FeaturedProperty {
        title: "Luxury Villa in Beirut",
        neighborhood: "Achrafieh",
        city: City::Beirut,
        kind: ListingKind::Sale,
        price: "$850,000",
        beds: 4,
        baths: 3,
        area_sqft: "3,200",
    },
    FeaturedProperty {
        title: "Modern Apartment in Jounieh",
        neighborhood: "Maameltein",
        city: City::Jounieh,
        kind: ListingKind::Rent,
        price: "$2,500/mo",
        beds: 3,
        baths: 2,
        area_sqft: "1,800",
    },
    FeaturedProperty {
        title: "Beachfront Property in Byblos",
        neighborhood: "Old Souk",
        city: City::Byblos,
        kind: ListingKind::Sale,
        price: "$1,200,000",
        beds: 5,
        baths: 4,
        area_sqft: "4,500",
    },
];

/// A card in the featured properties block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCard {
    pub title: &'static str,
    pub kind: ListingKind,
    pub badge: String,
    /// `"Achrafieh, Beirut"`, city name localized
    pub location: String,
    pub price: &'static str,
    /// `"4 Beds • 3 Baths • 3,200 sqft"`
    pub facts: String,
    pub destination: String,
}

pub fn property_cards(dict: &LocaleDictionary) -> Vec<PropertyCard> {
    let beds = dict.text_or("pages.home.featured.beds", "Beds");
    let baths = dict.text_or("pages.home.featured.baths", "Baths");
    let sqft = dict.text_or("pages.home.featured.sqft", "sqft");

    FEATURED_PROPERTIES
        .iter()
        .map(|p| PropertyCard {
            title: p.title,
            kind: p.kind,
            badge: p.kind.label(dict),
            location: format!("{}, {}", p.neighborhood, p.city.name(dict)),
            price: p.price,
            facts: format!(
                "{} {} • {} {} • {} {}",
                p.beds, beds, p.baths, baths, p.area_sqft, sqft
            ),
            destination: p.kind.route().path().to_string(),
        })
        .collect()
}

struct Agent {
    name: &'static str,
    specialty: &'static str,
    phone: &'static str,
    email: &'static str,
    deals: u32,
}

const AGENTS: [Agent; 2] = [
    Agent {
        name: "Ayman Sbeity",
        specialty: "Luxury Properties & Investment",
        phone: "+961 3 123 456",
        email: "ayman@realty.com",
        deals: 200,
    },
    Agent {
        name: "Richy",
        specialty: "Residential & Commercial Sales",
        phone: "+961 3 234 567",
        email: "richy@realty.com",
        deals: 180,
    },
];

/// A card in the agents block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCard {
    pub name: &'static str,
    /// First letter of each name part, for the avatar
    pub initials: String,
    pub specialty: &'static str,
    /// `"200+ Successful Deals"`
    pub deals: String,
    pub phone_href: String,
    pub email_href: String,
}

pub fn agent_cards(dict: &LocaleDictionary) -> Vec<AgentCard> {
    let deals = dict.text_or("pages.home.agents.deals", "Successful Deals");

    AGENTS
        .iter()
        .map(|a| AgentCard {
            name: a.name,
            initials: a
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect(),
            specialty: a.specialty,
            deals: format!("{}+ {}", a.deals, deals),
            phone_href: format!("tel:{}", a.phone.replace(' ', "")),
            email_href: format!("mailto:{}", a.email),
        })
        .collect()
}

struct Article {
    title: &'static str,
    excerpt: &'static str,
    date: &'static str,
    category: &'static str,
    read_minutes: u8,
}

const ARTICLES: [Article; 3] = [
    Article {
        title: "Lebanon Real Estate Market Trends 2025",
        excerpt: "Discover the latest trends shaping Lebanon's real estate market and what it means for buyers and investors...",
        date: "October 15, 2025",
        category: "Market Analysis",
        read_minutes: 5,
    },
    Article {
        title: "Top 10 Neighborhoods in Beirut for Families",
        excerpt: "Looking for a family-friendly neighborhood in Beirut? Here are our top picks with excellent schools and amenities...",
        date: "October 12, 2025",
        category: "Buying Guide",
        read_minutes: 7,
    },
    Article {
        title: "Investment Opportunities in Lebanese Coastal Cities",
        excerpt: "Explore lucrative investment opportunities in Jounieh, Byblos, and other coastal gems of Lebanon...",
        date: "October 8, 2025",
        category: "Investment",
        read_minutes: 6,
    },
];

/// A teaser in the news block, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTeaser {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    /// `"5 min read"`
    pub read_time: String,
}

pub fn article_teasers(dict: &LocaleDictionary) -> Vec<ArticleTeaser> {
    let min_read = dict.text_or("pages.home.news.minRead", "min read");

    ARTICLES
        .iter()
        .map(|a| ArticleTeaser {
            title: a.title,
            excerpt: a.excerpt,
            date: a.date,
            category: a.category,
            read_time: format!("{} {}", a.read_minutes, min_read),
        })
        .collect()
}
