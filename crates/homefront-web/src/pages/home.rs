//! Landing page: hero search, stats, locations

use homefront_core::content::{
    agent_cards, article_teasers, location_cards, property_cards, site_stats, City, ListingKind,
    ListingSearch, PriceRange, PropertyType,
};
use homefront_core::Route;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::AdSlot;
use crate::providers::use_locale;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <Hero />
            <AdSlot index=0 />
            <Stats />
            <FeaturedProperties />
            <Locations />
            <Agents />
            <News />
            <AdSlot index=1 />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let locale = use_locale();
    let search = RwSignal::new(ListingSearch::default());
    let any = move || locale.text("pages.home.hero.any", "Any");

    view! {
        <section class="hero">
            <h1 class="hero-title">
                {move || locale.text("pages.home.hero.title", "Find Your Place in Lebanon")}
            </h1>
            <p class="hero-subtitle">{move || locale.text("pages.home.hero.subtitle", "")}</p>

            <div class="hero-search">
                <p class="hero-search-label">
                    {move || locale.text("pages.home.hero.searchStartLabel", "Start your search")}
                </p>
                <div class="hero-search-fields">
                    <label class="field">
                        <span>{move || locale.text("pages.home.hero.location", "Location")}</span>
                        <select
                            class="filter-select"
                            on:change=move |e| {
                                let city = City::from_slug(&event_target_value(&e));
                                search.update(|s| s.city = city);
                            }
                        >
                            <option value="">{any}</option>
                            {move || {
                                let dict = locale.dictionary();
                                City::SEARCHABLE
                                    .iter()
                                    .map(|city| view! { <option value=city.slug()>{city.name(dict)}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>

                    <label class="field">
                        <span>
                            {move || locale.text("pages.home.featured.propertyType", "Property Type")}
                        </span>
                        <select
                            class="filter-select"
                            on:change=move |e| {
                                let kind = PropertyType::from_slug(&event_target_value(&e));
                                search.update(|s| s.property_type = kind);
                            }
                        >
                            <option value="">{any}</option>
                            {PropertyType::ALL
                                .iter()
                                .map(|kind| view! { <option value=kind.slug()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="field">
                        <span>{move || locale.text("pages.home.hero.priceRange", "Price Range")}</span>
                        <select
                            class="filter-select"
                            on:change=move |e| {
                                let price = PriceRange::from_slug(&event_target_value(&e));
                                search.update(|s| s.price_range = price);
                            }
                        >
                            <option value="">{any}</option>
                            {PriceRange::ALL
                                .iter()
                                .map(|price| view! { <option value=price.slug()>{price.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <A href=move || search.with(ListingSearch::to_url) attr:class="btn btn-emphasized">
                        {move || locale.text("pages.common.searchProperties", "Search Properties")}
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="stats">
            {move || {
                site_stats(locale.dictionary())
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-value">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn Locations() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="locations">
            <h2>{move || locale.text("pages.home.locations.title", "Explore by Location")}</h2>
            <p class="section-subtitle">{move || locale.text("pages.home.locations.subtitle", "")}</p>
            <div class="location-grid">
                {move || {
                    let properties = locale.text("pages.home.locations.properties", "properties");
                    location_cards(locale.dictionary())
                        .into_iter()
                        .map(|card| {
                            let count = format!("{} {}", card.listings, properties);
                            view! {
                                <A href=card.destination attr:class="location-card">
                                    <span class="location-icon" aria-hidden="true">{card.icon}</span>
                                    <span class="location-name">{card.name}</span>
                                    <span class="location-count">{count}</span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn FeaturedProperties() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="featured">
            <h2>{move || locale.text("pages.home.featured.title", "Featured Properties")}</h2>
            <p class="section-subtitle">{move || locale.text("pages.home.featured.subtitle", "")}</p>
            <div class="card-grid">
                {move || {
                    property_cards(locale.dictionary())
                        .into_iter()
                        .map(|card| {
                            view! {
                                <A href=card.destination attr:class="property-card">
                                    <span
                                        class="property-badge"
                                        class:property-badge-rent={card.kind == ListingKind::Rent}
                                    >
                                        {card.badge}
                                    </span>
                                    <h3 class="property-title">{card.title}</h3>
                                    <p class="property-location">{card.location}</p>
                                    <p class="property-price">{card.price}</p>
                                    <p class="property-facts">{card.facts}</p>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="section-actions">
                <A href=Route::BuyListings.path() attr:class="btn btn-subdued">
                    {move || locale.text("pages.home.featured.viewAll", "View All Properties")}
                </A>
            </div>
        </section>
    }
}

#[component]
fn Agents() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="agents">
            <h2>{move || locale.text("pages.home.agents.title", "Meet Our Agents")}</h2>
            <p class="section-subtitle">{move || locale.text("pages.home.agents.subtitle", "")}</p>
            <div class="card-grid">
                {move || {
                    let view_profile = locale.text("pages.home.agents.viewProfile", "View Profile");
                    agent_cards(locale.dictionary())
                        .into_iter()
                        .map(|card| {
                            let view_profile = view_profile.clone();
                            view! {
                                <div class="agent-card">
                                    <span class="agent-avatar" aria-hidden="true">{card.initials}</span>
                                    <h3 class="agent-name">{card.name}</h3>
                                    <p class="agent-specialty">{card.specialty}</p>
                                    <p class="agent-deals">{card.deals}</p>
                                    <div class="agent-contact">
                                        <a href=card.phone_href aria-label="Phone">"☎"</a>
                                        <a href=card.email_href aria-label="Email">"✉"</a>
                                    </div>
                                    <A href=Route::About.path() attr:class="btn btn-subdued btn-block">
                                        {view_profile.clone()}
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="section-actions">
                <A href=Route::About.path() attr:class="btn btn-subdued">
                    {move || locale.text("pages.home.agents.viewAll", "Meet All Our Agents")}
                </A>
            </div>
        </section>
    }
}

#[component]
fn News() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="news">
            <h2>{move || locale.text("pages.home.news.title", "Latest News & Insights")}</h2>
            <p class="section-subtitle">{move || locale.text("pages.home.news.subtitle", "")}</p>
            <div class="card-grid">
                {move || {
                    let read_more = locale.text("pages.home.news.readMore", "Read More");
                    article_teasers(locale.dictionary())
                        .into_iter()
                        .map(|teaser| {
                            view! {
                                <article class="article-card">
                                    <span class="article-category">{teaser.category}</span>
                                    <h3 class="article-title">{teaser.title}</h3>
                                    <p class="article-excerpt">{teaser.excerpt}</p>
                                    <p class="article-meta">{teaser.date} " · " {teaser.read_time}</p>
                                    <span class="article-more">{read_more.clone()} " →"</span>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
