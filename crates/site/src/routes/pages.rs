//! Static marketing page handlers: how it works, vendor pitch, contact,
//! and the 404 page.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ecobid_core::Price;
use tracing::instrument;

use crate::filters;

// =============================================================================
// Static Page Content
// =============================================================================

/// A titled blurb in a step or feature grid.
#[derive(Clone)]
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

/// A blurb with a leading icon.
#[derive(Clone)]
pub struct IconBlurb {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline statistic.
#[derive(Clone)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A ready-made product teaser on the how page.
#[derive(Clone)]
pub struct EcoProductTeaser {
    pub name: &'static str,
    pub description: &'static str,
    /// Preformatted price line, e.g. "Starting at ₹15".
    pub price: String,
}

fn get_how_steps() -> Vec<Blurb> {
    vec![
        Blurb {
            title: "Upload Your Home Photos",
            description: "Take photos of rooms you want to transform and upload them to our \
                          platform. Our secure system keeps your privacy protected.",
        },
        Blurb {
            title: "Browse Expert Vendors",
            description: "View portfolios of verified eco-friendly designers and contractors. \
                          Compare prices, reviews, and previous work to find your perfect match.",
        },
        Blurb {
            title: "Get Custom Proposals",
            description: "Receive personalized suggestions, detailed quotes, and timelines from \
                          multiple vendors. Choose the proposal that fits your vision and budget.",
        },
        Blurb {
            title: "Transform Your Space",
            description: "Work with your chosen vendor to create an eco-friendly, sustainable \
                          home that brings you closer to nature while reducing waste.",
        },
    ]
}

fn get_how_benefits() -> Vec<IconBlurb> {
    vec![
        IconBlurb {
            icon: "\u{1f33f}",
            title: "Connect with Nature",
            description: "Transform your home into a green sanctuary with plants, natural \
                          materials, and sustainable design elements.",
        },
        IconBlurb {
            icon: "\u{267b}\u{fe0f}",
            title: "Best Out of Waste",
            description: "Turn waste materials into beautiful, functional pieces. Our vendors \
                          specialize in upcycling and sustainable solutions.",
        },
        IconBlurb {
            icon: "\u{1f4b0}",
            title: "Best Prices Guaranteed",
            description: "Compare quotes from multiple vendors to ensure you get the best value \
                          for your eco-friendly home makeover.",
        },
        IconBlurb {
            icon: "\u{2705}",
            title: "Verified Professionals",
            description: "All our vendors are thoroughly vetted with portfolios, reviews, and \
                          certifications to ensure quality work.",
        },
    ]
}

fn get_vendor_highlights() -> Vec<Blurb> {
    vec![
        Blurb {
            title: "Browse Portfolios",
            description: "View detailed portfolios with before/after photos, specializations, \
                          and eco-credentials",
        },
        Blurb {
            title: "Compare Prices",
            description: "Get multiple quotes and choose the best value for your budget and \
                          vision",
        },
        Blurb {
            title: "Read Reviews",
            description: "Make informed decisions based on authentic reviews from previous \
                          clients",
        },
    ]
}

fn get_eco_products() -> Vec<EcoProductTeaser> {
    vec![
        EcoProductTeaser {
            name: "Upcycled Bottle Planters",
            description: "Beautiful plant pots made from recycled glass bottles",
            price: format!("Starting at {}", Price::rupees(15)),
        },
        EcoProductTeaser {
            name: "Reclaimed Wood Shelves",
            description: "Rustic floating shelves from sustainable wood sources",
            price: format!("Starting at {}", Price::rupees(45)),
        },
        EcoProductTeaser {
            name: "Eco-Friendly Wall Art",
            description: "Handcrafted art pieces made from recycled materials",
            price: format!("Starting at {}", Price::rupees(25)),
        },
        EcoProductTeaser {
            name: "Natural Fiber Rugs",
            description: "Sustainable rugs made from organic hemp and jute",
            price: format!("Starting at {}", Price::rupees(75)),
        },
    ]
}

fn get_impact_stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "2,500+",
            label: "Homes Transformed",
        },
        Stat {
            value: "85%",
            label: "Waste Reduction Average",
        },
        Stat {
            value: "4.9\u{2605}",
            label: "Customer Satisfaction",
        },
    ]
}

fn get_vendor_steps() -> Vec<Blurb> {
    vec![
        Blurb {
            title: "View Home Photos",
            description: "Browse submitted home photos from homeowners looking for design \
                          improvements and renovations.",
        },
        Blurb {
            title: "Analyze & Suggest",
            description: "Use your expertise to identify improvement opportunities and create \
                          tailored design suggestions.",
        },
        Blurb {
            title: "Provide Quotations",
            description: "Submit detailed quotes with cost breakdowns and project timelines \
                          for interested clients.",
        },
        Blurb {
            title: "Get Hired",
            description: "Connect directly with homeowners who approve your proposals and \
                          begin transforming their spaces.",
        },
    ]
}

fn get_portfolio_features() -> Vec<&'static str> {
    vec![
        "Upload before/after photos of your completed projects",
        "Add detailed project descriptions and specifications",
        "Showcase different room types and design styles",
        "Include client testimonials and reviews",
        "Display your professional certifications and credentials",
        "Highlight your specializations and expertise areas",
    ]
}

fn get_vendor_benefits() -> Vec<IconBlurb> {
    vec![
        IconBlurb {
            icon: "\u{1f465}",
            title: "Access to Quality Clients",
            description: "Connect with homeowners actively seeking professional design and \
                          renovation services.",
        },
        IconBlurb {
            icon: "\u{1f4c8}",
            title: "Grow Your Business",
            description: "Expand your client base and increase revenue through our trusted \
                          platform.",
        },
        IconBlurb {
            icon: "\u{2b50}",
            title: "Build Your Reputation",
            description: "Showcase your work and collect reviews to establish credibility in \
                          the market.",
        },
        IconBlurb {
            icon: "\u{1f512}",
            title: "Secure Transactions",
            description: "Work with confidence through our secure payment and project \
                          management system.",
        },
    ]
}

fn get_vendor_provides() -> Vec<Blurb> {
    vec![
        Blurb {
            title: "Design Analysis",
            description: "Review home photos and identify improvement opportunities",
        },
        Blurb {
            title: "Cost Estimates",
            description: "Provide detailed quotations with transparent pricing",
        },
        Blurb {
            title: "Project Timeline",
            description: "Offer realistic timelines for project completion",
        },
    ]
}

// =============================================================================
// Templates and Handlers
// =============================================================================

/// How it works page template.
#[derive(Template, WebTemplate)]
#[template(path = "how.html")]
pub struct HowTemplate {
    pub steps: Vec<Blurb>,
    pub benefits: Vec<IconBlurb>,
    pub vendor_highlights: Vec<Blurb>,
    pub eco_products: Vec<EcoProductTeaser>,
    pub stats: Vec<Stat>,
}

/// Vendor network page template.
#[derive(Template, WebTemplate)]
#[template(path = "vendors.html")]
pub struct VendorsTemplate {
    pub steps: Vec<Blurb>,
    pub portfolio_features: Vec<&'static str>,
    pub benefits: Vec<IconBlurb>,
    pub provides: Vec<Blurb>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Display the how it works page.
#[instrument]
pub async fn how() -> impl IntoResponse {
    HowTemplate {
        steps: get_how_steps(),
        benefits: get_how_benefits(),
        vendor_highlights: get_vendor_highlights(),
        eco_products: get_eco_products(),
        stats: get_impact_stats(),
    }
}

/// Display the vendor network page.
#[instrument]
pub async fn vendors() -> impl IntoResponse {
    VendorsTemplate {
        steps: get_vendor_steps(),
        portfolio_features: get_portfolio_features(),
        benefits: get_vendor_benefits(),
        provides: get_vendor_provides(),
    }
}

/// Display the contact page.
#[instrument]
pub async fn contact() -> impl IntoResponse {
    ContactTemplate
}

/// Fallback handler for unknown paths.
#[instrument]
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}
