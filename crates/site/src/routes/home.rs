//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use ecobid_core::Price;
use tracing::instrument;

use crate::filters;

// =============================================================================
// Static Page Content
// =============================================================================

/// A solution card in the "Imagine Your Dream Home" section.
#[derive(Clone)]
pub struct Solution {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A numbered step in the green makeover journey.
#[derive(Clone)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A ready-made product teaser in the quick wins section.
#[derive(Clone)]
pub struct QuickWin {
    pub title: &'static str,
    pub description: &'static str,
    /// Preformatted price line, e.g. "From ₹12".
    pub price: String,
    pub delivery: &'static str,
    pub image_path: &'static str,
}

/// A homeowner testimonial for the homepage.
#[derive(Clone)]
pub struct TestimonialView {
    pub name: &'static str,
    pub initials: &'static str,
    pub rating: u8,
    pub quote: &'static str,
    pub project: &'static str,
    pub image_path: &'static str,
}

fn get_problems() -> Vec<&'static str> {
    vec![
        "Your home feels disconnected from nature?",
        "Want to be eco-friendly but don't know where to start?",
        "Worried about high costs or overwhelming projects?",
        "Need expert advice that matches your style?",
    ]
}

fn get_solutions() -> Vec<Solution> {
    vec![
        Solution {
            icon: "\u{1f3a8}",
            title: "Personalized Eco-Designs",
            description: "Get ideas tailored just for your space, focusing on natural beauty \
                          and sustainability.",
        },
        Solution {
            icon: "\u{1f331}",
            title: "Bring Nature Indoors",
            description: "Discover effortless ways to infuse your home with plants, light, \
                          and natural materials.",
        },
        Solution {
            icon: "\u{1f4a1}",
            title: "Clever & Cost-Effective",
            description: "Explore budget-friendly solutions, including creative 'best out of \
                          waste' ideas.",
        },
    ]
}

fn get_process_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep {
            number: "01",
            title: "Share Your Space",
            description: "Upload a few photos of your room. Tell us your dreams\u{2014}more \
                          light, cozy nooks, green vibes!",
        },
        ProcessStep {
            number: "02",
            title: "Get Inspired Ideas & Quotes",
            description: "Connect with certified eco-designers. See their unique portfolios & \
                          receive personalized proposals with clear pricing.",
        },
        ProcessStep {
            number: "03",
            title: "Love Your New Home!",
            description: "Watch your vision bloom! Our team supports you every step until your \
                          home is your happy, sustainable sanctuary.",
        },
    ]
}

fn get_quick_wins() -> Vec<QuickWin> {
    vec![
        QuickWin {
            title: "Upcycled Bottle Planters",
            description: "Turn waste into beautiful plant homes instantly.",
            price: format!("From {}", Price::rupees(12)),
            delivery: "2-day delivery",
            image_path: "/static/img/products/bottles.svg",
        },
        QuickWin {
            title: "Reclaimed Wood Shelves",
            description: "Add rustic charm with sustainable, ready-to-hang shelves.",
            price: format!("From {}", Price::rupees(45)),
            delivery: "1-week delivery",
            image_path: "/static/img/products/woodshelf.svg",
        },
        QuickWin {
            title: "Eco-Friendly Wall Art Kits",
            description: "Craft unique pieces from recycled materials\u{2014}fun for all ages!",
            price: format!("From {}", Price::rupees(20)),
            delivery: "Next-day shipping",
            image_path: "/static/img/products/wallart.svg",
        },
    ]
}

fn get_testimonials() -> Vec<TestimonialView> {
    vec![
        TestimonialView {
            name: "Aisha S.",
            initials: "AS",
            rating: 5,
            quote: "I wanted a green home but felt overwhelmed. EcoBid connected me with a \
                    brilliant designer who used amazing upcycled ideas. My apartment feels \
                    like a breathable oasis now!",
            project: "Cozy Urban Oasis",
            image_path: "/static/img/homes/home1.svg",
        },
        TestimonialView {
            name: "Ben L.",
            initials: "BL",
            rating: 5,
            quote: "Getting quotes was so easy, and the prices were surprisingly affordable \
                    for eco-design. Our living room is transformed, and we love knowing it's \
                    sustainable.",
            project: "Modern Family Space",
            image_path: "/static/img/homes/home2.svg",
        },
        TestimonialView {
            name: "Chloe P.",
            initials: "CP",
            rating: 5,
            quote: "The ready-made plant pots from recycled bottles were a perfect quick win! \
                    They add so much character. Can't wait for my bigger project!",
            project: "Sunny Plant Corner",
            image_path: "/static/img/homes/home3.svg",
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub problems: Vec<&'static str>,
    pub solutions: Vec<Solution>,
    pub process_steps: Vec<ProcessStep>,
    pub quick_wins: Vec<QuickWin>,
    pub testimonials: Vec<TestimonialView>,
    /// Preformatted value of the free consultation, e.g. "₹150".
    pub consultation_value: String,
}

/// Display the home page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        problems: get_problems(),
        solutions: get_solutions(),
        process_steps: get_process_steps(),
        quick_wins: get_quick_wins(),
        testimonials: get_testimonials(),
        consultation_value: Price::rupees(150).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_win_prices_are_preformatted() {
        let wins = get_quick_wins();
        let prices: Vec<&str> = wins.iter().map(|w| w.price.as_str()).collect();
        assert_eq!(
            prices,
            vec!["From \u{20b9}12", "From \u{20b9}45", "From \u{20b9}20"]
        );
    }

    #[test]
    fn test_testimonial_initials_match_names() {
        for testimonial in get_testimonials() {
            let expected: String = testimonial
                .name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .collect();
            assert_eq!(testimonial.initials, expected);
        }
    }
}
