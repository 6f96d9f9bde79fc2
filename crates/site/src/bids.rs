//! Designer quotations produced by the matchmaker.
//!
//! The designer roster is fixed. Every matched project receives the same
//! three quotations, returned sorted by price so the cheapest bid leads
//! the comparison page.

use ecobid_core::{PortfolioItemId, Price, QuotationId, VendorId};

use crate::models::quote::{PortfolioItem, Quotation};

/// Build the quotation list for a matched project, cheapest first.
#[must_use]
pub fn generate() -> Vec<Quotation> {
    let mut quotations = vec![
        Quotation {
            id: QuotationId::new("1"),
            vendor_id: VendorId::new("vendor1"),
            vendor_name: "Green Spaces Design".to_string(),
            vendor_rating: 4.8,
            price: Price::rupees(25_000),
            timeline: "2-3 weeks".to_string(),
            description: "Complete eco-friendly makeover with sustainable materials and \
                          indoor plants. We'll transform your space into a green oasis."
                .to_string(),
            materials: vec![
                "Bamboo furniture".to_string(),
                "Recycled wood".to_string(),
                "Indoor plants".to_string(),
                "Natural fiber rugs".to_string(),
            ],
            portfolio: vec![
                PortfolioItem {
                    id: PortfolioItemId::new("1"),
                    title: "Urban Jungle Living Room".to_string(),
                    image_path: "/static/img/portfolio/portfolio1.svg".to_string(),
                    description: "Transformed a boring living room into a plant paradise"
                        .to_string(),
                },
                PortfolioItem {
                    id: PortfolioItemId::new("2"),
                    title: "Sustainable Bedroom".to_string(),
                    image_path: "/static/img/portfolio/portfolio2.svg".to_string(),
                    description: "Eco-friendly bedroom with reclaimed wood".to_string(),
                },
            ],
            experience_years: 5,
            completed_projects: 127,
        },
        Quotation {
            id: QuotationId::new("2"),
            vendor_id: VendorId::new("vendor2"),
            vendor_name: "EcoHome Experts".to_string(),
            vendor_rating: 4.6,
            price: Price::rupees(18_000),
            timeline: "1-2 weeks".to_string(),
            description: "Budget-friendly eco solutions using upcycled materials and DIY \
                          elements you can be proud of."
                .to_string(),
            materials: vec![
                "Upcycled furniture".to_string(),
                "Bottle planters".to_string(),
                "Cork boards".to_string(),
                "LED grow lights".to_string(),
            ],
            portfolio: vec![
                PortfolioItem {
                    id: PortfolioItemId::new("1"),
                    title: "Upcycled Kitchen".to_string(),
                    image_path: "/static/img/portfolio/portfolio3.svg".to_string(),
                    description: "Kitchen makeover using recycled materials".to_string(),
                },
                PortfolioItem {
                    id: PortfolioItemId::new("2"),
                    title: "DIY Plant Wall".to_string(),
                    image_path: "/static/img/portfolio/portfolio4.svg".to_string(),
                    description: "Stunning vertical garden from waste materials".to_string(),
                },
            ],
            experience_years: 3,
            completed_projects: 89,
        },
        Quotation {
            id: QuotationId::new("3"),
            vendor_id: VendorId::new("vendor3"),
            vendor_name: "Nature's Touch Interiors".to_string(),
            vendor_rating: 4.9,
            price: Price::rupees(35_000),
            timeline: "3-4 weeks".to_string(),
            description: "Premium eco-luxury design with high-end sustainable materials and \
                          smart home integration."
                .to_string(),
            materials: vec![
                "Premium bamboo".to_string(),
                "Smart plant systems".to_string(),
                "Natural stone".to_string(),
                "Organic cotton".to_string(),
            ],
            portfolio: vec![
                PortfolioItem {
                    id: PortfolioItemId::new("1"),
                    title: "Luxury Eco Suite".to_string(),
                    image_path: "/static/img/portfolio/portfolio5.svg".to_string(),
                    description: "High-end sustainable bedroom design".to_string(),
                },
                PortfolioItem {
                    id: PortfolioItemId::new("2"),
                    title: "Smart Green Living".to_string(),
                    image_path: "/static/img/portfolio/portfolio6.svg".to_string(),
                    description: "Living room with automated plant care".to_string(),
                },
            ],
            experience_years: 8,
            completed_projects: 203,
        },
    ];

    quotations.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
    quotations
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sorts_cheapest_first() {
        let quotations = generate();
        let names: Vec<&str> = quotations.iter().map(|q| q.vendor_name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "EcoHome Experts",
                "Green Spaces Design",
                "Nature's Touch Interiors"
            ]
        );
    }

    #[test]
    fn test_every_quotation_has_portfolio_entries() {
        for quotation in generate() {
            assert_eq!(quotation.portfolio.len(), 2, "{}", quotation.vendor_name);
            assert!(!quotation.materials.is_empty());
        }
    }

    #[test]
    fn test_cheapest_bid_price() {
        let quotations = generate();
        let cheapest = quotations.first().unwrap();
        assert_eq!(cheapest.price.to_string(), "\u{20b9}18,000");
    }
}
