//! Static marketing copy for the landing sections.

use glow_core::Page;
use serde::{Deserialize, Serialize};

/// A headline number with its caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub subheadline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub background_image: String,
    pub stats: Vec<Stat>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            badge: "Award-Winning Skincare Collection".to_string(),
            headline: "Discover Your".to_string(),
            headline_accent: "Perfect Skin".to_string(),
            subheadline: "Transform your skincare routine with our scientifically-proven, \
                          premium products designed for radiant, healthy skin."
                .to_string(),
            primary_cta: "Shop Collection".to_string(),
            secondary_cta: "Learn More".to_string(),
            background_image: "https://images.pexels.com/photos/3762800/pexels-photo-3762800.jpeg"
                .to_string(),
            stats: vec![
                Stat::new("98%", "Customer Satisfaction"),
                Stat::new("50K+", "Happy Customers"),
                Stat::new("15+", "Awards Won"),
            ],
        }
    }
}

/// A feature block with an icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// About section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub title_accent: String,
    pub intro: String,
    pub story_title: String,
    pub story: Vec<String>,
    pub founder: String,
    pub founder_role: String,
    pub highlight: Stat,
    pub features: Vec<Feature>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "Science Meets".to_string(),
            title_accent: "Nature".to_string(),
            intro: "Our revolutionary skincare line combines cutting-edge scientific research \
                    with the purest natural ingredients to deliver exceptional results."
                .to_string(),
            story_title: "15 Years of Innovation".to_string(),
            story: vec![
                "Founded by renowned dermatologist Dr. Sarah Chen, our brand represents \
                 a commitment to transforming skincare through innovative formulations."
                    .to_string(),
                "Every product is meticulously crafted in our FDA-approved facilities, \
                 ensuring the highest standards of quality and safety for your skin."
                    .to_string(),
            ],
            founder: "Dr. Sarah Chen".to_string(),
            founder_role: "Founder & Chief Scientist".to_string(),
            highlight: Stat::new("50K+", "Products Sold"),
            features: vec![
                Feature::new(
                    "🌿",
                    "Natural Ingredients",
                    "Pure, organic ingredients sourced from sustainable farms worldwide.",
                ),
                Feature::new(
                    "🏆",
                    "Dermatologist Tested",
                    "Clinically tested and approved by leading skincare professionals.",
                ),
                Feature::new(
                    "💗",
                    "Cruelty-Free",
                    "Never tested on animals. Committed to ethical beauty practices.",
                ),
                Feature::new(
                    "🛡",
                    "Safe Formula",
                    "Hypoallergenic formulas suitable for all skin types and ages.",
                ),
            ],
        }
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    pub product: String,
    pub rating: u8,
}

impl Testimonial {
    pub fn new(quote: &str, name: &str, title: &str, product: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author_name: name.to_string(),
            author_title: title.to_string(),
            product: product.to_string(),
            rating: 5,
        }
    }

    /// Initials shown in place of an avatar.
    pub fn initials(&self) -> String {
        self.author_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Reviews section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub title: String,
    pub subtitle: String,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            title: "What Our Customers Say".to_string(),
            subtitle: "Real results from real people who trust our skincare".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "This skincare line has completely transformed my skin! The Vitamin C serum \
                     is now a staple in my daily routine. My skin has never looked more radiant.",
                    "Sarah Johnson",
                    "Beauty Influencer",
                    "Vitamin C Brightening Serum",
                ),
                Testimonial::new(
                    "As a dermatologist, I recommend these products to my patients. The \
                     formulations are scientifically sound and deliver exceptional results.",
                    "Emma Chen",
                    "Dermatologist",
                    "Retinol Night Treatment",
                ),
                Testimonial::new(
                    "After struggling with dry skin for years, this moisturizer has been a \
                     game-changer. My skin feels hydrated and looks healthy all day long.",
                    "Maya Patel",
                    "Skincare Enthusiast",
                    "Daily Moisture Barrier Cream",
                ),
            ],
            stats: vec![
                Stat::new("98%", "Customer Satisfaction"),
                Stat::new("4.9", "Average Rating"),
                Stat::new("10K+", "5-Star Reviews"),
                Stat::new("50K+", "Happy Customers"),
            ],
        }
    }
}

/// Newsletter section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterContent {
    pub badge: String,
    pub title: String,
    pub title_accent: String,
    pub subtitle: String,
    pub benefits: Vec<Feature>,
    pub placeholder: String,
    pub button: String,
    pub disclaimer: String,
    pub success_title: String,
    pub success_message: String,
    pub social_proof: String,
}

impl Default for NewsletterContent {
    fn default() -> Self {
        Self {
            badge: "Exclusive Offers Inside".to_string(),
            title: "Join Our Beauty".to_string(),
            title_accent: "Community".to_string(),
            subtitle: "Get early access to new products, exclusive discounts, \
                       and expert skincare tips delivered to your inbox."
                .to_string(),
            benefits: vec![
                Feature::new(
                    "✉",
                    "Exclusive Content",
                    "Expert skincare tips and tutorials from our dermatologists",
                ),
                Feature::new(
                    "🎁",
                    "Special Offers",
                    "Up to 25% off on new launches and member-only discounts",
                ),
                Feature::new(
                    "✨",
                    "Early Access",
                    "Be the first to try our newest products before anyone else",
                ),
            ],
            placeholder: "Enter your email address".to_string(),
            button: "Subscribe Now".to_string(),
            disclaimer: "By subscribing, you agree to our Privacy Policy and Terms of Service. \
                         Unsubscribe at any time."
                .to_string(),
            success_title: "Welcome to Our Community!".to_string(),
            success_message:
                "Thank you for subscribing. Check your inbox for a special welcome offer!"
                    .to_string(),
            social_proof: "Join over 25,000+ beauty enthusiasts".to_string(),
        }
    }
}

/// Contact page copy. Address and phone come from the store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub hours: Vec<String>,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            title: "Get in Touch".to_string(),
            subtitle: "Questions about your routine or an order? Our skincare specialists \
                       are happy to help."
                .to_string(),
            hours: vec![
                "Monday - Friday: 9am - 6pm".to_string(),
                "Saturday: 10am - 4pm".to_string(),
                "Sunday: Closed".to_string(),
            ],
        }
    }
}

/// A footer link. Links with a page navigate; the rest are decorative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub page: Option<Page>,
}

impl FooterLink {
    pub fn to(label: &str, page: Page) -> Self {
        Self {
            label: label.to_string(),
            page: Some(page),
        }
    }

    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            page: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

impl FooterColumn {
    pub fn new(title: &str, links: Vec<FooterLink>) -> Self {
        Self {
            title: title.to_string(),
            links,
        }
    }
}

/// Footer content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            tagline: "Premium skincare products crafted with science and nature for \
                      radiant, healthy skin."
                .to_string(),
            columns: vec![
                FooterColumn::new(
                    "Shop",
                    vec![
                        FooterLink::to("All Products", Page::Products),
                        FooterLink::to("Gift Sets", Page::GiftSets),
                        FooterLink::text("New Arrivals"),
                        FooterLink::text("Bestsellers"),
                    ],
                ),
                FooterColumn::new(
                    "Company",
                    vec![
                        FooterLink::to("About Us", Page::About),
                        FooterLink::to("Reviews", Page::Reviews),
                        FooterLink::text("Careers"),
                        FooterLink::text("Press"),
                    ],
                ),
                FooterColumn::new(
                    "Support",
                    vec![
                        FooterLink::to("Contact Us", Page::Contact),
                        FooterLink::text("Shipping Info"),
                        FooterLink::text("Returns"),
                        FooterLink::text("FAQ"),
                    ],
                ),
                FooterColumn::new(
                    "Legal",
                    vec![
                        FooterLink::text("Privacy Policy"),
                        FooterLink::text("Terms of Service"),
                        FooterLink::text("Cookie Policy"),
                    ],
                ),
            ],
            copyright: "© 2024 SKINCARE. All rights reserved.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_stats() {
        let hero = HeroContent::default();
        assert_eq!(hero.stats.len(), 3);
        assert_eq!(hero.primary_cta, "Shop Collection");
        assert_eq!(hero.secondary_cta, "Learn More");
    }

    #[test]
    fn test_about_has_four_features() {
        let titles: Vec<_> = AboutContent::default()
            .features
            .into_iter()
            .map(|f| f.title)
            .collect();
        assert_eq!(
            titles,
            ["Natural Ingredients", "Dermatologist Tested", "Cruelty-Free", "Safe Formula"]
        );
    }

    #[test]
    fn test_testimonial_initials() {
        let content = TestimonialsContent::default();
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.testimonials[0].initials(), "SJ");
    }

    #[test]
    fn test_footer_links_navigate() {
        let footer = FooterContent::default();
        let titles: Vec<_> = footer.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Shop", "Company", "Support", "Legal"]);

        let pages: Vec<Page> = footer
            .columns
            .iter()
            .flat_map(|c| c.links.iter())
            .filter_map(|l| l.page)
            .collect();
        assert!(pages.contains(&Page::Contact));
        assert!(!pages.contains(&Page::Search));
    }

    #[test]
    fn test_content_serializes() {
        let json = serde_json::to_value(FooterContent::default()).unwrap();
        assert_eq!(json["columns"][0]["links"][0]["page"], "products");
    }
}
