//! Seed data for the storefront catalog.

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};

const IMG_SERUM: &str = "https://images.pexels.com/photos/4041392/pexels-photo-4041392.jpeg";
const IMG_CLEANSER: &str = "https://images.pexels.com/photos/3762879/pexels-photo-3762879.jpeg";
const IMG_TREATMENT: &str = "https://images.pexels.com/photos/4465124/pexels-photo-4465124.jpeg";
const IMG_CREAM: &str = "https://images.pexels.com/photos/4465831/pexels-photo-4465831.jpeg";
const IMG_DROPPER: &str = "https://images.pexels.com/photos/3762453/pexels-photo-3762453.jpeg";

fn usd(amount: i64) -> Money {
    Money::from_whole(amount, Currency::USD)
}

/// Single products sold on the product grid and matched by search.
pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Vitamin C Brightening Serum",
            Category::Serums,
            usd(89),
            IMG_SERUM,
            "Powerful antioxidant serum for radiant, youthful skin",
        )
        .with_original_price(usd(110))
        .with_rating(4.9, 234)
        .new_arrival(),
        Product::new(
            2,
            "Hydrating Gentle Cleanser",
            Category::Cleansers,
            usd(45),
            IMG_CLEANSER,
            "Gentle foam cleanser that removes impurities without stripping",
        )
        .with_rating(4.8, 189),
        Product::new(
            3,
            "Retinol Night Treatment",
            Category::Treatments,
            usd(125),
            IMG_TREATMENT,
            "Advanced retinol formula for smooth, renewed skin",
        )
        .with_original_price(usd(150))
        .with_rating(4.9, 156)
        .bestseller(),
        Product::new(
            4,
            "Daily Moisture Barrier Cream",
            Category::Moisturizers,
            usd(75),
            IMG_CREAM,
            "Rich, nourishing cream that locks in moisture all day",
        )
        .with_rating(4.7, 298),
        Product::new(
            5,
            "Peptide Eye Renewal Complex",
            Category::Treatments,
            usd(95),
            IMG_SERUM,
            "Targeted treatment for fine lines and dark circles",
        )
        .with_rating(4.8, 167),
        Product::new(
            6,
            "Hyaluronic Acid Booster",
            Category::Serums,
            usd(65),
            IMG_DROPPER,
            "Intense hydration serum for plump, dewy skin",
        )
        .with_rating(4.9, 312)
        .new_arrival(),
        Product::new(
            7,
            "Exfoliating AHA Toner",
            Category::Treatments,
            usd(55),
            IMG_TREATMENT,
            "Gentle exfoliating toner for smoother, brighter skin",
        )
        .with_rating(4.6, 203),
        Product::new(
            8,
            "Niacinamide Pore Refining Serum",
            Category::Serums,
            usd(72),
            IMG_SERUM,
            "Minimizes pores and controls oil production",
        )
        .with_rating(4.7, 189),
        Product::new(
            9,
            "Ceramide Repair Moisturizer",
            Category::Moisturizers,
            usd(85),
            IMG_CREAM,
            "Restores skin barrier with essential ceramides",
        )
        .with_rating(4.8, 245),
        Product::new(
            10,
            "Gentle Micellar Water",
            Category::Cleansers,
            usd(35),
            IMG_CLEANSER,
            "Effortless makeup removal without harsh rubbing",
        )
        .with_rating(4.5, 156),
    ]
}

/// Bundles listed on the gift sets page.
pub(crate) fn gift_sets() -> Vec<Product> {
    vec![
        Product::new(
            101,
            "Complete Skincare Routine Set",
            Category::GiftSets,
            usd(199),
            IMG_TREATMENT,
            "Everything you need for a complete skincare routine",
        )
        .with_original_price(usd(250))
        .with_rating(4.9, 156)
        .with_includes(["Cleanser", "Serum", "Moisturizer", "Eye Cream"])
        .bestseller(),
        Product::new(
            102,
            "Anti-Aging Luxury Collection",
            Category::GiftSets,
            usd(299),
            IMG_SERUM,
            "Premium anti-aging products for mature skin",
        )
        .with_original_price(usd(380))
        .with_rating(4.8, 203)
        .with_includes(["Retinol Serum", "Peptide Cream", "Eye Treatment", "Night Mask"])
        .new_arrival(),
        Product::new(
            103,
            "Hydration Essentials Kit",
            Category::GiftSets,
            usd(149),
            IMG_CLEANSER,
            "Perfect for dry and dehydrated skin",
        )
        .with_original_price(usd(185))
        .with_rating(4.7, 189)
        .with_includes(["Hydrating Cleanser", "Hyaluronic Serum", "Moisture Cream"]),
        Product::new(
            104,
            "Brightening & Glow Set",
            Category::GiftSets,
            usd(179),
            IMG_CREAM,
            "Achieve radiant, glowing skin",
        )
        .with_original_price(usd(220))
        .with_rating(4.9, 167)
        .with_includes(["Vitamin C Serum", "Brightening Mask", "Glow Moisturizer", "Exfoliant"]),
        Product::new(
            105,
            "Travel Skincare Essentials",
            Category::GiftSets,
            usd(89),
            IMG_DROPPER,
            "Perfect travel-sized skincare essentials",
        )
        .with_original_price(usd(110))
        .with_rating(4.6, 134)
        .with_includes(["Mini Cleanser", "Mini Serum", "Mini Moisturizer", "Travel Bag"]),
        Product::new(
            106,
            "Sensitive Skin Care Bundle",
            Category::GiftSets,
            usd(169),
            IMG_SERUM,
            "Gentle products for sensitive skin",
        )
        .with_original_price(usd(205))
        .with_rating(4.8, 145)
        .with_includes(["Gentle Cleanser", "Calming Serum", "Barrier Cream", "Soothing Mask"]),
    ]
}
