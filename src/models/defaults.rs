//! Built-in fallback datasets, used whenever the corresponding JSON override
//! file is absent or unparseable.

use super::{MenuData, MenuItem, MenuSection, ReviewInsights};
use std::collections::BTreeMap;

fn item(name: &str, description: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        ..MenuItem::default()
    }
}

pub fn menu() -> MenuData {
    let mut sections = BTreeMap::new();

    sections.insert(
        "specialties".to_string(),
        MenuSection {
            name: "Our Specialties".to_string(),
            description: "Signature dishes that define Zaika BBQ Grill".to_string(),
            items: vec![
                item(
                    "Goat Paya",
                    "Traditional slow-cooked goat trotters in a rich, spiced broth. A delicacy for special occasions.",
                ),
                item(
                    "Beef Seekh Kabab",
                    "Juicy, spiced ground beef skewers grilled to perfection in the tandoor.",
                ),
                item(
                    "Daal Makhni",
                    "Slow-simmered black lentils and kidney beans in rich, creamy tomato curry - a vegetarian masterpiece.",
                ),
                item(
                    "Chicken Kabab Roll",
                    "Tender chicken kabab wrapped in fresh naan with house sauces.",
                ),
                item(
                    "Lamb Chops",
                    "Sizzling lamb chops marinated in Zaika's signature spices and grilled to perfection.",
                ),
            ],
        },
    );

    sections.insert(
        "signature_bestsellers".to_string(),
        MenuSection {
            name: "Signature Bestsellers".to_string(),
            description: "Our most beloved dishes that define the Zaika experience".to_string(),
            items: vec![
                MenuItem {
                    name: "Zaika's Chicken Mix Grill".to_string(),
                    price: Some("$19.95".to_string()),
                    description: "Our crown jewel: Six distinct BBQ preparations on one platter - achari boti, malai boti, tikka boti, seekh kabab, bihari, and hariyali boti".to_string(),
                    calories: Some(650),
                    spice_level: Some("medium".to_string()),
                    dietary: vec![
                        "halal".to_string(),
                        "protein-rich".to_string(),
                        "keto-friendly".to_string(),
                    ],
                    prep_time: Some("25 min".to_string()),
                    instagram_mentions: Some(847),
                    customer_sentiment: Some(
                        "Most Instagrammed dish - guests love the variety and presentation"
                            .to_string(),
                    ),
                    pairing_suggestion: Some(
                        "Pairs beautifully with our cooling Mint Lassi and Garlic Naan".to_string(),
                    ),
                    ..MenuItem::default()
                },
                MenuItem {
                    name: "Chicken Biryani".to_string(),
                    price: Some("$12.60".to_string()),
                    description: "Aromatic basmati rice layered with tender marinated chicken, slow-cooked with traditional spices".to_string(),
                    calories: Some(580),
                    spice_level: Some("medium".to_string()),
                    dietary: vec!["halal".to_string()],
                    prep_time: Some("30 min".to_string()),
                    instagram_mentions: Some(623),
                    customer_sentiment: Some(
                        "Comfort food favorite - reminds guests of home cooking".to_string(),
                    ),
                    pairing_suggestion: Some(
                        "Complete meal on its own, enhanced with cooling Raita".to_string(),
                    ),
                    ..MenuItem::default()
                },
                MenuItem {
                    name: "Dal Makhni".to_string(),
                    price: Some("$12.60".to_string()),
                    description: "Slow-simmered black lentils and kidney beans in rich, creamy tomato curry - a vegetarian masterpiece".to_string(),
                    calories: Some(320),
                    spice_level: Some("mild".to_string()),
                    dietary: vec!["vegetarian".to_string(), "protein-rich".to_string()],
                    prep_time: Some("20 min".to_string()),
                    instagram_mentions: Some(412),
                    customer_sentiment: Some(
                        "Converts even the most devoted meat-lovers".to_string(),
                    ),
                    pairing_suggestion: Some(
                        "Essential with fresh Butter Naan for the authentic experience".to_string(),
                    ),
                    ..MenuItem::default()
                },
            ],
        },
    );

    sections.insert(
        "clay_oven_bbq".to_string(),
        MenuSection {
            name: "Clay Oven BBQ Specialties".to_string(),
            description: "Authentic tandoor cooking at 900°F for that distinctive smoky char"
                .to_string(),
            items: vec![
                MenuItem {
                    name: "Chicken Malai Boti".to_string(),
                    price: Some("$15.75".to_string()),
                    description: "Cream-marinated chicken breast cubes, mild and luxuriously tender".to_string(),
                    calories: Some(380),
                    spice_level: Some("mild".to_string()),
                    dietary: vec![
                        "halal".to_string(),
                        "protein-rich".to_string(),
                        "keto-friendly".to_string(),
                    ],
                    prep_time: Some("20 min".to_string()),
                    customer_sentiment: Some(
                        "Perfect for spice-sensitive palates and children".to_string(),
                    ),
                    cultural_note: Some(
                        "Malai means cream in Hindi - this dish showcases the gentle side of Pakistani cuisine".to_string(),
                    ),
                    ..MenuItem::default()
                },
                MenuItem {
                    name: "Chicken Tikka Boti".to_string(),
                    price: Some("$15.75".to_string()),
                    description: "Bold, aromatic chicken breast cubes with traditional red spice marinade".to_string(),
                    calories: Some(350),
                    spice_level: Some("medium".to_string()),
                    dietary: vec![
                        "halal".to_string(),
                        "protein-rich".to_string(),
                        "keto-friendly".to_string(),
                    ],
                    prep_time: Some("20 min".to_string()),
                    customer_sentiment: Some(
                        "The classic that represents authentic Pakistani flavors".to_string(),
                    ),
                    cultural_note: Some(
                        "Tikka refers to pieces or chunks - this is the dish that made Pakistani cuisine famous worldwide".to_string(),
                    ),
                    ..MenuItem::default()
                },
            ],
        },
    );

    sections.insert(
        "comfort_curries".to_string(),
        MenuSection {
            name: "Comfort Curries".to_string(),
            description: "Soul-warming dishes that embody Pakistani hospitality".to_string(),
            items: vec![
                MenuItem {
                    name: "Palak Paneer".to_string(),
                    price: Some("$12.60".to_string()),
                    description: "Fresh spinach curry with soft paneer cubes - nutrition meets indulgence".to_string(),
                    calories: Some(290),
                    spice_level: Some("mild-medium".to_string()),
                    dietary: vec!["vegetarian".to_string(), "iron-rich".to_string()],
                    prep_time: Some("18 min".to_string()),
                    health_benefits: Some(
                        "Rich in iron, folate, and plant-based protein".to_string(),
                    ),
                    customer_sentiment: Some(
                        "Parents love it - kids actually eat their greens!".to_string(),
                    ),
                    ..MenuItem::default()
                },
                MenuItem {
                    name: "Lahori Channa".to_string(),
                    price: Some("$12.60".to_string()),
                    description: "Chickpeas in robust tomato-onion gravy with warming Lahori spices".to_string(),
                    calories: Some(250),
                    spice_level: Some("medium".to_string()),
                    dietary: vec![
                        "vegetarian".to_string(),
                        "vegan".to_string(),
                        "protein-rich".to_string(),
                        "fiber-rich".to_string(),
                    ],
                    prep_time: Some("15 min".to_string()),
                    cultural_note: Some(
                        "Named after Lahore, the cultural heart of Punjab - a street food classic".to_string(),
                    ),
                    health_benefits: Some(
                        "High fiber, plant protein, supports digestive health".to_string(),
                    ),
                    ..MenuItem::default()
                },
            ],
        },
    );

    sections.insert(
        "beverages".to_string(),
        MenuSection {
            name: "Traditional Beverages".to_string(),
            description: "Refreshing drinks that complement our bold flavors".to_string(),
            items: vec![
                MenuItem {
                    name: "Mango Lassi".to_string(),
                    price: Some("$5.25".to_string()),
                    description: "Creamy yogurt drink blended with sweet mango - our Instagram star".to_string(),
                    calories: Some(180),
                    spice_level: Some("none".to_string()),
                    dietary: vec![
                        "vegetarian".to_string(),
                        "probiotic".to_string(),
                        "vitamin-c".to_string(),
                    ],
                    prep_time: Some("5 min".to_string()),
                    customer_sentiment: Some(
                        "Perfect spice antidote and photo opportunity".to_string(),
                    ),
                    health_benefits: Some(
                        "Probiotics for gut health, natural cooling effect".to_string(),
                    ),
                    ..MenuItem::default()
                },
                MenuItem {
                    name: "Kashmiri Chai".to_string(),
                    price: Some("$4.20".to_string()),
                    description: "Pink tea from the Kashmir valley - delicate, aromatic, and Instagram-worthy".to_string(),
                    calories: Some(80),
                    spice_level: Some("none".to_string()),
                    dietary: vec!["vegetarian".to_string(), "antioxidants".to_string()],
                    prep_time: Some("8 min".to_string()),
                    cultural_note: Some(
                        "Also called Pink Tea - a traditional welcome drink in Kashmiri homes".to_string(),
                    ),
                    ..MenuItem::default()
                },
            ],
        },
    );

    MenuData { sections }
}

pub fn review_insights() -> ReviewInsights {
    ReviewInsights {
        top_praise: vec![
            "Authentic flavors that transport you to Pakistan".to_string(),
            "Generous portions that easily feed 2-3 people".to_string(),
            "Clay oven cooking creates amazing smoky flavors".to_string(),
            "Staff genuinely cares about dietary restrictions".to_string(),
            "Best Pakistani food in Edison/Central NJ area".to_string(),
        ],
        trending_compliments: vec![
            "Instagram-worthy presentation".to_string(),
            "Mild options perfect for kids".to_string(),
            "Great value for money".to_string(),
            "Accommodating to spice preferences".to_string(),
        ],
        common_questions_resolved: vec![
            "Yes, all meat is certified halal".to_string(),
            "We can adjust spice levels for any dish".to_string(),
            "Large portions - perfect for sharing".to_string(),
            "Extensive vegetarian menu available".to_string(),
            "Clay oven gives unique smoky flavor you can't get at home".to_string(),
        ],
    }
}

pub fn trending_dishes() -> Vec<String> {
    vec![
        "Zaika's Chicken Mix Grill".to_string(),
        "Mango Lassi".to_string(),
        "Chicken Biryani".to_string(),
        "Dal Makhni".to_string(),
        "Garlic Naan".to_string(),
    ]
}
