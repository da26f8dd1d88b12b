use serde::{Deserialize, Serialize};

/// Static business facts about the restaurant, as published on its Google
/// profile. Fixed at construction; response templates interpolate from here
/// rather than hardcoding contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantProfile {
    pub name: String,
    pub category: String,
    pub cuisine: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub google_maps: String,
    pub facebook: String,
    pub instagram: String,
    pub business_hours: String,
    pub price_range: String,
    pub rating: f32,
    pub review_count: u32,
    pub popular_for: Vec<String>,
    pub popular_times: String,
    pub review_snippets: Vec<String>,
    pub about: String,
}

impl Default for RestaurantProfile {
    fn default() -> Self {
        Self {
            name: "Zaika BBQ & Grill".to_string(),
            category: "Pakistani restaurant".to_string(),
            cuisine: "Authentic Pakistani & Indian Cuisine".to_string(),
            address: "1199 Amboy Ave, Edison, NJ 08837".to_string(),
            phone: "(732) 709-3700".to_string(),
            email: "zaika@zaikabbqgrill.com".to_string(),
            website: "https://zaikabbqgrill.com".to_string(),
            google_maps: "https://goo.gl/maps/ZaikaBBQGrill".to_string(),
            facebook: "https://facebook.com/zaikabbqgrill".to_string(),
            instagram: "@zaikabbqgrill".to_string(),
            business_hours: "Monday – Thursday: 11am-10pm\nFriday – Sunday: 11am-10pm"
                .to_string(),
            price_range: "$$".to_string(),
            rating: 4.5,
            review_count: 800,
            popular_for: vec![
                "Dine-in".to_string(),
                "Takeout".to_string(),
                "Delivery".to_string(),
                "Family-friendly".to_string(),
                "Vegetarian options".to_string(),
            ],
            popular_times: "Busy on weekends, especially 6–8pm".to_string(),
            review_snippets: vec![
                "Amazing food and great service! The BBQ platter is a must-try.".to_string(),
                "Authentic Pakistani flavors, generous portions, and friendly staff.".to_string(),
                "Best biryani in Edison. Will definitely come back!".to_string(),
                "Vegetarian options are delicious and filling.".to_string(),
            ],
            about: "Zaika is a family owned business in Edison, New Jersey, serving the finest \
                    Pakistani cuisine. From exquisitely spiced curries to a tantalizing BBQ mixed \
                    grill and sizzling Lamb Chops, each dish has forged its place in history. \
                    Zaika's friendly atmosphere, attentive service, and affordable prices will \
                    keep you coming back again and again."
                .to_string(),
        }
    }
}
