use crate::config::Config;
use crate::error::{ConciergeError, Result};
use crate::models::{defaults, MenuData, MenuItem, RestaurantProfile, ReviewInsights};
use crate::services::context::{Clock, Condition, Season, SystemClock, TimeOfDay, WeatherContext};
use crate::services::intent::{analyze_intent, implied_tags, Intent, IntentAnalysis};
use crate::services::vocabulary::{
    ADDRESS_RE, BEVERAGE_WORDS, BREAD_WORDS, DESSERT_WORDS, DIRECTIONS_PATTERNS, HOT_SIGNALS,
    MILD_SIGNALS, SALAD_WORDS, VEGETARIAN_WORDS, ZIP_RE,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read and parse one JSON reference file.
fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|err| ConciergeError::DataLoadError(format!("{}: {}", path.display(), err)))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Read a JSON reference file, falling back to the built-in dataset when the
/// file is absent or unparseable. Never raises to the caller.
fn load_or_default<T: DeserializeOwned>(path: &Path, fallback: T) -> T {
    if path.exists() {
        match load(path) {
            Ok(value) => return value,
            Err(err) => warn!("Using built-in data for {}: {}", path.display(), err),
        }
    }
    fallback
}

/// The concierge engine: classifies one query at a time and renders a
/// response. All reference data is loaded at construction and read-only
/// afterwards; no state is shared between calls.
pub struct Concierge {
    profile: RestaurantProfile,
    menu: MenuData,
    reviews: ReviewInsights,
    trending: Vec<String>,
    clock: Box<dyn Clock>,
}

impl Concierge {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Construct with an explicit clock so season/meal-period context is
    /// deterministic under test.
    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> Self {
        let profile = RestaurantProfile::default();
        let menu = load_or_default(&config.data_dir.join("menu.json"), defaults::menu());
        let mut reviews: ReviewInsights = load_or_default(
            &config.data_dir.join("reviews.json"),
            defaults::review_insights(),
        );
        reviews
            .top_praise
            .extend(profile.review_snippets.iter().cloned());
        let trending = load_or_default(
            &config.data_dir.join("trending.json"),
            defaults::trending_dishes(),
        );

        info!(
            sections = menu.sections.len(),
            trending = trending.len(),
            "concierge initialized"
        );

        Self {
            profile,
            menu,
            reviews,
            trending,
            clock,
        }
    }

    /// Classify a query and render the matching response. Total: every
    /// input, including empty or nonsense text, resolves to some answer.
    pub fn generate_response(&self, query: &str) -> String {
        let analysis = analyze_intent(query);
        self.route(&analysis)
    }

    fn route(&self, analysis: &IntentAnalysis) -> String {
        let query = analysis.corrected_query.as_str();
        match analysis.primary_intent {
            Intent::Bestsellers => self.handle_bestsellers(),
            Intent::DietarySpecific => self.handle_dietary(query, &analysis.tags),
            Intent::SpiceConcern => self.handle_spice(query),
            Intent::GroupDining => self.handle_group_dining(),
            Intent::CulturalCuriosity => self.handle_cultural(),
            Intent::ValueSeeking => self.handle_value(),
            Intent::QuickService => self.handle_quick_service(),
            Intent::MenuBrowsing => self.handle_menu_browsing(),
            Intent::GeneralInquiry => self.handle_general(query),
        }
    }

    fn handle_bestsellers(&self) -> String {
        let mut response = "🌟 **Our guests can't stop talking about these!**

**🥇 Zaika's Chicken Mix Grill** - $19.95
The dish that's broken our Instagram! Six different BBQ preparations on one platter — it's like a tasting menu of our entire clay oven expertise. Perfect for adventurous eaters or when you simply can't decide.

**🥈 Chicken Biryani** - $12.60
This week's most reordered dish. Guests tell us it reminds them of their grandmother's cooking — aromatic, comforting, and generous enough to share (though you might not want to!).

**🥉 Dal Makhni** - $12.60
Even our most devoted carnivores order this. Slow-simmered for hours until it's pure velvet. One guest called it \"vegetarian comfort food that makes you forget about meat.\"

**🔥 This week's Instagram favorite:** Our Mango Lassi is having a moment — that perfect golden color photographs beautifully, and it's the ideal cooling companion to our bolder flavors.

**🎯 Can't decide?** The Mix Grill + Biryani + Garlic Naan combo has been ordered together 89 times this month. There's clearly something magical about that combination!

What type of flavors usually excite your palate? I'd love to personalize this further! 😊"
            .to_string();

        if !self.trending.is_empty() {
            response.push_str(&format!(
                "\n\n📈 **Trending right now:** {}",
                self.trending.join(", ")
            ));
        }
        response
    }

    fn handle_dietary(&self, query: &str, tags: &BTreeSet<&'static str>) -> String {
        // Highest-frequency categories get hand-curated copy; first match
        // wins, in this order.
        if BEVERAGE_WORDS.iter().any(|w| query.contains(w)) {
            return BEVERAGE_RESPONSE.to_string();
        }
        if SALAD_WORDS.iter().any(|w| query.contains(w)) {
            return SALAD_RESPONSE.to_string();
        }
        if VEGETARIAN_WORDS.iter().any(|w| query.contains(w)) {
            return VEGETARIAN_RESPONSE.to_string();
        }
        if DESSERT_WORDS.iter().any(|w| query.contains(w)) {
            return DESSERT_RESPONSE.to_string();
        }
        if BREAD_WORDS.iter().any(|w| query.contains(w)) {
            return BREAD_RESPONSE.to_string();
        }

        if tags.is_empty() {
            return "Could you clarify what you're looking for? For example: vegetarian, vegan, \
                    gluten-free, spicy, mild, healthy, BBQ, dessert, drink, etc. We offer a wide \
                    range of options and I'd love to recommend the perfect dishes for you!"
                .to_string();
        }

        // Long-tail path: augment the extracted tags with the current
        // season, temperature label and meal period, then match against each
        // item's implied tags.
        let weather = WeatherContext::from_clock(self.clock.as_ref());
        let time_of_day = TimeOfDay::from_clock(self.clock.as_ref());
        let mut search_tags = tags.clone();
        search_tags.insert(weather.season.as_str());
        search_tags.insert(weather.condition.as_str());
        search_tags.insert(time_of_day.as_str());

        let matched: Vec<&MenuItem> = self
            .menu
            .items()
            .filter(|item| !implied_tags(&item.search_text()).is_disjoint(&search_tags))
            .collect();

        if matched.is_empty() {
            return "I'm sorry, I couldn't find matching dishes. Could you specify your \
                    preference (e.g., vegan, spicy, gluten-free, etc.)?"
                .to_string();
        }

        let tag_list = search_tags.iter().copied().collect::<Vec<_>>().join(", ");
        let mut reply = format!(
            "🍽️ **Here are some dishes matching your preferences ({}):**\n\n",
            tag_list
        );
        for item in &matched {
            let preview: String = item.description.chars().take(120).collect();
            reply.push_str(&format!("• **{}**: {}\n", item.name, preview));
        }
        reply.push('\n');
        reply.push_str(self.personalized_suggestion(&search_tags, weather, time_of_day));
        reply.push_str("\nWould you like to refine your search (e.g., vegan, gluten-free, spicy, etc.)?");
        reply
    }

    /// One contextual suggestion sentence. Temperature label wins over
    /// season, season over meal period, meal period over a festive tag.
    fn personalized_suggestion(
        &self,
        tags: &BTreeSet<&'static str>,
        weather: WeatherContext,
        time_of_day: TimeOfDay,
    ) -> &'static str {
        if weather.condition == Condition::Cold {
            return "It's chilly outside—our hot Kashmiri Chai, creamy Dal Makhni, or sizzling BBQ platters are perfect for warming up!";
        }
        if weather.condition == Condition::Hot {
            return "It's a warm day—try our refreshing Mango Lassi, cooling Raita, or light salads and grilled items.";
        }
        if weather.season == Season::Summer {
            return "Summer calls for our chilled drinks, fresh salads, and lighter grilled dishes.";
        }
        if weather.season == Season::Winter {
            return "Winter is perfect for hearty curries, hot naan, and warming chai.";
        }
        if time_of_day == TimeOfDay::Breakfast {
            return "Looking for breakfast? Our parathas, chai, and omelettes are a great start to your day.";
        }
        if time_of_day == TimeOfDay::Lunch {
            return "For lunch, our biryanis, BBQ platters, and fresh breads are very popular.";
        }
        if time_of_day == TimeOfDay::Dinner {
            return "Dinner at Zaika is best enjoyed with our signature curries, tandoori specials, and decadent desserts.";
        }
        if time_of_day == TimeOfDay::LateNight {
            return "Late night cravings? Try our kabab rolls, pakoras, or a soothing cup of chai.";
        }
        if tags.contains("festive") || tags.contains("holiday") {
            return "Celebrating something special? Our chef's specials and festive platters are perfect for the occasion!";
        }
        "Let me know if you have a specific craving or occasion in mind!"
    }

    fn handle_spice(&self, query: &str) -> String {
        if MILD_SIGNALS.iter().any(|w| query.contains(w)) {
            return "😊 **Perfect for Sensitive Palates** (We've got you covered!)

**🥛 Start here:** Sweet Lassi or Mango Lassi — natural spice neutralizers that also happen to be delicious!

**🍗 Safest bets:**
• **Chicken Malai Boti** - $15.75 (Cream-based, virtually no heat)
• **Dal Makhni** - $12.60 (Rich and comforting, gentle spices)
• **Plain Rice** - $6.30 (Your spice safety net!)

**👨‍👩‍👧‍👦 Family dining wisdom:** Order one mild dish per spice-sensitive person, then add medium dishes for the adventurous ones. Everyone shares, everyone's happy!

**🔧 Customization magic:** Our chefs can make ANY curry mild — just mention it when ordering. We're talking \"basically cream sauce with a whisper of authentic flavor.\"

**🍞 Emergency spice relief:** Naan bread, yogurt-based dishes, and our fresh cucumber raita work like culinary fire extinguishers.

**✨ Secret weapon:** Ask for our mint chutney on the side — cooling AND flavorful, even kids love it as a dip!

Would you like suggestions for a mixed spice-level meal where everyone at your table stays comfortable? 👨‍👩‍👧‍👦"
                .to_string();
        }

        if HOT_SIGNALS.iter().any(|w| query.contains(w)) {
            return "🔥 **Spice Challenge Accepted!** (Bring the heat!)

**🌶️ Our spiciest regular items:**
• **Chicken Wings** - $9.45 (Our kitchen's spice showcase)
• **Karahi dishes** (when available) — traditional high-heat cooking
• **Extra spicy anything** — just ask! Our chefs love a challenge

**🔥 How to level up ANY dish:**
• Request \"Pakistani spicy\" — this signals authentic heat levels
• Ask for fresh green chilies on the side
• Order our house-made spicy chutneys

**💡 Spice veteran tips:**
• Start with medium, then add heat — easier than cooling down
• Order Lassi as backup (you might need it!)
• Our clay oven gives dishes a different kind of heat — smoky vs. just spicy

**🏆 The ultimate test:** Ask our chef to \"make it as spicy as you would for your own family.\" That's when the real Pakistani heat comes out!

**🥵 Fair warning:** We take spice seriously here. Our \"mild\" might be other restaurants' \"medium.\" Our \"extra spicy\" has made grown men cry happy tears.

How adventurous are you feeling? I can guide you to the perfect heat level! 🌶️🔥"
                .to_string();
        }

        "🌶️ **Spice Level Navigator**

**Mild:** Creamy, aromatic, kid-friendly
**Medium:** Traditional Pakistani spicing — flavorful with gentle warmth
**Hot:** Authentic heat that Pakistani families enjoy
**Extra Hot:** Challenge level — order with backup lassi!

What's your usual spice comfort zone? I'll guide you perfectly! 😊"
            .to_string()
    }

    fn handle_group_dining(&self) -> String {
        format!(
            "🎉 **Group Dining Made Effortless!**

**🎯 Party Size Guidance:**

**4-6 People (Intimate Gathering):**
• Zaika's Mix Grill + Chicken Biryani + Vegetable option + Bread basket
• **Budget:** ~$75 | **Why:** Variety covers all tastes, built-in sharing

**8-12 People (Family Celebration):**
• Family Platter + 2 Biryanis (different proteins) + Dal Makhni + Bread selection
• **Budget:** ~$150 | **Why:** Accommodates dietary preferences, generous portions

**15+ People (Major Event):**
• **Call us directly:** {phone} — we create custom packages with 24-hour notice
• **Catering available:** We'll bring the clay oven magic to your location!

**🎈 Party Success Formula:**
✅ **Mix spice levels:** Mild + Medium + \"Ask for extra spicy\" options
✅ **Protein variety:** Chicken + Vegetarian (covers 95% of preferences)
✅ **Bread strategy:** Mix of plain, garlic, and specialty naans
✅ **Cooling elements:** Multiple lassis — they're Instagram gold too!

**💡 Pro party tip:** Order 20% more than you think you need. Pakistani hospitality means generous portions, and happy guests with full plates create the best memories.

**🍰 Special occasions?** Let us know — we love making birthdays, anniversaries, and celebrations extra special!

What's the occasion and how many flavor adventurers are we feeding? 🎊",
            phone = self.profile.phone
        )
    }

    fn handle_cultural(&self) -> String {
        "🇵🇰 **Authentic Pakistani Culinary Journey**

**🔥 The Clay Oven Difference:**
Our tandoor reaches 900°F — this isn't just cooking, it's culinary alchemy! That distinctive smoky char and tender-yet-crispy texture? Impossible to replicate at home.

**🌟 What Makes Us Authentically Pakistani:**
• **Family recipes** passed down three generations
• **Traditional techniques** — our dal simmers for hours, biryani is layered by hand
• **Cultural hospitality** — guests are family, dietary needs are honored
• **Halal commitment** — not just certified, but prepared with cultural understanding

**🎨 The Art of Pakistani Spicing:**
Each spice serves a purpose beyond flavor:
• **Turmeric:** Anti-inflammatory golden magic
• **Cumin:** Digestive aid that's iron-rich
• **Ginger & Garlic:** The foundation of Pakistani cooking
• **Garam Masala:** Our signature blend (literally \"warm spices\")

**🍽️ Eating Pakistani Style:**
• **Sharing is caring** — dishes are meant for communal enjoyment
• **Bread as utensil** — naan isn't just a side, it's how you scoop and savor
• **Balance is key** — pair rich curries with cooling yogurt-based items

**💚 The Philosophy:**
Pakistani cuisine believes food should nourish both body and soul. Every meal should feel like a celebration, every guest should feel welcomed.

**✨ Want the full cultural experience?** Ask your server about the traditional way to eat each dish — there are stories behind every preparation!

What aspect of Pakistani culture through food interests you most? 🌶️✨"
            .to_string()
    }

    fn handle_value(&self) -> String {
        "💰 **Outstanding Value Without Compromise!**

**🏆 Maximum Impact, Minimum Spend:**

**🍛 The Biryani Strategy** (Feeds 2-3 people each):
• **Chicken Biryani** - $12.60 (Complete meal in one dish!)
• **Vegetable Biryani** - $10.50 (Surprisingly filling and flavorful)
• Add plain naan ($3.15) to stretch it even further

**🌱 Vegetarian Value Bombs:**
• **Dal Makhni** - $12.60 (Protein-packed, incredibly satisfying)
• **Lahori Channa** - $12.60 (Street food favorite, huge portions)
• **Perfect combo:** Dal + Rice + Naan = $21.90 for 2-3 people

**💡 Value Hacking Strategies:**
✅ **Share appetizers** — our pakoras are generous and meant for sharing
✅ **Biryanis are shareable** — seriously, they're huge!
✅ **Plain vs. specialty** naan saves $1-3 without sacrificing satisfaction
✅ **Lunch portions** — ask if available (smaller plates, smaller prices)

**🎯 Ultimate Budget Combo** (Feeds family of 4 for $45):
• Chicken Biryani + Vegetable Biryani + Dal Makhni + 4 Plain Naan
• Result: Everyone eats well + likely leftovers!

**💰 Money-saving secrets:**
• Our portions are American-generous with Pakistani soul
• Vegetarian dishes offer same quality spicing at lower cost
• One biryani + one curry + bread = feast for 2-3 people

**📞 Budget tip:** Call ahead — we sometimes have daily specials not advertised online!

What's your target budget? I can create a feast plan that'll surprise you! 💚"
            .to_string()
    }

    fn handle_quick_service(&self) -> String {
        format!(
            "⚡ **Quick Service Without Sacrificing Soul!**

**🚀 Ready in 10-15 Minutes:**
• **Chicken Shami Kabab** - $7.35 (12 min — pre-made perfection)
• **Vegetable Pakora** - $7.35 (10 min — from fryer to your hands)
• **Any Naan** - $3.15-$6.30 (8 min clay oven magic)
• **Lassi** - $5.25 (2 min fresh blend)

**🍽️ Complete Quick Meals:**
• **Kabab Roll** - $5.25 (10 min wrapped convenience)
• **Dal + Rice** combo (12 min — we always have dal ready)
• **Pre-made Biryani** + Naan (15 min if available — ask!)

**⏰ Lunch Break Specials:**
• **Express Combo:** Kabab Roll + Masala Soda = $10.50 (8 minutes!)
• **Power Lunch:** Chicken Shami + Lassi = $12.60 (protein + probiotics!)
• **Veggie Quick:** Pakora + Naan + Tea = $13.50 (satisfying + warming)

**💡 Time-Saving Hacks:**
✅ **Call ahead:** {phone} — we'll have it ready for pickup!
✅ **Ask about pre-made items** — biryani and dal are often ready to go
✅ **Appetizers as mains** — totally acceptable and filling!
✅ **Mobile payment** — speeds up the pickup process

**📱 Even faster:** Check if we have online ordering for pickup!

**⚡ Our promise:** Even our \"fast\" food maintains authentic flavors and quality. No shortcuts on taste, just efficiency in service!

How tight is your timeline? I can optimize your order for maximum speed! ⏰",
            phone = self.profile.phone
        )
    }

    fn handle_menu_browsing(&self) -> String {
        "🍽️ **Welcome to Zaika's Culinary Universe!**

**🌟 First-time visitor? Start here:**

**🏆 Our Greatest Hits:**
• **Zaika's Chicken Mix Grill** - $19.95 (Six BBQ styles, one epic platter)
• **Chicken Biryani** - $12.60 (Comfort food perfection)
• **Dal Makhni** - $12.60 (Vegetarian magic that converts meat-lovers)

**🔥 By Cooking Style:**
**Clay Oven BBQ** — Smoky, charred perfection at 900°F
**Slow-Simmered Curries** — Rich, complex flavors developed over hours
**Aromatic Rice** — Basmati perfection with traditional layering
**Fresh Breads** — Hot from the tandoor, essential for the full experience

**💡 Choose Your Adventure:**
• **\"Surprise me with your bestseller\"** → Mix Grill experience
• **\"I want comfort food\"** → Biryani + Dal + Naan trinity
• **\"Make it healthy\"** → Grilled proteins + vegetable curries
• **\"I'm spice-curious\"** → Progressive heat journey from mild to bold
• **\"Feed my family\"** → Sharing platters with variety

**🎯 Tell me more specifically:**
• **Protein preference?** (Chicken, vegetarian, mixed)
• **Spice comfort zone?** (Mild, medium, bring-the-heat)
• **Dining style?** (Quick bite, leisurely feast, family sharing)
• **Dietary needs?** (We accommodate everything!)

**🌶️ Cultural Note:** Pakistani cuisine is about balance — rich with cooling, spicy with mild, protein with vegetables. Every meal tells a story!

What type of culinary adventure calls to you today? I'm here to craft your perfect Zaika experience! ✨"
            .to_string()
    }

    /// Google Maps directions link with percent-encoded origin and
    /// destination.
    fn directions_link(&self, origin: &str) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&origin={}&destination={}",
            urlencoding::encode(origin),
            urlencoding::encode(&self.profile.address)
        )
    }

    fn directions_response(&self, origin: &str) -> String {
        format!(
            "Here are directions from '{}' to {}:\n{}\n\nSafe travels! 🚗",
            origin,
            self.profile.name,
            self.directions_link(origin)
        )
    }

    fn handle_general(&self, query: &str) -> String {
        // Directions sub-router first: explicit phrasings, then a bare ZIP
        // or street-address shaped query treated as an origin.
        for pattern in DIRECTIONS_PATTERNS.iter() {
            if let Some(captures) = pattern.captures(query) {
                if let Some(origin) = captures.get(1) {
                    return self.directions_response(origin.as_str().trim());
                }
            }
        }
        let trimmed = query.trim();
        if !trimmed.is_empty() && (ZIP_RE.is_match(trimmed) || ADDRESS_RE.is_match(trimmed)) {
            return self.directions_response(trimmed);
        }

        let p = &self.profile;
        if ["about", "who are you", "your story", "history"]
            .iter()
            .any(|w| query.contains(w))
        {
            return format!(
                "{}\n\n📍 Address: {}\n📞 Phone: {}\n✉️ Email: {}\n🕒 Hours: {}\n🌐 Website: {}",
                p.about, p.address, p.phone, p.email, p.business_hours, p.website
            );
        }
        if ["hours", "time", "open", "close"].iter().any(|w| query.contains(w)) {
            return format!(
                "⏰ **Zaika BBQ Grill Hours & Contact**\n\n📍 **Location:** {address}\n📞 **Phone:** {phone}\n✉️ **Email:** {email}\n\n🕐 **Business Hours:**\n{hours}\n\n🚚 **Service Options:**\n✅ **Dine-in** — Full restaurant experience with clay oven aromas\n✅ **Pickup** — Ready in 15-20 minutes (call ahead!)\n✅ **Delivery** — Available in Edison and surrounding areas\n✅ **Catering** — Custom packages with 24-hour notice\n\n💡 **Pro tip:** Call {phone} to confirm hours, place advance orders, or discuss dietary customizations!\n\nReady to experience authentic Pakistani flavors? What sounds delicious today? 😊",
                address = p.address,
                phone = p.phone,
                email = p.email,
                hours = p.business_hours
            );
        }
        if ["location", "address", "directions"].iter().any(|w| query.contains(w)) {
            return format!(
                "📍 **Find Us Easily!**\n\n🏢 **Address:** {address}\n📞 **Phone:** {phone}\n✉️ **Email:** {email}\n\n🚗 **Getting Here:**\n• **From Route 1:** Easy access via Amboy Avenue\n• **Parking:** On-site parking available\n• **Accessibility:** Wheelchair accessible entrance\n• **Public Transit:** Bus-friendly location\n\n🗺️ **Landmarks:** Near the heart of Edison's dining district\n\n💡 **First visit?** Call us at {phone} — we'll give you easy directions AND help you decide what to order!\n\n🎯 **Delivery Area:** We deliver throughout Edison and surrounding communities.\n\nReady to experience the flavors that have made us Edison's Pakistani cuisine destination? 🍽️✨",
                address = p.address,
                phone = p.phone,
                email = p.email
            );
        }
        if ["pakistani", "authentic", "halal", "culture"]
            .iter()
            .any(|w| query.contains(w))
        {
            return self.handle_cultural();
        }
        if ["google", "maps", "location on google", "find you online"]
            .iter()
            .any(|w| query.contains(w))
        {
            return format!(
                "You can find us on Google Maps here: {maps}\n\nGoogle Profile:\n- Name: {name}\n- Category: {category}\n- Address: {address}\n- Phone: {phone}\n- Website: {website}\n- Hours: {hours}\n- Price Range: {price}\n- Rating: {rating} ⭐ ({reviews}+ reviews)\n- Social: Facebook: {facebook}, Instagram: {instagram}\n- Popular for: {popular}\n- Popular times: {times}",
                maps = p.google_maps,
                name = p.name,
                category = p.category,
                address = p.address,
                phone = p.phone,
                website = p.website,
                hours = "11am–10pm daily",
                price = p.price_range,
                rating = p.rating,
                reviews = p.review_count,
                facebook = p.facebook,
                instagram = p.instagram,
                popular = p.popular_for.join(", "),
                times = p.popular_times
            );
        }
        if ["rating", "review", "reviews", "google rating", "stars"]
            .iter()
            .any(|w| query.contains(w))
        {
            return format!(
                "Our Google rating is {} stars based on {}+ reviews.\n\nHere are some recent review highlights:\n- {}",
                p.rating,
                p.review_count,
                self.reviews.top_praise.join("\n- ")
            );
        }
        if ["price", "cost", "expensive", "cheap", "affordable"]
            .iter()
            .any(|w| query.contains(w))
        {
            return format!(
                "Our price range is {} (moderate). We offer generous portions and great value for authentic Pakistani cuisine!",
                p.price_range
            );
        }
        if ["social", "facebook", "instagram", "media"]
            .iter()
            .any(|w| query.contains(w))
        {
            return format!(
                "Follow us on social media!\nFacebook: {}\nInstagram: {}",
                p.facebook, p.instagram
            );
        }

        format!(
            "🤔 **Great question!** Let me help you discover what makes Zaika special.\n\n**🍽️ What I can help you with:**\n• **Menu recommendations** — From bestsellers to hidden gems\n• **Dietary guidance** — Vegetarian, health-conscious, spice-level advice\n• **Cultural insights** — Stories behind our traditional dishes\n• **Party planning** — Group dining made effortless\n• **Quick service** — Fast options without sacrificing flavor\n\n**📞 For immediate assistance:** Call {phone} or email {email}\n\n**🌟 Popular conversation starters:**\n• \"What's your most Instagram-worthy dish?\"\n• \"I'm new to Pakistani food — where should I start?\"\n• \"What's good for someone who loves [spicy/mild/healthy] food?\"\n• \"Planning dinner for 6 people — help me choose!\"\n\nWhat aspect of the Zaika experience interests you most? I'm here to make your visit absolutely perfect! ✨",
            phone = p.phone,
            email = p.email
        )
    }
}

const BEVERAGE_RESPONSE: &str = "🍹 **Our Refreshing Beverages:**

**🥭 Mango Lassi** - $5.25
Creamy yogurt drink blended with sweet mango - our Instagram star! Perfect for cooling down after spicy dishes.

**🌸 Kashmiri Chai** - $4.20
Pink tea from the Kashmir valley - delicate, aromatic, and Instagram-worthy. A traditional welcome drink.

**🥛 Sweet Lassi** - $4.20
Classic yogurt drink - natural spice neutralizer and digestive aid.

**☕ Masala Chai** - $3.15
Spiced Indian tea with warming ginger and cardamom.

**Perfect for:** Cooling down spicy dishes, refreshing on hot days, or as a traditional accompaniment to any meal!";

const SALAD_RESPONSE: &str = "🥗 **Fresh & Healthy Options:**

**🥬 Palak Paneer** - $12.60
Fresh spinach curry with soft paneer cubes - nutrition meets indulgence! Rich in iron and plant-based protein.

**🥒 Fresh Cucumber Raita** - $3.15
Cooling yogurt with fresh cucumber - perfect side dish and spice neutralizer.

**🌿 Mint Chutney** - $2.10
Fresh mint and cilantro chutney - cooling AND flavorful, even kids love it as a dip!

**Perfect for:** Light meals, cooling down spicy dishes, or adding fresh elements to your meal!";

const VEGETARIAN_RESPONSE: &str = "🌱 **Our Vegetarian Favorites:**

**🥬 Palak Paneer** - $12.60
Fresh spinach curry with soft paneer cubes - nutrition meets indulgence! Rich in iron and plant-based protein.

**🫘 Lahori Channa** - $12.60
Chickpeas in robust tomato-onion gravy with warming Lahori spices. High fiber, plant protein, supports digestive health.

**🫘 Dal Makhni** - $12.60
Slow-simmered black lentils and kidney beans in rich, creamy tomato curry - a vegetarian masterpiece!

**🥭 Mango Lassi** - $5.25
Creamy yogurt drink blended with sweet mango - perfect vegetarian beverage!

**Perfect for:** Vegetarian diets, protein-rich plant meals, or anyone looking for delicious meat-free options!";

const DESSERT_RESPONSE: &str = "🍰 **Sweet Endings:**

**🥭 Mango Lassi** - $5.25
Creamy yogurt drink blended with sweet mango - our Instagram star! Perfect dessert beverage.

**🌸 Kashmiri Chai** - $4.20
Pink tea from the Kashmir valley - delicate, aromatic, and Instagram-worthy. Sweet and refreshing.

**🍯 Sweet Lassi** - $4.20
Classic sweetened yogurt drink - natural dessert and digestive aid.

**Perfect for:** Ending your meal on a sweet note, cooling down after spicy dishes, or as a refreshing dessert!";

const BREAD_RESPONSE: &str = "🍞 **Fresh Breads from Our Clay Oven:**

**🧄 Garlic Naan** - $3.15
Fresh garlic naan - essential for scooping up curries and creating the perfect bite.

**🧈 Butter Naan** - $3.15
Classic butter naan - soft, fluffy, and perfect for any curry.

**🌿 Plain Naan** - $2.10
Simple, fresh naan - your spice safety net and curry companion.

**🥬 Paratha** - $3.15
Layered flatbread - perfect for breakfast or as a hearty bread option.

**Perfect for:** Scooping up curries, creating the perfect bite, or as a side to any dish!";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::context::FixedClock;
    use crate::services::intent::Confidence;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn fixed_clock(month: u32, hour: u32) -> Box<FixedClock> {
        Box::new(FixedClock(
            NaiveDate::from_ymd_opt(2024, month, 15)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        ))
    }

    fn concierge_at(month: u32, hour: u32) -> Concierge {
        // Point at a directory with no override files so the built-in
        // datasets are used.
        let config = Config {
            data_dir: PathBuf::from("/nonexistent"),
        };
        Concierge::with_clock(&config, fixed_clock(month, hour))
    }

    #[test]
    fn malformed_override_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("zaika-concierge-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("menu.json");
        std::fs::write(&path, "{ not json").unwrap();

        let menu: MenuData = load_or_default(&path, defaults::menu());
        assert!(menu.sections.contains_key("clay_oven_bbq"));
    }

    #[test]
    fn loader_reports_typed_errors() {
        let missing = load::<MenuData>(Path::new("/nonexistent/menu.json"));
        assert!(matches!(
            missing.unwrap_err(),
            ConciergeError::DataLoadError(_)
        ));

        let dir = std::env::temp_dir().join("zaika-concierge-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let parse = load::<MenuData>(&path);
        assert!(matches!(
            parse.unwrap_err(),
            ConciergeError::SerializationError(_)
        ));
    }

    #[test]
    fn vegetarian_recommendation_lists_vegetarian_dishes() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("I'm vegetarian, what do you recommend?");
        assert!(response.contains("Palak Paneer"));
        assert!(response.contains("Dal Makhni"));
    }

    #[test]
    fn beverage_shortcut_beats_generic_search() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("what drinks do you have");
        assert!(response.contains("Mango Lassi"));
        assert!(response.contains("Kashmiri Chai"));
    }

    #[test]
    fn generic_tag_search_lists_matching_items() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("smoked bbq platter");
        assert!(response.contains("matching your preferences"));
        assert!(response.contains("Chicken Mix Grill"));
        // Winter clock: the contextual suggestion is the cold-weather one.
        assert!(response.contains("chilly outside"));
    }

    #[test]
    fn unmatched_tags_get_an_apology() {
        // Winter evening: no context tag matches any menu copy, and no
        // dish mentions seafood.
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("shrimp");
        assert!(response.contains("couldn't find matching dishes"));
    }

    #[test]
    fn mild_condition_label_broadens_matches() {
        // Shoulder-season months carry the "mild" condition label, which is
        // itself a keyword-table tag, so cream-based dishes match.
        let concierge = concierge_at(4, 12);
        let response = concierge.generate_response("shrimp");
        assert!(response.contains("Chicken Malai Boti"));
    }

    #[test]
    fn bare_zip_code_returns_directions_link() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("08837");
        assert!(response.contains("https://www.google.com/maps/dir/?api=1"));
        assert!(response.contains("origin=08837"));
        assert!(response.contains("destination=1199%20Amboy%20Ave"));
    }

    #[test]
    fn directions_phrase_extracts_origin() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("directions from 123 Main St, Edison, NJ 08837");
        assert!(response.contains("Here are directions from '123 main st, edison, nj 08837'"));
        assert!(response.contains("origin=123%20main%20st"));
    }

    #[test]
    fn street_address_query_returns_directions_link() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("55 Parsonage Road");
        assert!(response.contains("https://www.google.com/maps/dir/?api=1"));
    }

    #[test]
    fn empty_query_gets_general_fallback() {
        let concierge = concierge_at(1, 18);
        let analysis = analyze_intent("");
        assert_eq!(analysis.confidence, Confidence::Low);
        let response = concierge.generate_response("");
        assert!(response.contains("Great question"));
    }

    #[test]
    fn hours_branch_includes_contact_details() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("when are you open");
        assert!(response.contains("(732) 709-3700"));
        assert!(response.contains("Business Hours"));
    }

    #[test]
    fn reviews_branch_renders_praise() {
        let concierge = concierge_at(1, 18);
        let response = concierge.generate_response("what are your reviews like");
        assert!(response.contains("4.5 stars"));
        // Profile snippets are appended to the review insights at startup.
        assert!(response.contains("Best biryani in Edison"));
    }

    #[test]
    fn bestsellers_include_trending_footer() {
        let concierge = concierge_at(1, 18);
        let analysis = analyze_intent("what's your most popular item?");
        assert_eq!(analysis.primary_intent, Intent::Bestsellers);
        let response = concierge.route(&analysis);
        assert!(response.contains("Chicken Mix Grill"));
        assert!(response.contains("Trending right now"));
    }

    #[test]
    fn spice_handler_branches_on_secondary_signals() {
        let concierge = concierge_at(1, 18);
        assert!(concierge
            .handle_spice("something mild for the kids")
            .contains("Sensitive Palates"));
        assert!(concierge
            .handle_spice("bring the fire, i want a challenge")
            .contains("Spice Challenge Accepted"));
        assert!(concierge
            .handle_spice("how do you rate heat levels")
            .contains("Spice Level Navigator"));
    }

    #[test]
    fn every_intent_routes_to_a_response() {
        let concierge = concierge_at(1, 18);
        for query in [
            "what's on the menu",
            "what do you recommend",
            "vegetarian please",
            "planning a party for 10 people",
            "something quick for takeout",
            "tell me about pakistani food",
            "best deal on a budget",
            "",
        ] {
            assert!(!concierge.generate_response(query).is_empty());
        }
    }

    #[test]
    fn suggestion_precedence_weather_over_time() {
        let concierge = concierge_at(7, 8);
        let tags = BTreeSet::new();
        let weather = WeatherContext::from_clock(fixed_clock(7, 8).as_ref());
        let time = TimeOfDay::from_clock(fixed_clock(7, 8).as_ref());
        // July morning: the hot-weather suggestion wins over breakfast.
        let suggestion = concierge.personalized_suggestion(&tags, weather, time);
        assert!(suggestion.contains("warm day"));

        let spring_weather = WeatherContext::from_clock(fixed_clock(4, 8).as_ref());
        let spring_time = TimeOfDay::from_clock(fixed_clock(4, 8).as_ref());
        let spring_suggestion =
            concierge.personalized_suggestion(&tags, spring_weather, spring_time);
        assert!(spring_suggestion.contains("breakfast"));
    }
}
