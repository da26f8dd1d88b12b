pub mod concierge;
pub mod context;
pub mod intent;
pub mod vocabulary;

// Re-export public types
pub use concierge::Concierge;
pub use context::{Clock, FixedClock, SystemClock, TimeOfDay, WeatherContext};
pub use intent::{analyze_intent, Confidence, Intent, IntentAnalysis};
