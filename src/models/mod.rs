pub use menu::{MenuData, MenuItem, MenuSection};
pub use profile::RestaurantProfile;
pub use reviews::ReviewInsights;

pub mod defaults;
mod menu;
mod profile;
mod reviews;
