//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::RobotsConfig;
pub use site::SiteConfig;
pub use site::SITE_URL_ENV;
