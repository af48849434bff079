use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long a stat counter takes to count up.
pub const COUNTER_DURATION_MS: u32 = 2500;

/// Share of the stats band that must be on screen before counters start.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.3;

pub const CAROUSEL_WINDOW: usize = 3;
pub const CAROUSEL_SETTLE_MS: u32 = 500;

/// Reveal effects fire when an element's top passes 80% of the viewport height.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -20% 0px";
pub const REVEAL_THRESHOLD: f64 = 0.01;

/// Scroll offset after which the sticky navbar slides in.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 400.0;

pub const BUSINESS_NAME: &str = "AQUAFIX";
pub const ADDRESS_LINE: &str = "456 Water St, Vancouver, BC";
pub const OFFICE_ADDRESS: &[&str] = &["123 Waterfront Drive", "Vancouver, BC V6B 1A1", "Canada"];
pub const EMAIL: &str = "info@aquafix.com";
pub const PHONE_DISPLAY: &str = "604-123-4567";
pub const PHONE_TEL: &str = "+16041234567";
pub const FOUNDED_YEAR: u32 = 2015;

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d83327.95083029087!2d-123.19394079310091!3d49.257735818502895!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x548673f143a94fb3%3A0xbb9196ea9b81f38b!2sVancouver%2C%20BC%2C%20Canada!5e0!3m2!1sen!2s!4v1704067200000!5m2!1sen!2s";
