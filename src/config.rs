
pub const AGENCY_NAME: &str = "lang2lang";
pub const TELEGRAM_LINK: &str = "https://t.me/sup_lang2lang";
pub const SUPPORT_EMAIL: &str = "support@lang2lang.io";

// Demo player
pub const DEMO_ASSET_DIR: &str = "/demo";
pub const DEMO_POSTER: &str = "/demo/poster.jpg";
pub const LAZY_MOUNT_MARGIN_PX: u32 = 200;
pub const FADE_OUT_MS: u32 = 250;
pub const RESUME_DELAY_MS: u32 = 100;

// How long the contact form shows its thank-you panel before resetting.
pub const CONTACT_RESET_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn get_form_relay_url() -> &'static str {
    "http://localhost:3001/submit"  // Local relay mock
}

#[cfg(not(debug_assertions))]
pub fn get_form_relay_url() -> &'static str {
    "https://api.web3forms.com/submit"
}

pub fn get_form_access_key() -> &'static str {
    option_env!("FORM_ACCESS_KEY").unwrap_or("cd31617a-233d-4a30-ac96-6efa637ee704")
}
