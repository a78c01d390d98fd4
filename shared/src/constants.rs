pub const PRIZES_ENDPOINT: &str = "/api/prizes";
pub const LEADS_ENDPOINT: &str = "/api/leads";

pub const DEFAULT_CRM_ENDPOINT: &str = "https://services.leadconnectorhq.com/contacts/";
pub const DEFAULT_CRM_API_VERSION: &str = "2021-07-28";
pub const CRM_COUPON_FIELD: &str = "spintowin_coupon";
pub const CRM_DISCOUNT_FIELD: &str = "spintowincoupon_discount";

pub const EMAIL_REQUIRED_ERROR: &str = "Email is required";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const FULL_NAME_REQUIRED_ERROR: &str = "Full name is required";
pub const INVALID_FULL_NAME_ERROR: &str = "Please enter your full name (first and last)";
pub const MOBILE_REQUIRED_ERROR: &str = "Mobile number is required";
pub const INVALID_MOBILE_ERROR: &str = "Please enter a valid mobile number (at least 10 digits)";
pub const INVALID_DISCOUNT_ERROR: &str = "Invalid discount";
pub const CONFIGURATION_ERROR: &str = "Configuration error. Please contact support.";
pub const SUBMIT_FAILED_ERROR: &str = "Failed to submit form";
pub const NETWORK_ERROR: &str = "Failed to submit form. Please try again.";
pub const VALIDATION_ERROR: &str = "Please correct the highlighted fields";
pub const PRIZES_UNAVAILABLE_ERROR: &str = "Prize catalog unavailable";

/// Discount used when the winning prize name carries no `NN%`.
pub const FALLBACK_DISCOUNT: &str = "5";
/// Whole percents a coupon may carry.
pub const DISCOUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
pub const MIN_MOBILE_DIGITS: usize = 10;
pub const RESERVATION_MINUTES: u32 = 15;
pub const DEFAULT_SHOW_DELAY_MS: u32 = 5000;
pub const DEFAULT_AUTO_OPEN_MS: u32 = 3000;
/// Share of the page that must be scrolled before the scroll trigger fires.
pub const SCROLL_TRIGGER_PERCENT: f64 = 70.0;
