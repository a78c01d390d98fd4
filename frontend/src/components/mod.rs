pub mod coupon_display;
pub mod discount_form;
pub mod spin_button;
pub mod wheel_canvas;
pub mod winner_banner;

pub use coupon_display::CouponDisplay;
pub use discount_form::DiscountForm;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
pub use winner_banner::WinnerBanner;
