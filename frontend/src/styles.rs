pub const PAGE: &str = "min-h-screen p-4 bg-gradient-to-br from-amber-50 via-white to-orange-100 flex flex-col items-center justify-center gap-6";
pub const PAGE_COMPACT: &str = "bg-transparent p-2 flex flex-col items-center justify-center gap-6";
pub const PAGE_SUCCESS: &str = "min-h-screen p-4 bg-gradient-to-br from-emerald-50 via-white to-green-100 flex flex-col items-center justify-center gap-6";
pub const TITLE: &str = "text-3xl md:text-4xl lg:text-5xl font-bold bg-gradient-to-r from-orange-600 to-red-600 bg-clip-text text-transparent";
pub const SUBTITLE: &str = "text-gray-700 text-base md:text-lg font-medium";
pub const TEXT_H1: &str = "text-2xl md:text-3xl font-bold text-gray-900";
pub const TEXT_BODY: &str = "text-gray-600 text-sm md:text-base";
pub const TEXT_SMALL: &str = "text-xs text-gray-500";
pub const TEXT_LABEL: &str = "block text-left text-sm font-medium text-gray-700 mb-2";
pub const TEXT_ERROR: &str = "text-red-500 text-xs mt-1 text-left";
pub const TEXT_HINT: &str = "text-gray-500 text-xs mt-1 text-left";
pub const INPUT: &str = "w-full px-4 py-3 text-base md:text-lg rounded-xl border-2 border-gray-300 focus:border-orange-500 focus:ring-2 focus:ring-orange-200 outline-none transition-all";
pub const INPUT_ERROR: &str = "w-full px-4 py-3 text-base md:text-lg rounded-xl border-2 border-red-500 focus:border-red-500 focus:ring-2 focus:ring-orange-200 outline-none transition-all";
pub const ALERT_ERROR: &str = "bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded-xl";
pub const CARD: &str = "bg-white rounded-2xl shadow-lg border-2 border-emerald-100";
pub const CARD_COUPON: &str = "bg-white p-6 md:p-8 rounded-3xl shadow-2xl border-4 border-emerald-200 w-full";
pub const BUTTON_PRIMARY: &str = "w-full py-4 text-base md:text-lg bg-gradient-to-r from-orange-500 to-red-600 hover:from-orange-600 hover:to-red-700 text-white font-bold rounded-2xl shadow-lg disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SUCCESS: &str = "w-full bg-gradient-to-r from-emerald-500 to-green-600 hover:from-emerald-600 hover:to-green-700 text-white font-bold rounded-xl shadow-lg";
pub const BUTTON_LINK: &str = "text-sm text-gray-500 hover:text-gray-700 underline";
pub const BUTTON_SPIN: &str = "rounded-full bg-gradient-to-br from-orange-500 via-pink-500 to-red-600 hover:from-orange-600 hover:via-pink-600 hover:to-red-700 text-white font-bold shadow-xl md:shadow-2xl border-white transform transition-all duration-300 hover:scale-105 active:scale-95 relative z-20";
pub const BANNER_CONGRATS: &str = "bg-gradient-to-r from-green-400 via-emerald-500 to-green-600 text-white px-6 py-4 md:px-8 md:py-6 rounded-2xl font-bold text-lg md:text-xl shadow-xl border-4 border-white text-center";
pub const COUPON_CODE: &str = "text-2xl md:text-3xl font-bold bg-gradient-to-r from-emerald-600 to-green-600 bg-clip-text text-transparent break-all px-2";
pub const OVERLAY: &str = "fixed inset-0 z-[9999] bg-black/50 flex items-center justify-center p-4";
pub const MODAL: &str = "relative bg-white rounded-2xl shadow-2xl overflow-hidden max-w-md w-full";
pub const CLOSE_BUTTON: &str = "absolute top-3 right-3 z-50 w-8 h-8 bg-white rounded-full flex items-center justify-center shadow-md hover:shadow-lg transition-shadow";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-white";
pub const CODE_BLOCK: &str = "bg-gray-900 text-green-300 text-xs rounded-xl p-4 overflow-x-auto text-left";
