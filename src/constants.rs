// DOM hooks the page markup provides.

pub const CUBE_ID: &str = "cube";
pub const FLOATING_PHOTOS_SELECTOR: &str = ".floating-photos";
pub const FACE_IMAGES_SELECTOR: &str = ".face img";
pub const LAZY_SRC_ATTR: &str = "data-src";

pub const HEARTS_SELECTOR: &str = ".hearts";
pub const HEART_CLASS: &str = "fas fa-heart";
pub const STRAWBERRY_RAIN_SELECTOR: &str = ".strawberry-rain";
pub const STRAWBERRY_CLASS: &str = "strawberry";

pub const MUSIC_TOGGLE_ID: &str = "musicToggle";
pub const BG_MUSIC_ID: &str = "bgMusic";

// Class toggles
pub const PAUSED_CLASS: &str = "paused"; // stops the floating-photo CSS animation
pub const PLAYING_CLASS: &str = "playing";

// Icon markup for the music button
pub const MUSIC_ICON_HTML: &str = "<i class=\"fas fa-music\"></i>";
pub const PAUSE_ICON_HTML: &str = "<i class=\"fas fa-pause\"></i>";
