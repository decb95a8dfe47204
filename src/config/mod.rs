pub mod load;
pub mod save;
pub mod types;

pub use types::{
    Configuration, ITEMS_CONFIG_KEY, KIOSK_SECTION, MEDIA_CONFIG_KEY, MEDIA_DIRECTORY_KEY,
    MEDIA_SUBDIRECTORIES,
};
