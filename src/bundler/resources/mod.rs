//! Resource files copied from the source tree into staging directories.

mod icons;
mod locale;

pub use icons::{deploy_icons, icon_destination, icon_source};
pub use locale::deploy_locale;
