use crate::content::SocialKind;

pub(crate) const LOGO: &[u8] = include_bytes!("../assets/icons/logo.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../assets/icons/menu.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/icons/close.svg");
pub(crate) const ARROW_UP: &[u8] =
    include_bytes!("../assets/icons/arrow-up.svg");
pub(crate) const ARROW_DOWN: &[u8] =
    include_bytes!("../assets/icons/arrow-down.svg");
pub(crate) const MAIL: &[u8] = include_bytes!("../assets/icons/mail.svg");
pub(crate) const PHONE: &[u8] = include_bytes!("../assets/icons/phone.svg");
pub(crate) const DOWNLOAD: &[u8] =
    include_bytes!("../assets/icons/download.svg");
pub(crate) const GITHUB: &[u8] = include_bytes!("../assets/icons/github.svg");
pub(crate) const LINKEDIN: &[u8] =
    include_bytes!("../assets/icons/linkedin.svg");
pub(crate) const X_LOGO: &[u8] = include_bytes!("../assets/icons/x-logo.svg");
pub(crate) const APP_ICON_DATA: &[u8] = include_bytes!("../assets/logo.png");

/// Profile photo shown in the hero, read at runtime.
pub(crate) const PHOTO_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/assets/photo.jpg");

/// Icon for a social profile.
pub(crate) fn social_icon(kind: SocialKind) -> &'static [u8] {
    match kind {
        SocialKind::CodeHost => GITHUB,
        SocialKind::ProfessionalNetwork => LINKEDIN,
        SocialKind::Microblog => X_LOGO,
    }
}
