/// Window icon shown by the platform shell.
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../assets/logo/logo-small.png");
