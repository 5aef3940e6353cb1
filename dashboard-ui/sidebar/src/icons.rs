//! Embedded icon set resolved by string identifier.

/// Brand logo shown in the sidebar header.
pub const LOGO: &[u8] = include_bytes!("../assets/logo/logo.svg");
/// Glyph of the collapse/expand toggle.
pub const TOGGLE: &[u8] = include_bytes!("../assets/svg/angle-right.svg");

const HOUSE: &[u8] = include_bytes!("../assets/svg/house.svg");
const CHART_LINE: &[u8] = include_bytes!("../assets/svg/chart-line.svg");
const CHART_COLUMN: &[u8] = include_bytes!("../assets/svg/chart-column.svg");
const WALLET: &[u8] = include_bytes!("../assets/svg/wallet.svg");
const CHART_PIE: &[u8] = include_bytes!("../assets/svg/chart-pie.svg");
const ENVELOPE: &[u8] = include_bytes!("../assets/svg/envelope.svg");
const SLIDERS: &[u8] = include_bytes!("../assets/svg/sliders.svg");
const PHONE_VOLUME: &[u8] = include_bytes!("../assets/svg/phone-volume.svg");

const ICONS: [(&str, &[u8]); 9] = [
    ("house", HOUSE),
    ("chart-line", CHART_LINE),
    ("chart-column", CHART_COLUMN),
    ("wallet", WALLET),
    ("chart-pie", CHART_PIE),
    ("envelope", ENVELOPE),
    ("sliders", SLIDERS),
    ("phone-volume", PHONE_VOLUME),
    ("angle-right", TOGGLE),
];

/// Reduce an icon identifier to its glyph name.
///
/// Style prefixes are dropped: `"fas-solid fa-house"`, `"fa-house"` and
/// `"house"` all name the same glyph.
pub fn normalize(identifier: &str) -> &str {
    let last = identifier.split_whitespace().last().unwrap_or_default();
    last.strip_prefix("fa-").unwrap_or(last)
}

/// Return the SVG bytes for an identifier, or `None` when it is unknown.
pub fn resolve(identifier: &str) -> Option<&'static [u8]> {
    let name = normalize(identifier);
    let found = ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, bytes)| *bytes);

    if found.is_none() {
        log::debug!("icon `{identifier}` is not in the icon set");
    }

    found
}

#[cfg(test)]
mod tests {
    use super::{normalize, resolve};
    use crate::route::all_routes;

    #[test]
    fn given_prefixed_identifiers_when_normalized_then_glyph_name_remains() {
        assert_eq!(normalize("fas-solid fa-house"), "house");
        assert_eq!(normalize("fa-wallet"), "wallet");
        assert_eq!(normalize("wallet"), "wallet");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn given_route_table_when_icons_resolved_then_every_route_has_a_glyph() {
        for route in all_routes() {
            assert!(
                resolve(route.icon).is_some(),
                "missing icon for {}",
                route.title
            );
        }
    }

    #[test]
    fn given_unknown_identifier_when_resolved_then_none_is_returned() {
        assert!(resolve("rocket").is_none());
        assert!(resolve("").is_none());
    }
}
