#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- The site controllers only toggle classes (`active`, `scrolled`, `visible`,
  `menu-open`, ...); what those classes *do* lives in `assets/main.css`.
  If a refactor drops one of these rules, the page silently stops reacting
  (menus never open, panels never expand, reveals stay invisible).

How it works:
- Embed the stylesheet with `include_str!` and assert presence of each
  selector the controllers depend on.
- If you intentionally rename a state class, update the controller, the
  markup in `site/src/views/`, and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// State selectors toggled at runtime by the controllers.
const REQUIRED_SELECTORS: &[&str] = &[
    // Navigation
    ".navbar.scrolled",
    ".nav-link.active",
    "body.menu-open",
    ".hamburger.active",
    ".mobile-menu.active",
    ".language-menu.active",
    // Reveal + lazy images
    ".fade-in {",
    ".fade-in.visible",
    "img.lazy",
    // Rooms
    ".room-details-expanded {",
    ".room-details-expanded.active",
    ".thumbnail.active",
    // Notifications (inline styles reference this animation)
    "@keyframes slideInRight",
    ".notification-close",
    // Floating widget
    ".whatsapp-float",
    ".whatsapp-tooltip",
    // Responsive block
    "@media (max-width: 768px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Theme is missing {} selector(s):\n  {}\n\nUpdate web/assets/main.css or REQUIRED_SELECTORS.",
        missing.len(),
        missing.join("\n  ")
    );
}

#[test]
fn theme_is_not_empty() {
    assert!(THEME_CSS.len() > 1_000, "main.css looks truncated");
}
