/// Element id an in-page link points at, or `None` for links that leave the page
/// or name no fragment (`"#"`).
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}
