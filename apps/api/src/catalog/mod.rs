// Static design catalogs: color themes, fonts, page layouts and templates.
// Every lookup here is total: an id the catalog does not know resolves to a
// documented default, because selections come from saved state that may be
// older than the catalog.

pub mod colors;
pub mod fonts;
pub mod layouts;
pub mod templates;

pub use colors::{get_color_theme, ColorTheme};
pub use fonts::{find_font, resolve_font_stack, FontOption, DEFAULT_FONT_ID, FONTS};
pub use layouts::{find_layout, LayoutOption, LayoutStyle, DEFAULT_LAYOUT_ID, LAYOUTS};
pub use templates::{
    find_template, resolve_primary_color, TemplateOption, DEFAULT_TEMPLATE_ID, TEMPLATES,
};
