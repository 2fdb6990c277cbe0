use crate::state::data::Icon;

/// Display glyph for an icon
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Shield => "🛡",
        Icon::Truck => "🚚",
        Icon::Crown => "👑",
        Icon::Layers => "🧱",
        Icon::Settings => "⚙",
        Icon::Wrench => "🔧",
        Icon::MapPin => "📍",
        Icon::Phone => "📞",
        Icon::Mail => "✉",
        Icon::Message => "💬",
    }
}
