use css_color_parser::Color;

/// Parse a CSS color string into normalized RGBA components
pub fn parse_css_color(value: &str) -> Option<[f32; 4]> {
    value.trim().parse::<Color>().ok().map(|color| {
        [
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]
    })
}

pub fn is_css_color(value: &str) -> bool {
    parse_css_color(value).is_some()
}
