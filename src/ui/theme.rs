use ratatui::style::Color;

pub const CREAM: Color = Color::Rgb(0xf5, 0xef, 0xe6);
pub const CREAM_SHADE: Color = Color::Rgb(0xec, 0xe3, 0xd6);
pub const LAVENDER: Color = Color::Rgb(0xb0, 0x8b, 0xbb);
pub const MAROON: Color = Color::Rgb(0x9a, 0x33, 0x24);
pub const GOLD: Color = Color::Rgb(0xe1, 0xb0, 0x7e);
pub const INK: Color = Color::Rgb(0x2c, 0x2c, 0x2c);
pub const INK_MUTED: Color = Color::Rgb(0x6b, 0x6b, 0x6b);
pub const FOOTER_TEXT: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const CARD_BG: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PICTURE_BG: Color = Color::Rgb(0xfa, 0xf7, 0xf2);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BACKDROP: Color = Color::Rgb(0x2c, 0x2c, 0x2c);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Linear blend of two RGB colors; `amount` 0.0 keeps `base`, 1.0 gives `over`.
pub fn blend(base: Color, over: Color, amount: f32) -> Color {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (base, over) else {
        return if amount >= 0.5 { over } else { base };
    };
    let amount = amount.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * amount).round() as u8;
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}
