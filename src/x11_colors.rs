// Generated with `cargo run --bin create_colors -- color_names.txt`.

use crate::color::Color;

pub(crate) const X11_COLORS: &[(&str, Color)] = &[
    ("alice blue", Color::rgb(0xF0, 0xF8, 0xFF)),
    ("antique white", Color::rgb(0xFA, 0xEB, 0xD7)),
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("aquamarine", Color::rgb(0x7F, 0xFF, 0xD4)),
    ("azure", Color::rgb(0xF0, 0xFF, 0xFF)),
    ("beige", Color::rgb(0xF5, 0xF5, 0xDC)),
    ("bisque", Color::rgb(0xFF, 0xE4, 0xC4)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("blanched almond", Color::rgb(0xFF, 0xEB, 0xCD)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("blue violet", Color::rgb(0x8A, 0x2B, 0xE2)),
    ("brown", Color::rgb(0xA5, 0x2A, 0x2A)),
    ("burlywood", Color::rgb(0xDE, 0xB8, 0x87)),
    ("cadet blue", Color::rgb(0x5F, 0x9E, 0xA0)),
    ("chartreuse", Color::rgb(0x7F, 0xFF, 0x00)),
    ("chocolate", Color::rgb(0xD2, 0x69, 0x1E)),
    ("coral", Color::rgb(0xFF, 0x7F, 0x50)),
    ("cornflower blue", Color::rgb(0x64, 0x95, 0xED)),
    ("cornsilk", Color::rgb(0xFF, 0xF8, 0xDC)),
    ("crimson", Color::rgb(0xDC, 0x14, 0x3C)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("dark blue", Color::rgb(0x00, 0x00, 0x8B)),
    ("dark cyan", Color::rgb(0x00, 0x8B, 0x8B)),
    ("dark goldenrod", Color::rgb(0xB8, 0x86, 0x0B)),
    ("dark gray", Color::rgb(0xA9, 0xA9, 0xA9)),
    ("dark green", Color::rgb(0x00, 0x64, 0x00)),
    ("dark khaki", Color::rgb(0xBD, 0xB7, 0x6B)),
    ("dark magenta", Color::rgb(0x8B, 0x00, 0x8B)),
    ("dark olive green", Color::rgb(0x55, 0x6B, 0x2F)),
    ("dark orange", Color::rgb(0xFF, 0x8C, 0x00)),
    ("dark orchid", Color::rgb(0x99, 0x32, 0xCC)),
    ("dark red", Color::rgb(0x8B, 0x00, 0x00)),
    ("dark salmon", Color::rgb(0xE9, 0x96, 0x7A)),
    ("dark sea green", Color::rgb(0x8F, 0xBC, 0x8F)),
    ("dark slate blue", Color::rgb(0x48, 0x3D, 0x8B)),
    ("dark slate gray", Color::rgb(0x2F, 0x4F, 0x4F)),
    ("dark turquoise", Color::rgb(0x00, 0xCE, 0xD1)),
    ("dark violet", Color::rgb(0x94, 0x00, 0xD3)),
    ("deep pink", Color::rgb(0xFF, 0x14, 0x93)),
    ("deep sky blue", Color::rgb(0x00, 0xBF, 0xFF)),
    ("dim gray", Color::rgb(0x69, 0x69, 0x69)),
    ("dodger blue", Color::rgb(0x1E, 0x90, 0xFF)),
    ("firebrick", Color::rgb(0xB2, 0x22, 0x22)),
    ("floral white", Color::rgb(0xFF, 0xFA, 0xF0)),
    ("forest green", Color::rgb(0x22, 0x8B, 0x22)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("gainsboro", Color::rgb(0xDC, 0xDC, 0xDC)),
    ("ghost white", Color::rgb(0xF8, 0xF8, 0xFF)),
    ("gold", Color::rgb(0xFF, 0xD7, 0x00)),
    ("goldenrod", Color::rgb(0xDA, 0xA5, 0x20)),
    ("gray", Color::rgb(0xBE, 0xBE, 0xBE)),
    ("green", Color::rgb(0x00, 0xFF, 0x00)),
    ("green yellow", Color::rgb(0xAD, 0xFF, 0x2F)),
    ("honeydew", Color::rgb(0xF0, 0xFF, 0xF0)),
    ("hot pink", Color::rgb(0xFF, 0x69, 0xB4)),
    ("indian red", Color::rgb(0xCD, 0x5C, 0x5C)),
    ("indigo", Color::rgb(0x4B, 0x00, 0x82)),
    ("ivory", Color::rgb(0xFF, 0xFF, 0xF0)),
    ("khaki", Color::rgb(0xF0, 0xE6, 0x8C)),
    ("lavender", Color::rgb(0xE6, 0xE6, 0xFA)),
    ("lavender blush", Color::rgb(0xFF, 0xF0, 0xF5)),
    ("lawn green", Color::rgb(0x7C, 0xFC, 0x00)),
    ("lemon chiffon", Color::rgb(0xFF, 0xFA, 0xCD)),
    ("light blue", Color::rgb(0xAD, 0xD8, 0xE6)),
    ("light coral", Color::rgb(0xF0, 0x80, 0x80)),
    ("light cyan", Color::rgb(0xE0, 0xFF, 0xFF)),
    ("light goldenrod", Color::rgb(0xEE, 0xDD, 0x82)),
    ("light goldenrod yellow", Color::rgb(0xFA, 0xFA, 0xD2)),
    ("light gray", Color::rgb(0xD3, 0xD3, 0xD3)),
    ("light green", Color::rgb(0x90, 0xEE, 0x90)),
    ("light pink", Color::rgb(0xFF, 0xB6, 0xC1)),
    ("light salmon", Color::rgb(0xFF, 0xA0, 0x7A)),
    ("light sea green", Color::rgb(0x20, 0xB2, 0xAA)),
    ("light sky blue", Color::rgb(0x87, 0xCE, 0xFA)),
    ("light slate blue", Color::rgb(0x84, 0x70, 0xFF)),
    ("light slate gray", Color::rgb(0x77, 0x88, 0x99)),
    ("light steel blue", Color::rgb(0xB0, 0xC4, 0xDE)),
    ("light yellow", Color::rgb(0xFF, 0xFF, 0xE0)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("lime green", Color::rgb(0x32, 0xCD, 0x32)),
    ("linen", Color::rgb(0xFA, 0xF0, 0xE6)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("maroon", Color::rgb(0xB0, 0x30, 0x60)),
    ("medium aquamarine", Color::rgb(0x66, 0xCD, 0xAA)),
    ("medium blue", Color::rgb(0x00, 0x00, 0xCD)),
    ("medium orchid", Color::rgb(0xBA, 0x55, 0xD3)),
    ("medium purple", Color::rgb(0x93, 0x70, 0xDB)),
    ("medium sea green", Color::rgb(0x3C, 0xB3, 0x71)),
    ("medium slate blue", Color::rgb(0x7B, 0x68, 0xEE)),
    ("medium spring green", Color::rgb(0x00, 0xFA, 0x9A)),
    ("medium turquoise", Color::rgb(0x48, 0xD1, 0xCC)),
    ("medium violet red", Color::rgb(0xC7, 0x15, 0x85)),
    ("midnight blue", Color::rgb(0x19, 0x19, 0x70)),
    ("mint cream", Color::rgb(0xF5, 0xFF, 0xFA)),
    ("misty rose", Color::rgb(0xFF, 0xE4, 0xE1)),
    ("moccasin", Color::rgb(0xFF, 0xE4, 0xB5)),
    ("navajo white", Color::rgb(0xFF, 0xDE, 0xAD)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("navy blue", Color::rgb(0x00, 0x00, 0x80)),
    ("old lace", Color::rgb(0xFD, 0xF5, 0xE6)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("olive drab", Color::rgb(0x6B, 0x8E, 0x23)),
    ("orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("orange red", Color::rgb(0xFF, 0x45, 0x00)),
    ("orchid", Color::rgb(0xDA, 0x70, 0xD6)),
    ("pale goldenrod", Color::rgb(0xEE, 0xE8, 0xAA)),
    ("pale green", Color::rgb(0x98, 0xFB, 0x98)),
    ("pale turquoise", Color::rgb(0xAF, 0xEE, 0xEE)),
    ("pale violet red", Color::rgb(0xDB, 0x70, 0x93)),
    ("papaya whip", Color::rgb(0xFF, 0xEF, 0xD5)),
    ("peach puff", Color::rgb(0xFF, 0xDA, 0xB9)),
    ("peru", Color::rgb(0xCD, 0x85, 0x3F)),
    ("pink", Color::rgb(0xFF, 0xC0, 0xCB)),
    ("plum", Color::rgb(0xDD, 0xA0, 0xDD)),
    ("powder blue", Color::rgb(0xB0, 0xE0, 0xE6)),
    ("purple", Color::rgb(0xA0, 0x20, 0xF0)),
    ("rebecca purple", Color::rgb(0x66, 0x33, 0x99)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("rosy brown", Color::rgb(0xBC, 0x8F, 0x8F)),
    ("royal blue", Color::rgb(0x41, 0x69, 0xE1)),
    ("saddle brown", Color::rgb(0x8B, 0x45, 0x13)),
    ("salmon", Color::rgb(0xFA, 0x80, 0x72)),
    ("sandy brown", Color::rgb(0xF4, 0xA4, 0x60)),
    ("sea green", Color::rgb(0x2E, 0x8B, 0x57)),
    ("seashell", Color::rgb(0xFF, 0xF5, 0xEE)),
    ("sienna", Color::rgb(0xA0, 0x52, 0x2D)),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("sky blue", Color::rgb(0x87, 0xCE, 0xEB)),
    ("slate blue", Color::rgb(0x6A, 0x5A, 0xCD)),
    ("slate gray", Color::rgb(0x70, 0x80, 0x90)),
    ("snow", Color::rgb(0xFF, 0xFA, 0xFA)),
    ("spring green", Color::rgb(0x00, 0xFF, 0x7F)),
    ("steel blue", Color::rgb(0x46, 0x82, 0xB4)),
    ("tan", Color::rgb(0xD2, 0xB4, 0x8C)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("thistle", Color::rgb(0xD8, 0xBF, 0xD8)),
    ("tomato", Color::rgb(0xFF, 0x63, 0x47)),
    ("turquoise", Color::rgb(0x40, 0xE0, 0xD0)),
    ("violet", Color::rgb(0xEE, 0x82, 0xEE)),
    ("violet red", Color::rgb(0xD0, 0x20, 0x90)),
    ("wheat", Color::rgb(0xF5, 0xDE, 0xB3)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("white smoke", Color::rgb(0xF5, 0xF5, 0xF5)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("yellow green", Color::rgb(0x9A, 0xCD, 0x32)),
];
