//! Translation between keysym names used in configuration files and xkb keysym values.
use crate::display_event::Keysym;

const NAMED: &[(&str, Keysym)] = &[
    ("space", 0x0020),
    ("exclam", 0x0021),
    ("quotedbl", 0x0022),
    ("numbersign", 0x0023),
    ("dollar", 0x0024),
    ("percent", 0x0025),
    ("ampersand", 0x0026),
    ("apostrophe", 0x0027),
    ("parenleft", 0x0028),
    ("parenright", 0x0029),
    ("asterisk", 0x002a),
    ("plus", 0x002b),
    ("comma", 0x002c),
    ("minus", 0x002d),
    ("period", 0x002e),
    ("slash", 0x002f),
    ("colon", 0x003a),
    ("semicolon", 0x003b),
    ("less", 0x003c),
    ("equal", 0x003d),
    ("greater", 0x003e),
    ("question", 0x003f),
    ("at", 0x0040),
    ("bracketleft", 0x005b),
    ("backslash", 0x005c),
    ("bracketright", 0x005d),
    ("asciicircum", 0x005e),
    ("underscore", 0x005f),
    ("grave", 0x0060),
    ("braceleft", 0x007b),
    ("bar", 0x007c),
    ("braceright", 0x007d),
    ("asciitilde", 0x007e),
    ("BackSpace", 0xff08),
    ("Tab", 0xff09),
    ("Return", 0xff0d),
    ("Pause", 0xff13),
    ("Escape", 0xff1b),
    ("Delete", 0xffff),
    ("Home", 0xff50),
    ("Left", 0xff51),
    ("Up", 0xff52),
    ("Right", 0xff53),
    ("Down", 0xff54),
    ("Prior", 0xff55),
    ("Next", 0xff56),
    ("End", 0xff57),
    ("Print", 0xff61),
    ("Insert", 0xff63),
];

const F1: Keysym = 0xffbe;
const SWITCH_VT_1: Keysym = 0x1008_fe01;

/// Look up the keysym for a name like `Return`, `j`, `Q`, `F5` or `XF86Switch_VT_3`.
#[must_use]
pub fn into_keysym(name: &str) -> Option<Keysym> {
    if let Some(&(_, sym)) = NAMED.iter().find(|(n, _)| *n == name) {
        return Some(sym);
    }
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        // Latin-1 keysyms equal their code point.
        if c.is_ascii_alphanumeric() {
            return Some(c as Keysym);
        }
    }
    if let Some(n) = name.strip_prefix("XF86Switch_VT_") {
        return numbered(n, 12).map(|n| SWITCH_VT_1 + n - 1);
    }
    if let Some(n) = name.strip_prefix('F') {
        return numbered(n, 35).map(|n| F1 + n - 1);
    }
    None
}

fn numbered(digits: &str, max: Keysym) -> Option<Keysym> {
    digits.parse::<Keysym>().ok().filter(|n| (1..=max).contains(n))
}
