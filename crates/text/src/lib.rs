use serde::Serialize;

/// The section sign Minecraft clients expect in front of a legacy color code.
pub const COLOR_CHAR: char = '§';

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ColorCode {
    pub fn parse(code: char) -> Option<ColorCode> {
        Some(match code.to_ascii_lowercase() {
            '0' => ColorCode::Black,
            '1' => ColorCode::DarkBlue,
            '2' => ColorCode::DarkGreen,
            '3' => ColorCode::DarkAqua,
            '4' => ColorCode::DarkRed,
            '5' => ColorCode::DarkPurple,
            '6' => ColorCode::Gold,
            '7' => ColorCode::Gray,
            '8' => ColorCode::DarkGray,
            '9' => ColorCode::Blue,
            'a' => ColorCode::Green,
            'b' => ColorCode::Aqua,
            'c' => ColorCode::Red,
            'd' => ColorCode::LightPurple,
            'e' => ColorCode::Yellow,
            'f' => ColorCode::White,
            'k' => ColorCode::Obfuscated,
            'l' => ColorCode::Bold,
            'm' => ColorCode::Strikethrough,
            'n' => ColorCode::Underline,
            'o' => ColorCode::Italic,
            'r' => ColorCode::Reset,
            _ => return None,
        })
    }
}

/// Translates `&`-style color codes into the `§` form the client renders.
/// An `&` followed by anything that is not a valid code passes through as-is.
pub fn colorize(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&'
            && let Some(&code) = chars.peek()
            && ColorCode::parse(code).is_some()
        {
            out.push(COLOR_CHAR);
            out.push(code.to_ascii_lowercase());
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Removes `§`-style codes, leaving plain text (e.g. for console output).
pub fn strip_codes(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Substitutes each `{}` in `template` with the next value from `args`.
/// Placeholders beyond the supplied values are left untouched.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(index) = rest.find("{}") {
        match args.next() {
            Some(arg) => {
                out.push_str(&rest[..index]);
                out.push_str(arg);
                rest = &rest[index + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_translates_codes() {
        assert_eq!(colorize("&cInvalid &eusage"), "§cInvalid §eusage");
    }

    #[test]
    fn colorize_lowercases_uppercase_codes() {
        assert_eq!(colorize("&CBoom"), "§cBoom");
    }

    #[test]
    fn colorize_ignores_invalid_codes() {
        assert_eq!(colorize("5 & 6 &z"), "5 & 6 &z");
        assert_eq!(colorize("trailing &"), "trailing &");
    }

    #[test]
    fn strip_removes_translated_codes() {
        assert_eq!(strip_codes("§cInvalid §eusage"), "Invalid usage");
    }

    #[test]
    fn interpolate_fills_placeholders_in_order() {
        assert_eq!(
            interpolate("Try /{} {} {}.", &["sw", "heal", "<player>"]),
            "Try /sw heal <player>."
        );
    }

    #[test]
    fn interpolate_leaves_extra_placeholders() {
        assert_eq!(interpolate("{} and {}", &["one"]), "one and {}");
        assert_eq!(interpolate("no placeholders", &[]), "no placeholders");
    }
}
