//! # Text
//!
//! Localization seam used for artifact names and descriptions.

/// Translation and formatting service.
///
/// Generators never build user-facing text directly; they look keys up
/// through [`Localizer::localize`] and splice them with
/// [`Localizer::format`], so a translated catalog can be dropped in.
pub trait Localizer {
    /// Returns the translation of `key`.
    fn localize(&self, key: &str) -> String;

    /// Fills a printf-style template.
    ///
    /// `%s` consumes arguments in order, `%N$s` picks the N-th argument
    /// (1-based) and `%%` is a literal percent sign. Missing arguments
    /// expand to nothing.
    fn format(&self, template: &str, args: &[&str]) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut next_arg = 0;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            match chars.peek().copied() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some('s') => {
                    chars.next();
                    if let Some(arg) = args.get(next_arg) {
                        out.push_str(arg);
                    }
                    next_arg += 1;
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut digits = String::new();
                    while let Some(&d) = chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        digits.push(d);
                        chars.next();
                    }
                    if chars.peek() == Some(&'$') {
                        chars.next();
                        if chars.peek() == Some(&'s') {
                            chars.next();
                        }
                        let position: usize = digits.parse().unwrap_or(0);
                        if let Some(arg) = position.checked_sub(1).and_then(|i| args.get(i)) {
                            out.push_str(arg);
                        }
                    } else {
                        out.push('%');
                        out.push_str(&digits);
                    }
                }
                _ => out.push('%'),
            }
        }

        out
    }
}

/// Identity localizer: every key is its own English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishText;

impl Localizer for EnglishText {
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}
