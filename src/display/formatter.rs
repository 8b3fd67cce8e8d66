//! Markdown terminal formatting using termimad

use termimad::MadSkin;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str, color: bool) {
    if color {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        print_plain(markdown);
    }
}

/// Loud red headings for the due list
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[0].set_fg(Red);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Yellow);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.bold.set_fg(Red);
    skin.bullet.set_fg(Cyan);
}

/// Print markdown without formatting, dropping heading markers
fn print_plain(markdown: &str) {
    println!("{}", strip_headings(markdown));
}

fn strip_headings(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| line.trim_start_matches('#').trim_start())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_headings() {
        assert_eq!(
            strip_headings("# URGENT REMINDERS\n## due\nplain"),
            "URGENT REMINDERS\ndue\nplain"
        );
    }

    #[test]
    fn test_customize_skin_no_panic() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
    }

    #[test]
    fn test_print_markdown_plain() {
        print_markdown("# Test\n\nHello **world**", false);
    }
}
