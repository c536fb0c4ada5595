//! Night-sky ASCII banner with gradient (BETTER REST).
//! Uses figlet's bundled standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Midnight Blue (#191970).
const MIDNIGHT_BLUE: (u8, u8, u8) = (0x19, 0x19, 0x70);
/// Moon Lavender (#c8b6ff).
const MOON_LAVENDER: (u8, u8, u8) = (0xc8, 0xb6, 0xff);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// ASCII art for the title, or the plain title if figlet cannot render it.
fn render_title(title: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(title).map(|figure| figure.to_string()))
        .unwrap_or_else(|| title.to_string())
}

/// Prints the welcome banner: "Better Rest" in ASCII art with a gradient from
/// Midnight Blue to Moon Lavender, then the version.
pub fn print_welcome() {
    let mut out = stdout();
    let art = render_title("Better Rest");
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(MIDNIGHT_BLUE, MOON_LAVENDER, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: MOON_LAVENDER.0,
        g: MOON_LAVENDER.1,
        b: MOON_LAVENDER.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
