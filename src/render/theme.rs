//! Deck themes.
//!
//! Each theme contributes a CSS custom-property block layered over one of
//! the stock Reveal.js base stylesheets. Christmas additionally carries an
//! animated snow overlay with a toggle button.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CYBERPUNK_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&family=Rajdhani:wght@300;500;700&display=swap');
:root { --accent: #00f3ff; --accent-2: #bc13fe; --bg-dark: #050a14; --glass-bg: rgba(10, 20, 40, 0.85); --border-color: rgba(0, 243, 255, 0.3); }
.reveal { font-family: 'Rajdhani', sans-serif; background-color: var(--bg-dark); color: #d1d5db; }
.reveal h1, .reveal h2, .reveal h3 { font-family: 'Orbitron', sans-serif; text-transform: uppercase; color: var(--accent); text-shadow: 0 0 10px var(--accent); }
.reveal ul li { border-left: 2px solid var(--accent-2); }
body::before { content: " "; display: block; position: absolute; top: 0; left: 0; bottom: 0; right: 0; background: linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%), linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06)); z-index: 2; background-size: 100% 2px, 3px 100%; pointer-events: none; }
"#;

const BLUE_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&display=swap');
:root { --accent: #3b82f6; --accent-2: #2563eb; --bg-dark: #1e293b; --glass-bg: rgba(30, 41, 59, 0.9); --border-color: rgba(59, 130, 246, 0.3); }
.reveal { font-family: 'Inter', sans-serif; background-color: var(--bg-dark); color: #f8fafc; }
.reveal h1, .reveal h2, .reveal h3 { font-family: 'Inter', sans-serif; font-weight: 800; color: var(--accent); }
.reveal ul li { border-left: 4px solid var(--accent); }
"#;

const LIGHT_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap');
:root { --accent: #2563eb; --accent-2: #475569; --bg-dark: #ffffff; --glass-bg: rgba(241, 245, 249, 0.9); --border-color: #cbd5e1; }
.reveal { font-family: 'Roboto', sans-serif; background-color: var(--bg-dark); color: #1e293b; }
.reveal h1, .reveal h2, .reveal h3 { font-family: 'Roboto', sans-serif; color: #0f172a; }
.glass-panel { background: #f8fafc !important; border: 1px solid #e2e8f0 !important; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1) !important; color: #334155; }
.reveal ul li { border-left: 3px solid var(--accent); color: #334155; }
.home-button { color: #475569 !important; border-color: #cbd5e1 !important; background: #f1f5f9 !important; }
.home-button:hover { background: #e2e8f0 !important; color: #1e293b !important; }
"#;

const BLUEPRINT_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Share+Tech+Mono&display=swap');
:root { --accent: #60a5fa; --accent-2: #93c5fd; --bg-dark: #172554; --glass-bg: rgba(23, 37, 84, 0.8); --border-color: #60a5fa; }
.reveal { font-family: 'Share+Tech+Mono', monospace; background-color: var(--bg-dark); color: #dbeafe; background-image: radial-gradient(#60a5fa 1px, transparent 1px); background-size: 20px 20px; }
.reveal h1, .reveal h2, .reveal h3 { font-family: 'Share+Tech+Mono', monospace; color: var(--accent); text-transform: uppercase; border-bottom: 2px solid var(--accent); display: inline-block; }
.glass-panel { border: 2px solid var(--accent) !important; border-radius: 0 !important; box-shadow: none !important; background: rgba(30, 58, 138, 0.9) !important; }
.reveal ul li { list-style-type: square; border-left: none; }
"#;

const DRACULA_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Fira+Code:wght@400;600&display=swap');
:root { --accent: #ff79c6; --accent-2: #bd93f9; --bg-dark: #282a36; --glass-bg: rgba(68, 71, 90, 0.9); --border-color: #6272a4; }
.reveal { font-family: 'Fira Code', monospace; background-color: var(--bg-dark); color: #f8f8f2; }
.reveal h1, .reveal h2, .reveal h3 { font-family: 'Fira Code', monospace; color: var(--accent); }
.glass-panel { background: var(--glass-bg) !important; border: 1px solid var(--border-color) !important; }
.reveal ul li { border-left: 2px solid var(--accent-2); }
"#;

const CHRISTMAS_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Mountains+of+Christmas:wght@400;700&family=Lato:wght@400;700&display=swap');
:root { --accent: #ff0000; --accent-2: #00ff00; --bg-dark: #0f172a; --glass-bg: rgba(255, 255, 255, 0.95); --border-color: #ff0000; }
.reveal { font-family: 'Lato', sans-serif; color: #1e293b; }
.reveal h1, .reveal h2, .reveal h3 { font-family: 'Mountains of Christmas', cursive; color: #d60000; text-shadow: 2px 2px 4px rgba(255, 255, 255, 0.8); }
.glass-panel { background: var(--glass-bg) !important; border: 2px solid #d60000 !important; box-shadow: 0 0 15px rgba(255, 0, 0, 0.3) !important; border-radius: 16px !important; color: #0f172a; }
.reveal ul li { border-left: 4px solid #008000; padding-left: 10px; color: #0f172a; }

/* Snow Effect */
.snow-container { position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 1; overflow: hidden; }
.snow { position: absolute; top: 0; left: 0; right: 0; bottom: 0; background-image: radial-gradient(4px 4px at 50% 50%, white, transparent), radial-gradient(6px 6px at 100% 50%, white, transparent), radial-gradient(3px 3px at 50% 100%, white, transparent); background-size: 200px 200px; animation: snow 10s linear infinite; opacity: 0.8; }
@keyframes snow { 0% { background-position: 0px 0px, 0px 0px, 0px 0px; } 100% { background-position: 500px 1000px, 400px 400px, 300px 300px; } }
"#;

const CHRISTMAS_OVERLAY: &str = r#"
<div id="snow-layer" class="snow-container"><div class="snow"></div></div>
<div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: url('christmas_bg.png') no-repeat center center fixed; background-size: cover; z-index: -1;"></div>
<button id="snow-toggle" style="position: fixed; top: 20px; right: 20px; z-index: 1001; background: transparent; border: none; font-size: 24px; cursor: pointer; opacity: 0.7; transition: opacity 0.3s;" title="Toggle Snow">&#10052;&#65039;</button>
<script>
    document.getElementById('snow-toggle').addEventListener('click', function() {
        var snow = document.getElementById('snow-layer');
        if (snow.style.opacity === '0') {
            snow.style.opacity = '1';
            this.style.opacity = '0.7';
        } else {
            snow.style.opacity = '0';
            this.style.opacity = '0.3';
        }
    });
    document.getElementById('snow-toggle').addEventListener('mouseenter', function() {
        this.style.opacity = '1';
    });
    document.getElementById('snow-toggle').addEventListener('mouseleave', function() {
        if (document.getElementById('snow-layer').style.opacity !== '0') {
            this.style.opacity = '0.7';
        } else {
            this.style.opacity = '0.3';
        }
    });
</script>
"#;

/// A deck theme from the fixed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Neon scanline look (the default).
    #[default]
    Cyberpunk,
    /// Corporate blue on slate.
    Blue,
    /// Light background, dark text.
    Light,
    /// Monospace grid-paper look.
    Blueprint,
    /// Dracula palette.
    Dracula,
    /// Festive overlay with animated snow.
    Christmas,
}

impl Theme {
    /// Every known theme, in declaration order.
    pub const ALL: [Theme; 6] = [
        Theme::Cyberpunk,
        Theme::Blue,
        Theme::Light,
        Theme::Blueprint,
        Theme::Dracula,
        Theme::Christmas,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => "cyberpunk",
            Theme::Blue => "blue",
            Theme::Light => "light",
            Theme::Blueprint => "blueprint",
            Theme::Dracula => "dracula",
            Theme::Christmas => "christmas",
        }
    }

    /// Resolve a name, falling back to the default theme for anything
    /// outside the known set.
    pub fn from_name(name: &str) -> Theme {
        name.parse().unwrap_or_default()
    }

    /// The theme's CSS custom-property block.
    pub fn css(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => CYBERPUNK_CSS,
            Theme::Blue => BLUE_CSS,
            Theme::Light => LIGHT_CSS,
            Theme::Blueprint => BLUEPRINT_CSS,
            Theme::Dracula => DRACULA_CSS,
            Theme::Christmas => CHRISTMAS_CSS,
        }
    }

    /// Stock Reveal.js stylesheet the theme layers over.
    pub fn base_stylesheet(&self) -> &'static str {
        match self {
            Theme::Light | Theme::Christmas => "white",
            _ => "black",
        }
    }

    /// Extra markup injected at the top of the body, if the theme has any.
    pub fn overlay_html(&self) -> Option<&'static str> {
        match self {
            Theme::Christmas => Some(CHRISTMAS_OVERLAY),
            _ => None,
        }
    }

    /// Background color behind full-bleed image slides.
    pub fn full_bleed_background(&self) -> &'static str {
        match self {
            // Let the fixed background image show through.
            Theme::Christmas => "transparent",
            _ => "var(--bg-dark)",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyberpunk" => Ok(Theme::Cyberpunk),
            "blue" => Ok(Theme::Blue),
            "light" => Ok(Theme::Light),
            "blueprint" => Ok(Theme::Blueprint),
            "dracula" => Ok(Theme::Dracula),
            "christmas" => Ok(Theme::Christmas),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}
