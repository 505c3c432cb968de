//! HTML deck renderer.

use super::options::RenderOptions;
use super::theme::Theme;
use crate::model::SlideRecord;

/// Shared layout CSS, layered between the theme block and any custom CSS.
const BASE_CSS: &str = r#"
.glass-panel {
    background: var(--glass-bg);
    border: 1px solid var(--border-color);
    backdrop-filter: blur(5px);
    padding: 2rem;
    border-radius: 8px;
}

.split-layout {
    display: flex;
    gap: 2rem;
    align-items: center;
}

.image-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
    align-items: center;
}

.image-grid .grid-item img {
    max-height: 40vh;
    max-width: 100%;
}

.reveal ul li {
    margin-bottom: 1rem;
    padding-left: 1rem;
}

/* Home Button */
.home-button {
    position: fixed;
    bottom: 20px;
    left: 20px;
    z-index: 1000;
    padding: 10px 20px;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid var(--accent);
    color: var(--accent);
    text-decoration: none;
    font-size: 14px;
    border-radius: 4px;
    transition: all 0.3s ease;
    text-transform: uppercase;
    backdrop-filter: blur(5px);
    font-weight: bold;
}

.home-button:hover {
    background: var(--accent);
    color: var(--bg-dark);
    box-shadow: 0 0 15px var(--accent);
}
"#;

/// The layout variant a slide renders with.
///
/// Selected independently per slide from the shape of its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Exactly one image, no text: the image fills the slide background.
    FullBleed,
    /// Two or more images, no text: one grid cell per image.
    ImageGrid,
    /// Text only: first line as heading, rest as revealed bullets.
    TextOnly,
    /// Text and images: image pane beside a bullet panel.
    Split,
    /// Neither text nor images: a generic "Slide N" placeholder.
    Placeholder,
}

/// Select the layout for one slide record.
pub fn layout_for(slide: &SlideRecord) -> SlideLayout {
    match (slide.has_images(), slide.has_content()) {
        (true, false) if slide.images.len() == 1 => SlideLayout::FullBleed,
        (true, false) => SlideLayout::ImageGrid,
        (false, true) => SlideLayout::TextOnly,
        (true, true) => SlideLayout::Split,
        (false, false) => SlideLayout::Placeholder,
    }
}

/// Render slide records into one self-contained HTML document.
///
/// The document references the Reveal.js runtime and base stylesheet by
/// URL (`options.runtime_base`) and embeds everything else inline.
pub fn to_html(slides: &[SlideRecord], options: &RenderOptions) -> String {
    let mut sections = String::new();
    for (i, slide) in slides.iter().enumerate() {
        sections.push_str(&render_slide(slide, i + 1, options.theme));
    }

    let overlay = options.theme.overlay_html().unwrap_or("");
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let title = escape_html(&options.title);

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="{base}/reset.min.css">
    <link rel="stylesheet" href="{base}/reveal.min.css">
    <link rel="stylesheet" href="{base}/theme/{base_theme}.min.css">

    <style>
        {theme_css}
        {base_css}
        {custom_css}
    </style>
</head>
<body>
    {overlay}
    <a href="index.html" class="home-button">Esc: Home</a>

    <div class="reveal">
        <div class="slides">
            <section>
                <h1 class="r-fit-text">{title}</h1>
            </section>
            {sections}
        </div>
    </div>
    <script src="{base}/reveal.min.js"></script>
    <script>
        Reveal.initialize({{
            hash: true,
            transition: 'slide',
            backgroundTransition: 'fade',
        }});
    </script>
</body>
</html>
"#,
        title = title,
        base = options.runtime_base,
        base_theme = options.theme.base_stylesheet(),
        theme_css = options.theme.css(),
        base_css = BASE_CSS,
        custom_css = custom_css,
        overlay = overlay,
        sections = sections,
    )
}

/// Render one slide section. `number` is 1-based.
fn render_slide(slide: &SlideRecord, number: usize, theme: Theme) -> String {
    match layout_for(slide) {
        SlideLayout::FullBleed => {
            let img = escape_html(&slide.images[0]);
            format!(
                "<section data-background-image=\"{}\" data-background-size=\"contain\" \
                 data-background-color=\"{}\"></section>\n",
                img,
                theme.full_bleed_background()
            )
        }
        SlideLayout::ImageGrid => {
            let mut cells = String::new();
            for img in &slide.images {
                cells.push_str(&format!(
                    "<div class=\"grid-item\"><img src=\"{}\"></div>",
                    escape_html(img)
                ));
            }
            format!(
                "<section>\n<div class=\"image-grid\">{}</div>\n</section>\n",
                cells
            )
        }
        SlideLayout::TextOnly => {
            let title = escape_html(&slide.content[0]);
            let mut items = String::new();
            for line in &slide.content[1..] {
                items.push_str(&format!(
                    "<li class=\"fragment fade-up\">{}</li>",
                    escape_html(line)
                ));
            }
            format!(
                "<section>\n<h2 class=\"r-fit-text\">{}</h2>\n\
                 <div class=\"glass-panel\">\n\
                 <ul style=\"list-style: none;\">{}</ul>\n\
                 </div>\n</section>\n",
                title, items
            )
        }
        SlideLayout::Split => {
            let title = escape_html(&slide.content[0]);
            let mut items = String::new();
            for line in &slide.content[1..] {
                items.push_str(&format!("<li>{}</li>", escape_html(line)));
            }
            format!(
                "<section>\n\
                 <h3 style=\"color: var(--accent); margin-bottom: 20px;\">{}</h3>\n\
                 <div class=\"split-layout\">\n\
                 <div style=\"flex: 1;\">\n{}</div>\n\
                 <div style=\"flex: 1;\" class=\"glass-panel\">\n<ul>{}</ul>\n</div>\n\
                 </div>\n</section>\n",
                title,
                render_split_visual(&slide.images),
                items
            )
        }
        SlideLayout::Placeholder => format!(
            "<section>\n<h2>Slide {}</h2>\n\
             <p class=\"text-muted\">[Content/Image Slide]</p>\n</section>\n",
            number
        ),
    }
}

/// Image pane for the split layout: one image, or a 2-column sub-grid.
fn render_split_visual(images: &[String]) -> String {
    if images.len() == 1 {
        return format!(
            "<img src=\"{}\" style=\"border-radius: 12px; \
             box-shadow: 0 0 20px rgba(0,0,0,0.5); max-height: 60vh;\">\n",
            escape_html(&images[0])
        );
    }

    let mut cells = String::new();
    for img in images {
        cells.push_str(&format!(
            "<div style=\"text-align: center;\"><img src=\"{}\" \
             style=\"border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.3); \
             max-height: 25vh; max-width: 100%;\"></div>",
            escape_html(img)
        ));
    }
    format!(
        "<div style=\"display: grid; grid-template-columns: repeat(2, 1fr); \
         gap: 10px; max-height: 60vh; overflow-y: auto;\">{}</div>\n",
        cells
    )
}

/// Escape text for interpolation into HTML content or attribute values.
///
/// Extracted text arrives XML-unescaped, so raw `&`, `<`, and quotes would
/// otherwise leak into the markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &[&str], images: &[&str]) -> SlideRecord {
        SlideRecord::with_parts(content.to_vec(), images.to_vec())
    }

    #[test]
    fn test_layout_selection() {
        assert_eq!(
            layout_for(&record(&[], &["images/a.png"])),
            SlideLayout::FullBleed
        );
        assert_eq!(
            layout_for(&record(&[], &["images/a.png", "images/b.png"])),
            SlideLayout::ImageGrid
        );
        assert_eq!(
            layout_for(&record(&["Title", "Point 1"], &[])),
            SlideLayout::TextOnly
        );
        assert_eq!(
            layout_for(&record(&["Title"], &["images/a.png"])),
            SlideLayout::Split
        );
        assert_eq!(layout_for(&record(&[], &[])), SlideLayout::Placeholder);
    }

    #[test]
    fn test_text_only_slide_markup() {
        let html = render_slide(&record(&["Title", "Point 1"], &[]), 1, Theme::Cyberpunk);
        assert!(html.contains("<h2 class=\"r-fit-text\">Title</h2>"));
        assert!(html.contains("<li class=\"fragment fade-up\">Point 1</li>"));
    }

    #[test]
    fn test_full_bleed_slide_markup() {
        let html = render_slide(&record(&[], &["images/a.png"]), 1, Theme::Cyberpunk);
        assert!(html.contains("data-background-image=\"images/a.png\""));
        assert!(html.contains("data-background-color=\"var(--bg-dark)\""));
    }

    #[test]
    fn test_full_bleed_christmas_background() {
        let html = render_slide(&record(&[], &["images/a.png"]), 1, Theme::Christmas);
        assert!(html.contains("data-background-color=\"transparent\""));
    }

    #[test]
    fn test_grid_has_cell_per_image() {
        let html = render_slide(
            &record(&[], &["images/a.png", "images/b.png", "images/c.png"]),
            1,
            Theme::Blue,
        );
        assert_eq!(html.matches("grid-item").count(), 3);
    }

    #[test]
    fn test_split_single_and_multi_image() {
        let single = render_slide(&record(&["T", "b"], &["images/a.png"]), 1, Theme::Blue);
        assert!(single.contains("max-height: 60vh"));
        assert!(!single.contains("grid-template-columns"));

        let multi = render_slide(
            &record(&["T", "b"], &["images/a.png", "images/b.png"]),
            1,
            Theme::Blue,
        );
        assert!(multi.contains("grid-template-columns: repeat(2, 1fr)"));
    }

    #[test]
    fn test_placeholder_labels_slide_number() {
        let html = render_slide(&record(&[], &[]), 7, Theme::Blue);
        assert!(html.contains("<h2>Slide 7</h2>"));
    }

    #[test]
    fn test_document_structure() {
        let slides = vec![record(&["Hello World"], &[]), record(&[], &["images/a.png"])];
        let options = RenderOptions::new().with_title("Demo Deck");
        let html = to_html(&slides, &options);

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Demo Deck</title>"));
        assert!(html.contains("<h1 class=\"r-fit-text\">Demo Deck</h1>"));
        assert!(html.contains("reveal.min.js"));
        assert!(html.contains("Reveal.initialize"));
        assert!(html.contains("theme/black.min.css"));
        // One text-only section and one full-bleed section, in order.
        let text_pos = html.find("Hello World").unwrap();
        let img_pos = html.find("data-background-image").unwrap();
        assert!(text_pos < img_pos);
    }

    #[test]
    fn test_custom_css_and_runtime_base() {
        let options = RenderOptions::new()
            .with_custom_css(".reveal h2 { color: #39ff14; }")
            .with_runtime_base("vendor/reveal");
        let html = to_html(&[], &options);
        assert!(html.contains(".reveal h2 { color: #39ff14; }"));
        assert!(html.contains("href=\"vendor/reveal/reset.min.css\""));
    }

    #[test]
    fn test_christmas_overlay_injected() {
        let options = RenderOptions::new().with_theme(Theme::Christmas);
        let html = to_html(&[], &options);
        assert!(html.contains("snow-toggle"));
        assert!(html.contains("theme/white.min.css"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_slide(
            &record(&["A < B", "R&D \"plan\""], &[]),
            1,
            Theme::Cyberpunk,
        );
        assert!(html.contains("A &lt; B"));
        assert!(html.contains("R&amp;D &quot;plan&quot;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let slides = vec![record(&["Title", "Point"], &["images/a.png"])];
        let options = RenderOptions::new().with_theme(Theme::Dracula);
        assert_eq!(to_html(&slides, &options), to_html(&slides, &options));
    }
}
