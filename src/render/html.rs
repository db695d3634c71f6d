// SPDX-License-Identifier: MPL-2.0
//! Complete HTML documents.
//!
//! Documents are written through a `quick-xml` writer so every text node and
//! attribute value is escaped.

use super::metadata::PageMetadata;
use crate::domain::Locale;
use crate::error::{Error, Result};
use crate::i18n::{MessageKey, Translator};
use crate::routing;
use crate::ui::counter_demo::TITLE_BAR_LABEL;
use crate::ui::hero::BADGE_LABEL;
use crate::ui::theming::{to_css_hex, ColorScheme, ThemeMode};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Everything needed to render one localized page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub translator: Translator<'a>,
    /// Pathname below the locale segment (`/` for the home page).
    pub pathname: &'a str,
    pub theme_mode: ThemeMode,
    /// Counter value rendered into the demo card.
    pub counter: i64,
    /// Origin for canonical links, without trailing slash.
    pub base_url: &'a str,
    pub docs_url: &'a str,
    pub repository_url: &'a str,
}

type Attrs<'a> = &'a [(&'a str, &'a str)];

/// Thin wrapper over the `quick-xml` writer with HTML-shaped helpers.
struct HtmlWriter {
    writer: Writer<Vec<u8>>,
}

impl HtmlWriter {
    fn new() -> Result<Self> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
        Ok(Self { writer })
    }

    fn open(&mut self, tag: &str, attrs: Attrs<'_>) -> Result<()> {
        let start = BytesStart::new(tag).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// Void element (`<meta>`, `<link>`).
    fn void(&mut self, tag: &str, attrs: Attrs<'_>) -> Result<()> {
        let start = BytesStart::new(tag).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<tag attrs>text</tag>`.
    fn element(&mut self, tag: &str, attrs: Attrs<'_>, text: &str) -> Result<()> {
        self.open(tag, attrs)?;
        self.text(text)?;
        self.close(tag)
    }

    /// Raw CSS; `style` content is not escaped by browsers, so it must not
    /// contain markup.
    fn style(&mut self, css: &str) -> Result<()> {
        self.open("style", &[])?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(css)))?;
        self.close("style")
    }

    /// Inline script; same constraint as [`HtmlWriter::style`].
    fn script(&mut self, js: &str) -> Result<()> {
        self.open("script", &[])?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(js)))?;
        self.close("script")
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| Error::Render(e.to_string()))
    }
}

/// Client-side behavior of the exported page: the theme toggle flips
/// `data-color-scheme` on the root element, the counter buttons update the
/// `<output data-counter>` value. State lives for the page view only.
const PAGE_SCRIPT: &str = r#"(function () {
  var root = document.documentElement;
  var output = document.querySelector("[data-counter]");
  var count = output ? Number(output.textContent) || 0 : 0;
  document.addEventListener("click", function (event) {
    var button = event.target.closest("button");
    if (!button) return;
    var next = button.getAttribute("data-next-mode");
    if (next) {
      root.setAttribute("data-color-scheme", next);
      button.setAttribute("data-next-mode", next === "dark" ? "light" : "dark");
      button.textContent = next === "dark" ? "\u2600" : "\u263E";
      return;
    }
    var action = button.getAttribute("data-action");
    if (!output || !action) return;
    count += action === "increment" ? 1 : action === "decrement" ? -1 : 0;
    output.textContent = String(count);
  });
})();"#;

/// Stylesheet: one variable set per color scheme, selected by the
/// `data-color-scheme` attribute of the root element.
fn stylesheet() -> String {
    let vars = |mode: ThemeMode, colors: ColorScheme| {
        format!(
            ":root[data-color-scheme=\"{}\"]{{--surface:{};--surface-alt:{};--text:{};--text-muted:{};--divider:{};color-scheme:{};}}",
            mode.as_str(),
            to_css_hex(colors.surface_primary),
            to_css_hex(colors.surface_secondary),
            to_css_hex(colors.text_primary),
            to_css_hex(colors.text_secondary),
            to_css_hex(colors.divider),
            mode.as_str(),
        )
    };
    let light = ColorScheme::light();
    let brand = format!(
        "linear-gradient(135deg,{},{})",
        to_css_hex(light.brand_start),
        to_css_hex(light.brand_end)
    );
    [
        vars(ThemeMode::Light, ColorScheme::light()),
        vars(ThemeMode::Dark, ColorScheme::dark()),
        "body{margin:0;font-family:Roboto,system-ui,sans-serif;background:var(--surface);color:var(--text);}".to_string(),
        "header{position:sticky;top:0;display:flex;align-items:center;gap:8px;padding:12px 24px;border-bottom:1px solid var(--divider);backdrop-filter:blur(12px);}".to_string(),
        format!(".brand-mark{{width:28px;height:28px;border-radius:6px;background:{brand};color:#fff;font-weight:800;display:flex;align-items:center;justify-content:center;}}"),
        ".app-title{flex-grow:1;font-weight:600;}".to_string(),
        ".hero{max-width:900px;margin:0 auto;padding:128px 24px 112px;text-align:center;}".to_string(),
        format!(".hero h1{{font-size:4rem;background:{brand};-webkit-background-clip:text;color:transparent;}}"),
        ".hero h2{color:var(--text-muted);font-weight:400;}".to_string(),
        ".badge{display:inline-block;padding:4px 12px;border:1px solid var(--divider);border-radius:9999px;font-size:12px;}".to_string(),
        ".card{display:inline-block;min-width:320px;padding:16px;border:1px solid var(--divider);border-radius:12px;background:var(--surface-alt);}".to_string(),
        ".counter{display:flex;justify-content:center;align-items:center;gap:24px;font-size:2rem;}".to_string(),
        "code{font-size:12px;}".to_string(),
    ]
    .join("\n")
}

fn write_head(w: &mut HtmlWriter, meta: &PageMetadata) -> Result<()> {
    w.open("head", &[])?;
    w.void("meta", &[("charset", "utf-8")])?;
    w.void(
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    )?;
    w.element("title", &[], &meta.title)?;
    w.void("meta", &[("name", "description"), ("content", &meta.description)])?;
    w.void("meta", &[("name", "keywords"), ("content", &meta.keywords)])?;
    w.void("link", &[("rel", "canonical"), ("href", &meta.canonical)])?;
    for (hreflang, href) in &meta.alternates {
        w.void(
            "link",
            &[("rel", "alternate"), ("hreflang", hreflang), ("href", href)],
        )?;
    }
    w.void("meta", &[("property", "og:title"), ("content", &meta.title)])?;
    w.void(
        "meta",
        &[("property", "og:description"), ("content", &meta.description)],
    )?;
    w.void("meta", &[("property", "og:locale"), ("content", &meta.og_locale)])?;
    w.void("meta", &[("property", "og:type"), ("content", meta.og_type)])?;
    w.void("meta", &[("property", "og:url"), ("content", &meta.canonical)])?;
    w.style(&stylesheet())?;
    w.close("head")
}

fn write_header(w: &mut HtmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let t = ctx.translator;
    let current_path = routing::localized_path(t.locale(), ctx.pathname);

    w.open("header", &[])?;
    w.element("span", &[("class", "brand-mark"), ("aria-hidden", "true")], "N")?;
    w.element("span", &[("class", "app-title")], t.translate(MessageKey::AppTitle))?;

    w.open("nav", &[("class", "language-switcher")])?;
    for locale in Locale::ALL {
        let href = routing::switch_locale(&current_path, locale);
        let mut attrs = vec![("href", href.as_str()), ("hreflang", locale.code()), ("lang", locale.code())];
        if locale == t.locale() {
            attrs.push(("aria-current", "true"));
        }
        w.element("a", &attrs, t.language_name(locale))?;
    }
    w.close("nav")?;

    w.element(
        "button",
        &[
            ("type", "button"),
            ("class", "theme-toggle"),
            ("aria-label", t.translate(MessageKey::ToggleTheme)),
            ("data-next-mode", ctx.theme_mode.toggle().as_str()),
        ],
        if ctx.theme_mode.is_dark() { "☀" } else { "☾" },
    )?;
    w.close("header")
}

fn write_counter_demo(w: &mut HtmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let t = ctx.translator;
    let value = ctx.counter.to_string();

    w.open("div", &[("class", "card")])?;
    w.element("div", &[("class", "title-bar")], TITLE_BAR_LABEL)?;
    w.open("div", &[("class", "counter")])?;
    w.element(
        "button",
        &[
            ("type", "button"),
            ("data-action", "decrement"),
            ("aria-label", t.translate(MessageKey::CounterDecrement)),
        ],
        "−",
    )?;
    w.element("output", &[("data-counter", "")], &value)?;
    w.element(
        "button",
        &[
            ("type", "button"),
            ("data-action", "increment"),
            ("aria-label", t.translate(MessageKey::CounterIncrement)),
        ],
        "+",
    )?;
    w.close("div")?;
    w.element(
        "code",
        &[],
        "store.set(|s| AppStatePatch { counter: Some(s.counter + 1) })",
    )?;
    w.close("div")
}

fn write_hero(w: &mut HtmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let t = ctx.translator;
    w.open("section", &[("class", "hero")])?;
    w.element("span", &[("class", "badge")], BADGE_LABEL)?;
    w.element("h1", &[], t.translate(MessageKey::HeroTitle))?;
    w.element("h2", &[], t.translate(MessageKey::HeroSubtitle))?;
    w.open("p", &[("class", "actions")])?;
    w.element(
        "a",
        &[("class", "primary"), ("href", ctx.docs_url)],
        t.translate(MessageKey::GetStarted),
    )?;
    w.element(
        "a",
        &[("class", "outlined"), ("href", ctx.repository_url)],
        t.translate(MessageKey::ViewOnGithub),
    )?;
    w.close("p")?;
    w.open("div", &[("class", "demo")])?;
    w.element("h3", &[], t.translate(MessageKey::DemoTitle))?;
    write_counter_demo(w, ctx)?;
    w.close("div")?;
    w.close("section")
}

/// Renders the page at `ctx.pathname` in the translator's locale.
///
/// The root element carries `lang="{locale}"` and the theme mode as
/// `data-color-scheme`.
pub fn render_page(ctx: &PageContext<'_>) -> Result<String> {
    let locale = ctx.translator.locale();
    let meta = PageMetadata::new(ctx.translator, ctx.base_url, ctx.pathname);

    let mut w = HtmlWriter::new()?;
    w.open(
        "html",
        &[("lang", locale.code()), ("data-color-scheme", ctx.theme_mode.as_str())],
    )?;
    write_head(&mut w, &meta)?;
    w.open("body", &[])?;
    write_header(&mut w, ctx)?;
    w.open("main", &[])?;
    write_hero(&mut w, ctx)?;
    w.close("main")?;
    w.script(PAGE_SCRIPT)?;
    w.close("body")?;
    w.close("html")?;

    tracing::debug!(locale = %locale, pathname = ctx.pathname, "page rendered");
    w.finish()
}

/// Generic not-found document, in the default locale's wording.
pub fn render_not_found(translator: Translator<'_>, theme_mode: ThemeMode) -> Result<String> {
    let home = routing::localized_path(Locale::DEFAULT, "/");
    let title = translator.translate(MessageKey::NotFoundTitle);

    let mut w = HtmlWriter::new()?;
    w.open(
        "html",
        &[("lang", translator.locale().code()), ("data-color-scheme", theme_mode.as_str())],
    )?;
    w.open("head", &[])?;
    w.void("meta", &[("charset", "utf-8")])?;
    w.void("meta", &[("name", "robots"), ("content", "noindex")])?;
    w.element("title", &[], &format!("404 | {}", title))?;
    w.style(&stylesheet())?;
    w.close("head")?;
    w.open("body", &[])?;
    w.open("main", &[("class", "hero")])?;
    w.element("h1", &[], "404")?;
    w.element("h2", &[], title)?;
    w.element("p", &[], translator.translate(MessageKey::NotFoundBody))?;
    w.element("a", &[("href", &home)], translator.translate(MessageKey::BackHome))?;
    w.close("main")?;
    w.close("body")?;
    w.close("html")?;
    w.finish()
}

/// Document that forwards the client to `target` (used for the bare root).
pub fn render_redirect(target: &str) -> Result<String> {
    let refresh = format!("0; url={}", target);

    let mut w = HtmlWriter::new()?;
    w.open("html", &[])?;
    w.open("head", &[])?;
    w.void("meta", &[("charset", "utf-8")])?;
    w.void("meta", &[("http-equiv", "refresh"), ("content", &refresh)])?;
    w.void("link", &[("rel", "canonical"), ("href", target)])?;
    w.close("head")?;
    w.open("body", &[])?;
    w.element("a", &[("href", target)], target)?;
    w.close("body")?;
    w.close("html")?;
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    fn context<'a>(i18n: &'a I18n, locale: Locale) -> PageContext<'a> {
        PageContext {
            translator: i18n.translator(locale),
            pathname: "/",
            theme_mode: ThemeMode::Dark,
            counter: 0,
            base_url: "https://example.com",
            docs_url: "https://docs.example.com",
            repository_url: "https://git.example.com/repo",
        }
    }

    #[test]
    fn lang_attribute_matches_locale() {
        let i18n = I18n::load().expect("catalogs must load");
        for locale in Locale::ALL {
            let html = render_page(&context(&i18n, locale)).expect("render must succeed");
            let expected = format!("<html lang=\"{}\"", locale.code());
            assert!(html.contains(&expected), "{locale}: {html}");
            assert!(html.starts_with("<!DOCTYPE html>"));
        }
    }

    #[test]
    fn page_contains_localized_text_and_metadata() {
        let i18n = I18n::load().expect("catalogs must load");
        let html = render_page(&context(&i18n, Locale::Ru)).expect("render must succeed");
        let t = i18n.translator(Locale::Ru);

        assert!(html.contains(t.translate(MessageKey::HeroTitle)));
        assert!(html.contains(t.translate(MessageKey::DemoTitle)));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/ru\"/>"));
        assert!(html.contains("hreflang=\"x-default\" href=\"https://example.com/en\""));
        assert!(html.contains("<meta property=\"og:locale\" content=\"ru\"/>"));
        assert!(html.contains("data-color-scheme=\"dark\""));
    }

    #[test]
    fn language_links_keep_the_pathname() {
        let i18n = I18n::load().expect("catalogs must load");
        let html = render_page(&context(&i18n, Locale::Hy)).expect("render must succeed");
        assert!(html.contains("href=\"/en\""));
        assert!(html.contains("href=\"/ru\""));
        assert!(html.contains("href=\"/hy\" hreflang=\"hy\" lang=\"hy\" aria-current=\"true\""));
    }

    #[test]
    fn counter_snapshot_is_rendered() {
        let i18n = I18n::load().expect("catalogs must load");
        let mut ctx = context(&i18n, Locale::En);
        ctx.counter = -1;
        let html = render_page(&ctx).expect("render must succeed");
        assert!(html.contains("<output data-counter=\"\">-1</output>"));
    }

    #[test]
    fn text_is_escaped() {
        let source: String = MessageKey::ALL
            .iter()
            .map(|key| format!("{} = <b>{}</b> & co\n", key.id(), key.id()))
            .collect();
        let i18n = I18n::from_sources(|_| Ok(Some(source.clone()))).expect("catalogs must load");
        let html = render_page(&context(&i18n, Locale::En)).expect("render must succeed");
        assert!(html.contains("&lt;b&gt;hero-title&lt;/b&gt; &amp; co"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn not_found_document_links_home() {
        let i18n = I18n::load().expect("catalogs must load");
        let html = render_not_found(i18n.translator(Locale::DEFAULT), ThemeMode::Light)
            .expect("render must succeed");
        assert!(html.contains("404"));
        assert!(html.contains("href=\"/en\""));
        assert!(html.contains("noindex"));
    }

    #[test]
    fn redirect_document_refreshes_to_target() {
        let html = render_redirect("/hy").expect("render must succeed");
        assert!(html.contains("content=\"0; url=/hy\""));
    }

    #[test]
    fn page_script_drives_toggle_and_counter() {
        let i18n = I18n::load().expect("catalogs must load");
        let html = render_page(&context(&i18n, Locale::En)).expect("render must succeed");

        assert!(html.contains("data-next-mode=\"light\""));
        assert!(html.contains("data-action=\"increment\""));
        let script_start = html.find("<script>").expect("page must carry its script");
        let script = &html[script_start..];
        assert!(script.contains("data-color-scheme"));
        assert!(script.contains("data-counter"));
        assert!(script.contains("</script>"));
        assert!(!PAGE_SCRIPT.contains("</"));
    }
}
