//! The server mod list, scraped once at startup from a local HTML export.

use scraper::Html;
use scraper::Selector;
use url::Url;

use crate::SloorError;

/// One mod scraped from the modlist file.
#[derive(Debug, Clone)]
pub struct ModEntry {
    /// Display name.
    pub name: String,
    /// Homepage of the mod, if the entry linked one.
    pub url: Option<Url>,
}

impl ModEntry {
    /// Render as one markdown line.
    fn markdown(&self) -> String {
        match &self.url {
            Some(url) => format!("[{}]({url})", self.name),
            None => self.name.clone(),
        }
    }
}

/// The full ordered mod list. Read-only for the process lifetime.
#[derive(Debug, Default)]
pub struct ModList {
    entries: Vec<ModEntry>,
}

impl ModList {
    /// Read and parse the modlist file.
    pub fn load(path: &str) -> Result<Self, SloorError> {
        let html = std::fs::read_to_string(path).map_err(|source| SloorError::ModList {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::parse(&html))
    }

    /// Scrape `<li>` elements: the element text is the display name, the
    /// first `<a href>` is the link. Entries whose link is missing or
    /// not a valid URL degrade to plain text.
    pub fn parse(html: &str) -> Self {
        let item = Selector::parse("li").expect("static selector is valid");
        let anchor = Selector::parse("a").expect("static selector is valid");

        let document = Html::parse_document(html);
        let entries = document
            .select(&item)
            .filter_map(|li| {
                let name = li.text().collect::<String>().trim().to_string();
                if name.is_empty() {
                    return None;
                }
                let url = li
                    .select(&anchor)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .and_then(|href| Url::parse(href).ok());
                Some(ModEntry { name, url })
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Markdown lines in original document order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ModEntry::markdown).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = r#"
        <html><body><ul>
            <li><a href="https://modrinth.com/mod/sodium">Sodium</a></li>
            <li><a href="https://modrinth.com/mod/lithium">Lithium</a></li>
            <li>Handcrafted Patch</li>
            <li><a href="not a url">Broken Link Mod</a></li>
            <li>   </li>
        </ul></body></html>
    "#;

    #[test]
    fn scrapes_names_and_links_in_order() {
        let mods = ModList::parse(SAMPLE);

        assert_eq!(mods.len(), 4);
        let lines = mods.lines();
        assert_eq!(lines[0], "[Sodium](https://modrinth.com/mod/sodium)");
        assert_eq!(lines[1], "[Lithium](https://modrinth.com/mod/lithium)");
    }

    #[test]
    fn entries_without_a_link_render_as_plain_text() {
        let mods = ModList::parse(SAMPLE);
        assert_eq!(mods.lines()[2], "Handcrafted Patch");
    }

    #[test]
    fn invalid_hrefs_degrade_to_plain_text() {
        let mods = ModList::parse(SAMPLE);
        assert_eq!(mods.lines()[3], "Broken Link Mod");
    }

    #[test]
    fn whitespace_only_items_are_skipped() {
        let mods = ModList::parse("<ul><li>  </li></ul>");
        assert!(mods.is_empty());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let result = ModList::load("does-not-exist.html");
        assert!(matches!(
            result,
            Err(SloorError::ModList { ref path, .. }) if path == "does-not-exist.html"
        ));
    }
}
