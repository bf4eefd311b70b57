use scraper::{ElementRef, Html, Selector};

use celebsignal_common::{CelebSignalError, Result, SubjectRecord};

/// How many entries the listing extractor keeps unless told otherwise.
pub const DEFAULT_LIMIT: usize = 10;

/// CSS selectors describing one entry of the listing page. Everything but
/// `entry` is resolved relative to the entry element.
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pub entry: String,
    pub name: String,
    pub photo: String,
    /// Element holding "profession | best known work".
    pub details: String,
}

impl Default for ListingSelectors {
    /// IMDb "born on this date" lister markup.
    fn default() -> Self {
        Self {
            entry: "div.lister-item.mode-detail".to_string(),
            name: "div.lister-item-content h3.lister-item-header a".to_string(),
            photo: "div.lister-item-image a img".to_string(),
            details: "div.lister-item-content p.text-muted.text-small".to_string(),
        }
    }
}

pub struct ListingExtractor {
    entry: Selector,
    name: Selector,
    photo: Selector,
    details: Selector,
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw)
        .map_err(|e| CelebSignalError::Config(format!("invalid selector {raw:?}: {e:?}")))
}

impl ListingExtractor {
    pub fn new(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            entry: parse_selector(&selectors.entry)?,
            name: parse_selector(&selectors.name)?,
            photo: parse_selector(&selectors.photo)?,
            details: parse_selector(&selectors.details)?,
        })
    }

    /// Parse up to `limit` subject records from rendered markup, in document order.
    ///
    /// Any entry missing a required element, or whose details field is not
    /// exactly "profession | work", fails the whole extraction: that means the
    /// page layout changed and nothing trustworthy can be stored.
    pub fn extract(&self, markup: &str, limit: usize) -> Result<Vec<SubjectRecord>> {
        let document = Html::parse_document(markup);

        let records = document
            .select(&self.entry)
            .take(limit)
            .enumerate()
            .map(|(index, entry)| self.extract_entry(index, entry))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = records.len(), limit, "Extracted listing entries");
        Ok(records)
    }

    fn extract_entry(&self, index: usize, entry: ElementRef<'_>) -> Result<SubjectRecord> {
        let name = entry
            .select(&self.name)
            .next()
            .map(element_text)
            .ok_or_else(|| missing(index, "name"))?;

        let photo_url = entry
            .select(&self.photo)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| src.trim().to_string())
            .ok_or_else(|| missing(index, "photo"))?;

        let details = entry
            .select(&self.details)
            .next()
            .map(element_text)
            .ok_or_else(|| missing(index, "profession/best work"))?;

        let (profession, best_work) = split_details(&details).ok_or_else(|| {
            CelebSignalError::Parse(format!(
                "entry {index} ({name}): expected \"profession | best work\", got {details:?}"
            ))
        })?;

        Ok(SubjectRecord::new(name, photo_url, profession, best_work))
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn missing(index: usize, what: &str) -> CelebSignalError {
    CelebSignalError::Parse(format!("entry {index}: {what} element not found"))
}

/// Split on `|`, requiring exactly two parts.
fn split_details(details: &str) -> Option<(&str, &str)> {
    let mut parts = details.split('|');
    let profession = parts.next()?;
    let best_work = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((profession.trim(), best_work.trim()))
}
