/// A gift hamper listed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Stable sort key, unique within the catalog.
    pub id: u32,
    pub title: &'static str,
    /// Multi-line copy. The first line doubles as the card summary.
    pub description: &'static str,
    /// Image asset paths, relative to the assets directory. Never empty.
    pub images: &'static [&'static str],
    /// Display string only, e.g. "₹499 – ₹799".
    pub price_range: &'static str,
    /// Opaque display code.
    pub article_id: &'static str,
}

impl Product {
    /// First line of the description, as shown on the card.
    pub fn summary(&self) -> &'static str {
        self.description.split('\n').next().unwrap_or_default()
    }

    /// Description lines with surrounding whitespace collapsed, blank lines kept.
    pub fn description_lines(&self) -> impl Iterator<Item = &'static str> {
        self.description.split('\n').map(str::trim)
    }

    /// Primary image reference.
    pub fn image(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }

    pub fn images(&self) -> &'static [&'static str] {
        self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}
