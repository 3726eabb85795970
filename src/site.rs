//! Static page content: brand, hero copy, contact details and outbound links.

use chrono::Datelike;

/// Page metadata: the title names the terminal window, the rest feeds `--help`.
#[derive(Debug, Clone, Copy)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const METADATA: Metadata = Metadata {
    title: "Vanika Creations | Diwali Gift Hampers – Warm, Elegant & Festive Gifting",
    description: "Explore premium Diwali gift hampers by Vanika Creations. Sweets, dry fruits, chocolates & traditional decor—perfect for family & corporate gifting. Order now!",
    keywords: &[
        "Diwali gift hampers",
        "hampers India",
        "festive gift boxes",
        "Diwali gifts online",
        "dry fruit hampers",
        "Diwali hamper for family",
        "premium gift hampers",
    ],
};

impl Metadata {
    /// Search keywords as one comma-separated line.
    pub fn keyword_line(&self) -> String {
        format!("Keywords: {}", self.keywords.join(", "))
    }
}

pub const BRAND_NAME: &str = "Vanika";
pub const BRAND_SUFFIX: &str = "Creations";
pub const TAGLINE: &str = "Crafting Memories";
pub const LOGO_IMAGE: &str = "/vanika.png";
/// Shown in place of the logo when the picture is unavailable.
pub const LOGO_MONOGRAM: &str = "V";

#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub paragraphs: [&'static str; 2],
    pub call_to_action: &'static str,
    pub background_image: &'static str,
}

pub const HERO: Hero = Hero {
    heading: "Celebrate Diwali in Style",
    subheading: "Exquisite Gift Hampers for the Festival of Lights",
    paragraphs: [
        "Discover our carefully curated collection of luxury Diwali hampers, featuring artisanal sweets, premium dry fruits, and handcrafted decoratives.",
        "Each hamper is thoughtfully designed to bring joy and celebration to your loved ones. Pre-order now for special early bird discounts!",
    ],
    call_to_action: "Explore Hampers",
    background_image: "/banner.png",
};

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_dial: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

pub const CONTACT: Contact = Contact {
    email: "vanikacreations2025@gmail.com",
    phone_display: "+91 (7116) 299-557",
    phone_dial: "+917116299557",
};

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub handle: &'static str,
    pub url: &'static str,
}

pub const SOCIAL: SocialLink = SocialLink {
    handle: "@vanika_creations_",
    url: "https://www.instagram.com/vanika_creations_/",
};

/// Toast shown after the share link lands on the clipboard.
pub const SHARE_CONFIRMATION: &str = "Share link to family and friends!";

pub const DOWNLOAD_LABEL: &str = "Download Catalogue";

/// In-page navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    Products,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Home, Anchor::Products, Anchor::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::Products => "Products",
            Anchor::Contact => "Contact",
        }
    }
}

/// Compose the catalogue document URL from the hosted file store base.
///
/// Returns `None` when no base is configured rather than a URL with a
/// missing host.
pub fn catalogue_url(base: Option<&str>, file_name: &str) -> Option<String> {
    let base = base.map(str::trim).filter(|b| !b.is_empty())?;
    let base = base.trim_end_matches('/');
    let file_name = file_name.trim_start_matches('/');
    Some(format!("{base}/{file_name}"))
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} VanikaCreations. All rights reserved.")
}

/// Local calendar year for the footer.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
