//! Section view-models.
//!
//! Every section is rendered from one of these props structs. They are:
//!
//! - **Serializable** - the lifecycle layer stores props as JSON objects and
//!   merges caller overrides into them before rendering
//! - **Default-able** - `Default` carries the shipped landing page copy
//! - **Forgiving** - `#[serde(default)]` fills omitted keys, unknown keys are ignored
//!
//! # Example
//!
//! ```rust
//! use helix_sections::types::{HeaderProps, Link};
//!
//! let header = HeaderProps {
//!     brand_name: "Acme".into(),
//!     nav_links: vec![Link::new("Docs", "/docs")],
//!     ..Default::default()
//! };
//! assert_eq!(header.cta.label, "Request Demo");
//! ```

use serde::{Deserialize, Serialize};

/// A plain hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Visible text
    pub label: String,
    /// Target URL (`#` when the link goes nowhere yet)
    pub href: String,
}

impl Link {
    /// Link with the given text and target.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new("", "#")
    }
}

// =============================================================================
// Background
// =============================================================================

/// Animated background layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundProps {
    /// Project id handed to the animation runtime (`data-us-project`)
    pub project_id: String,
    /// Percentage of the viewport height that stays visible under the fade mask
    pub alpha_mask: u8,
    /// Whether the animated layer is rendered and its script loaded
    pub enable_animation: bool,
    /// Animation runtime script, loaded once per document
    pub script_src: String,
}

impl Default for BackgroundProps {
    fn default() -> Self {
        Self {
            project_id: "bKN5upvoulAmWvInmHza".into(),
            alpha_mask: 80,
            enable_animation: true,
            script_src: "https://cdn.jsdelivr.net/gh/hiunicornstudio/unicornstudio.js@v1.4.29/dist/unicornStudio.umd.js".into(),
        }
    }
}

// =============================================================================
// Header
// =============================================================================

/// Fixed navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderProps {
    /// Brand shown next to the logo mark
    pub brand_name: String,
    /// Center navigation, in display order
    pub nav_links: Vec<Link>,
    /// Call-to-action button on the right
    pub cta: Link,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            brand_name: "DoubleHelix".into(),
            nav_links: vec![
                Link::new("Product", "#"),
                Link::new("Docs", "#"),
                Link::new("Customers", "#"),
                Link::new("Pricing", "#"),
            ],
            cta: Link::new("Request Demo", "#"),
        }
    }
}

// =============================================================================
// Hero
// =============================================================================

/// Three-part hero headline. The interactive words animate letter by letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headline {
    /// Static first word
    pub lead: String,
    /// Words animated letter by letter
    pub interactive: Vec<String>,
    /// Words after the animated part
    pub trailing: Vec<String>,
}

impl Default for Headline {
    fn default() -> Self {
        Self {
            lead: "Scale".into(),
            interactive: vec!["your".into(), "app".into()],
            trailing: vec!["with".into(), "smart".into(), "infrastructure".into()],
        }
    }
}

/// Hero section, including the mount point of the logo carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroProps {
    /// Main heading
    pub headline: Headline,
    /// Subtitle paragraphs
    pub subtitle: Vec<String>,
    /// Label of the primary button
    pub cta_text: String,
    /// Caption above the logo carousel
    pub trusted_by_text: String,
    /// Element id the logo carousel mounts into
    pub carousel_container: String,
}

impl Default for HeroProps {
    fn default() -> Self {
        Self {
            headline: Headline::default(),
            subtitle: vec![
                "Engineering a future-proof foundation for your product.".into(),
                "From solid-core architecture to unified systems that scale without limits, built all into a single cohesive stack.".into(),
            ],
            cta_text: "Start Building".into(),
            trusted_by_text: "Trusted by".into(),
            carousel_container: "logo-carousel-container".into(),
        }
    }
}

// =============================================================================
// Features
// =============================================================================

/// Large feature card on the left of the features grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainFeature {
    /// Card heading
    pub title: String,
    /// Body paragraphs, in order
    pub description: Vec<String>,
}

impl Default for MainFeature {
    fn default() -> Self {
        Self {
            title: "High-Performance API Integration".into(),
            description: vec![
                "Connect to the decentralized web with DoubleHelix's unified API surface. Designed for speed, reliability, and infinite scale.".into(),
                "Our SDKs provide type-safe access to over 50+ protocols with a single line of code. Eliminate node maintenance and focus on building your application logic with 99.99% uptime guaranteed.".into(),
                "Instant global state access: stream events, query historical data, and broadcast transactions with sub-millisecond latency.".into(),
            ],
        }
    }
}

/// Visual shown on a small feature card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    /// Folder illustration
    #[default]
    Folder,
    /// GitHub mark
    Github,
}

/// Small feature card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureCard {
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
    /// Optional link under the body
    pub link: Option<Link>,
    /// Illustration above the heading
    pub icon: FeatureIcon,
}

/// Connection state of an API status row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Serving traffic; shows the latency
    #[default]
    Active,
    /// Catching up; shows a spinner
    Syncing,
}

/// One row of the API status card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusItem {
    /// Service name
    pub name: String,
    /// Region or status caption under the name
    pub region: String,
    /// Measured latency, shown when active
    pub latency: Option<String>,
    /// Connection state
    pub status: ServiceStatus,
    /// Accent color name (`blue`, `purple`, `orange`, ...)
    pub color: String,
}

/// API status card, mounted by the features section into its own slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiStatusProps {
    /// Rows of the card, top to bottom
    pub status_items: Vec<StatusItem>,
}

impl Default for ApiStatusProps {
    fn default() -> Self {
        Self {
            status_items: vec![
                StatusItem {
                    name: "REST Gateway".into(),
                    region: "us-east-1".into(),
                    latency: Some("14ms".into()),
                    status: ServiceStatus::Active,
                    color: "blue".into(),
                },
                StatusItem {
                    name: "GraphQL".into(),
                    region: "global-edge".into(),
                    latency: Some("28ms".into()),
                    status: ServiceStatus::Active,
                    color: "purple".into(),
                },
                StatusItem {
                    name: "Indexer Stream".into(),
                    region: "Syncing blocks".into(),
                    latency: None,
                    status: ServiceStatus::Syncing,
                    color: "orange".into(),
                },
            ],
        }
    }
}

/// Features grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesProps {
    /// Large card with the API status slot
    pub main_feature: MainFeature,
    /// Small cards next to the main one
    pub cards: Vec<FeatureCard>,
    /// Element id of the API status card slot inside the main feature card
    pub status_slot: String,
    /// Props of the API status card
    pub status: ApiStatusProps,
}

impl Default for FeaturesProps {
    fn default() -> Self {
        Self {
            main_feature: MainFeature::default(),
            cards: vec![
                FeatureCard {
                    title: "Automation".into(),
                    description: "As a license holder requiring confidential assistance, please fill out a support request form or email us.".into(),
                    link: Some(Link::new(
                        "support@nebula.protocol",
                        "mailto:support@nebula.protocol",
                    )),
                    icon: FeatureIcon::Folder,
                },
                FeatureCard {
                    title: "Identity".into(),
                    description: "With your DoubleHelix purchase, you receive 12 months of technical support and direct repository access.".into(),
                    link: None,
                    icon: FeatureIcon::Github,
                },
            ],
            status_slot: "api-status-card".into(),
            status: ApiStatusProps::default(),
        }
    }
}

// =============================================================================
// Mobile suite
// =============================================================================

/// Four-line section title; the last line is highlighted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteTitle {
    /// First line
    pub line1: String,
    /// Second line
    pub line2: String,
    /// Third line
    pub line3: String,
    /// Highlighted last line
    pub highlight: String,
}

impl Default for SuiteTitle {
    fn default() -> Self {
        Self {
            line1: "Offering".into(),
            line2: "Unmatched".into(),
            line3: "Control &".into(),
            highlight: "Insight".into(),
        }
    }
}

/// Numbers shown on the phone mockup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneData {
    /// Balance on the phone screen
    pub balance: String,
    /// Change next to the balance
    pub change: String,
    /// Period the change covers
    pub period: String,
}

impl Default for PhoneData {
    fn default() -> Self {
        Self {
            balance: "$8,245.32".into(),
            change: "+12.4%".into(),
            period: "this week".into(),
        }
    }
}

/// Side-card statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteStats {
    /// Uptime figure
    pub uptime: String,
    /// Latency figure
    pub latency: String,
    /// Request volume figure
    pub requests: String,
}

impl Default for SuiteStats {
    fn default() -> Self {
        Self {
            uptime: "99.99%".into(),
            latency: "14ms".into(),
            requests: "2.4M".into(),
        }
    }
}

/// Mobile suite showcase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileSuiteProps {
    /// Section heading
    pub section_title: SuiteTitle,
    /// Phone mockup numbers
    pub phone: PhoneData,
    /// Side-card statistics
    pub stats: SuiteStats,
}

// =============================================================================
// Testimonials
// =============================================================================

/// Heading block of the testimonials section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsHeader {
    /// Small pill above the title
    pub badge: String,
    /// Title text before the highlight
    pub title: String,
    /// Highlighted end of the title
    pub title_highlight: String,
    /// Paragraph under the title
    pub subtitle: String,
}

impl Default for TestimonialsHeader {
    fn default() -> Self {
        Self {
            badge: "Testimonials".into(),
            title: "Proven results,".into(),
            title_highlight: "delivered".into(),
            subtitle: "See how leading protocols and dApps are scaling their infrastructure with DoubleHelix's unified layer.".into(),
        }
    }
}

/// One customer quote with its headline statistic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    /// Headline number
    pub stat: String,
    /// Unit after the number (`x`, `%`, `ms`)
    pub stat_suffix: String,
    /// Accent color name of the number, empty for the default
    pub stat_color: String,
    /// What the number measures
    pub description: String,
    /// Customer quote
    pub quote: String,
    /// Quote author
    pub author: String,
    /// Author role and company
    pub role: String,
    /// Company key, used for the avatar
    pub company: String,
}

/// Testimonials section: rotating quotes plus a static grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsProps {
    /// Heading block
    pub header: TestimonialsHeader,
    /// Quotes rotated in the large card
    pub carousel_items: Vec<Testimonial>,
    /// Static cards under the rotation
    pub grid_cards: Vec<Testimonial>,
}

impl Default for TestimonialsProps {
    fn default() -> Self {
        let quote = |stat: &str, suffix: &str, color: &str, description: &str, quote: &str, author: &str, role: &str, company: &str| Testimonial {
            stat: stat.into(),
            stat_suffix: suffix.into(),
            stat_color: color.into(),
            description: description.into(),
            quote: quote.into(),
            author: author.into(),
            role: role.into(),
            company: company.into(),
        };
        Self {
            header: TestimonialsHeader::default(),
            carousel_items: vec![
                quote(
                    "12",
                    "x",
                    "orange",
                    "Increase in transaction throughput after migrating to DoubleHelix L2 rollups.",
                    "We needed a scalable infrastructure that didn't compromise on decentralization. DoubleHelix delivered exactly that. Our gas fees dropped by 90% overnight while maintaining instant finality.",
                    "Elena Rodriguez",
                    "Lead Protocol Eng, Uniswap",
                    "uniswap",
                ),
                quote(
                    "99",
                    "%",
                    "blue",
                    "Uptime guaranteed with our decentralized sequencer network.",
                    "Migrating our DEX to DoubleHelix's rollup infrastructure was seamless. We've seen zero downtime in 18 months of operation, even during peak network congestion.",
                    "James Wu",
                    "Core Dev, Arbitrum",
                    "arbitrum",
                ),
                quote(
                    "50",
                    "ms",
                    "red",
                    "Latency achieved for cross-chain message propagation.",
                    "The speed of DoubleHelix's bridge infrastructure is unmatched. We can now settle transactions across multiple rollups almost instantaneously, a game changer for our users.",
                    "Sarah Jenkins",
                    "PM, Optimism",
                    "optimism",
                ),
            ],
            grid_cards: vec![quote(
                "14",
                "ms",
                "",
                "Global latency reduction on edge nodes.",
                "From branding to execution, the DoubleHelix API suite is flawless. The latency on our oracle updates dropped significantly, giving us a competitive edge in high-frequency markets.",
                "David Chen",
                "CTO, Chainlink",
                "chainlink",
            )],
        }
    }
}

// =============================================================================
// Contact form
// =============================================================================

/// Input control used for a form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input
    #[default]
    Text,
    /// Email input
    Email,
    /// Multi-line text area
    Textarea,
}

impl FieldKind {
    /// Value of the `type` attribute for `<input>` controls.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Textarea => "text",
            FieldKind::Email => "email",
        }
    }
}

/// Field descriptor of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    /// Element id and form key
    pub id: String,
    /// Floating label
    pub label: String,
    /// Control type, `type` in JSON
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Marks the field `required`
    pub required: bool,
    /// Half-width fields share a two-column row above the full-width ones
    pub half: bool,
}

impl FormField {
    fn new(id: &str, label: &str, kind: FieldKind, required: bool, half: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required,
            half,
        }
    }
}

/// Contact call-to-action with its form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactProps {
    /// Title text before the highlight
    pub title: String,
    /// Highlighted end of the title
    pub title_highlight: String,
    /// Paragraph under the title
    pub subtitle: String,
    /// Submit button label
    pub submit_text: String,
    /// Element id of the `<form>`
    pub form_id: String,
    /// Form fields in display order
    pub fields: Vec<FormField>,
}

impl Default for ContactProps {
    fn default() -> Self {
        Self {
            title: "Ready to personalize your".into(),
            title_highlight: "chain?".into(),
            subtitle: "Our service is for protocols that believe in owning a safe, scalable, and decentralized blockspace. We promise that scaling with DoubleHelix will help you declutter your mempool.".into(),
            submit_text: "Submit Request".into(),
            form_id: "contact-form".into(),
            fields: vec![
                FormField::new("name", "Name", FieldKind::Text, true, true),
                FormField::new("email", "Email", FieldKind::Email, true, true),
                FormField::new("project", "Project / Protocol ID", FieldKind::Text, false, false),
                FormField::new("message", "Anything we should know?", FieldKind::Textarea, false, false),
            ],
        }
    }
}

// =============================================================================
// Footer
// =============================================================================

/// Footer brand block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterBrand {
    /// Brand name
    pub name: String,
    /// Dimmed word after the name
    pub suffix: String,
    /// Line under the brand
    pub tagline: String,
}

impl Default for FooterBrand {
    fn default() -> Self {
        Self {
            name: "DoubleHelix".into(),
            suffix: "Now".into(),
            tagline: "The unified infrastructure layer for the decentralized web.".into(),
        }
    }
}

/// Titled column of footer links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkColumn {
    /// Column heading
    pub title: String,
    /// Links under the heading
    pub links: Vec<Link>,
}

/// Social network link; `icon` is an Iconify/Lucide icon name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Accessible label
    pub label: String,
    /// Profile URL
    pub href: String,
    /// Icon name
    pub icon: String,
}

/// Page footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterProps {
    /// Brand block
    pub brand: FooterBrand,
    /// Link columns, left to right
    pub link_columns: Vec<LinkColumn>,
    /// Social icons
    pub social_links: Vec<SocialLink>,
    /// Copyright line at the bottom
    pub copyright: String,
}

impl Default for FooterProps {
    fn default() -> Self {
        let column = |title: &str, labels: &[&str]| LinkColumn {
            title: title.into(),
            links: labels.iter().map(|label| Link::new(*label, "#")).collect(),
        };
        let social = |label: &str, icon: &str| SocialLink {
            label: label.into(),
            href: "#".into(),
            icon: icon.into(),
        };
        Self {
            brand: FooterBrand::default(),
            link_columns: vec![
                column("About Us", &["Mission", "Team", "Newsletter", "Careers"]),
                column("Support", &["Contact", "Refund Policy", "FAQ's", "Status"]),
            ],
            social_links: vec![
                social("Instagram", "instagram"),
                social("LinkedIn", "linkedin"),
                social("YouTube", "youtube"),
                social("Twitter", "twitter"),
            ],
            copyright: "Copyright © DoubleHelixNow".into(),
        }
    }
}

// =============================================================================
// Logo carousel
// =============================================================================

/// One logo of the "trusted by" carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoEntry {
    /// Image URL
    pub src: String,
    /// Image alt text
    pub alt: String,
    /// Short name under the image
    pub label: String,
}

impl LogoEntry {
    /// Logo from its image, alt text and label.
    pub fn new(src: impl Into<String>, alt: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            label: label.into(),
        }
    }
}

/// Logos shipped with the landing page.
pub fn default_logos() -> Vec<LogoEntry> {
    [
        ("assets/logos/marriott.png", "Marriott Bonvoy", "Marriott"),
        ("assets/logos/myQ.png", "myQ", "myQ"),
        ("assets/logos/lakhani.png", "Lakhani Hospitality", "Lakhani"),
        ("assets/logos/marriott.png", "Tres Amigas", "Tres Amigas"),
        ("assets/logos/brickforce.png", "BrickForce Construction", "BrickForce"),
        ("assets/logos/wanasell.png", "WanaSell", "WanaSell"),
        ("assets/logos/marriott.png", "Fowrun", "Fowrun"),
        ("assets/logos/marriott.png", "QuickPantri", "QuickPantri"),
    ]
    .into_iter()
    .map(|(src, alt, label)| LogoEntry::new(src, alt, label))
    .collect()
}
