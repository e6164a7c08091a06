//! Content-type catalog and prompt templates.
//!
//! Every content type is a phrasing strategy: it wraps the user's text in an
//! instruction for the generation model. Nothing else varies per type.

use serde::Serialize;

/// Grouping used by clients to lay out the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Professional,
    Marketing,
    Social,
    Educational,
}

/// Closed set of supported content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Blog,
    Article,
    Technical,
    Newsletter,
    Press,
    Product,
    Ad,
    Seo,
    Meta,
    Headline,
    Caption,
    Social,
    Engagement,
    Notes,
    Summary,
    Tutorial,
    Faq,
    Outline,
}

impl ContentType {
    /// Every content type, in catalog order.
    pub const ALL: [ContentType; 18] = [
        ContentType::Blog,
        ContentType::Article,
        ContentType::Technical,
        ContentType::Newsletter,
        ContentType::Press,
        ContentType::Product,
        ContentType::Ad,
        ContentType::Seo,
        ContentType::Meta,
        ContentType::Headline,
        ContentType::Caption,
        ContentType::Social,
        ContentType::Engagement,
        ContentType::Notes,
        ContentType::Summary,
        ContentType::Tutorial,
        ContentType::Faq,
        ContentType::Outline,
    ];

    /// Look up a type by its tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|content_type| content_type.tag().eq_ignore_ascii_case(tag))
    }

    /// Wire tag sent by clients in the `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Article => "article",
            ContentType::Technical => "technical",
            ContentType::Newsletter => "newsletter",
            ContentType::Press => "press",
            ContentType::Product => "product",
            ContentType::Ad => "ad",
            ContentType::Seo => "seo",
            ContentType::Meta => "meta",
            ContentType::Headline => "headline",
            ContentType::Caption => "caption",
            ContentType::Social => "social",
            ContentType::Engagement => "engagement",
            ContentType::Notes => "notes",
            ContentType::Summary => "summary",
            ContentType::Tutorial => "tutorial",
            ContentType::Faq => "faq",
            ContentType::Outline => "outline",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Blog => "Blog Post",
            ContentType::Article => "Article",
            ContentType::Technical => "Technical Documentation",
            ContentType::Newsletter => "Newsletter",
            ContentType::Press => "Press Release",
            ContentType::Product => "Product Description",
            ContentType::Ad => "Ad Copy",
            ContentType::Seo => "SEO Content",
            ContentType::Meta => "Meta Description",
            ContentType::Headline => "Headlines",
            ContentType::Caption => "Captions",
            ContentType::Social => "Social Posts",
            ContentType::Engagement => "Engagement Content",
            ContentType::Notes => "Notes",
            ContentType::Summary => "Summary",
            ContentType::Tutorial => "Tutorial",
            ContentType::Faq => "FAQ",
            ContentType::Outline => "Outline",
        }
    }

    pub fn category(&self) -> ContentCategory {
        match self {
            ContentType::Blog
            | ContentType::Article
            | ContentType::Technical
            | ContentType::Newsletter
            | ContentType::Press => ContentCategory::Professional,
            ContentType::Product
            | ContentType::Ad
            | ContentType::Seo
            | ContentType::Meta
            | ContentType::Headline => ContentCategory::Marketing,
            ContentType::Caption | ContentType::Social | ContentType::Engagement => {
                ContentCategory::Social
            }
            ContentType::Notes
            | ContentType::Summary
            | ContentType::Tutorial
            | ContentType::Faq
            | ContentType::Outline => ContentCategory::Educational,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContentType::Blog => "Create engaging blog content",
            ContentType::Article => "Write in-depth articles",
            ContentType::Technical => "Create detailed documentation",
            ContentType::Newsletter => "Craft informative newsletters",
            ContentType::Press => "Write professional press releases",
            ContentType::Product => "Create compelling product descriptions",
            ContentType::Ad => "Write high-converting ad copy",
            ContentType::Seo => "Generate SEO-optimized content",
            ContentType::Meta => "Create effective meta descriptions",
            ContentType::Headline => "Craft attention-grabbing headlines",
            ContentType::Caption => "Write engaging social media captions",
            ContentType::Social => "Create shareable social media posts",
            ContentType::Engagement => "Generate content that drives engagement",
            ContentType::Notes => "Create structured, concise notes",
            ContentType::Summary => "Generate clear, concise summaries",
            ContentType::Tutorial => "Write step-by-step tutorials",
            ContentType::Faq => "Create helpful FAQ content",
            ContentType::Outline => "Generate structured content outlines",
        }
    }

    /// Instruction placed in front of the user's content.
    fn instruction(&self) -> &'static str {
        match self {
            ContentType::Blog => "Write a professional, engaging blog post based on:",
            ContentType::Article => "Write an in-depth, well-structured article about:",
            ContentType::Technical => "Write clear, detailed technical documentation for:",
            ContentType::Newsletter => "Write an informative, friendly newsletter about:",
            ContentType::Press => "Write a professional press release announcing:",
            ContentType::Product => "Write a compelling product description for:",
            ContentType::Ad => "Write short, high-converting ad copy for:",
            ContentType::Seo => {
                "Write SEO-optimized web content with natural keyword usage about:"
            }
            ContentType::Meta => "Write a concise meta description (under 160 characters) for:",
            ContentType::Headline => "Write five attention-grabbing headline options for:",
            ContentType::Caption => "Write an engaging social media caption for:",
            ContentType::Social => "Write a shareable social media post about:",
            ContentType::Engagement => {
                "Write social media content designed to spark comments and shares about:"
            }
            ContentType::Notes => "Write structured, concise study notes about:",
            ContentType::Summary => "Write a clear, concise summary of:",
            ContentType::Tutorial => "Write a step-by-step tutorial on:",
            ContentType::Faq => "Write a helpful FAQ section with questions and answers about:",
            ContentType::Outline => "Write a structured content outline for:",
        }
    }

    /// Render the prompt for this type around `content`.
    pub fn prompt(&self, content: &str) -> String {
        format!("{} {}", self.instruction(), content)
    }
}

/// Build the prompt for a `type` tag. Unknown tags pass `content` through.
pub fn resolve_prompt(tag: &str, content: &str) -> String {
    match ContentType::from_tag(tag) {
        Some(content_type) => content_type.prompt(content),
        None => content.to_string(),
    }
}

/// Catalog entry returned to clients.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContentTypeInfo {
    /// Value to send in the `type` field
    pub tag: &'static str,
    /// Display name
    pub name: &'static str,
    pub category: ContentCategory,
    pub description: &'static str,
}

impl From<ContentType> for ContentTypeInfo {
    fn from(content_type: ContentType) -> Self {
        Self {
            tag: content_type.tag(),
            name: content_type.name(),
            category: content_type.category(),
            description: content_type.description(),
        }
    }
}
