use serde::Serialize;
use std::path::PathBuf;

/// HTML templating stage options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlOptions {
    /// Template rendered into the output's root document
    pub template: PathBuf,

    /// Values available to the template
    pub metadata: HtmlMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMetadata {
    pub title: String,
    pub base_url: String,
}

impl HtmlOptions {
    pub fn new(
        template: impl Into<PathBuf>,
        title: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            metadata: HtmlMetadata {
                title: title.into(),
                base_url: base_url.into(),
            },
        }
    }
}
