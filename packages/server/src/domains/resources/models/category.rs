use serde::{Deserialize, Serialize};

use crate::domains::resources::error::UnknownCategory;

/// Closed set of catalog categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Framework,
    #[serde(rename = "UI Library")]
    UiLibrary,
    Tool,
    Learning,
    Performance,
    Testing,
    #[serde(rename = "State Management")]
    StateManagement,
    #[serde(rename = "CSS")]
    Css,
    TypeScript,
    Accessibility,
    Security,
    #[serde(rename = "PWA")]
    Pwa,
    Animation,
    #[serde(rename = "Data Visualization")]
    DataVisualization,
    #[serde(rename = "3D & WebGL")]
    ThreeDWebGl,
    #[serde(rename = "Platforms & Hosting")]
    PlatformsHosting,
    #[serde(rename = "Public APIs")]
    PublicApis,
    Git,
    #[serde(rename = "Design Resources")]
    DesignResources,
    Utilities,
    #[serde(rename = "Web VR")]
    WebVr,
}

impl Category {
    pub const ALL: [Category; 21] = [
        Category::Framework,
        Category::UiLibrary,
        Category::Tool,
        Category::Learning,
        Category::Performance,
        Category::Testing,
        Category::StateManagement,
        Category::Css,
        Category::TypeScript,
        Category::Accessibility,
        Category::Security,
        Category::Pwa,
        Category::Animation,
        Category::DataVisualization,
        Category::ThreeDWebGl,
        Category::PlatformsHosting,
        Category::PublicApis,
        Category::Git,
        Category::DesignResources,
        Category::Utilities,
        Category::WebVr,
    ];

    /// Display label, identical to the value stored in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Framework => "Framework",
            Category::UiLibrary => "UI Library",
            Category::Tool => "Tool",
            Category::Learning => "Learning",
            Category::Performance => "Performance",
            Category::Testing => "Testing",
            Category::StateManagement => "State Management",
            Category::Css => "CSS",
            Category::TypeScript => "TypeScript",
            Category::Accessibility => "Accessibility",
            Category::Security => "Security",
            Category::Pwa => "PWA",
            Category::Animation => "Animation",
            Category::DataVisualization => "Data Visualization",
            Category::ThreeDWebGl => "3D & WebGL",
            Category::PlatformsHosting => "Platforms & Hosting",
            Category::PublicApis => "Public APIs",
            Category::Git => "Git",
            Category::DesignResources => "Design Resources",
            Category::Utilities => "Utilities",
            Category::WebVr => "Web VR",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match against the display labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
