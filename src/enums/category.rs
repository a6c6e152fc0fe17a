use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::RoleboardError;

/// The four metric categories shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WorkTasks,
    PreferredQualifications,
    CompanySize,
    TechStack,
}

impl Category {
    /// Display order on the page.
    pub const ALL: [Category; 4] = [
        Category::WorkTasks,
        Category::PreferredQualifications,
        Category::CompanySize,
        Category::TechStack,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::WorkTasks => "work-tasks",
            Self::PreferredQualifications => "preferred-qualifications",
            Self::CompanySize => "company-size",
            Self::TechStack => "tech-stack",
        }
    }

    /// Key of the category's table under `[categories]` in config.toml
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::WorkTasks => "work_tasks",
            Self::PreferredQualifications => "preferred_qualifications",
            Self::CompanySize => "company_size",
            Self::TechStack => "tech_stack",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::WorkTasks => "주요 업무",
            Self::PreferredQualifications => "우대 사항",
            Self::CompanySize => "회사 규모",
            Self::TechStack => "기술 스택",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WorkTasks => "데이터 엔지니어가 주로 하는 일이에요.",
            Self::PreferredQualifications => "이런 조건을 갖추면 더 눈길을 끌 수 있어요.",
            Self::CompanySize => "데이터 엔지니어를 찾는 회사들의 규모를 정리했어요.",
            Self::TechStack => "데이터 엔지니어에게 많이 요구하는 기술을 모아봤어요.",
        }
    }

    pub fn default_endpoint(&self) -> String {
        format!("/api/{}", self.slug())
    }

    pub fn available_slugs() -> Vec<String> {
        Self::ALL.iter().map(|c| c.slug().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Category {
    type Err = RoleboardError;

    /// Accepts the slug or the config key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == needle || c.config_key() == needle)
            .ok_or_else(|| RoleboardError::UnknownCategory {
                name: s.to_string(),
                available: Self::available_slugs(),
            })
    }
}
