use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::category::Category;
use crate::enums::source_kind::SourceKind;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::structs::category_label_map::CategoryLabelMap;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `path` (or the default location). A missing file means defaults.
    pub fn load(path: Option<&Path>) -> RoleboardResult<Config> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            return Self::load_from(&config_path);
        }

        if path.is_some() {
            return Err(RoleboardError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: "file does not exist".to_string(),
            });
        }

        log::debug!("No config at {}, using defaults", config_path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> RoleboardResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| RoleboardError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| match e {
            RoleboardError::ConfigurationFileError { reason, .. } => RoleboardError::ConfigurationFileError {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> RoleboardResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn sample_config() -> &'static str {
        r#"# Roleboard configuration

[source]
# Where category payloads come from: "http" or "directory"
kind = "http"
base_url = "http://127.0.0.1:8000"
timeout_secs = 10
# Used when kind = "directory": one <slug>.json file per category
data_dir = "./data"

[chart]
bar_thickness = 24
border_radius = 8
# "horizontal" or "vertical"
orientation = "horizontal"
gradient_start = "rgba(79, 70, 229, 1)"
gradient_end = "rgba(165, 180, 252, 0.6)"

[categories.work_tasks]
endpoint = "/api/work-tasks"
# 0 is the "no response" answer
exclude_keys = [0]

# Extra or replacement labels for survey answer codes
[categories.work_tasks.labels]
# "9" = "데이터 거버넌스 체계를 만들어요."

[categories.preferred_qualifications]
endpoint = "/api/preferred-qualifications"

[categories.company_size]
endpoint = "/api/company-size"

[categories.tech_stack]
endpoint = "/api/tech-stack"
limit = 10
word_cloud = true
"#
    }

    pub fn create_sample_config(path: Option<&Path>) -> RoleboardResult<PathBuf> {
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_file_path.exists() {
            return Err(RoleboardError::config_error(
                &format!("{} already exists", config_file_path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, Self::sample_config())?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.source.kind == SourceKind::Http && config.source.base_url.trim().is_empty() {
            errors.push("source.base_url must not be empty for the http source".to_string());
        }
        if config.source.kind == SourceKind::Directory && !Path::new(&config.source.data_dir).is_dir() {
            errors.push(format!("source.data_dir is not a directory: {}", config.source.data_dir));
        }
        if config.source.timeout_secs == 0 {
            errors.push("source.timeout_secs must be greater than 0".to_string());
        }

        if config.chart.gradient_start.trim().is_empty() || config.chart.gradient_end.trim().is_empty() {
            errors.push("chart.gradient_start and chart.gradient_end must both be set".to_string());
        }

        for name in config.unknown_categories() {
            errors.push(format!("categories.{} is not a known category (expected one of: {})", name, Category::available_slugs().join(", ")));
        }

        for category in Category::ALL {
            let Some(category_config) = config.category(category) else {
                continue;
            };
            let key = category.config_key();

            if let Some(endpoint) = &category_config.endpoint {
                if endpoint.trim().is_empty() {
                    errors.push(format!("categories.{}.endpoint must not be empty", key));
                }
            }
            if category_config.limit == Some(0) {
                errors.push(format!("categories.{}.limit must be a positive integer", key));
            }
            if let Err(e) = CategoryLabelMap::default().with_overrides(&category_config.labels) {
                errors.push(format!("categories.{}.labels: {}", key, e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates_structure() {
        let config = ConfigManager::parse(ConfigManager::sample_config()).unwrap();
        assert_eq!(config.category(Category::TechStack).and_then(|c| c.limit), Some(10));
        assert_eq!(config.endpoint_for(Category::CompanySize), "/api/company-size");
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = ConfigManager::parse("").unwrap();
        assert_eq!(config.chart.bar_thickness, 24);
        assert_eq!(config.endpoint_for(Category::WorkTasks), "/api/work-tasks");
    }

    #[test]
    fn zero_limit_is_reported() {
        let config = ConfigManager::parse("[categories.tech_stack]\nlimit = 0\n").unwrap();
        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("tech_stack.limit")));
    }

    #[test]
    fn unknown_category_table_is_reported() {
        let config = ConfigManager::parse("[categories.salary]\nlimit = 3\n").unwrap();
        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("salary")));
    }

    #[test]
    fn slug_keys_are_accepted() {
        let config = ConfigManager::parse("[categories.tech-stack]\nlimit = 5\n").unwrap();
        assert_eq!(config.category(Category::TechStack).and_then(|c| c.limit), Some(5));
    }
}
