use crate::core::contact::DEFAULT_MAPS_URL;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// 餐廳資訊，對應 TOML 設定檔。所有欄位都有預設值，檔案只需覆蓋要改的部分。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    pub restaurant: RestaurantInfo,
    pub hours: BTreeMap<String, String>,
    pub social: SocialMedia,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub about: String,
    pub maps_base_url: String,
    pub hours_notes: Vec<String>,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: "Christoffel's Heavenly Cuisine".to_string(),
            phone: "+27 123 456 7890".to_string(),
            email: "info@christoffelscuisine.com".to_string(),
            address: "123 Gourmet Avenue\nCulinary District, CD 10001".to_string(),
            about: "At Christoffel's Heavenly Cuisine, we craft exceptional dining experiences \
                    using the finest ingredients and traditional cooking techniques."
                .to_string(),
            maps_base_url: DEFAULT_MAPS_URL.to_string(),
            hours_notes: vec![
                "Kitchen closes 30 minutes before closing time".to_string(),
                "Reservations recommended for weekends".to_string(),
            ],
            amenities: vec![
                "Complimentary Valet Parking".to_string(),
                "Vegetarian & Vegan Options".to_string(),
                "Private Event Catering".to_string(),
                "Takeout & Delivery Available".to_string(),
                "All Major Credit Cards Accepted".to_string(),
            ],
        }
    }
}

impl Default for SocialMedia {
    fn default() -> Self {
        Self {
            instagram: Some("christoffels_cuisine".to_string()),
            facebook: Some("ChristoffelsHeavenlyCuisine".to_string()),
            twitter: Some("ChristoffelsFood".to_string()),
        }
    }
}

fn default_hours() -> BTreeMap<String, String> {
    [
        ("monday", "11:00 AM - 10:00 PM"),
        ("tuesday", "11:00 AM - 10:00 PM"),
        ("wednesday", "11:00 AM - 10:00 PM"),
        ("thursday", "11:00 AM - 11:00 PM"),
        ("friday", "11:00 AM - 12:00 AM"),
        ("saturday", "10:00 AM - 12:00 AM"),
        ("sunday", "10:00 AM - 9:00 PM"),
    ]
    .into_iter()
    .map(|(day, hours)| (day.to_string(), hours.to_string()))
    .collect()
}

impl RestaurantConfig {
    /// 內建的預設餐廳資訊
    pub fn builtin() -> Self {
        Self {
            restaurant: RestaurantInfo::default(),
            hours: default_hours(),
            social: SocialMedia::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置；未提供 [hours] 時使用預設營業時間
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let mut config: RestaurantConfig = toml::from_str(&processed_content)?;
        if config.hours.is_empty() {
            config.hours = default_hours();
        }
        Ok(config)
    }

    /// 替換環境變數 (例如 ${RESTAURANT_PHONE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 營業時間，依星期一到星期日排序
    pub fn opening_hours(&self) -> Result<Vec<(Weekday, &str)>> {
        let mut days = Vec::with_capacity(self.hours.len());
        for (day, hours) in &self.hours {
            let weekday = day
                .parse::<Weekday>()
                .map_err(|_| MenuError::InvalidConfigValueError {
                    field: "hours".to_string(),
                    value: day.clone(),
                    reason: "Expected a weekday name such as 'monday'".to_string(),
                })?;
            if days.iter().any(|(seen, _)| *seen == weekday) {
                return Err(MenuError::InvalidConfigValueError {
                    field: "hours".to_string(),
                    value: day.clone(),
                    reason: "Weekday listed more than once".to_string(),
                });
            }
            days.push((weekday, hours.as_str()));
        }
        days.sort_by_key(|(weekday, _)| weekday.num_days_from_monday());
        Ok(days)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("restaurant.name", &self.restaurant.name)?;
        validate_non_empty_string("restaurant.phone", &self.restaurant.phone)?;
        validate_non_empty_string("restaurant.address", &self.restaurant.address)?;
        validate_non_empty_string("restaurant.email", &self.restaurant.email)?;

        if !self.restaurant.email.contains('@') {
            return Err(MenuError::InvalidConfigValueError {
                field: "restaurant.email".to_string(),
                value: self.restaurant.email.clone(),
                reason: "Email address must contain '@'".to_string(),
            });
        }

        validate_url("restaurant.maps_base_url", &self.restaurant.maps_base_url)?;
        self.opening_hours()?;
        Ok(())
    }
}

impl Validate for RestaurantConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
