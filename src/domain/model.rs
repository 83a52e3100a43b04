use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Monotonically assigned identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| format!("'{}' is not a menu item id", s))
    }
}

/// An amount of money held as whole cents, so two-decimal values are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Rounds a decimal amount half-up to cents. Negative and non-finite input yields `None`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Money((value * 100.0).round() as u64))
    }

    /// Exact half-up rounding of a plain decimal string such as `"8.5"` or `"12.345"`.
    /// Anything else (signs, exponents) goes through [`Money::from_decimal`].
    pub fn from_decimal_str(input: &str) -> Option<Self> {
        let input = input.trim();
        let (whole, frac) = input.split_once('.').unwrap_or((input, ""));
        let plain = !(whole.is_empty() && frac.is_empty())
            && whole.bytes().all(|b| b.is_ascii_digit())
            && frac.bytes().all(|b| b.is_ascii_digit());
        if !plain {
            return input.parse::<f64>().ok().and_then(Money::from_decimal);
        }

        let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let digits: Vec<u64> = frac.bytes().map(|b| u64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let cents = whole.checked_mul(100)? + tenths * 10 + hundredths + u64::from(round_up);
        Some(Money(cents))
    }

    /// Average over `count` values, rounded half-up to cents; zero when `count` is zero.
    pub fn average(total: Money, count: usize) -> Money {
        if count == 0 {
            return Money::ZERO;
        }
        let count = count as u64;
        Money((total.0 * 2 + count) / (count * 2))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Course {
    #[serde(rename = "starter")]
    Starter,
    #[serde(rename = "main meal")]
    MainMeal,
    #[serde(rename = "dessert")]
    Dessert,
}

impl Course {
    /// Fixed display order.
    pub const ALL: [Course; 3] = [Course::Starter, Course::MainMeal, Course::Dessert];

    pub fn as_str(self) -> &'static str {
        match self {
            Course::Starter => "starter",
            Course::MainMeal => "main meal",
            Course::Dessert => "dessert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::MainMeal => "Main meal",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" | "starters" => Ok(Course::Starter),
            "main" | "main meal" | "main-meal" | "main_meal" | "mainmeal" => Ok(Course::MainMeal),
            "dessert" | "desserts" => Ok(Course::Dessert),
            other => Err(format!(
                "unknown course '{}', expected one of: starter, main, dessert",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: Money,
}

/// Restricts the guest view to one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestFilter {
    #[default]
    All,
    Only(Course),
}

impl GuestFilter {
    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            GuestFilter::All => true,
            GuestFilter::Only(course) => item.course == course,
        }
    }
}

impl fmt::Display for GuestFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestFilter::All => f.write_str("all"),
            GuestFilter::Only(course) => course.fmt(f),
        }
    }
}

impl FromStr for GuestFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(GuestFilter::All);
        }
        s.parse::<Course>().map(GuestFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Overview,
    Form,
    Menu,
    Planner,
    Guest,
    Contact,
}

impl ViewMode {
    pub const ALL: [ViewMode; 6] = [
        ViewMode::Overview,
        ViewMode::Form,
        ViewMode::Menu,
        ViewMode::Planner,
        ViewMode::Guest,
        ViewMode::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Overview => "overview",
            ViewMode::Form => "form",
            ViewMode::Menu => "menu",
            ViewMode::Planner => "planner",
            ViewMode::Guest => "guest",
            ViewMode::Contact => "contact",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" | "home" => Ok(ViewMode::Overview),
            "form" | "add" => Ok(ViewMode::Form),
            "menu" => Ok(ViewMode::Menu),
            "planner" => Ok(ViewMode::Planner),
            "guest" => Ok(ViewMode::Guest),
            "contact" | "info" => Ok(ViewMode::Contact),
            other => Err(format!(
                "unknown view '{}', expected one of: overview, form, menu, planner, guest, contact",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseStats {
    pub course: Course,
    pub count: usize,
    pub average: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallStats {
    pub total_items: usize,
    pub overall_average: Money,
    pub total_value: Money,
}

/// Informational result of `remove_all`; an empty menu is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveAllOutcome {
    NothingToRemove,
    Removed(usize),
}

/// Informational result of `select_all`; an empty menu is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllOutcome {
    NothingToAdd,
    Selected(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounding() {
        assert_eq!(Money::from_decimal(8.5).unwrap().to_string(), "8.50");
        assert_eq!(Money::from_decimal_str("12.345").unwrap().cents(), 1235);
        assert_eq!(Money::from_decimal_str("99.994").unwrap().cents(), 9999);
        assert_eq!(Money::from_decimal_str(".5").unwrap().to_string(), "0.50");
        assert_eq!(Money::from_decimal_str("15").unwrap().to_string(), "15.00");
        assert_eq!(Money::from_decimal_str("1e1").unwrap().to_string(), "10.00");
        assert_eq!(Money::from_decimal_str("abc"), None);
        assert_eq!(Money::from_decimal_str("."), None);
        assert_eq!(Money::from_decimal(-1.0), None);
        assert_eq!(Money::from_decimal(f64::NAN), None);
    }

    #[test]
    fn test_money_average() {
        let total = Money::from_cents(2350);
        assert_eq!(Money::average(total, 2).to_string(), "11.75");
        assert_eq!(Money::average(Money::from_cents(100), 3).to_string(), "0.33");
        assert_eq!(Money::average(Money::from_cents(200), 3).to_string(), "0.67");
        assert_eq!(Money::average(Money::from_cents(500), 0), Money::ZERO);
    }

    #[test]
    fn test_course_parsing() {
        assert_eq!("Main".parse::<Course>().unwrap(), Course::MainMeal);
        assert_eq!("main meal".parse::<Course>().unwrap(), Course::MainMeal);
        assert!("soup".parse::<Course>().is_err());
        assert_eq!(
            "dessert".parse::<GuestFilter>().unwrap(),
            GuestFilter::Only(Course::Dessert)
        );
        assert_eq!("ALL".parse::<GuestFilter>().unwrap(), GuestFilter::All);
    }

    #[test]
    fn test_view_mode_parsing() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.as_str().parse::<ViewMode>().unwrap(), mode);
        }
        assert_eq!("home".parse::<ViewMode>().unwrap(), ViewMode::Overview);
    }

    #[test]
    fn test_item_id_parsing() {
        assert_eq!("#7".parse::<ItemId>().unwrap(), ItemId(7));
        assert!("seven".parse::<ItemId>().is_err());
    }
}
