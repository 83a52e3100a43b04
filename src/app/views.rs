//! Plain-text rendering, one function per view. Every figure is recomputed from
//! the menu on each call.

use crate::config::restaurant::RestaurantConfig;
use crate::core::guest;
use crate::core::menu::Menu;
use crate::domain::model::{Course, GuestFilter, MenuItem, ViewMode};
use crate::utils::validation::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

pub fn render(
    view: ViewMode,
    menu: &Menu,
    filter: GuestFilter,
    restaurant: &RestaurantConfig,
) -> String {
    match view {
        ViewMode::Overview => render_overview(menu),
        ViewMode::Form => render_form(),
        ViewMode::Menu => render_menu(menu),
        ViewMode::Planner => render_planner(menu),
        ViewMode::Guest => render_guest(menu, filter, &restaurant.restaurant.name),
        ViewMode::Contact => render_contact(restaurant),
    }
}

fn item_line(item: &MenuItem) -> String {
    format!(
        "#{} [{}] {}  ${}",
        item.id,
        item.course.label(),
        item.name,
        item.price
    )
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

pub fn render_overview(menu: &Menu) -> String {
    let overall = menu.overall_stats();
    let mut lines = vec![
        "=== Chef's Menu Overview ===".to_string(),
        format!(
            "Total items: {}    Overall average: ${}",
            overall.total_items, overall.overall_average
        ),
        String::new(),
        "Course breakdown:".to_string(),
    ];

    for stat in menu.per_course_stats() {
        if stat.count == 0 {
            lines.push(format!("  {:<10} no items yet", stat.course.label()));
        } else {
            lines.push(format!(
                "  {:<10} {:<9} avg ${:<7} total ${}",
                stat.course.label(),
                plural(stat.count, "item"),
                stat.average.to_string(),
                stat.total
            ));
        }
    }

    lines.push(String::new());
    lines.push("Recent activity:".to_string());
    match menu.most_expensive() {
        Some(item) => {
            lines.push(format!("  Most expensive: ${} ({})", item.price, item.name));
            lines.push(format!("  Total menu value: ${}", overall.total_value));
        }
        None => lines.push("  No recent activity. Start by adding menu items!".to_string()),
    }

    lines.push(String::new());
    let mut actions = vec!["view form", "view menu", "view planner", "view guest", "view contact"];
    if !menu.is_empty() {
        actions.push("remove-all");
    }
    lines.push(format!("Quick actions: {}", actions.join(" | ")));
    lines.join("\n")
}

pub fn render_form() -> String {
    let courses: Vec<&str> = Course::ALL.iter().map(|c| c.label()).collect();
    [
        "=== Add Menu Item ===".to_string(),
        "Usage: add \"<name>\" \"<description>\" <price> --course <starter|main|dessert>"
            .to_string(),
        format!("  Name:        required, up to {} characters", MAX_NAME_LENGTH),
        format!(
            "  Description: required, up to {} characters",
            MAX_DESCRIPTION_LENGTH
        ),
        format!("  Course:      {}", courses.join(", ")),
        "  Price:       greater than 0 and less than 100, stored to 2 decimals".to_string(),
    ]
    .join("\n")
}

pub fn render_menu(menu: &Menu) -> String {
    if menu.is_empty() {
        return [
            "=== Full Menu ===",
            "No menu items yet. Use 'view form' to add your first dish.",
        ]
        .join("\n");
    }

    let mut lines = vec![format!("=== Full Menu ({}) ===", plural(menu.len(), "item"))];
    for item in menu.items() {
        lines.push(item_line(item));
        lines.push(format!("    {}", item.description));
    }
    lines.push(String::new());
    lines.push("Use 'remove <id>' to delete a dish.".to_string());
    lines.join("\n")
}

pub fn render_planner(menu: &Menu) -> String {
    let planner = menu.planner();
    let name = if planner.name().trim().is_empty() {
        "(untitled)"
    } else {
        planner.name()
    };

    let mut lines = vec![
        "=== Menu Planner ===".to_string(),
        format!("Menu name: {}", name),
    ];
    if !planner.description().trim().is_empty() {
        lines.push(format!("Description: {}", planner.description()));
    }
    lines.push(format!(
        "Selected: {} of {}    Total: ${}",
        planner.len(),
        plural(menu.len(), "item"),
        menu.planner_total()
    ));
    lines.push(String::new());

    if menu.is_empty() {
        lines.push("No menu items available. Add some dishes first.".to_string());
        return lines.join("\n");
    }

    for item in menu.items() {
        let marker = if planner.is_selected(item.id) { "[x]" } else { "[ ]" };
        lines.push(format!("{} {}", marker, item_line(item)));
    }

    let selected = menu.selected_items();
    if !selected.is_empty() {
        lines.push(String::new());
        lines.push("Selected items:".to_string());
        for item in selected {
            lines.push(format!("  - {}  ${}", item.name, item.price));
        }
    }
    lines.join("\n")
}

pub fn render_guest(menu: &Menu, filter: GuestFilter, restaurant_name: &str) -> String {
    let mut lines = vec![
        format!("=== {}: Guest Menu ===", restaurant_name),
        format!("Filter: {}", filter),
        guest::summary_line(menu.items(), filter),
        String::new(),
    ];

    if menu.is_empty() {
        lines.push("Our menu is being prepared. Please check back soon!".to_string());
        return lines.join("\n");
    }

    let visible = menu.filtered(filter);
    if visible.is_empty() {
        lines.push(format!("No {} items available right now.", filter));
    }
    for item in visible {
        lines.push(format!("{}  ${}", item.name, item.price));
        lines.push(format!("    {} | {}", item.course.label(), item.description));
    }

    if let Some(counts) = guest::course_counts(menu.items(), filter) {
        let parts: Vec<String> = counts
            .iter()
            .map(|(course, count)| format!("{}s: {}", course.label(), count))
            .collect();
        lines.push(String::new());
        lines.push(format!("Course statistics: {}", parts.join(" | ")));
    }
    lines.join("\n")
}

pub fn render_contact(restaurant: &RestaurantConfig) -> String {
    let info = &restaurant.restaurant;
    let mut lines = vec![
        "=== Contact & Information ===".to_string(),
        info.name.clone(),
        String::new(),
        info.about.clone(),
        String::new(),
        format!("Phone:    {}  (call)", info.phone),
        format!("Email:    {}  (email)", info.email),
        format!(
            "Location: {}  (directions)",
            info.address.lines().collect::<Vec<_>>().join(", ")
        ),
        String::new(),
        "Hours of operation:".to_string(),
    ];

    match restaurant.opening_hours() {
        Ok(hours) => {
            for (day, time) in hours {
                lines.push(format!("  {:<10} {}", format!("{}:", weekday_name(day)), time));
            }
        }
        Err(e) => lines.push(format!("  unavailable ({})", e)),
    }
    for (index, note) in info.hours_notes.iter().enumerate() {
        lines.push(format!("  {} {}", "*".repeat(index + 1), note));
    }

    let social = &restaurant.social;
    let handles: Vec<String> = [
        social.instagram.as_ref().map(|h| format!("Instagram @{}", h)),
        social.facebook.as_ref().map(|h| format!("Facebook {}", h)),
        social.twitter.as_ref().map(|h| format!("Twitter @{}", h)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !handles.is_empty() {
        lines.push(String::new());
        lines.push(format!("Follow us: {}", handles.join(" | ")));
    }

    if !info.amenities.is_empty() {
        lines.push(String::new());
        lines.push("Additional information:".to_string());
        for amenity in &info.amenities {
            lines.push(format!("  - {}", amenity));
        }
    }
    lines.join("\n")
}

fn weekday_name(day: chrono::Weekday) -> &'static str {
    match day {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add("Soup", "Hot tomato soup", Course::Starter, "8.5").unwrap();
        menu.add("Steak", "Grilled sirloin", Course::MainMeal, "15.00").unwrap();
        menu
    }

    #[test]
    fn test_overview_empty_menu() {
        let out = render_overview(&Menu::new());
        assert!(out.contains("Total items: 0    Overall average: $0.00"));
        assert!(out.contains("No recent activity"));
        assert!(!out.contains("remove-all"));
    }

    #[test]
    fn test_overview_shows_figures() {
        let out = render_overview(&sample_menu());
        assert!(out.contains("Overall average: $11.75"));
        assert!(out.contains("Most expensive: $15.00 (Steak)"));
        assert!(out.contains("Total menu value: $23.50"));
        assert!(out.contains("Dessert    no items yet"));
    }

    #[test]
    fn test_planner_marks_selection() {
        let mut menu = sample_menu();
        let soup = menu.items()[0].id;
        menu.toggle(soup).unwrap();
        menu.set_planner_name("Lunch");

        let out = render_planner(&menu);
        assert!(out.contains("Menu name: Lunch"));
        assert!(out.contains("Selected: 1 of 2 items    Total: $8.50"));
        assert!(out.contains("[x] #1 [Starter] Soup"));
        assert!(out.contains("[ ] #2 [Main meal] Steak"));
    }

    #[test]
    fn test_guest_view_filter() {
        let menu = sample_menu();
        let out = render_guest(&menu, GuestFilter::Only(Course::MainMeal), "Bistro");
        assert!(out.contains("Showing 1 main meal items"));
        assert!(out.contains("Steak  $15.00"));
        assert!(!out.contains("Soup"));
        assert!(!out.contains("Course statistics"));

        let all = render_guest(&menu, GuestFilter::All, "Bistro");
        assert!(all.contains("Course statistics: Starters: 1 | Main meals: 1 | Desserts: 0"));
    }

    #[test]
    fn test_contact_lists_hours_in_week_order() {
        let out = render_contact(&RestaurantConfig::builtin());
        let monday = out.find("Monday:").unwrap();
        let sunday = out.find("Sunday:").unwrap();
        assert!(monday < sunday);
        assert!(out.contains("123 Gourmet Avenue, Culinary District, CD 10001"));
        assert!(out.contains("Instagram @christoffels_cuisine"));
    }
}
