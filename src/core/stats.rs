//! Derived figures over the menu. Recomputed on every call; nothing is cached.

use crate::domain::model::{Course, CourseStats, MenuItem, Money, OverallStats};

pub fn course_stats(items: &[MenuItem], course: Course) -> CourseStats {
    let (count, total) = items
        .iter()
        .filter(|item| item.course == course)
        .fold((0usize, Money::ZERO), |(count, total), item| {
            (count + 1, Money::from_cents(total.cents() + item.price.cents()))
        });

    CourseStats {
        course,
        count,
        average: Money::average(total, count),
        total,
    }
}

/// One entry per course, always in starter, main meal, dessert order.
pub fn per_course_stats(items: &[MenuItem]) -> Vec<CourseStats> {
    Course::ALL
        .iter()
        .map(|course| course_stats(items, *course))
        .collect()
}

pub fn overall_stats(items: &[MenuItem]) -> OverallStats {
    let total_value = total_price(items.iter());
    OverallStats {
        total_items: items.len(),
        overall_average: Money::average(total_value, items.len()),
        total_value,
    }
}

/// First item carrying the highest price, or `None` for an empty menu.
pub fn most_expensive(items: &[MenuItem]) -> Option<&MenuItem> {
    items.iter().fold(None, |best: Option<&MenuItem>, item| match best {
        Some(current) if current.price >= item.price => Some(current),
        _ => Some(item),
    })
}

pub fn total_price<'a>(items: impl Iterator<Item = &'a MenuItem>) -> Money {
    items.map(|item| item.price).sum()
}
