use crate::domain::model::{Course, GuestFilter, MenuItem};

/// Items visible under `filter`, in menu order.
pub fn filtered(items: &[MenuItem], filter: GuestFilter) -> Vec<&MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

pub fn summary_line(items: &[MenuItem], filter: GuestFilter) -> String {
    let shown = items.iter().filter(|item| filter.matches(item)).count();
    match filter {
        GuestFilter::All => format!("Showing {} total items", shown),
        GuestFilter::Only(course) => format!("Showing {} {} items", shown, course),
    }
}

/// Per-course counts for the guest statistics panel. Only shown for `All` on a non-empty menu.
pub fn course_counts(items: &[MenuItem], filter: GuestFilter) -> Option<Vec<(Course, usize)>> {
    if filter != GuestFilter::All || items.is_empty() {
        return None;
    }
    Some(
        Course::ALL
            .iter()
            .map(|course| {
                let count = items.iter().filter(|item| item.course == *course).count();
                (*course, count)
            })
            .collect(),
    )
}
