use chef_menu::app::session::{RemoveAllResult, RemoveOutcome, REMOVE_ALL_PROMPT, REMOVE_PROMPT};
use chef_menu::core::contact::ContactIntent;
use chef_menu::core::export::ExportFormat;
use chef_menu::domain::ports::{Confirm, ContactLauncher, FixedAnswer};
use chef_menu::{ChefSession, Course, GuestFilter, ItemId, RestaurantConfig, ViewMode};
use url::Url;

#[derive(Default)]
struct RecordingLauncher {
    opened: Vec<(String, String)>,
}

impl ContactLauncher for RecordingLauncher {
    fn launch(&mut self, intent: &ContactIntent, url: &Url) {
        self.opened
            .push((intent.label().to_string(), url.to_string()));
    }
}

#[derive(Default)]
struct CountingConfirm {
    prompts: Vec<String>,
    answer: bool,
}

impl Confirm for CountingConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

fn session() -> ChefSession<RecordingLauncher> {
    ChefSession::new(RestaurantConfig::builtin(), RecordingLauncher::default())
}

#[test]
fn test_every_view_is_reachable_from_every_other() {
    let mut session = session();
    session
        .add("Soup", "Hot tomato soup", Course::Starter, "8.5")
        .unwrap();

    for from in ViewMode::ALL {
        for to in ViewMode::ALL {
            session.set_view(from);
            session.set_view(to);
            assert_eq!(session.view(), to);
            assert!(!session.render().is_empty());
        }
    }
}

#[test]
fn test_remove_prompts_only_for_existing_items() {
    let mut session = session();
    let soup = session
        .add("Soup", "Hot tomato soup", Course::Starter, "8.5")
        .unwrap();

    let mut confirm = CountingConfirm::default();
    assert_eq!(
        session.remove(ItemId(42), &mut confirm),
        RemoveOutcome::NotFound
    );
    assert!(confirm.prompts.is_empty());

    assert_eq!(session.remove(soup.id, &mut confirm), RemoveOutcome::Cancelled);
    assert_eq!(confirm.prompts, vec![REMOVE_PROMPT.to_string()]);
    assert_eq!(session.menu().len(), 1);

    assert_eq!(
        session.remove(soup.id, &mut FixedAnswer(true)),
        RemoveOutcome::Removed(soup)
    );
    assert!(session.menu().is_empty());
}

#[test]
fn test_remove_all_reports_empty_menu_without_prompting() {
    let mut session = session();
    let mut confirm = CountingConfirm {
        answer: true,
        ..Default::default()
    };
    assert_eq!(
        session.remove_all(&mut confirm),
        RemoveAllResult::NothingToRemove
    );
    assert!(confirm.prompts.is_empty());

    session.add("Soup", "Hot", Course::Starter, "5").unwrap();
    session.add("Cake", "Sweet", Course::Dessert, "7").unwrap();
    assert_eq!(
        session.remove_all(&mut FixedAnswer(false)),
        RemoveAllResult::Cancelled
    );
    assert_eq!(session.remove_all(&mut confirm), RemoveAllResult::Removed(2));
    assert_eq!(confirm.prompts, vec![REMOVE_ALL_PROMPT.to_string()]);
}

#[test]
fn test_contact_intents_reach_launcher() {
    let mut session = session();
    session.call().unwrap();
    session.email().unwrap();
    let maps = session.directions().unwrap();

    assert_eq!(maps.host_str(), Some("maps.google.com"));
    let opened = &session.launcher().opened;
    assert_eq!(opened.len(), 3);
    assert_eq!(opened[0], ("call".to_string(), "tel:+271234567890".to_string()));
    assert_eq!(opened[1].0, "email");
    assert_eq!(opened[2].0, "directions");
}

#[test]
fn test_guest_filter_drives_guest_view() {
    let mut session = session();
    session.add("Soup", "Hot", Course::Starter, "5").unwrap();
    session.add("Cake", "Sweet", Course::Dessert, "7").unwrap();

    session.set_view(ViewMode::Guest);
    session.set_guest_filter(GuestFilter::Only(Course::Dessert));
    let text = session.render();
    assert!(text.contains("Showing 1 dessert items"));
    assert!(text.contains("Cake"));
    assert!(!text.contains("Soup"));
}

#[test]
fn test_export_selected_only() {
    let mut session = session();
    let soup = session.add("Soup", "Hot", Course::Starter, "5").unwrap();
    session.add("Cake", "Sweet", Course::Dessert, "7").unwrap();
    session.menu_mut().toggle(soup.id).unwrap();

    let csv = session.export(ExportFormat::Csv, true).unwrap();
    assert!(csv.contains("Soup"));
    assert!(!csv.contains("Cake"));

    let json = session.export(ExportFormat::Json, false).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["course"], "dessert");
    assert_eq!(parsed[1]["price"], "7.00");
}
