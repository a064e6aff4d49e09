//! Browse Flow Integration Test
//!
//! Drives a whole session through the public API the UI uses.

use std::cell::RefCell;

use lost_found_core::{
    AppConfig, DisplayMode, ItemService, LostFoundError, MockItemService, Prompter, RemoveOutcome,
    SelectedFile, ViewController,
};

#[derive(Default)]
struct ScriptedPrompter {
    answers: RefCell<Vec<bool>>,
    log: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn with_answers(answers: &[bool]) -> Self {
        let mut queue = answers.to_vec();
        queue.reverse();
        Self { answers: RefCell::new(queue), log: RefCell::new(Vec::new()) }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.log.borrow_mut().push(format!("confirm: {message}"));
        self.answers.borrow_mut().pop().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.log.borrow_mut().push(format!("alert: {message}"));
    }
}

fn labels(display: &DisplayMode) -> Vec<String> {
    match display {
        DisplayMode::Grid(items) => items.iter().map(|i| i.label.clone()).collect(),
        DisplayMode::Empty => Vec::new(),
    }
}

#[test]
fn test_full_session() {
    let config = AppConfig::from_json(r#"{ "uploadDelayMs": 0 }"#).unwrap();
    let service = MockItemService::new(config.seed(), config.classification.clone());
    let mut controller = ViewController::new(service, &config);
    controller.initialize().unwrap();

    let prompter = ScriptedPrompter::with_answers(&[false, true]);

    // Tag shortcut, then manual search
    controller.select_tag("Bottle");
    assert_eq!(labels(&controller.display()), ["Bottle"]);
    controller.set_query("phone");
    assert_eq!(controller.display(), DisplayMode::Empty);
    assert_eq!(controller.active_tag(), None);

    // Declined, then confirmed removal
    controller.set_query("");
    assert_eq!(controller.remove_item(4, &prompter).unwrap(), RemoveOutcome::Declined);
    assert_eq!(controller.remove_item(4, &prompter).unwrap(), RemoveOutcome::Removed);
    assert_eq!(controller.remove_item(999, &prompter).unwrap(), RemoveOutcome::NotFound);
    assert_eq!(labels(&controller.display()), ["Wallet", "Bottle", "Keys", "Notebook"]);

    // Upload without, then with a file
    controller.open_upload();
    assert_eq!(
        controller.submit_upload(None, &prompter).unwrap_err(),
        LostFoundError::NoFileSelected
    );
    let file = SelectedFile { name: "bag.png".to_string(), size: 10 };
    let ticket = controller.submit_upload(Some(&file), &prompter).unwrap();
    controller.finish_upload(ticket, b"png", 1_000, &prompter).unwrap();

    assert!(!controller.is_upload_open());
    assert_eq!(
        labels(&controller.display()),
        ["Backpack", "Wallet", "Bottle", "Keys", "Notebook"]
    );
    assert_eq!(
        prompter.log.borrow().as_slice(),
        [
            "confirm: Did you retrieve this item? Removing it from the list.",
            "confirm: Did you retrieve this item? Removing it from the list.",
            "alert: Please select an image first.",
            "alert: Item identified as \"Backpack\" and added!",
        ]
    );
}

#[test]
fn test_service_stays_in_step_with_controller() {
    let mut service = MockItemService::default();
    service.delete_item(1).unwrap();
    let mut controller = ViewController::new(service, &AppConfig::default());
    controller.initialize().unwrap();
    assert_eq!(controller.items().len(), 4);
    assert!(controller.items().iter().all(|i| i.id != 1));
}
