use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::pin::Pin;
use std::rc::Rc;

use futures::executor::block_on;
use roster::{Activity, ActivityCatalog, MessageBody};

use super::*;
use crate::state::catalog::ListStatus;

// =============================================================
// Scripted backend
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Fetch,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

#[derive(Default)]
struct ScriptedApi {
    calls: RefCell<Vec<Call>>,
    catalogs: RefCell<VecDeque<Result<ActivityCatalog, ApiError>>>,
    mutations: RefCell<VecDeque<Result<MessageBody, ApiError>>>,
}

impl ScriptedApi {
    fn next_mutation(&self) -> Result<MessageBody, ApiError> {
        self.mutations
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

impl ActivityApi for ScriptedApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.calls.borrow_mut().push(Call::Fetch);
        self.catalogs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted catalog".to_owned())))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageBody, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Signup { activity: activity.to_owned(), email: email.to_owned() });
        self.next_mutation()
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageBody, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Unregister { activity: activity.to_owned(), email: email.to_owned() });
        self.next_mutation()
    }
}

// =============================================================
// Manual host: queued tasks and a fake clock
// =============================================================

type Task = Pin<Box<dyn Future<Output = ()>>>;

struct Inner {
    api: ScriptedApi,
    state: RefCell<PanelState>,
    alive: Cell<bool>,
    spawned: RefCell<VecDeque<Task>>,
    timers: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
    now_ms: Cell<u64>,
}

#[derive(Clone)]
struct TestHost(Rc<Inner>);

impl TestHost {
    fn new() -> Self {
        Self(Rc::new(Inner {
            api: ScriptedApi::default(),
            state: RefCell::new(PanelState::default()),
            alive: Cell::new(true),
            spawned: RefCell::new(VecDeque::new()),
            timers: RefCell::new(Vec::new()),
            now_ms: Cell::new(0),
        }))
    }

    fn script_catalog(&self, outcome: Result<ActivityCatalog, ApiError>) {
        self.0.api.catalogs.borrow_mut().push_back(outcome);
    }

    fn script_mutation(&self, outcome: Result<MessageBody, ApiError>) {
        self.0.api.mutations.borrow_mut().push_back(outcome);
    }

    fn calls(&self) -> Vec<Call> {
        self.0.api.calls.borrow().clone()
    }

    fn state(&self) -> Ref<'_, PanelState> {
        self.0.state.borrow()
    }

    fn fill_form(&self, email: &str, activity: &str) {
        let mut state = self.0.state.borrow_mut();
        state.form.email = email.to_owned();
        state.form.activity = activity.to_owned();
    }

    fn pending_tasks(&self) -> usize {
        self.0.spawned.borrow().len()
    }

    fn run_spawned(&self) {
        loop {
            let next = self.0.spawned.borrow_mut().pop_front();
            match next {
                Some(task) => block_on(task),
                None => break,
            }
        }
    }

    fn advance(&self, ms: u64) {
        let now = self.0.now_ms.get() + ms;
        self.0.now_ms.set(now);
        loop {
            let due = {
                let mut timers = self.0.timers.borrow_mut();
                timers
                    .iter()
                    .position(|(at, _)| *at <= now)
                    .map(|idx| timers.remove(idx))
            };
            match due {
                Some((_, task)) => task(),
                None => break,
            }
        }
    }
}

impl PanelHost for TestHost {
    type Api = ScriptedApi;

    fn api(&self) -> &ScriptedApi {
        &self.0.api
    }

    fn update<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        if !self.0.alive.get() {
            return None;
        }
        Some(f(&mut self.0.state.borrow_mut()))
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.0.spawned.borrow_mut().push_back(Box::pin(task));
    }

    fn after(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
        let at = self.0.now_ms.get() + u64::from(delay_ms);
        self.0.timers.borrow_mut().push((at, Box::new(task)));
    }
}

// =============================================================
// Fixtures
// =============================================================

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "desc".to_owned(),
        schedule: "Fridays".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn chess_catalog(participants: &[&str]) -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert("Chess Club", activity(12, participants));
    catalog.insert("Gym Class", activity(30, &[]));
    catalog
}

fn rejected(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Rejected { status, detail: detail.map(str::to_owned) }
}

fn entry(activity: &str, email: &str) -> ParticipantEntry {
    ParticipantEntry { activity: activity.to_owned(), email: email.to_owned() }
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_renders_cards_and_options() {
    let host = TestHost::new();
    host.script_catalog(Ok(chess_catalog(&["michael@mergington.edu"])));

    block_on(refresh_activities(&host));

    let state = host.state();
    assert_eq!(state.catalog.status, ListStatus::Ready);
    assert_eq!(state.catalog.cards.len(), 2);
    assert_eq!(state.catalog.options.len(), 3);
    assert_eq!(state.catalog.cards[0].availability_text(), "11 spots left");
    assert_eq!(host.calls(), vec![Call::Fetch]);
}

#[test]
fn refresh_failure_shows_notice_without_status_message() {
    let host = TestHost::new();
    host.script_catalog(Err(ApiError::Decode("expected value".to_owned())));

    block_on(refresh_activities(&host));

    let state = host.state();
    assert_eq!(state.catalog.status, ListStatus::Failed);
    assert!(!state.status.is_visible());
}

#[test]
fn refresh_after_teardown_makes_no_request() {
    let host = TestHost::new();
    host.0.alive.set(false);
    block_on(refresh_activities(&host));
    assert!(host.calls().is_empty());
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_success_shows_message_and_resets_form() {
    let host = TestHost::new();
    host.fill_form("new@mergington.edu", "Chess Club");
    host.script_mutation(Ok(MessageBody::new("Signed up!")));

    block_on(submit_signup(&host));

    let state = host.state();
    assert_eq!(state.status.text(), "Signed up!");
    assert_eq!(state.status.class_name(), "success");
    assert_eq!(state.form.email, "");
    assert_eq!(state.form.activity, "");
    assert_eq!(
        host.calls(),
        vec![Call::Signup { activity: "Chess Club".to_owned(), email: "new@mergington.edu".to_owned() }]
    );
}

#[test]
fn signup_does_not_refresh_the_list() {
    let host = TestHost::new();
    host.fill_form("new@mergington.edu", "Chess Club");
    host.script_mutation(Ok(MessageBody::new("Signed up!")));

    block_on(submit_signup(&host));
    host.run_spawned();

    assert!(!host.calls().contains(&Call::Fetch));
}

#[test]
fn signup_rejection_shows_detail_and_keeps_form() {
    let host = TestHost::new();
    host.fill_form("dup@mergington.edu", "Chess Club");
    host.script_mutation(Err(rejected(400, Some("Already registered"))));

    block_on(submit_signup(&host));

    let state = host.state();
    assert_eq!(state.status.text(), "Already registered");
    assert_eq!(state.status.class_name(), "error");
    assert_eq!(state.form.email, "dup@mergington.edu");
    assert_eq!(state.form.activity, "Chess Club");
}

#[test]
fn signup_rejection_without_detail_uses_fallback() {
    let host = TestHost::new();
    host.fill_form("a@b.edu", "Chess Club");
    host.script_mutation(Err(rejected(500, None)));

    block_on(submit_signup(&host));

    assert_eq!(host.state().status.text(), SIGNUP_FALLBACK);
}

#[test]
fn signup_transport_failure_shows_generic_message() {
    let host = TestHost::new();
    host.fill_form("a@b.edu", "Chess Club");
    host.script_mutation(Err(ApiError::Transport("Failed to fetch".to_owned())));

    block_on(submit_signup(&host));

    let state = host.state();
    assert_eq!(state.status.text(), "Failed to sign up. Please try again.");
    assert_eq!(state.status.class_name(), "error");
    assert_eq!(state.form.email, "a@b.edu");
}

#[test]
fn signup_with_placeholder_selected_sends_empty_activity() {
    let host = TestHost::new();
    host.fill_form("a@b.edu", "");
    host.script_mutation(Err(rejected(404, Some("Activity not found"))));

    block_on(submit_signup(&host));

    assert_eq!(host.calls(), vec![Call::Signup { activity: String::new(), email: "a@b.edu".to_owned() }]);
    assert_eq!(host.state().status.text(), "Activity not found");
}

// =============================================================
// Unregister
// =============================================================

#[test]
fn unregister_success_refreshes_exactly_once_after_delete() {
    let host = TestHost::new();
    host.script_mutation(Ok(MessageBody::new("Unregistered michael@mergington.edu from Chess Club")));
    host.script_catalog(Ok(chess_catalog(&[])));

    block_on(unregister_participant(&host, entry("Chess Club", "michael@mergington.edu")));
    assert_eq!(host.pending_tasks(), 1);
    host.run_spawned();

    assert_eq!(
        host.calls(),
        vec![
            Call::Unregister { activity: "Chess Club".to_owned(), email: "michael@mergington.edu".to_owned() },
            Call::Fetch,
        ]
    );
    let state = host.state();
    assert_eq!(state.status.text(), "Unregistered michael@mergington.edu from Chess Club");
    assert_eq!(state.status.class_name(), "success");
    assert!(state.catalog.cards[0].participants.is_empty());
}

#[test]
fn unregister_rejection_shows_detail_without_refresh() {
    let host = TestHost::new();
    host.script_mutation(Err(rejected(400, Some("Student is not registered for this activity"))));

    block_on(unregister_participant(&host, entry("Chess Club", "ghost@mergington.edu")));
    host.run_spawned();

    assert_eq!(host.pending_tasks(), 0);
    assert!(!host.calls().contains(&Call::Fetch));
    let state = host.state();
    assert_eq!(state.status.text(), "Student is not registered for this activity");
    assert_eq!(state.status.class_name(), "error");
}

#[test]
fn unregister_rejection_without_detail_uses_fallback() {
    let host = TestHost::new();
    host.script_mutation(Err(rejected(500, None)));

    block_on(unregister_participant(&host, entry("Chess Club", "a@b.edu")));

    assert_eq!(host.state().status.text(), "Failed to unregister");
}

#[test]
fn unregister_transport_failure_shows_generic_message() {
    let host = TestHost::new();
    host.script_mutation(Err(ApiError::Transport("Failed to fetch".to_owned())));

    block_on(unregister_participant(&host, entry("Chess Club", "a@b.edu")));

    assert_eq!(host.state().status.text(), UNREGISTER_FAILED);
    assert_eq!(host.pending_tasks(), 0);
}

#[test]
fn unregister_passes_bound_pair_verbatim() {
    let host = TestHost::new();
    host.script_mutation(Err(rejected(404, Some("Activity not found"))));

    block_on(unregister_participant(&host, entry("Art & Craft", "<b>x</b>")));

    assert_eq!(
        host.calls(),
        vec![Call::Unregister { activity: "Art & Craft".to_owned(), email: "<b>x</b>".to_owned() }]
    );
}

// =============================================================
// Auto-hide
// =============================================================

#[test]
fn status_hides_at_five_seconds() {
    let host = TestHost::new();
    host.fill_form("a@b.edu", "Chess Club");
    host.script_mutation(Ok(MessageBody::new("Signed up!")));
    block_on(submit_signup(&host));

    host.advance(4999);
    assert!(host.state().status.is_visible());
    host.advance(1);
    assert!(!host.state().status.is_visible());
}

#[test]
fn error_messages_also_auto_hide() {
    let host = TestHost::new();
    host.script_mutation(Err(ApiError::Transport("offline".to_owned())));
    block_on(unregister_participant(&host, entry("Chess Club", "a@b.edu")));

    assert!(host.state().status.is_visible());
    host.advance(u64::from(AUTO_HIDE_MS));
    assert!(!host.state().status.is_visible());
}

#[test]
fn earlier_timer_does_not_hide_later_message() {
    let host = TestHost::new();
    host.fill_form("a@b.edu", "Chess Club");
    host.script_mutation(Ok(MessageBody::new("first")));
    block_on(submit_signup(&host));

    host.advance(3000);
    host.fill_form("b@b.edu", "Chess Club");
    host.script_mutation(Err(rejected(400, Some("second"))));
    block_on(submit_signup(&host));

    host.advance(2000);
    assert!(host.state().status.is_visible());
    assert_eq!(host.state().status.text(), "second");

    host.advance(3000);
    assert!(!host.state().status.is_visible());
}

#[test]
fn overlapping_unregisters_each_refresh_once() {
    let host = TestHost::new();
    host.script_mutation(Ok(MessageBody::new("Unregistered a")));
    host.script_mutation(Ok(MessageBody::new("Unregistered b")));
    host.script_catalog(Ok(chess_catalog(&["b@x.edu"])));
    host.script_catalog(Ok(chess_catalog(&[])));

    block_on(unregister_participant(&host, entry("Chess Club", "a@x.edu")));
    block_on(unregister_participant(&host, entry("Chess Club", "b@x.edu")));
    assert_eq!(host.pending_tasks(), 2);
    host.run_spawned();

    let fetches = host.calls().iter().filter(|c| **c == Call::Fetch).count();
    assert_eq!(fetches, 2);
    let state = host.state();
    assert_eq!(state.status.text(), "Unregistered b");
    assert!(state.catalog.cards[0].participants.is_empty());
}
