use std::cell::{Cell, RefCell};

use super::*;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(call: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

fn take_calls() -> Vec<&'static str> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

fn admin_nav() -> String {
    record("chrome");
    "admin-nav".to_owned()
}

fn club_nav() -> String {
    record("chrome");
    "club-nav".to_owned()
}

const ADMIN: ShellConfig<String> = ShellConfig::new(ShellVariant::Admin, admin_nav);
const CLUB: ShellConfig<String> = ShellConfig::new(ShellVariant::Club, club_nav);

/// Router stand-in with a fixed resolution and a resolution counter.
struct FakeRouter {
    active: Option<&'static str>,
    resolutions: Cell<usize>,
}

impl FakeRouter {
    fn resolving(active: Option<&'static str>) -> Self {
        Self { active, resolutions: Cell::new(0) }
    }
}

impl NestedViews for FakeRouter {
    type View = String;

    fn active_view(&self) -> Option<String> {
        record("content");
        self.resolutions.set(self.resolutions.get() + 1);
        self.active.map(str::to_owned)
    }
}

// =============================================================
// Composition order and cardinality
// =============================================================

#[test]
fn compose_renders_chrome_then_content_once_each() {
    take_calls();
    let router = FakeRouter::resolving(Some("Dashboard"));

    let _ = ADMIN.compose(&router);

    assert_eq!(take_calls(), vec!["chrome", "content"]);
    assert_eq!(router.resolutions.get(), 1);
}

#[test]
fn compose_order_holds_for_both_variants() {
    let router = FakeRouter::resolving(None);
    for config in [ADMIN, CLUB] {
        take_calls();
        let _ = config.compose(&router);
        assert_eq!(take_calls(), vec!["chrome", "content"], "variant {:?}", config.variant());
    }
}

#[test]
fn compose_resolves_content_on_every_call() {
    let router = FakeRouter::resolving(Some("Members"));
    let _ = CLUB.compose(&router);
    let _ = CLUB.compose(&router);
    let _ = CLUB.compose(&router);
    assert_eq!(router.resolutions.get(), 3);
}

// =============================================================
// Empty content slot
// =============================================================

#[test]
fn compose_without_active_view_leaves_content_empty() {
    let router = FakeRouter::resolving(None);
    let frame = ADMIN.compose(&router);
    assert_eq!(frame.chrome, "admin-nav");
    assert_eq!(frame.content, None);
}

// =============================================================
// Variant isolation
// =============================================================

#[test]
fn admin_shell_embeds_only_admin_chrome() {
    let frame = ADMIN.compose(&FakeRouter::resolving(None));
    assert_eq!(frame.variant, ShellVariant::Admin);
    assert_eq!(frame.chrome, "admin-nav");
}

#[test]
fn club_shell_embeds_only_club_chrome() {
    let frame = CLUB.compose(&FakeRouter::resolving(None));
    assert_eq!(frame.variant, ShellVariant::Club);
    assert_eq!(frame.chrome, "club-nav");
}

#[test]
fn variant_names_are_distinct() {
    assert_eq!(ShellVariant::Admin.as_str(), "admin");
    assert_eq!(ShellVariant::Club.as_str(), "club");
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn compose_twice_with_same_router_state_is_identical() {
    let router = FakeRouter::resolving(Some("Dashboard"));
    assert_eq!(ADMIN.compose(&router), ADMIN.compose(&router));
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn admin_shell_with_dashboard_active() {
    let frame = ADMIN.compose(&FakeRouter::resolving(Some("Dashboard")));
    assert_eq!(
        frame,
        ShellFrame {
            variant: ShellVariant::Admin,
            chrome: "admin-nav".to_owned(),
            content: Some("Dashboard".to_owned()),
        }
    );
}

#[test]
fn club_shell_with_nothing_active() {
    let frame = CLUB.compose(&FakeRouter::resolving(None));
    assert_eq!(
        frame,
        ShellFrame { variant: ShellVariant::Club, chrome: "club-nav".to_owned(), content: None }
    );
}

#[test]
fn swapping_variant_changes_only_chrome() {
    let router = FakeRouter::resolving(Some("Events"));
    let admin = ADMIN.compose(&router);
    let club = CLUB.compose(&router);

    assert_ne!(admin.chrome, club.chrome);
    assert_eq!(admin.content, club.content);
}

#[test]
fn compose_accepts_trait_object_handle() {
    let router = FakeRouter::resolving(Some("Clubs"));
    let handle: &dyn NestedViews<View = String> = &router;
    assert_eq!(ADMIN.compose(handle).content.as_deref(), Some("Clubs"));
}

#[test]
fn shell_config_debug_shows_variant() {
    assert!(format!("{:?}", ADMIN).contains("Admin"));
}

#[test]
fn shell_config_is_copy_for_non_copy_views() {
    fn assert_copy<T: Copy>(_: T) {}

    let config = ADMIN;
    let copied = config;
    assert_copy(config);
    assert_eq!(copied.variant(), config.variant());
}
