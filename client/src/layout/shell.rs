//! Framework-independent page-shell composition.
//!
//! DESIGN
//! ======
//! A shell is a fixed chrome producer paired with a content slot. The pairing
//! (`ShellConfig`) is built once and never mutated; the slot is resolved on
//! every composition through an explicit `NestedViews` handle rather than
//! ambient router state, so the composition contract can be exercised with
//! plain values in tests.
//!
//! The view type is generic: the Leptos layer composes `AnyView`s, tests
//! compose strings.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// Root container: full viewport height, children laid out horizontally.
pub const ROOT_CLASS: &str = "flex h-screen";

/// Content region: takes the remaining width, scrolls, padded.
pub const CONTENT_CLASS: &str = "flex-1 overflow-auto p-6";

/// Which chrome a shell embeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShellVariant {
    Admin,
    Club,
}

impl ShellVariant {
    /// Stable name used for the `data-shell` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Club => "club",
        }
    }
}

/// Read-only handle to the router's current nested-view resolution.
pub trait NestedViews {
    type View;

    /// The view of the active child route, or `None` when no child is active.
    fn active_view(&self) -> Option<Self::View>;
}

/// Immutable pairing of a shell variant with its chrome producer.
pub struct ShellConfig<V> {
    variant: ShellVariant,
    chrome: fn() -> V,
}

impl<V> ShellConfig<V> {
    pub const fn new(variant: ShellVariant, chrome: fn() -> V) -> Self {
        Self { variant, chrome }
    }

    pub const fn variant(&self) -> ShellVariant {
        self.variant
    }

    /// Compose one frame: chrome first, then the content slot.
    ///
    /// Each collaborator is invoked exactly once. Nothing they do (including
    /// panicking) is intercepted here.
    pub fn compose<N>(&self, nested: &N) -> ShellFrame<V>
    where
        N: NestedViews<View = V> + ?Sized,
    {
        let chrome = (self.chrome)();
        let content = nested.active_view();
        ShellFrame { variant: self.variant, chrome, content }
    }
}

// Manual impls: the fields are `Copy` whatever `V` is.
impl<V> Clone for ShellConfig<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ShellConfig<V> {}

impl<V> std::fmt::Debug for ShellConfig<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellConfig").field("variant", &self.variant).finish_non_exhaustive()
    }
}

/// Output of a single composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellFrame<V> {
    pub variant: ShellVariant,
    pub chrome: V,
    /// `None` renders an empty content region.
    pub content: Option<V>,
}
