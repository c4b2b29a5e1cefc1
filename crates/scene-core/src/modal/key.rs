use strum::{AsRefStr, Display, EnumIter};

/// Modals the scene page opens and closes.
///
/// The string form is the registry key shared with the modal widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum ModalKey {
    /// First-run onboarding shown to anonymous visitors after sending a message.
    #[strum(serialize = "shareIntroModal")]
    ShareIntro,
    #[strum(serialize = "loginModal")]
    Login,
    /// Confirmation for deleting a long-pressed message.
    #[strum(serialize = "modalMessageDelete")]
    MessageDelete,
    /// Owner-only theme editor.
    #[strum(serialize = "themeModal")]
    Theme,
}
