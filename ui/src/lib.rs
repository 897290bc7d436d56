//! Shared UI crate for The Market's Vote: the story page, its chapters and
//! the reading-journey widgets. Platform crates only launch [`views::Story`].

pub mod core;
pub mod i18n;
pub mod journey;
pub mod sections;
pub mod views;
pub mod widgets;

pub mod components {
    pub mod story_navbar;
    pub use story_navbar::StoryNavbar;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
