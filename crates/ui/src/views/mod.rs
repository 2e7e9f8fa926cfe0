mod cards;
mod home;
mod prompt;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use cards::CardsView;
pub use home::HomeView;
pub use prompt::PromptView;
