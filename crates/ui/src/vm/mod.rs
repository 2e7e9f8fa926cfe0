mod card_vm;
mod language_vm;
mod prompt_vm;

pub use card_vm::{CardIntent, CardVm};
pub use language_vm::{LanguageTileVm, map_language_tiles};
pub use prompt_vm::PromptVm;
