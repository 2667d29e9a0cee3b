// Plain components
pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod dialog;
pub mod separator;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use empty_state::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
