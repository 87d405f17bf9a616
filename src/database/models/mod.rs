pub mod answer;
pub mod i18n;
pub mod question;
pub mod recipient;

pub use answer::*;
pub use i18n::*;
pub use question::*;
pub use recipient::*;
