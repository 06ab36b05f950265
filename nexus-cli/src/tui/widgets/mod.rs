pub mod accordion;
pub mod carousel;
pub mod events;
pub mod fields;
pub mod reveal;

pub use accordion::{AccordionError, AccordionState};
pub use carousel::{CarouselError, CarouselState};
pub use fields::{TextInputField, TextInputState};
pub use reveal::{
    RevealController, RevealState, RevealTransition, ScrollDirection, TriggerZone,
};
