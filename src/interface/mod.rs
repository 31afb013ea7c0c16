//! Synchronous contracts with dice, human input and presentation.

pub mod providers;

pub use providers::{
    DiceCountChoiceProvider, DiceProvider, FixedDice, HumanChoice, HumanChoiceProvider,
    HumanInput, LogPresenter, NoHumanInput, NullPresenter, PresentError, Presenter,
    RecordingPresenter,
};
